//! Create-product form.

use dioxus::prelude::*;

use api::NewItem;
use ui::{use_session, use_toast, validate, PickedImage, UploadBox};

use crate::{api_client, Route};

use super::login::REDIRECT_DELAY;

#[component]
pub fn AddItem() -> Element {
    let mut session = use_session();
    let mut toast = use_toast();
    let nav = use_navigator();

    let mut name = use_signal(String::new);
    let mut price = use_signal(String::new);
    let mut picked_image = use_signal(|| Option::<PickedImage>::None);

    let mut name_error = use_signal(|| Option::<String>::None);
    let mut price_error = use_signal(|| Option::<String>::None);
    let mut image_error = use_signal(|| Option::<String>::None);
    let mut loading = use_signal(|| false);

    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();
        spawn(async move {
            let name_value = name.peek().trim().to_string();
            let price_value = price.peek().trim().to_string();
            let image = picked_image.peek().clone();

            name_error.set(validate::required(&name_value, "Name"));
            price_error.set(validate::price_format(&price_value));
            image_error.set(if image.is_none() {
                Some("Image is required".to_string())
            } else {
                None
            });

            let Some(image) = image else { return };
            if name_error.peek().is_some() || price_error.peek().is_some() {
                return;
            }

            loading.set(true);
            let item = NewItem {
                name: name_value,
                price: price_value,
                image: image.file,
            };
            match api_client().create_item(&session.token(), item).await {
                Ok(()) => {
                    toast.success("Product added successfully!");
                    ui::sleep(REDIRECT_DELAY).await;
                    nav.push(Route::Products {});
                }
                Err(err) if err.is_unauthorized() => session.expire(),
                Err(api::ApiError::Validation(errors)) => {
                    loading.set(false);
                    // The image rejection renders inline next to the upload
                    // box; everything else goes through the toast.
                    if let Some(message) = errors.first("image") {
                        image_error.set(Some(message.to_string()));
                    } else {
                        toast.error(errors.to_string());
                    }
                }
                Err(err) => {
                    tracing::error!("create item failed: {err}");
                    loading.set(false);
                    toast.error("Failed to add product.");
                }
            }
        });
    };

    rsx! {
        div {
            class: "item-form-page",
            h1 { class: "page-title", "Add Product" }

            form {
                class: "item-form",
                onsubmit: handle_submit,

                div {
                    class: "form-field",
                    label { r#for: "item-name", "Name" }
                    input {
                        id: "item-name",
                        r#type: "text",
                        placeholder: "Product name",
                        class: if name_error().is_some() { "input input-invalid" } else { "input" },
                        value: name(),
                        oninput: move |evt| name.set(evt.value()),
                    }
                    if let Some(message) = name_error() {
                        p { class: "field-error", "{message}" }
                    }
                }

                div {
                    class: "form-field",
                    label { r#for: "item-price", "Price" }
                    input {
                        id: "item-price",
                        r#type: "text",
                        placeholder: "0.00",
                        class: if price_error().is_some() { "input input-invalid" } else { "input" },
                        value: price(),
                        oninput: move |evt| price.set(evt.value()),
                    }
                    if let Some(message) = price_error() {
                        p { class: "field-error", "{message}" }
                    }
                }

                div {
                    class: "form-field",
                    label { "Image" }
                    UploadBox {
                        id: "item-image",
                        preview: picked_image().map(|picked| picked.preview_url),
                        invalid: image_error().is_some(),
                        on_pick: move |picked| {
                            image_error.set(None);
                            picked_image.set(Some(picked));
                        },
                    }
                    if let Some(message) = image_error() {
                        p { class: "field-error", "{message}" }
                    }
                }

                div {
                    class: "form-actions",
                    button {
                        class: "btn btn-secondary",
                        r#type: "button",
                        onclick: move |_| { nav.push(Route::Products {}); },
                        "Cancel"
                    }
                    button {
                        class: "btn btn-primary",
                        r#type: "submit",
                        disabled: loading(),
                        if loading() { "Saving..." } else { "ADD PRODUCT" }
                    }
                }
            }
        }
    }
}
