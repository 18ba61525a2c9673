//! Edit-product form: fetches the current values, lets the user change any
//! of them, and only uploads an image when a replacement was picked.

use dioxus::prelude::*;

use api::{ItemId, UpdateItem};
use ui::{use_session, use_toast, validate, PickedImage, Spinner, UploadBox};

use crate::{api_client, Route};

use super::login::REDIRECT_DELAY;

#[component]
pub fn EditItem(id: String) -> Element {
    let mut session = use_session();
    let mut toast = use_toast();
    let nav = use_navigator();

    // Mirror the route param into a signal so the loader reruns when the
    // router swaps the id under the same mounted component.
    let mut item_id = use_signal(|| id.clone());
    if *item_id.peek() != id {
        item_id.set(id.clone());
    }

    let mut name = use_signal(String::new);
    let mut price = use_signal(String::new);
    let mut existing_image = use_signal(String::new);
    let mut picked_image = use_signal(|| Option::<PickedImage>::None);

    let mut name_error = use_signal(|| Option::<String>::None);
    let mut price_error = use_signal(|| Option::<String>::None);
    let mut image_error = use_signal(|| Option::<String>::None);

    let mut loading = use_signal(|| true);
    let mut load_error = use_signal(|| Option::<String>::None);
    let mut saving = use_signal(|| false);
    let mut generation = use_signal(|| 0u32);

    let _loader = use_resource(move || async move {
        let target = ItemId::from(item_id());
        let this_generation = *generation.peek() + 1;
        generation.set(this_generation);
        loading.set(true);
        load_error.set(None);

        match api_client().get_item(&session.token(), &target).await {
            Ok(detail) => {
                if *generation.peek() == this_generation {
                    name.set(detail.name);
                    price.set(detail.price);
                    existing_image.set(detail.image_url);
                    picked_image.set(None);
                    loading.set(false);
                }
            }
            Err(err) if err.is_unauthorized() => session.expire(),
            Err(err) => {
                tracing::error!("failed to load product {target}: {err}");
                if *generation.peek() == this_generation {
                    load_error.set(Some("Failed to load product.".to_string()));
                    loading.set(false);
                }
            }
        }
    });

    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();
        spawn(async move {
            let name_value = name.peek().trim().to_string();
            let price_value = price.peek().trim().to_string();
            let image = picked_image.peek().clone();

            name_error.set(validate::required(&name_value, "Name"));
            price_error.set(validate::price_format(&price_value));
            // The item already has an image on the server, so a fresh pick
            // is only mandatory when none exists.
            image_error.set(
                if image.is_none() && existing_image.peek().is_empty() {
                    Some("Image is required".to_string())
                } else {
                    None
                },
            );

            if name_error.peek().is_some()
                || price_error.peek().is_some()
                || image_error.peek().is_some()
            {
                return;
            }

            saving.set(true);
            let target = ItemId::from(item_id.peek().clone());
            let item = UpdateItem {
                name: name_value,
                price: price_value,
                image: image.map(|picked| picked.file),
            };
            match api_client().update_item(&session.token(), &target, item).await {
                Ok(()) => {
                    toast.success("Product updated successfully!");
                    ui::sleep(REDIRECT_DELAY).await;
                    nav.push(Route::Products {});
                }
                Err(err) if err.is_unauthorized() => session.expire(),
                Err(api::ApiError::Validation(errors)) => {
                    saving.set(false);
                    if let Some(message) = errors.first("image") {
                        image_error.set(Some(message.to_string()));
                    } else {
                        toast.error(errors.to_string());
                    }
                }
                Err(err) => {
                    tracing::error!("update item failed: {err}");
                    saving.set(false);
                    toast.error("Failed to update product.");
                }
            }
        });
    };

    if loading() {
        return rsx! {
            Spinner { label: "Loading product..." }
        };
    }
    if let Some(message) = load_error() {
        return rsx! {
            div { class: "load-error", "{message}" }
        };
    }

    let preview = picked_image()
        .map(|picked| picked.preview_url)
        .or_else(|| {
            let url = existing_image();
            (!url.is_empty()).then_some(url)
        });

    rsx! {
        div {
            class: "item-form-page",
            h1 { class: "page-title", "Edit Product" }

            form {
                class: "item-form",
                onsubmit: handle_submit,

                div {
                    class: "form-field",
                    label { r#for: "item-name", "Name" }
                    input {
                        id: "item-name",
                        r#type: "text",
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
                        preview,
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
                        disabled: saving(),
                        if saving() { "Saving..." } else { "UPDATE PRODUCT" }
                    }
                }
            }
        }
    }
}
