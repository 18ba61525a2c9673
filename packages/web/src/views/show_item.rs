//! Read-only product detail.

use dioxus::prelude::*;

use api::{ItemDetail, ItemId};
use ui::{use_session, Spinner};

use crate::{api_client, Route};

use super::FALLBACK_IMAGE;

#[component]
pub fn ShowItem(id: String) -> Element {
    let mut session = use_session();

    let mut item_id = use_signal(|| id.clone());
    if *item_id.peek() != id {
        item_id.set(id.clone());
    }

    let mut detail = use_signal(|| Option::<ItemDetail>::None);
    let mut loading = use_signal(|| true);
    let mut load_error = use_signal(|| Option::<String>::None);
    let mut generation = use_signal(|| 0u32);

    let _loader = use_resource(move || async move {
        let target = ItemId::from(item_id());
        let this_generation = *generation.peek() + 1;
        generation.set(this_generation);
        loading.set(true);
        load_error.set(None);

        match api_client().get_item(&session.token(), &target).await {
            Ok(body) => {
                if *generation.peek() == this_generation {
                    detail.set(Some(body));
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
    let Some(item) = detail() else {
        return rsx! {
            div { class: "load-error", "Product not found." }
        };
    };

    rsx! {
        div {
            class: "item-detail-page",
            DetailImage { url: item.image_url.clone(), name: item.name.clone() }
            div {
                class: "item-detail-body",
                h1 { class: "page-title", "{item.name}" }
                p { class: "item-detail-price", "${item.price}" }
                Link {
                    class: "btn btn-secondary",
                    to: Route::Products {},
                    "Back to products"
                }
            }
        }
    }
}

#[component]
fn DetailImage(url: String, name: String) -> Element {
    let mut src = use_signal(|| {
        if url.is_empty() {
            FALLBACK_IMAGE.to_string()
        } else {
            url.clone()
        }
    });

    rsx! {
        img {
            class: "item-detail-image",
            src: "{src}",
            alt: "{name}",
            onerror: move |_| src.set(FALLBACK_IMAGE.to_string()),
        }
    }
}
