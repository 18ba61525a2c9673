//! Product list: fetch-all, committed search, client-side pagination and
//! per-item delete with confirmation.

use dioxus::prelude::*;

use api::{ItemId, Product};
use ui::listing::{self, PageMarker};
use ui::{use_session, use_toast, ConfirmPopup, Spinner};

use crate::{api_client, Route};

use super::FALLBACK_IMAGE;

#[component]
pub fn Products() -> Element {
    let mut session = use_session();
    let mut toast = use_toast();
    let nav = use_navigator();

    let mut products = use_signal(Vec::<Product>::new);
    let mut loading = use_signal(|| true);
    let mut error = use_signal(|| Option::<String>::None);

    // The input holds uncommitted text; `query` only changes when the user
    // presses Enter or clicks the search control.
    let mut search_input = use_signal(String::new);
    let mut query = use_signal(String::new);
    let mut current_page = use_signal(|| 1usize);

    let mut delete_target = use_signal(|| Option::<ItemId>::None);

    // Bumping `refresh` re-runs the loader; `generation` discards results of
    // superseded fetches so a slow response cannot overwrite a newer one.
    let mut refresh = use_signal(|| 0u32);
    let mut generation = use_signal(|| 0u32);

    let _loader = use_resource(move || async move {
        refresh();
        let this_generation = *generation.peek() + 1;
        generation.set(this_generation);
        loading.set(true);
        error.set(None);

        match api_client().list_items(&session.token()).await {
            Ok(items) => {
                if *generation.peek() == this_generation {
                    products.set(items);
                    loading.set(false);
                }
            }
            Err(err) if err.is_unauthorized() => session.expire(),
            Err(err) => {
                tracing::error!("failed to load products: {err}");
                if *generation.peek() == this_generation {
                    error.set(Some("Failed to load products.".to_string()));
                    loading.set(false);
                }
            }
        }
    });

    let mut commit_search = move || {
        query.set(search_input.peek().clone());
        let filtered = listing::filter_by_name(&products.peek(), &query.peek());
        let total = listing::total_pages(filtered.len());
        let clamped = listing::clamp_page(*current_page.peek(), total);
        if clamped != *current_page.peek() {
            current_page.set(clamped);
        }
    };

    let confirm_delete = move |_| {
        // Taking the id closes the prompt immediately, so a second click
        // while the request is in flight finds nothing and cannot issue a
        // duplicate delete.
        let Some(id) = take_delete_target(delete_target) else {
            return;
        };
        spawn(async move {
            match api_client().delete_item(&session.token(), &id).await {
                Ok(()) => {
                    products.with_mut(|items| items.retain(|product| product.id != id));
                    toast.success("Product deleted successfully!");
                }
                Err(err) if err.is_unauthorized() => session.expire(),
                Err(err) => {
                    tracing::error!("failed to delete product {id}: {err}");
                    toast.error("Failed to delete product.");
                    // Refetch so the list matches the server again.
                    let next = *refresh.peek() + 1;
                    refresh.set(next);
                }
            }
        });
    };

    if loading() {
        return rsx! {
            Spinner { label: "Loading products..." }
        };
    }
    if let Some(message) = error() {
        return rsx! {
            div { class: "load-error", "{message}" }
        };
    }

    let filtered = listing::filter_by_name(&products(), &query());
    let total = listing::total_pages(filtered.len());
    let page = listing::clamp_page(current_page(), total);
    let current_items = listing::page_items(&filtered, page);
    let markers = listing::visible_pages(page, total);

    rsx! {
        div {
            class: "search-box",
            input {
                class: "input search-input",
                r#type: "text",
                placeholder: "Search product by name",
                value: search_input(),
                oninput: move |evt| search_input.set(evt.value()),
                onkeydown: move |evt: KeyboardEvent| {
                    if evt.key() == Key::Enter {
                        commit_search();
                    }
                },
            }
            button {
                class: "search-btn",
                aria_label: "Search",
                onclick: move |_| commit_search(),
                "\u{1f50d}"
            }
        }

        div {
            class: "list-toolbar",
            button {
                class: "btn btn-primary add-btn",
                onclick: move |_| { nav.push(Route::AddItem {}); },
                "ADD NEW PRODUCT"
            }
        }

        div {
            class: "product-grid",
            if current_items.is_empty() {
                p { class: "empty-note", "No products found." }
            } else {
                for product in current_items {
                    ProductCard {
                        key: "{product.id}",
                        product: product.clone(),
                        on_delete: move |id| delete_target.set(Some(id)),
                    }
                }
            }
        }

        if total > 1 {
            div {
                class: "pagination",
                button {
                    class: "btn-arrow",
                    disabled: page == 1,
                    onclick: move |_| current_page.set(page - 1),
                    "\u{2039}"
                }
                for (index, marker) in markers.into_iter().enumerate() {
                    match marker {
                        PageMarker::Page(number) => rsx! {
                            button {
                                key: "{index}",
                                class: if number == page { "pagination-btn active" } else { "pagination-btn" },
                                onclick: move |_| current_page.set(number),
                                "{number}"
                            }
                        },
                        PageMarker::Gap => rsx! {
                            span { key: "{index}", class: "pagination-gap", "..." }
                        },
                    }
                }
                button {
                    class: "btn-arrow",
                    disabled: page == total,
                    onclick: move |_| current_page.set(page + 1),
                    "\u{203a}"
                }
            }
        }

        if delete_target().is_some() {
            ConfirmPopup {
                message: "Are you sure you want to delete this product?",
                on_confirm: confirm_delete,
                on_cancel: move |_| delete_target.set(None),
            }
        }
    }
}

/// Pops the pending delete target. Confirmation goes through here so the id
/// can be claimed at most once per prompt.
fn take_delete_target(mut target: Signal<Option<ItemId>>) -> Option<ItemId> {
    target.take()
}

#[component]
fn ProductCard(product: Product, on_delete: EventHandler<ItemId>) -> Element {
    let mut image_src = use_signal(|| {
        if product.image_url.is_empty() {
            FALLBACK_IMAGE.to_string()
        } else {
            product.image_url.clone()
        }
    });

    let id = product.id.clone();
    let edit_id = product.id.clone();
    let show_id = product.id.clone();

    rsx! {
        div {
            class: "item-card",
            img {
                class: "item-image",
                src: "{image_src}",
                alt: "{product.name}",
                onerror: move |_| image_src.set(FALLBACK_IMAGE.to_string()),
            }
            div {
                class: "item-overlay",
                Link {
                    class: "item-title",
                    to: Route::ShowItem { id: show_id.to_string() },
                    h5 { "{product.name}" }
                }
                div {
                    class: "item-actions",
                    Link {
                        class: "btn edit-btn",
                        to: Route::EditItem { id: edit_id.to_string() },
                        "Edit"
                    }
                    button {
                        class: "btn delete-btn",
                        onclick: move |_| on_delete.call(id.clone()),
                        "Delete"
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use dioxus::prelude::*;

    use api::ItemId;

    use super::take_delete_target;

    #[test]
    fn delete_target_is_claimed_at_most_once() {
        fn run() -> Element {
            let target = use_signal(|| Some(ItemId::from("7")));

            assert_eq!(take_delete_target(target), Some(ItemId::from("7")));
            // A second confirmation while the first request is still in
            // flight finds nothing and must not issue another delete.
            assert_eq!(take_delete_target(target), None);

            rsx! {}
        }

        let mut dom = VirtualDom::new(run);
        dom.rebuild_in_place();
    }
}
