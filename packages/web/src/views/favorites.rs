//! Placeholder screen reachable from the sidebar.

use dioxus::prelude::*;

#[component]
pub fn Favorites() -> Element {
    rsx! {
        div {
            class: "stub-page",
            h1 { class: "page-title", "Favorites" }
            p { "Nothing here yet." }
        }
    }
}
