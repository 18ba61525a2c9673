//! Placeholder screen reachable from the sidebar.

use dioxus::prelude::*;

#[component]
pub fn OrderList() -> Element {
    rsx! {
        div {
            class: "stub-page",
            h1 { class: "page-title", "Order List" }
            p { "Nothing here yet." }
        }
    }
}
