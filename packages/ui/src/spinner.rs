use dioxus::prelude::*;

/// Centered loading spinner with an optional label.
#[component]
pub fn Spinner(#[props(default)] label: String) -> Element {
    rsx! {
        div {
            class: "spinner-row",
            role: "status",
            div { class: "spinner" }
            if !label.is_empty() {
                span { class: "spinner-label", "{label}" }
            }
        }
    }
}
