use dioxus::prelude::*;

/// Full-screen confirmation prompt. Clicking outside the card cancels.
#[component]
pub fn ConfirmPopup(
    message: String,
    #[props(default = "Yes".to_string())] confirm_label: String,
    #[props(default = "No".to_string())] cancel_label: String,
    on_confirm: EventHandler<()>,
    on_cancel: EventHandler<()>,
) -> Element {
    rsx! {
        div {
            class: "modal-overlay",
            onclick: move |_| on_cancel.call(()),
            div {
                class: "modal-card",
                onclick: move |evt: Event<MouseData>| evt.stop_propagation(),
                p { class: "modal-message", "{message}" }
                div {
                    class: "modal-actions",
                    button {
                        class: "btn btn-confirm",
                        onclick: move |_| on_confirm.call(()),
                        "{confirm_label}"
                    }
                    button {
                        class: "btn btn-cancel",
                        onclick: move |_| on_cancel.call(()),
                        "{cancel_label}"
                    }
                }
            }
        }
    }
}
