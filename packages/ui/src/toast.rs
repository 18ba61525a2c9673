//! Toast notifications: one visible toast at a time, success or danger,
//! auto-dismissed after three seconds. Showing a newer toast supersedes the
//! pending dismissal of the previous one.

use std::time::Duration;

use dioxus::prelude::*;

use crate::timer::sleep;

const AUTO_DISMISS: Duration = Duration::from_secs(3);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastVariant {
    Success,
    Danger,
}

#[derive(Clone, PartialEq)]
struct ToastState {
    message: String,
    variant: ToastVariant,
    generation: u32,
}

/// Get the toast handle. Requires a [`ToastProvider`] above in the tree.
pub fn use_toast() -> Toasts {
    use_context::<Toasts>()
}

#[derive(Clone, Copy, PartialEq)]
pub struct Toasts {
    current: Signal<Option<ToastState>>,
    counter: Signal<u32>,
}

impl Toasts {
    pub fn success(&mut self, message: impl Into<String>) {
        self.show(message.into(), ToastVariant::Success);
    }

    pub fn error(&mut self, message: impl Into<String>) {
        self.show(message.into(), ToastVariant::Danger);
    }

    pub fn dismiss(&mut self) {
        self.current.set(None);
    }

    fn show(&mut self, message: String, variant: ToastVariant) {
        let generation = *self.counter.peek() + 1;
        self.counter.set(generation);
        self.current.set(Some(ToastState {
            message,
            variant,
            generation,
        }));

        let counter = self.counter;
        let mut current = self.current;
        spawn(async move {
            sleep(AUTO_DISMISS).await;
            // A newer toast owns the timer now.
            if *counter.peek() == generation {
                current.set(None);
            }
        });
    }
}

/// Provider that renders the active toast above its children.
#[component]
pub fn ToastProvider(children: Element) -> Element {
    let current = use_signal(|| Option::<ToastState>::None);
    let counter = use_signal(|| 0u32);
    let mut toasts = use_context_provider(|| Toasts { current, counter });

    rsx! {
        {children}

        if let Some(toast) = current() {
            div {
                class: "toast-container",
                div {
                    class: if toast.variant == ToastVariant::Success { "toast toast-success" } else { "toast toast-danger" },
                    role: "alert",
                    span { class: "toast-body", "{toast.message}" }
                    button {
                        class: "toast-close",
                        onclick: move |_| toasts.dismiss(),
                        "\u{00d7}"
                    }
                }
            }
        }
    }
}
