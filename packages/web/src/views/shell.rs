//! Sidebar layout wrapping every authenticated screen.

use dioxus::prelude::*;

use ui::{use_session, ConfirmPopup};

use crate::Route;

#[component]
pub fn Shell() -> Element {
    let mut session = use_session();
    let nav = use_navigator();

    let mut sidebar_open = use_signal(|| false);
    let mut show_logout = use_signal(|| false);

    // UI-level guard only; the remote API is the real authority.
    if !session.is_authenticated() {
        nav.replace(Route::Login {});
    }

    let user = session.session();
    let user_name = user.user_name.unwrap_or_default();
    let profile_image = user.profile_image.filter(|image| !image.is_empty());

    let handle_logout = move |_| {
        show_logout.set(false);
        session.sign_out();
        tracing::info!("logged out");
        nav.push(Route::Login {});
    };

    rsx! {
        button {
            class: if sidebar_open() { "toggle-sidebar-btn open" } else { "toggle-sidebar-btn" },
            aria_label: "Toggle sidebar",
            onclick: move |_| sidebar_open.set(!sidebar_open()),
            if sidebar_open() { "\u{2715}" } else { "\u{2630}" }
        }

        div {
            class: "shell",
            aside {
                class: if sidebar_open() { "sidebar show" } else { "sidebar" },
                div {
                    class: "sidebar-top",
                    div { class: "brand-mark", "Catalog Admin" }

                    if let Some(image) = profile_image {
                        img { class: "profile-image", src: "{image}", alt: "Profile" }
                    }
                    h4 { class: "sidebar-user", "{user_name}" }

                    nav {
                        class: "sidebar-nav",
                        Link {
                            class: "nav-link",
                            to: Route::Products {},
                            onclick: move |_| sidebar_open.set(false),
                            "Products"
                        }
                        Link {
                            class: "nav-link",
                            to: Route::Favorites {},
                            onclick: move |_| sidebar_open.set(false),
                            "Favorites"
                        }
                        Link {
                            class: "nav-link",
                            to: Route::OrderList {},
                            onclick: move |_| sidebar_open.set(false),
                            "Order List"
                        }
                    }
                }

                button {
                    class: "logout-btn",
                    onclick: move |_| show_logout.set(true),
                    "Logout"
                }
            }

            main {
                class: "route-outlet",
                Outlet::<Route> {}
            }
        }

        if show_logout() {
            ConfirmPopup {
                message: "ARE YOU SURE YOU WANT TO LOG OUT?",
                on_confirm: handle_logout,
                on_cancel: move |_| show_logout.set(false),
            }
        }
    }
}
