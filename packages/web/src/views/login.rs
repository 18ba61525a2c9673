//! Sign-in page.

use std::time::Duration;

use dioxus::prelude::*;

use store::Session;
use ui::{use_session, use_toast, validate};

use crate::{api_client, Route};

/// Delay between the success toast appearing and the redirect.
pub(crate) const REDIRECT_DELAY: Duration = Duration::from_millis(1500);

#[component]
pub fn Login() -> Element {
    let mut session = use_session();
    let mut toast = use_toast();
    let nav = use_navigator();

    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut email_error = use_signal(|| Option::<String>::None);
    let mut password_error = use_signal(|| Option::<String>::None);
    let mut loading = use_signal(|| false);

    let handle_login = move |evt: FormEvent| {
        evt.prevent_default();
        spawn(async move {
            let email_value = email.peek().trim().to_string();
            let password_value = password.peek().trim().to_string();

            email_error.set(validate::email_format(&email_value));
            password_error.set(validate::required(&password_value, "Password"));
            if email_error.peek().is_some() || password_error.peek().is_some() {
                return;
            }

            loading.set(true);
            match api_client().login(&email_value, &password_value).await {
                Ok(response) => {
                    session.sign_in(Session {
                        token: Some(response.token),
                        user_name: Some(response.user.user_name),
                        profile_image: response.user.profile_image_url,
                    });
                    toast.success("Login successful!");
                    ui::sleep(REDIRECT_DELAY).await;
                    nav.push(Route::Products {});
                }
                Err(err) if err.is_unauthorized() => {
                    loading.set(false);
                    toast.error("Email or password is incorrect");
                }
                Err(err) => {
                    tracing::error!("login failed: {err}");
                    loading.set(false);
                    toast.error("Sign in failed. Please try again.");
                }
            }
        });
    };

    rsx! {
        div {
            class: "auth-page",
            div {
                class: "auth-card",
                div { class: "brand-mark", "Catalog Admin" }
                h1 { class: "auth-title", "Sign In" }
                p { class: "auth-subtitle", "Enter your credentials to access your account" }

                form {
                    class: "auth-form",
                    onsubmit: handle_login,

                    div {
                        class: "form-field",
                        label { r#for: "login-email", "Email" }
                        input {
                            id: "login-email",
                            r#type: "email",
                            placeholder: "Enter your email",
                            class: if email_error().is_some() { "input input-invalid" } else { "input" },
                            value: email(),
                            oninput: move |evt| email.set(evt.value()),
                        }
                        if let Some(message) = email_error() {
                            p { class: "field-error", "{message}" }
                        }
                    }

                    div {
                        class: "form-field",
                        label { r#for: "login-password", "Password" }
                        input {
                            id: "login-password",
                            r#type: "password",
                            placeholder: "Enter your password",
                            class: if password_error().is_some() { "input input-invalid" } else { "input" },
                            value: password(),
                            oninput: move |evt| password.set(evt.value()),
                        }
                        if let Some(message) = password_error() {
                            p { class: "field-error", "{message}" }
                        }
                    }

                    button {
                        class: "btn btn-primary btn-block",
                        r#type: "submit",
                        disabled: loading(),
                        if loading() { "Signing in..." } else { "SIGN IN" }
                    }
                }

                p {
                    class: "auth-switch",
                    "Don't have an account? "
                    Link { class: "auth-link", to: Route::SignUp {}, "Create one" }
                }
            }
        }
    }
}
