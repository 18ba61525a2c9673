//! Account creation page.

use dioxus::prelude::*;

use api::RegisterPayload;
use store::Session;
use ui::{use_session, use_toast, validate, PickedImage, UploadBox};

use crate::{api_client, Route};

use super::login::REDIRECT_DELAY;

#[component]
pub fn SignUp() -> Element {
    let mut session = use_session();
    let mut toast = use_toast();
    let nav = use_navigator();

    let mut first_name = use_signal(String::new);
    let mut last_name = use_signal(String::new);
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut confirm_password = use_signal(String::new);
    let mut picked_image = use_signal(|| Option::<PickedImage>::None);

    let mut first_name_error = use_signal(|| Option::<String>::None);
    let mut last_name_error = use_signal(|| Option::<String>::None);
    let mut email_error = use_signal(|| Option::<String>::None);
    let mut password_error = use_signal(|| Option::<String>::None);
    let mut confirm_error = use_signal(|| Option::<String>::None);
    let mut loading = use_signal(|| false);

    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();
        spawn(async move {
            let first = first_name.peek().trim().to_string();
            let last = last_name.peek().trim().to_string();
            let email_value = email.peek().trim().to_string();
            let password_value = password.peek().clone();
            let confirmation = confirm_password.peek().clone();

            first_name_error.set(validate::required(&first, "First name"));
            last_name_error.set(validate::required(&last, "Last name"));
            email_error.set(validate::email_format(&email_value));
            password_error.set(validate::min_password(&password_value));
            confirm_error.set(validate::passwords_match(&password_value, &confirmation));

            let invalid = first_name_error.peek().is_some()
                || last_name_error.peek().is_some()
                || email_error.peek().is_some()
                || password_error.peek().is_some()
                || confirm_error.peek().is_some();
            if invalid {
                return;
            }

            let user_name = format!("{first}_{last}");
            let image = picked_image.peek().clone();
            let payload = RegisterPayload {
                first_name: first,
                last_name: last,
                user_name: user_name.clone(),
                email: email_value,
                password: password_value,
                password_confirmation: confirmation,
                profile_image: image.as_ref().map(|picked| picked.file.clone()),
            };

            loading.set(true);
            match api_client().register(payload).await {
                Ok(token) => {
                    // The data-URL preview doubles as the persisted avatar.
                    session.sign_in(Session {
                        token: Some(token),
                        user_name: Some(user_name),
                        profile_image: image.map(|picked| picked.preview_url),
                    });
                    toast.success("Account created!");
                    ui::sleep(REDIRECT_DELAY).await;
                    nav.push(Route::Products {});
                }
                Err(api::ApiError::Validation(errors)) => {
                    loading.set(false);
                    toast.error(errors.to_string());
                }
                Err(err) => {
                    tracing::error!("signup failed: {err}");
                    loading.set(false);
                    toast.error("An error occurred. Please try again.");
                }
            }
        });
    };

    rsx! {
        div {
            class: "auth-page",
            div {
                class: "auth-card auth-card-wide",
                div { class: "brand-mark", "Catalog Admin" }
                h1 { class: "auth-title", "Sign up" }
                p { class: "auth-subtitle", "Fill in the following fields to create an account." }

                form {
                    class: "auth-form",
                    onsubmit: handle_submit,

                    div {
                        class: "form-row",
                        div {
                            class: "form-field",
                            label { r#for: "signup-first", "First Name" }
                            input {
                                id: "signup-first",
                                r#type: "text",
                                placeholder: "First Name",
                                class: if first_name_error().is_some() { "input input-invalid" } else { "input" },
                                value: first_name(),
                                oninput: move |evt| first_name.set(evt.value()),
                            }
                            if let Some(message) = first_name_error() {
                                p { class: "field-error", "{message}" }
                            }
                        }
                        div {
                            class: "form-field",
                            label { r#for: "signup-last", "Last Name" }
                            input {
                                id: "signup-last",
                                r#type: "text",
                                placeholder: "Last Name",
                                class: if last_name_error().is_some() { "input input-invalid" } else { "input" },
                                value: last_name(),
                                oninput: move |evt| last_name.set(evt.value()),
                            }
                            if let Some(message) = last_name_error() {
                                p { class: "field-error", "{message}" }
                            }
                        }
                    }

                    div {
                        class: "form-field",
                        label { r#for: "signup-email", "Email" }
                        input {
                            id: "signup-email",
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
                        class: "form-row",
                        div {
                            class: "form-field",
                            label { r#for: "signup-password", "Password" }
                            input {
                                id: "signup-password",
                                r#type: "password",
                                placeholder: "Enter password",
                                class: if password_error().is_some() { "input input-invalid" } else { "input" },
                                value: password(),
                                oninput: move |evt| password.set(evt.value()),
                            }
                            if let Some(message) = password_error() {
                                p { class: "field-error", "{message}" }
                            }
                        }
                        div {
                            class: "form-field",
                            label { r#for: "signup-confirm", "Confirm Password" }
                            input {
                                id: "signup-confirm",
                                r#type: "password",
                                placeholder: "Re-enter your password",
                                class: if confirm_error().is_some() { "input input-invalid" } else { "input" },
                                value: confirm_password(),
                                oninput: move |evt| confirm_password.set(evt.value()),
                            }
                            if let Some(message) = confirm_error() {
                                p { class: "field-error", "{message}" }
                            }
                        }
                    }

                    div {
                        class: "form-field",
                        label { "Profile Picture" }
                        UploadBox {
                            id: "signup-image",
                            preview: picked_image().map(|picked| picked.preview_url),
                            on_pick: move |picked| picked_image.set(Some(picked)),
                        }
                    }

                    button {
                        class: "btn btn-primary btn-block",
                        r#type: "submit",
                        disabled: loading(),
                        if loading() { "Loading..." } else { "SIGN UP" }
                    }
                }

                p {
                    class: "auth-switch",
                    "Do you have an account? "
                    Link { class: "auth-link", to: Route::Login {}, "Sign in" }
                }
            }
        }
    }
}
