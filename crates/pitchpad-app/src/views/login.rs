//! Sign-in view

use dioxus::prelude::*;

use crate::components::{Button, ButtonVariant, Card, CardContent, CardHeader, CardTitle};
use crate::state::{AppState, AppView};

/// Email/password sign-in screen
#[component]
pub fn LoginPage() -> Element {
    let mut state = use_context::<AppState>();
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut working = use_signal(|| false);

    let auth_available = (state.auth_service)().is_some();
    let auth_error = (state.auth_error)();

    let on_sign_in = move |_| {
        let Some(service) = (state.auth_service)() else {
            return;
        };
        let email_value = email();
        let password_value = password();

        spawn(async move {
            working.set(true);
            state.auth_error.set(None);
            match service.sign_in(&email_value, &password_value).await {
                Ok(session) => {
                    tracing::info!("Signed in as {}", session.user.id);
                    state.auth_session.set(Some(session));
                    state.view.set(AppView::Pitches);
                }
                Err(error) => {
                    tracing::warn!("Sign-in failed: {}", error);
                    state.auth_error.set(Some(error.to_string()));
                }
            }
            working.set(false);
        });
    };

    rsx! {
        div {
            style: "display: flex; min-height: 100vh; align-items: center; justify-content: center; padding: 20px;",

            Card {
                style: "width: 100%; max-width: 360px;",

                CardHeader {
                    CardTitle { "Log in to PitchPad" }
                }

                CardContent {
                    style: "display: flex; flex-direction: column; gap: 10px;",

                    if auth_available {
                        input {
                            r#type: "email",
                            placeholder: "Email",
                            value: "{email}",
                            disabled: working(),
                            style: "padding: 8px 10px; border: 1px solid #d1d5db; border-radius: 8px; font-size: 14px;",
                            oninput: move |event: FormEvent| email.set(event.value()),
                        }
                        input {
                            r#type: "password",
                            placeholder: "Password",
                            value: "{password}",
                            disabled: working(),
                            style: "padding: 8px 10px; border: 1px solid #d1d5db; border-radius: 8px; font-size: 14px;",
                            oninput: move |event: FormEvent| password.set(event.value()),
                        }
                        Button {
                            variant: ButtonVariant::Primary,
                            disabled: working(),
                            onclick: on_sign_in,
                            "Sign In"
                        }
                    } else {
                        p {
                            style: "margin: 0; font-size: 13px; color: #6b7280;",
                            "Authentication is unavailable in this build."
                        }
                    }

                    if working() {
                        p {
                            style: "margin: 0; font-size: 13px; color: #6b7280;",
                            "Working..."
                        }
                    }

                    if let Some(message) = auth_error {
                        p {
                            style: "margin: 0; font-size: 13px; color: #dc2626;",
                            "{message}"
                        }
                    }

                    Button {
                        variant: ButtonVariant::Ghost,
                        onclick: move |_| state.view.set(AppView::Pitches),
                        "Back to saved designs"
                    }
                }
            }
        }
    }
}
