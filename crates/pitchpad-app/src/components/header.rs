//! App header bar

use dioxus::prelude::*;

use crate::components::{Button, ButtonVariant};
use crate::state::{AppState, AppView};

#[component]
pub fn Header() -> Element {
    let mut state = use_context::<AppState>();
    let identity = state.signed_in_identity();

    let on_sign_out = move |_| {
        let auth_service = (state.auth_service)();
        let session = (state.auth_session)();
        spawn(async move {
            if let (Some(service), Some(session)) = (auth_service, session) {
                // The stored session is cleared before revocation, so an
                // unreachable backend cannot sign the user back in later.
                if let Err(error) = service.sign_out(&session.access_token).await {
                    tracing::warn!("Sign-out request failed: {}", error);
                }
            }
            state.auth_session.set(None);
            state.view.set(AppView::Login);
        });
    };

    rsx! {
        header {
            class: "app-header",
            style: "
                display: flex;
                align-items: center;
                justify-content: space-between;
                padding: 12px 24px;
                border-bottom: 1px solid #e5e7eb;
                background: #ffffff;
            ",
            div {
                style: "font-size: 18px; font-weight: 700;",
                "PitchPad"
            }
            div {
                style: "display: flex; align-items: center; gap: 12px;",
                if let Some(identity) = identity {
                    span {
                        style: "font-size: 13px; color: #6b7280;",
                        "Signed in as {identity}"
                    }
                    Button {
                        variant: ButtonVariant::Ghost,
                        onclick: on_sign_out,
                        "Sign Out"
                    }
                }
            }
        }
    }
}
