//! Main application component

use std::sync::Arc;

use dioxus::prelude::*;

use pitchpad_core::store::PitchStoreClient;

use crate::config::BootstrapConfig;
use crate::services::AuthService;
use crate::state::{AppState, AppView};
use crate::views::{LoginPage, PitchesPage};

/// Root application component
#[component]
pub fn App() -> Element {
    // State signals
    let view = use_signal(|| AppView::Pitches);
    let mut auth_service: Signal<Option<Arc<AuthService>>> = use_signal(|| None);
    let mut auth_session = use_signal(|| None);
    let mut auth_loading = use_signal(|| true);
    let mut auth_error = use_signal(|| None);
    let mut store_client: Signal<Option<Arc<PitchStoreClient>>> = use_signal(|| None);
    let mut bootstrapped = use_signal(|| false);

    // Bootstrap services and restore the persisted session (only once)
    use_effect(move || {
        if bootstrapped() {
            return;
        }
        bootstrapped.set(true); // Mark immediately to prevent double init

        let config = BootstrapConfig::from_env();

        if let Some(base_url) = config.api_base_url.clone() {
            match PitchStoreClient::new(base_url) {
                Ok(client) => store_client.set(Some(Arc::new(client))),
                Err(error) => {
                    tracing::error!("Failed to construct pitch store client: {}", error);
                }
            }
        } else {
            tracing::warn!("No pitch store configured; the listing will stay empty");
        }

        let service = match AuthService::new_from_bootstrap(&config) {
            Ok(Some(service)) => Some(Arc::new(service)),
            Ok(None) => {
                tracing::warn!("Auth is not configured; sign-in is unavailable");
                None
            }
            Err(error) => {
                tracing::error!("Failed to initialize auth service: {}", error);
                auth_error.set(Some(error.to_string()));
                None
            }
        };
        auth_service.set(service.clone());

        if let Some(service) = service {
            spawn(async move {
                match service.restore_session().await {
                    Ok(session) => auth_session.set(session),
                    Err(error) => {
                        tracing::error!("Failed to restore session: {}", error);
                        auth_error.set(Some(error.to_string()));
                    }
                }
                auth_loading.set(false);
            });
        } else {
            auth_loading.set(false);
        }
    });

    use_context_provider(|| AppState {
        view,
        auth_service,
        auth_session,
        auth_loading,
        auth_error,
        store_client,
    });

    rsx! {
        div {
            class: "app-container",
            style: "
                min-height: 100vh;
                font-family: system-ui, -apple-system, sans-serif;
                background: #f9fafb;
                color: #111827;
            ",
            match view() {
                AppView::Pitches => rsx! { PitchesPage {} },
                AppView::Login => rsx! { LoginPage {} },
            }
        }
    }
}
