//! Application state management
//!
//! Global state accessible via Dioxus context providers.

use std::sync::Arc;

use dioxus::prelude::*;

use pitchpad_core::auth::AuthSession;
use pitchpad_core::store::PitchStoreClient;

use crate::services::AuthService;

/// Which top-level view the shell is showing.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AppView {
    Pitches,
    Login,
}

/// Global application state
#[derive(Clone, Copy)]
pub struct AppState {
    /// Active top-level view
    pub view: Signal<AppView>,
    /// Auth service if configured for this build
    pub auth_service: Signal<Option<Arc<AuthService>>>,
    /// Active auth session, if signed in
    pub auth_session: Signal<Option<AuthSession>>,
    /// Whether session restore is still in flight
    pub auth_loading: Signal<bool>,
    /// Last auth error for UI display
    pub auth_error: Signal<Option<String>>,
    /// Pitch store client, if configured
    pub store_client: Signal<Option<Arc<PitchStoreClient>>>,
}

impl AppState {
    /// Who is signed in, for the header: email when known, uid otherwise.
    #[must_use]
    pub fn signed_in_identity(&self) -> Option<String> {
        (self.auth_session)().map(|session| session.user.email.unwrap_or(session.user.id))
    }
}
