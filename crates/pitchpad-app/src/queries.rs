//! Reactive pitch-collection query.
//!
//! The saved-design listing re-fetches whenever the signed-in user or the
//! store handle changes. With no signed-in user the fetch is skipped
//! entirely, so an unscoped query is never issued.

use std::sync::Arc;

use dioxus::prelude::*;

use pitchpad_core::auth::AuthSession;
use pitchpad_core::store::PitchStoreClient;
use pitchpad_core::PitchIdea;

/// Reads as `None` while the fetch is in flight. The inner value resolves to
/// `None` when no user is signed in or no store is configured; fetch failures
/// are logged and degrade to an empty listing.
pub type PitchesResource = Resource<Option<Vec<PitchIdea>>>;

pub fn use_pitches_query(
    client: ReadOnlySignal<Option<Arc<PitchStoreClient>>>,
    session: ReadOnlySignal<Option<AuthSession>>,
) -> PitchesResource {
    use_resource(move || {
        let client = client();
        let session = session();
        async move {
            let client = client?;
            let session = session?;
            let uid = session.user.id.clone();
            tracing::debug!("Fetching saved pitches for uid {}", uid);
            match client.list_pitches(&session.access_token, &uid).await {
                Ok(pitches) => Some(pitches),
                Err(error) => {
                    tracing::error!("Failed to fetch saved pitches: {}", error);
                    Some(Vec::new())
                }
            }
        }
    })
}
