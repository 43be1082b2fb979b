//! HTTP client for the managed pitch store.
//!
//! The store owns the saved designs; this client only reads the user-scoped
//! collection. No retries and no mutation live here.

use crate::error::{Error, Result};
use crate::models::PitchIdea;
use crate::util::{compact_text, is_http_url};

/// Read-only client for a user's saved pitch ideas.
#[derive(Debug, Clone)]
pub struct PitchStoreClient {
    base_url: String,
    client: reqwest::Client,
}

impl PitchStoreClient {
    /// Builds a client for an explicit API base URL.
    pub fn new(base_url: impl Into<String>) -> Result<Self> {
        let base_url = normalize_base_url(base_url.into().as_str())?;
        let client = reqwest::Client::builder().build()?;
        Ok(Self { base_url, client })
    }

    /// Returns the base URL this client was configured with.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Fetch every saved pitch idea owned by `uid`.
    ///
    /// The returned order is whatever the store happens to produce; callers
    /// sort with [`crate::listing::sorted_pitches`].
    pub async fn list_pitches(&self, access_token: &str, uid: &str) -> Result<Vec<PitchIdea>> {
        let encoded_uid = urlencoding::encode(uid);
        let url = format!("{}/v1/users/{}/pitches", self.base_url, encoded_uid);

        let response = self
            .client
            .get(url)
            .bearer_auth(access_token)
            .header("Accept", "application/json")
            .send()
            .await?;
        if !response.status().is_success() {
            let status = response.status().as_u16();
            let body = response.text().await.unwrap_or_default();
            return Err(Error::Api(format!(
                "Pitch listing failed with HTTP {status}: {}",
                compact_text(&body)
            )));
        }

        let body = response.text().await?;
        let pitches = decode_pitches(&body)?;
        tracing::debug!("Fetched {} pitches for uid {}", pitches.len(), uid);
        Ok(pitches)
    }
}

fn decode_pitches(body: &str) -> Result<Vec<PitchIdea>> {
    Ok(serde_json::from_str(body)?)
}

fn normalize_base_url(raw: &str) -> Result<String> {
    let trimmed = raw.trim().trim_end_matches('/');
    if trimmed.is_empty() {
        return Err(Error::InvalidConfiguration(
            "Store API base URL must not be empty",
        ));
    }
    if !is_http_url(trimmed) {
        return Err(Error::InvalidConfiguration(
            "Store API base URL must include http:// or https://",
        ));
    }
    Ok(trimmed.to_string())
}
