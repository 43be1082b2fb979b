//! Authentication service with secure session storage.

use keyring::Entry;

use crate::config::BootstrapConfig;

use pitchpad_core::auth::{
    resolve_optional_auth_config, AuthClient, AuthError, AuthResult, AuthSession,
    SessionPersistence,
};

const KEYRING_SERVICE_NAME: &str = "pitchpad";
const KEYRING_SESSION_USERNAME: &str = "auth_session";

#[derive(Debug, Clone)]
struct SessionStore {
    service_name: String,
    username: String,
}

impl Default for SessionStore {
    fn default() -> Self {
        Self {
            service_name: KEYRING_SERVICE_NAME.to_string(),
            username: KEYRING_SESSION_USERNAME.to_string(),
        }
    }
}

impl SessionStore {
    fn entry(&self) -> AuthResult<Entry> {
        Entry::new(&self.service_name, &self.username)
            .map_err(|error| AuthError::SecureStorage(error.to_string()))
    }
}

impl SessionPersistence for SessionStore {
    fn load_session(&self) -> AuthResult<Option<AuthSession>> {
        let entry = self.entry()?;
        match entry.get_password() {
            Ok(raw) => Ok(Some(serde_json::from_str(&raw)?)),
            Err(keyring::Error::NoEntry) => Ok(None),
            Err(error) => Err(AuthError::SecureStorage(error.to_string())),
        }
    }

    fn save_session(&self, session: &AuthSession) -> AuthResult<()> {
        let serialized = serde_json::to_string(session)?;
        self.entry()?
            .set_password(&serialized)
            .map_err(|error| AuthError::SecureStorage(error.to_string()))
    }

    fn clear_session(&self) -> AuthResult<()> {
        let entry = self.entry()?;
        match entry.delete_credential() {
            Ok(()) | Err(keyring::Error::NoEntry) => Ok(()),
            Err(error) => Err(AuthError::SecureStorage(error.to_string())),
        }
    }
}

#[derive(Clone)]
pub struct AuthService {
    inner: AuthClient<SessionStore>,
}

impl AuthService {
    /// Builds the service from bootstrap configuration.
    ///
    /// Returns `Ok(None)` when auth is not configured for this build.
    pub fn new_from_bootstrap(config: &BootstrapConfig) -> AuthResult<Option<Self>> {
        let Some((url, anon_key)) =
            resolve_optional_auth_config(config.auth_url.clone(), config.auth_anon_key.clone())?
        else {
            return Ok(None);
        };

        Ok(Some(Self::new(url, anon_key)?))
    }

    pub fn new(url: impl AsRef<str>, anon_key: impl Into<String>) -> AuthResult<Self> {
        Ok(Self {
            inner: AuthClient::new(url, anon_key, SessionStore::default())?,
        })
    }

    pub async fn restore_session(&self) -> AuthResult<Option<AuthSession>> {
        self.inner.restore_session().await
    }

    pub async fn sign_in(&self, email: &str, password: &str) -> AuthResult<AuthSession> {
        self.inner.sign_in(email, password).await
    }

    pub async fn sign_out(&self, access_token: &str) -> AuthResult<()> {
        self.inner.sign_out(access_token).await
    }
}
