//! Service-account credentials supplied through the hosting environment.

use std::fmt;
use std::path::Path;

use budget::persistence::PersistenceError;
use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;

/// Inline service-account key JSON.
pub const SERVICE_ACCOUNT_ENV: &str = "GOVFUND_SERVICE_ACCOUNT";
/// Path to a service-account key JSON file.
pub const SERVICE_ACCOUNT_FILE_ENV: &str = "GOVFUND_SERVICE_ACCOUNT_FILE";

pub const DEFAULT_TOKEN_URI: &str = "https://oauth2.googleapis.com/token";

#[derive(Deserialize)]
struct RawServiceAccountKey {
    client_email: String,
    private_key: String,
    #[serde(default)]
    private_key_id: Option<String>,
    #[serde(default)]
    token_uri: Option<String>,
}

/// The fields of a Google service-account key that the token exchange needs.
pub struct ServiceAccountKey {
    pub client_email: String,
    pub private_key_id: Option<String>,
    pub token_uri: String,
    private_key: SecretString,
}

impl fmt::Debug for ServiceAccountKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ServiceAccountKey")
            .field("client_email", &self.client_email)
            .field("private_key_id", &self.private_key_id)
            .field("token_uri", &self.token_uri)
            .field("private_key", &"[REDACTED]")
            .finish()
    }
}

impl ServiceAccountKey {
    pub fn from_json(json: &str) -> Result<Self, PersistenceError> {
        let raw: RawServiceAccountKey = serde_json::from_str(json)
            .map_err(|e| PersistenceError::Credentials(e.to_string()))?;

        if raw.client_email.trim().is_empty() {
            return Err(PersistenceError::Credentials(
                "client_email must not be empty".to_string(),
            ));
        }
        if raw.private_key.trim().is_empty() {
            return Err(PersistenceError::Credentials(
                "private_key must not be empty".to_string(),
            ));
        }

        Ok(Self {
            client_email: raw.client_email,
            private_key_id: raw.private_key_id.filter(|id| !id.is_empty()),
            token_uri: raw
                .token_uri
                .filter(|uri| !uri.trim().is_empty())
                .unwrap_or_else(|| DEFAULT_TOKEN_URI.to_string()),
            private_key: SecretString::from(raw.private_key),
        })
    }

    pub fn load_file(path: impl AsRef<Path>) -> Result<Self, PersistenceError> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path).map_err(|e| {
            PersistenceError::Credentials(format!("cannot read {}: {e}", path.display()))
        })?;
        Self::from_json(&raw)
    }

    /// Resolve credentials from the inline variable first, then the file path.
    ///
    /// Returns `Ok(None)` when neither is set.
    pub fn from_env() -> Result<Option<Self>, PersistenceError> {
        if let Ok(json) = std::env::var(SERVICE_ACCOUNT_ENV) {
            if !json.trim().is_empty() {
                return Self::from_json(&json).map(Some);
            }
        }
        if let Ok(path) = std::env::var(SERVICE_ACCOUNT_FILE_ENV) {
            if !path.trim().is_empty() {
                return Self::load_file(path).map(Some);
            }
        }
        Ok(None)
    }

    pub(crate) fn private_key_pem(&self) -> &str {
        self.private_key.expose_secret()
    }
}
