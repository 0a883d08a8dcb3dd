//! OAuth access tokens for a service account via the JWT-bearer grant.
//!
//! A signed RS256 assertion is exchanged at the key's `token_uri` for a
//! short-lived bearer token. The token is cached until shortly before it
//! expires so consecutive submissions reuse one exchange.

use std::sync::Mutex;
use std::time::{SystemTime, UNIX_EPOCH};

use bevy::log::debug;
use budget::persistence::PersistenceError;
use jsonwebtoken::{Algorithm, EncodingKey, Header};
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};

use crate::credentials::ServiceAccountKey;

pub const SHEETS_SCOPE: &str = "https://www.googleapis.com/auth/spreadsheets";
const JWT_BEARER_GRANT: &str = "urn:ietf:params:oauth:grant-type:jwt-bearer";

/// Google caps assertion lifetime at one hour.
const ASSERTION_LIFETIME_SECS: u64 = 3600;
/// Refresh this long before the server-side expiry.
const REFRESH_MARGIN_SECS: u64 = 60;

#[derive(Debug, Serialize)]
pub(crate) struct Claims {
    pub iss: String,
    pub scope: String,
    pub aud: String,
    pub iat: u64,
    pub exp: u64,
}

struct CachedToken {
    token: SecretString,
    expires_at: u64,
}

impl CachedToken {
    fn is_fresh(&self, now: u64) -> bool {
        now + REFRESH_MARGIN_SECS < self.expires_at
    }
}

pub struct TokenSource {
    key: ServiceAccountKey,
    signing_key: EncodingKey,
    http_client: reqwest::blocking::Client,
    cached: Mutex<Option<CachedToken>>,
}

impl TokenSource {
    /// # Errors
    ///
    /// Returns `PersistenceError::Credentials` when the key's private key is
    /// not an RSA PEM.
    pub fn new(
        key: ServiceAccountKey,
        http_client: reqwest::blocking::Client,
    ) -> Result<Self, PersistenceError> {
        let signing_key = EncodingKey::from_rsa_pem(key.private_key_pem().as_bytes())
            .map_err(|error| PersistenceError::Credentials(format!("private_key: {error}")))?;
        Ok(Self {
            key,
            signing_key,
            http_client,
            cached: Mutex::new(None),
        })
    }

    pub(crate) fn claims(&self, now: u64) -> Claims {
        Claims {
            iss: self.key.client_email.clone(),
            scope: SHEETS_SCOPE.to_string(),
            aud: self.key.token_uri.clone(),
            iat: now,
            exp: now + ASSERTION_LIFETIME_SECS,
        }
    }

    pub(crate) fn signed_assertion(&self, now: u64) -> Result<String, PersistenceError> {
        let mut header = Header::new(Algorithm::RS256);
        header.kid.clone_from(&self.key.private_key_id);

        jsonwebtoken::encode(&header, &self.claims(now), &self.signing_key)
            .map_err(|error| PersistenceError::Token(error.to_string()))
    }

    /// Bearer token for the Sheets scope, exchanging a new one if the cached
    /// token is missing or about to expire.
    pub fn access_token(&self) -> Result<String, PersistenceError> {
        let now = unix_now()?;
        let mut cached = self
            .cached
            .lock()
            .map_err(|_| PersistenceError::Token("token cache poisoned".to_string()))?;

        if let Some(token) = cached.as_ref().filter(|t| t.is_fresh(now)) {
            return Ok(token.token.expose_secret().to_string());
        }

        let fresh = self.exchange(now)?;
        let bearer = fresh.token.expose_secret().to_string();
        *cached = Some(fresh);
        Ok(bearer)
    }

    fn exchange(&self, now: u64) -> Result<CachedToken, PersistenceError> {
        #[derive(Debug, Deserialize)]
        struct TokenResponse {
            access_token: String,
            #[serde(default)]
            expires_in: Option<u64>,
        }

        let assertion = self.signed_assertion(now)?;
        debug!(
            "Exchanging service-account assertion for {} at {}",
            self.key.client_email, self.key.token_uri
        );

        let response = self
            .http_client
            .post(&self.key.token_uri)
            .form(&[("grant_type", JWT_BEARER_GRANT), ("assertion", assertion.as_str())])
            .send()
            .map_err(|error| PersistenceError::Http {
                status: None,
                message: error.to_string(),
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .unwrap_or_else(|_| "unable to read token response body".to_string());
            return Err(PersistenceError::Token(format!(
                "token endpoint returned {}: {body}",
                status.as_u16()
            )));
        }

        let payload: TokenResponse = response
            .json()
            .map_err(|error| PersistenceError::InvalidResponse(error.to_string()))?;
        if payload.access_token.is_empty() {
            return Err(PersistenceError::InvalidResponse(
                "token endpoint returned an empty access_token".to_string(),
            ));
        }

        Ok(CachedToken {
            token: SecretString::from(payload.access_token),
            expires_at: now + payload.expires_in.unwrap_or(ASSERTION_LIFETIME_SECS),
        })
    }
}

fn unix_now() -> Result<u64, PersistenceError> {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .map_err(|error| PersistenceError::Token(error.to_string()))
}
