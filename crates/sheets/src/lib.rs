//! Google Sheets backend for the dashboard's persistence gateway.

pub mod client;
pub mod credentials;
pub mod token;

#[cfg(test)]
mod test_support;

pub use client::{append_url, SheetsStore};
pub use credentials::{ServiceAccountKey, SERVICE_ACCOUNT_ENV, SERVICE_ACCOUNT_FILE_ENV};

use budget::config::SpreadsheetConfig;
use budget::persistence::PersistenceError;

/// Build a [`SheetsStore`] from credentials in the environment.
///
/// `Ok(None)` means no credentials were supplied; callers fall back to an
/// unconfigured store.
pub fn store_from_env(config: &SpreadsheetConfig) -> Result<Option<SheetsStore>, PersistenceError> {
    match ServiceAccountKey::from_env()? {
        Some(key) => SheetsStore::new(config, key).map(Some),
        None => Ok(None),
    }
}
