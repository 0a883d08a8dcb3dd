//! Persistence gateway: one-way submission of a visitor's selection to an
//! external append-only table.
//!
//! ```text
//! PersistenceGateway (resource)
//!     |
//!     +-- Box<dyn SubmissionStore>
//!             |
//!             +-- sheets::SheetsStore   (Google Sheets, production)
//!             +-- MemoryStore           (tests, offline runs)
//!             +-- UnconfiguredStore     (no credentials supplied)
//! ```
//!
//! The gateway never retries and never reads rows back.

use std::fmt;
use std::sync::{Arc, Mutex, PoisonError};

use bevy::prelude::*;
use serde::Serialize;

use crate::cost::CostCalculator;
use crate::selection::SelectionState;

/// Separator used when joining selected agency names into one cell.
pub const AGENCY_NAME_SEPARATOR: &str = ", ";

/// Who is submitting. Free-form; only non-emptiness is checked.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Identity {
    pub name: String,
    pub email: String,
}

impl Identity {
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
        }
    }
}

/// A single spreadsheet cell. Serializes as a bare JSON string or number.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum CellValue {
    Text(String),
    Number(f64),
}

/// One persisted submission. Built once per successful submit and never
/// mutated afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct SubmissionRecord {
    pub name: String,
    pub email: String,
    pub selected_agency_names: Vec<String>,
    /// Millions.
    pub total_budget: f64,
    /// Dollars per citizen, rounded to cents.
    pub cost_per_citizen: f64,
}

impl SubmissionRecord {
    pub fn build(
        identity: &Identity,
        selection: &SelectionState,
        calculator: &CostCalculator,
    ) -> Self {
        let total_budget = selection.total();
        Self {
            name: identity.name.clone(),
            email: identity.email.clone(),
            selected_agency_names: selection.names().map(str::to_string).collect(),
            total_budget,
            cost_per_citizen: calculator.cost_per_citizen(total_budget),
        }
    }

    pub fn joined_agency_names(&self) -> String {
        self.selected_agency_names.join(AGENCY_NAME_SEPARATOR)
    }

    /// `[name, email, joined names, total budget, cost per citizen]`
    pub fn to_row(&self) -> Vec<CellValue> {
        vec![
            CellValue::Text(self.name.clone()),
            CellValue::Text(self.email.clone()),
            CellValue::Text(self.joined_agency_names()),
            CellValue::Number(self.total_budget),
            CellValue::Number(self.cost_per_citizen),
        ]
    }
}

/// Failures while appending to the external store. Always recoverable.
#[derive(Debug, Clone, PartialEq)]
pub enum PersistenceError {
    /// No store credentials were supplied at startup.
    NotConfigured,
    /// Service credentials could not be read or parsed.
    Credentials(String),
    /// Exchanging credentials for an access token failed.
    Token(String),
    /// Transport failure or non-success HTTP status.
    Http { status: Option<u16>, message: String },
    /// The store answered with something we could not interpret.
    InvalidResponse(String),
    /// The store's address (base URL, spreadsheet or worksheet) is unusable.
    InvalidEndpoint(String),
}

impl fmt::Display for PersistenceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PersistenceError::NotConfigured => {
                write!(f, "submission store is not configured")
            }
            PersistenceError::Credentials(msg) => write!(f, "credentials error: {msg}"),
            PersistenceError::Token(msg) => write!(f, "authorization failed: {msg}"),
            PersistenceError::Http {
                status: Some(status),
                message,
            } => write!(f, "HTTP {status}: {message}"),
            PersistenceError::Http {
                status: None,
                message,
            } => write!(f, "request failed: {message}"),
            PersistenceError::InvalidResponse(msg) => write!(f, "invalid response: {msg}"),
            PersistenceError::InvalidEndpoint(msg) => write!(f, "invalid store endpoint: {msg}"),
        }
    }
}

impl std::error::Error for PersistenceError {}

/// An append-only table that accepts one row per call.
pub trait SubmissionStore: Send + Sync {
    /// Append `row` as a new last row.
    ///
    /// # Errors
    ///
    /// Any transport, auth or quota failure from the backing store.
    fn append_row(&self, row: &[CellValue]) -> Result<(), PersistenceError>;

    /// Short store name for logging.
    fn name(&self) -> &'static str;

    fn is_configured(&self) -> bool {
        true
    }
}

/// Store used when no credentials were supplied: every append fails.
#[derive(Debug, Default)]
pub struct UnconfiguredStore;

impl SubmissionStore for UnconfiguredStore {
    fn append_row(&self, _row: &[CellValue]) -> Result<(), PersistenceError> {
        Err(PersistenceError::NotConfigured)
    }

    fn name(&self) -> &'static str {
        "unconfigured"
    }

    fn is_configured(&self) -> bool {
        false
    }
}

/// In-process store that records appended rows.
///
/// Clones share the same rows, so a test can keep a handle while the
/// gateway owns another.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    rows: Arc<Mutex<Vec<Vec<CellValue>>>>,
    fail_with: Option<PersistenceError>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// A store whose every append fails with `error`.
    pub fn failing(error: PersistenceError) -> Self {
        Self {
            rows: Arc::default(),
            fail_with: Some(error),
        }
    }

    /// Rows appended so far. A panic on another handle does not hide them.
    pub fn rows(&self) -> Vec<Vec<CellValue>> {
        self.rows
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub fn row_count(&self) -> usize {
        self.rows.lock().unwrap_or_else(PoisonError::into_inner).len()
    }
}

impl SubmissionStore for MemoryStore {
    fn append_row(&self, row: &[CellValue]) -> Result<(), PersistenceError> {
        if let Some(err) = &self.fail_with {
            return Err(err.clone());
        }
        self.rows
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(row.to_vec());
        Ok(())
    }

    fn name(&self) -> &'static str {
        "memory"
    }
}

/// Resource wrapping the injected store.
#[derive(Resource)]
pub struct PersistenceGateway {
    store: Box<dyn SubmissionStore>,
}

impl Default for PersistenceGateway {
    fn default() -> Self {
        Self::new(UnconfiguredStore)
    }
}

impl PersistenceGateway {
    pub fn new(store: impl SubmissionStore + 'static) -> Self {
        Self {
            store: Box::new(store),
        }
    }

    pub fn store_name(&self) -> &'static str {
        self.store.name()
    }

    pub fn is_configured(&self) -> bool {
        self.store.is_configured()
    }

    /// Build one record and append it with exactly one store call.
    ///
    /// Preconditions (non-empty identity and selection) are the caller's
    /// responsibility.
    pub fn submit(
        &self,
        identity: &Identity,
        selection: &SelectionState,
        calculator: &CostCalculator,
    ) -> Result<SubmissionRecord, PersistenceError> {
        let record = SubmissionRecord::build(identity, selection, calculator);
        self.store.append_row(&record.to_row())?;
        info!(
            "Recorded submission via {}: {} agencies, total {:.1}M, ${:.2} per citizen",
            self.store.name(),
            record.selected_agency_names.len(),
            record.total_budget,
            record.cost_per_citizen
        );
        Ok(record)
    }
}
