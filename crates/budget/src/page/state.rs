//! Page state machine: input events and the pure transitions they drive.

use std::collections::BTreeSet;
use std::fmt;

use bevy::prelude::*;

use crate::catalogue::Catalogue;
use crate::persistence::{Identity, PersistenceError};
use crate::selection::{InvalidAgency, SelectionState};

pub const MSG_IDENTITY_REQUIRED: &str = "Name and Email are required to submit your selection.";
pub const MSG_SELECTION_REQUIRED: &str = "Please select at least one program to fund.";
pub const MSG_SUBMIT_SUCCESS: &str = "Your selections have been recorded.";

/// A single widget interaction.
#[derive(Event, Debug, Clone, PartialEq)]
pub enum PageEvent {
    NameChanged(String),
    EmailChanged(String),
    AgencyToggled { name: String, checked: bool },
    SubmitPressed,
}

/// Missing input at submit time. Shown inline; nothing is submitted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    MissingIdentity,
    EmptySelection,
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::MissingIdentity => f.write_str(MSG_IDENTITY_REQUIRED),
            ValidationError::EmptySelection => f.write_str(MSG_SELECTION_REQUIRED),
        }
    }
}

impl std::error::Error for ValidationError {}

/// Identity is checked before the selection.
pub fn validate_submission(
    identity: &Identity,
    selection: &SelectionState,
) -> Result<(), ValidationError> {
    if identity.name.is_empty() || identity.email.is_empty() {
        return Err(ValidationError::MissingIdentity);
    }
    if selection.is_empty() {
        return Err(ValidationError::EmptySelection);
    }
    Ok(())
}

/// Feedback from the last submit activation.
#[derive(Debug, Clone, PartialEq)]
pub enum StatusMessage {
    Success(String),
    Error(String),
}

impl StatusMessage {
    pub fn text(&self) -> &str {
        match self {
            StatusMessage::Success(text) | StatusMessage::Error(text) => text,
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(self, StatusMessage::Error(_))
    }

    pub fn from_validation(err: ValidationError) -> Self {
        StatusMessage::Error(err.to_string())
    }

    pub fn from_persistence(err: &PersistenceError) -> Self {
        StatusMessage::Error(format!("Failed to save data: {err}"))
    }
}

/// What the controller must do after a transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    /// Inputs changed; re-derive the view.
    Updated,
    /// The submit button was activated.
    SubmitRequested,
}

/// Session-scoped inputs: identity fields, checked agencies, last status.
#[derive(Resource, Debug, Clone, Default, PartialEq)]
pub struct PageState {
    pub identity: Identity,
    checked: BTreeSet<String>,
    pub status: Option<StatusMessage>,
}

impl PageState {
    /// Apply one event.
    ///
    /// Toggles naming an agency outside the catalogue are rejected without
    /// touching the state.
    pub fn apply(
        &mut self,
        catalogue: &Catalogue,
        event: &PageEvent,
    ) -> Result<Transition, InvalidAgency> {
        match event {
            PageEvent::NameChanged(name) => {
                self.identity.name.clone_from(name);
                Ok(Transition::Updated)
            }
            PageEvent::EmailChanged(email) => {
                self.identity.email.clone_from(email);
                Ok(Transition::Updated)
            }
            PageEvent::AgencyToggled { name, checked } => {
                if !catalogue.contains(name) {
                    return Err(InvalidAgency { name: name.clone() });
                }
                if *checked {
                    self.checked.insert(name.clone());
                } else {
                    self.checked.remove(name);
                }
                Ok(Transition::Updated)
            }
            PageEvent::SubmitPressed => Ok(Transition::SubmitRequested),
        }
    }

    pub fn is_checked(&self, name: &str) -> bool {
        self.checked.contains(name)
    }

    pub fn checked_names(&self) -> impl Iterator<Item = &str> {
        self.checked.iter().map(String::as_str)
    }

    /// Rebuild the selection from the checked inputs.
    pub fn selection(&self, catalogue: &Catalogue) -> Result<SelectionState, InvalidAgency> {
        SelectionState::from_checked(catalogue, self.checked_names())
    }
}
