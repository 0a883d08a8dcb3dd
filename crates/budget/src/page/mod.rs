//! Page controller.
//!
//! Widget interactions arrive as [`PageEvent`]s. Each one is a pure
//! transition on [`PageState`]; afterwards [`SelectionState`] and
//! [`PageView`] are rebuilt from the state rather than patched.
//!
//! [`SelectionState`]: crate::selection::SelectionState

mod state;
mod systems;
mod view;

pub use state::{
    validate_submission, PageEvent, PageState, StatusMessage, Transition, ValidationError,
    MSG_IDENTITY_REQUIRED, MSG_SELECTION_REQUIRED, MSG_SUBMIT_SUCCESS,
};
pub use systems::{derive_initial_view, process_page_events, submit_selection};
pub use view::{AgencyRow, PageView, SelectionSummary};
