//! Controller systems: apply page events, submit on request, re-derive the view.

use bevy::prelude::*;

use crate::catalogue::Catalogue;
use crate::cost::CostCalculator;
use crate::persistence::{Identity, PersistenceGateway};
use crate::selection::SelectionState;

use super::state::{
    validate_submission, PageEvent, PageState, StatusMessage, Transition, MSG_SUBMIT_SUCCESS,
};
use super::view::PageView;

/// Validate and, if valid, submit once through the gateway.
pub fn submit_selection(
    identity: &Identity,
    selection: &SelectionState,
    calculator: &CostCalculator,
    gateway: &PersistenceGateway,
) -> StatusMessage {
    if let Err(err) = validate_submission(identity, selection) {
        debug!("Submission rejected: {err}");
        return StatusMessage::from_validation(err);
    }

    match gateway.submit(identity, selection, calculator) {
        Ok(_) => StatusMessage::Success(MSG_SUBMIT_SUCCESS.to_string()),
        Err(err) => {
            warn!("Submission via {} failed: {err}", gateway.store_name());
            StatusMessage::from_persistence(&err)
        }
    }
}

fn rebuild_selection(catalogue: &Catalogue, state: &PageState) -> SelectionState {
    state.selection(catalogue).unwrap_or_else(|err| {
        error!("Checked inputs reference unknown agency: {err}");
        SelectionState::default()
    })
}

/// Startup: derive the first view before any interaction.
pub fn derive_initial_view(
    catalogue: Res<Catalogue>,
    calculator: Res<CostCalculator>,
    state: Res<PageState>,
    mut selection: ResMut<SelectionState>,
    mut view: ResMut<PageView>,
) {
    *selection = rebuild_selection(&catalogue, &state);
    *view = PageView::derive(&catalogue, &calculator, &state, &selection);
}

/// Applies this frame's events in order, then re-derives selection and view.
pub fn process_page_events(
    mut events: EventReader<PageEvent>,
    catalogue: Res<Catalogue>,
    calculator: Res<CostCalculator>,
    gateway: Res<PersistenceGateway>,
    mut state: ResMut<PageState>,
    mut selection: ResMut<SelectionState>,
    mut view: ResMut<PageView>,
) {
    let mut dirty = false;

    for event in events.read() {
        match state.apply(&catalogue, event) {
            Ok(Transition::Updated) => dirty = true,
            Ok(Transition::SubmitRequested) => {
                // Inputs earlier in the same batch must be visible to the submit.
                let current = rebuild_selection(&catalogue, &state);
                let status = submit_selection(&state.identity, &current, &calculator, &gateway);
                state.status = Some(status);
                dirty = true;
            }
            Err(err) => error!("Ignoring toggle: {err}"),
        }
    }

    if dirty {
        *selection = rebuild_selection(&catalogue, &state);
        *view = PageView::derive(&catalogue, &calculator, &state, &selection);
    }
}
