use bevy::prelude::*;
use bevy_egui::{egui, EguiContexts};
use budget::page::{PageEvent, PageState, PageView};

use super::panels;

/// Draws the page and forwards widget interactions as page events.
///
/// Must run before `process_page_events` so edits land in the same frame;
/// otherwise text fields would redraw from stale state for a frame.
pub fn dashboard_ui(
    mut contexts: EguiContexts,
    view: Res<PageView>,
    state: Res<PageState>,
    mut events: EventWriter<PageEvent>,
) {
    let ctx = contexts.ctx_mut();
    let mut pending = Vec::new();

    egui::CentralPanel::default().show(ctx, |ui| {
        egui::ScrollArea::vertical()
            .id_salt("dashboard_page")
            .auto_shrink([false, false])
            .show(ui, |ui| {
                panels::render_page(ui, &view, &state.identity, &mut pending);
            });
    });

    if !pending.is_empty() {
        events.send_batch(pending);
    }
}
