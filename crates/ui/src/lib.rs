use bevy::prelude::*;
use bevy_egui::EguiPlugin;

mod charts;
pub mod dashboard;
pub mod theme;

pub use dashboard::PAGE_TITLE;

pub struct UiPlugin;

impl Plugin for UiPlugin {
    fn build(&self, app: &mut App) {
        app.add_plugins(EguiPlugin)
            .add_systems(Startup, (spawn_page_camera, theme::apply_dashboard_theme))
            .add_systems(
                Update,
                dashboard::dashboard_ui.before(budget::page::process_page_events),
            );
    }
}

/// The page is pure egui; the camera only clears the window behind it.
fn spawn_page_camera(mut commands: Commands) {
    commands.spawn(Camera2d);
}
