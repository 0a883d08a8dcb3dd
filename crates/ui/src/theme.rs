use bevy_egui::{egui, EguiContexts};

/// Banner colour for the selected-cost headline.
pub const ALERT_RED: egui::Color32 = egui::Color32::from_rgb(230, 60, 60);
pub const SUCCESS_GREEN: egui::Color32 = egui::Color32::from_rgb(90, 200, 120);

pub fn apply_dashboard_theme(mut contexts: EguiContexts) {
    let ctx = contexts.ctx_mut();
    let mut style = (*ctx.style()).clone();

    let panel = egui::Color32::from_rgb(28, 31, 40);
    let inactive = egui::Color32::from_rgb(48, 53, 66);
    let hover = egui::Color32::from_rgb(66, 78, 100);
    let active = egui::Color32::from_rgb(99, 110, 250);

    style.visuals.widgets.noninteractive.bg_fill = panel;
    style.visuals.widgets.inactive.bg_fill = inactive;
    style.visuals.widgets.hovered.bg_fill = hover;
    style.visuals.widgets.active.bg_fill = active;
    style.visuals.widgets.inactive.weak_bg_fill = inactive;
    style.visuals.widgets.hovered.weak_bg_fill = hover;
    style.visuals.widgets.active.weak_bg_fill = active;

    style.visuals.panel_fill = panel;
    style.visuals.window_fill = panel;
    style.visuals.extreme_bg_color = egui::Color32::from_rgb(20, 22, 30);

    style.visuals.selection.bg_fill = active;
    style.visuals.selection.stroke = egui::Stroke::new(1.0, active);

    let rounding = egui::CornerRadius::same(4);
    style.visuals.widgets.inactive.corner_radius = rounding;
    style.visuals.widgets.hovered.corner_radius = rounding;
    style.visuals.widgets.active.corner_radius = rounding;

    // Slightly larger body text for a reading page.
    style
        .text_styles
        .insert(egui::TextStyle::Body, egui::FontId::proportional(15.0));
    style.spacing.item_spacing = egui::vec2(8.0, 6.0);

    ctx.set_style(style);
}
