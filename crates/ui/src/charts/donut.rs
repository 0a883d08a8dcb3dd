//! Donut rendering of the overview chart.

use std::f32::consts::{FRAC_PI_2, TAU};

use bevy_egui::egui;
use budget::charts::{OverviewChart, SMALL_SEGMENT_PULL};

use super::drawing::{fill_annular_sector, legend_item, palette_color};

/// Angular extent of one segment, plus how far it is pulled out.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct WedgeSpan {
    pub start: f32,
    pub end: f32,
    /// Radial offset as a fraction of the outer radius.
    pub pull: f32,
}

impl WedgeSpan {
    pub fn mid(&self) -> f32 {
        (self.start + self.end) * 0.5
    }

    pub fn contains_angle(&self, angle: f32) -> bool {
        angle >= self.start && angle < self.end
    }
}

/// Lay segments out clockwise from twelve o'clock, proportional to weight.
///
/// A chart whose total weight is zero has no visible wedges.
pub(crate) fn wedge_spans(chart: &OverviewChart) -> Vec<WedgeSpan> {
    let total = chart.total_weight();
    if total <= 0.0 {
        return Vec::new();
    }

    let mut angle = -FRAC_PI_2;
    chart
        .segments
        .iter()
        .map(|segment| {
            let sweep = (segment.weight / total) as f32 * TAU;
            let span = WedgeSpan {
                start: angle,
                end: angle + sweep,
                pull: if segment.pulled { SMALL_SEGMENT_PULL } else { 0.0 },
            };
            angle += sweep;
            span
        })
        .collect()
}

/// Index of the segment under `pos`, ignoring pull-out offsets.
pub(crate) fn segment_at(
    spans: &[WedgeSpan],
    center: egui::Pos2,
    inner: f32,
    outer: f32,
    pos: egui::Pos2,
) -> Option<usize> {
    let delta = pos - center;
    let dist = delta.length();
    if dist < inner || dist > outer {
        return None;
    }
    // Normalize into [-pi/2, 3pi/2) to match the span layout.
    let mut angle = delta.y.atan2(delta.x);
    if angle < -FRAC_PI_2 {
        angle += TAU;
    }
    spans.iter().position(|s| s.contains_angle(angle))
}

pub(crate) fn draw_donut(ui: &mut egui::Ui, chart: &OverviewChart, size: f32) {
    ui.heading(chart.title);

    let (rect, response) =
        ui.allocate_exact_size(egui::vec2(size, size), egui::Sense::hover());
    let painter = ui.painter_at(rect);

    let center = rect.center();
    // Leave room for pulled wedges.
    let outer = size * 0.5 / (1.0 + SMALL_SEGMENT_PULL);
    let inner = outer * chart.hole_fraction;

    let spans = wedge_spans(chart);
    for (idx, span) in spans.iter().enumerate() {
        let offset = egui::vec2(span.mid().cos(), span.mid().sin()) * outer * span.pull;
        fill_annular_sector(
            &painter,
            center + offset,
            inner,
            outer,
            span.start,
            span.end,
            palette_color(idx),
        );
    }

    let text_color = ui.visuals().strong_text_color();
    painter.text(
        center,
        egui::Align2::CENTER_CENTER,
        &chart.center_annotation,
        egui::FontId::proportional(14.0),
        text_color,
    );

    if let Some(idx) = response
        .hover_pos()
        .and_then(|pos| segment_at(&spans, center, inner, outer, pos))
    {
        let segment = &chart.segments[idx];
        response.on_hover_text(format!(
            "{}\n{:.1}%",
            segment.label,
            chart.share_percent(idx)
        ));
    }
}

pub(crate) fn draw_legend(ui: &mut egui::Ui, chart: &OverviewChart, max_height: f32) {
    egui::ScrollArea::vertical()
        .id_salt("overview_legend")
        .max_height(max_height)
        .show(ui, |ui| {
            for (idx, segment) in chart.segments.iter().enumerate() {
                legend_item(ui, palette_color(idx), &segment.label);
            }
        });
}
