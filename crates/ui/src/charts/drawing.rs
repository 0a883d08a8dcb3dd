//! Shared drawing helpers for the dashboard charts: palette, annular
//! wedges, flow bands and legend items.

use bevy_egui::egui;

/// Qualitative palette cycled across chart segments.
const PALETTE: [egui::Color32; 10] = [
    egui::Color32::from_rgb(99, 110, 250),
    egui::Color32::from_rgb(239, 85, 59),
    egui::Color32::from_rgb(0, 204, 150),
    egui::Color32::from_rgb(171, 99, 250),
    egui::Color32::from_rgb(255, 161, 90),
    egui::Color32::from_rgb(25, 211, 243),
    egui::Color32::from_rgb(255, 102, 146),
    egui::Color32::from_rgb(182, 232, 128),
    egui::Color32::from_rgb(255, 151, 255),
    egui::Color32::from_rgb(254, 203, 82),
];

pub(crate) const ROOT_NODE_COLOR: egui::Color32 = egui::Color32::from_rgb(90, 100, 120);

pub(crate) fn palette_color(idx: usize) -> egui::Color32 {
    PALETTE[idx % PALETTE.len()]
}

/// Same hue with the given alpha, for translucent flow bands.
pub(crate) fn with_alpha(color: egui::Color32, alpha: u8) -> egui::Color32 {
    egui::Color32::from_rgba_unmultiplied(color.r(), color.g(), color.b(), alpha)
}

/// Point on a circle; angles are radians, clockwise from +x in screen space.
pub(crate) fn polar(center: egui::Pos2, radius: f32, angle: f32) -> egui::Pos2 {
    center + egui::vec2(angle.cos(), angle.sin()) * radius
}

/// Fill the ring sector between `inner` and `outer` radius as a triangle
/// strip. Annular sectors are not convex, so this uses a mesh.
pub(crate) fn fill_annular_sector(
    painter: &egui::Painter,
    center: egui::Pos2,
    inner: f32,
    outer: f32,
    start: f32,
    end: f32,
    color: egui::Color32,
) {
    let sweep = end - start;
    if sweep <= 0.0 {
        return;
    }
    let steps = ((sweep.to_degrees() / 3.0).ceil() as u32).max(1);

    let mut mesh = egui::Mesh::default();
    for i in 0..=steps {
        let a = start + sweep * (i as f32 / steps as f32);
        mesh.colored_vertex(polar(center, outer, a), color);
        mesh.colored_vertex(polar(center, inner, a), color);
    }
    for i in 0..steps {
        let o0 = i * 2;
        let i0 = o0 + 1;
        let o1 = o0 + 2;
        let i1 = o0 + 3;
        mesh.add_triangle(o0, i0, o1);
        mesh.add_triangle(i0, i1, o1);
    }
    painter.add(egui::Shape::mesh(mesh));
}

/// Smoothstep easing used for the vertical course of a flow band.
pub(crate) fn ease(t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    t * t * (3.0 - 2.0 * t)
}

/// Fill a horizontal band from the vertical span `from` at `x0` to the span
/// `to` at `x1`, following an S-curve.
pub(crate) fn fill_flow_band(
    painter: &egui::Painter,
    x0: f32,
    from: (f32, f32),
    x1: f32,
    to: (f32, f32),
    color: egui::Color32,
) {
    const STEPS: u32 = 24;

    let mut mesh = egui::Mesh::default();
    for i in 0..=STEPS {
        let t = i as f32 / STEPS as f32;
        let k = ease(t);
        let x = x0 + (x1 - x0) * t;
        let top = from.0 + (to.0 - from.0) * k;
        let bottom = from.1 + (to.1 - from.1) * k;
        mesh.colored_vertex(egui::pos2(x, top), color);
        mesh.colored_vertex(egui::pos2(x, bottom), color);
    }
    for i in 0..STEPS {
        let t0 = i * 2;
        mesh.add_triangle(t0, t0 + 1, t0 + 2);
        mesh.add_triangle(t0 + 1, t0 + 3, t0 + 2);
    }
    painter.add(egui::Shape::mesh(mesh));
}

pub(crate) fn legend_item(ui: &mut egui::Ui, color: egui::Color32, text: &str) {
    ui.horizontal(|ui| {
        let (rect, _) = ui.allocate_exact_size(egui::vec2(10.0, 10.0), egui::Sense::hover());
        ui.painter().rect_filled(rect, 2.0, color);
        ui.label(text);
    });
}
