//! Two-column Sankey rendering of the flow chart: one root node on the
//! left, one leaf per selected agency on the right.

use bevy_egui::egui;
use budget::charts::FlowChart;

use super::drawing::{fill_flow_band, palette_color, with_alpha, ROOT_NODE_COLOR};

pub(crate) const NODE_THICKNESS: f32 = 20.0;
pub(crate) const NODE_PAD: f32 = 15.0;
const LABEL_WIDTH: f32 = 220.0;

/// Vertical span of one link at both ends.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct Band {
    pub link: usize,
    pub source: (f32, f32),
    pub target: (f32, f32),
}

#[derive(Debug, Clone, PartialEq)]
pub(crate) struct FlowLayout {
    pub root: egui::Rect,
    /// Indexed like `FlowChart::links`.
    pub leaves: Vec<egui::Rect>,
    pub bands: Vec<Band>,
}

/// Share of the available height each link gets. Links whose values are all
/// zero split the height evenly so every leaf stays visible.
pub(crate) fn link_shares(chart: &FlowChart) -> Vec<f32> {
    let n = chart.links.len();
    if n == 0 {
        return Vec::new();
    }
    let total = chart.total_value();
    if total <= 0.0 {
        return vec![1.0 / n as f32; n];
    }
    chart
        .links
        .iter()
        .map(|link| (link.value.max(0.0) / total) as f32)
        .collect()
}

/// Place nodes and bands inside `rect`. Leaves keep link order top to
/// bottom, separated by `NODE_PAD`; the root spans the same total height.
pub(crate) fn layout_flow(chart: &FlowChart, rect: egui::Rect) -> FlowLayout {
    let shares = link_shares(chart);
    let gaps = NODE_PAD * shares.len().saturating_sub(1) as f32;
    let usable = (rect.height() - gaps).max(shares.len() as f32);

    let root = egui::Rect::from_min_size(
        egui::pos2(rect.min.x, rect.min.y + gaps * 0.5),
        egui::vec2(NODE_THICKNESS, usable),
    );
    let leaf_x = rect.max.x - NODE_THICKNESS;

    let mut leaves = Vec::with_capacity(shares.len());
    let mut bands = Vec::with_capacity(shares.len());
    let mut leaf_y = rect.min.y;
    let mut root_y = root.min.y;
    for (link, share) in shares.iter().enumerate() {
        let h = usable * share;
        leaves.push(egui::Rect::from_min_size(
            egui::pos2(leaf_x, leaf_y),
            egui::vec2(NODE_THICKNESS, h),
        ));
        bands.push(Band {
            link,
            source: (root_y, root_y + h),
            target: (leaf_y, leaf_y + h),
        });
        root_y += h;
        leaf_y += h + NODE_PAD;
    }

    FlowLayout {
        root,
        leaves,
        bands,
    }
}

pub(crate) fn draw_sankey(ui: &mut egui::Ui, chart: &FlowChart, width: f32) {
    ui.heading(chart.title);

    let height = (chart.links.len() as f32 * (NODE_PAD + 24.0)).clamp(160.0, 900.0);
    let (rect, _) = ui.allocate_exact_size(egui::vec2(width, height), egui::Sense::hover());
    let painter = ui.painter_at(rect);

    // Labels sit outside the nodes, so shrink the drawing area horizontally.
    let area = egui::Rect::from_min_max(
        egui::pos2(rect.min.x + LABEL_WIDTH * 0.5, rect.min.y),
        egui::pos2(rect.max.x - LABEL_WIDTH, rect.max.y),
    );
    if area.width() <= NODE_THICKNESS * 2.0 {
        return;
    }
    let layout = layout_flow(chart, area);

    for band in &layout.bands {
        fill_flow_band(
            &painter,
            layout.root.max.x,
            band.source,
            area.max.x - NODE_THICKNESS,
            band.target,
            with_alpha(palette_color(band.link), 110),
        );
    }

    painter.rect_filled(layout.root, 0.0, ROOT_NODE_COLOR);
    let text_color = ui.visuals().text_color();
    let font = egui::FontId::proportional(11.0);
    if let Some(root) = chart.nodes.first() {
        painter.text(
            egui::pos2(layout.root.min.x - 4.0, layout.root.center().y),
            egui::Align2::RIGHT_CENTER,
            &root.label,
            font.clone(),
            text_color,
        );
    }

    for (idx, leaf) in layout.leaves.iter().enumerate() {
        painter.rect_filled(*leaf, 0.0, palette_color(idx));
        let link = &chart.links[idx];
        let label = chart
            .nodes
            .get(link.target)
            .map_or("", |node| node.label.as_str());
        painter.text(
            egui::pos2(leaf.max.x + 4.0, leaf.center().y),
            egui::Align2::LEFT_CENTER,
            format!("{label} (${:.2})", link.value),
            font.clone(),
            text_color,
        );
    }
}
