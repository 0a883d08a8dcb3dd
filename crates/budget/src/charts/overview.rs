//! Overview (donut) chart over the whole catalogue.

use crate::catalogue::Catalogue;

pub const OVERVIEW_TITLE: &str = "Total Agency Cost Breakdown";

/// Inner radius of the ring as a fraction of the outer radius.
pub const OVERVIEW_HOLE_FRACTION: f32 = 0.3;

/// Segments below this many billions are pulled out of the ring.
pub const SMALL_SEGMENT_THRESHOLD_BILLIONS: f64 = 5.0;

/// Pull-out distance for small segments, as a fraction of the radius.
pub const SMALL_SEGMENT_PULL: f32 = 0.1;

#[derive(Debug, Clone, PartialEq)]
pub struct OverviewSegment {
    pub name: String,
    pub label: String,
    /// Raw annual budget in millions. Used as the segment weight.
    pub weight: f64,
    /// Budget in billions, the unit shown on the chart.
    pub display_value: f64,
    /// Drawn offset from the ring. Presentation only.
    pub pulled: bool,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct OverviewChart {
    pub title: &'static str,
    pub segments: Vec<OverviewSegment>,
    pub hole_fraction: f32,
    pub total_trillions: f64,
    pub center_annotation: String,
}

impl OverviewChart {
    pub fn total_weight(&self) -> f64 {
        self.segments.iter().map(|s| s.weight).sum()
    }

    /// Percentage share of segment `idx`, or 0 when the ring is empty.
    pub fn share_percent(&self, idx: usize) -> f64 {
        let total = self.total_weight();
        match self.segments.get(idx) {
            Some(seg) if total > 0.0 => seg.weight / total * 100.0,
            _ => 0.0,
        }
    }
}

/// Human-readable budget: billions above $1B, millions below.
pub fn format_budget(millions: f64) -> String {
    if millions >= 1000.0 {
        format!("${:.1}B", millions / 1000.0)
    } else {
        format!("${:.1}M", millions)
    }
}

/// Build the overview chart. Segment order follows catalogue order.
pub fn overview_chart(catalogue: &Catalogue) -> OverviewChart {
    let segments: Vec<OverviewSegment> = catalogue
        .iter()
        .map(|agency| {
            let display_value = agency.annual_budget / 1000.0;
            OverviewSegment {
                name: agency.name.clone(),
                label: format!("{} ({})", agency.name, format_budget(agency.annual_budget)),
                weight: agency.annual_budget,
                display_value,
                pulled: display_value < SMALL_SEGMENT_THRESHOLD_BILLIONS,
            }
        })
        .collect();

    let total_trillions = catalogue.total_budget() / 1_000_000.0;

    OverviewChart {
        title: OVERVIEW_TITLE,
        segments,
        hole_fraction: OVERVIEW_HOLE_FRACTION,
        total_trillions,
        center_annotation: format!("Total Budget\n${total_trillions:.2} Trillion"),
    }
}
