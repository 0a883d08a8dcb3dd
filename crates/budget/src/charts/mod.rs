//! Chart adapters: catalogue/selection to renderer-ready chart models.
//!
//! The models are plain data. Drawing them is the `ui` crate's job.

mod flow;
mod overview;

pub use flow::{flow_chart, FlowChart, FlowLink, FlowNode, FLOW_ROOT_LABEL, FLOW_TITLE};
pub use overview::{
    format_budget, overview_chart, OverviewChart, OverviewSegment, OVERVIEW_HOLE_FRACTION,
    OVERVIEW_TITLE, SMALL_SEGMENT_PULL, SMALL_SEGMENT_THRESHOLD_BILLIONS,
};
