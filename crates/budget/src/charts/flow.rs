//! Flow (Sankey) chart over the selected agencies only.

use crate::cost::CostCalculator;
use crate::selection::SelectionState;

pub const FLOW_TITLE: &str = "Selected Programs Cost Breakdown";
pub const FLOW_ROOT_LABEL: &str = "Total Budget";

#[derive(Debug, Clone, PartialEq)]
pub struct FlowNode {
    pub label: String,
}

/// Edge between two node indices. `value` is a per-citizen cost in dollars.
#[derive(Debug, Clone, PartialEq)]
pub struct FlowLink {
    pub source: usize,
    pub target: usize,
    pub value: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct FlowChart {
    pub title: &'static str,
    /// Node 0 is the root; leaves follow in selection order.
    pub nodes: Vec<FlowNode>,
    pub links: Vec<FlowLink>,
}

impl FlowChart {
    /// Sum of all link values, i.e. the root's outgoing flow.
    pub fn total_value(&self) -> f64 {
        self.links.iter().map(|l| l.value).sum()
    }
}

/// Build the flow chart for a selection.
///
/// Link values are per-citizen costs, not raw budgets. An empty selection
/// yields a root with no leaves; the controller never asks for one.
pub fn flow_chart(selection: &SelectionState, calculator: &CostCalculator) -> FlowChart {
    let agencies = selection.current_selection();

    let mut nodes = Vec::with_capacity(agencies.len() + 1);
    nodes.push(FlowNode {
        label: FLOW_ROOT_LABEL.to_string(),
    });
    nodes.extend(agencies.iter().map(|a| FlowNode {
        label: a.name.clone(),
    }));

    let links = agencies
        .iter()
        .enumerate()
        .map(|(i, a)| FlowLink {
            source: 0,
            target: i + 1,
            value: calculator.cost_per_citizen(a.annual_budget),
        })
        .collect();

    FlowChart {
        title: FLOW_TITLE,
        nodes,
        links,
    }
}
