//! Everything the page shows, derived from scratch after each interaction.

use bevy::prelude::*;

use crate::catalogue::Catalogue;
use crate::charts::{flow_chart, overview_chart, FlowChart, OverviewChart};
use crate::cost::CostCalculator;
use crate::selection::SelectionState;

use super::state::{PageState, StatusMessage};

/// One checkbox line.
#[derive(Debug, Clone, PartialEq)]
pub struct AgencyRow {
    pub name: String,
    pub annual_budget: f64,
    pub cost_per_citizen: f64,
    pub checked: bool,
    pub label: String,
}

/// Banner shown above the flow chart.
#[derive(Debug, Clone, PartialEq)]
pub struct SelectionSummary {
    pub agency_count: usize,
    /// Millions.
    pub total_budget: f64,
    pub cost_per_citizen: f64,
}

impl SelectionSummary {
    pub fn headline(&self) -> String {
        format!("${:.2} PER YEAR!", self.cost_per_citizen)
    }
}

#[derive(Resource, Debug, Clone, Default, PartialEq)]
pub struct PageView {
    pub rows: Vec<AgencyRow>,
    pub overview: OverviewChart,
    /// Present only for a non-empty selection.
    pub summary: Option<SelectionSummary>,
    /// Present only for a non-empty selection.
    pub flow: Option<FlowChart>,
    pub status: Option<StatusMessage>,
}

impl PageView {
    pub fn derive(
        catalogue: &Catalogue,
        calculator: &CostCalculator,
        state: &PageState,
        selection: &SelectionState,
    ) -> Self {
        let rows = catalogue
            .iter()
            .map(|agency| {
                let cost = calculator.cost_per_citizen(agency.annual_budget);
                AgencyRow {
                    name: agency.name.clone(),
                    annual_budget: agency.annual_budget,
                    cost_per_citizen: cost,
                    checked: selection.contains(&agency.name),
                    label: format!("{} (${:.2} per year)", agency.name, cost),
                }
            })
            .collect();

        let (summary, flow) = if selection.is_empty() {
            (None, None)
        } else {
            let total_budget = selection.total();
            (
                Some(SelectionSummary {
                    agency_count: selection.len(),
                    total_budget,
                    cost_per_citizen: calculator.cost_per_citizen(total_budget),
                }),
                Some(flow_chart(selection, calculator)),
            )
        };

        Self {
            rows,
            overview: overview_chart(catalogue),
            summary,
            flow,
            status: state.status.clone(),
        }
    }
}
