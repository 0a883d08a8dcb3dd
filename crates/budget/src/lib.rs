use bevy::prelude::*;

pub mod catalogue;
pub mod charts;
pub mod config;
pub mod cost;
pub mod page;
pub mod persistence;
pub mod selection;

#[cfg(test)]
mod integration_tests;
#[cfg(test)]
pub mod test_harness;

use catalogue::Catalogue;
use cost::CostCalculator;
use page::{PageEvent, PageState, PageView};
use persistence::PersistenceGateway;
use selection::SelectionState;

/// Registers the dashboard pipeline: catalogue, calculator, gateway,
/// session state and the controller systems.
///
/// `Catalogue`, `CostCalculator` and `PersistenceGateway` are taken from the
/// world if already inserted, so callers inject configured instances before
/// adding the plugin. Missing ones fall back to their defaults (built-in
/// table, default population, unconfigured store).
pub struct BudgetPlugin;

impl Plugin for BudgetPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<Catalogue>()
            .init_resource::<CostCalculator>()
            .init_resource::<PersistenceGateway>()
            .init_resource::<PageState>()
            .init_resource::<SelectionState>()
            .init_resource::<PageView>()
            .add_event::<PageEvent>()
            .add_systems(Startup, (log_startup, page::derive_initial_view))
            .add_systems(Update, page::process_page_events);
    }
}

fn log_startup(
    catalogue: Res<Catalogue>,
    calculator: Res<CostCalculator>,
    gateway: Res<PersistenceGateway>,
) {
    info!(
        "Dashboard ready: {} agencies, ${:.2}T total, population {}M, store '{}'",
        catalogue.len(),
        catalogue.total_budget() / 1_000_000.0,
        calculator.population_millions(),
        gateway.store_name()
    );
    if !gateway.is_configured() {
        warn!(
            "No service-account credentials found; submissions will fail until one is supplied"
        );
    }
}
