//! # TestDashboard: headless harness for the dashboard pipeline
//!
//! Wraps a `bevy::app::App` with `MinimalPlugins` + [`BudgetPlugin`] and a
//! [`MemoryStore`], so tests can drive page events and inspect the derived
//! view and the rows that reached the store without a window.

use bevy::app::App;
use bevy::prelude::*;

use crate::catalogue::{AgencyRecord, Catalogue};
use crate::cost::CostCalculator;
use crate::page::{PageEvent, PageState, PageView};
use crate::persistence::{CellValue, MemoryStore, PersistenceGateway};
use crate::selection::SelectionState;
use crate::BudgetPlugin;

pub struct TestDashboard {
    app: App,
    store: MemoryStore,
}

impl Default for TestDashboard {
    fn default() -> Self {
        Self::new()
    }
}

impl TestDashboard {
    // -----------------------------------------------------------------------
    // Constructors
    // -----------------------------------------------------------------------

    /// Built-in catalogue, default population, recording store.
    pub fn new() -> Self {
        Self::build(Catalogue::builtin(), MemoryStore::new())
    }

    /// Custom catalogue from `(name, budget_millions)` pairs.
    ///
    /// Panics on an invalid table; test input is expected to be valid.
    pub fn with_agencies(agencies: &[(&str, f64)]) -> Self {
        let catalogue = Catalogue::new(
            agencies
                .iter()
                .map(|&(name, budget)| AgencyRecord::new(name, budget)),
        )
        .expect("valid test catalogue");
        Self::build(catalogue, MemoryStore::new())
    }

    /// Replace the store (e.g. with [`MemoryStore::failing`]).
    pub fn with_store(mut self, store: MemoryStore) -> Self {
        self.app
            .insert_resource(PersistenceGateway::new(store.clone()));
        self.store = store;
        self
    }

    pub fn with_population(mut self, population_millions: f64) -> Self {
        let calculator =
            CostCalculator::new(population_millions).expect("valid test population");
        let world = self.app.world_mut();
        let view = PageView::derive(
            world.resource::<Catalogue>(),
            &calculator,
            world.resource::<PageState>(),
            world.resource::<SelectionState>(),
        );
        world.insert_resource(calculator);
        world.insert_resource(view);
        self
    }

    fn build(catalogue: Catalogue, store: MemoryStore) -> Self {
        let mut app = App::new();
        app.add_plugins(MinimalPlugins);
        app.insert_resource(catalogue);
        app.insert_resource(PersistenceGateway::new(store.clone()));
        app.add_plugins(BudgetPlugin);
        // Run Startup so the first view is derived.
        app.update();
        Self { app, store }
    }

    // -----------------------------------------------------------------------
    // Interaction
    // -----------------------------------------------------------------------

    /// Queue an event and run one frame.
    pub fn send(&mut self, event: PageEvent) -> &mut Self {
        self.app.world_mut().send_event(event);
        self.app.update();
        self
    }

    /// Queue several events for the same frame, then run it.
    pub fn send_batch(&mut self, events: impl IntoIterator<Item = PageEvent>) -> &mut Self {
        for event in events {
            self.app.world_mut().send_event(event);
        }
        self.app.update();
        self
    }

    pub fn set_name(&mut self, name: &str) -> &mut Self {
        self.send(PageEvent::NameChanged(name.to_string()))
    }

    pub fn set_email(&mut self, email: &str) -> &mut Self {
        self.send(PageEvent::EmailChanged(email.to_string()))
    }

    pub fn check(&mut self, agency: &str) -> &mut Self {
        self.send(PageEvent::AgencyToggled {
            name: agency.to_string(),
            checked: true,
        })
    }

    pub fn uncheck(&mut self, agency: &str) -> &mut Self {
        self.send(PageEvent::AgencyToggled {
            name: agency.to_string(),
            checked: false,
        })
    }

    pub fn submit(&mut self) -> &mut Self {
        self.send(PageEvent::SubmitPressed)
    }

    /// Run frames with no input.
    pub fn idle(&mut self, frames: u32) -> &mut Self {
        for _ in 0..frames {
            self.app.update();
        }
        self
    }

    // -----------------------------------------------------------------------
    // Inspection
    // -----------------------------------------------------------------------

    pub fn resource<T: Resource>(&self) -> &T {
        self.app.world().resource::<T>()
    }

    pub fn view(&self) -> &PageView {
        self.resource::<PageView>()
    }

    pub fn selection(&self) -> &SelectionState {
        self.resource::<SelectionState>()
    }

    pub fn state(&self) -> &PageState {
        self.resource::<PageState>()
    }

    pub fn rows_appended(&self) -> Vec<Vec<CellValue>> {
        self.store.rows()
    }

    pub fn row_count(&self) -> usize {
        self.store.row_count()
    }
}
