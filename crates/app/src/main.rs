use std::fmt;
use std::time::Duration;

use bevy::prelude::*;
use bevy::window::PresentMode;
use bevy::winit::{UpdateMode, WinitSettings};

use budget::catalogue::Catalogue;
use budget::config::{ConfigError, DashboardConfig};
use budget::cost::CostCalculator;
use budget::persistence::{PersistenceError, PersistenceGateway, UnconfiguredStore};

/// Anything that stops the dashboard before the first frame.
#[derive(Debug)]
enum StartupError {
    Config(ConfigError),
    Credentials(PersistenceError),
}

impl fmt::Display for StartupError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StartupError::Config(e) => write!(f, "invalid configuration: {e}"),
            StartupError::Credentials(e) => write!(f, "cannot set up the spreadsheet store: {e}"),
        }
    }
}

impl std::error::Error for StartupError {}

impl From<ConfigError> for StartupError {
    fn from(e: ConfigError) -> Self {
        StartupError::Config(e)
    }
}

impl From<PersistenceError> for StartupError {
    fn from(e: PersistenceError) -> Self {
        StartupError::Credentials(e)
    }
}

/// Everything constructed once at startup and injected into the app.
struct Collaborators {
    catalogue: Catalogue,
    calculator: CostCalculator,
    gateway: PersistenceGateway,
}

fn build_collaborators() -> Result<Collaborators, StartupError> {
    let config = DashboardConfig::from_env()?;
    let catalogue = config.catalogue()?;
    let calculator = config.cost_calculator()?;
    let gateway = match sheets::store_from_env(&config.spreadsheet)? {
        Some(store) => PersistenceGateway::new(store),
        None => PersistenceGateway::new(UnconfiguredStore),
    };
    Ok(Collaborators {
        catalogue,
        calculator,
        gateway,
    })
}

fn main() -> AppExit {
    let collaborators = match build_collaborators() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("govfund: {e}");
            return AppExit::error();
        }
    };

    let mut app = App::new();

    app.add_plugins(DefaultPlugins.set(WindowPlugin {
        primary_window: Some(Window {
            title: ui::PAGE_TITLE.to_string(),
            resolution: (1280.0, 900.0).into(),
            present_mode: PresentMode::AutoVsync,
            ..default()
        }),
        ..default()
    }))
    .insert_resource(WinitSettings {
        focused_mode: UpdateMode::reactive_low_power(Duration::from_millis(16)),
        unfocused_mode: UpdateMode::reactive_low_power(Duration::from_millis(250)),
    })
    .insert_resource(collaborators.catalogue)
    .insert_resource(collaborators.calculator)
    .insert_resource(collaborators.gateway)
    .add_plugins((budget::BudgetPlugin, ui::UiPlugin));

    app.run()
}
