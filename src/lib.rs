//! HBnB API
//!
//! Rental listings service over a generic in-memory repository:
//! - Users, places, amenities and reviews behind one facade
//! - JSON HTTP API under `/api/v1`
//! - Identifier normalization and patch-style updates in the storage layer

pub mod api;
pub mod cli;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use config::AppConfig;

use std::sync::Arc;

use api::state::AppState;
use infrastructure::services::HbnbFacade;
use tracing::info;

/// Create the application state, seeding demo data when enabled
pub fn create_app_state(config: &AppConfig) -> anyhow::Result<AppState> {
    let facade = Arc::new(HbnbFacade::new());

    if config.seed.enabled {
        facade.seed()?;
        info!(counts = ?facade.counts(), "Demo data loaded");
    }

    Ok(AppState::new(facade))
}
