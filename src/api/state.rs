//! Application state for shared services

use std::sync::Arc;

use crate::infrastructure::services::HbnbFacade;

/// Application state shared by every handler
#[derive(Debug, Clone)]
pub struct AppState {
    pub facade: Arc<HbnbFacade>,
}

impl AppState {
    pub fn new(facade: Arc<HbnbFacade>) -> Self {
        Self { facade }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(Arc::new(HbnbFacade::new()))
    }
}
