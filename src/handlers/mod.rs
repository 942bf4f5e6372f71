//! HTTP handlers exposing the estimator as JSON

pub mod estimate;
pub mod health;
pub mod metrics_handler;
pub mod models;

use std::sync::Arc;

use crate::catalog::Catalog;
use crate::estimator::{Estimator, EstimatorSettings};
use crate::input::RequestRange;

/// Read-only state shared by all requests
#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<Catalog>,
    pub settings: Arc<EstimatorSettings>,
    pub requests: RequestRange,
}

impl AppState {
    pub fn new(catalog: Catalog, settings: EstimatorSettings, requests: RequestRange) -> Self {
        Self {
            catalog: Arc::new(catalog),
            settings: Arc::new(settings),
            requests,
        }
    }

    pub fn estimator(&self) -> Estimator<'_> {
        Estimator::new(&self.catalog, (*self.settings).clone())
    }
}

#[cfg(test)]
pub(crate) fn test_state() -> AppState {
    AppState::new(
        Catalog::builtin().clone(),
        EstimatorSettings::default(),
        RequestRange::default(),
    )
}
