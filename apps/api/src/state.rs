use std::sync::Arc;

use crate::catalog::CareerCatalog;
use crate::matching::ranker::ScoringWeights;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Read-only after startup; shared by every request without locking.
    pub catalog: Arc<CareerCatalog>,
    pub weights: Arc<ScoringWeights>,
}
