use std::sync::Arc;

use mindcheck_scoring::ReferenceData;
use mindcheck_storage::store::S3Store;

/// Shared application state, injected into all route handlers via Axum state.
#[derive(Clone)]
pub struct AppState {
    pub store: S3Store,
    /// Thresholds and risk bands, loaded once at start-up.
    pub reference: Arc<ReferenceData>,
}
