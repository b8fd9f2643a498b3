use std::sync::Arc;

use crate::analysis::narrative::NarrativeBackend;

/// Shared application state injected into all route handlers via Axum
/// extractors. Cheap to clone; no shared mutable state across requests.
#[derive(Clone)]
pub struct AppState {
    /// Pluggable narrative capability. `None` when no API key is
    /// configured; the pipeline then uses the deterministic fallback.
    pub narrative: Option<Arc<dyn NarrativeBackend>>,
}
