use metrics_exporter_prometheus::PrometheusHandle;
use std::sync::Arc;

use crate::application::services::CodeAllocator;

/// Shared state injected into every handler.
#[derive(Clone)]
pub struct AppState {
    pub allocator: Arc<CodeAllocator>,
    pub metrics: PrometheusHandle,
    /// Base used to compose `short_url`; `None` leaves it out of responses.
    pub redirect_base_url: Option<String>,
}

impl AppState {
    pub fn new(
        allocator: Arc<CodeAllocator>,
        metrics: PrometheusHandle,
        redirect_base_url: Option<String>,
    ) -> Self {
        Self {
            allocator,
            metrics,
            redirect_base_url,
        }
    }
}
