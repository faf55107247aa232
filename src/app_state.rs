use std::sync::Arc;

use crate::services::completion::CompletionService;
use crate::services::pricing::PricingAdvisor;

/// Shared application state passed to all route handlers.
#[derive(Clone)]
pub struct AppState {
    pub advisor: Arc<PricingAdvisor>,
    /// Model name reported by the health check.
    pub model: Arc<str>,
}

impl AppState {
    pub fn new(completion: Arc<dyn CompletionService>, model: &str) -> Self {
        Self {
            advisor: Arc::new(PricingAdvisor::new(completion)),
            model: Arc::from(model),
        }
    }
}
