//! Application state.

use std::sync::Arc;
use std::time::Instant;

use leasifai_core::TextGenerator;
use leasifai_core::chat::ChatOrchestrator;
use leasifai_core::feasibility::FeasibilityOrchestrator;

use crate::config::Config;

/// Shared application state.
///
/// Requests are fully independent; nothing here is mutable, so handlers need
/// no locking.
pub struct AppState {
    /// Server configuration
    pub config: Arc<Config>,
    /// Chat orchestrator (escalation gate + provider)
    pub chat: ChatOrchestrator,
    /// Feasibility orchestrator (provider + fallback)
    pub feasibility: FeasibilityOrchestrator,
    /// Server start time
    pub start_time: Instant,
}

impl AppState {
    /// Create new application state around a text-generation provider.
    pub fn new(config: Config, provider: Arc<dyn TextGenerator>) -> Arc<Self> {
        Arc::new(Self {
            chat: ChatOrchestrator::new(Arc::clone(&provider), config.chat_model.clone()),
            feasibility: FeasibilityOrchestrator::new(
                Arc::clone(&provider),
                config.feasibility_model.clone(),
            ),
            config: Arc::new(config),
            start_time: Instant::now(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use leasifai_core::{GenerateRequest, Result};

    struct NullProvider;

    #[async_trait::async_trait]
    impl TextGenerator for NullProvider {
        async fn generate(&self, _request: &GenerateRequest) -> Result<String> {
            Ok(String::new())
        }
    }

    #[test]
    fn test_state_construction() {
        let state = AppState::new(Config::default(), Arc::new(NullProvider));

        assert_eq!(state.config.chat_model, "gpt-4o-mini");
        assert!(state.start_time.elapsed().as_secs() < 1);
    }
}
