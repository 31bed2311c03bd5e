use std::sync::Arc;

use crate::llm_client::LanguageModel;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Pluggable model backend. Production: `LlmClient`. Tests: a scripted stub.
    pub llm: Arc<dyn LanguageModel>,
}
