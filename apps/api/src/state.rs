use std::sync::Arc;

use crate::fanout::IntakeSettings;
use crate::google::OfficeSuite;
use crate::llm_client::ChatModel;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Completion service for interview turns. Default: `LlmClient`.
    pub llm: Arc<dyn ChatModel>,
    /// Document/sheet/mail backend for the fan-out. Default: `GoogleWorkspace`.
    pub office: Arc<dyn OfficeSuite>,
    /// Interview system prompt, rendered once at startup.
    pub interview_prompt: Arc<str>,
    pub intake: Arc<IntakeSettings>,
}
