//! Axum route handler for interview turns.

use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};
use serde::Serialize;
use serde_json::Value;
use tracing::{debug, info, warn};

use crate::errors::AppError;
use crate::interview::prompts::INTERVIEW_MAX_TOKENS;
use crate::interview::reply::{parse_reply, Extraction, ReplyOutcome};
use crate::models::record::CompletionRecord;
use crate::models::transcript::{Transcript, TranscriptError};
use crate::state::AppState;

/// Next assistant message, plus the Completion Record merged flat into the
/// envelope once the interview is over.
#[derive(Debug, Serialize)]
pub struct ChatResponse {
    pub message: String,
    pub complete: bool,
    #[serde(flatten)]
    pub record: CompletionRecord,
}

/// POST /api/chat
///
/// Stateless: the client resubmits the whole transcript every turn, so a
/// failed turn can simply be retried.
pub async fn handle_chat(
    State(state): State<AppState>,
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<Json<ChatResponse>, AppError> {
    let Json(body) =
        payload.map_err(|_| AppError::Validation(TranscriptError::Missing.to_string()))?;
    let transcript = Transcript::from_request_body(&body)
        .map_err(|e| AppError::Validation(e.to_string()))?;

    debug!("Interview turn with {} messages", transcript.turns().len());

    let raw = state
        .llm
        .reply(
            &state.interview_prompt,
            transcript.turns(),
            INTERVIEW_MAX_TOKENS,
        )
        .await
        .map_err(|e| AppError::Upstream {
            context: "Failed to process message",
            details: e.to_string(),
        })?;

    let parsed = parse_reply(&raw);
    match &parsed.outcome {
        ReplyOutcome::InProgress => {}
        ReplyOutcome::Complete(Extraction::Found(record)) => info!(
            "Interview complete for {}",
            record.business_name.as_deref().unwrap_or("unnamed business")
        ),
        ReplyOutcome::Complete(Extraction::NotFound) => {
            warn!("Interview marked complete but no data block was found")
        }
        ReplyOutcome::Complete(Extraction::Malformed(e)) => {
            warn!("Failed to parse completion JSON: {e}")
        }
    }

    Ok(Json(ChatResponse {
        complete: parsed.is_complete(),
        record: parsed.record(),
        message: parsed.message,
    }))
}
