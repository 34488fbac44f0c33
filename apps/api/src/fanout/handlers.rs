//! Axum route handler for the completion fan-out.

use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};
use serde::Serialize;
use tracing::{info_span, Instrument};
use uuid::Uuid;

use crate::errors::AppError;
use crate::fanout::dispatch::run_fanout;
use crate::models::record::CompletionRecord;
use crate::state::AppState;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CompleteResponse {
    pub success: bool,
    pub doc_url: String,
}

/// POST /api/complete
///
/// Always reports success once the body is readable: individual side-effect
/// failures are logged server-side and only show up as an empty `docUrl`.
pub async fn handle_complete(
    State(state): State<AppState>,
    payload: Result<Json<CompletionRecord>, JsonRejection>,
) -> Result<Json<CompleteResponse>, AppError> {
    let Json(record) = payload.map_err(|e| AppError::Validation(e.body_text()))?;

    let intake_id = Uuid::new_v4();
    let today = chrono::Local::now().date_naive();

    let report = run_fanout(state.office.as_ref(), &state.intake, &record, today)
        .instrument(info_span!("fanout", %intake_id))
        .await;

    Ok(Json(CompleteResponse {
        success: true,
        doc_url: report.doc_url().to_string(),
    }))
}
