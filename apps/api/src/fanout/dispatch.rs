//! Runs the three fan-out side effects and reports each outcome separately.
//!
//! The brief is created first because its URL goes into the tracker row and the
//! operator alert; the row and the emails then run concurrently. A failure in
//! one step never stops the others.

use chrono::NaiveDate;
use tracing::{error, info};

use crate::fanout::brief::{brief_title, render_brief};
use crate::fanout::notify::{operator_alert, prospect_confirmation};
use crate::fanout::tracker::{describe_row, tracker_row};
use crate::fanout::IntakeSettings;
use crate::google::{document_url, OfficeSuite, WorkspaceError};
use crate::models::record::CompletionRecord;

/// Per-operation outcome of one fan-out run.
#[derive(Debug)]
pub struct FanoutReport {
    /// URL of the created brief.
    pub document: Result<String, WorkspaceError>,
    pub tracker: Result<(), WorkspaceError>,
    pub operator_email: Result<(), WorkspaceError>,
    /// `None` when no prospect address was collected.
    pub prospect_email: Option<Result<(), WorkspaceError>>,
}

impl FanoutReport {
    /// Brief URL, or an empty string if the document step failed.
    pub fn doc_url(&self) -> &str {
        self.document.as_deref().unwrap_or("")
    }

    pub fn failure_count(&self) -> usize {
        [
            self.document.is_err(),
            self.tracker.is_err(),
            self.operator_email.is_err(),
            matches!(self.prospect_email, Some(Err(_))),
        ]
        .into_iter()
        .filter(|failed| *failed)
        .count()
    }
}

pub async fn run_fanout(
    office: &dyn OfficeSuite,
    settings: &IntakeSettings,
    record: &CompletionRecord,
    today: NaiveDate,
) -> FanoutReport {
    let document = create_brief(office, settings, record, today).await;
    if let Err(e) = &document {
        error!("Failed to create discovery doc: {e}");
    }

    let doc_url = document.as_deref().unwrap_or("");
    let row = tracker_row(record, doc_url, today);
    let alert = operator_alert(record, doc_url, settings);
    let confirmation = prospect_confirmation(record, settings);

    let (tracker, operator_email, prospect_email) = tokio::join!(
        office.append_row(&settings.sheet_id, &settings.sheet_range, &row),
        office.send_message(&alert),
        async {
            match &confirmation {
                Some(email) => Some(office.send_message(email).await),
                None => None,
            }
        },
    );

    if let Err(e) = &tracker {
        error!(row = %describe_row(&row), "Failed to append tracker row: {e}");
    }
    if let Err(e) = &operator_email {
        error!("Failed to send notification email: {e}");
    }
    match &prospect_email {
        Some(Err(e)) => error!("Failed to send prospect email: {e}"),
        None => info!("No prospect email collected; skipping confirmation"),
        Some(Ok(())) => {}
    }

    let report = FanoutReport {
        document,
        tracker,
        operator_email,
        prospect_email,
    };
    info!(
        failures = report.failure_count(),
        "Fan-out finished for {}",
        record.business_name.as_deref().unwrap_or("unnamed business")
    );
    report
}

async fn create_brief(
    office: &dyn OfficeSuite,
    settings: &IntakeSettings,
    record: &CompletionRecord,
    today: NaiveDate,
) -> Result<String, WorkspaceError> {
    let document_id = office.create_document(&brief_title(record, today)).await?;
    office
        .move_document(&document_id, &settings.folder_id)
        .await?;
    office
        .insert_text(&document_id, &render_brief(record, today))
        .await?;
    Ok(document_url(&document_id))
}
