//! In-process fakes for the completion service and the office-suite backend.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use crate::fanout::IntakeSettings;
use crate::google::mime::OutgoingEmail;
use crate::google::{OfficeSuite, WorkspaceError};
use crate::interview::prompts::interview_system_prompt;
use crate::llm_client::{ChatModel, LlmError};
use crate::models::record::CompletionRecord;
use crate::models::transcript::Turn;
use crate::state::AppState;

pub fn intake_settings() -> IntakeSettings {
    IntakeSettings {
        folder_id: "folder-1".into(),
        sheet_id: "sheet-1".into(),
        sheet_range: "Pipeline!A:W".into(),
        operator_email: "ops@example.com".into(),
        sender_email: "travis@example.com".into(),
        sender_name: "Travis".into(),
        company_name: "Acme Ops".into(),
        booking_link: "https://book.example.com/x".into(),
    }
}

pub fn full_record() -> CompletionRecord {
    CompletionRecord {
        prospect_name: Some("Dana Ruiz".into()),
        prospect_email: Some("dana@ruizbakery.com".into()),
        business_name: Some("Ruiz Bakery".into()),
        industry: Some("Food & Beverage".into()),
        team_size: Some("6-10".into()),
        pain_points: Some(vec!["Manual invoicing".into(), "Double entry".into()]),
        current_tools: Some(vec!["QuickBooks".into(), "Square".into()]),
        decision_maker: Some(true),
        urgency: Some("This quarter".into()),
        trigger: Some("Lost a wholesale order".into()),
        recap: Some("- Invoicing\n- Integrations".into()),
    }
}

pub fn test_state(llm: Arc<dyn ChatModel>, office: Arc<dyn OfficeSuite>) -> AppState {
    let intake = intake_settings();
    AppState {
        llm,
        office,
        interview_prompt: interview_system_prompt(&intake.company_name, &intake.booking_link)
            .into(),
        intake: Arc::new(intake),
    }
}

#[derive(Debug, Clone)]
pub struct ModelCall {
    pub system: String,
    pub turns: Vec<Turn>,
    pub max_tokens: u32,
}

/// Returns the same reply (or error) for every call and records what it was asked.
pub struct ScriptedModel {
    reply: Result<String, String>,
    seen: Mutex<Vec<ModelCall>>,
}

impl ScriptedModel {
    pub fn replying(reply: &str) -> Self {
        Self {
            reply: Ok(reply.to_string()),
            seen: Mutex::new(Vec::new()),
        }
    }

    pub fn failing(message: &str) -> Self {
        Self {
            reply: Err(message.to_string()),
            seen: Mutex::new(Vec::new()),
        }
    }

    pub fn seen(&self) -> Vec<ModelCall> {
        self.seen.lock().unwrap().clone()
    }
}

#[async_trait]
impl ChatModel for ScriptedModel {
    async fn reply(
        &self,
        system: &str,
        turns: &[Turn],
        max_tokens: u32,
    ) -> Result<String, LlmError> {
        self.seen.lock().unwrap().push(ModelCall {
            system: system.to_string(),
            turns: turns.to_vec(),
            max_tokens,
        });
        self.reply.clone().map_err(|message| LlmError::Api {
            status: 529,
            message,
        })
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum OfficeCall {
    CreateDocument(String),
    MoveDocument {
        document_id: String,
        folder_id: String,
    },
    InsertText {
        document_id: String,
        text: String,
    },
    AppendRow {
        spreadsheet_id: String,
        range: String,
        row: Vec<String>,
    },
    SendMessage(OutgoingEmail),
}

/// Records every office-suite call; each family of operations can be told to fail.
#[derive(Default)]
pub struct FakeOffice {
    pub fail_documents: bool,
    pub fail_rows: bool,
    pub fail_mail: bool,
    calls: Mutex<Vec<OfficeCall>>,
}

impl FakeOffice {
    pub fn failing() -> Self {
        Self {
            fail_documents: true,
            fail_rows: true,
            fail_mail: true,
            ..Default::default()
        }
    }

    pub fn failing_documents() -> Self {
        Self {
            fail_documents: true,
            ..Default::default()
        }
    }

    pub fn calls(&self) -> Vec<OfficeCall> {
        self.calls.lock().unwrap().clone()
    }

    /// Addresses of every attempted email, sorted.
    pub fn recipients(&self) -> Vec<String> {
        let mut to: Vec<String> = self
            .calls()
            .into_iter()
            .filter_map(|c| match c {
                OfficeCall::SendMessage(email) => Some(email.to),
                _ => None,
            })
            .collect();
        to.sort();
        to
    }

    fn record(&self, call: OfficeCall, fail: bool) -> Result<(), WorkspaceError> {
        self.calls.lock().unwrap().push(call);
        if fail {
            Err(WorkspaceError::Api {
                status: 503,
                message: "simulated outage".into(),
            })
        } else {
            Ok(())
        }
    }
}

#[async_trait]
impl OfficeSuite for FakeOffice {
    async fn create_document(&self, title: &str) -> Result<String, WorkspaceError> {
        self.record(OfficeCall::CreateDocument(title.into()), self.fail_documents)?;
        Ok("doc-123".into())
    }

    async fn move_document(
        &self,
        document_id: &str,
        folder_id: &str,
    ) -> Result<(), WorkspaceError> {
        self.record(
            OfficeCall::MoveDocument {
                document_id: document_id.into(),
                folder_id: folder_id.into(),
            },
            self.fail_documents,
        )
    }

    async fn insert_text(&self, document_id: &str, text: &str) -> Result<(), WorkspaceError> {
        self.record(
            OfficeCall::InsertText {
                document_id: document_id.into(),
                text: text.into(),
            },
            self.fail_documents,
        )
    }

    async fn append_row(
        &self,
        spreadsheet_id: &str,
        range: &str,
        row: &[String],
    ) -> Result<(), WorkspaceError> {
        self.record(
            OfficeCall::AppendRow {
                spreadsheet_id: spreadsheet_id.into(),
                range: range.into(),
                row: row.to_vec(),
            },
            self.fail_rows,
        )
    }

    async fn send_message(&self, email: &OutgoingEmail) -> Result<(), WorkspaceError> {
        self.record(OfficeCall::SendMessage(email.clone()), self.fail_mail)
    }
}
