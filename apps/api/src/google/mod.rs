//! Google Workspace client: Docs, Drive, Sheets and Gmail calls used by the
//! completion fan-out.
//!
//! Handlers depend on the `OfficeSuite` trait; `GoogleWorkspace` is the
//! production backend, built once at startup and shared through `AppState`.

use async_trait::async_trait;
use reqwest::{Client, RequestBuilder};
use serde::Deserialize;
use serde_json::{json, Value};
use thiserror::Error;
use tracing::debug;

pub mod auth;
pub mod mime;

use auth::{OAuthCredentials, TokenSource};
use mime::OutgoingEmail;

const DOCS_API: &str = "https://docs.googleapis.com/v1/documents";
const DRIVE_FILES_API: &str = "https://www.googleapis.com/drive/v3/files";
const SHEETS_API: &str = "https://sheets.googleapis.com/v4/spreadsheets";
const GMAIL_SEND_URL: &str = "https://gmail.googleapis.com/gmail/v1/users/me/messages/send";
const REQUEST_TIMEOUT_SECS: u64 = 30;

#[derive(Debug, Error)]
pub enum WorkspaceError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Google API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("Authentication error: {0}")]
    Auth(String),

    #[error("Google API response missing field '{0}'")]
    MissingField(&'static str),
}

/// Document, spreadsheet and mail operations the fan-out needs.
///
/// Carried in `AppState` as `Arc<dyn OfficeSuite>`.
#[async_trait]
pub trait OfficeSuite: Send + Sync {
    /// Creates an empty document and returns its id.
    async fn create_document(&self, title: &str) -> Result<String, WorkspaceError>;

    async fn move_document(&self, document_id: &str, folder_id: &str)
        -> Result<(), WorkspaceError>;

    /// Inserts `text` at the start of the document body.
    async fn insert_text(&self, document_id: &str, text: &str) -> Result<(), WorkspaceError>;

    async fn append_row(
        &self,
        spreadsheet_id: &str,
        range: &str,
        row: &[String],
    ) -> Result<(), WorkspaceError>;

    async fn send_message(&self, email: &OutgoingEmail) -> Result<(), WorkspaceError>;
}

/// Browser URL for a Google Doc.
pub fn document_url(document_id: &str) -> String {
    format!("https://docs.google.com/document/d/{document_id}/edit")
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct CreatedDocument {
    document_id: Option<String>,
}

pub struct GoogleWorkspace {
    http: Client,
    tokens: TokenSource,
}

impl GoogleWorkspace {
    pub fn new(credentials: OAuthCredentials) -> Result<Self, WorkspaceError> {
        let http = Client::builder()
            .timeout(std::time::Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()?;
        Ok(Self {
            tokens: TokenSource::new(http.clone(), credentials),
            http,
        })
    }

    /// Attaches a bearer token, sends, and decodes the JSON body of a 2xx reply.
    async fn execute(&self, request: RequestBuilder) -> Result<Value, WorkspaceError> {
        let token = self.tokens.access_token().await?;
        let response = request.bearer_auth(token).send().await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(WorkspaceError::Api {
                status: status.as_u16(),
                message: google_error_message(body),
            });
        }

        let body = response.text().await?;
        if body.trim().is_empty() {
            return Ok(Value::Null);
        }
        Ok(serde_json::from_str(&body).unwrap_or(Value::Null))
    }
}

#[async_trait]
impl OfficeSuite for GoogleWorkspace {
    async fn create_document(&self, title: &str) -> Result<String, WorkspaceError> {
        let body = self
            .execute(self.http.post(DOCS_API).json(&json!({ "title": title })))
            .await?;
        let created: CreatedDocument =
            serde_json::from_value(body).map_err(|_| WorkspaceError::MissingField("documentId"))?;
        let id = created
            .document_id
            .ok_or(WorkspaceError::MissingField("documentId"))?;
        debug!("Created document {id}");
        Ok(id)
    }

    async fn move_document(
        &self,
        document_id: &str,
        folder_id: &str,
    ) -> Result<(), WorkspaceError> {
        let request = self
            .http
            .patch(format!("{DRIVE_FILES_API}/{document_id}"))
            .query(&[("addParents", folder_id), ("fields", "id, parents")])
            .json(&json!({}));
        self.execute(request).await?;
        Ok(())
    }

    async fn insert_text(&self, document_id: &str, text: &str) -> Result<(), WorkspaceError> {
        let request = self
            .http
            .post(format!("{DOCS_API}/{document_id}:batchUpdate"))
            .json(&insert_text_request(text));
        self.execute(request).await?;
        Ok(())
    }

    async fn append_row(
        &self,
        spreadsheet_id: &str,
        range: &str,
        row: &[String],
    ) -> Result<(), WorkspaceError> {
        let request = self
            .http
            .post(format!(
                "{SHEETS_API}/{spreadsheet_id}/values/{range}:append"
            ))
            .query(&[("valueInputOption", "USER_ENTERED")])
            .json(&json!({ "values": [row] }));
        self.execute(request).await?;
        Ok(())
    }

    async fn send_message(&self, email: &OutgoingEmail) -> Result<(), WorkspaceError> {
        let request = self.http.post(GMAIL_SEND_URL).json(&json!({
            "raw": email.encode_raw(),
            "labelIds": ["INBOX"],
        }));
        self.execute(request).await?;
        Ok(())
    }
}

fn insert_text_request(text: &str) -> Value {
    json!({
        "requests": [{
            "insertText": {
                "location": { "index": 1 },
                "text": text
            }
        }]
    })
}

/// Google reports errors either as `{"error": {"message": ...}}` (REST APIs)
/// or `{"error": "...", "error_description": ...}` (OAuth). Falls back to the raw body.
pub(crate) fn google_error_message(body: String) -> String {
    let Ok(value) = serde_json::from_str::<Value>(&body) else {
        return body;
    };

    value
        .pointer("/error/message")
        .or_else(|| value.get("error_description"))
        .or_else(|| value.get("error"))
        .and_then(Value::as_str)
        .map(str::to_string)
        .unwrap_or(body)
}
