use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

/// Speaker of a single interview turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
}

impl Role {
    pub fn as_str(self) -> &'static str {
        match self {
            Role::User => "user",
            Role::Assistant => "assistant",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Turn {
    pub role: Role,
    pub content: String,
}

#[cfg(test)]
impl Turn {
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: content.into(),
        }
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: Role::Assistant,
            content: content.into(),
        }
    }
}

#[derive(Debug, Error, PartialEq)]
pub enum TranscriptError {
    #[error("Messages array required")]
    Missing,

    #[error("Messages array required")]
    Empty,

    #[error("Invalid message at index {index}: {reason}")]
    InvalidTurn { index: usize, reason: String },
}

/// Chronological, non-empty list of interview turns as submitted by the client.
#[derive(Debug, Clone, PartialEq)]
pub struct Transcript(Vec<Turn>);

impl Transcript {
    /// Reads the `messages` array out of a request body.
    ///
    /// Turns are decoded one at a time so a bad entry can be reported by index.
    pub fn from_request_body(body: &Value) -> Result<Self, TranscriptError> {
        let messages = body
            .get("messages")
            .and_then(Value::as_array)
            .ok_or(TranscriptError::Missing)?;

        if messages.is_empty() {
            return Err(TranscriptError::Empty);
        }

        let turns = messages
            .iter()
            .enumerate()
            .map(|(index, raw)| {
                Turn::deserialize(raw).map_err(|e| TranscriptError::InvalidTurn {
                    index,
                    reason: e.to_string(),
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self(turns))
    }

    pub fn turns(&self) -> &[Turn] {
        &self.0
    }
}
