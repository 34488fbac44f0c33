//! Reply parser. Detects the completion marker in a raw model reply and
//! extracts the embedded Completion Record.
//!
//! Wire contract with the interview prompt: the model ends its final message
//! with `[INTERVIEW_COMPLETE]` and a fenced block labelled `json`:
//!
//! ````text
//! Thanks, Dana! ...recap...
//! [INTERVIEW_COMPLETE]
//! ```json
//! { "prospectName": "Dana", ... }
//! ```
//! ````

use std::ops::Range;

use crate::models::record::CompletionRecord;

/// Exact literal the model emits once the interview is finished.
pub const COMPLETION_MARKER: &str = "[INTERVIEW_COMPLETE]";
const FENCE_OPEN: &str = "```json\n";
const FENCE_CLOSE: &str = "\n```";

/// Result of looking for the structured block in a completed reply.
#[derive(Debug)]
pub enum Extraction {
    Found(CompletionRecord),
    NotFound,
    Malformed(serde_json::Error),
}

#[derive(Debug)]
pub enum ReplyOutcome {
    InProgress,
    Complete(Extraction),
}

/// A model reply split into what the prospect sees and what the backend keeps.
#[derive(Debug)]
pub struct ParsedReply {
    /// Reply text with the marker and the data block removed.
    pub message: String,
    pub outcome: ReplyOutcome,
}

impl ParsedReply {
    pub fn is_complete(&self) -> bool {
        matches!(self.outcome, ReplyOutcome::Complete(_))
    }

    /// The decoded record, or an empty one when the interview is still running
    /// or the block was missing or malformed.
    pub fn record(&self) -> CompletionRecord {
        match &self.outcome {
            ReplyOutcome::Complete(Extraction::Found(record)) => record.clone(),
            _ => CompletionRecord::default(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum ScanState {
    Scanning,
    /// Byte offset just past the marker.
    FoundMarker { after: usize },
}

/// A located ```json block. `span` covers both fences, `body` only the payload.
#[derive(Debug, PartialEq)]
struct FencedBlock {
    span: Range<usize>,
    body: Range<usize>,
}

pub fn parse_reply(raw: &str) -> ParsedReply {
    match scan_for_marker(raw) {
        ScanState::Scanning => {
            let block = find_block(raw, 0).map(|b| b.span);
            ParsedReply {
                message: strip_spans(raw, block.into_iter().collect()),
                outcome: ReplyOutcome::InProgress,
            }
        }
        ScanState::FoundMarker { after } => {
            let marker = after - COMPLETION_MARKER.len()..after;
            // Prefer the block following the marker, else the first one anywhere.
            let block = find_block(raw, after).or_else(|| find_block(raw, 0));

            let extraction = match &block {
                Some(b) => decode_record(&raw[b.body.clone()]),
                None => Extraction::NotFound,
            };

            let mut cut = vec![marker];
            cut.extend(block.map(|b| b.span));

            ParsedReply {
                message: strip_spans(raw, cut),
                outcome: ReplyOutcome::Complete(extraction),
            }
        }
    }
}

/// Walks the reply line by line until the marker is seen.
fn scan_for_marker(raw: &str) -> ScanState {
    let mut state = ScanState::Scanning;
    let mut offset = 0;

    for line in raw.split_inclusive('\n') {
        state = match state {
            ScanState::Scanning => match line.find(COMPLETION_MARKER) {
                Some(at) => ScanState::FoundMarker {
                    after: offset + at + COMPLETION_MARKER.len(),
                },
                None => ScanState::Scanning,
            },
            found @ ScanState::FoundMarker { .. } => found,
        };
        if state != ScanState::Scanning {
            break;
        }
        offset += line.len();
    }

    state
}

fn decode_record(body: &str) -> Extraction {
    match serde_json::from_str::<CompletionRecord>(body.trim()) {
        Ok(record) => Extraction::Found(record),
        Err(e) => Extraction::Malformed(e),
    }
}

fn find_block(text: &str, from: usize) -> Option<FencedBlock> {
    let open = text.get(from..)?.find(FENCE_OPEN)? + from;
    let body_start = open + FENCE_OPEN.len();
    let close = text[body_start..].find(FENCE_CLOSE)? + body_start;

    Some(FencedBlock {
        span: open..close + FENCE_CLOSE.len(),
        body: body_start..close,
    })
}

/// Removes the given byte ranges (overlaps allowed), then trims.
fn strip_spans(raw: &str, mut spans: Vec<Range<usize>>) -> String {
    spans.sort_by_key(|s| s.start);

    let mut message = String::with_capacity(raw.len());
    let mut cursor = 0;
    for span in spans {
        if span.start > cursor {
            message.push_str(&raw[cursor..span.start]);
        }
        cursor = cursor.max(span.end);
    }
    message.push_str(&raw[cursor..]);

    message.trim().to_string()
}
