// Completion fan-out: discovery brief document, tracker row, notification emails.
// Each side effect is attempted independently; see `dispatch`.

pub mod brief;
pub mod dispatch;
pub mod handlers;
pub mod notify;
pub mod tracker;

use chrono::NaiveDate;

use crate::config::Config;

/// Placeholder used wherever a free-text field was not collected.
pub const NOT_SPECIFIED: &str = "Not specified";
/// Stands in for a missing business name in titles and subjects.
pub const UNNAMED_BUSINESS: &str = "Unnamed business";

/// Destinations and identity used by the fan-out, resolved once at startup.
#[derive(Debug, Clone)]
pub struct IntakeSettings {
    pub folder_id: String,
    pub sheet_id: String,
    pub sheet_range: String,
    pub operator_email: String,
    pub sender_email: String,
    pub sender_name: String,
    pub company_name: String,
    pub booking_link: String,
}

impl IntakeSettings {
    pub fn from_config(config: &Config) -> Self {
        Self {
            folder_id: config.google_folder_id.clone(),
            sheet_id: config.google_sheet_id.clone(),
            sheet_range: config.sheet_range.clone(),
            operator_email: config.operator_email.clone(),
            sender_email: config.sender_email.clone(),
            sender_name: config.sender_name.clone(),
            company_name: config.company_name.clone(),
            booking_link: config.booking_link.clone(),
        }
    }

    /// `From:` header value, e.g. `Travis <travis@example.com>`.
    pub fn from_header(&self) -> String {
        format!("{} <{}>", self.sender_name, self.sender_email)
    }
}

/// US-style short date used in the brief and the tracker, e.g. `3/7/2026`.
pub fn short_date(date: NaiveDate) -> String {
    date.format("%-m/%-d/%Y").to_string()
}
