//! Tracker row. Maps a Completion Record onto the intake pipeline sheet.
//!
//! The sheet is positional: column order here must match the external sheet
//! exactly, and nothing detects a mismatch. `TRACKER_COLUMNS` names every
//! column so the mapping can be checked against the sheet header by eye.

use chrono::NaiveDate;

use crate::fanout::short_date;
use crate::models::record::CompletionRecord;

pub const TRACKER_WIDTH: usize = 23;

/// Header row of the pipeline sheet, columns A..W.
pub const TRACKER_COLUMNS: [&str; TRACKER_WIDTH] = [
    "Date Submitted",
    "Business Name",
    "Contact Name",
    "Email",
    "Industry",
    "Team Size",
    "Primary Pain Point",
    "Decision Maker?",
    "Urgency",
    "Source",
    "Referral Name",
    "Current Platform",
    "Migration Needed?",
    "Estimated Tier",
    "Discovery Doc Link",
    "Status",
    "Proposal Sent Date",
    "Proposal Amount",
    "Call Scheduled Date",
    "Next Follow-up",
    "Date Closed",
    "Closed Amount",
    "Notes",
];

const SOURCE: &str = "Website Chat";
const INITIAL_STATUS: &str = "New";

/// Builds the row appended for a new intake. Columns without a source in the
/// record stay blank for manual follow-up.
pub fn tracker_row(
    record: &CompletionRecord,
    doc_url: &str,
    submitted: NaiveDate,
) -> [String; TRACKER_WIDTH] {
    let text = |field: &Option<String>| field.clone().unwrap_or_default();

    [
        short_date(submitted),
        text(&record.business_name),
        text(&record.prospect_name),
        text(&record.prospect_email),
        text(&record.industry),
        text(&record.team_size),
        record.primary_pain_point().unwrap_or_default().to_string(),
        if record.is_decision_maker() { "Yes" } else { "Unknown" }.to_string(),
        text(&record.urgency),
        SOURCE.to_string(),
        String::new(),
        record.tools_joined().unwrap_or_default(),
        String::new(),
        String::new(),
        doc_url.to_string(),
        INITIAL_STATUS.to_string(),
        String::new(),
        String::new(),
        String::new(),
        String::new(),
        String::new(),
        String::new(),
        String::new(),
    ]
}

/// `Column=value` pairs for the non-blank cells of a row, for logs when the
/// append fails and the row has to be entered by hand.
pub fn describe_row(row: &[String]) -> String {
    TRACKER_COLUMNS
        .iter()
        .zip(row)
        .filter(|(_, value)| !value.is_empty())
        .map(|(column, value)| format!("{column}={value}"))
        .collect::<Vec<_>>()
        .join("; ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::full_record;

    fn column(name: &str) -> usize {
        TRACKER_COLUMNS
            .iter()
            .position(|c| *c == name)
            .unwrap_or_else(|| panic!("no column {name}"))
    }

    fn submitted() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, 18).unwrap()
    }

    #[test]
    fn test_first_seven_columns() {
        let row = tracker_row(&full_record(), "https://docs/x", submitted());
        assert_eq!(
            &row[..7],
            &[
                "10/18/2026",
                "Ruiz Bakery",
                "Dana Ruiz",
                "dana@ruizbakery.com",
                "Food & Beverage",
                "6-10",
                "Manual invoicing",
            ]
        );
    }

    #[test]
    fn test_derived_and_fixed_columns() {
        let row = tracker_row(&full_record(), "https://docs/x", submitted());
        assert_eq!(row[column("Decision Maker?")], "Yes");
        assert_eq!(row[column("Urgency")], "This quarter");
        assert_eq!(row[column("Source")], "Website Chat");
        assert_eq!(row[column("Current Platform")], "QuickBooks, Square");
        assert_eq!(row[column("Discovery Doc Link")], "https://docs/x");
        assert_eq!(row[column("Status")], "New");
    }

    #[test]
    fn test_manual_columns_stay_blank() {
        let row = tracker_row(&full_record(), "https://docs/x", submitted());
        for name in [
            "Referral Name",
            "Migration Needed?",
            "Estimated Tier",
            "Proposal Sent Date",
            "Proposal Amount",
            "Call Scheduled Date",
            "Next Follow-up",
            "Date Closed",
            "Closed Amount",
            "Notes",
        ] {
            assert_eq!(row[column(name)], "", "{name} should be blank");
        }
    }

    #[test]
    fn test_empty_record_row() {
        let row = tracker_row(&CompletionRecord::default(), "", submitted());
        assert_eq!(row.len(), TRACKER_WIDTH);
        assert_eq!(row[0], "10/18/2026");
        assert!(row[1..7].iter().all(String::is_empty));
        assert_eq!(row[column("Decision Maker?")], "Unknown");
        assert_eq!(row[column("Discovery Doc Link")], "");
        assert_eq!(row[column("Status")], "New");
    }

    #[test]
    fn test_describe_row_names_filled_cells() {
        let record = CompletionRecord {
            business_name: Some("Ruiz Bakery".into()),
            team_size: Some("8".into()),
            ..Default::default()
        };
        let row = tracker_row(&record, "", NaiveDate::from_ymd_opt(2026, 3, 4).unwrap());
        assert_eq!(
            describe_row(&row),
            "Date Submitted=3/4/2026; Business Name=Ruiz Bakery; Team Size=8; \
Decision Maker?=Unknown; Source=Website Chat; Status=New"
        );
    }
}
