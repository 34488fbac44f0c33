//! Discovery brief: the plain-text document created for each completed intake.
//!
//! Section 1 mirrors what the prospect told the assistant; section 2 is a
//! scaffold the team fills in before writing the proposal.

use chrono::NaiveDate;

use crate::fanout::{short_date, NOT_SPECIFIED, UNNAMED_BUSINESS};
use crate::models::record::CompletionRecord;

const RULE: &str = "═══════════════════════════════════════════════════════════";

/// `Discovery Brief - {business} - {YYYY-MM-DD}`
pub fn brief_title(record: &CompletionRecord, date: NaiveDate) -> String {
    format!(
        "Discovery Brief - {} - {}",
        record.business_name.as_deref().unwrap_or(UNNAMED_BUSINESS),
        date.format("%Y-%m-%d")
    )
}

pub fn render_brief(record: &CompletionRecord, date: NaiveDate) -> String {
    let field = |value: &Option<String>| value.as_deref().unwrap_or(NOT_SPECIFIED).to_string();

    let business = field(&record.business_name);
    let tools = record
        .tools_joined()
        .unwrap_or_else(|| NOT_SPECIFIED.to_string());
    let decision_maker = if record.is_decision_maker() {
        "Yes"
    } else {
        "No / Unknown"
    };
    let pain_points = match record.pain_points.as_deref() {
        Some(points) if !points.is_empty() => points
            .iter()
            .map(|p| format!("• {p}"))
            .collect::<Vec<_>>()
            .join("\n"),
        _ => format!("• {NOT_SPECIFIED}"),
    };
    let recap = record.recap.as_deref().unwrap_or("No recap generated");

    format!(
        "DISCOVERY BRIEF
{business}
Date: {date}

{RULE}

SECTION 1: DISCOVERY SUMMARY

CONTACT INFORMATION
• Name: {name}
• Email: {email}
• Business: {business}
• Industry: {industry}
• Team Size: {team_size}

CURRENT STATE
• Tools/Platforms: {tools}
• Decision Maker: {decision_maker}

PAIN POINTS
{pain_points}

READINESS
• Urgency: {urgency}
• Trigger: {trigger}

PROSPECT RECAP (What They Saw)
{recap}

{RULE}

SECTION 2: INTERNAL NOTES

[Add detailed recommendations, pricing rationale, and proposal strategy here]

RECOMMENDED TIER: [Foundation / Automation / AI Ops]

ESTIMATED VALUE: $[X,XXX - $XX,XXX]

OPEN QUESTIONS:
• 
• 

NEXT STEPS:
• Review and refine discovery brief
• Build custom proposal
• Send within 48 hours
",
        date = short_date(date),
        name = field(&record.prospect_name),
        email = field(&record.prospect_email),
        industry = field(&record.industry),
        team_size = field(&record.team_size),
        urgency = field(&record.urgency),
        trigger = field(&record.trigger),
    )
}
