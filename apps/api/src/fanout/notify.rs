//! Notification emails sent once an intake completes: an internal alert for
//! the operator and a confirmation for the prospect.

use crate::fanout::{IntakeSettings, NOT_SPECIFIED, UNNAMED_BUSINESS};
use crate::google::mime::OutgoingEmail;
use crate::models::record::CompletionRecord;

pub fn operator_alert(
    record: &CompletionRecord,
    doc_url: &str,
    settings: &IntakeSettings,
) -> OutgoingEmail {
    let field = |value: Option<&str>| escape_html(value.unwrap_or(NOT_SPECIFIED));

    let doc_line = if doc_url.is_empty() {
        "<p><em>The discovery doc could not be created.</em></p>".to_string()
    } else {
        format!(
            "<p><a href=\"{}\">View Discovery Doc</a></p>",
            escape_html(doc_url)
        )
    };

    let html_body = format!(
        "<h2>New Discovery Intake</h2>
<p><strong>Business:</strong> {business}</p>
<p><strong>Contact:</strong> {contact}</p>
<p><strong>Email:</strong> {email}</p>
<p><strong>Industry:</strong> {industry}</p>
<p><strong>Primary Pain:</strong> {pain}</p>
<p><strong>Urgency:</strong> {urgency}</p>
<br>
{doc_line}
",
        business = field(record.business_name.as_deref()),
        contact = field(record.prospect_name.as_deref()),
        email = field(record.prospect_email.as_deref()),
        industry = field(record.industry.as_deref()),
        pain = field(record.primary_pain_point()),
        urgency = field(record.urgency.as_deref()),
    );

    OutgoingEmail {
        to: settings.operator_email.clone(),
        from: settings.from_header(),
        subject: format!(
            "New intake received: {}",
            record.business_name.as_deref().unwrap_or(UNNAMED_BUSINESS)
        ),
        html_body,
    }
}

/// Confirmation for the prospect, or `None` when no address was collected.
pub fn prospect_confirmation(
    record: &CompletionRecord,
    settings: &IntakeSettings,
) -> Option<OutgoingEmail> {
    let to = record.contact_email()?;
    let first_name = escape_html(record.first_name().unwrap_or("there"));

    let html_body = format!(
        "<p>Hi {first_name},</p>

<p>Thank you for taking the time to walk through the discovery process with us. We have everything we need to build your custom assessment and proposal.</p>

<p>Our team is reviewing your information now. We will have your proposal to you within 48 hours.</p>

<p>In the meantime, if you have any questions or want to chat sooner, feel free to reply to this email or book a call directly: <a href=\"{booking_link}\">Book a Call</a></p>

<p>Talk soon,</p>

<p>{sender}</p>
",
        booking_link = escape_html(&settings.booking_link),
        sender = escape_html(&settings.sender_name),
    );

    Some(OutgoingEmail {
        to: to.to_string(),
        from: settings.from_header(),
        subject: format!("Your {} assessment is underway", settings.company_name),
        html_body,
    })
}

fn escape_html(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::intake_settings as settings;

    #[test]
    fn test_operator_alert_summarises_lead() {
        let record = CompletionRecord {
            business_name: Some("Ruiz Bakery".into()),
            prospect_name: Some("Dana Ruiz".into()),
            pain_points: Some(vec!["Manual invoicing".into()]),
            ..Default::default()
        };
        let email = operator_alert(
            &record,
            "https://docs.google.com/document/d/1/edit",
            &settings(),
        );

        assert_eq!(email.to, "ops@example.com");
        assert_eq!(email.from, "Travis <travis@example.com>");
        assert_eq!(email.subject, "New intake received: Ruiz Bakery");
        assert!(email.html_body.contains("<strong>Contact:</strong> Dana Ruiz"));
        assert!(email.html_body.contains("<strong>Primary Pain:</strong> Manual invoicing"));
        assert!(email.html_body.contains("<strong>Urgency:</strong> Not specified"));
        assert!(email
            .html_body
            .contains("href=\"https://docs.google.com/document/d/1/edit\""));
    }

    #[test]
    fn test_operator_alert_without_doc() {
        let email = operator_alert(&CompletionRecord::default(), "", &settings());
        assert_eq!(email.subject, "New intake received: Unnamed business");
        assert!(email.html_body.contains("could not be created"));
        assert!(!email.html_body.contains("href"));
    }

    #[test]
    fn test_prospect_values_are_escaped() {
        let record = CompletionRecord {
            business_name: Some("<script>alert(1)</script>".into()),
            ..Default::default()
        };
        let email = operator_alert(&record, "", &settings());
        assert!(!email.html_body.contains("<script>"));
        assert!(email.html_body.contains("&lt;script&gt;"));
    }

    #[test]
    fn test_prospect_confirmation_uses_first_name() {
        let record = CompletionRecord {
            prospect_name: Some("Dana Ruiz".into()),
            prospect_email: Some("dana@ruizbakery.com".into()),
            ..Default::default()
        };
        let email = prospect_confirmation(&record, &settings()).unwrap();
        assert_eq!(email.to, "dana@ruizbakery.com");
        assert_eq!(email.subject, "Your Acme Ops assessment is underway");
        assert!(email.html_body.starts_with("<p>Hi Dana,</p>"));
        assert!(email.html_body.contains("href=\"https://book.example.com/x\""));
        assert!(email.html_body.contains("<p>Travis</p>"));
    }

    #[test]
    fn test_prospect_confirmation_falls_back_to_there() {
        let record = CompletionRecord {
            prospect_email: Some("dana@ruizbakery.com".into()),
            ..Default::default()
        };
        let email = prospect_confirmation(&record, &settings()).unwrap();
        assert!(email.html_body.starts_with("<p>Hi there,</p>"));
    }

    #[test]
    fn test_no_confirmation_without_email() {
        let record = CompletionRecord {
            prospect_name: Some("Dana Ruiz".into()),
            ..Default::default()
        };
        assert!(prospect_confirmation(&record, &settings()).is_none());
    }
}
