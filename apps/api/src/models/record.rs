use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Structured outcome of a finished discovery interview.
///
/// Every field is optional: the model is asked to fill all of them, but
/// downstream rendering substitutes placeholders for anything missing.
///
/// Decoding is lenient per field. Scalars of the wrong type are converted to
/// text (`"teamSize": 8` becomes `"8"`), and a value that cannot be used
/// leaves only that field empty. Only a non-object body fails as a whole.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompletionRecord {
    #[serde(default, deserialize_with = "lenient_text", skip_serializing_if = "Option::is_none")]
    pub prospect_name: Option<String>,
    #[serde(default, deserialize_with = "lenient_text", skip_serializing_if = "Option::is_none")]
    pub prospect_email: Option<String>,
    #[serde(default, deserialize_with = "lenient_text", skip_serializing_if = "Option::is_none")]
    pub business_name: Option<String>,
    #[serde(default, deserialize_with = "lenient_text", skip_serializing_if = "Option::is_none")]
    pub industry: Option<String>,
    #[serde(default, deserialize_with = "lenient_text", skip_serializing_if = "Option::is_none")]
    pub team_size: Option<String>,
    #[serde(default, deserialize_with = "lenient_list", skip_serializing_if = "Option::is_none")]
    pub pain_points: Option<Vec<String>>,
    #[serde(default, deserialize_with = "lenient_list", skip_serializing_if = "Option::is_none")]
    pub current_tools: Option<Vec<String>>,
    #[serde(default, deserialize_with = "lenient_flag", skip_serializing_if = "Option::is_none")]
    pub decision_maker: Option<bool>,
    #[serde(default, deserialize_with = "lenient_text", skip_serializing_if = "Option::is_none")]
    pub urgency: Option<String>,
    #[serde(default, deserialize_with = "lenient_text", skip_serializing_if = "Option::is_none")]
    pub trigger: Option<String>,
    #[serde(default, deserialize_with = "lenient_text", skip_serializing_if = "Option::is_none")]
    pub recap: Option<String>,
}

impl CompletionRecord {
    pub fn primary_pain_point(&self) -> Option<&str> {
        self.pain_points
            .as_deref()
            .and_then(|p| p.first())
            .map(String::as_str)
    }

    /// Current tools joined with ", ", or `None` when there are none.
    pub fn tools_joined(&self) -> Option<String> {
        self.current_tools
            .as_deref()
            .filter(|t| !t.is_empty())
            .map(|t| t.join(", "))
    }

    pub fn is_decision_maker(&self) -> bool {
        self.decision_maker.unwrap_or(false)
    }

    /// Prospect address if one was collected; blank strings count as absent.
    pub fn contact_email(&self) -> Option<&str> {
        self.prospect_email
            .as_deref()
            .map(str::trim)
            .filter(|e| !e.is_empty())
    }

    pub fn first_name(&self) -> Option<&str> {
        self.prospect_name
            .as_deref()
            .and_then(|n| n.split_whitespace().next())
    }
}

/// Text form of a JSON scalar. Containers and null have none.
fn scalar_text(value: Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Null | Value::Array(_) | Value::Object(_) => None,
    }
}

fn lenient_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Value>::deserialize(deserializer)?.and_then(scalar_text))
}

/// Accepts an array of scalars, or a single scalar as a one-item list.
fn lenient_list<'de, D>(deserializer: D) -> Result<Option<Vec<String>>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<Value>::deserialize(deserializer)? {
        Some(Value::Array(items)) => Some(items.into_iter().filter_map(scalar_text).collect()),
        Some(other) => scalar_text(other).map(|item| vec![item]),
        None => None,
    })
}

/// Accepts a bool, or the strings "true"/"yes" and "false"/"no" in any case.
fn lenient_flag<'de, D>(deserializer: D) -> Result<Option<bool>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<Value>::deserialize(deserializer)? {
        Some(Value::Bool(b)) => Some(b),
        Some(Value::String(s)) => match s.trim().to_ascii_lowercase().as_str() {
            "true" | "yes" => Some(true),
            "false" | "no" => Some(false),
            _ => None,
        },
        _ => None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_deserializes_camel_case_and_ignores_unknown_keys() {
        let record: CompletionRecord = serde_json::from_value(json!({
            "complete": true,
            "prospectName": "Dana Ruiz",
            "painPoints": ["Manual invoicing", "Double entry"],
            "decisionMaker": true
        }))
        .unwrap();
        assert_eq!(record.prospect_name.as_deref(), Some("Dana Ruiz"));
        assert_eq!(record.primary_pain_point(), Some("Manual invoicing"));
        assert!(record.is_decision_maker());
        assert!(record.business_name.is_none());
    }

    #[test]
    fn test_absent_fields_are_not_serialized() {
        let record = CompletionRecord {
            industry: Some("Retail".into()),
            ..Default::default()
        };
        let value = serde_json::to_value(&record).unwrap();
        assert_eq!(value, json!({"industry": "Retail"}));
    }

    #[test]
    fn test_helpers_on_empty_record() {
        let record = CompletionRecord::default();
        assert_eq!(record.primary_pain_point(), None);
        assert_eq!(record.tools_joined(), None);
        assert_eq!(record.first_name(), None);
        assert!(!record.is_decision_maker());
    }

    #[test]
    fn test_blank_email_counts_as_absent() {
        let record = CompletionRecord {
            prospect_email: Some("   ".into()),
            ..Default::default()
        };
        assert_eq!(record.contact_email(), None);
    }

    #[test]
    fn test_tools_joined() {
        let record = CompletionRecord {
            current_tools: Some(vec!["QuickBooks".into(), "Gmail".into()]),
            ..Default::default()
        };
        assert_eq!(record.tools_joined().as_deref(), Some("QuickBooks, Gmail"));
    }

    #[test]
    fn test_scalar_of_wrong_type_becomes_text() {
        let record: CompletionRecord = serde_json::from_value(json!({
            "prospectName": "Dana",
            "businessName": "Ruiz",
            "teamSize": 8,
            "urgency": true
        }))
        .unwrap();
        assert_eq!(record.team_size.as_deref(), Some("8"));
        assert_eq!(record.urgency.as_deref(), Some("true"));
        assert_eq!(record.business_name.as_deref(), Some("Ruiz"));
    }

    #[test]
    fn test_unusable_field_only_clears_itself() {
        let record: CompletionRecord = serde_json::from_value(json!({
            "prospectEmail": "dana@x.com",
            "industry": {"name": "Retail"},
            "painPoints": "Manual invoicing",
            "currentTools": ["QuickBooks", 2, null],
            "decisionMaker": "Yes",
            "recap": null
        }))
        .unwrap();
        assert_eq!(record.contact_email(), Some("dana@x.com"));
        assert_eq!(record.industry, None);
        assert_eq!(record.primary_pain_point(), Some("Manual invoicing"));
        assert_eq!(record.tools_joined().as_deref(), Some("QuickBooks, 2"));
        assert_eq!(record.decision_maker, Some(true));
        assert_eq!(record.recap, None);
    }

    #[test]
    fn test_non_object_body_is_rejected() {
        assert!(serde_json::from_value::<CompletionRecord>(json!(["Dana"])).is_err());
    }
}
