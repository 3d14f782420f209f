//! Error body shapes the Gateway returns on non-success statuses.

use serde::Deserialize;
use std::collections::BTreeMap;

/// One field's validation errors: the Gateway sends either a single string
/// or a list of strings per field.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum FieldErrors {
    One(String),
    Many(Vec<String>),
}

impl FieldErrors {
    pub fn joined(&self) -> String {
        match self {
            FieldErrors::One(msg) => msg.clone(),
            FieldErrors::Many(msgs) => msgs.join(", "),
        }
    }
}

/// Body of a 4xx/5xx response. All members are optional — the Gateway is
/// inconsistent about which it fills in.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct GatewayErrorBody {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default)]
    pub errors: Option<BTreeMap<String, FieldErrors>>,
}

impl GatewayErrorBody {
    /// Per-field errors rendered one `field: message` pair per line.
    pub fn field_error_lines(&self) -> Option<String> {
        let errors = self.errors.as_ref()?;
        if errors.is_empty() {
            return None;
        }
        Some(
            errors
                .iter()
                .map(|(field, msgs)| format!("{}: {}", field, msgs.joined()))
                .collect::<Vec<_>>()
                .join("\n"),
        )
    }

    /// Whichever of `message`/`error` the Gateway filled in.
    pub fn plain_message(&self) -> Option<String> {
        self.message.clone().or_else(|| self.error.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn field_errors_join_lists() {
        let body: GatewayErrorBody = serde_json::from_str(
            r#"{"errors": {"quantity": ["must be positive", "required"], "date": "invalid"}}"#,
        )
        .unwrap();
        let lines = body.field_error_lines().unwrap();
        assert_eq!(lines, "date: invalid\nquantity: must be positive, required");
    }

    #[test]
    fn message_fallback_prefers_message_over_error() {
        let body: GatewayErrorBody =
            serde_json::from_str(r#"{"message": "nope", "error": "other"}"#).unwrap();
        assert_eq!(body.plain_message().unwrap(), "nope");

        let body: GatewayErrorBody = serde_json::from_str(r#"{"error": "other"}"#).unwrap();
        assert_eq!(body.plain_message().unwrap(), "other");
    }

    #[test]
    fn empty_body_yields_nothing() {
        let body: GatewayErrorBody = serde_json::from_str("{}").unwrap();
        assert!(body.field_error_lines().is_none());
        assert!(body.plain_message().is_none());
    }
}
