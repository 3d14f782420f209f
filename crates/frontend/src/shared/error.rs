//! The error taxonomy every Gateway operation is folded into.
//!
//! Errors are caught at the operation boundary and rendered into the page's
//! message banner; nothing here propagates into the view layer as a panic.

use contracts::shared::GatewayErrorBody;
use thiserror::Error;

#[derive(Debug, Clone, Error)]
pub enum ApiError {
    /// No credential in storage. The request is never sent.
    #[error("You are not logged in!")]
    NotAuthenticated,

    /// 401/403 from the Gateway. The stored credential has been cleared by
    /// the time this surfaces.
    #[error("Session expired. Please log in again.")]
    Unauthorized,

    /// Structured per-field errors, already rendered one `field: message`
    /// pair per line.
    #[error("{0}")]
    ValidationFailed(String),

    /// Network or parse failure. The payload is the diagnostic detail; the
    /// user sees the generic message.
    #[error("Failed to connect to server.")]
    RequestFailed(String),

    /// Non-success status with a plain message and no field breakdown.
    #[error("{0}")]
    Rejected(String),
}

impl ApiError {
    /// Classify a non-success response body. Does not decide 401/403
    /// handling — that belongs to the scoped-request layer.
    pub fn from_status_body(status: u16, body: &str) -> Self {
        let parsed: GatewayErrorBody = serde_json::from_str(body).unwrap_or_default();
        if let Some(lines) = parsed.field_error_lines() {
            return ApiError::ValidationFailed(lines);
        }
        if let Some(message) = parsed.plain_message() {
            return ApiError::Rejected(message);
        }
        if !body.trim().is_empty() {
            return ApiError::Rejected(body.trim().to_string());
        }
        ApiError::Rejected(format!("Request failed with status {}", status))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn field_errors_become_validation_failed() {
        let err = ApiError::from_status_body(400, r#"{"errors": {"quantity": ["too small"]}}"#);
        match err {
            ApiError::ValidationFailed(lines) => assert_eq!(lines, "quantity: too small"),
            other => panic!("unexpected: {:?}", other),
        }
    }

    #[test]
    fn message_becomes_rejected() {
        let err = ApiError::from_status_body(409, r#"{"message": "duplicate order id"}"#);
        assert_eq!(err.to_string(), "duplicate order id");
    }

    #[test]
    fn non_json_body_is_surfaced_raw() {
        let err = ApiError::from_status_body(500, "upstream exploded");
        assert_eq!(err.to_string(), "upstream exploded");
    }

    #[test]
    fn empty_body_falls_back_to_status() {
        let err = ApiError::from_status_body(502, "");
        assert_eq!(err.to_string(), "Request failed with status 502");
    }
}
