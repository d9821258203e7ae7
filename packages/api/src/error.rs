//! Errors returned by [`crate::ApiClient`] and the service wrappers.

use thiserror::Error;

/// Message shown when neither the server nor the caller has anything better.
pub const GENERIC_ERROR: &str = "Something went wrong. Please try again.";

#[derive(Debug, Error)]
pub enum ApiError {
    /// The server answered 401. Stored credentials are already cleared and the
    /// session-expired hook has fired; callers should not surface this.
    #[error("Your session has expired. Please sign in again.")]
    SessionExpired,

    /// Any other non-success status. `message` is the body's `message` field.
    #[error("{}", .message.as_deref().unwrap_or("Request failed"))]
    Status { status: u16, message: Option<String> },

    #[error("Network error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Unexpected response from server: {0}")]
    Decode(#[from] serde_json::Error),

    /// A success envelope without the `data` the endpoint promises.
    #[error("Unexpected response from server: missing data")]
    MissingData,
}

impl ApiError {
    pub fn is_session_expired(&self) -> bool {
        matches!(self, ApiError::SessionExpired)
    }

    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Status { status, .. } => Some(*status),
            ApiError::SessionExpired => Some(401),
            ApiError::Transport(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }

    /// Server-supplied message, or `fallback`.
    pub fn message_or(&self, fallback: &str) -> String {
        match self {
            ApiError::Status {
                message: Some(message),
                ..
            } if !message.trim().is_empty() => message.clone(),
            _ => fallback.to_string(),
        }
    }

    /// [`message_or`](Self::message_or) with the generic fallback.
    pub fn user_message(&self) -> String {
        self.message_or(GENERIC_ERROR)
    }
}

/// Pull `message` out of an error body, if it is JSON and has one.
pub(crate) fn message_from_body(body: &[u8]) -> Option<String> {
    let value: serde_json::Value = serde_json::from_slice(body).ok()?;
    value
        .get("message")
        .and_then(|m| m.as_str())
        .map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_message_from_body() {
        let body = br#"{"success":false,"message":"Email or SRN already exists","errors":null}"#;
        assert_eq!(
            message_from_body(body).as_deref(),
            Some("Email or SRN already exists")
        );
        assert_eq!(message_from_body(b"<html>502</html>"), None);
        assert_eq!(message_from_body(br#"{"message":42}"#), None);
    }

    #[test]
    fn test_message_or_prefers_server_text() {
        let err = ApiError::Status {
            status: 409,
            message: Some("Email or SRN already exists".to_string()),
        };
        assert_eq!(err.message_or("Signup failed"), "Email or SRN already exists");
        assert_eq!(err.to_string(), "Email or SRN already exists");
        assert_eq!(err.status(), Some(409));
    }

    #[test]
    fn test_message_or_falls_back() {
        let blank = ApiError::Status {
            status: 500,
            message: Some("  ".to_string()),
        };
        assert_eq!(blank.message_or("Login failed. Please try again."), "Login failed. Please try again.");

        let missing = ApiError::Status {
            status: 500,
            message: None,
        };
        assert_eq!(missing.user_message(), GENERIC_ERROR);
        assert_eq!(missing.to_string(), "Request failed");
        assert_eq!(ApiError::MissingData.user_message(), GENERIC_ERROR);
    }

    #[test]
    fn test_session_expired() {
        let err = ApiError::SessionExpired;
        assert!(err.is_session_expired());
        assert_eq!(err.status(), Some(401));
    }
}
