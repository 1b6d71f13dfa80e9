//! Error taxonomy shared by the remote resource client and the pages.

use serde::Deserialize;
use thiserror::Error;

/// Draft rejected before any request is made
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("{label} is required")]
    MissingField { label: &'static str },

    #[error("{label}: at most {max} files can be attached, {actual} selected")]
    TooManyAttachments {
        label: &'static str,
        max: usize,
        actual: usize,
    },
}

/// Any failed operation against the backend.
///
/// Transport errors, non-2xx statuses and undecodable bodies all end up
/// here; the page treats them alike and only the text differs.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ResourceError {
    #[error("request failed: {0}")]
    Transport(String),

    #[error("HTTP {status}{}", .message.as_ref().map(|m| format!(": {m}")).unwrap_or_default())]
    Status {
        status: u16,
        message: Option<String>,
    },

    #[error("invalid response: {0}")]
    Decode(String),

    #[error("cannot build request: {0}")]
    Encode(String),

    #[error(transparent)]
    Validation(#[from] ValidationError),
}

/// Error body as sent by the backend: `{ "message": "..." }`
#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    message: Option<String>,
}

impl ResourceError {
    /// Build a status error, picking the server message out of the body if present.
    pub fn from_status(status: u16, body: &str) -> Self {
        let message = serde_json::from_str::<ApiErrorBody>(body)
            .ok()
            .and_then(|b| b.message)
            .filter(|m| !m.is_empty());
        ResourceError::Status { status, message }
    }

    /// Text suitable for an alert: the server's own message when it sent one.
    pub fn server_message(&self) -> String {
        match self {
            ResourceError::Status {
                message: Some(message),
                ..
            } => message.clone(),
            other => other.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_status_reads_message() {
        let err = ResourceError::from_status(404, r#"{"message":"News not found"}"#);
        assert_eq!(
            err,
            ResourceError::Status {
                status: 404,
                message: Some("News not found".to_string())
            }
        );
        assert_eq!(err.server_message(), "News not found");
        assert_eq!(err.to_string(), "HTTP 404: News not found");
    }

    #[test]
    fn test_from_status_without_json_body() {
        let err = ResourceError::from_status(502, "<html>Bad gateway</html>");
        assert_eq!(err.to_string(), "HTTP 502");
        assert_eq!(err.server_message(), "HTTP 502");
    }

    #[test]
    fn test_validation_message() {
        let err: ResourceError = ValidationError::MissingField { label: "Title" }.into();
        assert_eq!(err.to_string(), "Title is required");
    }
}
