//! The one failure shape every API call resolves to.
//!
//! Screens display `message` and nothing else; `error` keeps the raw
//! transport or body detail for the log.

use thiserror::Error;

/// Normalized API error. `success` is implied false.
#[derive(Debug, Clone, Error)]
#[error("{message}")]
pub struct ApiError {
    /// HTTP status, when the request got far enough to have one
    pub status: Option<u16>,
    /// Human-readable message: the server's own when present, otherwise a
    /// generic fallback
    pub message: String,
    /// Raw detail (response body or transport error text)
    pub error: Option<String>,
}

impl ApiError {
    /// Build from a non-success HTTP response.
    ///
    /// The body is probed for the `message`/`error` fields the backend's
    /// various eras use; unparseable bodies fall back to a generic message.
    pub fn from_response(status: u16, body: &str) -> Self {
        let message = serde_json::from_str::<serde_json::Value>(body)
            .ok()
            .and_then(|value| {
                ["message", "error", "detail"]
                    .into_iter()
                    .find_map(|key| value.get(key).and_then(|v| v.as_str()).map(String::from))
            })
            .filter(|m| !m.trim().is_empty())
            .unwrap_or_else(|| format!("Request failed with status {}", status));

        let raw = body.trim();
        Self {
            status: Some(status),
            message,
            error: if raw.is_empty() {
                None
            } else {
                Some(preview(raw))
            },
        }
    }

    /// Build from a transport-level failure (no response at all)
    pub fn network(err: &reqwest::Error) -> Self {
        Self {
            status: None,
            message: "Network error: failed to reach the server".to_string(),
            error: Some(err.to_string()),
        }
    }

    /// Build from a body that arrived but does not parse as expected
    pub fn decode(detail: impl Into<String>) -> Self {
        Self {
            status: None,
            message: "Failed to parse server response".to_string(),
            error: Some(detail.into()),
        }
    }

    /// Build from a client-side validation failure (nothing was sent)
    pub fn validation(message: impl Into<String>) -> Self {
        Self {
            status: None,
            message: message.into(),
            error: None,
        }
    }

    pub fn is_unauthorized(&self) -> bool {
        self.status == Some(401)
    }

    pub fn is_not_found(&self) -> bool {
        self.status == Some(404)
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        ApiError::network(&err)
    }
}

/// First 500 chars of a body, enough for a log line
pub(crate) fn preview(body: &str) -> String {
    let cut: String = body.chars().take(500).collect();
    if cut.len() < body.len() {
        format!("{}...", cut)
    } else {
        cut
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_server_message_is_used() {
        let err = ApiError::from_response(400, r#"{"message": "Название обязательно"}"#);
        assert_eq!(err.status, Some(400));
        assert_eq!(err.message, "Название обязательно");
        assert!(err.error.is_some());
    }

    #[test]
    fn test_error_field_fallback() {
        let err = ApiError::from_response(500, r#"{"error": "db connection lost"}"#);
        assert_eq!(err.message, "db connection lost");
    }

    #[test]
    fn test_non_json_body_gets_generic_message() {
        let err = ApiError::from_response(502, "<html>Bad Gateway</html>");
        assert_eq!(err.message, "Request failed with status 502");
        assert_eq!(err.error.as_deref(), Some("<html>Bad Gateway</html>"));
    }

    #[test]
    fn test_empty_body() {
        let err = ApiError::from_response(500, "");
        assert!(!err.message.is_empty());
        assert_eq!(err.error, None);
    }

    #[test]
    fn test_classifiers() {
        assert!(ApiError::from_response(401, "").is_unauthorized());
        assert!(ApiError::from_response(404, "").is_not_found());
        assert!(!ApiError::from_response(500, "").is_not_found());
        assert!(!ApiError::validation("x").is_unauthorized());
    }

    #[test]
    fn test_preview_cuts_long_bodies() {
        let long = "x".repeat(2000);
        let p = preview(&long);
        assert!(p.ends_with("..."));
        assert!(p.len() < 600);
    }
}
