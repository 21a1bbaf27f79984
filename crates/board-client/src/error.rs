//! Error types for the HTTP boundary.

use std::time::Duration;

use board_model::ValidationError;
use thiserror::Error;

/// Errors raised while talking to the remote API.
///
/// Every failure is caught at the call site and turned into a display string
/// with [`FetchError::display_message`]; none of them is fatal.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum FetchError {
    /// The request could not be sent or the connection failed.
    #[error("network error: {0}")]
    Network(String),

    /// No response within the configured timeout.
    #[error("request timed out after {}s", .0.as_secs())]
    Timeout(Duration),

    /// The response body was not the JSON we expected.
    #[error("invalid response body: {0}")]
    Decode(String),

    /// Non-2xx status, with the server's `message` when it sent one.
    #[error("server error ({status}): {}", .message.as_deref().unwrap_or("no message"))]
    Server {
        /// HTTP status code.
        status: u16,
        /// Message from the JSON error body.
        message: Option<String>,
    },

    /// A form failed its required-field check; nothing was sent.
    #[error(transparent)]
    Validation(#[from] ValidationError),
}

impl FetchError {
    /// Text to show the user: the server's own message when there is one,
    /// the validation hint for form errors, otherwise `fallback`.
    #[must_use]
    pub fn display_message(&self, fallback: &str) -> String {
        match self {
            Self::Server {
                message: Some(message),
                ..
            } if !message.trim().is_empty() => message.clone(),
            Self::Validation(err) => err.user_message().to_string(),
            _ => fallback.to_string(),
        }
    }

    /// Returns whether a retry could plausibly succeed.
    #[must_use]
    pub fn is_retryable(&self) -> bool {
        match self {
            Self::Network(_) | Self::Timeout(_) => true,
            Self::Server { status, .. } => *status >= 500 || *status == 429,
            Self::Decode(_) | Self::Validation(_) => false,
        }
    }
}

impl From<serde_json::Error> for FetchError {
    fn from(err: serde_json::Error) -> Self {
        Self::Decode(err.to_string())
    }
}

/// Result type alias for API operations.
pub type Result<T> = std::result::Result<T, FetchError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn server_message_is_shown_verbatim() {
        let err = FetchError::Server {
            status: 500,
            message: Some("db down".to_string()),
        };
        assert_eq!(err.display_message("Unable to load companies."), "db down");
    }

    #[test]
    fn fallback_covers_everything_else() {
        let fallback = "Unable to load companies. Please try again.";
        let missing = FetchError::Server {
            status: 500,
            message: None,
        };
        assert_eq!(missing.display_message(fallback), fallback);
        let blank = FetchError::Server {
            status: 404,
            message: Some("  ".to_string()),
        };
        assert_eq!(blank.display_message(fallback), fallback);
        let network = FetchError::Network("connection refused".to_string());
        assert_eq!(network.display_message(fallback), fallback);
    }

    #[test]
    fn validation_uses_form_hint() {
        let err = FetchError::from(ValidationError::MissingFields(vec!["title"]));
        assert_eq!(
            err.display_message("ignored"),
            "Please fill out all required fields."
        );
    }

    #[test]
    fn retryable_classification() {
        assert!(FetchError::Network("reset".to_string()).is_retryable());
        assert!(FetchError::Timeout(Duration::from_secs(1)).is_retryable());
        assert!(
            FetchError::Server {
                status: 503,
                message: None
            }
            .is_retryable()
        );
        assert!(
            !FetchError::Server {
                status: 400,
                message: None
            }
            .is_retryable()
        );
        assert!(!FetchError::Decode("eof".to_string()).is_retryable());
    }
}
