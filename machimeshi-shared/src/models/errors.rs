use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Error body used by endpoints that report a plain message.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq, ToSchema)]
pub struct ErrorResponse {
    /// The main error message.
    pub message: String,

    /// Optional additional details about the error.
    pub details: Option<String>,
}

impl ErrorResponse {
    /// Creates an error response with just a message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            details: None,
        }
    }

    /// Creates an error response with a message and details.
    pub fn with_details(message: impl Into<String>, details: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            details: Some(details.into()),
        }
    }
}

impl std::fmt::Display for ErrorResponse {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.details {
            Some(details) => write!(f, "{}: {}", self.message, details),
            None => write!(f, "{}", self.message),
        }
    }
}

impl std::error::Error for ErrorResponse {}

/// Success body for endpoints that answer with a plain message.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq, ToSchema)]
pub struct MessageResponse {
    /// Human-readable outcome.
    pub message: String,
}

impl MessageResponse {
    /// Creates a message response.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Test construction with and without details
    #[test]
    fn test_error_response_constructors() {
        let plain = ErrorResponse::new("Menu not found");
        assert_eq!(plain.message, "Menu not found");
        assert_eq!(plain.details, None);

        let detailed = ErrorResponse::with_details("Upload rejected", "file too large");
        assert_eq!(detailed.details.as_deref(), Some("file too large"));
    }

    /// Test Display folds details into the message
    #[test]
    fn test_error_response_display() {
        let detailed = ErrorResponse::with_details("Upload rejected", "file too large");
        assert_eq!(detailed.to_string(), "Upload rejected: file too large");
        assert_eq!(ErrorResponse::new("nope").to_string(), "nope");
    }

    /// Test deserialization from a raw body
    #[test]
    fn test_error_response_deserialization() {
        let json = r#"{"message":"Already in favorites","details":null}"#;
        let error: ErrorResponse = serde_json::from_str(json).unwrap();
        assert_eq!(error.message, "Already in favorites");
        assert_eq!(error.details, None);
    }
}
