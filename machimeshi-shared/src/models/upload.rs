use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Response for a stored image upload.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, ToSchema)]
pub struct UploadResponse {
    /// Whether the upload was stored.
    pub success: bool,

    /// Human-readable outcome.
    pub message: String,

    /// Public URL the stored image is served from.
    pub url: String,

    /// Generated filename under the upload directory.
    pub filename: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Test the upload answer keeps its wire field names
    #[test]
    fn test_upload_response_serialization() {
        let response = UploadResponse {
            success: true,
            message: "stored".to_string(),
            url: "/static/images/abc.png".to_string(),
            filename: "abc.png".to_string(),
        };
        let json = serde_json::to_string(&response).unwrap();
        assert!(json.contains("\"url\":\"/static/images/abc.png\""));
        assert!(json.contains("\"success\":true"));
    }
}
