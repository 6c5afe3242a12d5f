use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use http::header::{CONTENT_TYPE, HeaderValue};
use serde::Serialize;
use serde_json::Value;

/// RFC 7807 compliant error response body used throughout the API.
#[derive(Debug, Serialize)]
pub struct ProblemDetails {
    #[serde(rename = "type")]
    pub problem_type: String,
    pub title: String,
    pub status: u16,
    pub code: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<Value>,
}

impl ProblemDetails {
    pub fn new(status: StatusCode, code: &'static str, message: impl Into<String>) -> Self {
        let title = status.canonical_reason().unwrap_or("Error").to_string();
        Self {
            problem_type: format!("https://machimeshi.dev/problems/{code}"),
            title,
            status: status.as_u16(),
            code: code.to_string(),
            message: message.into(),
            details: None,
        }
    }

    pub fn with_details(mut self, details: Value) -> Self {
        self.details = Some(details);
        self
    }
}

impl IntoResponse for ProblemDetails {
    fn into_response(self) -> Response {
        let mut response = axum::Json(self).into_response();
        response.headers_mut().insert(
            CONTENT_TYPE,
            HeaderValue::from_static("application/problem+json"),
        );
        response.headers_mut().insert(
            http::header::CACHE_CONTROL,
            HeaderValue::from_static("no-store"),
        );
        response
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn new_fills_title_from_status() {
        let problem = ProblemDetails::new(StatusCode::NOT_FOUND, "not_found", "Menu not found");
        assert_eq!(problem.title, "Not Found");
        assert_eq!(problem.status, 404);
        assert!(problem.problem_type.ends_with("/not_found"));
    }

    #[test]
    fn details_are_omitted_when_absent() {
        let problem = ProblemDetails::new(StatusCode::BAD_REQUEST, "bad_request", "nope");
        let body = serde_json::to_value(&problem).unwrap();
        assert!(body.get("details").is_none());
    }

    #[test]
    fn response_uses_problem_media_type() {
        let problem = ProblemDetails::new(StatusCode::CONFLICT, "conflict", "Already in favorites")
            .with_details(json!({ "menu_id": "abc" }));
        let response = problem.into_response();
        assert_eq!(response.status(), StatusCode::CONFLICT);
        assert_eq!(
            response
                .headers()
                .get(CONTENT_TYPE)
                .and_then(|value| value.to_str().ok()),
            Some("application/problem+json")
        );
        assert_eq!(
            response
                .headers()
                .get(http::header::CACHE_CONTROL)
                .and_then(|value| value.to_str().ok()),
            Some("no-store")
        );
    }
}
