use actix_web::{HttpResponse, ResponseError, http::StatusCode};
use derive_more::Display;
use serde_json::json;

/// Rejection of an attendance payload. The only failure the service
/// distinguishes: anything else the transport layer handles by itself.
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    #[display(fmt = "latitude and longitude must be numbers")]
    CoordinatesNotNumbers,
}

impl ResponseError for ValidationError {
    fn status_code(&self) -> StatusCode {
        StatusCode::BAD_REQUEST
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(json!({
            "error": self.to_string()
        }))
    }
}
