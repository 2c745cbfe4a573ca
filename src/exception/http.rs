use crate::error::RequestError;
use crate::exception::ExceptionFilter;
use axum::{
    Json,
    response::{IntoResponse, Response},
};
use serde_json::json;

/// Default filter: answers with a JSON diagnostic body
#[derive(Debug, Default, Clone, Copy)]
pub struct JsonExceptionFilter;

impl ExceptionFilter for JsonExceptionFilter {
    fn catch(&self, error: RequestError) -> Response {
        let status = error.status();
        (
            status,
            Json(json!({
                "statusCode": status.as_u16(),
                "message": error.to_string(),
                "timestamp": chrono::Utc::now().to_rfc3339(),
            })),
        )
            .into_response()
    }
}

/// Answers with the bare status and its canonical reason, hiding the cause
#[derive(Debug, Default, Clone, Copy)]
pub struct PlainExceptionFilter;

impl ExceptionFilter for PlainExceptionFilter {
    fn catch(&self, error: RequestError) -> Response {
        let status = error.status();
        let reason = status.canonical_reason().unwrap_or("Internal Server Error");
        (status, reason).into_response()
    }
}
