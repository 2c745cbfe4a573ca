use crate::error::RequestError;
use axum::response::Response;

pub mod http;

pub use http::{JsonExceptionFilter, PlainExceptionFilter};

/// The ExceptionFilter trait
///
/// Filters turn request failures into responses. A router uses exactly one
/// filter for every resource it serves, including panics caught in
/// controllers.
pub trait ExceptionFilter: Send + Sync + 'static {
    /// Catch a failed request and return the response to send instead
    fn catch(&self, error: RequestError) -> Response;
}
