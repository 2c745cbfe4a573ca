use crate::capability::IdKind;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, RestError>;

/// Setup errors, raised while configuring a router or registering resources.
#[derive(Debug, Error)]
pub enum RestError {
    #[error("{controller} registered at `{prefix}` provides none of: list, get, add, replace, delete")]
    NoCapabilities {
        prefix: String,
        controller: &'static str,
    },

    #[error("Invalid resource prefix `{prefix}`: {reason}")]
    InvalidPrefix { prefix: String, reason: &'static str },

    #[error("A resource is already registered at `{prefix}`")]
    DuplicatePrefix { prefix: String },

    #[error("Invalid configuration value for {key}: `{value}`")]
    InvalidConfig { key: String, value: String },
}

/// Failures of a single request. Each one aborts only the request it
/// happened in and is answered with a server error.
#[derive(Debug, Error)]
pub enum RequestError {
    #[error("Resource id not found in request path: {0}")]
    MissingId(String),

    #[error("Resource id `{segment}` is not a valid {kind} id")]
    InvalidId { segment: String, kind: IdKind },

    #[error("Failed to read request body: {0}")]
    UnreadableBody(String),

    #[error("Blank instance unavailable: {controller}::blank returned None")]
    BlankUnavailable { controller: &'static str },

    #[error("Malformed request body: {0}")]
    MalformedBody(#[source] serde_json::Error),

    #[error("{controller}::list returned no collection")]
    MissingCollection { controller: &'static str },

    #[error("Failed to encode response: {0}")]
    Encode(#[source] serde_json::Error),

    #[error("Controller panicked: {0}")]
    Panicked(String),
}

impl RequestError {
    pub fn status(&self) -> axum::http::StatusCode {
        axum::http::StatusCode::INTERNAL_SERVER_ERROR
    }
}

impl axum::response::IntoResponse for RequestError {
    fn into_response(self) -> axum::response::Response {
        (self.status(), self.to_string()).into_response()
    }
}
