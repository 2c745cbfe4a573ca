//! JSON encoding and decoding for handlers

use crate::error::RequestError;
use axum::{
    body::Body,
    http::{HeaderValue, StatusCode, header},
    response::Response,
};
use serde::{Serialize, de::DeserializeOwned};
use serde_json::Value;
use std::collections::BTreeMap;

/// Decodes `body` into `blank`.
///
/// The body is laid over the blank instance: objects are merged field by
/// field, recursively, and any other value replaces what the blank held.
pub fn decode_into<T>(blank: T, body: &[u8]) -> Result<T, RequestError>
where
    T: Serialize + DeserializeOwned,
{
    let incoming: Value = serde_json::from_slice(body).map_err(RequestError::MalformedBody)?;
    let mut target = serde_json::to_value(&blank).map_err(RequestError::Encode)?;
    overlay(&mut target, incoming);
    serde_json::from_value(target).map_err(RequestError::MalformedBody)
}

fn overlay(target: &mut Value, incoming: Value) {
    match (target, incoming) {
        (Value::Object(existing), Value::Object(fields)) => {
            for (key, value) in fields {
                overlay(existing.entry(key).or_insert(Value::Null), value);
            }
        }
        (slot, value) => *slot = value,
    }
}

/// Encodes `value` as a `200 OK` JSON response.
pub fn encode<T: Serialize + ?Sized>(value: &T) -> Result<Response, RequestError> {
    let bytes = serde_json::to_vec(value).map_err(RequestError::Encode)?;
    let mut response = Response::new(Body::from(bytes));
    *response.status_mut() = StatusCode::OK;
    response.headers_mut().insert(
        header::CONTENT_TYPE,
        HeaderValue::from_static("application/json"),
    );
    Ok(response)
}

/// A single-entry object `{ "<key>": value }`.
pub fn keyed<K: ToString, V>(key: &K, value: V) -> BTreeMap<String, V> {
    BTreeMap::from([(key.to_string(), value)])
}
