use axum::{
    body::Bytes,
    extract::{FromRequest, Request},
};
use serde_json::{Map, Value};

use crate::error::ApiError;

/// Request body as a JSON object. An empty body or any falsy JSON value (`null`, `false`,
/// `0`, `""`, `[]`) yields an empty object; any other non-object is rejected.
#[derive(Debug, Clone, Default)]
pub struct JsonObject(pub Map<String, Value>);

impl JsonObject {
    pub fn parse(bytes: &[u8]) -> Result<Self, ApiError> {
        if bytes.iter().all(u8::is_ascii_whitespace) {
            return Ok(Self::default());
        }
        match serde_json::from_slice::<Value>(bytes) {
            Ok(Value::Object(map)) => Ok(Self(map)),
            Ok(value) if is_falsy(&value) => Ok(Self::default()),
            Ok(other) => Err(ApiError::Unexpected(format!(
                "request body must be a JSON object, got {}",
                other
            ))),
            Err(e) => Err(ApiError::Unexpected(format!("invalid JSON body: {}", e))),
        }
    }
}

fn is_falsy(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(b) => !b,
        Value::Number(n) => n.as_f64() == Some(0.0),
        Value::String(s) => s.is_empty(),
        Value::Array(a) => a.is_empty(),
        Value::Object(o) => o.is_empty(),
    }
}

impl<S> FromRequest<S> for JsonObject
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let bytes = Bytes::from_request(req, state)
            .await
            .map_err(|e| ApiError::Unexpected(e.body_text()))?;
        Self::parse(&bytes)
    }
}
