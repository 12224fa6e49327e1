// src/presentation/http/extractors.rs
use super::error::{HttpError, HttpResult};
use axum::extract::{FromRequest, Request};
use bytes::Bytes;
use serde_json::Value;

/// Request body parsed as arbitrary JSON.
///
/// Empty or malformed bodies become `Value::Null` instead of a rejection;
/// the validators turn that into an `_schema` error after any 404 check
/// the handler runs first.
#[derive(Debug, Clone)]
pub struct JsonPayload(pub Value);

impl<S> FromRequest<S> for JsonPayload
where
    S: Send + Sync,
{
    type Rejection = HttpError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let bytes = Bytes::from_request(req, state)
            .await
            .map_err(|err| HttpError::message(err.status(), err.body_text()))?;

        match serde_json::from_slice(&bytes) {
            Ok(value) => Ok(Self(value)),
            Err(err) => {
                tracing::debug!(error = %err, "request body is not JSON");
                Ok(Self(Value::Null))
            }
        }
    }
}

/// Parses a `{id}` path segment. Anything that is not an integer cannot name
/// a row, so it is reported as a 404 for `entity`.
pub fn entity_id(raw: &str, entity: &str) -> HttpResult<i64> {
    raw.trim()
        .parse::<i64>()
        .map_err(|_| HttpError::not_found(entity))
}
