// src/presentation/http/error.rs
use crate::application::{
    ApplicationResult, error::ApplicationError, validation::FieldErrors,
};
use crate::domain::errors::DomainError;
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;

#[derive(Debug)]
enum ErrorPayload {
    Fields(FieldErrors),
    Message(ErrorBody),
}

#[derive(Debug)]
pub struct HttpError {
    status: StatusCode,
    payload: ErrorPayload,
}

impl HttpError {
    pub fn from_error(err: ApplicationError) -> Self {
        match err {
            ApplicationError::Validation(errors) => Self::fields(errors),
            ApplicationError::NotFound { entity } => Self::not_found(entity),
            ApplicationError::Domain(DomainError::Validation(msg)) => {
                Self::fields(FieldErrors::schema(msg))
            }
            ApplicationError::Domain(DomainError::NotFound(msg)) => {
                Self::message(StatusCode::NOT_FOUND, msg)
            }
            ApplicationError::Domain(DomainError::Persistence(msg)) => {
                tracing::error!(error = %msg, "request failed");
                Self::message(StatusCode::INTERNAL_SERVER_ERROR, msg)
            }
        }
    }

    /// 404 with the fixed `No <Entity> matches the given query` body.
    pub fn not_found(entity: &str) -> Self {
        Self {
            status: StatusCode::NOT_FOUND,
            payload: ErrorPayload::Message(ErrorBody {
                error: format!("No {entity} matches the given query"),
                message: None,
            }),
        }
    }

    pub fn status(&self) -> StatusCode {
        self.status
    }

    fn fields(errors: FieldErrors) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            payload: ErrorPayload::Fields(errors),
        }
    }

    pub(crate) fn message(status: StatusCode, message: String) -> Self {
        Self {
            status,
            payload: ErrorPayload::Message(ErrorBody {
                error: status.canonical_reason().unwrap_or("error").to_string(),
                message: Some(message),
            }),
        }
    }
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        match self.payload {
            ErrorPayload::Fields(errors) => (self.status, Json(errors)).into_response(),
            ErrorPayload::Message(body) => (self.status, Json(body)).into_response(),
        }
    }
}

#[derive(Debug, Serialize)]
struct ErrorBody {
    error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    message: Option<String>,
}

pub type HttpResult<T> = Result<T, HttpError>;

pub trait IntoHttpResult<T> {
    fn into_http(self) -> HttpResult<T>;
}

impl<T> IntoHttpResult<T> for ApplicationResult<T> {
    fn into_http(self) -> HttpResult<T> {
        self.map_err(HttpError::from_error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;
    use serde_json::{Value, json};

    async fn body_of(err: HttpError) -> (StatusCode, Value) {
        let response = err.into_response();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn not_found_uses_entity_name() {
        let (status, body) =
            body_of(HttpError::from_error(ApplicationError::not_found("Author"))).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body, json!({ "error": "No Author matches the given query" }));
    }

    #[tokio::test]
    async fn validation_errors_are_the_field_map() {
        let errors = FieldErrors::single("code", "Length must be 2.");
        let (status, body) = body_of(HttpError::from_error(errors.into())).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body, json!({ "code": ["Length must be 2."] }));
    }

    #[tokio::test]
    async fn persistence_failures_are_internal_errors() {
        let err = ApplicationError::Domain(DomainError::Persistence("disk I/O error".into()));
        let (status, body) = body_of(HttpError::from_error(err)).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            body,
            json!({ "error": "Internal Server Error", "message": "disk I/O error" })
        );
    }
}
