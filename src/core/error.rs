use axum::{
    Json,
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::IntoResponse,
};
use serde::Serialize;
use tracing::error;

use crate::entities::user::PasswordError;

#[derive(Serialize)]
struct ErrorResponse {
    error: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    message: Option<String>,
}

/// Errore applicativo convertito in `{"error": ..., "message": ...}`
#[derive(Debug)]
pub struct AppError {
    status: StatusCode,
    error: &'static str,
    message: Option<String>,
}

impl AppError {
    pub fn new(status: StatusCode, error: &'static str) -> Self {
        Self {
            status,
            error,
            message: None,
        }
    }

    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    pub fn status(&self) -> StatusCode {
        self.status
    }

    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    // Common error constructors
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(StatusCode::NOT_FOUND, "Not found").with_message(message)
    }

    pub fn bad_request(error: &'static str) -> Self {
        Self::new(StatusCode::BAD_REQUEST, error)
    }

    pub fn unauthorized(message: impl Into<String>) -> Self {
        Self::new(StatusCode::UNAUTHORIZED, "Unauthorized").with_message(message)
    }

    pub fn conflict(message: impl Into<String>) -> Self {
        Self::new(StatusCode::CONFLICT, "Conflict").with_message(message)
    }

    pub fn internal_server_error(error: &'static str) -> Self {
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, error)
    }

    pub fn service_unavailable(error: &'static str) -> Self {
        Self::new(StatusCode::SERVICE_UNAVAILABLE, error)
    }

    pub fn invalid_id() -> Self {
        Self::bad_request("Invalid ID").with_message("ID must be a number")
    }

    pub fn validation(message: impl Into<String>) -> Self {
        Self::bad_request("Validation failed").with_message(message)
    }

    /// 500 con titolo specifico dell'operazione fallita e dettaglio del database
    pub fn database(error: &'static str, err: sqlx::Error) -> Self {
        error!("{}: {:?}", error, err);
        Self::internal_server_error(error).with_message(err.to_string())
    }
}

impl From<sqlx::Error> for AppError {
    fn from(err: sqlx::Error) -> Self {
        match err {
            sqlx::Error::RowNotFound => Self::not_found("Resource not found"),

            sqlx::Error::PoolTimedOut | sqlx::Error::PoolClosed => {
                Self::service_unavailable("Database unavailable")
            }

            other => Self::database("Database error", other),
        }
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(err: validator::ValidationErrors) -> Self {
        Self::validation(err.to_string())
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        Self::validation(rejection.body_text())
    }
}

impl From<PasswordError> for AppError {
    fn from(err: PasswordError) -> Self {
        match err {
            PasswordError::TooShort => Self::validation(err.to_string()),
            PasswordError::Hash(_) => {
                error!("{}", err);
                Self::internal_server_error("Failed to hash password")
            }
        }
    }
}

impl From<jsonwebtoken::errors::Error> for AppError {
    fn from(err: jsonwebtoken::errors::Error) -> Self {
        use jsonwebtoken::errors::ErrorKind;
        match err.kind() {
            ErrorKind::ExpiredSignature => Self::unauthorized("Token has expired"),
            _ => Self::unauthorized("Invalid token"),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        let body = Json(ErrorResponse {
            error: self.error,
            message: self.message,
        });
        (self.status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sqlx_error_mapping() {
        assert_eq!(
            AppError::from(sqlx::Error::RowNotFound).status(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            AppError::from(sqlx::Error::PoolTimedOut).status(),
            StatusCode::SERVICE_UNAVAILABLE
        );
        assert_eq!(
            AppError::from(sqlx::Error::WorkerCrashed).status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_password_error_mapping() {
        let err = AppError::from(PasswordError::TooShort);
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);
        assert!(err.message().unwrap().contains("at least 6"));
    }

    #[test]
    fn test_invalid_id() {
        let err = AppError::invalid_id();
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);
        assert_eq!(err.message(), Some("ID must be a number"));
    }
}
