//! HTTP error mapping.
//!
//! Every failure leaves the server as `{"detail": "<message>"}`, the shape
//! the web client reads.

use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;

#[derive(Debug)]
pub enum ApiError {
    /// Store unavailable or a failed store call.
    Database(cantinho_core::Error),
    Unauthorized(String),
    NotFound(String),
    BadRequest(String),
    /// Request body or form failed validation.
    Unprocessable(String),
    PayloadTooLarge(String),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
            ApiError::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::Unprocessable(_) => StatusCode::UNPROCESSABLE_ENTITY,
            ApiError::PayloadTooLarge(_) => StatusCode::PAYLOAD_TOO_LARGE,
        }
    }
}

impl From<cantinho_core::Error> for ApiError {
    fn from(err: cantinho_core::Error) -> Self {
        use cantinho_core::Error;

        match err {
            Error::DuplicateAccount(_) => ApiError::BadRequest(
                "This access code is already in use. Please choose another one.".to_string(),
            ),
            Error::AccountNotFound(_) => ApiError::NotFound(
                "User not found. Check your code or create a new account.".to_string(),
            ),
            Error::InvalidCredentials => ApiError::Unauthorized(
                "Invalid credentials. Check your code, question and answer.".to_string(),
            ),
            Error::InvalidInput(msg) => ApiError::Unprocessable(msg),
            other => ApiError::Database(other),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        let status = self.status();
        let message = match self {
            ApiError::Database(err) => {
                tracing::error!(error = %err, "Request failed in store layer");
                err.to_string()
            }
            ApiError::Unauthorized(msg)
            | ApiError::NotFound(msg)
            | ApiError::BadRequest(msg)
            | ApiError::Unprocessable(msg)
            | ApiError::PayloadTooLarge(msg) => msg,
        };

        let body = Json(serde_json::json!({
            "detail": message,
        }));

        (status, body).into_response()
    }
}
