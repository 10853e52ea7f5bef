//! Request extractors with `{"detail"}` rejections.

use axum::extract::rejection::JsonRejection;
use axum::extract::{FromRequest, Request};
use axum::http::StatusCode;
use axum::Json;

use crate::error::ApiError;

/// `axum::Json` whose rejections (wrong content type, malformed JSON,
/// missing or mistyped fields) become 422 validation errors. A body over the
/// upload limit stays a 413.
#[derive(Debug, Clone, Copy, Default)]
pub struct ApiJson<T>(pub T);

#[axum::async_trait]
impl<T, S> FromRequest<S> for ApiJson<T>
where
    Json<T>: FromRequest<S, Rejection = JsonRejection>,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        match Json::<T>::from_request(req, state).await {
            Ok(Json(value)) => Ok(ApiJson(value)),
            Err(rejection) => {
                tracing::debug!(
                    status = %rejection.status(),
                    error = %rejection.body_text(),
                    "Rejected JSON body"
                );
                if rejection.status() == StatusCode::PAYLOAD_TOO_LARGE {
                    return Err(ApiError::PayloadTooLarge(rejection.body_text()));
                }
                Err(ApiError::Unprocessable(rejection.body_text()))
            }
        }
    }
}
