//! Access-code accounts: register and login.

use axum::extract::State;
use axum::Json;

use cantinho_core::defaults::{MSG_ACCOUNT_CREATED, MSG_LOGIN_OK};
use cantinho_core::{AuthResponse, Credentials};

use crate::error::ApiError;
use crate::extract::ApiJson;
use crate::AppState;

/// `POST /register`
pub async fn register(
    State(state): State<AppState>,
    ApiJson(credentials): ApiJson<Credentials>,
) -> Result<Json<AuthResponse>, ApiError> {
    let user_id = state.db.accounts()?.register(credentials).await?;

    Ok(Json(AuthResponse {
        message: MSG_ACCOUNT_CREATED.to_string(),
        user_id,
    }))
}

/// `POST /login`
pub async fn login(
    State(state): State<AppState>,
    ApiJson(credentials): ApiJson<Credentials>,
) -> Result<Json<AuthResponse>, ApiError> {
    let user_id = state.db.accounts()?.login(&credentials).await?;

    Ok(Json(AuthResponse {
        message: MSG_LOGIN_OK.to_string(),
        user_id,
    }))
}
