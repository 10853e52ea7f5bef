//! Generic create / list / delete handlers, instantiated once per resource
//! kind.

use axum::extract::{Path, State};
use axum::routing::{get, post};
use axum::{Json, Router};

use cantinho_core::{DeleteResponse, Record, Resource};

use crate::error::ApiError;
use crate::extract::ApiJson;
use crate::AppState;

/// Routes for kind `R`:
///
/// - `POST   /<collection>`            create from a JSON body
/// - `GET    /<collection>/:user_id`   list by owner
/// - `DELETE /<collection>/:id`        delete by id
pub fn routes<R: Resource>() -> Router<AppState> {
    list_and_delete_routes::<R>().route(&format!("/{}", R::COLLECTION), post(create::<R>))
}

/// Only the list and delete routes, for kinds whose create takes another
/// body shape.
///
/// Both share one path segment, so axum sees them as the same route with two
/// methods.
pub fn list_and_delete_routes<R: Resource>() -> Router<AppState> {
    Router::new().route(
        &format!("/{}/:key", R::COLLECTION),
        get(list_by_owner::<R>).delete(delete_by_id::<R>),
    )
}

pub async fn create<R: Resource>(
    State(state): State<AppState>,
    ApiJson(fields): ApiJson<R>,
) -> Result<Json<Record<R>>, ApiError> {
    let record = state.db.resources::<R>()?.create(fields).await?;
    Ok(Json(record))
}

pub async fn list_by_owner<R: Resource>(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> Result<Json<Vec<Record<R>>>, ApiError> {
    let records = state.db.resources::<R>()?.list_by_owner(&user_id).await?;
    Ok(Json(records))
}

pub async fn delete_by_id<R: Resource>(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<DeleteResponse>, ApiError> {
    state.db.resources::<R>()?.delete_by_id(&id).await?;
    Ok(Json(DeleteResponse::for_resource::<R>()))
}
