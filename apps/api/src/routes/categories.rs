//! `/categorias` handlers.

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use tarefas_core::{CategoryDto, CategoryRequest};

use crate::error::ApiError;
use crate::AppState;

/// `POST /categorias`
pub async fn create(
    State(state): State<AppState>,
    payload: Result<Json<CategoryRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<CategoryDto>), ApiError> {
    let Json(request) = payload?;
    let category = state.categories.create(request).await?;
    Ok((StatusCode::CREATED, Json(category)))
}

/// `GET /categorias`
pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<CategoryDto>>, ApiError> {
    Ok(Json(state.categories.list().await?))
}

/// `GET /categorias/{id}`
pub async fn get(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<CategoryDto>, ApiError> {
    Ok(Json(state.categories.get(&id).await?))
}

/// `PUT /categorias/{id}`
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<String>,
    payload: Result<Json<CategoryRequest>, JsonRejection>,
) -> Result<Json<CategoryDto>, ApiError> {
    let Json(request) = payload?;
    Ok(Json(state.categories.update(&id, request).await?))
}

/// `DELETE /categorias/{id}`
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, ApiError> {
    state.categories.delete(&id).await?;
    Ok(StatusCode::NO_CONTENT)
}
