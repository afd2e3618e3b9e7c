//! `/itens` handlers.

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;
use tarefas_core::{ItemDto, ItemUpdateRequest, NewItemRequest};

use crate::error::ApiError;
use crate::AppState;

/// Query string of `GET /itens`.
#[derive(Debug, Default, Deserialize)]
pub struct ItemFilter {
    #[serde(rename = "idCategoria")]
    pub category_id: Option<String>,
}

/// `POST /itens`
pub async fn create(
    State(state): State<AppState>,
    payload: Result<Json<NewItemRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<ItemDto>), ApiError> {
    let Json(request) = payload?;
    let item = state.items.create(request).await?;
    Ok((StatusCode::CREATED, Json(item)))
}

/// `GET /itens` and `GET /itens?idCategoria={id}`
pub async fn list(
    State(state): State<AppState>,
    Query(filter): Query<ItemFilter>,
) -> Result<Json<Vec<ItemDto>>, ApiError> {
    Ok(Json(state.items.list(filter.category_id.as_deref()).await?))
}

/// `GET /itens/{id}`
pub async fn get(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<ItemDto>, ApiError> {
    Ok(Json(state.items.get(&id).await?))
}

/// `PUT /itens/{id}`
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<String>,
    payload: Result<Json<ItemUpdateRequest>, JsonRejection>,
) -> Result<Json<ItemDto>, ApiError> {
    let Json(request) = payload?;
    Ok(Json(state.items.update(&id, request).await?))
}

/// `DELETE /itens/{id}`
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, ApiError> {
    state.items.delete(&id).await?;
    Ok(StatusCode::NO_CONTENT)
}
