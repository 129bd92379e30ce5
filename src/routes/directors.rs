use std::sync::Arc;

use axum::{Json, extract::State, http::StatusCode};

use crate::{
    AppState,
    error::{AppError, AppResult},
    extract::{ItemId, JsonBody},
    models::{DirectorOut, NameInput},
};

pub async fn list(State(state): State<Arc<AppState>>) -> AppResult<Json<Vec<DirectorOut>>> {
    let directors = state.store.list_directors().await?;
    Ok(Json(directors.into_iter().map(DirectorOut::from).collect()))
}

pub async fn create(
    State(state): State<Arc<AppState>>,
    JsonBody(input): JsonBody<NameInput>,
) -> AppResult<StatusCode> {
    let director = state.store.create_director(input).await?;
    tracing::info!(id = director.id, "director created");
    Ok(StatusCode::CREATED)
}

pub async fn get(
    State(state): State<Arc<AppState>>,
    ItemId(id): ItemId,
) -> AppResult<Json<DirectorOut>> {
    let director = state.store.find_director(id).await?.ok_or(AppError::NotFound)?;
    Ok(Json(director.into()))
}

pub async fn update(
    State(state): State<Arc<AppState>>,
    ItemId(id): ItemId,
    JsonBody(input): JsonBody<NameInput>,
) -> AppResult<StatusCode> {
    state.store.rename_director(id, input).await?.ok_or(AppError::NotFound)?;
    tracing::info!(id, "director renamed");
    Ok(StatusCode::NO_CONTENT)
}

pub async fn delete(
    State(state): State<Arc<AppState>>,
    ItemId(id): ItemId,
) -> AppResult<StatusCode> {
    if !state.store.delete_director(id).await? {
        return Err(AppError::NotFound);
    }
    tracing::info!(id, "director deleted");
    Ok(StatusCode::NO_CONTENT)
}
