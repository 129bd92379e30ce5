use std::sync::Arc;

use axum::{Json, extract::State, http::StatusCode};

use crate::{
    AppState,
    error::{AppError, AppResult},
    extract::{ItemId, JsonBody},
    models::{GenreOut, NameInput},
};

pub async fn list(State(state): State<Arc<AppState>>) -> AppResult<Json<Vec<GenreOut>>> {
    let genres = state.store.list_genres().await?;
    Ok(Json(genres.into_iter().map(GenreOut::from).collect()))
}

pub async fn create(
    State(state): State<Arc<AppState>>,
    JsonBody(input): JsonBody<NameInput>,
) -> AppResult<StatusCode> {
    let genre = state.store.create_genre(input).await?;
    tracing::info!(id = genre.id, "genre created");
    Ok(StatusCode::CREATED)
}

pub async fn get(
    State(state): State<Arc<AppState>>,
    ItemId(id): ItemId,
) -> AppResult<Json<GenreOut>> {
    let genre = state.store.find_genre(id).await?.ok_or(AppError::NotFound)?;
    Ok(Json(genre.into()))
}

pub async fn update(
    State(state): State<Arc<AppState>>,
    ItemId(id): ItemId,
    JsonBody(input): JsonBody<NameInput>,
) -> AppResult<StatusCode> {
    state.store.rename_genre(id, input).await?.ok_or(AppError::NotFound)?;
    tracing::info!(id, "genre renamed");
    Ok(StatusCode::NO_CONTENT)
}

pub async fn delete(
    State(state): State<Arc<AppState>>,
    ItemId(id): ItemId,
) -> AppResult<StatusCode> {
    if !state.store.delete_genre(id).await? {
        return Err(AppError::NotFound);
    }
    tracing::info!(id, "genre deleted");
    Ok(StatusCode::NO_CONTENT)
}
