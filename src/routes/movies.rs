use std::sync::Arc;

use axum::{Json, extract::State, http::StatusCode};

use crate::{
    AppState,
    error::{AppError, AppResult},
    extract::{FilterQuery, ItemId, JsonBody},
    models::{MovieFilter, MovieInput, MovieOut},
};

pub async fn list(
    State(state): State<Arc<AppState>>,
    FilterQuery(filter): FilterQuery<MovieFilter>,
) -> AppResult<Json<Vec<MovieOut>>> {
    let movies = state.store.list_movies(filter).await?;
    Ok(Json(movies.into_iter().map(MovieOut::from).collect()))
}

pub async fn create(
    State(state): State<Arc<AppState>>,
    JsonBody(input): JsonBody<MovieInput>,
) -> AppResult<StatusCode> {
    let movie = state.store.create_movie(input).await?;
    tracing::info!(id = movie.id, "movie created");
    Ok(StatusCode::CREATED)
}

pub async fn get(
    State(state): State<Arc<AppState>>,
    ItemId(id): ItemId,
) -> AppResult<Json<MovieOut>> {
    let movie = state.store.find_movie(id).await?.ok_or(AppError::NotFound)?;
    Ok(Json(movie.into()))
}

pub async fn update(
    State(state): State<Arc<AppState>>,
    ItemId(id): ItemId,
    JsonBody(input): JsonBody<MovieInput>,
) -> AppResult<StatusCode> {
    state.store.update_movie(id, input).await?.ok_or(AppError::NotFound)?;
    tracing::info!(id, "movie updated");
    Ok(StatusCode::NO_CONTENT)
}

pub async fn delete(
    State(state): State<Arc<AppState>>,
    ItemId(id): ItemId,
) -> AppResult<StatusCode> {
    if !state.store.delete_movie(id).await? {
        return Err(AppError::NotFound);
    }
    tracing::info!(id, "movie deleted");
    Ok(StatusCode::NO_CONTENT)
}
