use std::sync::Arc;

use axum::{Router, routing::get};

use crate::AppState;

pub mod directors;
pub mod genres;
pub mod movies;

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/movies/", get(movies::list).post(movies::create))
        .route("/movies/{id}", get(movies::get).put(movies::update).delete(movies::delete))
        .route("/directors/", get(directors::list).post(directors::create))
        .route(
            "/directors/{id}",
            get(directors::get).put(directors::update).delete(directors::delete),
        )
        .route("/genres/", get(genres::list).post(genres::create))
        .route("/genres/{id}", get(genres::get).put(genres::update).delete(genres::delete))
}
