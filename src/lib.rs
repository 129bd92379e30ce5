pub mod config;
pub mod db;
pub mod entities;
pub mod error;
pub mod extract;
pub mod models;
pub mod routes;
pub mod store;

use std::sync::Arc;

use axum::Router;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use crate::store::Store;

pub struct AppState {
    pub store: Store,
}

impl AppState {
    pub fn new(store: Store) -> Arc<Self> {
        Arc::new(Self { store })
    }
}

pub fn router(state: Arc<AppState>) -> Router {
    routes::router()
        .with_state(state)
        .layer(CorsLayer::new().allow_origin(Any).allow_methods(Any).allow_headers(Any))
        .layer(TraceLayer::new_for_http())
}
