pub mod config;
pub mod db;
pub mod entities;
pub mod error;
pub mod forms;
pub mod models;
pub mod routes;
pub mod seed;
pub mod store;
pub mod templates;

use std::sync::Arc;

use axum::{Router, routing::get};
use tower_http::{services::ServeDir, trace::TraceLayer};

use crate::{config::Config, store::MovieStore};

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub store: MovieStore,
}

pub fn build_router(state: Arc<AppState>) -> Router {
    let static_files = ServeDir::new(&state.config.static_dir);

    Router::new()
        .route("/", get(routes::index))
        .route("/debug", get(routes::debug))
        .route("/add", get(routes::add_form).post(routes::add))
        .route("/edit/{id}", get(routes::edit_form).post(routes::edit))
        .route("/delete/{id}", get(routes::delete))
        .nest_service("/static", static_files)
        .with_state(state)
        .layer(TraceLayer::new_for_http())
}
