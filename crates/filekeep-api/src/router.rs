//! Route definitions for the Filekeep HTTP API.

use axum::{
    Router,
    extract::DefaultBodyLimit,
    routing::{get, post, put},
};
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::state::AppState;

/// Build the complete Axum router with every route and layer.
pub fn build_router(state: AppState) -> Router {
    let max_body = state.max_body_bytes;

    Router::new()
        .merge(health_routes())
        .merge(auth_routes())
        .merge(user_routes())
        .merge(file_routes())
        .layer(DefaultBodyLimit::max(max_body))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

fn health_routes() -> Router<AppState> {
    Router::new()
        .route("/status", get(handlers::health::status))
        .route("/stats", get(handlers::health::stats))
}

fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/connect", get(handlers::auth::connect))
        .route("/disconnect", get(handlers::auth::disconnect))
}

fn user_routes() -> Router<AppState> {
    Router::new()
        .route("/users", post(handlers::user::register))
        .route("/users/me", get(handlers::user::me))
}

fn file_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/files",
            get(handlers::file::list_files).post(handlers::file::create_file),
        )
        .route("/files/{id}", get(handlers::file::get_file))
        .route("/files/{id}/publish", put(handlers::file::publish))
        .route("/files/{id}/unpublish", put(handlers::file::unpublish))
        .route("/files/{id}/data", get(handlers::file::get_content))
}
