use crate::handlers;
use crate::state::AppState;
use axum::{routing::get, Router};

pub fn router(state: AppState) -> Router {
    Router::new()
        .route(
            "/api/headaches",
            get(handlers::list_entries).post(handlers::create_entry),
        )
        .route(
            "/api/headaches/:id",
            get(handlers::get_entry)
                .put(handlers::update_entry)
                .delete(handlers::delete_entry),
        )
        .route("/api/statistics", get(handlers::get_statistics))
        .route("/api/catalog", get(handlers::get_catalog))
        .route("/api/health", get(handlers::health))
        .with_state(state)
}
