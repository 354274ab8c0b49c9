use crate::handlers;
use crate::state::AppState;
use axum::{routing::{delete, get}, Router};

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route(
            "/api/users/:identity/entries",
            get(handlers::get_entries).post(handlers::save_entry),
        )
        .route(
            "/api/users/:identity/entries/:date",
            delete(handlers::delete_entry),
        )
        .route("/api/users/:identity/stats", get(handlers::get_stats))
        .with_state(state)
}
