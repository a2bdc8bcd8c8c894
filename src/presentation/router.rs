// Route table for the shell service
use crate::presentation::app_state::AppState;
use crate::presentation::handlers::{
    get_state, health_check, list_entries, post_api_event, post_event, shell_page,
};
use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;

pub fn build_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(shell_page))
        .route("/events", post(post_event))
        .route("/api/state", get(get_state))
        .route("/api/events", post(post_api_event))
        .route("/api/entries", get(list_entries))
        .route("/healthz", get(health_check))
        .with_state(state)
}
