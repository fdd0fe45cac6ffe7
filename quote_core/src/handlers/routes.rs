//! Route table for the relay server

use super::{health::handle_health, relay::handle_submit_quote};
use crate::AppState;
use axum::{
    routing::{get, post},
    Router,
};

pub fn create_routes(relay_path: &str) -> Router<AppState> {
    Router::new()
        .route("/health", get(handle_health))
        .route(relay_path, post(handle_submit_quote))
}
