//! API routes module

pub mod health;
pub mod query;

use std::sync::Arc;

use crate::api::state::AppState;
use axum::Router;

type SharedState = Arc<AppState>;

/// Create the combined API router
pub fn router() -> Router<SharedState> {
    Router::new()
        // Query forwarding
        .nest("/query", query::router())
        // Liveness
        .nest("/health", health::router())
}
