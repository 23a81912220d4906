//! Router for the query API

use std::sync::Arc;

use axum::{
    Router,
    body::Bytes,
    extract::{State, rejection::BytesRejection},
    routing::post,
};

use crate::api::state::AppState;
use crate::gateway::{GatewayError, GatewayReply};

type SharedState = Arc<AppState>;

/// Forward a query to the upstream answering service. Always responds
/// with HTTP 200; failures are carried in the `error` field, including
/// bodies axum refuses to buffer (e.g. over the size limit).
async fn query_handler(
    State(state): State<SharedState>,
    body: Result<Bytes, BytesRejection>,
) -> GatewayReply {
    match body {
        Ok(body) => state.gateway.handle(&body).await,
        Err(rejection) => {
            tracing::warn!("Unreadable query body: {}", rejection.body_text());
            GatewayError::Body(rejection.body_text()).into()
        }
    }
}

/// Create the query router
pub fn router() -> Router<SharedState> {
    Router::new().route("/", post(query_handler))
}
