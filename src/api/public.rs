//! Public API types

use axum::response::{IntoResponse, Response};
use http::{HeaderValue, StatusCode, header};

use crate::gateway::GatewayReply;

/// Convert a `GatewayReply` into an Axum compatible response. Errors are
/// reported in the body, never through the status code, because clients
/// tell success from failure by the presence of the `error` key.
impl IntoResponse for GatewayReply {
    fn into_response(self) -> Response {
        let mut response = (StatusCode::OK, self.into_body()).into_response();
        response.headers_mut().insert(
            header::CONTENT_TYPE,
            HeaderValue::from_static("application/json"),
        );
        response
    }
}

// Re-export public types from each route

pub mod health {
    pub use crate::api::routes::health::public::*;
}

pub mod query {
    pub use crate::api::routes::query::public::*;
}
