//! Stateless forwarding of a single query to the upstream answering
//! service. Every failure is reported in-band as `{"error": ...}` so
//! callers only ever need to look for the `error` key.

mod error;
mod upstream;

pub use error::{EMPTY_QUERY_MESSAGE, GatewayError, UPSTREAM_ERROR_PREFIX};
pub use upstream::{BoxedUpstream, HttpUpstream, Upstream};

use anyhow::Result;
use serde_json::{Value, json};

use crate::api::public::query::QueryErrorResponse;
use crate::core::AppConfig;

/// What the gateway hands back for one invocation.
#[derive(Debug, Clone, PartialEq)]
pub enum GatewayReply {
    /// Upstream body relayed verbatim
    Passthrough(String),
    /// Normalized error message, without the envelope
    Error(String),
}

impl GatewayReply {
    /// The JSON body to send to the client.
    pub fn into_body(self) -> String {
        match self {
            GatewayReply::Passthrough(body) => body,
            GatewayReply::Error(error) => json!(QueryErrorResponse { error }).to_string(),
        }
    }
}

impl From<GatewayError> for GatewayReply {
    fn from(err: GatewayError) -> Self {
        GatewayReply::Error(err.to_string())
    }
}

pub struct Gateway {
    upstream: BoxedUpstream,
}

impl Gateway {
    pub fn new(upstream: BoxedUpstream) -> Self {
        Self { upstream }
    }

    pub fn from_config(config: &AppConfig) -> Result<Self> {
        Ok(Self::new(Box::new(HttpUpstream::new(config)?)))
    }

    /// Handle one raw request body. Never fails: errors become an
    /// error envelope.
    pub async fn handle(&self, raw_body: &[u8]) -> GatewayReply {
        let Some(query) = extract_query(raw_body) else {
            tracing::debug!("Rejecting request without a query");
            return GatewayError::EmptyQuery.into();
        };

        match self.upstream.chat(&query).await {
            Ok(body) => GatewayReply::Passthrough(body),
            Err(err) => {
                tracing::error!("Upstream call failed: {}", err);
                err.into()
            }
        }
    }
}

/// Pull the `query` string out of a request body. Malformed JSON, a
/// missing or non-string field, and blank text all count as no query.
fn extract_query(raw_body: &[u8]) -> Option<String> {
    let body: Value = serde_json::from_slice(raw_body).ok()?;
    let query = body.get("query")?.as_str()?;
    if query.trim().is_empty() {
        return None;
    }
    Some(query.to_string())
}
