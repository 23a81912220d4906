use http::StatusCode;
use thiserror::Error;

/// Prefix identifying failures that originate past the gateway.
pub const UPSTREAM_ERROR_PREFIX: &str = "Python API Error: ";

pub const EMPTY_QUERY_MESSAGE: &str = "No query provided";

#[derive(Debug, Error)]
pub enum GatewayError {
    #[error("{msg}", msg = EMPTY_QUERY_MESSAGE)]
    EmptyQuery,
    /// The request body could not be read, e.g. it exceeded the size limit
    #[error("Invalid request body: {0}")]
    Body(String),
    #[error("{prefix}{body}", prefix = UPSTREAM_ERROR_PREFIX)]
    Upstream { status: StatusCode, body: String },
    #[error("{prefix}{0}", prefix = UPSTREAM_ERROR_PREFIX)]
    Transport(#[from] reqwest::Error),
}
