use async_trait::async_trait;
use thiserror::Error;

use super::response::GatewayResponse;
use crate::api::public::query::QueryRequest;
use crate::core::AppConfig;

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("gateway unreachable: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("gateway sent an unreadable body: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Carries one query from the chat client to the gateway.
#[async_trait]
pub trait GatewayTransport: Send + Sync {
    async fn send(&self, query: &str) -> Result<GatewayResponse, ClientError>;
}

pub type BoxedTransport = Box<dyn GatewayTransport + Send + Sync + 'static>;

pub struct HttpTransport {
    client: reqwest::Client,
    query_url: String,
}

impl HttpTransport {
    /// No request timeout is set here; the client watchdog bounds the
    /// wait instead.
    pub fn new(config: &AppConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            query_url: config.gateway_query_url(),
        }
    }
}

#[async_trait]
impl GatewayTransport for HttpTransport {
    async fn send(&self, query: &str) -> Result<GatewayResponse, ClientError> {
        // The status code is deliberately not checked, the body says
        // whether the call succeeded
        let body = self
            .client
            .post(&self.query_url)
            .header("Content-Type", "application/json")
            .json(&QueryRequest::new(query))
            .send()
            .await?
            .text()
            .await?;

        Ok(serde_json::from_str(&body)?)
    }
}
