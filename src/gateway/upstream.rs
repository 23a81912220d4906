use anyhow::Result;
use async_trait::async_trait;
use http::StatusCode;
use serde::Serialize;

use super::GatewayError;
use crate::core::AppConfig;

#[derive(Serialize)]
struct UpstreamRequest<'a> {
    query: &'a str,
}

/// The answering service behind the gateway. Implementations make
/// exactly one attempt per call.
#[async_trait]
pub trait Upstream: Send + Sync {
    /// Returns the raw response body when the upstream answers with
    /// HTTP 200.
    async fn chat(&self, query: &str) -> Result<String, GatewayError>;
}

pub type BoxedUpstream = Box<dyn Upstream + Send + Sync + 'static>;

pub struct HttpUpstream {
    client: reqwest::Client,
    chat_url: String,
}

impl HttpUpstream {
    pub fn new(config: &AppConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .connect_timeout(config.connect_timeout)
            .timeout(config.request_timeout)
            .build()?;
        Ok(Self {
            client,
            chat_url: config.upstream_chat_url(),
        })
    }
}

#[async_trait]
impl Upstream for HttpUpstream {
    async fn chat(&self, query: &str) -> Result<String, GatewayError> {
        let resp = self
            .client
            .post(&self.chat_url)
            .header("Content-Type", "application/json")
            .json(&UpstreamRequest { query })
            .send()
            .await?;

        let status = resp.status();
        let body = resp.text().await?;

        if status != StatusCode::OK {
            return Err(GatewayError::Upstream { status, body });
        }

        Ok(body)
    }
}
