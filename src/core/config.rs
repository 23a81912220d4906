use std::env;
use std::time::Duration;

/// Gateway-to-upstream connection establishment limit.
pub const DEFAULT_CONNECT_TIMEOUT: Duration = Duration::from_secs(10);
/// Gateway-to-upstream total call limit.
pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(120);
/// Client-side fail-safe. Must stay longer than the request timeout so
/// the gateway's own error normally arrives first.
pub const DEFAULT_WATCHDOG_TIMEOUT: Duration = Duration::from_secs(125);

#[derive(Clone, Debug)]
pub struct AppConfig {
    /// Base URL of the upstream answering service, e.g. `http://python_api:8000`
    pub upstream_url: String,
    /// Base URL of the gateway as seen by the chat client
    pub gateway_url: String,
    pub connect_timeout: Duration,
    pub request_timeout: Duration,
    pub watchdog_timeout: Duration,
}

impl AppConfig {
    pub fn new(upstream_url: &str, gateway_url: &str) -> Self {
        Self {
            upstream_url: upstream_url.trim_end_matches('/').to_string(),
            gateway_url: gateway_url.trim_end_matches('/').to_string(),
            connect_timeout: DEFAULT_CONNECT_TIMEOUT,
            request_timeout: DEFAULT_REQUEST_TIMEOUT,
            watchdog_timeout: DEFAULT_WATCHDOG_TIMEOUT,
        }
    }

    pub fn upstream_chat_url(&self) -> String {
        format!("{}/api/chat", self.upstream_url)
    }

    pub fn gateway_query_url(&self) -> String {
        format!("{}/api/query", self.gateway_url)
    }
}

fn secs_from_env(key: &str, default: Duration) -> Duration {
    match env::var(key) {
        Ok(val) => match val.parse::<u64>() {
            Ok(secs) => Duration::from_secs(secs),
            Err(_) => {
                tracing::warn!("Ignoring invalid {}={}, using {:?}", key, val, default);
                default
            }
        },
        Err(_) => default,
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        let host = "127.0.0.1";
        let port = "2222";
        let upstream_url = env::var("POLICY_UPSTREAM_URL")
            .unwrap_or_else(|_| "http://python_api:8000".to_string());
        let gateway_url =
            env::var("POLICY_GATEWAY_URL").unwrap_or(format!("http://{}:{}", host, port));

        Self {
            connect_timeout: secs_from_env("POLICY_CONNECT_TIMEOUT_SECS", DEFAULT_CONNECT_TIMEOUT),
            request_timeout: secs_from_env("POLICY_REQUEST_TIMEOUT_SECS", DEFAULT_REQUEST_TIMEOUT),
            watchdog_timeout: secs_from_env(
                "POLICY_WATCHDOG_TIMEOUT_SECS",
                DEFAULT_WATCHDOG_TIMEOUT,
            ),
            ..Self::new(&upstream_url, &gateway_url)
        }
    }
}
