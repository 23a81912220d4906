//! Drives a `ChatSession` against a live transport. Each submission
//! spawns the gateway call and a watchdog timer; whichever reports first
//! settles the request and anything arriving later is dropped by the
//! session's request id check.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;

use super::models::Message;
use super::state::{ChatSession, Outcome, RequestId, SubmitRejected};
use super::transport::{BoxedTransport, GatewayTransport, HttpTransport};
use crate::core::AppConfig;

#[derive(Debug)]
struct ClientEvent {
    id: RequestId,
    outcome: Outcome,
}

pub struct ChatClient {
    session: ChatSession,
    transport: Arc<dyn GatewayTransport + Send + Sync + 'static>,
    watchdog_timeout: Duration,
    watchdog: Option<JoinHandle<()>>,
    tx: mpsc::UnboundedSender<ClientEvent>,
    rx: mpsc::UnboundedReceiver<ClientEvent>,
}

impl ChatClient {
    pub fn new(transport: BoxedTransport, watchdog_timeout: Duration) -> Self {
        let (tx, rx) = mpsc::unbounded_channel();
        Self {
            session: ChatSession::new(),
            transport: Arc::from(transport),
            watchdog_timeout,
            watchdog: None,
            tx,
            rx,
        }
    }

    pub fn from_config(config: &AppConfig) -> Self {
        Self::new(
            Box::new(HttpTransport::new(config)),
            config.watchdog_timeout,
        )
    }

    pub fn session(&self) -> &ChatSession {
        &self.session
    }

    /// Start a request. The gateway call runs detached and is never
    /// cancelled; only the watchdog is.
    pub fn submit(&mut self, text: &str) -> Result<RequestId, SubmitRejected> {
        let req = self.session.submit(text)?;
        let id = req.id;
        tracing::debug!("Submitting request {}", id);

        let transport = Arc::clone(&self.transport);
        let tx = self.tx.clone();
        tokio::spawn(async move {
            let outcome = match transport.send(&req.query).await {
                Ok(resp) => Outcome::Answered(resp),
                Err(e) => {
                    tracing::warn!("Request {} failed: {}", id, e);
                    Outcome::TransportFailed
                }
            };
            // The receiver only goes away with the client itself
            let _ = tx.send(ClientEvent { id, outcome });
        });

        let tx = self.tx.clone();
        let timeout = self.watchdog_timeout;
        self.watchdog = Some(tokio::spawn(async move {
            tokio::time::sleep(timeout).await;
            tracing::warn!("Request {} hit the client watchdog after {:?}", id, timeout);
            let _ = tx.send(ClientEvent {
                id,
                outcome: Outcome::TimedOut,
            });
        }));

        Ok(id)
    }

    /// Wait for the next event and apply it. Returns the appended
    /// assistant message, or `None` when the event was stale.
    pub async fn next_event(&mut self) -> Option<Message> {
        let ClientEvent { id, outcome } = self.rx.recv().await?;
        let settled = self.session.complete(id, outcome).cloned();

        if settled.is_some() {
            if let Some(watchdog) = self.watchdog.take() {
                watchdog.abort();
            }
        }

        settled
    }

    /// Submit `text` and wait until the session is idle again.
    pub async fn ask(&mut self, text: &str) -> Result<Message, SubmitRejected> {
        self.submit(text)?;
        loop {
            if let Some(msg) = self.next_event().await {
                return Ok(msg);
            }
        }
    }
}
