//! The request lifecycle of the chat client as an explicit two-state
//! machine. Nothing here touches the network or timers; the driver
//! feeds events in and the UI reads the resulting state.

use std::fmt;

use super::models::{Message, Role, Transcript};
use super::response::GatewayResponse;

pub const TRANSPORT_FAILURE_MESSAGE: &str = "Failed to contact server.";
pub const CLIENT_TIMEOUT_MESSAGE: &str = "Request timed out on client side.";
pub const ERROR_MESSAGE_PREFIX: &str = "Error: ";

/// Identifies one submission. Strictly increasing within a session.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RequestId(u64);

impl fmt::Display for RequestId {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RequestState {
    Idle,
    Pending(RequestId),
}

/// How a pending request ended.
#[derive(Clone, Debug, PartialEq)]
pub enum Outcome {
    Answered(GatewayResponse),
    TransportFailed,
    TimedOut,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SubmitRejected {
    /// Nothing left after trimming
    Empty,
    /// A request is already in flight
    Busy,
}

impl fmt::Display for SubmitRejected {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            SubmitRejected::Empty => write!(f, "query is empty"),
            SubmitRejected::Busy => write!(f, "a request is already in flight"),
        }
    }
}

/// A submission accepted by the session, ready to be sent.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PendingRequest {
    pub id: RequestId,
    pub query: String,
}

/// Enabled state of the input field and send button.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Controls {
    pub input_enabled: bool,
    pub submit_enabled: bool,
}

#[derive(Debug)]
pub struct ChatSession {
    transcript: Transcript,
    state: RequestState,
    last_id: u64,
    focus_input: bool,
}

impl Default for ChatSession {
    fn default() -> Self {
        Self::new()
    }
}

impl ChatSession {
    pub fn new() -> Self {
        Self {
            transcript: Transcript::new(),
            state: RequestState::Idle,
            last_id: 0,
            focus_input: true,
        }
    }

    pub fn state(&self) -> RequestState {
        self.state
    }

    pub fn is_pending(&self) -> bool {
        matches!(self.state, RequestState::Pending(_))
    }

    /// The pending indicator is shown exactly while a request is in flight.
    pub fn shows_loading(&self) -> bool {
        self.is_pending()
    }

    /// Derived from the state so the two can never disagree.
    pub fn controls(&self) -> Controls {
        let enabled = !self.is_pending();
        Controls {
            input_enabled: enabled,
            submit_enabled: enabled,
        }
    }

    /// Whether the input should hold focus. Cleared while pending and
    /// after a watchdog expiry.
    pub fn wants_focus(&self) -> bool {
        self.focus_input
    }

    pub fn transcript(&self) -> &Transcript {
        &self.transcript
    }

    /// `Idle --submit--> Pending`. Appends the user message and hands
    /// back the request the caller must send.
    pub fn submit(&mut self, text: &str) -> Result<PendingRequest, SubmitRejected> {
        if self.is_pending() {
            return Err(SubmitRejected::Busy);
        }
        let query = text.trim();
        if query.is_empty() {
            return Err(SubmitRejected::Empty);
        }

        self.last_id += 1;
        let id = RequestId(self.last_id);
        self.transcript.push(Message::new(Role::User, query));
        self.state = RequestState::Pending(id);
        self.focus_input = false;

        Ok(PendingRequest {
            id,
            query: query.to_string(),
        })
    }

    /// `Pending --outcome--> Idle`. Returns the assistant message that
    /// was appended, or `None` when the event belongs to a request that
    /// is no longer pending (e.g. a response arriving after the
    /// watchdog already fired).
    pub fn complete(&mut self, id: RequestId, outcome: Outcome) -> Option<&Message> {
        if self.state != RequestState::Pending(id) {
            tracing::debug!("Ignoring stale outcome for request {}", id);
            return None;
        }

        let (msg, refocus) = match outcome {
            Outcome::Answered(GatewayResponse::Success { answer, sources }) => {
                (Message::new_with_sources(&answer, sources), true)
            }
            Outcome::Answered(GatewayResponse::Failure { error }) => (
                Message::new(Role::Assistant, &format!("{}{}", ERROR_MESSAGE_PREFIX, error)),
                true,
            ),
            Outcome::TransportFailed => {
                (Message::new(Role::Assistant, TRANSPORT_FAILURE_MESSAGE), true)
            }
            Outcome::TimedOut => (Message::new(Role::Assistant, CLIENT_TIMEOUT_MESSAGE), false),
        };

        self.state = RequestState::Idle;
        self.focus_input = refocus;
        Some(self.transcript.push(msg))
    }
}
