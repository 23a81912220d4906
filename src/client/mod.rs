//! The chat client: transcript, request lifecycle, transport to the
//! gateway and rendering.

mod driver;
pub mod models;
pub mod render;
mod response;
pub mod state;
mod transport;

pub use driver::ChatClient;
pub use models::{Message, Role, Source, Transcript};
pub use response::GatewayResponse;
pub use state::{ChatSession, Controls, Outcome, PendingRequest, RequestId, RequestState, SubmitRejected};
pub use transport::{BoxedTransport, ClientError, GatewayTransport, HttpTransport};
