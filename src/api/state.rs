use crate::gateway::Gateway;

/// Read-only state shared by every request. The gateway holds no
/// per-request data so no lock is needed.
pub struct AppState {
    pub gateway: Gateway,
}

impl AppState {
    pub fn new(gateway: Gateway) -> Self {
        Self { gateway }
    }
}
