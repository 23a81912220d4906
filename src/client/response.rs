use serde::{Deserialize, Serialize};

use super::models::Source;

/// A decoded gateway reply. The variants are tried in order so any body
/// carrying an `error` string is a `Failure`, even when an `answer` is
/// present alongside it.
#[derive(Clone, Serialize, Deserialize, Debug, PartialEq, Eq)]
#[serde(untagged)]
pub enum GatewayResponse {
    Failure {
        error: String,
    },
    Success {
        answer: String,
        #[serde(default)]
        sources: Vec<Source>,
    },
}
