//! Public types for the query API
use serde::{Deserialize, Serialize};

/// Request body accepted by `POST /api/query`. The handler reads the raw
/// body so that malformed input still gets an in-band error; this type
/// documents the shape and is what clients serialize.
#[derive(Serialize, Deserialize)]
pub struct QueryRequest {
    pub query: String,
}

impl QueryRequest {
    pub fn new(query: &str) -> Self {
        Self {
            query: query.to_string(),
        }
    }
}

#[derive(Serialize, Deserialize)]
pub struct QueryErrorResponse {
    pub error: String,
}
