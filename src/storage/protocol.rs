//! Index Store Network Protocol
//!
//! Defines the endpoints and Data Transfer Objects (DTOs) a node uses to serve its
//! local posting lists to a [`RemoteIndexStore`](super::remote::RemoteIndexStore)
//! running in another process.

use super::store::PostId;
use serde::{Deserialize, Serialize};

// --- API Endpoints ---

/// Appends one post ID to a term's posting list.
pub const ENDPOINT_APPEND: &str = "/internal/index/append";
/// Reads an inclusive slice of a term's posting list.
pub const ENDPOINT_RANGE: &str = "/internal/index/range";
/// Drops every posting list on the serving node.
pub const ENDPOINT_CLEAR: &str = "/internal/index/clear";

// --- Data Transfer Objects ---

#[derive(Debug, Serialize, Deserialize)]
pub struct AppendRequest {
    pub term: String,
    pub post_id: PostId,
}

/// Inclusive bounds, negative values counting from the end of the list.
#[derive(Debug, Serialize, Deserialize)]
pub struct RangeRequest {
    pub term: String,
    pub start: i64,
    pub end: i64,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct RangeResponse {
    pub post_ids: Vec<PostId>,
}

/// Standard acknowledgment for write operations.
#[derive(Debug, Serialize, Deserialize)]
pub struct StoreAck {
    pub success: bool,
}
