//! Indexing Data Types
//!
//! The inbound post and the outbound per-post notification. Field names follow the
//! JSON wire format (`tweet_id`, `tweet_body`, `tokens`).

use crate::storage::store::PostId;
use serde::{Deserialize, Serialize};

/// A single text item to be indexed.
///
/// Both fields are required; a message missing either one, or carrying a negative
/// or non-integer ID, is rejected at the parse boundary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    #[serde(rename = "tweet_id")]
    pub id: PostId,
    #[serde(rename = "tweet_body")]
    pub body: String,
}

impl Post {
    pub fn new(id: PostId, body: impl Into<String>) -> Self {
        Self {
            id,
            body: body.into(),
        }
    }
}

/// Emitted exactly once per post, after all of its postings have been appended.
///
/// `tokens` is a set: every term appears once, in first-occurrence order, but
/// consumers must not rely on that order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IndexedPost {
    pub tweet_id: PostId,
    pub tokens: Vec<String>,
}
