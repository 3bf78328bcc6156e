//! Ingestion Data Types
//!
//! Message kinds, routing keys and the parse boundary for inbound payloads, plus the
//! response DTOs of the direct-indexing endpoints.

use crate::error::{Error, ParseError, Result};
use crate::indexer::types::{IndexedPost, Post};
use crate::storage::store::PostId;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Routing key carried by queue deliveries holding one post.
pub const ROUTING_KEY_NEW_TWEET: &str = "searcher.data.new_tweet";
/// Routing key carried by queue deliveries holding a seed batch.
pub const ROUTING_KEY_SEED: &str = "searcher.data.seed";

/// The two inbound message shapes, resolved once from the routing key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageKind {
    Single,
    Seed,
}

impl MessageKind {
    pub fn routing_key(self) -> &'static str {
        match self {
            MessageKind::Single => ROUTING_KEY_NEW_TWEET,
            MessageKind::Seed => ROUTING_KEY_SEED,
        }
    }
}

impl FromStr for MessageKind {
    type Err = Error;

    fn from_str(routing_key: &str) -> Result<Self> {
        match routing_key {
            ROUTING_KEY_NEW_TWEET => Ok(MessageKind::Single),
            ROUTING_KEY_SEED => Ok(MessageKind::Seed),
            other => Err(Error::UnknownRoute(other.to_string())),
        }
    }
}

/// Parses `{ "tweet_id": <int>, "tweet_body": <string> }`.
pub fn parse_post(raw: &str) -> std::result::Result<Post, ParseError> {
    Ok(serde_json::from_str(raw)?)
}

/// Parses a JSON array of posts.
///
/// Every element is validated before anything is returned, so one malformed element
/// rejects the whole batch.
pub fn parse_seed(raw: &str) -> std::result::Result<Vec<Post>, ParseError> {
    let elements: Vec<serde_json::Value> = serde_json::from_str(raw)?;

    elements
        .into_iter()
        .enumerate()
        .map(|(index, element)| {
            serde_json::from_value(element).map_err(|source| ParseError::SeedElement { index, source })
        })
        .collect()
}

/// What the indexer did with one inbound message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IngestOutcome {
    Indexed(IndexedPost),
    Seeded { count: usize },
}

/// Response of the direct-indexing endpoints.
#[derive(Debug, Serialize, Deserialize)]
pub struct IngestResponse {
    pub status: String,
    /// Number of posts indexed by this request.
    pub indexed: usize,
    /// ID and token set of the post, for single-post requests.
    pub tweet_id: Option<PostId>,
    pub tokens: Option<Vec<String>>,
    pub error: Option<String>,
}
