//! Indexer Module
//!
//! The write side of the pipeline: tokenizes posts, appends their terms to the
//! inverted index and emits one notification per post.
//!
//! ## Submodules
//! - **`indexer`**: `index_post` and the ordered batch variant `seed`.
//! - **`notify`**: The `NotificationSink` abstraction and its channel-backed implementation.
//! - **`types`**: The `Post` and `IndexedPost` wire types.

pub mod indexer;
pub mod notify;
pub mod types;

#[cfg(test)]
mod tests;
