//! Tweet Searcher Library
//!
//! Tokenizes short text posts, maintains an inverted index of term -> post IDs and
//! answers paginated term lookups. Posts arrive either through direct HTTP calls or
//! through a message queue; both paths run the same indexing pipeline.
//!
//! ## Architecture Modules
//! - **`search`**: The tokenizer and the paginated `SearchService`.
//! - **`storage`**: The `IndexStore` abstraction with in-process and remote backings.
//! - **`indexer`**: Appends a post's terms to the index, then emits one notification per post.
//! - **`ingestion`**: Parses single-post and seed payloads and hands them to the indexer.
//! - **`queue`**: The in-process message queue and the consumer that drains it.
//! - **`app`**: Component wiring and the HTTP router.

pub mod app;
pub mod config;
pub mod error;
pub mod indexer;
pub mod ingestion;
pub mod queue;
pub mod search;
pub mod storage;

pub use error::{Error, ParseError, Result};
