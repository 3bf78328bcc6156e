//! Ingestion Module
//!
//! Entry point for posts, whichever way they arrive.
//!
//! ## Workflow
//! 1. **Route**: A queue routing key (or the HTTP endpoint) selects a `MessageKind`.
//! 2. **Parse**: The raw JSON payload is validated into one `Post` or an ordered batch.
//! 3. **Index**: The adapter calls `Indexer::index_post` or `Indexer::seed`.

pub mod adapter;
pub mod handlers;
pub mod types;
