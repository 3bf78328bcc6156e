//! Search Service Module
//!
//! The read side of the pipeline: paginated lookup of post IDs by term.
//!
//! ## Responsibilities
//! - **Tokenization**: Normalizing post bodies and query terms into the same term space.
//! - **Pagination**: Mapping a 1-based page onto an inclusive slice of a posting list.
//! - **API**: Exposing term search via the `/search` endpoint.
//!
//! ## Submodules
//! - **`engine`**: The `SearchService` and page arithmetic.
//! - **`handlers`**: HTTP request handlers for the Axum web server.
//! - **`tokenizer`**: Whitespace splitting, punctuation stripping and lowercasing.
//! - **`types`**: Query parameters and defaults.

pub mod engine;
pub mod handlers;
pub mod tokenizer;
pub mod types;
