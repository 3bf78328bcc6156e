//! Index Storage Module
//!
//! Holds the inverted index: one append-only posting list of post IDs per term.
//!
//! ## Core Concepts
//! - **Abstraction**: `IndexStore` exposes only `append`, `range` and `clear_all`.
//! - **Local backing**: `MemoryIndexStore` keeps posting lists in a sharded `DashMap`.
//! - **Remote backing**: `RemoteIndexStore` forwards the same operations over HTTP to a
//!   node serving its local store through the handlers in `handlers`.

pub mod handlers;
pub mod memory;
pub mod protocol;
pub mod remote;
pub mod store;
