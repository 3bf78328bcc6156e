//! Message Queue Module
//!
//! The asynchronous ingestion path. Deliveries carry a routing key and a raw JSON
//! payload; a background consumer turns them into indexer calls while synchronous
//! HTTP callers index and search concurrently.
//!
//! ## Architecture Overview
//! 1. **Publish**: A delivery is enqueued and recorded as `Pending` in the ledger.
//! 2. **Consume**: The single consumer task receives deliveries in publish order.
//! 3. **Route**: The routing key resolves into a `MessageKind` (`Single` or `Seed`).
//! 4. **Settle**: The delivery is `Acked` once indexed, or `Rejected` with the error text.
//!
//! ## Submodules
//! - **`broker`**: The in-process queue and its delivery ledger.
//! - **`consumer`**: The consume loop and per-delivery processing.
//! - **`protocol`**: HTTP DTOs for publishing and status queries.

pub mod broker;
pub mod consumer;
pub mod handlers;
pub mod protocol;
pub mod types;
