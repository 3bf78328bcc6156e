use serde::{Deserialize, Serialize};

/// Unique identifier for a delivery on the message queue.
///
/// Wrapper around a UUID string; used as the key of the delivery ledger.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct DeliveryId(pub String);

impl DeliveryId {
    /// Generates a new random UUID v4-based DeliveryId.
    pub fn new() -> Self {
        Self(uuid::Uuid::new_v4().to_string())
    }
}

impl Default for DeliveryId {
    fn default() -> Self {
        Self::new()
    }
}

/// Lifecycle of a delivery in the ledger.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub enum DeliveryStatus {
    /// Published but not yet picked up by the consumer.
    Pending,
    /// Currently being parsed and indexed.
    Running,
    /// Every post in the payload was indexed.
    Acked,
    /// Parsing, routing or indexing failed; nothing after the failure point was indexed.
    Rejected { error: String },
}

/// A message as handed to the consumer: routing key plus raw JSON payload.
#[derive(Debug, Clone)]
pub struct Delivery {
    pub id: DeliveryId,
    pub routing_key: String,
    pub body: String,
}

/// Ledger record kept for every published delivery.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeliveryEntry {
    pub routing_key: String,
    pub status: DeliveryStatus,
    /// Timestamp (ms) when the delivery was published.
    pub published_at: u64,
    /// Timestamp (ms) when the delivery was acked or rejected.
    pub finished_at: Option<u64>,
}

/// Helper to get the current system time in milliseconds.
pub fn now_ms() -> u64 {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .unwrap_or_default()
        .as_millis() as u64
}
