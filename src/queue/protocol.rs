//! Queue Protocol Definitions
//!
//! DTOs for publishing deliveries onto the in-process queue over HTTP and for
//! querying their outcome.

use super::types::*;
use serde::{Deserialize, Serialize};

pub const ENDPOINT_PUBLISH: &str = "/queue/publish";
pub const ENDPOINT_DELIVERY_STATUS: &str = "/queue/status";

#[derive(Debug, Serialize, Deserialize)]
pub struct PublishRequest {
    pub routing_key: String,
    /// Raw JSON payload, exactly as a broker would deliver it.
    pub body: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct PublishResponse {
    pub delivery_id: Option<DeliveryId>,
    pub error: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct DeliveryStatusResponse {
    pub delivery_id: DeliveryId,
    pub routing_key: String,
    pub status: DeliveryStatus,
    pub published_at: u64,
    pub finished_at: Option<u64>,
}
