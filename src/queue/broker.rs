//! In-Process Message Queue
//!
//! Stand-in for the external broker: deliveries are pushed onto an unbounded tokio
//! channel, so publishing never blocks, and a single consumer drains them in publish
//! order. Every delivery is also recorded in a ledger so its outcome can be queried.
//!
//! ## Responsibilities
//! - **Publishing**: Assigns a `DeliveryId` and enqueues the raw payload with its routing key.
//! - **Hand-off**: Gives the receiving end of the channel to exactly one consumer.
//! - **Tracking**: Moves ledger entries through `Pending -> Running -> Acked | Rejected`.
//!   Once the ledger grows past its capacity, settled entries are evicted; pending and
//!   running ones are always kept.

use super::types::*;

use anyhow::Result;
use dashmap::DashMap;
use std::sync::{Arc, Mutex};
use tokio::sync::mpsc;

/// Ledger size above which settled deliveries are evicted.
pub const DEFAULT_LEDGER_CAPACITY: usize = 10_000;

pub struct MessageQueue {
    sender: mpsc::UnboundedSender<Delivery>,
    /// Taken by the consumer on start; `None` afterwards.
    receiver: Mutex<Option<mpsc::UnboundedReceiver<Delivery>>>,
    deliveries: DashMap<DeliveryId, DeliveryEntry>,
    ledger_capacity: usize,
}

impl MessageQueue {
    pub fn new() -> Arc<Self> {
        Self::with_ledger_capacity(DEFAULT_LEDGER_CAPACITY)
    }

    pub fn with_ledger_capacity(ledger_capacity: usize) -> Arc<Self> {
        let (sender, receiver) = mpsc::unbounded_channel();
        Arc::new(Self {
            sender,
            receiver: Mutex::new(Some(receiver)),
            deliveries: DashMap::new(),
            ledger_capacity,
        })
    }

    /// Enqueues a raw payload under `routing_key`.
    ///
    /// The routing key is not interpreted here; unknown keys are rejected by the consumer.
    pub fn publish(&self, routing_key: &str, body: impl Into<String>) -> Result<DeliveryId> {
        let id = DeliveryId::new();

        if self.deliveries.len() >= self.ledger_capacity {
            self.evict_settled();
        }

        self.deliveries.insert(
            id.clone(),
            DeliveryEntry {
                routing_key: routing_key.to_string(),
                status: DeliveryStatus::Pending,
                published_at: now_ms(),
                finished_at: None,
            },
        );

        let delivery = Delivery {
            id: id.clone(),
            routing_key: routing_key.to_string(),
            body: body.into(),
        };

        if self.sender.send(delivery).is_err() {
            self.deliveries.remove(&id);
            return Err(anyhow::anyhow!("Queue consumer has shut down"));
        }

        tracing::debug!("Published delivery {} with routing key {}", id.0, routing_key);
        Ok(id)
    }

    /// Hands the receiving end to a consumer. Returns `None` if one already took it.
    pub fn take_receiver(&self) -> Option<mpsc::UnboundedReceiver<Delivery>> {
        self.receiver.lock().ok().and_then(|mut receiver| receiver.take())
    }

    pub fn mark_running(&self, id: &DeliveryId) -> Result<()> {
        let mut entry = self
            .deliveries
            .get_mut(id)
            .ok_or_else(|| anyhow::anyhow!("Delivery not found"))?;

        if entry.status != DeliveryStatus::Pending {
            return Err(anyhow::anyhow!(
                "Delivery not pending (status: {:?})",
                entry.status
            ));
        }

        entry.status = DeliveryStatus::Running;
        Ok(())
    }

    /// Marks a delivery as `Acked` or `Rejected`.
    pub fn complete(&self, id: &DeliveryId, outcome: std::result::Result<(), String>) -> Result<()> {
        let mut entry = self
            .deliveries
            .get_mut(id)
            .ok_or_else(|| anyhow::anyhow!("Delivery not found"))?;

        entry.status = match outcome {
            Ok(()) => DeliveryStatus::Acked,
            Err(error) => DeliveryStatus::Rejected { error },
        };
        entry.finished_at = Some(now_ms());
        Ok(())
    }

    /// Drops every acked or rejected entry from the ledger.
    fn evict_settled(&self) {
        let before = self.deliveries.len();
        self.deliveries.retain(|_, entry| {
            matches!(entry.status, DeliveryStatus::Pending | DeliveryStatus::Running)
        });
        tracing::debug!(
            "Evicted {} settled deliveries from the ledger",
            before.saturating_sub(self.deliveries.len())
        );
    }

    pub fn ledger_len(&self) -> usize {
        self.deliveries.len()
    }

    pub fn status(&self, id: &DeliveryId) -> Option<DeliveryEntry> {
        self.deliveries.get(id).map(|entry| entry.clone())
    }

    /// Returns `(pending, running, acked, rejected)`.
    pub fn status_counts(&self) -> (usize, usize, usize, usize) {
        let mut pending = 0;
        let mut running = 0;
        let mut acked = 0;
        let mut rejected = 0;

        for entry in self.deliveries.iter() {
            match entry.status {
                DeliveryStatus::Pending => pending += 1,
                DeliveryStatus::Running => running += 1,
                DeliveryStatus::Acked => acked += 1,
                DeliveryStatus::Rejected { .. } => rejected += 1,
            }
        }

        (pending, running, acked, rejected)
    }
}
