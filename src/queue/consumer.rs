//! Queue Consumer
//!
//! Drains the `MessageQueue` on a background task and feeds each delivery through
//! the `IngestionAdapter`. A single task consumes the channel, so deliveries are
//! indexed in publish order.
//!
//! ## Responsibilities
//! - **Routing**: Resolves the delivery's routing key into a `MessageKind` once.
//! - **Dispatch**: Hands the raw payload to the adapter for parsing and indexing.
//! - **Settlement**: Acks or rejects the delivery in the queue ledger.

use super::broker::MessageQueue;
use super::types::*;
use crate::error;
use crate::ingestion::adapter::IngestionAdapter;
use crate::ingestion::types::{IngestOutcome, MessageKind};

use anyhow::Result;
use std::sync::Arc;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

pub struct QueueConsumer {
    queue: Arc<MessageQueue>,
    adapter: Arc<IngestionAdapter>,
}

impl QueueConsumer {
    pub fn new(queue: Arc<MessageQueue>, adapter: Arc<IngestionAdapter>) -> Arc<Self> {
        Arc::new(Self { queue, adapter })
    }

    /// Takes the queue's receiver and spawns the consume loop.
    ///
    /// Fails if another consumer already started on the same queue.
    pub fn start(self: Arc<Self>) -> Result<JoinHandle<()>> {
        let receiver = self
            .queue
            .take_receiver()
            .ok_or_else(|| anyhow::anyhow!("Queue already has a consumer"))?;

        tracing::info!("Starting queue consumer");

        Ok(tokio::spawn(async move {
            self.consume_loop(receiver).await;
        }))
    }

    async fn consume_loop(&self, mut receiver: mpsc::UnboundedReceiver<Delivery>) {
        while let Some(delivery) = receiver.recv().await {
            // Outcome is recorded in the ledger
            let _ = self.process(delivery).await;
        }

        tracing::info!("Queue closed, consumer stopping");
    }

    /// Runs one delivery through routing, parsing and indexing, then settles it.
    pub async fn process(&self, delivery: Delivery) -> error::Result<IngestOutcome> {
        if let Err(e) = self.queue.mark_running(&delivery.id) {
            tracing::warn!("Delivery {}: {}", delivery.id.0, e);
        }

        let result = match delivery.routing_key.parse::<MessageKind>() {
            Ok(kind) => self.adapter.dispatch(kind, &delivery.body).await,
            Err(e) => Err(e),
        };

        match &result {
            Ok(IngestOutcome::Indexed(notification)) => {
                tracing::info!(
                    "Delivery {} indexed post {}",
                    delivery.id.0,
                    notification.tweet_id
                );
            }
            Ok(IngestOutcome::Seeded { count }) => {
                tracing::info!("Delivery {} seeded {} posts", delivery.id.0, count);
            }
            Err(e) => {
                tracing::error!(
                    "Delivery {} ({}) rejected: {}",
                    delivery.id.0,
                    delivery.routing_key,
                    e
                );
            }
        }

        let outcome = result.as_ref().map(|_| ()).map_err(|e| e.to_string());
        if let Err(e) = self.queue.complete(&delivery.id, outcome) {
            tracing::error!("Failed to settle delivery {}: {}", delivery.id.0, e);
        }

        result
    }
}
