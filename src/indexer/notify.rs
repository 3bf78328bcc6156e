//! Notification Sink
//!
//! Outbound channel for `IndexedPost` events. Publishing never blocks: the default
//! sink is an unbounded tokio channel whose receiver is handed to whichever
//! downstream consumer reads the notifications.

use super::types::IndexedPost;
use crate::error::{Error, Result};

use std::sync::Arc;
use tokio::sync::mpsc;

pub type SharedNotificationSink = Arc<dyn NotificationSink>;

pub trait NotificationSink: Send + Sync {
    fn publish(&self, notification: &IndexedPost) -> Result<()>;
}

pub struct ChannelSink {
    sender: mpsc::UnboundedSender<IndexedPost>,
}

impl ChannelSink {
    /// Creates the sink together with the receiving end for the downstream consumer.
    pub fn new() -> (Self, mpsc::UnboundedReceiver<IndexedPost>) {
        let (sender, receiver) = mpsc::unbounded_channel();
        (Self { sender }, receiver)
    }
}

impl NotificationSink for ChannelSink {
    fn publish(&self, notification: &IndexedPost) -> Result<()> {
        self.sender
            .send(notification.clone())
            .map_err(|_| Error::SinkClosed)
    }
}
