//! Ingestion Adapter
//!
//! The only component that knows where posts come from. Queue deliveries and direct
//! HTTP calls both end up here; the adapter parses the raw payload and hands the
//! validated posts to the `Indexer`. Nothing reaches the indexer unless the whole
//! message parsed.

use super::types::{IngestOutcome, MessageKind, parse_post, parse_seed};
use crate::error::Result;
use crate::indexer::indexer::Indexer;
use crate::indexer::types::IndexedPost;

use std::sync::Arc;

pub struct IngestionAdapter {
    indexer: Arc<Indexer>,
}

impl IngestionAdapter {
    pub fn new(indexer: Arc<Indexer>) -> Arc<Self> {
        Arc::new(Self { indexer })
    }

    pub async fn receive_single(&self, raw: &str) -> Result<IndexedPost> {
        let post = parse_post(raw)?;
        self.indexer.index_post(&post).await
    }

    /// Returns the number of posts in the batch.
    pub async fn receive_seed(&self, raw: &str) -> Result<usize> {
        let posts = parse_seed(raw)?;
        self.indexer.seed(&posts).await?;
        Ok(posts.len())
    }

    /// Routes a raw payload whose kind was resolved by the caller.
    pub async fn dispatch(&self, kind: MessageKind, raw: &str) -> Result<IngestOutcome> {
        match kind {
            MessageKind::Single => self.receive_single(raw).await.map(IngestOutcome::Indexed),
            MessageKind::Seed => {
                let count = self.receive_seed(raw).await?;
                Ok(IngestOutcome::Seeded { count })
            }
        }
    }
}
