//! Post Indexer
//!
//! Turns posts into postings. Each post goes through a strict two-step contract:
//! every term occurrence is appended to its posting list first, and only then is a
//! single `IndexedPost` notification published. A consumer that sees the
//! notification can therefore read all of the post's postings back.

use super::notify::SharedNotificationSink;
use super::types::{IndexedPost, Post};
use crate::error::Result;
use crate::search::tokenizer::{tokenize, unique_terms};
use crate::storage::store::SharedIndexStore;

use std::sync::Arc;

pub struct Indexer {
    store: SharedIndexStore,
    sink: SharedNotificationSink,
}

impl Indexer {
    pub fn new(store: SharedIndexStore, sink: SharedNotificationSink) -> Arc<Self> {
        Arc::new(Self { store, sink })
    }

    /// Indexes one post and publishes its notification.
    ///
    /// A term that occurs twice in the body is appended twice, and re-indexing a
    /// post appends its ID again; neither case is deduplicated.
    pub async fn index_post(&self, post: &Post) -> Result<IndexedPost> {
        let terms = tokenize(&post.body);

        for term in &terms {
            self.store.append(term, post.id).await?;
        }

        let notification = IndexedPost {
            tweet_id: post.id,
            tokens: unique_terms(&terms),
        };

        self.sink.publish(&notification)?;

        tracing::debug!(
            "Indexed post {} ({} postings, {} unique terms)",
            post.id,
            terms.len(),
            notification.tokens.len()
        );

        Ok(notification)
    }

    /// Indexes a batch sequentially, in the given order.
    ///
    /// Notifications are published in batch order. A store failure stops the batch;
    /// posts before the failing one stay indexed.
    pub async fn seed(&self, posts: &[Post]) -> Result<()> {
        tracing::info!("Seeding {} posts", posts.len());

        for post in posts {
            self.index_post(post).await?;
        }

        Ok(())
    }
}
