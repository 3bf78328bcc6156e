use super::store::{IndexStore, PostId, resolve_range};
use crate::error::Result;

use async_trait::async_trait;
use dashmap::DashMap;

/// In-process inverted index: `term -> posting list`.
///
/// Appends go through `DashMap::entry`, which holds the shard write lock for the
/// duration of the push, so concurrent appends to one term never lose entries.
#[derive(Default)]
pub struct MemoryIndexStore {
    postings: DashMap<String, Vec<PostId>>,
}

impl MemoryIndexStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn append_local(&self, term: &str, post_id: PostId) {
        self.postings
            .entry(term.to_string())
            .or_default()
            .push(post_id);
    }

    pub fn range_local(&self, term: &str, start: i64, end: i64) -> Vec<PostId> {
        let Some(list) = self.postings.get(term) else {
            return Vec::new();
        };

        match resolve_range(list.len(), start, end) {
            Some((from, to)) => list[from..to].to_vec(),
            None => Vec::new(),
        }
    }

    /// Snapshot of the full posting list, if the term is known.
    pub fn postings(&self, term: &str) -> Option<Vec<PostId>> {
        self.postings.get(term).map(|list| list.clone())
    }

    pub fn term_count(&self) -> usize {
        self.postings.len()
    }

    pub fn posting_count(&self) -> usize {
        self.postings.iter().map(|entry| entry.value().len()).sum()
    }
}

#[async_trait]
impl IndexStore for MemoryIndexStore {
    async fn append(&self, term: &str, post_id: PostId) -> Result<()> {
        self.append_local(term, post_id);
        tracing::trace!("Appended post {} to '{}'", post_id, term);
        Ok(())
    }

    async fn range(&self, term: &str, start: i64, end: i64) -> Result<Vec<PostId>> {
        Ok(self.range_local(term, start, end))
    }

    async fn clear_all(&self) -> Result<()> {
        let terms = self.postings.len();
        self.postings.clear();
        tracing::info!("Cleared index store ({} terms dropped)", terms);
        Ok(())
    }
}
