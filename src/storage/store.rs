//! Index Store Abstraction
//!
//! The inverted index is kept in an ordered-append key-value structure: every
//! normalized term owns one append-only list of post IDs. The indexer and the search
//! service only ever talk to the store through the [`IndexStore`] trait, so the
//! backing can be the in-process [`MemoryIndexStore`](super::memory::MemoryIndexStore)
//! or another node reached through [`RemoteIndexStore`](super::remote::RemoteIndexStore).

use crate::error::Result;

use async_trait::async_trait;
use std::sync::Arc;

/// Caller-assigned post identifier. Not required to be unique.
pub type PostId = u64;

/// Shared handle injected into the indexer, search service and HTTP layer.
pub type SharedIndexStore = Arc<dyn IndexStore>;

#[async_trait]
pub trait IndexStore: Send + Sync {
    /// Pushes `post_id` to the end of the posting list for `term`, creating it if absent.
    ///
    /// Must be atomic with respect to other appends to the same term.
    async fn append(&self, term: &str, post_id: PostId) -> Result<()>;

    /// Returns the inclusive slice `[start, end]` of the posting list for `term`.
    ///
    /// Negative indices count from the end (`-1` is the last element). An absent
    /// term yields an empty vector.
    async fn range(&self, term: &str, start: i64, end: i64) -> Result<Vec<PostId>>;

    /// Drops every posting list.
    async fn clear_all(&self) -> Result<()>;
}

/// Resolves inclusive, possibly negative list indices against a list of `len` entries.
///
/// Returns the half-open `start..end` bounds to slice with, or `None` when the
/// requested window is empty. Out-of-range bounds are clamped.
pub fn resolve_range(len: usize, start: i64, end: i64) -> Option<(usize, usize)> {
    let len = i64::try_from(len).ok()?;
    if len == 0 {
        return None;
    }

    let start = if start < 0 { len.saturating_add(start) } else { start }.max(0);
    let end = if end < 0 { len.saturating_add(end) } else { end }.min(len - 1);

    if start > end {
        return None;
    }

    Some((start as usize, end as usize + 1))
}
