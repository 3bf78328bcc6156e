use crate::error::{Error, Result};
use crate::search::tokenizer::normalize_term;
use crate::storage::store::{PostId, SharedIndexStore};

use std::sync::Arc;

/// Paginated term lookup over the inverted index. Read-only.
pub struct SearchService {
    store: SharedIndexStore,
    default_page_size: i64,
}

impl SearchService {
    pub fn new(store: SharedIndexStore, default_page_size: i64) -> Arc<Self> {
        Arc::new(Self {
            store,
            default_page_size,
        })
    }

    pub fn default_page_size(&self) -> i64 {
        self.default_page_size
    }

    /// Returns page `page_num` (1-based) of the posting list for `term`.
    ///
    /// The term is normalized the same way the tokenizer normalizes body chunks.
    /// A short page is the last one; pages past the end, unknown terms and terms
    /// that normalize to nothing all yield an empty page.
    pub async fn search(&self, term: &str, page_num: i64, page_size: i64) -> Result<Vec<PostId>> {
        if page_num < 1 || page_size < 1 {
            return Err(Error::InvalidPagination {
                page_num,
                page_size,
            });
        }

        let Some(term) = normalize_term(term) else {
            return Ok(Vec::new());
        };

        let Some((start, end)) = page_bounds(page_num, page_size) else {
            return Ok(Vec::new());
        };

        let post_ids = self.store.range(&term, start, end).await?;
        tracing::debug!(
            "Search '{}' page {} (size {}) -> {} results",
            term,
            page_num,
            page_size,
            post_ids.len()
        );

        Ok(post_ids)
    }
}

/// Zero-based inclusive list bounds of a 1-based page.
///
/// `None` if the bounds overflow, which can only mean the page lies past any list.
pub fn page_bounds(page_num: i64, page_size: i64) -> Option<(i64, i64)> {
    let start = (page_num - 1).checked_mul(page_size)?;
    let end = start.checked_add(page_size - 1)?;
    Some((start, end))
}
