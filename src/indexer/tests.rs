//! Indexer Module Tests
//!
//! Validates the append-then-notify pipeline against the in-process store.
//!
//! ## Test Scopes
//! - **Postings**: Per-occurrence appends, case and punctuation normalization, re-indexing.
//! - **Notifications**: One per post, unique tokens, published after every append.
//! - **Seeding**: Batch order and notification order.
//! - **Failures**: Store outages and closed notification channels.

#[cfg(test)]
mod tests {
    use crate::error::{Error, Result};
    use crate::indexer::indexer::Indexer;
    use crate::indexer::notify::{ChannelSink, NotificationSink};
    use crate::indexer::types::{IndexedPost, Post};
    use crate::search::tokenizer::tokenize;
    use crate::storage::memory::MemoryIndexStore;
    use crate::storage::store::{IndexStore, PostId};
    use async_trait::async_trait;
    use std::collections::HashSet;
    use std::sync::{Arc, Mutex};
    use tokio::sync::mpsc::UnboundedReceiver;

    fn pipeline() -> (
        Arc<Indexer>,
        Arc<MemoryIndexStore>,
        UnboundedReceiver<IndexedPost>,
    ) {
        let store = Arc::new(MemoryIndexStore::new());
        let (sink, receiver) = ChannelSink::new();
        let indexer = Indexer::new(store.clone(), Arc::new(sink));
        (indexer, store, receiver)
    }

    fn token_set(notification: &IndexedPost) -> HashSet<&str> {
        notification.tokens.iter().map(String::as_str).collect()
    }

    /// Records, at publish time, which of the post's terms already list its ID.
    struct VisibilityCheckingSink {
        store: Arc<MemoryIndexStore>,
        observed: Mutex<Vec<(PostId, bool)>>,
    }

    impl NotificationSink for VisibilityCheckingSink {
        fn publish(&self, notification: &IndexedPost) -> Result<()> {
            let all_visible = notification.tokens.iter().all(|term| {
                self.store
                    .postings(term)
                    .is_some_and(|ids| ids.contains(&notification.tweet_id))
            });
            self.observed
                .lock()
                .unwrap()
                .push((notification.tweet_id, all_visible));
            Ok(())
        }
    }

    struct UnavailableStore;

    #[async_trait]
    impl IndexStore for UnavailableStore {
        async fn append(&self, _term: &str, _post_id: PostId) -> Result<()> {
            Err(Error::StoreUnavailable("connection refused".to_string()))
        }

        async fn range(&self, _term: &str, _start: i64, _end: i64) -> Result<Vec<PostId>> {
            Err(Error::StoreUnavailable("connection refused".to_string()))
        }

        async fn clear_all(&self) -> Result<()> {
            Err(Error::StoreUnavailable("connection refused".to_string()))
        }
    }

    // ============================================================
    // SINGLE POST
    // ============================================================

    #[tokio::test]
    async fn test_index_single_post() {
        let (indexer, store, mut receiver) = pipeline();
        let body = "scalability is the best";

        let returned = indexer.index_post(&Post::new(0, body)).await.unwrap();

        let published = receiver.try_recv().unwrap();
        assert_eq!(published, returned);
        assert_eq!(published.tweet_id, 0);

        for token in body.split_whitespace() {
            assert!(published.tokens.iter().any(|t| t == token));
            assert_eq!(store.range(token, 0, -1).await.unwrap(), vec![0]);
        }
        assert!(receiver.try_recv().is_err(), "Exactly one notification per post");
    }

    #[tokio::test]
    async fn test_index_is_case_insensitive() {
        let (indexer, store, mut receiver) = pipeline();

        indexer
            .index_post(&Post::new(1, "i love SCALABILITY"))
            .await
            .unwrap();

        let published = receiver.try_recv().unwrap();
        assert_eq!(published.tweet_id, 1);
        assert_eq!(token_set(&published), HashSet::from(["i", "love", "scalability"]));
        for token in ["i", "love", "scalability"] {
            assert_eq!(store.range(token, 0, -1).await.unwrap(), vec![1]);
        }
        assert!(store.postings("SCALABILITY").is_none());
    }

    #[tokio::test]
    async fn test_index_ignores_punctuation() {
        let (plain_indexer, plain_store, mut plain_rx) = pipeline();
        let (bang_indexer, bang_store, mut bang_rx) = pipeline();

        plain_indexer
            .index_post(&Post::new(1, "i love scalability"))
            .await
            .unwrap();
        bang_indexer
            .index_post(&Post::new(1, "i love scalability!"))
            .await
            .unwrap();

        let plain = plain_rx.try_recv().unwrap();
        let bang = bang_rx.try_recv().unwrap();
        assert_eq!(token_set(&plain), token_set(&bang));

        for token in ["i", "love", "scalability"] {
            assert_eq!(bang_store.range(token, 0, -1).await.unwrap(), vec![1]);
            assert_eq!(
                plain_store.range(token, 0, -1).await.unwrap(),
                bang_store.range(token, 0, -1).await.unwrap()
            );
        }
        assert!(bang_store.postings("scalability!").is_none());
    }

    #[tokio::test]
    async fn test_repeated_term_appends_per_occurrence() {
        let (indexer, store, mut receiver) = pipeline();

        indexer
            .index_post(&Post::new(4, "go go Go gadget"))
            .await
            .unwrap();

        assert_eq!(store.range("go", 0, -1).await.unwrap(), vec![4, 4, 4]);
        assert_eq!(store.range("gadget", 0, -1).await.unwrap(), vec![4]);

        let published = receiver.try_recv().unwrap();
        assert_eq!(published.tokens, vec!["go", "gadget"]);
    }

    #[tokio::test]
    async fn test_reindexing_duplicates_postings() {
        let (indexer, store, mut receiver) = pipeline();
        let post = Post::new(9, "scalability rocks");

        indexer.index_post(&post).await.unwrap();
        indexer.index_post(&post).await.unwrap();

        // Re-indexing is explicitly not idempotent
        assert_eq!(store.range("scalability", 0, -1).await.unwrap(), vec![9, 9]);
        assert_eq!(store.range("rocks", 0, -1).await.unwrap(), vec![9, 9]);

        assert_eq!(receiver.try_recv().unwrap().tweet_id, 9);
        assert_eq!(receiver.try_recv().unwrap().tweet_id, 9);
    }

    #[tokio::test]
    async fn test_empty_body() {
        let (indexer, store, mut receiver) = pipeline();

        assert!(tokenize("").is_empty());
        let returned = indexer.index_post(&Post::new(3, "")).await.unwrap();

        assert!(returned.tokens.is_empty());
        let published = receiver.try_recv().unwrap();
        assert_eq!(published.tweet_id, 3);
        assert!(published.tokens.is_empty());
        assert_eq!(store.term_count(), 0);
        assert_eq!(store.posting_count(), 0);
    }

    #[tokio::test]
    async fn test_other_terms_unaffected() {
        let (indexer, store, _receiver) = pipeline();
        store.append_local("unrelated", 99);

        indexer
            .index_post(&Post::new(1, "fresh words"))
            .await
            .unwrap();

        assert_eq!(store.postings("unrelated"), Some(vec![99]));
    }

    #[tokio::test]
    async fn test_postings_appended_after_existing() {
        let (indexer, store, _receiver) = pipeline();
        store.append_local("scalability", 100);

        indexer
            .index_post(&Post::new(5, "scalability"))
            .await
            .unwrap();

        assert_eq!(store.postings("scalability"), Some(vec![100, 5]));
    }

    #[tokio::test]
    async fn test_notification_implies_postings_visible() {
        let store = Arc::new(MemoryIndexStore::new());
        let sink = Arc::new(VisibilityCheckingSink {
            store: store.clone(),
            observed: Mutex::new(Vec::new()),
        });
        let indexer = Indexer::new(store.clone(), sink.clone());

        indexer
            .seed(&[
                Post::new(0, "scalability is the best"),
                Post::new(1, "i love scalability"),
            ])
            .await
            .unwrap();

        let observed = sink.observed.lock().unwrap().clone();
        assert_eq!(observed, vec![(0, true), (1, true)]);
    }

    // ============================================================
    // SEEDING
    // ============================================================

    #[tokio::test]
    async fn test_seed_two_posts_in_order() {
        let (indexer, store, mut receiver) = pipeline();

        indexer
            .seed(&[
                Post::new(0, "scalability is the best"),
                Post::new(1, "i love scalability"),
            ])
            .await
            .unwrap();

        let first = receiver.try_recv().unwrap();
        assert_eq!(first.tweet_id, 0);
        assert_eq!(
            token_set(&first),
            HashSet::from(["scalability", "is", "the", "best"])
        );

        let second = receiver.try_recv().unwrap();
        assert_eq!(second.tweet_id, 1);
        assert_eq!(token_set(&second), HashSet::from(["i", "love", "scalability"]));

        for token in ["is", "the", "best"] {
            assert_eq!(store.range(token, 0, -1).await.unwrap(), vec![0]);
        }
        for token in ["i", "love"] {
            assert_eq!(store.range(token, 0, -1).await.unwrap(), vec![1]);
        }
        let mut scalability = store.range("scalability", 0, -1).await.unwrap();
        scalability.sort_unstable();
        assert_eq!(scalability, vec![0, 1]);
    }

    #[tokio::test]
    async fn test_seed_preserves_notification_order() {
        let (indexer, _store, mut receiver) = pipeline();
        let posts: Vec<Post> = (0..20)
            .rev()
            .map(|id| Post::new(id, format!("post number {}", id)))
            .collect();

        indexer.seed(&posts).await.unwrap();

        let mut order = Vec::new();
        while let Ok(notification) = receiver.try_recv() {
            order.push(notification.tweet_id);
        }
        assert_eq!(order, (0..20).rev().collect::<Vec<u64>>());
    }

    #[tokio::test]
    async fn test_seed_empty_batch() {
        let (indexer, store, mut receiver) = pipeline();

        indexer.seed(&[]).await.unwrap();

        assert!(receiver.try_recv().is_err());
        assert_eq!(store.term_count(), 0);
    }

    // ============================================================
    // FAILURES
    // ============================================================

    #[tokio::test]
    async fn test_store_unavailable_propagates_without_notification() {
        let (sink, mut receiver) = ChannelSink::new();
        let indexer = Indexer::new(Arc::new(UnavailableStore), Arc::new(sink));

        let result = indexer.index_post(&Post::new(1, "hello world")).await;

        assert!(matches!(result, Err(Error::StoreUnavailable(_))));
        assert!(receiver.try_recv().is_err());
    }

    #[tokio::test]
    async fn test_closed_sink_is_reported() {
        let store = Arc::new(MemoryIndexStore::new());
        let (sink, receiver) = ChannelSink::new();
        drop(receiver);
        let indexer = Indexer::new(store.clone(), Arc::new(sink));

        let result = indexer.index_post(&Post::new(1, "hello")).await;

        assert!(matches!(result, Err(Error::SinkClosed)));
        // Postings were written before the publish attempt
        assert_eq!(store.postings("hello"), Some(vec![1]));
    }

    #[test]
    fn test_post_wire_format() {
        let post: Post =
            serde_json::from_str(r#"{"tweet_id": 0, "tweet_body": "scalability is the best"}"#)
                .unwrap();
        assert_eq!(post, Post::new(0, "scalability is the best"));

        let notification = IndexedPost {
            tweet_id: 1,
            tokens: vec!["i".to_string(), "love".to_string()],
        };
        let json = serde_json::to_value(&notification).unwrap();
        assert_eq!(json, serde_json::json!({"tweet_id": 1, "tokens": ["i", "love"]}));
    }
}
