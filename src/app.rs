//! Service wiring and the HTTP router.

use crate::indexer::indexer::Indexer;
use crate::indexer::notify::SharedNotificationSink;
use crate::ingestion::adapter::IngestionAdapter;
use crate::ingestion::handlers::{handle_index_tweet, handle_seed};
use crate::queue::broker::MessageQueue;
use crate::queue::consumer::QueueConsumer;
use crate::queue::handlers::{handle_delivery_status, handle_publish};
use crate::queue::protocol::{ENDPOINT_DELIVERY_STATUS, ENDPOINT_PUBLISH};
use crate::search::engine::SearchService;
use crate::search::handlers::handle_search;
use crate::storage::handlers::{handle_append, handle_clear, handle_range};
use crate::storage::protocol::{ENDPOINT_APPEND, ENDPOINT_CLEAR, ENDPOINT_RANGE};
use crate::storage::store::SharedIndexStore;

use axum::{
    Json, Router,
    extract::Extension,
    routing::{get, post},
};
use serde::Serialize;
use std::sync::Arc;

/// Every long-lived component of a searcher node, wired together.
#[derive(Clone)]
pub struct Services {
    pub store: SharedIndexStore,
    pub adapter: Arc<IngestionAdapter>,
    pub search: Arc<SearchService>,
    pub queue: Arc<MessageQueue>,
    pub consumer: Arc<QueueConsumer>,
}

impl Services {
    pub fn new(
        store: SharedIndexStore,
        sink: SharedNotificationSink,
        default_page_size: i64,
    ) -> Self {
        let indexer = Indexer::new(store.clone(), sink);
        let adapter = IngestionAdapter::new(indexer);
        let search = SearchService::new(store.clone(), default_page_size);
        let queue = MessageQueue::new();
        let consumer = QueueConsumer::new(queue.clone(), adapter.clone());

        Self {
            store,
            adapter,
            search,
            queue,
            consumer,
        }
    }
}

pub fn router(services: &Services) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .route("/search", get(handle_search))
        .route("/tweet", post(handle_index_tweet))
        .route("/seed", post(handle_seed))
        .route(ENDPOINT_PUBLISH, post(handle_publish))
        .route(
            &format!("{}/:id", ENDPOINT_DELIVERY_STATUS),
            get(handle_delivery_status),
        )
        .route("/admin/reset", post(handle_clear))
        .route(ENDPOINT_APPEND, post(handle_append))
        .route(ENDPOINT_RANGE, post(handle_range))
        .route(ENDPOINT_CLEAR, post(handle_clear))
        .layer(Extension(services.store.clone()))
        .layer(Extension(services.adapter.clone()))
        .layer(Extension(services.search.clone()))
        .layer(Extension(services.queue.clone()))
}

#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    status: &'static str,
    version: &'static str,
}

pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
    })
}
