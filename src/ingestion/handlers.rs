use super::adapter::IngestionAdapter;
use super::types::IngestResponse;
use crate::error::Error;

use axum::http::StatusCode;
use axum::{Extension, Json};
use std::sync::Arc;

pub async fn handle_index_tweet(
    Extension(adapter): Extension<Arc<IngestionAdapter>>,
    body: String,
) -> (StatusCode, Json<IngestResponse>) {
    match adapter.receive_single(&body).await {
        Ok(notification) => (
            StatusCode::CREATED,
            Json(IngestResponse {
                status: "indexed".to_string(),
                indexed: 1,
                tweet_id: Some(notification.tweet_id),
                tokens: Some(notification.tokens),
                error: None,
            }),
        ),
        Err(e) => {
            tracing::warn!("Direct indexing failed: {}", e);
            failure(e)
        }
    }
}

pub async fn handle_seed(
    Extension(adapter): Extension<Arc<IngestionAdapter>>,
    body: String,
) -> (StatusCode, Json<IngestResponse>) {
    match adapter.receive_seed(&body).await {
        Ok(count) => (
            StatusCode::CREATED,
            Json(IngestResponse {
                status: "seeded".to_string(),
                indexed: count,
                tweet_id: None,
                tokens: None,
                error: None,
            }),
        ),
        Err(e) => {
            tracing::warn!("Seeding failed: {}", e);
            failure(e)
        }
    }
}

fn failure(e: Error) -> (StatusCode, Json<IngestResponse>) {
    let status = match &e {
        Error::Parse(_) => "invalid_payload",
        Error::StoreUnavailable(_) => "store_unavailable",
        _ => "failed",
    };

    (
        e.status_code(),
        Json(IngestResponse {
            status: status.to_string(),
            indexed: 0,
            tweet_id: None,
            tokens: None,
            error: Some(e.to_string()),
        }),
    )
}
