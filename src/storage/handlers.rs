use axum::{Json, extract::Extension, http::StatusCode};

use super::protocol::{AppendRequest, RangeRequest, RangeResponse, StoreAck};
use super::store::SharedIndexStore;

pub async fn handle_append(
    Extension(store): Extension<SharedIndexStore>,
    Json(req): Json<AppendRequest>,
) -> (StatusCode, Json<StoreAck>) {
    match store.append(&req.term, req.post_id).await {
        Ok(_) => (StatusCode::OK, Json(StoreAck { success: true })),
        Err(e) => {
            tracing::error!("Failed to append post {} to '{}': {}", req.post_id, req.term, e);
            (e.status_code(), Json(StoreAck { success: false }))
        }
    }
}

pub async fn handle_range(
    Extension(store): Extension<SharedIndexStore>,
    Json(req): Json<RangeRequest>,
) -> (StatusCode, Json<RangeResponse>) {
    match store.range(&req.term, req.start, req.end).await {
        Ok(post_ids) => (StatusCode::OK, Json(RangeResponse { post_ids })),
        Err(e) => {
            tracing::error!("Failed to read range of '{}': {}", req.term, e);
            (e.status_code(), Json(RangeResponse { post_ids: vec![] }))
        }
    }
}

/// Serves both the internal clear endpoint and the administrative reset.
pub async fn handle_clear(
    Extension(store): Extension<SharedIndexStore>,
) -> (StatusCode, Json<StoreAck>) {
    match store.clear_all().await {
        Ok(_) => (StatusCode::OK, Json(StoreAck { success: true })),
        Err(e) => {
            tracing::error!("Failed to clear index store: {}", e);
            (e.status_code(), Json(StoreAck { success: false }))
        }
    }
}
