use super::broker::MessageQueue;
use super::protocol::*;
use super::types::*;

use axum::{Extension, Json, extract::Path, http::StatusCode};
use std::sync::Arc;

pub async fn handle_publish(
    Extension(queue): Extension<Arc<MessageQueue>>,
    Json(req): Json<PublishRequest>,
) -> (StatusCode, Json<PublishResponse>) {
    match queue.publish(&req.routing_key, req.body) {
        Ok(delivery_id) => {
            tracing::info!(
                "Delivery {} published with routing key {}",
                delivery_id.0,
                req.routing_key
            );
            (
                StatusCode::ACCEPTED,
                Json(PublishResponse {
                    delivery_id: Some(delivery_id),
                    error: None,
                }),
            )
        }
        Err(e) => {
            tracing::error!("Failed to publish delivery: {}", e);
            (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(PublishResponse {
                    delivery_id: None,
                    error: Some(e.to_string()),
                }),
            )
        }
    }
}

pub async fn handle_delivery_status(
    Extension(queue): Extension<Arc<MessageQueue>>,
    Path(delivery_id_str): Path<String>,
) -> (StatusCode, Json<Option<DeliveryStatusResponse>>) {
    let delivery_id = DeliveryId(delivery_id_str);

    match queue.status(&delivery_id) {
        Some(entry) => {
            tracing::debug!(
                "Delivery status query: {} -> {:?}",
                delivery_id.0,
                entry.status
            );
            (
                StatusCode::OK,
                Json(Some(DeliveryStatusResponse {
                    delivery_id,
                    routing_key: entry.routing_key,
                    status: entry.status,
                    published_at: entry.published_at,
                    finished_at: entry.finished_at,
                })),
            )
        }
        None => {
            tracing::debug!("Delivery not found: {}", delivery_id.0);
            (StatusCode::NOT_FOUND, Json(None))
        }
    }
}
