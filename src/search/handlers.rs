use super::engine::SearchService;
use super::types::SearchParams;
use crate::storage::store::PostId;

use axum::extract::Query;
use axum::http::StatusCode;
use axum::{Extension, Json};
use std::sync::Arc;

/// `GET /search?token=..&page_num=..&page_size=..`
///
/// Responds with the page as a JSON array of post IDs; errors respond with an empty
/// array and the matching status code.
pub async fn handle_search(
    Query(params): Query<SearchParams>,
    Extension(search): Extension<Arc<SearchService>>,
) -> (StatusCode, Json<Vec<PostId>>) {
    let page_num = params.page_num.unwrap_or(1);
    let page_size = params.page_size.unwrap_or(search.default_page_size());

    match search.search(&params.token, page_num, page_size).await {
        Ok(post_ids) => (StatusCode::OK, Json(post_ids)),
        Err(e) => {
            tracing::warn!("Search for '{}' failed: {}", params.token, e);
            (e.status_code(), Json(Vec::new()))
        }
    }
}
