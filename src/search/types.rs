use serde::{Deserialize, Serialize};

/// Page size used when neither the request nor the configuration sets one.
pub const DEFAULT_PAGE_SIZE: i64 = 10;

/// Query string of `GET /search`.
#[derive(Debug, Serialize, Deserialize)]
pub struct SearchParams {
    pub token: String,
    pub page_num: Option<i64>,
    pub page_size: Option<i64>,
}
