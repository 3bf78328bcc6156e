//! Remote Index Store Client
//!
//! Talks to another node's `/internal/index/*` endpoints. Every transport failure,
//! timeout or non-success status is reported as [`Error::StoreUnavailable`]. Requests
//! are sent exactly once.

use super::protocol::{
    AppendRequest, ENDPOINT_APPEND, ENDPOINT_CLEAR, ENDPOINT_RANGE, RangeRequest, RangeResponse,
};
use super::store::{IndexStore, PostId};
use crate::error::{Error, Result};

use async_trait::async_trait;
use serde::Serialize;
use std::time::Duration;

pub struct RemoteIndexStore {
    base_url: String,
    timeout: Duration,
    http_client: reqwest::Client,
}

impl RemoteIndexStore {
    pub fn new(base_url: &str, timeout: Duration) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            timeout,
            http_client: reqwest::Client::new(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    async fn post<T: Serialize>(&self, endpoint: &str, payload: &T) -> Result<reqwest::Response> {
        let url = format!("{}{}", self.base_url, endpoint);
        let response = self
            .http_client
            .post(&url)
            .json(payload)
            .timeout(self.timeout)
            .send()
            .await
            .map_err(|e| Error::StoreUnavailable(format!("{}: {}", url, e)))?;

        if !response.status().is_success() {
            return Err(Error::StoreUnavailable(format!(
                "{} returned {}",
                url,
                response.status()
            )));
        }

        Ok(response)
    }
}

#[async_trait]
impl IndexStore for RemoteIndexStore {
    async fn append(&self, term: &str, post_id: PostId) -> Result<()> {
        let payload = AppendRequest {
            term: term.to_string(),
            post_id,
        };
        self.post(ENDPOINT_APPEND, &payload).await?;
        Ok(())
    }

    async fn range(&self, term: &str, start: i64, end: i64) -> Result<Vec<PostId>> {
        let payload = RangeRequest {
            term: term.to_string(),
            start,
            end,
        };
        let response = self.post(ENDPOINT_RANGE, &payload).await?;
        let body: RangeResponse = response
            .json()
            .await
            .map_err(|e| Error::StoreUnavailable(format!("invalid range response: {}", e)))?;
        Ok(body.post_ids)
    }

    async fn clear_all(&self) -> Result<()> {
        self.post(ENDPOINT_CLEAR, &serde_json::json!({})).await?;
        tracing::info!("Cleared remote index store at {}", self.base_url);
        Ok(())
    }
}
