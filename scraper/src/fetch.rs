//! One GET against the listing page, with an optional short-lived body cache.

use chrono::Utc;
use reqwest::Client;
use std::time::{Duration, Instant};
use tokio::sync::RwLock;

use crate::config::ExtractorConfig;
use crate::{ExtractError, Result};

struct CachedPage {
    body: String,
    fetched_at: Instant,
}

pub struct PageFetcher {
    client: Client,
    url: String,
    cache_bust: bool,
    cache_ttl: Duration,
    cache: RwLock<Option<CachedPage>>,
}

impl PageFetcher {
    pub fn new(config: &ExtractorConfig) -> Result<Self> {
        let client = Client::builder()
            .user_agent(config.user_agent.as_str())
            .timeout(config.timeout())
            .build()?;

        Ok(Self {
            client,
            url: config.source_url.clone(),
            cache_bust: config.cache_bust,
            cache_ttl: config.cache_ttl(),
            cache: RwLock::new(None),
        })
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    /// Returns the page body, from cache when a fresh copy is held.
    ///
    /// Non-success statuses are errors; only successful bodies are cached.
    pub async fn fetch_page(&self) -> Result<String> {
        if let Some(body) = self.cached().await {
            tracing::debug!(url = %self.url, "serving cached listing page");
            return Ok(body);
        }

        let mut request = self.client.get(&self.url);
        if self.cache_bust {
            request = request.query(&[("_", Utc::now().timestamp_millis())]);
        }

        let response = request.send().await?;
        let status = response.status();
        if !status.is_success() {
            tracing::warn!(url = %self.url, status = status.as_u16(), "listing page request failed");
            return Err(ExtractError::Status {
                status,
                url: self.url.clone(),
            });
        }

        let body = response.text().await?;
        tracing::debug!(url = %self.url, bytes = body.len(), "fetched listing page");

        if !self.cache_ttl.is_zero() {
            *self.cache.write().await = Some(CachedPage {
                body: body.clone(),
                fetched_at: Instant::now(),
            });
        }

        Ok(body)
    }

    async fn cached(&self) -> Option<String> {
        if self.cache_ttl.is_zero() {
            return None;
        }
        let guard = self.cache.read().await;
        guard
            .as_ref()
            .filter(|page| page.fetched_at.elapsed() < self.cache_ttl)
            .map(|page| page.body.clone())
    }
}
