//! Extractor settings and the constants they default to.

use serde::Deserialize;
use std::path::Path;
use std::time::Duration;

use common::LATEST_CATEGORY;
use common::settings::ConfigError;

pub const SOURCE_URL: &str = "https://www.freejobalert.com/latest-notifications/";

pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/91.0.4472.124 Safari/537.36";

/// Upper bound on records returned from one extraction.
pub const MAX_RESULTS: usize = 50;

/// Titles must be strictly longer than this many characters.
pub const MIN_TITLE_LEN: usize = 10;

/// The source site's own name; anchor text containing it is site chrome.
pub const BRAND_NAME: &str = "freejobalert";

pub const DEFAULT_TIMEOUT_SECS: u64 = 20;

/// Longest the fetcher may reuse a response body.
pub const MAX_CACHE_TTL_SECS: u64 = 3600;

/// An href must contain one of these to be considered a posting.
pub const LINK_MARKERS: [&str; 2] = ["/articles/", "recruitment"];

/// Anchor text that carries no information about the posting.
pub const GENERIC_CTA: [&str; 2] = ["get details", "click here"];

#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct ExtractorConfig {
    pub source_url: String,
    pub user_agent: String,
    pub timeout_secs: u64,
    /// 0 disables response caching.
    pub cache_ttl_secs: u64,
    /// Append a `_=<millis>` query parameter to every request.
    pub cache_bust: bool,
    pub max_results: usize,
    pub min_title_len: usize,
    pub brand: String,
    pub category: String,
}

impl Default for ExtractorConfig {
    fn default() -> Self {
        Self {
            source_url: SOURCE_URL.to_string(),
            user_agent: DEFAULT_USER_AGENT.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            cache_ttl_secs: 0,
            cache_bust: false,
            max_results: MAX_RESULTS,
            min_title_len: MIN_TITLE_LEN,
            brand: BRAND_NAME.to_string(),
            category: LATEST_CATEGORY.to_string(),
        }
    }
}

impl ExtractorConfig {
    /// Defaults, overlaid by `file` (if any) and `JOBFEED__*` variables.
    pub fn load(file: Option<&Path>) -> Result<Self, ConfigError> {
        common::settings::load(file)
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Clamped to [`MAX_CACHE_TTL_SECS`].
    pub fn cache_ttl(&self) -> Duration {
        Duration::from_secs(self.cache_ttl_secs.min(MAX_CACHE_TTL_SECS))
    }
}
