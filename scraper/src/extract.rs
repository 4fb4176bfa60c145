use std::collections::HashSet;
use std::sync::Arc;

use common::JobNotification;

use crate::classify::classify;
use crate::config::ExtractorConfig;
use crate::fetch::PageFetcher;
use crate::parse::parse_anchors;
use crate::Result;

/// Runs the whole pipeline over an already fetched page.
///
/// Records keep first-occurrence order; a repeated link keeps its first title.
pub fn extract_jobs(html: &str, config: &ExtractorConfig) -> Result<Vec<JobNotification>> {
    let anchors = parse_anchors(html)?;
    let total = anchors.len();

    let jobs = dedupe_and_cap(
        anchors.iter().filter_map(|anchor| classify(anchor, config)),
        config.max_results,
    );

    tracing::debug!(anchors = total, jobs = jobs.len(), "classified listing anchors");
    Ok(jobs)
}

/// Keeps the first record per link, then stops after `cap` records.
pub fn dedupe_and_cap(
    candidates: impl IntoIterator<Item = JobNotification>,
    cap: usize,
) -> Vec<JobNotification> {
    let mut seen_links: HashSet<String> = HashSet::new();
    candidates
        .into_iter()
        .filter(|job| seen_links.insert(job.link.clone()))
        .take(cap)
        .collect()
}

/// Fetches the listing page and turns it into job notifications.
///
/// Holds no state between calls beyond the fetcher's optional body cache, so
/// one instance can be shared across tasks.
pub struct Extractor {
    config: Arc<ExtractorConfig>,
    fetcher: PageFetcher,
}

impl Extractor {
    pub fn new(config: ExtractorConfig) -> Result<Self> {
        let fetcher = PageFetcher::new(&config)?;
        Ok(Self {
            config: Arc::new(config),
            fetcher,
        })
    }

    pub fn config(&self) -> &ExtractorConfig {
        &self.config
    }

    /// Fetch, parse and classify, reporting why nothing came back.
    pub async fn try_fetch_latest_jobs(&self) -> Result<Vec<JobNotification>> {
        let html = self.fetcher.fetch_page().await?;

        // `Html` is not `Send`; parse on the blocking pool and surface panics as errors.
        let config = Arc::clone(&self.config);
        let jobs = tokio::task::spawn_blocking(move || extract_jobs(&html, &config)).await??;

        tracing::info!(url = %self.fetcher.url(), jobs = jobs.len(), "extracted job notifications");
        Ok(jobs)
    }

    /// Same as [`Self::try_fetch_latest_jobs`], but any failure is logged and
    /// reported as an empty list.
    pub async fn fetch_latest_jobs(&self) -> Vec<JobNotification> {
        match self.try_fetch_latest_jobs().await {
            Ok(jobs) => jobs,
            Err(e) => {
                tracing::error!(url = %self.fetcher.url(), error = %e, "job extraction failed");
                Vec::new()
            }
        }
    }
}
