//! Job notification extraction for the exam-prep dashboard.
//!
//! Fetches one listing page, picks out anchors that look like job postings,
//! names them, drops duplicates and returns at most [`config::MAX_RESULTS`].
//! The public entry points never fail: a broken fetch reads as "no jobs".

pub mod classify;
pub mod config;
mod error;
pub mod extract;
pub mod fetch;
pub mod parse;

pub use common::JobNotification;
pub use config::ExtractorConfig;
pub use error::{ExtractError, Result};
pub use extract::{Extractor, extract_jobs};

/// Fetches the default source with the default settings.
///
/// Returns an empty list on any failure; the cause is logged.
pub async fn fetch_latest_jobs() -> Vec<JobNotification> {
    match Extractor::new(ExtractorConfig::default()) {
        Ok(extractor) => extractor.fetch_latest_jobs().await,
        Err(e) => {
            tracing::error!(error = %e, "failed to build extractor");
            Vec::new()
        }
    }
}
