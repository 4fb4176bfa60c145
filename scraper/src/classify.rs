//! Heuristics deciding which anchors are postings and what to call them.
//!
//! The listing page has no schema to lean on, so everything here is a
//! best-effort guess: an href marker says "this is a posting", the anchor text
//! is the title unless it is boilerplate, in which case the URL slug is used.

use regex::{Captures, Regex};
use std::sync::LazyLock;

use common::JobNotification;

use crate::config::{ExtractorConfig, GENERIC_CTA, LINK_MARKERS};
use crate::parse::Anchor;

static TRAILING_ID: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"-?\d+$").expect("trailing id pattern"));

static WORD_START: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b\w").expect("word start pattern"));

/// True when the href looks like it points at a posting.
pub fn is_job_link(href: &str) -> bool {
    LINK_MARKERS.iter().any(|marker| href.contains(marker))
}

/// "Get Details", "click here" and friends.
pub fn is_generic_cta(text: &str) -> bool {
    let text = text.trim();
    GENERIC_CTA.iter().any(|cta| text.eq_ignore_ascii_case(cta))
}

/// Case-insensitive: the site spells its own name with varying capitalisation.
pub fn is_own_brand_link(text: &str, brand: &str) -> bool {
    text.to_lowercase().contains(&brand.to_lowercase())
}

/// Builds a title from the last path segment of `link`.
///
/// `/articles/ssc-cgl-2026-88` becomes `Ssc Cgl 2026`: the trailing numeric id
/// is dropped, dashes become spaces and every word is capitalised.
pub fn derive_title(link: &str) -> String {
    let path = link.split(['?', '#']).next().unwrap_or_default();
    let slug = path.split('/').filter(|s| !s.is_empty()).last().unwrap_or_default();

    let stripped = TRAILING_ID.replace(slug, "");
    let spaced = stripped.replace('-', " ");
    let capitalised = WORD_START.replace_all(&spaced, |caps: &Captures| caps[0].to_uppercase());

    capitalised.trim().to_string()
}

fn long_enough(title: &str, min_len: usize) -> bool {
    title.chars().count() > min_len
}

/// Turns one anchor into a candidate record, or drops it.
pub fn classify(anchor: &Anchor, config: &ExtractorConfig) -> Option<JobNotification> {
    if !is_job_link(&anchor.href) {
        return None;
    }

    let text = anchor.text.trim();
    let title = if is_generic_cta(text) {
        let derived = derive_title(&anchor.href);
        if !long_enough(&derived, config.min_title_len) {
            tracing::trace!(link = %anchor.href, %derived, "derived title too short");
            return None;
        }
        derived
    } else if long_enough(text, config.min_title_len) && !is_own_brand_link(text, &config.brand) {
        text.to_string()
    } else {
        return None;
    };

    Some(JobNotification::new(
        anchor.href.clone(),
        title,
        Some(config.category.clone()),
    ))
}
