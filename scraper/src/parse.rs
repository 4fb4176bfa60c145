use scraper::{Html, Selector};

use crate::{ExtractError, Result};

const ANCHOR_SELECTOR: &str = "a[href]";

/// A hyperlink as it appears in the listing page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Anchor {
    pub href: String,
    /// Rendered text: inner tags dropped, whitespace collapsed and trimmed.
    pub text: String,
}

/// Collects every anchor with an `href`, at any depth, in document order.
pub fn parse_anchors(html: &str) -> Result<Vec<Anchor>> {
    let document = Html::parse_document(html);
    let selector = create_selector(ANCHOR_SELECTOR)?;

    let anchors = document
        .select(&selector)
        .filter_map(|el| {
            let href = el.value().attr("href")?;
            Some(Anchor {
                href: href.to_string(),
                text: collapse_whitespace(el.text()),
            })
        })
        .collect();

    Ok(anchors)
}

#[inline]
fn create_selector(sel_str: &str) -> Result<Selector> {
    Selector::parse(sel_str).map_err(|_| ExtractError::Selector(sel_str.into()))
}

fn collapse_whitespace<'a>(fragments: impl Iterator<Item = &'a str>) -> String {
    fragments
        .flat_map(str::split_whitespace)
        .collect::<Vec<_>>()
        .join(" ")
}
