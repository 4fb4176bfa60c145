pub mod observability;
pub mod settings;

use serde::{Deserialize, Serialize};

/// Category tag assigned to every record pulled from the listing page.
pub const LATEST_CATEGORY: &str = "Latest";

/// A single job posting scraped from the notification listing.
///
/// `id` mirrors `link` and doubles as the dedupe key within one result set.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct JobNotification {
    pub id: String,
    pub title: String,
    pub link: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
}

impl JobNotification {
    pub fn new(link: impl Into<String>, title: impl Into<String>, category: Option<String>) -> Self {
        let link = link.into();
        Self {
            id: link.clone(),
            title: title.into(),
            link,
            category,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn id_follows_link() {
        let job = JobNotification::new("/articles/rrb-ntpc-2026-145", "RRB NTPC 2026", None);
        assert_eq!(job.id, job.link);
    }

    #[test]
    fn serializes_flat_object() {
        let job = JobNotification::new(
            "/articles/ssc-cgl-2026-88",
            "Ssc Cgl 2026",
            Some(LATEST_CATEGORY.to_string()),
        );
        let value = serde_json::to_value(&job).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "id": "/articles/ssc-cgl-2026-88",
                "title": "Ssc Cgl 2026",
                "link": "/articles/ssc-cgl-2026-88",
                "category": "Latest",
            })
        );
    }

    #[test]
    fn omits_missing_category() {
        let job = JobNotification::new("/recruitment/x", "Some Recruitment Drive", None);
        let json = serde_json::to_string(&job).unwrap();
        assert!(!json.contains("category"));

        let back: JobNotification = serde_json::from_str(&json).unwrap();
        assert_eq!(back, job);
    }
}
