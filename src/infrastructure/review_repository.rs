//! JSON persistence for collected reviews
//!
//! Output is a pretty-printed UTF-8 JSON array; non-ASCII text is written
//! as-is rather than `\u` escaped.

use anyhow::{Context, Result};
use chrono::NaiveDateTime;
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::info;

use crate::domain::review::{NormalizedReview, SourceSelector};

#[derive(Debug, Clone)]
pub struct JsonReviewStore {
    output_dir: PathBuf,
}

impl JsonReviewStore {
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            output_dir: output_dir.into(),
        }
    }

    /// `{output_dir}/{company}_{source}_reviews_{YYYYmmdd_HHMMSS}.json`
    pub fn default_file_path(
        &self,
        company_name: &str,
        selector: SourceSelector,
        now: NaiveDateTime,
    ) -> PathBuf {
        let file_name = format!(
            "{}_{}_reviews_{}.json",
            file_name_component(company_name),
            selector.as_str(),
            now.format("%Y%m%d_%H%M%S")
        );
        self.output_dir.join(file_name)
    }

    /// Write `reviews` to `path`, creating missing parent directories
    pub async fn save(&self, reviews: &[NormalizedReview], path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)
                    .await
                    .with_context(|| format!("Failed to create output directory {parent:?}"))?;
            }
        }

        let json = serde_json::to_string_pretty(reviews).context("Failed to serialize reviews")?;
        fs::write(path, json)
            .await
            .with_context(|| format!("Failed to write reviews to {path:?}"))?;

        info!("💾 Saved {} reviews to {:?}", reviews.len(), path);
        Ok(())
    }

    pub async fn load(path: &Path) -> Result<Vec<NormalizedReview>> {
        let content = fs::read_to_string(path)
            .await
            .with_context(|| format!("Failed to read reviews from {path:?}"))?;
        serde_json::from_str(&content).with_context(|| format!("Invalid review file {path:?}"))
    }
}

/// Company names go into file names verbatim apart from path separators
fn file_name_component(company_name: &str) -> String {
    company_name
        .trim()
        .chars()
        .map(|c| if matches!(c, '/' | '\\') { '_' } else { c })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::review::{Rating, ReviewSource};
    use chrono::NaiveDate;
    use tempfile::TempDir;

    fn review() -> NormalizedReview {
        NormalizedReview {
            title: "Très bien – ça marche".to_string(),
            description: "日本語のレビュー".to_string(),
            date: NaiveDate::from_ymd_opt(2023, 10, 15).unwrap(),
            reviewer_name: "Zoë".to_string(),
            rating: Rating::new(5.0),
            helpful_votes: "3".to_string(),
            source: ReviewSource::G2,
        }
    }

    #[test]
    fn test_default_file_path() {
        let store = JsonReviewStore::new("output");
        let now = NaiveDate::from_ymd_opt(2024, 1, 15)
            .unwrap()
            .and_hms_opt(9, 5, 7)
            .unwrap();

        assert_eq!(
            store.default_file_path("Acme/Corp", SourceSelector::All, now),
            PathBuf::from("output/Acme_Corp_all_reviews_20240115_090507.json")
        );
        assert_eq!(
            store.default_file_path("Slack", SourceSelector::Single(ReviewSource::SoftwareAdvice), now),
            PathBuf::from("output/Slack_software-advice_reviews_20240115_090507.json")
        );
    }

    #[tokio::test]
    async fn test_save_writes_unescaped_pretty_json() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("reviews.json");
        let store = JsonReviewStore::new(dir.path());

        store.save(&[review()], &path).await.unwrap();

        let raw = std::fs::read_to_string(&path).unwrap();
        assert!(raw.contains("日本語のレビュー"));
        assert!(raw.contains("\n  {"));
        assert!(raw.contains("\"rating\": 5,"));
        assert_eq!(JsonReviewStore::load(&path).await.unwrap(), vec![review()]);
    }
}
