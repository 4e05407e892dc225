//! Scrape use case
//!
//! Validated request in, JSON file out: gather (live or demo), log a
//! summary, persist.

use anyhow::Result;
use chrono::NaiveDateTime;
use std::path::PathBuf;
use tracing::{info, warn};

use crate::application::aggregator::ReviewAggregator;
use crate::application::demo::generate_demo_reviews;
use crate::application::validation::ScrapeRequest;
use crate::domain::review::{NormalizedReview, ReviewSource};
use crate::infrastructure::review_repository::JsonReviewStore;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunOptions {
    /// Explicit output file; otherwise a timestamped name in the output dir
    pub output_path: Option<PathBuf>,
    /// Use canned reviews instead of scraping
    pub demo: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunOutcome {
    pub total_reviews: usize,
    /// Per-source counts in first-seen order
    pub per_source: Vec<(ReviewSource, usize)>,
    /// `None` when nothing was collected and no file was written
    pub output_path: Option<PathBuf>,
}

pub struct ReviewScrapeUseCase {
    aggregator: ReviewAggregator,
    store: JsonReviewStore,
}

impl ReviewScrapeUseCase {
    pub fn new(aggregator: ReviewAggregator, store: JsonReviewStore) -> Self {
        Self { aggregator, store }
    }

    /// `now` is local wall-clock time; its date is "today" for the run
    pub async fn run(
        &self,
        request: &ScrapeRequest,
        options: &RunOptions,
        now: NaiveDateTime,
    ) -> Result<RunOutcome> {
        let mode = if options.demo { "DEMO" } else { "LIVE" };
        info!("🚀 Starting review scraping for: {}", request.company_name);
        info!("📅 Date range: {}", request.window);
        info!("🌐 Source: {}", request.source);
        info!("🔧 Mode: {}", mode);

        let reviews = if options.demo {
            generate_demo_reviews(&request.company_name, request.window, request.source)
        } else {
            self.aggregator
                .gather(&request.company_name, request.window, request.source, now.date())
                .await
        };

        let per_source = count_by_source(&reviews);

        if reviews.is_empty() {
            warn!("⚠️ No reviews found for the specified criteria");
            return Ok(RunOutcome {
                total_reviews: 0,
                per_source,
                output_path: None,
            });
        }

        let output_path = options.output_path.clone().unwrap_or_else(|| {
            self.store
                .default_file_path(&request.company_name, request.source, now)
        });
        self.store.save(&reviews, &output_path).await?;

        info!("📊 SCRAPING SUMMARY");
        info!("Company: {}", request.company_name);
        info!("Date Range: {}", request.window);
        info!("Source: {}", request.source);
        info!("Total Reviews: {}", reviews.len());
        info!("Mode: {}", mode);
        for (source, count) in &per_source {
            info!("  {}: {} reviews", source, count);
        }
        info!("Output File: {:?}", output_path);

        Ok(RunOutcome {
            total_reviews: reviews.len(),
            per_source,
            output_path: Some(output_path),
        })
    }
}

/// Review counts per source, ordered by first appearance
pub fn count_by_source(reviews: &[NormalizedReview]) -> Vec<(ReviewSource, usize)> {
    let mut counts: Vec<(ReviewSource, usize)> = Vec::new();
    for review in reviews {
        match counts.iter_mut().find(|(source, _)| *source == review.source) {
            Some((_, count)) => *count += 1,
            None => counts.push((review.source, 1)),
        }
    }
    counts
}
