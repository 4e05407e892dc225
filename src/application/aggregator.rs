//! Multi-source review aggregation
//!
//! Runs the selected adapters one after another in the fixed source order
//! and concatenates what they return. A failing or panicking adapter costs
//! only its own contribution.

use anyhow::Result;
use chrono::NaiveDate;
use futures::FutureExt;
use std::any::Any;
use std::panic::AssertUnwindSafe;
use std::sync::Arc;
use tracing::{error, info, warn};

use crate::domain::date_window::DateWindow;
use crate::domain::review::{NormalizedReview, ReviewSource, SourceSelector};
use crate::domain::services::ReviewAdapter;
use crate::infrastructure::config::AppConfig;
use crate::infrastructure::http_client::PageFetcher;
use crate::infrastructure::review_crawler::{CrawlSettings, ReviewCrawler};

pub struct ReviewAggregator {
    adapters: Vec<Arc<dyn ReviewAdapter>>,
}

impl ReviewAggregator {
    pub fn new(adapters: Vec<Arc<dyn ReviewAdapter>>) -> Self {
        Self { adapters }
    }

    /// One crawler per configured site, all sharing `fetcher`
    pub fn from_config(config: &AppConfig, fetcher: Arc<dyn PageFetcher>) -> Result<Self> {
        let settings = CrawlSettings::from_config(config);
        let adapters = ReviewSource::ALL
            .into_iter()
            .map(|source| -> Result<Arc<dyn ReviewAdapter>> {
                let crawler = ReviewCrawler::new(
                    config.sites.profile(source).clone(),
                    Arc::clone(&fetcher),
                    settings,
                )?;
                Ok(Arc::new(crawler) as Arc<dyn ReviewAdapter>)
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Self::new(adapters))
    }

    fn adapter_for(&self, source: ReviewSource) -> Option<&Arc<dyn ReviewAdapter>> {
        self.adapters.iter().find(|adapter| adapter.source() == source)
    }

    /// Reviews from every selected source, grouped by source in
    /// G2, Capterra, Software Advice order
    pub async fn gather(
        &self,
        company_name: &str,
        window: DateWindow,
        selector: SourceSelector,
        today: NaiveDate,
    ) -> Vec<NormalizedReview> {
        let mut all_reviews = Vec::new();

        for source in selector.sources() {
            let Some(adapter) = self.adapter_for(source) else {
                warn!("⚠️ No adapter registered for {}", source);
                continue;
            };

            info!("🚀 Scraping reviews from {}...", source);
            let outcome = AssertUnwindSafe(adapter.gather(company_name, window, today))
                .catch_unwind()
                .await;

            match outcome {
                Ok(Ok(reviews)) => {
                    info!("✅ Collected {} reviews from {}", reviews.len(), source);
                    all_reviews.extend(reviews);
                }
                Ok(Err(e)) => {
                    error!("❌ Error scraping from {}: {:#}", source, e);
                }
                Err(panic) => {
                    error!("❌ {} adapter panicked: {}", source, panic_message(panic.as_ref()));
                }
            }
        }

        all_reviews
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(message) = payload.downcast_ref::<&str>() {
        (*message).to_string()
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.clone()
    } else {
        "unknown panic payload".to_string()
    }
}
