//! Review collection service traits
//!
//! One [`ReviewAdapter`] exists per review site. The aggregator only talks
//! to this trait, which keeps site specifics out of orchestration and lets
//! tests substitute scripted adapters.

use anyhow::Result;
use async_trait::async_trait;
use chrono::NaiveDate;
use tracing::warn;

use crate::domain::date_window::DateWindow;
use crate::domain::review::{NormalizedReview, ReviewSource};

/// Per-site review collector
#[async_trait]
pub trait ReviewAdapter: Send + Sync {
    /// Site this adapter collects from; stamped on every record it emits
    fn source(&self) -> ReviewSource;

    /// Find the product page URL for a company on this site.
    ///
    /// Returns `None` when the search fails or nothing matches; search
    /// failures are logged, never propagated.
    async fn resolve(&self, company_name: &str) -> Option<String>;

    /// Walk the product's review pages newest-first and keep the reviews
    /// inside `window`. Transport errors end the walk early and whatever
    /// was already collected is returned.
    async fn collect(
        &self,
        product_url: &str,
        window: DateWindow,
        today: NaiveDate,
    ) -> Vec<NormalizedReview>;

    /// Resolve the company then collect its reviews
    async fn gather(
        &self,
        company_name: &str,
        window: DateWindow,
        today: NaiveDate,
    ) -> Result<Vec<NormalizedReview>> {
        let Some(product_url) = self.resolve(company_name).await else {
            warn!(
                "⚠️ Could not find {} page for company: {}",
                self.source(),
                company_name
            );
            return Ok(Vec::new());
        };

        Ok(self.collect(&product_url, window, today).await)
    }
}
