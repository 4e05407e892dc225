//! Review crawler
//!
//! One [`ReviewCrawler`] per site profile. It implements the shared
//! algorithm: search for the company, then walk review pages newest-first
//! until the date window is exhausted, the site runs out of pages, the
//! review cap is hit, or a request fails.

use anyhow::{Context, Result};
use async_trait::async_trait;
use chrono::NaiveDate;
use scraper::Html;
use std::sync::Arc;
use std::time::Duration;
use tokio::time::sleep;
use tracing::{debug, error, info, warn};

use crate::domain::date_window::{DateWindow, WindowPosition};
use crate::domain::review::{NormalizedReview, ReviewSource};
use crate::domain::services::ReviewAdapter;
use crate::infrastructure::config::AppConfig;
use crate::infrastructure::http_client::{PageFetcher, RetryPolicy, fetch_with_retry};
use crate::infrastructure::parsing::{
    ContextualParser, ParseContext, ReviewListParser, SearchResultParser,
};
use crate::infrastructure::sites::SiteProfile;

/// Pacing and limits shared by every crawler in a run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CrawlSettings {
    /// Pause between consecutive review pages
    pub request_delay: Duration,
    /// Applied to the search request only
    pub retry: RetryPolicy,
    pub max_reviews: usize,
}

impl CrawlSettings {
    pub fn from_config(config: &AppConfig) -> Self {
        Self {
            request_delay: Duration::from_millis(config.http.request_delay_ms),
            retry: RetryPolicy::from_config(&config.http),
            max_reviews: config.max_reviews_per_source,
        }
    }
}

pub struct ReviewCrawler {
    profile: SiteProfile,
    fetcher: Arc<dyn PageFetcher>,
    search_parser: SearchResultParser,
    review_parser: ReviewListParser,
    settings: CrawlSettings,
}

impl ReviewCrawler {
    pub fn new(
        profile: SiteProfile,
        fetcher: Arc<dyn PageFetcher>,
        settings: CrawlSettings,
    ) -> Result<Self> {
        let search_parser = SearchResultParser::new(&profile.search_results, &profile.base_url)
            .with_context(|| format!("Invalid {} search selectors", profile.source))?;
        let review_parser = ReviewListParser::new(profile.source, &profile.reviews)
            .with_context(|| format!("Invalid {} review selectors", profile.source))?;

        Ok(Self {
            profile,
            fetcher,
            search_parser,
            review_parser,
            settings,
        })
    }
}

#[async_trait]
impl ReviewAdapter for ReviewCrawler {
    fn source(&self) -> ReviewSource {
        self.profile.source
    }

    async fn resolve(&self, company_name: &str) -> Option<String> {
        let search_url = self.profile.search_url(company_name);
        info!("🔍 Searching {} for '{}': {}", self.source(), company_name, search_url);

        let body = match fetch_with_retry(self.fetcher.as_ref(), &search_url, self.settings.retry).await {
            Ok(body) => body,
            Err(e) => {
                error!("❌ {} search failed for '{}': {}", self.source(), company_name, e);
                return None;
            }
        };

        let product_url = {
            let html = Html::parse_document(&body);
            self.search_parser.find_product_url(&html, company_name)
        };

        match &product_url {
            Some(url) => info!("✅ Found {} product page: {}", self.source(), url),
            None => debug!("No {} search result matched '{}'", self.source(), company_name),
        }
        product_url
    }

    async fn collect(
        &self,
        product_url: &str,
        window: DateWindow,
        today: NaiveDate,
    ) -> Vec<NormalizedReview> {
        let source = self.source();
        let mut collected = Vec::new();
        let mut page: u32 = 1;

        if window.is_inverted() {
            warn!("⚠️ Date window {} is inverted; no {} review can match", window, source);
        }

        'pages: loop {
            let page_url = self.profile.reviews_page_url(product_url, page);
            info!("📄 Fetching {} reviews page {}: {}", source, page, page_url);

            let body = match self.fetcher.fetch_page(&page_url).await {
                Ok(body) => body,
                Err(e) => {
                    error!("❌ Error fetching {} reviews page {}: {}", source, page, e);
                    break 'pages;
                }
            };

            let parsed = {
                let html = Html::parse_document(&body);
                self.review_parser
                    .parse_with_context(&html, &ParseContext::new(page, today))
            };
            let review_page = match parsed {
                Ok(review_page) => review_page,
                Err(e) => {
                    error!("❌ Unexpected error parsing {} reviews page {}: {}", source, page, e);
                    break 'pages;
                }
            };

            if review_page.is_empty() {
                info!("No more {} reviews found on page {}", source, page);
                break 'pages;
            }

            for review in review_page.reviews {
                match window.classify(review.date) {
                    WindowPosition::Within => {
                        if collected.len() < self.settings.max_reviews {
                            debug!("Added {} review from {}", source, review.date);
                            collected.push(review);
                        }
                        if collected.len() >= self.settings.max_reviews {
                            info!(
                                "Reached the limit of {} {} reviews, stopping",
                                self.settings.max_reviews, source
                            );
                            break 'pages;
                        }
                    }
                    WindowPosition::OlderThanStart => {
                        info!("Reached {} reviews older than {}, stopping", source, window.start());
                        break 'pages;
                    }
                    WindowPosition::NewerThanEnd => {}
                }
            }

            if !review_page.has_next_page {
                info!("No more {} pages available", source);
                break 'pages;
            }

            page += 1;
            if !self.settings.request_delay.is_zero() {
                sleep(self.settings.request_delay).await;
            }
        }

        info!("📊 Total {} reviews collected: {}", source, collected.len());
        collected
    }
}
