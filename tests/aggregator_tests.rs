//! Multi-source aggregation and the end-to-end scrape run

mod common;

use anyhow::{Result, anyhow};
use async_trait::async_trait;
use chrono::{NaiveDate, NaiveDateTime};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use tempfile::TempDir;

use common::{FakeFetcher, g2_review, g2_search_page, html};
use review_scraper::application::{
    ReviewAggregator, ReviewScrapeUseCase, RunOptions, ScrapeRequest, validate_request,
};
use review_scraper::domain::services::ReviewAdapter;
use review_scraper::domain::{DateWindow, NormalizedReview, ReviewSource, SourceSelector};
use review_scraper::infrastructure::config::AppConfig;
use review_scraper::infrastructure::{JsonReviewStore, PageFetcher};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn today() -> NaiveDate {
    date(2024, 1, 15)
}

fn now() -> NaiveDateTime {
    today().and_hms_opt(10, 30, 0).unwrap()
}

fn year_2023() -> DateWindow {
    DateWindow::new(date(2023, 1, 1), date(2023, 12, 31))
}

enum Behaviour {
    Reviews(usize),
    Fail,
    Panic,
}

struct ScriptedAdapter {
    source: ReviewSource,
    behaviour: Behaviour,
    calls: AtomicUsize,
}

impl ScriptedAdapter {
    fn new(source: ReviewSource, behaviour: Behaviour) -> Arc<Self> {
        Arc::new(Self {
            source,
            behaviour,
            calls: AtomicUsize::new(0),
        })
    }

    fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ReviewAdapter for ScriptedAdapter {
    fn source(&self) -> ReviewSource {
        self.source
    }

    async fn resolve(&self, _company_name: &str) -> Option<String> {
        Some(format!("https://example.com/{}", self.source.slug()))
    }

    async fn collect(
        &self,
        _product_url: &str,
        window: DateWindow,
        _today: NaiveDate,
    ) -> Vec<NormalizedReview> {
        match self.behaviour {
            Behaviour::Reviews(count) => (0..count)
                .map(|_| NormalizedReview::with_sentinels(self.source, window.start()))
                .collect(),
            _ => Vec::new(),
        }
    }

    async fn gather(
        &self,
        company_name: &str,
        window: DateWindow,
        today: NaiveDate,
    ) -> Result<Vec<NormalizedReview>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match self.behaviour {
            Behaviour::Reviews(_) => {
                let url = self.resolve(company_name).await.unwrap_or_default();
                Ok(self.collect(&url, window, today).await)
            }
            Behaviour::Fail => Err(anyhow!("markup changed")),
            Behaviour::Panic => panic!("selector engine exploded"),
        }
    }
}

fn sources(reviews: &[NormalizedReview]) -> Vec<ReviewSource> {
    reviews.iter().map(|r| r.source).collect()
}

#[tokio::test]
async fn test_failing_adapter_does_not_stop_the_others() {
    let g2 = ScriptedAdapter::new(ReviewSource::G2, Behaviour::Reviews(2));
    let capterra = ScriptedAdapter::new(ReviewSource::Capterra, Behaviour::Fail);
    let software_advice = ScriptedAdapter::new(ReviewSource::SoftwareAdvice, Behaviour::Reviews(1));

    let aggregator = ReviewAggregator::new(vec![
        software_advice.clone(),
        capterra.clone(),
        g2.clone(),
    ]);
    let reviews = aggregator
        .gather("Acme", year_2023(), SourceSelector::All, today())
        .await;

    // fixed source order regardless of registration order
    assert_eq!(
        sources(&reviews),
        vec![ReviewSource::G2, ReviewSource::G2, ReviewSource::SoftwareAdvice]
    );
    assert_eq!(capterra.calls(), 1);
}

#[tokio::test]
async fn test_panicking_adapter_is_isolated() {
    let g2 = ScriptedAdapter::new(ReviewSource::G2, Behaviour::Panic);
    let capterra = ScriptedAdapter::new(ReviewSource::Capterra, Behaviour::Reviews(1));
    let software_advice = ScriptedAdapter::new(ReviewSource::SoftwareAdvice, Behaviour::Reviews(1));

    let aggregator = ReviewAggregator::new(vec![g2, capterra, software_advice]);
    let reviews = aggregator
        .gather("Acme", year_2023(), SourceSelector::All, today())
        .await;

    assert_eq!(
        sources(&reviews),
        vec![ReviewSource::Capterra, ReviewSource::SoftwareAdvice]
    );
}

#[tokio::test]
async fn test_single_source_runs_only_that_adapter() {
    let g2 = ScriptedAdapter::new(ReviewSource::G2, Behaviour::Reviews(1));
    let capterra = ScriptedAdapter::new(ReviewSource::Capterra, Behaviour::Reviews(3));

    let aggregator = ReviewAggregator::new(vec![g2.clone(), capterra.clone()]);
    let reviews = aggregator
        .gather(
            "Acme",
            year_2023(),
            SourceSelector::Single(ReviewSource::Capterra),
            today(),
        )
        .await;

    assert_eq!(reviews.len(), 3);
    assert_eq!(g2.calls(), 0);
    assert_eq!(capterra.calls(), 1);
}

#[tokio::test]
async fn test_inverted_window_through_real_crawlers_is_empty() {
    let fetcher = FakeFetcher::new();
    fetcher
        .page(
            "https://www.g2.com/search?query=Acme",
            g2_search_page("Acme", "/products/acme"),
        )
        .page(
            "https://www.g2.com/products/acme/reviews?page=1",
            html(&g2_review("x", "2023-06-01")),
        );

    let mut config = AppConfig::default();
    config.http.request_delay_ms = 0;
    let fetcher_dyn: Arc<dyn PageFetcher> = fetcher.clone();
    let aggregator = ReviewAggregator::from_config(&config, fetcher_dyn).unwrap();

    let inverted = DateWindow::new(date(2023, 12, 31), date(2023, 1, 1));
    let reviews = aggregator
        .gather("Acme", inverted, SourceSelector::All, today())
        .await;

    assert!(reviews.is_empty());
    // Capterra and Software Advice searches 404 and are retried
    assert_eq!(fetcher.request_count("https://www.capterra.com/search/?search=Acme"), 3);
}

#[tokio::test]
async fn test_demo_run_writes_timestamped_file() {
    let dir = TempDir::new().unwrap();
    let use_case = ReviewScrapeUseCase::new(
        ReviewAggregator::new(Vec::new()),
        JsonReviewStore::new(dir.path()),
    );
    let request = validate_request("Slack", "2023-01-01", "2023-12-31", "all", today()).unwrap();
    let options = RunOptions {
        output_path: None,
        demo: true,
    };

    let outcome = use_case.run(&request, &options, now()).await.unwrap();

    let expected_path = dir.path().join("Slack_all_reviews_20240115_103000.json");
    assert_eq!(outcome.output_path.as_deref(), Some(expected_path.as_path()));
    assert_eq!(outcome.total_reviews, 5);
    assert_eq!(
        outcome.per_source,
        vec![
            (ReviewSource::G2, 2),
            (ReviewSource::Capterra, 2),
            (ReviewSource::SoftwareAdvice, 1)
        ]
    );

    let saved = JsonReviewStore::load(&expected_path).await.unwrap();
    assert_eq!(saved.len(), 5);
    assert_eq!(saved[0].title, "Excellent Slack Platform");
}

#[tokio::test]
async fn test_explicit_output_path_gets_parent_created() {
    let dir = TempDir::new().unwrap();
    let target = dir.path().join("reports").join("acme.json");
    let use_case = ReviewScrapeUseCase::new(
        ReviewAggregator::new(Vec::new()),
        JsonReviewStore::new(dir.path().join("unused")),
    );
    let request = ScrapeRequest {
        company_name: "Acme".to_string(),
        window: year_2023(),
        source: SourceSelector::Single(ReviewSource::G2),
    };
    let options = RunOptions {
        output_path: Some(target.clone()),
        demo: true,
    };

    let outcome = use_case.run(&request, &options, now()).await.unwrap();

    assert_eq!(outcome.total_reviews, 2);
    assert!(target.exists());
    assert!(!dir.path().join("unused").exists());
}

#[tokio::test]
async fn test_no_reviews_means_no_file() {
    let dir = TempDir::new().unwrap();
    let use_case = ReviewScrapeUseCase::new(
        ReviewAggregator::new(vec![ScriptedAdapter::new(
            ReviewSource::G2,
            Behaviour::Reviews(0),
        )]),
        JsonReviewStore::new(dir.path().join("out")),
    );
    let request = validate_request("Acme", "2023-01-01", "2023-12-31", "g2", today()).unwrap();

    // the run logs under a scoped subscriber, not a global one
    let subscriber = tracing_subscriber::fmt().with_test_writer().finish();
    let _guard = tracing::subscriber::set_default(subscriber);
    let outcome = use_case
        .run(&request, &RunOptions::default(), now())
        .await
        .unwrap();

    assert_eq!(outcome.total_reviews, 0);
    assert!(outcome.output_path.is_none());
    assert!(!dir.path().join("out").exists());
}
