//! Shared test doubles: an in-memory page fetcher and HTML builders

#![allow(dead_code)]

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use review_scraper::infrastructure::{CrawlSettings, FetchError, PageFetcher, RetryPolicy};

/// Scripted response for one URL
#[derive(Debug, Clone)]
pub enum Scripted {
    Page(String),
    Fail,
}

/// Serves canned pages by exact URL and records every request.
/// Each URL has a queue of responses; the last one repeats.
#[derive(Default)]
pub struct FakeFetcher {
    responses: Mutex<HashMap<String, Vec<Scripted>>>,
    requests: Mutex<Vec<String>>,
}

impl FakeFetcher {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn page(&self, url: &str, body: impl Into<String>) -> &Self {
        self.script(url, vec![Scripted::Page(body.into())])
    }

    pub fn script(&self, url: &str, responses: Vec<Scripted>) -> &Self {
        self.responses
            .lock()
            .unwrap()
            .insert(url.to_string(), responses);
        self
    }

    pub fn requests(&self) -> Vec<String> {
        self.requests.lock().unwrap().clone()
    }

    pub fn request_count(&self, url: &str) -> usize {
        self.requests().iter().filter(|u| u.as_str() == url).count()
    }
}

#[async_trait]
impl PageFetcher for FakeFetcher {
    async fn fetch_page(&self, url: &str) -> Result<String, FetchError> {
        self.requests.lock().unwrap().push(url.to_string());

        let mut responses = self.responses.lock().unwrap();
        let next = match responses.get_mut(url) {
            Some(queue) if queue.len() > 1 => queue.remove(0),
            Some(queue) => queue.first().cloned().unwrap_or(Scripted::Fail),
            None => {
                return Err(FetchError::Status {
                    status: 404,
                    url: url.to_string(),
                });
            }
        };

        match next {
            Scripted::Page(body) => Ok(body),
            Scripted::Fail => Err(FetchError::transport(url, "connection reset")),
        }
    }
}

/// No sleeping anywhere
pub fn instant_settings() -> CrawlSettings {
    CrawlSettings {
        request_delay: Duration::ZERO,
        retry: RetryPolicy {
            max_attempts: 3,
            base_delay: Duration::ZERO,
        },
        max_reviews: 1000,
    }
}

pub fn html(body: &str) -> String {
    format!("<html><body>{body}</body></html>")
}

/// G2 review fragment with a machine-readable date
pub fn g2_review(title: &str, date: &str) -> String {
    format!(
        r#"<div class="review">
             <h3 class="review__title">{title}</h3>
             <div class="review__content">Body of {title}</div>
             <time datetime="{date}T12:00:00Z">{date}</time>
             <div class="reviewer__name">Reviewer {title}</div>
             <div class="review__rating"><svg class="star filled"></svg><svg class="star filled"></svg><svg class="star"></svg></div>
             <span class="review__helpful-count">4</span>
           </div>"#
    )
}

pub const G2_NEXT: &str = r#"<a class="pagination__next" href="?page=next">Next</a>"#;

pub fn g2_search_page(company: &str, href: &str) -> String {
    html(&format!(
        r#"<a class="link--header-color" href="{href}">{company}</a>"#
    ))
}
