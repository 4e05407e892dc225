//! Review site profiles
//!
//! A [`SiteProfile`] is everything site-specific about collecting reviews:
//! where to search, how search results look, how review pages look. The
//! crawling algorithm itself is shared.

pub mod capterra;
pub mod g2;
pub mod software_advice;

use serde::{Deserialize, Serialize};

use crate::domain::review::ReviewSource;
use crate::infrastructure::parsing::config::{CandidateShape, ReviewListSelectors};

/// Placeholder replaced by the URL-encoded company name
pub const QUERY_PLACEHOLDER: &str = "{query}";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SiteProfile {
    pub source: ReviewSource,

    /// Base for resolving relative product links
    pub base_url: String,

    /// Search page URL containing [`QUERY_PLACEHOLDER`]
    pub search_url_template: String,

    /// Product link shapes on the search page, tried in order
    pub search_results: Vec<CandidateShape>,

    pub reviews: ReviewListSelectors,
}

impl SiteProfile {
    /// Search URL with the company name form-encoded (spaces become `+`)
    pub fn search_url(&self, company_name: &str) -> String {
        let query: String = url::form_urlencoded::byte_serialize(company_name.trim().as_bytes()).collect();
        self.search_url_template.replace(QUERY_PLACEHOLDER, &query)
    }

    /// `{product_url}/reviews?page={page}`, pages are 1-based
    pub fn reviews_page_url(&self, product_url: &str, page: u32) -> String {
        format!("{}/reviews?page={}", product_url.trim_end_matches('/'), page)
    }

    pub fn for_source(source: ReviewSource) -> Self {
        match source {
            ReviewSource::G2 => g2::profile(),
            ReviewSource::Capterra => capterra::profile(),
            ReviewSource::SoftwareAdvice => software_advice::profile(),
        }
    }
}
