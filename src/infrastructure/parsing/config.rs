//! Selector configuration for review sites
//!
//! Plain data, serializable so the whole set can be overridden from the
//! config file. Compilation into `scraper` selectors happens in the parsers.

use serde::{Deserialize, Serialize};

/// Build an owned selector list from literals
pub fn selector_list(selectors: &[&str]) -> Vec<String> {
    selectors.iter().map(|s| (*s).to_string()).collect()
}

/// One way a product link can appear on a search results page.
///
/// Without a `container` every element matching `link` is a candidate.
/// With one, each container contributes the first `link` found inside it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CandidateShape {
    #[serde(default)]
    pub container: Option<String>,
    pub link: String,
}

impl CandidateShape {
    pub fn link(link: &str) -> Self {
        Self {
            container: None,
            link: link.to_string(),
        }
    }

    pub fn card(container: &str, link: &str) -> Self {
        Self {
            container: Some(container.to_string()),
            link: link.to_string(),
        }
    }
}

/// How a star rating is read from the rating element, tried in order
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum RatingStrategy {
    /// Count descendants matching `star`; zero means "not applicable"
    FilledStars { star: String },
    /// Text such as `4.5/5`; the numerator is the rating, unparseable gives 0
    Fraction,
    /// A class like `stars-4` on the rating element itself
    ClassSuffix { prefix: String },
}

/// Selectors for one site's review list pages
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReviewListSelectors {
    /// Review fragments; the first selector with any match is used
    pub review_container: Vec<String>,

    /// Enabled "next page" controls
    pub next_page: Vec<String>,

    pub title: Vec<String>,
    pub description: Vec<String>,

    /// Elements carrying a machine-readable date in `timestamp_attribute`
    pub timestamp: Vec<String>,
    pub timestamp_attribute: String,

    /// Free date text, consulted when no timestamp attribute is present
    pub date_text: Vec<String>,

    pub reviewer_name: Vec<String>,

    pub rating_container: Vec<String>,
    pub rating_strategies: Vec<RatingStrategy>,

    pub helpful_votes: Vec<String>,
}
