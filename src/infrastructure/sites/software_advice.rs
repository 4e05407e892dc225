//! Software Advice (www.softwareadvice.com)
//!
//! Shares most of its review markup with Capterra and adds a few older
//! layouts on top.

use super::SiteProfile;
use crate::domain::review::ReviewSource;
use crate::infrastructure::parsing::config::{
    CandidateShape, RatingStrategy, ReviewListSelectors, selector_list,
};

pub const BASE_URL: &str = "https://www.softwareadvice.com";
pub const SEARCH_URL_TEMPLATE: &str = "https://www.softwareadvice.com/search/?q={query}";

pub fn profile() -> SiteProfile {
    SiteProfile {
        source: ReviewSource::SoftwareAdvice,
        base_url: BASE_URL.to_string(),
        search_url_template: SEARCH_URL_TEMPLATE.to_string(),
        search_results: vec![
            CandidateShape::link("a.ProductCard__ProductName"),
            CandidateShape::card("div.ProductCard", "a.ProductCard__ProductName"),
        ],
        reviews: ReviewListSelectors {
            review_container: selector_list(&[
                "div.ReviewCard",
                "div.review-card",
                "article.review",
                "div.user-review",
            ]),
            next_page: selector_list(&[
                "a.pagination__next:not(.disabled)",
                "button.pagination-next:not([disabled])",
            ]),
            title: selector_list(&["h3.ReviewCard__Title", "h4.review-title", "div.review-title"]),
            description: selector_list(&[
                "div.ReviewCard__Description",
                "div.review-content",
                "p.review-text",
                "div.review-body",
            ]),
            timestamp: selector_list(&["time"]),
            timestamp_attribute: "datetime".to_string(),
            date_text: selector_list(&["span.ReviewCard__Date", "div.review-date", "span.review-date"]),
            reviewer_name: selector_list(&[
                "span.ReviewCard__ReviewerName",
                "div.reviewer-name",
                "span.reviewer-name",
                "div.user-name",
            ]),
            rating_container: selector_list(&[
                "div.ReviewCard__Rating",
                "div.rating",
                "div.star-rating",
            ]),
            rating_strategies: vec![
                RatingStrategy::FilledStars {
                    star: "svg.star-filled".to_string(),
                },
                RatingStrategy::Fraction,
                RatingStrategy::ClassSuffix {
                    prefix: "stars-".to_string(),
                },
            ],
            helpful_votes: selector_list(&[
                "span.ReviewCard__HelpfulCount",
                "span.helpful-count",
                "div.helpful-votes",
            ]),
        },
    }
}
