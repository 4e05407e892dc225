//! Capterra (www.capterra.com)

use super::SiteProfile;
use crate::domain::review::ReviewSource;
use crate::infrastructure::parsing::config::{
    CandidateShape, RatingStrategy, ReviewListSelectors, selector_list,
};

pub const BASE_URL: &str = "https://www.capterra.com";
pub const SEARCH_URL_TEMPLATE: &str = "https://www.capterra.com/search/?search={query}";

pub fn profile() -> SiteProfile {
    SiteProfile {
        source: ReviewSource::Capterra,
        base_url: BASE_URL.to_string(),
        search_url_template: SEARCH_URL_TEMPLATE.to_string(),
        search_results: vec![
            CandidateShape::link("a.ProductTile__ProductName-sc-1dje9l3-6"),
            CandidateShape::card("div.ProductTile", "a.ProductTile__ProductName"),
        ],
        reviews: ReviewListSelectors {
            review_container: selector_list(&["div.ReviewCard", "div.review-card", "article.review"]),
            next_page: selector_list(&[
                "a.pagination__next:not(.disabled)",
                "button.pagination-next:not([disabled])",
            ]),
            title: selector_list(&["h3.ReviewCard__Title", "h4.review-title"]),
            description: selector_list(&[
                "div.ReviewCard__Description",
                "div.review-content",
                "p.review-text",
            ]),
            timestamp: selector_list(&["time"]),
            timestamp_attribute: "datetime".to_string(),
            date_text: selector_list(&["span.ReviewCard__Date", "div.review-date"]),
            reviewer_name: selector_list(&[
                "span.ReviewCard__ReviewerName",
                "div.reviewer-name",
                "span.reviewer__name",
            ]),
            rating_container: selector_list(&["div.ReviewCard__Rating", "div.rating"]),
            rating_strategies: vec![
                RatingStrategy::FilledStars {
                    star: "svg.star-filled".to_string(),
                },
                RatingStrategy::Fraction,
            ],
            helpful_votes: selector_list(&["span.ReviewCard__HelpfulCount", "span.helpful-count"]),
        },
    }
}
