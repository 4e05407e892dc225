//! G2 (www.g2.com)

use super::SiteProfile;
use crate::domain::review::ReviewSource;
use crate::infrastructure::parsing::config::{
    CandidateShape, RatingStrategy, ReviewListSelectors, selector_list,
};

pub const BASE_URL: &str = "https://www.g2.com";
pub const SEARCH_URL_TEMPLATE: &str = "https://www.g2.com/search?query={query}";

pub fn profile() -> SiteProfile {
    SiteProfile {
        source: ReviewSource::G2,
        base_url: BASE_URL.to_string(),
        search_url_template: SEARCH_URL_TEMPLATE.to_string(),
        search_results: vec![
            CandidateShape::link("a.link--header-color"),
            CandidateShape::card("div.product-card", "a.product-card__name"),
        ],
        reviews: ReviewListSelectors {
            review_container: selector_list(&["div.review"]),
            next_page: selector_list(&["a.pagination__next:not(.disabled)"]),
            title: selector_list(&["h3.review__title"]),
            description: selector_list(&["div.review__content"]),
            timestamp: selector_list(&["time"]),
            timestamp_attribute: "datetime".to_string(),
            date_text: selector_list(&["div.review__date"]),
            reviewer_name: selector_list(&["div.reviewer__name"]),
            rating_container: selector_list(&["div.review__rating"]),
            rating_strategies: vec![RatingStrategy::FilledStars {
                star: "svg.star.filled".to_string(),
            }],
            helpful_votes: selector_list(&["span.review__helpful-count"]),
        },
    }
}
