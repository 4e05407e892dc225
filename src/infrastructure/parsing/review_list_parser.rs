//! Review list parser
//!
//! Turns one review list page into normalized records. Extraction is
//! per fragment and never fails: a field no selector can supply gets its
//! sentinel, and the date always resolves to a concrete day.

use chrono::NaiveDate;
use scraper::{ElementRef, Html};
use tracing::debug;

use super::config::{RatingStrategy, ReviewListSelectors};
use super::selector_chain::{SelectorChain, element_text};
use super::{ContextualParser, ParseContext, ParsingResult};
use crate::domain::review::{
    ANONYMOUS_REVIEWER, NO_DESCRIPTION, NO_HELPFUL_VOTES, NO_TITLE, NormalizedReview, Rating,
    ReviewSource,
};
use crate::utils::{resolve_date_text, truncate_timestamp};

/// Outcome of parsing one review list page
#[derive(Debug, Clone)]
pub struct ReviewPage {
    /// One record per review fragment, in page order
    pub reviews: Vec<NormalizedReview>,
    pub has_next_page: bool,
}

impl ReviewPage {
    pub fn is_empty(&self) -> bool {
        self.reviews.is_empty()
    }
}

enum CompiledRatingStrategy {
    FilledStars(SelectorChain),
    Fraction,
    ClassSuffix(String),
}

impl CompiledRatingStrategy {
    fn compile(strategy: &RatingStrategy) -> ParsingResult<Self> {
        Ok(match strategy {
            RatingStrategy::FilledStars { star } => {
                Self::FilledStars(SelectorChain::single("rating_star", star)?)
            }
            RatingStrategy::Fraction => Self::Fraction,
            RatingStrategy::ClassSuffix { prefix } => Self::ClassSuffix(prefix.clone()),
        })
    }

    /// `None` hands over to the next strategy
    fn apply(&self, rating_element: ElementRef<'_>) -> Option<f64> {
        match self {
            Self::FilledStars(star) => {
                let filled = star.count_in(rating_element);
                (filled > 0).then_some(filled as f64)
            }
            Self::Fraction => {
                let text = element_text(rating_element);
                let (numerator, _) = text.split_once('/')?;
                Some(numerator.trim().parse::<f64>().unwrap_or(0.0))
            }
            Self::ClassSuffix(prefix) => rating_element.value().classes().find_map(|class| {
                let start = class.find(prefix.as_str())? + prefix.len();
                class[start..].parse::<u32>().ok().map(f64::from)
            }),
        }
    }
}

pub struct ReviewListParser {
    source: ReviewSource,
    containers: SelectorChain,
    next_page: SelectorChain,
    title: SelectorChain,
    description: SelectorChain,
    timestamp: SelectorChain,
    timestamp_attribute: String,
    date_text: SelectorChain,
    reviewer_name: SelectorChain,
    rating_container: SelectorChain,
    rating_strategies: Vec<CompiledRatingStrategy>,
    helpful_votes: SelectorChain,
}

impl ReviewListParser {
    pub fn new(source: ReviewSource, selectors: &ReviewListSelectors) -> ParsingResult<Self> {
        Ok(Self {
            source,
            containers: SelectorChain::compile("review_container", &selectors.review_container)?,
            next_page: SelectorChain::compile("next_page", &selectors.next_page)?,
            title: SelectorChain::compile("title", &selectors.title)?,
            description: SelectorChain::compile("description", &selectors.description)?,
            timestamp: SelectorChain::compile("timestamp", &selectors.timestamp)?,
            timestamp_attribute: selectors.timestamp_attribute.clone(),
            date_text: SelectorChain::compile("date_text", &selectors.date_text)?,
            reviewer_name: SelectorChain::compile("reviewer_name", &selectors.reviewer_name)?,
            rating_container: SelectorChain::compile("rating", &selectors.rating_container)?,
            rating_strategies: selectors
                .rating_strategies
                .iter()
                .map(CompiledRatingStrategy::compile)
                .collect::<ParsingResult<Vec<_>>>()?,
            helpful_votes: SelectorChain::compile("helpful_votes", &selectors.helpful_votes)?,
        })
    }

    /// Extract a single review fragment
    pub fn extract_review(
        &self,
        fragment: ElementRef<'_>,
        today: NaiveDate,
    ) -> NormalizedReview {
        NormalizedReview {
            title: self
                .title
                .first_text(fragment)
                .unwrap_or_else(|| NO_TITLE.to_string()),
            description: self
                .description
                .first_text(fragment)
                .unwrap_or_else(|| NO_DESCRIPTION.to_string()),
            date: self.extract_date(fragment, today),
            reviewer_name: self
                .reviewer_name
                .first_text(fragment)
                .unwrap_or_else(|| ANONYMOUS_REVIEWER.to_string()),
            rating: self.extract_rating(fragment),
            helpful_votes: self
                .helpful_votes
                .first_text(fragment)
                .unwrap_or_else(|| NO_HELPFUL_VOTES.to_string()),
            source: self.source,
        }
    }

    /// Timestamp attribute first, then the visible date text, then `today`.
    /// An attribute that does not parse counts as absent.
    fn extract_date(&self, fragment: ElementRef<'_>, today: NaiveDate) -> NaiveDate {
        let attribute = self
            .timestamp
            .first_match(fragment)
            .and_then(|element| element.value().attr(&self.timestamp_attribute))
            .map(str::trim)
            .filter(|value| !value.is_empty());

        if let Some(raw) = attribute {
            match truncate_timestamp(raw) {
                Some(date) => return date,
                None => debug!("Ignoring unparseable {} timestamp '{}'", self.source, raw),
            }
        }

        self.date_text
            .first_text(fragment)
            .map_or(today, |text| resolve_date_text(&text, today))
    }

    fn extract_rating(&self, fragment: ElementRef<'_>) -> Rating {
        let Some(rating_element) = self.rating_container.first_match(fragment) else {
            return Rating::NONE;
        };

        self.rating_strategies
            .iter()
            .find_map(|strategy| strategy.apply(rating_element))
            .map_or(Rating::NONE, Rating::new)
    }
}

impl ContextualParser for ReviewListParser {
    type Output = ReviewPage;
    type Context = ParseContext;

    fn parse_with_context(&self, html: &Html, context: &Self::Context) -> ParsingResult<Self::Output> {
        let root = html.root_element();
        let fragments = self.containers.all_from_first_matching(root);

        debug!(
            "Found {} {} review fragments on page {}",
            fragments.len(),
            self.source,
            context.page
        );

        let reviews = fragments
            .into_iter()
            .map(|fragment| self.extract_review(fragment, context.today))
            .collect();

        Ok(ReviewPage {
            reviews,
            has_next_page: self.next_page.matches_any(root),
        })
    }
}
