//! Application layer - validation, aggregation and the scrape use case
//!
//! Coordinates domain types and infrastructure adapters for a single run.

pub mod aggregator;
pub mod demo;
pub mod use_cases;
pub mod validation;

// Re-export commonly used items
pub use aggregator::ReviewAggregator;
pub use demo::generate_demo_reviews;
pub use use_cases::{ReviewScrapeUseCase, RunOptions, RunOutcome};
pub use validation::{ScrapeRequest, ValidationError, validate_request};
