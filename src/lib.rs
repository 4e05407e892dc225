//! Review Scraper - collects product reviews from G2, Capterra and Software Advice
//!
//! A company name and an inclusive date window go in; a JSON array of
//! normalized reviews comes out. Each site is described by a declarative
//! [`infrastructure::sites::SiteProfile`] driving one shared crawler.

// Module declarations
pub mod application;
pub mod domain;
pub mod infrastructure;
pub mod utils;

// Re-export the types most callers need
pub use application::{ReviewAggregator, ReviewScrapeUseCase, RunOptions, validate_request};
pub use domain::{DateWindow, NormalizedReview, Rating, ReviewSource, SourceSelector};
