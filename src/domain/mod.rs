//! Domain module - review entities, date windows and service seams
//!
//! Nothing in here performs I/O; fetching and parsing live in
//! `infrastructure`, orchestration in `application`.

pub mod date_window;
pub mod review;
pub mod services;

// Re-export commonly used items
pub use date_window::{DateWindow, WindowPosition};
pub use review::{NormalizedReview, Rating, ReviewSource, SourceSelector, UnknownSourceError};
