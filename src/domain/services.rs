//! Domain services
//!
//! Seams between the aggregation logic and the per-site collectors.

pub mod review_services;

pub use review_services::ReviewAdapter;
