//! Infrastructure layer: HTTP, HTML parsing, site profiles, persistence,
//! configuration and logging.

pub mod config; // Configuration layering and defaults
pub mod http_client;
pub mod logging;
pub mod parsing;
pub mod parsing_error;
pub mod review_crawler;
pub mod review_repository;
pub mod sites;

// Re-export commonly used items
pub use self::config::{AppConfig, ConfigManager};
pub use http_client::{FetchError, HttpClient, PageFetcher, RetryPolicy, fetch_with_retry};
pub use logging::{get_log_directory, init_logging_with_config, log_system_info};
pub use parsing::{ParsingError, ParsingResult, ReviewListParser, SearchResultParser};
pub use review_crawler::{CrawlSettings, ReviewCrawler};
pub use review_repository::JsonReviewStore;
pub use sites::SiteProfile;
