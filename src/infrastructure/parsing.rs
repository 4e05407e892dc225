//! HTML parsing for review sites
//!
//! Every field is described by an ordered list of CSS selectors (a
//! [`SelectorChain`]); the first one that yields a usable value wins.

pub mod config;
pub mod context;
pub mod error;
pub mod review_list_parser;
pub mod search_result_parser;
pub mod selector_chain;

// Re-export public types
pub use self::config::{CandidateShape, RatingStrategy, ReviewListSelectors};
pub use context::ParseContext;
pub use error::{ParsingError, ParsingResult};
pub use review_list_parser::{ReviewListParser, ReviewPage};
pub use search_result_parser::SearchResultParser;
pub use selector_chain::SelectorChain;

use scraper::Html;

/// Parser that needs per-page information besides the document itself
pub trait ContextualParser {
    type Output;
    type Context;

    fn parse_with_context(&self, html: &Html, context: &Self::Context) -> ParsingResult<Self::Output>;
}
