//! Error re-export for parser modules

pub use crate::infrastructure::parsing_error::{ParsingError, ParsingResult};
