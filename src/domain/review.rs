//! Review entity and source identifiers
//!
//! Every adapter emits [`NormalizedReview`] records; the JSON shape of this
//! struct is the output contract of the whole tool.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

pub const NO_TITLE: &str = "No Title";
pub const NO_DESCRIPTION: &str = "";
pub const ANONYMOUS_REVIEWER: &str = "Anonymous";
pub const NO_HELPFUL_VOTES: &str = "0";

/// Review site a record was collected from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ReviewSource {
    #[serde(rename = "G2")]
    G2,
    #[serde(rename = "Capterra")]
    Capterra,
    #[serde(rename = "Software Advice")]
    SoftwareAdvice,
}

impl ReviewSource {
    /// Fixed processing order used when every source is selected
    pub const ALL: [ReviewSource; 3] = [Self::G2, Self::Capterra, Self::SoftwareAdvice];

    /// Human-readable label, identical to the serialized form
    pub fn display_name(self) -> &'static str {
        match self {
            Self::G2 => "G2",
            Self::Capterra => "Capterra",
            Self::SoftwareAdvice => "Software Advice",
        }
    }

    /// Command-line / file-name identifier
    pub fn slug(self) -> &'static str {
        match self {
            Self::G2 => "g2",
            Self::Capterra => "capterra",
            Self::SoftwareAdvice => "software-advice",
        }
    }
}

impl fmt::Display for ReviewSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Source must be one of: g2, capterra, software-advice, all (got '{0}')")]
pub struct UnknownSourceError(pub String);

/// Which sources a run should scrape
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceSelector {
    Single(ReviewSource),
    All,
}

impl SourceSelector {
    pub fn sources(self) -> Vec<ReviewSource> {
        match self {
            Self::Single(source) => vec![source],
            Self::All => ReviewSource::ALL.to_vec(),
        }
    }

    pub fn includes(self, source: ReviewSource) -> bool {
        match self {
            Self::Single(selected) => selected == source,
            Self::All => true,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Single(source) => source.slug(),
            Self::All => "all",
        }
    }
}

impl FromStr for SourceSelector {
    type Err = UnknownSourceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "g2" => Ok(Self::Single(ReviewSource::G2)),
            "capterra" => Ok(Self::Single(ReviewSource::Capterra)),
            "software-advice" => Ok(Self::Single(ReviewSource::SoftwareAdvice)),
            "all" => Ok(Self::All),
            _ => Err(UnknownSourceError(s.to_string())),
        }
    }
}

impl fmt::Display for SourceSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Star rating on the site's own scale; `0` means "not found".
///
/// Whole values serialize as JSON integers (`5`), fractional ones as
/// floats (`4.5`).
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Deserialize)]
#[serde(transparent)]
pub struct Rating(f64);

impl Rating {
    pub const NONE: Rating = Rating(0.0);

    /// Non-finite values collapse to [`Rating::NONE`]
    pub fn new(value: f64) -> Self {
        if value.is_finite() { Self(value) } else { Self::NONE }
    }

    pub fn value(self) -> f64 {
        self.0
    }
}

impl Serialize for Rating {
    #[allow(clippy::cast_possible_truncation, clippy::float_cmp)]
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let value = self.0;
        if value.fract() == 0.0 && value.abs() < 1e15 {
            serializer.serialize_i64(value as i64)
        } else {
            serializer.serialize_f64(value)
        }
    }
}

/// One review in the common cross-site shape.
///
/// Field order here is the key order of the output JSON.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NormalizedReview {
    pub title: String,
    pub description: String,
    pub date: NaiveDate,
    pub reviewer_name: String,
    pub rating: Rating,
    pub helpful_votes: String,
    pub source: ReviewSource,
}

impl NormalizedReview {
    /// A record carrying only sentinel values, used when a fragment has no
    /// recognizable fields at all.
    pub fn with_sentinels(source: ReviewSource, date: NaiveDate) -> Self {
        Self {
            title: NO_TITLE.to_string(),
            description: NO_DESCRIPTION.to_string(),
            date,
            reviewer_name: ANONYMOUS_REVIEWER.to_string(),
            rating: Rating::NONE,
            helpful_votes: NO_HELPFUL_VOTES.to_string(),
            source,
        }
    }
}
