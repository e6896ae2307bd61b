//! Error type for the search engines.

use std::error::Error;
use std::fmt::{Display, Formatter};

use gochara_core::EphemerisError;

/// Errors from transit, retrograde, and daśā queries.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum SearchError {
    /// Error from the ephemeris adapter.
    Ephemeris(EphemerisError),
    /// Invalid transit limit (e.g. a count of zero).
    InvalidLimit(&'static str),
    /// Invalid search range.
    InvalidRange(&'static str),
    /// A sharded worker failed outside the mapped computation.
    Worker(&'static str),
}

impl Display for SearchError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Ephemeris(e) => write!(f, "ephemeris error: {e}"),
            Self::InvalidLimit(msg) => write!(f, "invalid limit: {msg}"),
            Self::InvalidRange(msg) => write!(f, "invalid range: {msg}"),
            Self::Worker(msg) => write!(f, "worker error: {msg}"),
        }
    }
}

impl Error for SearchError {}

impl From<EphemerisError> for SearchError {
    fn from(e: EphemerisError) -> Self {
        Self::Ephemeris(e)
    }
}
