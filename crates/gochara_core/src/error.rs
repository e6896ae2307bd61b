//! Error type for the ephemeris adapter layer.

use std::error::Error;
use std::fmt::{Display, Formatter};

use analytic_kernel::KernelError;

/// Errors surfaced by chart construction and position queries.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum EphemerisError {
    /// The oracle reported a fatal condition; carries its message.
    Oracle(String),
    /// A date or instant the adapter cannot represent.
    InvalidDate(&'static str),
    /// Invalid geographic parameter.
    InvalidLocation(&'static str),
    /// Invalid configuration (e.g. unreadable data path).
    Config(&'static str),
}

impl Display for EphemerisError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Oracle(msg) => write!(f, "ephemeris oracle error: {msg}"),
            Self::InvalidDate(msg) => write!(f, "invalid date: {msg}"),
            Self::InvalidLocation(msg) => write!(f, "invalid location: {msg}"),
            Self::Config(msg) => write!(f, "invalid configuration: {msg}"),
        }
    }
}

impl Error for EphemerisError {}

impl From<KernelError> for EphemerisError {
    fn from(e: KernelError) -> Self {
        Self::Oracle(e.to_string())
    }
}
