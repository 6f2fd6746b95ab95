//! Error types for chart computation.

use std::error::Error;
use std::fmt::{Display, Formatter};

use natal_orbit::OrbitError;

/// Errors from natal chart computation or aspect-table configuration.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum ChartError {
    /// Error from the orbital longitude pipeline.
    Orbit(OrbitError),
    /// Aspect definition table failed to parse.
    AspectConfig(String),
}

impl Display for ChartError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Orbit(e) => write!(f, "orbit error: {e}"),
            Self::AspectConfig(msg) => write!(f, "aspect config error: {msg}"),
        }
    }
}

impl Error for ChartError {}

impl From<OrbitError> for ChartError {
    fn from(e: OrbitError) -> Self {
        Self::Orbit(e)
    }
}

impl From<serde_json::Error> for ChartError {
    fn from(e: serde_json::Error) -> Self {
        Self::AspectConfig(e.to_string())
    }
}
