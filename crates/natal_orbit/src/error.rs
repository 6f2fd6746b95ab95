//! Error types for orbital longitude computation.

use std::error::Error;
use std::fmt::{Display, Formatter};

use crate::body::Body;

/// Errors from heliocentric/geocentric longitude computation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum OrbitError {
    /// The body has no Keplerian orbital elements (Sun and Moon use
    /// closed-form series instead).
    NoElements(Body),
    /// Geocentric longitude was requested for Earth, the observer.
    EarthObserver,
}

impl Display for OrbitError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NoElements(body) => write!(f, "no orbital elements for: {body}"),
            Self::EarthObserver => {
                write!(f, "cannot compute geocentric longitude of earth")
            }
        }
    }
}

impl Error for OrbitError {}
