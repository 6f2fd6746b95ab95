//! Celestial bodies appearing in a natal chart.

use serde::{Deserialize, Serialize};

/// The bodies the engine knows about.
///
/// Earth appears only as the observer for geocentric conversion; the ten
/// charted bodies are listed in [`ALL_PLANETS`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Body {
    Sun,
    Moon,
    Mercury,
    Venus,
    Earth,
    Mars,
    Jupiter,
    Saturn,
    Uranus,
    Neptune,
    Pluto,
}

/// The 10 charted bodies in chart order (Earth excluded).
pub const ALL_PLANETS: [Body; 10] = [
    Body::Sun,
    Body::Moon,
    Body::Mercury,
    Body::Venus,
    Body::Mars,
    Body::Jupiter,
    Body::Saturn,
    Body::Uranus,
    Body::Neptune,
    Body::Pluto,
];

impl Body {
    /// Lowercase English name, matching the serialized form.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Sun => "sun",
            Self::Moon => "moon",
            Self::Mercury => "mercury",
            Self::Venus => "venus",
            Self::Earth => "earth",
            Self::Mars => "mars",
            Self::Jupiter => "jupiter",
            Self::Saturn => "saturn",
            Self::Uranus => "uranus",
            Self::Neptune => "neptune",
            Self::Pluto => "pluto",
        }
    }

    /// True for the two luminaries, which use closed-form longitude series
    /// and are never retrograde.
    pub const fn is_luminary(self) -> bool {
        matches!(self, Self::Sun | Self::Moon)
    }
}

impl std::fmt::Display for Body {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_planets_count() {
        assert_eq!(ALL_PLANETS.len(), 10);
    }

    #[test]
    fn earth_not_charted() {
        assert!(!ALL_PLANETS.contains(&Body::Earth));
    }

    #[test]
    fn luminaries() {
        assert!(Body::Sun.is_luminary());
        assert!(Body::Moon.is_luminary());
        assert!(!Body::Mercury.is_luminary());
    }

    #[test]
    fn names_lowercase() {
        for b in ALL_PLANETS {
            let n = b.name();
            assert!(!n.is_empty());
            assert_eq!(n, n.to_lowercase());
        }
    }

    #[test]
    fn display_matches_name() {
        assert_eq!(Body::Jupiter.to_string(), "jupiter");
    }

    #[test]
    fn serde_lowercase_wire_names() {
        assert_eq!(serde_json::to_string(&Body::Neptune).unwrap(), "\"neptune\"");
        let back: Body = serde_json::from_str("\"mercury\"").unwrap();
        assert_eq!(back, Body::Mercury);
    }
}
