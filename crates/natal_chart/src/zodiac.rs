//! Zodiac signs and positions within them.
//!
//! The ecliptic circle is divided into 12 equal signs of 30 degrees each,
//! starting from Aries at 0 degrees. Given an ecliptic longitude we
//! identify the sign and the position within it.

use serde::{Deserialize, Serialize};

use natal_time::normalize_360;

/// The 12 zodiac signs in ecliptic order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sign {
    Aries,
    Taurus,
    Gemini,
    Cancer,
    Leo,
    Virgo,
    Libra,
    Scorpio,
    Sagittarius,
    Capricorn,
    Aquarius,
    Pisces,
}

/// All 12 signs in order (Aries = 0 .. Pisces = 11).
pub const ALL_SIGNS: [Sign; 12] = [
    Sign::Aries,
    Sign::Taurus,
    Sign::Gemini,
    Sign::Cancer,
    Sign::Leo,
    Sign::Virgo,
    Sign::Libra,
    Sign::Scorpio,
    Sign::Sagittarius,
    Sign::Capricorn,
    Sign::Aquarius,
    Sign::Pisces,
];

impl Sign {
    /// Lowercase English name, matching the serialized form.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Aries => "aries",
            Self::Taurus => "taurus",
            Self::Gemini => "gemini",
            Self::Cancer => "cancer",
            Self::Leo => "leo",
            Self::Virgo => "virgo",
            Self::Libra => "libra",
            Self::Scorpio => "scorpio",
            Self::Sagittarius => "sagittarius",
            Self::Capricorn => "capricorn",
            Self::Aquarius => "aquarius",
            Self::Pisces => "pisces",
        }
    }

    /// 0-based index (Aries = 0 .. Pisces = 11).
    pub const fn index(self) -> u8 {
        match self {
            Self::Aries => 0,
            Self::Taurus => 1,
            Self::Gemini => 2,
            Self::Cancer => 3,
            Self::Leo => 4,
            Self::Virgo => 5,
            Self::Libra => 6,
            Self::Scorpio => 7,
            Self::Sagittarius => 8,
            Self::Capricorn => 9,
            Self::Aquarius => 10,
            Self::Pisces => 11,
        }
    }

    /// Sign containing an ecliptic longitude.
    pub fn from_longitude(longitude_deg: f64) -> Self {
        let lon = normalize_360(longitude_deg);
        // Clamp guards the floating point edge at exactly 360.0.
        let idx = ((lon / 30.0).floor() as usize).min(11);
        ALL_SIGNS[idx]
    }
}

impl std::fmt::Display for Sign {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// A position on the ecliptic expressed as sign + degrees within sign.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignPosition {
    /// The zodiac sign.
    pub sign: Sign,
    /// Degrees within the sign, [0, 30).
    pub degrees: f64,
    /// Full ecliptic longitude, [0, 360).
    pub total_degrees: f64,
}

/// Convert an ecliptic longitude to sign + degrees within sign.
pub fn sign_position_from_longitude(longitude_deg: f64) -> SignPosition {
    let total = normalize_360(longitude_deg);
    let idx = ((total / 30.0).floor() as usize).min(11);
    SignPosition {
        sign: ALL_SIGNS[idx],
        degrees: total - idx as f64 * 30.0,
        total_degrees: total,
    }
}
