//! Birth data and full natal chart assembly.

use serde::{Deserialize, Serialize};
use tracing::debug;

use natal_orbit::{Body, geocentric_longitude, is_retrograde, moon_longitude, sun_longitude};
use natal_time::{gmst_deg, local_sidereal_time_deg, to_julian_day};

use crate::angles::{ascendant_deg, mean_obliquity_deg, midheaven_deg};
use crate::aspect::{AspectTable, ChartAspect, compute_aspects};
use crate::error::ChartError;
use crate::houses::{equal_house_cusps, house_for_longitude};
use crate::util::round2;
use crate::zodiac::{Sign, SignPosition, sign_position_from_longitude};

/// Birth input. Fields beyond year/month are optional; the defaults
/// applied at chart time (day 1, 12:00, latitude/longitude 0, timezone 0)
/// are part of the contract.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BirthData {
    /// Calendar year; negative = BCE (astronomical convention).
    pub year: i32,
    /// Calendar month, 1-12.
    pub month: u32,
    #[serde(default)]
    pub day: Option<u32>,
    #[serde(default)]
    pub hour: Option<u32>,
    #[serde(default)]
    pub minute: Option<u32>,
    /// Geographic latitude in degrees, north positive.
    #[serde(default)]
    pub latitude: Option<f64>,
    /// Geographic longitude in degrees, east positive.
    #[serde(default)]
    pub longitude: Option<f64>,
    /// Offset from UT in hours (e.g. -5 for EST).
    #[serde(default)]
    pub timezone: Option<f64>,
}

impl BirthData {
    /// Year and month only; everything else defaults at chart time.
    pub fn new(year: i32, month: u32) -> Self {
        Self {
            year,
            month,
            day: None,
            hour: None,
            minute: None,
            latitude: None,
            longitude: None,
            timezone: None,
        }
    }
}

/// One charted body's position.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanetPosition {
    pub planet: Body,
    pub sign: Sign,
    /// Degrees within the sign, rounded to 2 decimals.
    pub degrees: f64,
    /// Ecliptic longitude, rounded to 2 decimals.
    pub total_degrees: f64,
    /// House number, 1-12.
    pub house: u8,
    pub retrograde: bool,
}

/// A complete natal chart. Immutable once computed; identical birth data
/// produces a bit-for-bit identical chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NatalChart {
    pub sun: PlanetPosition,
    pub moon: PlanetPosition,
    pub mercury: PlanetPosition,
    pub venus: PlanetPosition,
    pub mars: PlanetPosition,
    pub jupiter: PlanetPosition,
    pub saturn: PlanetPosition,
    pub uranus: PlanetPosition,
    pub neptune: PlanetPosition,
    pub pluto: PlanetPosition,
    pub ascendant: SignPosition,
    pub midheaven: SignPosition,
    /// All matched aspects, tightest orb first.
    pub aspects: Vec<ChartAspect>,
    /// Equal house cusp longitudes, cusp 1 = ascendant.
    pub house_cusps: [f64; 12],
}

impl NatalChart {
    /// Position of a charted body.
    pub fn position(&self, body: Body) -> Option<&PlanetPosition> {
        match body {
            Body::Sun => Some(&self.sun),
            Body::Moon => Some(&self.moon),
            Body::Mercury => Some(&self.mercury),
            Body::Venus => Some(&self.venus),
            Body::Mars => Some(&self.mars),
            Body::Jupiter => Some(&self.jupiter),
            Body::Saturn => Some(&self.saturn),
            Body::Uranus => Some(&self.uranus),
            Body::Neptune => Some(&self.neptune),
            Body::Pluto => Some(&self.pluto),
            Body::Earth => None,
        }
    }

    /// The ten charted positions in chart order.
    pub fn planets(&self) -> [&PlanetPosition; 10] {
        [
            &self.sun,
            &self.moon,
            &self.mercury,
            &self.venus,
            &self.mars,
            &self.jupiter,
            &self.saturn,
            &self.uranus,
            &self.neptune,
            &self.pluto,
        ]
    }
}

/// Build a display position: sign split, rounding, house placement.
///
/// House placement uses the unrounded longitude.
fn build_position(body: Body, longitude: f64, cusps: &[f64; 12], retrograde: bool) -> PlanetPosition {
    let sp = sign_position_from_longitude(longitude);
    PlanetPosition {
        planet: body,
        sign: sp.sign,
        degrees: round2(sp.degrees),
        total_degrees: round2(sp.total_degrees),
        house: house_for_longitude(longitude, cusps),
        retrograde,
    }
}

/// Sign position with display rounding, for the ascendant and midheaven.
fn build_sign_position(longitude: f64) -> SignPosition {
    let sp = sign_position_from_longitude(longitude);
    SignPosition {
        sign: sp.sign,
        degrees: round2(sp.degrees),
        total_degrees: round2(sp.total_degrees),
    }
}

/// Position of one Keplerian planet: geocentric longitude + retrograde.
fn planet_position(body: Body, jd: f64, cusps: &[f64; 12]) -> Result<PlanetPosition, ChartError> {
    let longitude = geocentric_longitude(body, jd)?;
    let retrograde = is_retrograde(body, jd)?;
    Ok(build_position(body, longitude, cusps, retrograde))
}

/// Compute a complete natal chart from birth data.
///
/// Pure: no I/O, no global state. The aspect table is the caller's
/// immutable configuration.
pub fn compute_natal_chart(
    birth: &BirthData,
    aspect_table: &AspectTable,
) -> Result<NatalChart, ChartError> {
    // Contractual defaults for omitted fields.
    let day = birth.day.unwrap_or(1);
    let hour = birth.hour.unwrap_or(12);
    let minute = birth.minute.unwrap_or(0);
    let latitude = birth.latitude.unwrap_or(0.0);
    let longitude = birth.longitude.unwrap_or(0.0);
    let timezone = birth.timezone.unwrap_or(0.0);

    // Local time to UT; the hour may go negative or past 24, which the
    // Julian Day conversion absorbs as a day fraction.
    let ut_hour = hour as f64 - timezone;
    let jd = to_julian_day(birth.year, birth.month, day, ut_hour, minute as f64);

    let obliquity = mean_obliquity_deg(jd);
    let lst = local_sidereal_time_deg(gmst_deg(jd), longitude);
    let asc = ascendant_deg(lst, latitude, obliquity);
    let mc = midheaven_deg(lst, obliquity);
    let cusps = equal_house_cusps(asc);

    debug!(jd, lst, asc, mc, "chart frame ready");

    // Luminaries from their closed-form series, never retrograde.
    let sun = build_position(Body::Sun, sun_longitude(jd), &cusps, false);
    let moon = build_position(Body::Moon, moon_longitude(jd), &cusps, false);

    let mercury = planet_position(Body::Mercury, jd, &cusps)?;
    let venus = planet_position(Body::Venus, jd, &cusps)?;
    let mars = planet_position(Body::Mars, jd, &cusps)?;
    let jupiter = planet_position(Body::Jupiter, jd, &cusps)?;
    let saturn = planet_position(Body::Saturn, jd, &cusps)?;
    let uranus = planet_position(Body::Uranus, jd, &cusps)?;
    let neptune = planet_position(Body::Neptune, jd, &cusps)?;
    let pluto = planet_position(Body::Pluto, jd, &cusps)?;

    let positions = [
        sun, moon, mercury, venus, mars, jupiter, saturn, uranus, neptune, pluto,
    ];
    let aspects = compute_aspects(&positions, aspect_table);
    debug!(aspect_count = aspects.len(), "aspects computed");

    Ok(NatalChart {
        sun,
        moon,
        mercury,
        venus,
        mars,
        jupiter,
        saturn,
        uranus,
        neptune,
        pluto,
        ascendant: build_sign_position(asc),
        midheaven: build_sign_position(mc),
        aspects,
        house_cusps: cusps,
    })
}
