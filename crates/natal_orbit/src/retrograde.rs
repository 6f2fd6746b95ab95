//! Apparent retrograde motion detection.

use crate::body::Body;
use crate::error::OrbitError;
use crate::longitude::geocentric_longitude;

/// Whether a planet appears retrograde at a Julian Day.
///
/// Finite-difference test: geocentric longitude one day either side of
/// `jd`, shortest-path angular difference, retrograde iff negative. The
/// Sun and Moon are never retrograde by convention.
pub fn is_retrograde(body: Body, jd: f64) -> Result<bool, OrbitError> {
    if body.is_luminary() {
        return Ok(false);
    }

    let before = geocentric_longitude(body, jd - 1.0)?;
    let after = geocentric_longitude(body, jd + 1.0)?;

    // Fold the difference across the 0/360 wrap.
    let mut diff = after - before;
    if diff > 180.0 {
        diff -= 360.0;
    }
    if diff < -180.0 {
        diff += 360.0;
    }

    Ok(diff < 0.0)
}
