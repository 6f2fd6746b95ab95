//! Equal house cusps and house placement.
//!
//! The equal house system puts cusp 1 at the ascendant and each further
//! cusp 30 degrees along the ecliptic. House placement walks consecutive
//! cusp pairs, handling the pair that wraps past 360.

use natal_time::normalize_360;

/// The 12 equal house cusps: `ascendant + 30*i`, each normalized.
pub fn equal_house_cusps(ascendant_deg: f64) -> [f64; 12] {
    let mut cusps = [0.0; 12];
    for (i, cusp) in cusps.iter_mut().enumerate() {
        *cusp = normalize_360(ascendant_deg + i as f64 * 30.0);
    }
    cusps
}

/// House number (1-12) containing an ecliptic longitude.
///
/// A longitude belongs to house `i+1` when it falls in
/// `[cusp_i, cusp_{i+1})`, with the wrap-around pair tested as
/// `lon >= cusp_i || lon < cusp_{i+1}`. Exactly one house matches for a
/// well-formed 12-cusp ring.
pub fn house_for_longitude(longitude_deg: f64, cusps: &[f64; 12]) -> u8 {
    let lon = normalize_360(longitude_deg);
    for i in 0..12 {
        let cusp = cusps[i];
        let next = cusps[(i + 1) % 12];

        let inside = if next > cusp {
            lon >= cusp && lon < next
        } else {
            // This pair wraps past 360.
            lon >= cusp || lon < next
        };
        if inside {
            return (i + 1) as u8;
        }
    }
    1 // unreachable for a full 30-degree ring
}
