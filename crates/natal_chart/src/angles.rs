//! Obliquity of the ecliptic, ascendant, and midheaven.
//!
//! Standard spherical astronomy formulas for the ecliptic longitude of the
//! eastern horizon point (ascendant) and the culminating point (midheaven),
//! given Local Sidereal Time, geographic latitude, and the mean obliquity.
//!
//! Sources: Meeus, "Astronomical Algorithms" (2nd ed), Chapters 13 and 22.

use natal_time::{julian_centuries, normalize_360};

/// Mean obliquity of the ecliptic in degrees (Laskar short form).
///
/// `eps = 23.4392911 - 0.0130042*T - 1.64e-7*T^2 + 5.036e-7*T^3`
pub fn mean_obliquity_deg(jd: f64) -> f64 {
    let t = julian_centuries(jd);
    23.4392911 - 0.0130042 * t - 1.64e-7 * t * t + 5.036e-7 * t * t * t
}

/// Ecliptic longitude of the ascendant in degrees [0, 360).
///
/// `Asc = atan2(-cos(LST), sin(eps)*tan(lat) + cos(eps)*sin(LST))`
pub fn ascendant_deg(lst_deg: f64, latitude_deg: f64, obliquity_deg: f64) -> f64 {
    let lst = lst_deg.to_radians();
    let lat = latitude_deg.to_radians();
    let eps = obliquity_deg.to_radians();

    let asc = f64::atan2(-lst.cos(), eps.sin() * lat.tan() + eps.cos() * lst.sin());
    normalize_360(asc.to_degrees())
}

/// Ecliptic longitude of the midheaven (Medium Coeli) in degrees [0, 360).
///
/// `MC = atan2(sin(LST), cos(LST)*cos(eps))`
pub fn midheaven_deg(lst_deg: f64, obliquity_deg: f64) -> f64 {
    let lst = lst_deg.to_radians();
    let eps = obliquity_deg.to_radians();

    let mc = f64::atan2(lst.sin(), lst.cos() * eps.cos());
    normalize_360(mc.to_degrees())
}

#[cfg(test)]
mod tests {
    use super::*;
    use natal_time::J2000_JD;

    #[test]
    fn obliquity_at_j2000() {
        // T = 0: the polynomial collapses to its constant term.
        let eps = mean_obliquity_deg(J2000_JD);
        assert!((eps - 23.4392911).abs() < 1e-12, "eps = {eps}");
    }

    #[test]
    fn obliquity_decreases_slowly() {
        let now = mean_obliquity_deg(J2000_JD);
        let later = mean_obliquity_deg(J2000_JD + 36_525.0);
        assert!(later < now);
        assert!((now - later) < 0.02, "century drift = {}", now - later);
    }

    /// At the equator with LST = 0 the vernal equinox culminates, so the
    /// eastern horizon sits at ecliptic longitude 270 deg (0 Capricorn):
    /// atan2(-1, 0) = -90 deg -> 270 deg.
    #[test]
    fn ascendant_equator_lst_zero() {
        let asc = ascendant_deg(0.0, 0.0, 23.4392911);
        assert!((asc - 270.0).abs() < 1e-9, "asc = {asc}");
    }

    #[test]
    fn midheaven_lst_zero() {
        // atan2(sin(0), cos(0)*cos(eps)) = 0.
        let mc = midheaven_deg(0.0, 23.4392911);
        assert!(mc.abs() < 1e-9, "mc = {mc}");
    }

    #[test]
    fn ascendant_sweeps_full_circle() {
        // As LST sweeps 0..360 the ascendant covers the whole zodiac.
        let eps = 23.4392911;
        let lat = 40.7128;
        let mut min_asc = f64::MAX;
        let mut max_asc = f64::MIN;
        for i in 0..360 {
            let asc = ascendant_deg(i as f64, lat, eps);
            min_asc = min_asc.min(asc);
            max_asc = max_asc.max(asc);
        }
        assert!(min_asc < 5.0, "min = {min_asc}");
        assert!(max_asc > 355.0, "max = {max_asc}");
    }

    #[test]
    fn ascendant_and_midheaven_differ_by_about_90_at_low_latitude() {
        let eps = 23.4392911;
        for lst in [30.0, 100.0, 200.0, 300.0] {
            let asc = ascendant_deg(lst, 10.0, eps);
            let mc = midheaven_deg(lst, eps);
            let mut diff = (asc - mc).abs();
            if diff > 180.0 {
                diff = 360.0 - diff;
            }
            assert!(
                (55.0..125.0).contains(&diff),
                "LST {lst}: |Asc-MC| = {diff}"
            );
        }
    }

    #[test]
    fn outputs_in_range() {
        for lst in [0.0, 45.0, 123.4, 359.9] {
            for lat in [-60.0, 0.0, 51.5] {
                let asc = ascendant_deg(lst, lat, 23.44);
                let mc = midheaven_deg(lst, 23.44);
                assert!((0.0..360.0).contains(&asc));
                assert!((0.0..360.0).contains(&mc));
            }
        }
    }
}
