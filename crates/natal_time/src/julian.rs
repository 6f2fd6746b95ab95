//! Julian Day conversion and Julian centuries since J2000.0.
//!
//! The calendar algorithm follows the standard form (Meeus, "Astronomical
//! Algorithms", Chapter 7): months January and February count as months 13
//! and 14 of the previous year, and the century terms use floor division so
//! negative (BCE, astronomical convention) years are handled.

/// Julian Day of the J2000.0 epoch (2000-Jan-01 12:00).
pub const J2000_JD: f64 = 2_451_545.0;

/// Days per Julian century.
const DAYS_PER_CENTURY: f64 = 36_525.0;

/// Convert a calendar date and UT time of day to a Julian Day Number.
///
/// `hour` and `minute` are floating point so fractional offsets (e.g. a
/// timezone already subtracted from the hour) carry through; the day
/// fraction is `(hour + minute/60) / 24`.
///
/// Negative years follow the astronomical convention (year 0 = 1 BCE).
pub fn to_julian_day(year: i32, month: u32, day: u32, hour: f64, minute: f64) -> f64 {
    let (y, m) = if month <= 2 {
        (year - 1, month + 12)
    } else {
        (year, month)
    };

    let a = y.div_euclid(100);
    let b = 2 - a + a.div_euclid(4);

    let day_fraction = (hour + minute / 60.0) / 24.0;

    (365.25 * (y as f64 + 4716.0)).trunc()
        + (30.6001 * (m as f64 + 1.0)).trunc()
        + day as f64
        + day_fraction
        + b as f64
        - 1524.5
}

/// Julian centuries elapsed since J2000.0.
pub fn julian_centuries(jd: f64) -> f64 {
    (jd - J2000_JD) / DAYS_PER_CENTURY
}
