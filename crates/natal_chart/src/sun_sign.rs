//! Calendar-based sun sign lookup.
//!
//! Uses the traditional boundary dates rather than the computed solar
//! longitude, so it answers "what's my sign" without birth time or place.
//! The astronomical answer near a boundary may differ by a day; for that,
//! compute a full chart.

use crate::zodiac::Sign;

struct SunSignBoundary {
    sign: Sign,
    start_month: u32,
    start_day: u32,
}

/// Traditional sign boundaries; Capricorn spans the year end, so it
/// appears both first and last.
const SUN_SIGN_BOUNDARIES: [SunSignBoundary; 13] = [
    SunSignBoundary { sign: Sign::Capricorn, start_month: 1, start_day: 1 },
    SunSignBoundary { sign: Sign::Aquarius, start_month: 1, start_day: 20 },
    SunSignBoundary { sign: Sign::Pisces, start_month: 2, start_day: 19 },
    SunSignBoundary { sign: Sign::Aries, start_month: 3, start_day: 21 },
    SunSignBoundary { sign: Sign::Taurus, start_month: 4, start_day: 20 },
    SunSignBoundary { sign: Sign::Gemini, start_month: 5, start_day: 21 },
    SunSignBoundary { sign: Sign::Cancer, start_month: 6, start_day: 21 },
    SunSignBoundary { sign: Sign::Leo, start_month: 7, start_day: 23 },
    SunSignBoundary { sign: Sign::Virgo, start_month: 8, start_day: 23 },
    SunSignBoundary { sign: Sign::Libra, start_month: 9, start_day: 23 },
    SunSignBoundary { sign: Sign::Scorpio, start_month: 10, start_day: 23 },
    SunSignBoundary { sign: Sign::Sagittarius, start_month: 11, start_day: 22 },
    SunSignBoundary { sign: Sign::Capricorn, start_month: 12, start_day: 22 },
];

/// Sun sign for a calendar date, by traditional boundaries.
pub fn sun_sign_for_date(month: u32, day: u32) -> Sign {
    for boundary in SUN_SIGN_BOUNDARIES.iter().rev() {
        if month > boundary.start_month
            || (month == boundary.start_month && day >= boundary.start_day)
        {
            return boundary.sign;
        }
    }
    Sign::Capricorn
}
