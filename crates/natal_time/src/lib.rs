//! Time and angle foundations for natal chart computation.
//!
//! Provides Julian Day conversion, Julian centuries since J2000.0,
//! degree normalization, and Greenwich/local sidereal time. Everything
//! here works in UT and degrees; callers apply timezone offsets before
//! converting to Julian Day.

pub mod angle;
pub mod julian;
pub mod sidereal;

pub use angle::normalize_360;
pub use julian::{J2000_JD, julian_centuries, to_julian_day};
pub use sidereal::{gmst_deg, local_sidereal_time_deg};
