//! Convenience wrapper for the natal chart engine.
//!
//! Re-exports the full public surface and provides shortcut functions
//! that use the built-in aspect table, removing the need to thread an
//! [`AspectTable`] through callers that don't customize it.
//!
//! # Quick start
//!
//! ```rust
//! use natal::*;
//!
//! let mut birth = BirthData::new(1990, 3);
//! birth.day = Some(25);
//! birth.latitude = Some(40.7128);
//! birth.longitude = Some(-74.0060);
//! birth.timezone = Some(-5.0);
//!
//! let chart = chart_for(&birth).expect("chart");
//! println!("Sun in {} (house {})", chart.sun.sign, chart.sun.house);
//!
//! let mut state = reading_for(&birth).expect("reading");
//! while let Some(reveal) = state.next_reveal() {
//!     let feedback = FeedbackEntry {
//!         element: reveal.point.name().to_string(),
//!         user_text: "ok".to_string(),
//!         timestamp: 0.0,
//!     };
//!     state = state.record_feedback(reveal.point, feedback).expect("feedback");
//! }
//! assert!(state.is_complete());
//! ```

pub mod convenience;

pub use convenience::{chart_for, reading_for, sun_sign};

// Re-export time and angle foundations.
pub use natal_time::{
    J2000_JD, gmst_deg, julian_centuries, local_sidereal_time_deg, normalize_360, to_julian_day,
};

// Re-export the orbital pipeline.
pub use natal_orbit::{
    ALL_PLANETS, Body, OrbitError, OrbitalElements, geocentric_longitude, heliocentric_longitude,
    is_retrograde, moon_longitude, orbital_elements, solve_kepler, sun_longitude,
};

// Re-export chart types and computation.
pub use natal_chart::{
    ALL_SIGNS, AspectDef, AspectNature, AspectTable, BirthData, ChartAspect, ChartError,
    NatalChart, PlanetPosition, Sign, SignPosition, ascendant_deg, compute_aspects,
    compute_natal_chart, equal_house_cusps, house_for_longitude, mean_obliquity_deg,
    midheaven_deg, sign_position_from_longitude, sun_sign_for_date,
};

// Re-export the reading life cycle.
pub use natal_reading::{
    AspectSummary, ChartPoint, FeedbackEntry, PlanetSummary, PointPosition, REVEAL_ORDER,
    ReadingError, ReadingState, Synthesis, point_position, start_reading,
};
