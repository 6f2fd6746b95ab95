//! Natal chart computation: signs, angles, houses, aspects, assembly.
//!
//! This crate turns birth data into a complete [`NatalChart`]:
//! - [`zodiac`]: the 12 signs and positions within them
//! - [`angles`]: obliquity, ascendant, and midheaven
//! - [`houses`]: equal house cusps and house placement
//! - [`aspect`]: aspect definitions and pairwise aspect matching
//! - [`sun_sign`]: calendar-based sun sign lookup
//! - [`chart`]: birth data and full chart assembly
//!
//! Chart computation is a pure function: identical birth data yields a
//! bit-for-bit identical chart. The aspect table is an explicit immutable
//! configuration value owned by the caller, with no global state.

pub mod angles;
pub mod aspect;
pub mod chart;
pub mod error;
pub mod houses;
pub mod sun_sign;
pub mod zodiac;

mod util;

pub use angles::{ascendant_deg, mean_obliquity_deg, midheaven_deg};
pub use aspect::{AspectDef, AspectNature, AspectTable, ChartAspect, compute_aspects};
pub use chart::{BirthData, NatalChart, PlanetPosition, compute_natal_chart};
pub use error::ChartError;
pub use houses::{equal_house_cusps, house_for_longitude};
pub use sun_sign::sun_sign_for_date;
pub use zodiac::{ALL_SIGNS, Sign, SignPosition, sign_position_from_longitude};
