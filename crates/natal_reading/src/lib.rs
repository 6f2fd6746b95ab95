//! Incremental astrology reading over a computed natal chart.
//!
//! A reading reveals chart points one at a time in a fixed order and
//! accumulates caller feedback. State values are immutable: every
//! transition returns a new [`ReadingState`] while the old one stays
//! valid; the chart itself is shared across transitions, never recopied.

pub mod error;
pub mod point;
pub mod reading;

pub use error::ReadingError;
pub use point::{ChartPoint, PointPosition, REVEAL_ORDER, point_position};
pub use reading::{
    AspectSummary, FeedbackEntry, PlanetSummary, ReadingState, Synthesis, start_reading,
};
