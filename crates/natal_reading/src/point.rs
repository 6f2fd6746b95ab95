//! Chart points: the ten charted bodies plus the two synthetic angles.

use natal_chart::{NatalChart, Sign};
use natal_orbit::Body;

/// A revealable point in the chart: a charted body, or one of the two
/// synthetic angle points. The angles resolve to pseudo-positions with
/// fixed houses (ascendant = 1, midheaven = 10).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChartPoint {
    Planet(Body),
    Ascendant,
    Midheaven,
}

/// The fixed reveal order: luminaries, ascendant, then the planets
/// outward. Midheaven is resolvable but not part of the default order.
pub const REVEAL_ORDER: [ChartPoint; 11] = [
    ChartPoint::Planet(Body::Sun),
    ChartPoint::Planet(Body::Moon),
    ChartPoint::Ascendant,
    ChartPoint::Planet(Body::Mercury),
    ChartPoint::Planet(Body::Venus),
    ChartPoint::Planet(Body::Mars),
    ChartPoint::Planet(Body::Jupiter),
    ChartPoint::Planet(Body::Saturn),
    ChartPoint::Planet(Body::Uranus),
    ChartPoint::Planet(Body::Neptune),
    ChartPoint::Planet(Body::Pluto),
];

impl ChartPoint {
    /// Lowercase identifier ("sun", "ascendant", ...).
    pub const fn name(self) -> &'static str {
        match self {
            Self::Planet(body) => body.name(),
            Self::Ascendant => "ascendant",
            Self::Midheaven => "midheaven",
        }
    }
}

impl std::fmt::Display for ChartPoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// A chart point resolved to its position data.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointPosition {
    pub point: ChartPoint,
    pub sign: Sign,
    /// Degrees within the sign.
    pub degrees: f64,
    /// Ecliptic longitude.
    pub total_degrees: f64,
    /// House number; fixed to 1 for the ascendant, 10 for the midheaven.
    pub house: u8,
    pub retrograde: bool,
}

/// Resolve a chart point to its position.
///
/// Total over every revealable point; `None` only for `Planet(Earth)`,
/// which never appears in a chart.
pub fn point_position(chart: &NatalChart, point: ChartPoint) -> Option<PointPosition> {
    match point {
        ChartPoint::Planet(body) => chart.position(body).map(|p| PointPosition {
            point,
            sign: p.sign,
            degrees: p.degrees,
            total_degrees: p.total_degrees,
            house: p.house,
            retrograde: p.retrograde,
        }),
        ChartPoint::Ascendant => Some(PointPosition {
            point,
            sign: chart.ascendant.sign,
            degrees: chart.ascendant.degrees,
            total_degrees: chart.ascendant.total_degrees,
            house: 1,
            retrograde: false,
        }),
        ChartPoint::Midheaven => Some(PointPosition {
            point,
            sign: chart.midheaven.sign,
            degrees: chart.midheaven.degrees,
            total_degrees: chart.midheaven.total_degrees,
            house: 10,
            retrograde: false,
        }),
    }
}
