//! The reading state machine: immutable values, pure transitions.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use natal_chart::{AspectTable, BirthData, ChartError, NatalChart, Sign, compute_natal_chart};
use natal_orbit::Body;

use crate::error::ReadingError;
use crate::point::{ChartPoint, PointPosition, REVEAL_ORDER, point_position};

/// One piece of caller feedback. Opaque to the engine beyond storage and
/// ordering; the timestamp is supplied by the caller.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeedbackEntry {
    /// Identifier of the element the feedback refers to.
    pub element: String,
    /// Free-text feedback.
    pub user_text: String,
    /// Caller-supplied timestamp (seconds).
    pub timestamp: f64,
}

/// Immutable state of one reading session.
///
/// Transitions return a new value; the previous state stays valid and is
/// never mutated. The chart is held behind an [`Arc`], so transitions
/// share it instead of deep-copying.
#[derive(Debug, Clone)]
pub struct ReadingState {
    birth_data: BirthData,
    chart: Arc<NatalChart>,
    revealed: Vec<ChartPoint>,
    /// Reserved for house-level reveals; currently always empty.
    revealed_houses: Vec<u8>,
    feedback: Vec<FeedbackEntry>,
}

/// Start a reading: compute the chart, no reveals yet.
pub fn start_reading(
    birth: &BirthData,
    aspect_table: &AspectTable,
) -> Result<ReadingState, ChartError> {
    let chart = compute_natal_chart(birth, aspect_table)?;
    Ok(ReadingState {
        birth_data: *birth,
        chart: Arc::new(chart),
        revealed: Vec::new(),
        revealed_houses: Vec::new(),
        feedback: Vec::new(),
    })
}

impl ReadingState {
    /// The birth input this reading was started from.
    pub fn birth_data(&self) -> &BirthData {
        &self.birth_data
    }

    /// The computed chart.
    pub fn chart(&self) -> &NatalChart {
        &self.chart
    }

    /// Points revealed so far, in reveal order. Append-only, duplicate-free.
    pub fn revealed(&self) -> &[ChartPoint] {
        &self.revealed
    }

    /// Recorded feedback, in recording order.
    pub fn feedback(&self) -> &[FeedbackEntry] {
        &self.feedback
    }

    /// Revealed houses: reserved, currently always empty.
    pub fn revealed_houses(&self) -> &[u8] {
        &self.revealed_houses
    }

    /// The next unrevealed point in the fixed order, resolved to its
    /// position, or `None` once the order is exhausted.
    pub fn next_reveal(&self) -> Option<PointPosition> {
        REVEAL_ORDER
            .iter()
            .copied()
            .find(|point| !self.revealed.contains(point))
            .and_then(|point| point_position(&self.chart, point))
    }

    /// Record feedback and mark the point revealed, producing a new state.
    ///
    /// The point is not required to match the last [`Self::next_reveal`]
    /// result; the caller may reveal out of order. Recording for an
    /// already-revealed point appends the feedback without duplicating
    /// the reveal. Fails once the reading is complete.
    pub fn record_feedback(
        &self,
        point: ChartPoint,
        feedback: FeedbackEntry,
    ) -> Result<ReadingState, ReadingError> {
        if self.is_complete() {
            return Err(ReadingError::ReadingComplete);
        }
        let mut next = self.clone();
        if !next.revealed.contains(&point) {
            next.revealed.push(point);
        }
        next.feedback.push(feedback);
        Ok(next)
    }

    /// Whether all 11 points of the reveal order have been revealed.
    pub fn is_complete(&self) -> bool {
        self.revealed.len() >= REVEAL_ORDER.len()
    }

    /// Summary projection of the reading. Pure; available at any time,
    /// with no minimum reveal count.
    pub fn synthesis(&self) -> Synthesis {
        let chart = self.chart();
        Synthesis {
            sun_sign: chart.sun.sign,
            moon_sign: chart.moon.sign,
            ascendant: chart.ascendant.sign,
            planets: chart
                .planets()
                .iter()
                .map(|p| PlanetSummary {
                    planet: p.planet,
                    sign: p.sign,
                    degrees: p.degrees,
                    house: p.house,
                })
                .collect(),
            aspects: chart
                .aspects
                .iter()
                .map(|a| AspectSummary {
                    planet1: a.planet1,
                    planet2: a.planet2,
                    aspect_name: a.aspect_name.clone(),
                    orb: a.orb,
                })
                .collect(),
        }
    }
}

/// Per-planet line of the synthesis summary.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanetSummary {
    pub planet: Body,
    pub sign: Sign,
    pub degrees: f64,
    pub house: u8,
}

/// Per-aspect line of the synthesis summary.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AspectSummary {
    pub planet1: Body,
    pub planet2: Body,
    pub aspect_name: String,
    pub orb: f64,
}

/// JSON-serializable reading summary.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Synthesis {
    pub sun_sign: Sign,
    pub moon_sign: Sign,
    pub ascendant: Sign,
    /// The ten planets in chart order.
    pub planets: Vec<PlanetSummary>,
    /// All chart aspects, tightest orb first.
    pub aspects: Vec<AspectSummary>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fresh_reading() -> ReadingState {
        let birth = BirthData {
            year: 1990,
            month: 3,
            day: Some(25),
            hour: Some(12),
            minute: Some(0),
            latitude: Some(40.7128),
            longitude: Some(-74.0060),
            timezone: Some(-5.0),
        };
        start_reading(&birth, &AspectTable::builtin()).unwrap()
    }

    fn note(element: &str) -> FeedbackEntry {
        FeedbackEntry {
            element: element.to_string(),
            user_text: "noted".to_string(),
            timestamp: 0.0,
        }
    }

    #[test]
    fn fresh_reading_has_no_reveals() {
        let state = fresh_reading();
        assert!(state.revealed().is_empty());
        assert!(state.feedback().is_empty());
        assert!(state.revealed_houses().is_empty());
        assert!(!state.is_complete());
    }

    #[test]
    fn first_reveal_is_the_sun() {
        let state = fresh_reading();
        let reveal = state.next_reveal().unwrap();
        assert_eq!(reveal.point, ChartPoint::Planet(Body::Sun));
    }

    #[test]
    fn third_reveal_is_the_ascendant() {
        let mut state = fresh_reading();
        for _ in 0..2 {
            let reveal = state.next_reveal().unwrap();
            state = state.record_feedback(reveal.point, note(reveal.point.name())).unwrap();
        }
        let reveal = state.next_reveal().unwrap();
        assert_eq!(reveal.point, ChartPoint::Ascendant);
    }

    #[test]
    fn old_state_survives_transition() {
        let state = fresh_reading();
        let reveal = state.next_reveal().unwrap();
        let next = state.record_feedback(reveal.point, note("sun")).unwrap();
        // Functional update: the original is untouched.
        assert!(state.revealed().is_empty());
        assert_eq!(next.revealed().len(), 1);
        // The chart is shared, not recomputed or copied.
        assert!(std::ptr::eq(state.chart(), next.chart()));
    }

    #[test]
    fn mismatched_point_is_accepted() {
        // Policy: feedback need not reference the point next_reveal
        // returned last.
        let state = fresh_reading();
        let next = state
            .record_feedback(ChartPoint::Planet(Body::Pluto), note("pluto"))
            .unwrap();
        assert_eq!(next.revealed(), &[ChartPoint::Planet(Body::Pluto)]);
        // next_reveal still walks the fixed order from the top.
        assert_eq!(next.next_reveal().unwrap().point, ChartPoint::Planet(Body::Sun));
    }

    #[test]
    fn duplicate_point_appends_feedback_only() {
        let state = fresh_reading();
        let once = state
            .record_feedback(ChartPoint::Planet(Body::Sun), note("sun"))
            .unwrap();
        let twice = once
            .record_feedback(ChartPoint::Planet(Body::Sun), note("sun again"))
            .unwrap();
        assert_eq!(twice.revealed().len(), 1);
        assert_eq!(twice.feedback().len(), 2);
    }

    #[test]
    fn full_cycle_takes_exactly_11_steps() {
        let mut state = fresh_reading();
        let mut steps = 0;
        while let Some(reveal) = state.next_reveal() {
            assert!(!state.is_complete(), "complete before exhaustion at step {steps}");
            state = state.record_feedback(reveal.point, note(reveal.point.name())).unwrap();
            steps += 1;
        }
        assert_eq!(steps, 11);
        assert!(state.is_complete());
        assert_eq!(state.feedback().len(), 11);
    }

    #[test]
    fn feedback_after_completion_fails() {
        let mut state = fresh_reading();
        while let Some(reveal) = state.next_reveal() {
            state = state.record_feedback(reveal.point, note(reveal.point.name())).unwrap();
        }
        let err = state
            .record_feedback(ChartPoint::Midheaven, note("midheaven"))
            .unwrap_err();
        assert_eq!(err, ReadingError::ReadingComplete);
    }

    #[test]
    fn synthesis_needs_no_reveals() {
        let state = fresh_reading();
        let synthesis = state.synthesis();
        assert_eq!(synthesis.planets.len(), 10);
        assert_eq!(synthesis.sun_sign, state.chart().sun.sign);
    }

    #[test]
    fn synthesis_serializes_camel_case() {
        let state = fresh_reading();
        let json = serde_json::to_string(&state.synthesis()).unwrap();
        assert!(json.contains("\"sunSign\""), "json: {json}");
        assert!(json.contains("\"moonSign\""));
        assert!(json.contains("\"aspectName\"") || state.chart().aspects.is_empty());
    }
}
