//! End-to-end reveal/feedback life cycle tests.

use natal_chart::{AspectTable, BirthData};
use natal_orbit::Body;
use natal_reading::{ChartPoint, FeedbackEntry, ReadingError, ReadingState, start_reading};

fn reading() -> ReadingState {
    let birth = BirthData {
        year: 1985,
        month: 6,
        day: Some(15),
        hour: Some(10),
        minute: Some(30),
        latitude: Some(51.5074),
        longitude: Some(-0.1278),
        timezone: Some(0.0),
    };
    start_reading(&birth, &AspectTable::builtin()).expect("reading should start")
}

fn note(element: &str) -> FeedbackEntry {
    FeedbackEntry {
        element: element.to_string(),
        user_text: "understood".to_string(),
        timestamp: 1_700_000_000.0,
    }
}

#[test]
fn reveal_order_is_fixed() {
    let mut state = reading();
    let expected = [
        "sun", "moon", "ascendant", "mercury", "venus", "mars", "jupiter", "saturn", "uranus",
        "neptune", "pluto",
    ];
    let mut seen = Vec::new();
    while let Some(reveal) = state.next_reveal() {
        seen.push(reveal.point.name());
        state = state
            .record_feedback(reveal.point, note(reveal.point.name()))
            .expect("mid-cycle feedback");
    }
    assert_eq!(seen, expected);
}

#[test]
fn completion_flips_only_at_step_11() {
    let mut state = reading();
    for step in 1..=11 {
        let reveal = state.next_reveal().expect("order not yet exhausted");
        state = state
            .record_feedback(reveal.point, note(reveal.point.name()))
            .expect("mid-cycle feedback");
        assert_eq!(state.is_complete(), step == 11, "at step {step}");
    }
    assert!(state.next_reveal().is_none());
}

#[test]
fn feedback_entries_accumulate_in_order() {
    let mut state = reading();
    for _ in 0..3 {
        let reveal = state.next_reveal().unwrap();
        state = state
            .record_feedback(reveal.point, note(reveal.point.name()))
            .unwrap();
    }
    let elements: Vec<&str> = state.feedback().iter().map(|f| f.element.as_str()).collect();
    assert_eq!(elements, ["sun", "moon", "ascendant"]);
}

#[test]
fn ascendant_reveal_carries_house_1() {
    let mut state = reading();
    for _ in 0..2 {
        let reveal = state.next_reveal().unwrap();
        state = state
            .record_feedback(reveal.point, note(reveal.point.name()))
            .unwrap();
    }
    let asc = state.next_reveal().unwrap();
    assert_eq!(asc.point, ChartPoint::Ascendant);
    assert_eq!(asc.house, 1);
    assert!(!asc.retrograde);
}

#[test]
fn out_of_order_feedback_is_permitted_and_bounded() {
    // The permissive half of the policy: any point may be recorded at any
    // time before completion ...
    let mut state = reading();
    for point in natal_reading::REVEAL_ORDER {
        state = state.record_feedback(point, note(point.name())).unwrap();
    }
    assert!(state.is_complete());
    // ... and the bounded half: nothing may be recorded after it.
    let err = state
        .record_feedback(ChartPoint::Planet(Body::Sun), note("sun"))
        .unwrap_err();
    assert_eq!(err, ReadingError::ReadingComplete);
}

#[test]
fn states_are_independent_snapshots() {
    let s0 = reading();
    let r0 = s0.next_reveal().unwrap();
    let s1 = s0.record_feedback(r0.point, note("sun")).unwrap();
    let r1 = s1.next_reveal().unwrap();
    let s2 = s1.record_feedback(r1.point, note("moon")).unwrap();

    assert_eq!(s0.revealed().len(), 0);
    assert_eq!(s1.revealed().len(), 1);
    assert_eq!(s2.revealed().len(), 2);
    // All three share the identical chart value.
    assert_eq!(s0.chart(), s2.chart());
}

#[test]
fn synthesis_is_stable_across_the_cycle() {
    let mut state = reading();
    let before = state.synthesis();
    while let Some(reveal) = state.next_reveal() {
        state = state
            .record_feedback(reveal.point, note(reveal.point.name()))
            .unwrap();
    }
    let after = state.synthesis();
    // The synthesis projects the chart, not the reveal progress.
    assert_eq!(before, after);
}
