//! Whole-surface integration: chart, reading cycle, synthesis JSON.

use natal::*;

fn nyc_1990() -> BirthData {
    BirthData {
        year: 1990,
        month: 3,
        day: Some(25),
        hour: Some(12),
        minute: Some(0),
        latitude: Some(40.7128),
        longitude: Some(-74.0060),
        timezone: Some(-5.0),
    }
}

#[test]
fn chart_and_reading_agree() {
    let birth = nyc_1990();
    let chart = chart_for(&birth).unwrap();
    let state = reading_for(&birth).unwrap();
    assert_eq!(&chart, state.chart());
}

#[test]
fn full_session_end_to_end() {
    let mut state = reading_for(&nyc_1990()).unwrap();
    let mut steps = 0;
    while let Some(reveal) = state.next_reveal() {
        let feedback = FeedbackEntry {
            element: reveal.point.name().to_string(),
            user_text: format!("about {}", reveal.point),
            timestamp: steps as f64,
        };
        state = state.record_feedback(reveal.point, feedback).unwrap();
        steps += 1;
    }
    assert_eq!(steps, 11);
    assert!(state.is_complete());

    let synthesis = state.synthesis();
    assert_eq!(synthesis.sun_sign, Sign::Aries);
    let json = serde_json::to_string_pretty(&synthesis).unwrap();
    assert!(json.contains("sunSign"));
}

#[test]
fn custom_aspect_table_threads_through() {
    // An empty table yields a chart with no aspects but everything else intact.
    let table = AspectTable::new(Vec::new());
    let chart = compute_natal_chart(&nyc_1990(), &table).unwrap();
    assert!(chart.aspects.is_empty());
    assert_eq!(chart.sun.sign, Sign::Aries);
}

#[test]
fn reexported_primitives_are_usable() {
    let jd = to_julian_day(2000, 1, 1, 12.0, 0.0);
    assert!((jd - J2000_JD).abs() < 1e-3);
    assert!((normalize_360(-30.0) - 330.0).abs() < 1e-12);
    let lon = geocentric_longitude(Body::Mars, jd).unwrap();
    assert!((0.0..360.0).contains(&lon));
}
