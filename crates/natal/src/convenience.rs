//! Shortcut functions using the built-in aspect table.

use natal_chart::{
    AspectTable, BirthData, ChartError, NatalChart, Sign, compute_natal_chart, sun_sign_for_date,
};
use natal_reading::{ReadingState, start_reading};

/// Compute a natal chart with the built-in five major aspects.
pub fn chart_for(birth: &BirthData) -> Result<NatalChart, ChartError> {
    compute_natal_chart(birth, &AspectTable::builtin())
}

/// Start a reading with the built-in five major aspects.
pub fn reading_for(birth: &BirthData) -> Result<ReadingState, ChartError> {
    start_reading(birth, &AspectTable::builtin())
}

/// Calendar-based sun sign shortcut.
pub fn sun_sign(month: u32, day: u32) -> Sign {
    sun_sign_for_date(month, day)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn chart_shortcut_matches_explicit_table() {
        let birth = BirthData::new(1990, 3);
        let shortcut = chart_for(&birth).unwrap();
        let explicit = compute_natal_chart(&birth, &AspectTable::builtin()).unwrap();
        assert_eq!(shortcut, explicit);
    }

    #[test]
    fn sun_sign_shortcut() {
        assert_eq!(sun_sign(7, 4), Sign::Cancer);
        assert_eq!(sun_sign(12, 25), Sign::Capricorn);
    }
}
