//! Aspect definitions and pairwise aspect computation.
//!
//! An aspect is a named angular relationship between two chart positions,
//! matched within a tolerance (the orb). The definition table is an
//! explicit immutable configuration value: built in, or deserialized from
//! JSON. It is passed by reference into the computation; there is no global cache.

use serde::{Deserialize, Serialize};

use natal_orbit::Body;

use crate::chart::PlanetPosition;
use crate::error::ChartError;
use crate::util::round2;

/// Qualitative character of an aspect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AspectNature {
    Harmonious,
    Challenging,
    Neutral,
}

/// One aspect definition: exact angle plus matching tolerance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AspectDef {
    /// Display name, e.g. "Trine".
    pub name: String,
    /// Astrological glyph.
    pub symbol: String,
    /// Exact angular separation in degrees.
    pub degrees: f64,
    /// Maximum deviation from exact, in degrees.
    pub orb: f64,
    /// Qualitative nature.
    pub nature: AspectNature,
}

/// Ordered, immutable aspect definition table.
#[derive(Debug, Clone, PartialEq)]
pub struct AspectTable {
    defs: Vec<AspectDef>,
}

impl AspectTable {
    /// The five major (Ptolemaic) aspects with conventional orbs.
    pub fn builtin() -> Self {
        fn def(name: &str, symbol: &str, degrees: f64, orb: f64, nature: AspectNature) -> AspectDef {
            AspectDef {
                name: name.to_string(),
                symbol: symbol.to_string(),
                degrees,
                orb,
                nature,
            }
        }
        Self {
            defs: vec![
                def("Conjunction", "☌", 0.0, 8.0, AspectNature::Neutral),
                def("Sextile", "⚹", 60.0, 6.0, AspectNature::Harmonious),
                def("Square", "□", 90.0, 8.0, AspectNature::Challenging),
                def("Trine", "△", 120.0, 8.0, AspectNature::Harmonious),
                def("Opposition", "☍", 180.0, 8.0, AspectNature::Challenging),
            ],
        }
    }

    /// Build from caller-supplied definitions, keeping their order.
    pub fn new(defs: Vec<AspectDef>) -> Self {
        Self { defs }
    }

    /// Deserialize a definition list from JSON.
    pub fn from_json_str(json: &str) -> Result<Self, ChartError> {
        let defs: Vec<AspectDef> = serde_json::from_str(json)?;
        Ok(Self { defs })
    }

    /// The definitions, in matching order.
    pub fn defs(&self) -> &[AspectDef] {
        &self.defs
    }
}

impl Default for AspectTable {
    fn default() -> Self {
        Self::builtin()
    }
}

/// A matched aspect between two charted bodies.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartAspect {
    pub planet1: Body,
    pub planet2: Body,
    pub aspect_name: String,
    pub aspect_symbol: String,
    /// The definition's exact angle.
    pub exact_degrees: f64,
    /// Actual angular separation, folded to [0, 180].
    pub actual_degrees: f64,
    /// Deviation from exact, rounded to 2 decimals, >= 0.
    pub orb: f64,
    pub nature: AspectNature,
}

/// All aspects among the given positions, tightest orb first.
///
/// Every unordered pair is tested against every definition independently;
/// a pair may match zero, one, or several definitions. The sort is stable,
/// so equal orbs keep discovery order (pair order, then definition order).
pub fn compute_aspects(positions: &[PlanetPosition], table: &AspectTable) -> Vec<ChartAspect> {
    let mut aspects = Vec::new();

    for i in 0..positions.len() {
        for j in (i + 1)..positions.len() {
            let p1 = &positions[i];
            let p2 = &positions[j];

            let mut separation = (p1.total_degrees - p2.total_degrees).abs();
            if separation > 180.0 {
                separation = 360.0 - separation;
            }

            for def in table.defs() {
                let deviation = (separation - def.degrees).abs();
                if deviation <= def.orb {
                    aspects.push(ChartAspect {
                        planet1: p1.planet,
                        planet2: p2.planet,
                        aspect_name: def.name.clone(),
                        aspect_symbol: def.symbol.clone(),
                        exact_degrees: def.degrees,
                        actual_degrees: separation,
                        orb: round2(deviation),
                        nature: def.nature,
                    });
                }
            }
        }
    }

    aspects.sort_by(|a, b| a.orb.total_cmp(&b.orb));
    aspects
}
