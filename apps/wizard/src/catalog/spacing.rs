#![allow(dead_code)]

//! Static spacing catalog. Each preset resolves to a numeric line-spacing
//! multiplier; the draft stores both the id and the resolved value, and the
//! two are only ever set together (see `wizard::style::select_spacing`).

use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct SpacingPreset {
    pub id: &'static str,
    pub name: &'static str,
    pub multiplier: f32,
}

pub static SPACING_PRESETS: &[SpacingPreset] = &[
    SpacingPreset {
        id: "compact",
        name: "Compact",
        multiplier: 0.85,
    },
    SpacingPreset {
        id: "normal",
        name: "Normal",
        multiplier: 1.0,
    },
    SpacingPreset {
        id: "relaxed",
        name: "Relaxed",
        multiplier: 1.15,
    },
    SpacingPreset {
        id: "spacious",
        name: "Spacious",
        multiplier: 1.3,
    },
];

pub const DEFAULT_SPACING_ID: &str = "normal";

/// Returns the preset with the given id, if it exists in the catalog.
pub fn find_spacing(id: &str) -> Option<&'static SpacingPreset> {
    SPACING_PRESETS.iter().find(|s| s.id == id)
}

/// Resolves a spacing id to its multiplier.
pub fn multiplier_for(id: &str) -> Option<f32> {
    find_spacing(id).map(|s| s.multiplier)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_four_presets() {
        assert_eq!(SPACING_PRESETS.len(), 4);
    }

    #[test]
    fn test_default_resolves_to_one() {
        assert_eq!(multiplier_for(DEFAULT_SPACING_ID), Some(1.0));
    }

    #[test]
    fn test_unknown_id_has_no_multiplier() {
        assert_eq!(multiplier_for("double"), None);
    }

    #[test]
    fn test_multipliers_strictly_increase() {
        for pair in SPACING_PRESETS.windows(2) {
            assert!(pair[0].multiplier < pair[1].multiplier);
        }
    }
}
