#![allow(dead_code)]

//! Static color-scheme catalog: 7 named presets plus the `"custom"` sentinel.
//!
//! Selecting a preset copies its three values into the draft verbatim with
//! `is_custom: false`; selecting the sentinel switches the step into
//! free-pick mode (see `wizard::style`). The sentinel is deliberately NOT a
//! `ColorScheme` — it supplies no values of its own.

use serde::Serialize;

/// A named, predefined primary/secondary/accent bundle. Values are `#rrggbb`.
#[derive(Debug, Clone, Serialize)]
pub struct ColorScheme {
    pub id: &'static str,
    pub name: &'static str,
    pub primary: &'static str,
    pub secondary: &'static str,
    pub accent: &'static str,
}

/// Sentinel id that switches the color picker into custom mode.
pub const CUSTOM_SCHEME_ID: &str = "custom";

pub static COLOR_SCHEMES: &[ColorScheme] = &[
    ColorScheme {
        id: "midnight",
        name: "Midnight",
        primary: "#1e293b",
        secondary: "#475569",
        accent: "#3b82f6",
    },
    ColorScheme {
        id: "ocean",
        name: "Ocean",
        primary: "#0c4a6e",
        secondary: "#0369a1",
        accent: "#22d3ee",
    },
    ColorScheme {
        id: "forest",
        name: "Forest",
        primary: "#14532d",
        secondary: "#166534",
        accent: "#84cc16",
    },
    ColorScheme {
        id: "crimson",
        name: "Crimson",
        primary: "#7f1d1d",
        secondary: "#991b1b",
        accent: "#fb7185",
    },
    ColorScheme {
        id: "slate",
        name: "Slate",
        primary: "#334155",
        secondary: "#64748b",
        accent: "#94a3b8",
    },
    ColorScheme {
        id: "amber",
        name: "Amber",
        primary: "#451a03",
        secondary: "#92400e",
        accent: "#f59e0b",
    },
    ColorScheme {
        id: "plum",
        name: "Plum",
        primary: "#4c1d95",
        secondary: "#6d28d9",
        accent: "#c084fc",
    },
];

/// Returns the preset with the given id. The `"custom"` sentinel is not a
/// preset and returns `None` here.
pub fn find_scheme(id: &str) -> Option<&'static ColorScheme> {
    COLOR_SCHEMES.iter().find(|s| s.id == id)
}

/// The scheme a fresh draft starts from.
pub fn default_scheme() -> &'static ColorScheme {
    &COLOR_SCHEMES[0]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_seven_presets_with_unique_ids() {
        assert_eq!(COLOR_SCHEMES.len(), 7);
        let ids: HashSet<&str> = COLOR_SCHEMES.iter().map(|s| s.id).collect();
        assert_eq!(ids.len(), COLOR_SCHEMES.len());
    }

    #[test]
    fn test_custom_sentinel_is_not_a_preset() {
        assert!(find_scheme(CUSTOM_SCHEME_ID).is_none());
    }

    #[test]
    fn test_all_values_are_hex_colors() {
        for s in COLOR_SCHEMES {
            for v in [s.primary, s.secondary, s.accent] {
                assert!(v.starts_with('#') && v.len() == 7, "bad color {v} in {}", s.id);
                assert!(v[1..].chars().all(|c| c.is_ascii_hexdigit()));
            }
        }
    }

    #[test]
    fn test_default_scheme_in_catalog() {
        assert!(find_scheme(default_scheme().id).is_some());
    }
}
