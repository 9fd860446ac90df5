#![allow(dead_code)]

//! Static font catalog. The set follows the template families the renderer
//! ships glyph support for; ids are persisted inside saved drafts.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FontClass {
    SansSerif,
    Serif,
    Display,
    Monospace,
}

#[derive(Debug, Clone, Serialize)]
pub struct FontSpec {
    pub id: &'static str,
    pub name: &'static str,
    pub class: FontClass,
}

pub static FONTS: &[FontSpec] = &[
    FontSpec {
        id: "inter",
        name: "Inter",
        class: FontClass::SansSerif,
    },
    FontSpec {
        id: "lato",
        name: "Lato",
        class: FontClass::SansSerif,
    },
    FontSpec {
        id: "eb-garamond",
        name: "EB Garamond",
        class: FontClass::Serif,
    },
    FontSpec {
        id: "merriweather",
        name: "Merriweather",
        class: FontClass::Serif,
    },
    FontSpec {
        id: "oswald",
        name: "Oswald",
        class: FontClass::Display,
    },
    FontSpec {
        id: "jetbrains-mono",
        name: "JetBrains Mono",
        class: FontClass::Monospace,
    },
];

pub const DEFAULT_FONT_ID: &str = "inter";

/// Returns the font with the given id, if it exists in the catalog.
pub fn find_font(id: &str) -> Option<&'static FontSpec> {
    FONTS.iter().find(|f| f.id == id)
}
