#![allow(dead_code)]

//! The draft being built — the single shared value the wizard controller owns
//! and every step edits. Serialized verbatim inside the draft envelope, so
//! all fields carry serde defaults: an older payload missing a newer field
//! still loads.

use serde::{Deserialize, Serialize};

use crate::catalog::{colors, fonts, spacing, templates};
use crate::models::entries::{
    EducationEntry, ExperienceEntry, ProjectEntry, ReferenceEntry, SkillEntry,
};

/// The three colors currently applied to the draft, plus their provenance:
/// `is_custom: false` means they were copied verbatim from a catalog preset,
/// `true` means they were last set through the free color pickers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColorSelection {
    pub primary: String,
    pub secondary: String,
    pub accent: String,
    pub is_custom: bool,
}

impl ColorSelection {
    /// Copies a catalog preset verbatim.
    pub fn from_scheme(scheme: &colors::ColorScheme) -> Self {
        ColorSelection {
            primary: scheme.primary.to_string(),
            secondary: scheme.secondary.to_string(),
            accent: scheme.accent.to_string(),
            is_custom: false,
        }
    }
}

impl Default for ColorSelection {
    fn default() -> Self {
        Self::from_scheme(colors::default_scheme())
    }
}

/// A CV draft. Created with defaults on first wizard mount, then edited by
/// whichever step is active and persisted after every change.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CvDocument {
    /// Selected template id from the template catalog.
    pub layout: String,
    pub name: String,
    pub email: String,
    pub phone: String,
    /// Career track the CV targets ("backend", "data", ...). Free text.
    pub cv_track: String,
    pub experience: Vec<ExperienceEntry>,
    pub education: Vec<EducationEntry>,
    pub skills: Vec<SkillEntry>,
    pub projects: Vec<ProjectEntry>,
    pub references: Vec<ReferenceEntry>,
    pub colors: ColorSelection,
    /// Font id from the font catalog.
    pub font: String,
    /// Spacing id from the spacing catalog.
    pub spacing: String,
    /// Multiplier resolved from `spacing`. Invariant: always equals the
    /// catalog value for `spacing` — the two are never set independently.
    pub spacing_value: f32,
}

impl Default for CvDocument {
    fn default() -> Self {
        CvDocument {
            layout: templates::DEFAULT_TEMPLATE_ID.to_string(),
            name: String::new(),
            email: String::new(),
            phone: String::new(),
            cv_track: String::new(),
            experience: vec![],
            education: vec![],
            skills: vec![],
            projects: vec![],
            references: vec![],
            colors: ColorSelection::default(),
            font: fonts::DEFAULT_FONT_ID.to_string(),
            spacing: spacing::DEFAULT_SPACING_ID.to_string(),
            spacing_value: 1.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog;

    #[test]
    fn test_default_document_matches_catalog_defaults() {
        let doc = CvDocument::default();
        assert_eq!(doc.layout, "cv_1");
        assert_eq!(doc.font, "inter");
        assert_eq!(doc.spacing, "normal");
        assert_eq!(doc.spacing_value, 1.0);
        assert!(doc.name.is_empty());
        assert!(doc.experience.is_empty());
    }

    #[test]
    fn test_default_spacing_honors_catalog_invariant() {
        let doc = CvDocument::default();
        assert_eq!(catalog::multiplier_for(&doc.spacing), Some(doc.spacing_value));
    }

    #[test]
    fn test_default_colors_come_from_a_preset() {
        let doc = CvDocument::default();
        assert!(!doc.colors.is_custom);
        let scheme = catalog::default_scheme();
        assert_eq!(doc.colors.primary, scheme.primary);
        assert_eq!(doc.colors.secondary, scheme.secondary);
        assert_eq!(doc.colors.accent, scheme.accent);
    }

    #[test]
    fn test_partial_payload_fills_defaults() {
        // A payload from before the spacing fields existed must still load.
        let doc: CvDocument =
            serde_json::from_str(r#"{"layout": "cv_3", "name": "Ada"}"#).unwrap();
        assert_eq!(doc.layout, "cv_3");
        assert_eq!(doc.name, "Ada");
        assert_eq!(doc.spacing, "normal");
        assert_eq!(doc.spacing_value, 1.0);
    }
}
