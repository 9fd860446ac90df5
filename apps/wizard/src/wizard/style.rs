#![allow(dead_code)]

//! Layout & Style step operations — template, font, color scheme, spacing.
//!
//! Selections may happen in any order. All operations take the draft by
//! `&mut` and are meant to run inside [`WizardController::edit`] so every
//! selection persists immediately; the ones that can miss the catalog return
//! whether they applied.
//!
//! [`WizardController::edit`]: crate::wizard::WizardController::edit

use crate::catalog::{colors, fonts, spacing, templates};
use crate::models::{ColorSelection, CvDocument};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorChannel {
    Primary,
    Secondary,
    Accent,
}

impl ColorChannel {
    pub fn parse(label: &str) -> Option<Self> {
        match label {
            "primary" => Some(ColorChannel::Primary),
            "secondary" => Some(ColorChannel::Secondary),
            "accent" => Some(ColorChannel::Accent),
            _ => None,
        }
    }
}

/// Holds the step's only local state: the colors last picked by hand.
/// Switching back to the `"custom"` sentinel restores them, so a user can
/// compare presets against their own scheme without losing it.
pub struct StyleEditor {
    last_custom: ColorSelection,
}

impl StyleEditor {
    pub fn new() -> Self {
        let mut last_custom = ColorSelection::default();
        last_custom.is_custom = true;
        StyleEditor { last_custom }
    }

    /// Sets the draft's template. Unknown ids are ignored — the catalog UI
    /// never offers one, so there is nothing to report to the user.
    pub fn select_template(&self, doc: &mut CvDocument, id: &str) -> bool {
        match templates::find_template(id) {
            Some(template) => {
                doc.layout = template.id.to_string();
                true
            }
            None => false,
        }
    }

    pub fn select_font(&self, doc: &mut CvDocument, id: &str) -> bool {
        match fonts::find_font(id) {
            Some(font) => {
                doc.font = font.id.to_string();
                true
            }
            None => false,
        }
    }

    /// Applies a named preset verbatim (`is_custom: false`), or — for the
    /// `"custom"` sentinel — restores the last hand-picked colors
    /// (`is_custom: true`).
    pub fn select_color_preset(&mut self, doc: &mut CvDocument, id: &str) -> bool {
        if id == colors::CUSTOM_SCHEME_ID {
            doc.colors = self.last_custom.clone();
            return true;
        }
        match colors::find_scheme(id) {
            Some(scheme) => {
                doc.colors = ColorSelection::from_scheme(scheme);
                true
            }
            None => false,
        }
    }

    /// Updates one channel of the hand-picked colors and commits the whole
    /// selection to the draft immediately — every pick applies, there is no
    /// separate "apply" action.
    pub fn set_custom_color(&mut self, doc: &mut CvDocument, channel: ColorChannel, value: &str) {
        match channel {
            ColorChannel::Primary => self.last_custom.primary = value.to_string(),
            ColorChannel::Secondary => self.last_custom.secondary = value.to_string(),
            ColorChannel::Accent => self.last_custom.accent = value.to_string(),
        }
        self.last_custom.is_custom = true;
        doc.colors = self.last_custom.clone();
    }

    /// Sets the spacing id and its resolved multiplier together — the only
    /// path that writes either field, which is what keeps them in lockstep.
    pub fn select_spacing(&self, doc: &mut CvDocument, id: &str) -> bool {
        match spacing::multiplier_for(id) {
            Some(multiplier) => {
                doc.spacing = id.to_string();
                doc.spacing_value = multiplier;
                true
            }
            None => false,
        }
    }
}

impl Default for StyleEditor {
    fn default() -> Self {
        Self::new()
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
