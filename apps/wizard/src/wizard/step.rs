#![allow(dead_code)]

//! The step contract and the default 5-step registry.
//!
//! All step variants implement one interface so the controller can treat them
//! uniformly — a registry of implementations rather than a switch over step
//! numbers. Steps are addressed 1-based; the registry index is `step - 1`.
//!
//! `can_enter` is the guard consulted on every jump attempt. The default is
//! permissive: a user may jump to any step from the stepper without completing
//! the ones in between (flexible editing). Embedders that want sequential
//! enforcement override it; the controller already honors it.

use crate::models::CvDocument;

pub trait Step: Send + Sync {
    fn title(&self) -> &'static str;

    /// Whether this step may become the active step. Checked on every jump.
    fn can_enter(&self, _doc: &CvDocument) -> bool {
        true
    }

    /// Whether the active step's "continue" control is enabled.
    fn can_continue(&self, _doc: &CvDocument) -> bool {
        true
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Step implementations
// ────────────────────────────────────────────────────────────────────────────

/// Step 1 — name, contact details, career track. All fields optional.
pub struct PersonalStep;

impl Step for PersonalStep {
    fn title(&self) -> &'static str {
        "Personal Details"
    }
}

/// Step 2 — template, font, colors, spacing. Continue is gated on a template
/// having been chosen; everything else has usable defaults.
pub struct StyleStep;

impl Step for StyleStep {
    fn title(&self) -> &'static str {
        "Layout & Style"
    }

    fn can_continue(&self, doc: &CvDocument) -> bool {
        !doc.layout.is_empty()
    }
}

/// Step 3 — work experience entries and their achievement bullets.
pub struct ExperienceStep;

impl Step for ExperienceStep {
    fn title(&self) -> &'static str {
        "Work Experience"
    }
}

/// Step 4 — education, skills, projects, references.
pub struct SectionsStep;

impl Step for SectionsStep {
    fn title(&self) -> &'static str {
        "Education & Skills"
    }
}

/// Step 5 — the highest step. Its "continue" is a no-op in the controller;
/// there is no terminal state.
pub struct ReviewStep;

impl Step for ReviewStep {
    fn title(&self) -> &'static str {
        "Review & Export"
    }
}

/// The default wizard flow. Order is the step numbering.
pub fn default_steps() -> Vec<Box<dyn Step>> {
    vec![
        Box::new(PersonalStep),
        Box::new(StyleStep),
        Box::new(ExperienceStep),
        Box::new(SectionsStep),
        Box::new(ReviewStep),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::templates::TEMPLATES;

    #[test]
    fn test_default_flow_has_five_steps() {
        let steps = default_steps();
        assert_eq!(steps.len(), 5);
        assert_eq!(steps[1].title(), "Layout & Style");
        assert_eq!(steps[4].title(), "Review & Export");
    }

    #[test]
    fn test_style_step_gates_on_layout() {
        let mut doc = CvDocument::default();
        doc.layout.clear();
        assert!(!StyleStep.can_continue(&doc));

        // Every catalog id unlocks continue.
        for template in TEMPLATES {
            doc.layout = template.id.to_string();
            assert!(StyleStep.can_continue(&doc), "{} should unlock", template.id);
        }
    }

    #[test]
    fn test_all_steps_enterable_by_default() {
        let doc = CvDocument::default();
        for step in default_steps() {
            assert!(step.can_enter(&doc));
        }
    }

    #[test]
    fn test_non_gated_steps_always_continue() {
        let doc = CvDocument::default(); // everything empty except defaults
        assert!(PersonalStep.can_continue(&doc));
        assert!(ExperienceStep.can_continue(&doc));
        assert!(SectionsStep.can_continue(&doc));
        assert!(ReviewStep.can_continue(&doc));
    }
}
