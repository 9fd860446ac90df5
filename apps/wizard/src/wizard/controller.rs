#![allow(dead_code)]

//! The wizard controller — sole owner of the draft document and the current
//! step. Step editors never hold their own copy: they read through
//! [`WizardController::document`] and mutate through
//! [`WizardController::edit`], which persists after every change.

use tracing::{debug, info, warn};

use crate::models::CvDocument;
use crate::store::{DraftEnvelope, DraftStore};
use crate::wizard::preview::PreviewSink;
use crate::wizard::step::{default_steps, Step};

/// Preview refreshes only start once the user is past the style step —
/// before that there is not enough styled content to render.
const PREVIEW_FROM_STEP: usize = 2;

pub struct WizardController {
    steps: Vec<Box<dyn Step>>,
    store: Box<dyn DraftStore>,
    preview: Option<Box<dyn PreviewSink>>,
    current_step: usize,
    document: CvDocument,
}

impl WizardController {
    /// Builds a controller over the default 5-step flow, restoring any saved
    /// draft from the store. A missing, malformed, or range-violating saved
    /// envelope falls back to a fresh document at step 1 — restore failures
    /// never fail the caller.
    pub fn new(store: Box<dyn DraftStore>) -> Self {
        Self::with_steps(store, default_steps())
    }

    pub fn with_steps(store: Box<dyn DraftStore>, steps: Vec<Box<dyn Step>>) -> Self {
        assert!(!steps.is_empty(), "wizard needs at least one step");

        let (document, current_step) = match store.load() {
            Some(envelope) => match envelope.validate(steps.len()) {
                Ok(()) => {
                    info!("restored saved draft at step {}", envelope.step);
                    (envelope.data, envelope.step)
                }
                Err(e) => {
                    warn!("discarding saved draft: {e}");
                    (CvDocument::default(), 1)
                }
            },
            None => (CvDocument::default(), 1),
        };

        WizardController {
            steps,
            store,
            preview: None,
            current_step,
            document,
        }
    }

    /// Attaches the live preview collaborator. Refreshed on every document
    /// change while the user is past the style step.
    pub fn attach_preview(&mut self, sink: Box<dyn PreviewSink>) {
        self.preview = Some(sink);
    }

    // ── read surface ────────────────────────────────────────────────────────

    pub fn document(&self) -> &CvDocument {
        &self.document
    }

    pub fn current_step(&self) -> usize {
        self.current_step
    }

    pub fn total_steps(&self) -> usize {
        self.steps.len()
    }

    pub fn step_title(&self) -> &'static str {
        self.steps[self.current_step - 1].title()
    }

    pub fn step_titles(&self) -> Vec<&'static str> {
        self.steps.iter().map(|s| s.title()).collect()
    }

    /// Whether the active step's "continue" control is enabled.
    pub fn can_continue(&self) -> bool {
        self.steps[self.current_step - 1].can_continue(&self.document)
    }

    // ── navigation ──────────────────────────────────────────────────────────

    /// Jumps directly to step `n`. Out-of-range targets and targets whose
    /// `can_enter` guard rejects are silent no-ops.
    pub fn go_to_step(&mut self, n: usize) {
        if n < 1 || n > self.steps.len() {
            debug!("ignoring jump to out-of-range step {n}");
            return;
        }
        if !self.steps[n - 1].can_enter(&self.document) {
            debug!("step {n} refused entry");
            return;
        }
        if n != self.current_step {
            self.current_step = n;
            self.persist();
        }
    }

    /// The active step's "continue" control. Returns whether the step
    /// changed: `false` when the continue gate rejects or the wizard is
    /// already on its final step (the final continue is a no-op by design).
    pub fn advance(&mut self) -> bool {
        if !self.can_continue() || self.current_step >= self.steps.len() {
            return false;
        }
        let target = self.current_step + 1;
        self.go_to_step(target);
        self.current_step == target
    }

    /// The active step's "back" control. No-op on step 1.
    pub fn back(&mut self) -> bool {
        if self.current_step <= 1 {
            return false;
        }
        let target = self.current_step - 1;
        self.go_to_step(target);
        self.current_step == target
    }

    // ── editing ─────────────────────────────────────────────────────────────

    /// Applies a mutation to the document, persists the result, and refreshes
    /// the preview. This is the only write path step editors get.
    pub fn edit<T>(&mut self, f: impl FnOnce(&mut CvDocument) -> T) -> T {
        let out = f(&mut self.document);
        self.persist();
        self.refresh_preview();
        out
    }

    /// Persists the current envelope. Fire-and-forget: a write failure is
    /// logged and swallowed — draft data is transient and non-critical.
    fn persist(&self) {
        let envelope = DraftEnvelope::new(self.document.clone(), self.current_step);
        if let Err(e) = self.store.save(&envelope) {
            warn!("draft save failed: {e}");
        }
    }

    fn refresh_preview(&mut self) {
        if self.current_step > PREVIEW_FROM_STEP {
            if let Some(sink) = self.preview.as_mut() {
                sink.render(&self.document);
            }
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryStore;
    use crate::wizard::experience;
    use crate::wizard::preview::MarkdownPreview;

    fn fresh_controller() -> (WizardController, MemoryStore) {
        let store = MemoryStore::new();
        let ctl = WizardController::new(Box::new(store.clone()));
        (ctl, store)
    }

    // ── restore ─────────────────────────────────────────────────────────────

    #[test]
    fn test_fresh_store_yields_defaults_at_step_one() {
        let (ctl, _) = fresh_controller();
        assert_eq!(ctl.current_step(), 1);
        assert_eq!(*ctl.document(), CvDocument::default());
    }

    #[test]
    fn test_restores_saved_draft_and_step() {
        let store = MemoryStore::new();
        {
            let mut ctl = WizardController::new(Box::new(store.clone()));
            ctl.edit(|doc| doc.name = "Ada Lovelace".to_string());
            ctl.go_to_step(3);
        }
        let restored = WizardController::new(Box::new(store));
        assert_eq!(restored.current_step(), 3);
        assert_eq!(restored.document().name, "Ada Lovelace");
    }

    #[test]
    fn test_malformed_saved_draft_falls_back_to_defaults() {
        let store = MemoryStore::with_raw("{definitely not json");
        let ctl = WizardController::new(Box::new(store));
        assert_eq!(ctl.current_step(), 1);
        assert_eq!(*ctl.document(), CvDocument::default());
    }

    #[test]
    fn test_out_of_range_saved_step_falls_back_to_defaults() {
        let store = MemoryStore::with_raw(r#"{"data": {"name": "X"}, "step": 12}"#);
        let ctl = WizardController::new(Box::new(store));
        assert_eq!(ctl.current_step(), 1);
        assert!(ctl.document().name.is_empty());
    }

    // ── step bounds ─────────────────────────────────────────────────────────

    #[test]
    fn test_go_to_step_rejects_out_of_bounds() {
        let (mut ctl, _) = fresh_controller();
        ctl.go_to_step(3);
        ctl.go_to_step(0);
        assert_eq!(ctl.current_step(), 3);
        ctl.go_to_step(ctl.total_steps() + 1);
        assert_eq!(ctl.current_step(), 3);
    }

    #[test]
    fn test_go_to_step_is_a_direct_jump() {
        let (mut ctl, _) = fresh_controller();
        for target in [5, 2, 4, 1] {
            ctl.go_to_step(target);
            assert_eq!(ctl.current_step(), target);
        }
    }

    #[test]
    fn test_back_stops_at_first_step() {
        let (mut ctl, _) = fresh_controller();
        assert!(!ctl.back());
        assert_eq!(ctl.current_step(), 1);
    }

    #[test]
    fn test_advance_is_noop_on_final_step() {
        let (mut ctl, _) = fresh_controller();
        ctl.go_to_step(ctl.total_steps());
        assert!(!ctl.advance());
        assert_eq!(ctl.current_step(), ctl.total_steps());
    }

    // ── continue gating ─────────────────────────────────────────────────────

    #[test]
    fn test_advance_blocked_without_template_selection() {
        let (mut ctl, _) = fresh_controller();
        ctl.go_to_step(2);
        ctl.edit(|doc| doc.layout.clear());
        assert!(!ctl.can_continue());
        assert!(!ctl.advance());
        assert_eq!(ctl.current_step(), 2);

        ctl.edit(|doc| doc.layout = "cv_7".to_string());
        assert!(ctl.can_continue());
        assert!(ctl.advance());
        assert_eq!(ctl.current_step(), 3);
    }

    #[test]
    fn test_sidebar_jump_bypasses_continue_gate() {
        // Flexible editing: the jump control only checks bounds + can_enter,
        // not completion of intervening steps.
        let (mut ctl, _) = fresh_controller();
        ctl.edit(|doc| doc.layout.clear());
        ctl.go_to_step(5);
        assert_eq!(ctl.current_step(), 5);
    }

    // ── persistence ─────────────────────────────────────────────────────────

    #[test]
    fn test_every_edit_persists() {
        let (mut ctl, store) = fresh_controller();
        assert!(store.raw().is_none());

        ctl.edit(|doc| doc.email = "ada@example.com".to_string());
        let saved = store.load().expect("edit should persist an envelope");
        assert_eq!(saved.data.email, "ada@example.com");
        assert_eq!(saved.step, 1);
    }

    #[test]
    fn test_step_changes_persist() {
        let (mut ctl, store) = fresh_controller();
        ctl.go_to_step(4);
        assert_eq!(store.load().unwrap().step, 4);
    }

    // ── preview ─────────────────────────────────────────────────────────────

    #[test]
    fn test_preview_silent_through_style_step() {
        let (mut ctl, _) = fresh_controller();
        let (sink, handle) = MarkdownPreview::new();
        ctl.attach_preview(Box::new(sink));

        ctl.edit(|doc| doc.name = "Ada".to_string());
        ctl.go_to_step(2);
        ctl.edit(|doc| doc.layout = "cv_2".to_string());
        assert!(handle.latest().is_none(), "no preview on steps 1-2");

        ctl.go_to_step(3);
        ctl.edit(|doc| doc.cv_track = "backend".to_string());
        let rendered = handle.latest().expect("preview refreshed past step 2");
        assert!(rendered.contains("Ada"));
    }

    // ── full experience flow ────────────────────────────────────────────────

    #[test]
    fn test_experience_scenario_end_to_end() {
        let (mut ctl, store) = fresh_controller();
        assert_eq!(ctl.document().layout, "cv_1");
        ctl.go_to_step(3);

        let id = ctl.edit(experience::add_experience);
        {
            let entries = &ctl.document().experience;
            assert_eq!(entries.len(), 1);
            assert_eq!(entries[0].id, id);
            assert!(entries[0].job_title.is_empty());
        }

        assert!(ctl.edit(|doc| {
            experience::update_field(doc, id, experience::ExperienceField::JobTitle, "Engineer")
        }));
        assert_eq!(ctl.document().experience[0].job_title, "Engineer");
        assert!(ctl.document().experience[0].company.is_empty());

        assert!(ctl.edit(|doc| experience::remove_experience(doc, id)));
        assert!(ctl.document().experience.is_empty());

        // The removal is already persisted — no unsaved window to undo from.
        assert!(store.load().unwrap().data.experience.is_empty());
    }
}
