#![allow(dead_code)]

//! Draft persistence boundary — a thin key-value store for the in-progress CV.
//!
//! Reading is best-effort by contract: a missing file, unreadable file, or
//! malformed payload all collapse to "no saved draft" (`None`), logged but
//! never surfaced. Writing overwrites whatever was there; no partial-write or
//! transactional guarantee is provided (single consumer, single session).
//!
//! The store is injected into the wizard controller as `Box<dyn DraftStore>`
//! so the wizard is testable against the in-memory fake.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::errors::WizardError;
use crate::models::CvDocument;

// ────────────────────────────────────────────────────────────────────────────
// Envelope
// ────────────────────────────────────────────────────────────────────────────

/// The persisted wrapper pairing a draft with the step the user was on.
///
/// Wire shape: `{ "data": <document>, "step": <n>, "saved_at": <rfc3339> }`.
/// `saved_at` is additive metadata with a serde default, so an envelope
/// without it still loads.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DraftEnvelope {
    pub data: CvDocument,
    pub step: usize,
    #[serde(default = "Utc::now")]
    pub saved_at: DateTime<Utc>,
}

impl DraftEnvelope {
    pub fn new(data: CvDocument, step: usize) -> Self {
        DraftEnvelope {
            data,
            step,
            saved_at: Utc::now(),
        }
    }

    /// Checks the envelope invariant: `step` is a positive integer within the
    /// wizard's step range. Called on restore; a violating envelope is
    /// discarded in favor of a fresh draft.
    pub fn validate(&self, total_steps: usize) -> Result<(), WizardError> {
        if self.step < 1 || self.step > total_steps {
            return Err(WizardError::Validation(format!(
                "saved step {} outside [1, {total_steps}]",
                self.step
            )));
        }
        Ok(())
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Store trait
// ────────────────────────────────────────────────────────────────────────────

pub trait DraftStore: Send + Sync {
    /// Returns the saved envelope, or `None` when nothing usable is stored.
    /// Never returns an error — read failures are logged and swallowed.
    fn load(&self) -> Option<DraftEnvelope>;

    /// Serializes and writes the envelope, overwriting any prior value.
    fn save(&self, envelope: &DraftEnvelope) -> Result<(), WizardError>;
}

// ────────────────────────────────────────────────────────────────────────────
// File-backed store
// ────────────────────────────────────────────────────────────────────────────

/// Persists the envelope as a single JSON file at a fixed path — the desktop
/// analog of the browser's local-storage slot.
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        JsonFileStore { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl DraftStore for JsonFileStore {
    fn load(&self) -> Option<DraftEnvelope> {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                debug!("no saved draft at {}", self.path.display());
                return None;
            }
            Err(e) => {
                warn!("could not read draft at {}: {e}", self.path.display());
                return None;
            }
        };

        match serde_json::from_str(&raw) {
            Ok(envelope) => Some(envelope),
            Err(e) => {
                warn!(
                    "discarding malformed draft at {}: {e}",
                    self.path.display()
                );
                None
            }
        }
    }

    fn save(&self, envelope: &DraftEnvelope) -> Result<(), WizardError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        let raw = serde_json::to_string_pretty(envelope)?;
        fs::write(&self.path, raw)?;
        Ok(())
    }
}

// ────────────────────────────────────────────────────────────────────────────
// In-memory store
// ────────────────────────────────────────────────────────────────────────────

/// In-memory fake. Round-trips through the same JSON serialization as the
/// file store so corruption behavior is representative. Clones share the
/// slot, letting tests inspect what the wizard persisted.
#[derive(Clone, Default)]
pub struct MemoryStore {
    slot: Arc<Mutex<Option<String>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// A store pre-seeded with a raw payload (valid or not).
    pub fn with_raw(raw: &str) -> Self {
        MemoryStore {
            slot: Arc::new(Mutex::new(Some(raw.to_string()))),
        }
    }

    /// The raw payload currently stored, if any.
    pub fn raw(&self) -> Option<String> {
        self.lock().clone()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Option<String>> {
        // A poisoned lock only means a test panicked mid-write; the slot
        // itself is still a plain Option.
        self.slot.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl DraftStore for MemoryStore {
    fn load(&self) -> Option<DraftEnvelope> {
        let raw = self.lock().clone()?;
        match serde_json::from_str(&raw) {
            Ok(envelope) => Some(envelope),
            Err(e) => {
                warn!("discarding malformed in-memory draft: {e}");
                None
            }
        }
    }

    fn save(&self, envelope: &DraftEnvelope) -> Result<(), WizardError> {
        let raw = serde_json::to_string(envelope)?;
        *self.lock() = Some(raw);
        Ok(())
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
