#![allow(dead_code)]

//! Work Experience step operations — CRUD over `document.experience` and the
//! per-entry achievement bullets.
//!
//! Entries are addressed by id, never by position; an operation against an
//! id that is not present changes nothing and reports `false`. Achievement
//! indices are bounds-checked the same way. No cross-entry validation is
//! performed — overlapping date ranges and empty strings are all accepted.

use std::str::FromStr;

use uuid::Uuid;

use crate::models::{CvDocument, ExperienceEntry};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExperienceField {
    JobTitle,
    Company,
    Location,
    StartDate,
    EndDate,
    Description,
}

impl FromStr for ExperienceField {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "job_title" | "title" => Ok(ExperienceField::JobTitle),
            "company" => Ok(ExperienceField::Company),
            "location" => Ok(ExperienceField::Location),
            "start_date" | "start" => Ok(ExperienceField::StartDate),
            "end_date" | "end" => Ok(ExperienceField::EndDate),
            "description" => Ok(ExperienceField::Description),
            _ => Err(()),
        }
    }
}

/// Appends a fresh all-empty entry and returns its generated id.
pub fn add_experience(doc: &mut CvDocument) -> Uuid {
    let entry = ExperienceEntry::new();
    let id = entry.id;
    doc.experience.push(entry);
    id
}

/// Replaces one scalar field on the entry with the given id. Entries with a
/// different id are untouched.
pub fn update_field(doc: &mut CvDocument, id: Uuid, field: ExperienceField, value: &str) -> bool {
    let Some(entry) = entry_mut(doc, id) else {
        return false;
    };
    let slot = match field {
        ExperienceField::JobTitle => &mut entry.job_title,
        ExperienceField::Company => &mut entry.company,
        ExperienceField::Location => &mut entry.location,
        ExperienceField::StartDate => &mut entry.start_date,
        ExperienceField::EndDate => &mut entry.end_date,
        ExperienceField::Description => &mut entry.description,
    };
    *slot = value.to_string();
    true
}

/// Removes the entry with the given id. Irreversible from the caller's side:
/// the draft persists after every change, so there is no unsaved state to
/// fall back to.
pub fn remove_experience(doc: &mut CvDocument, id: Uuid) -> bool {
    let before = doc.experience.len();
    doc.experience.retain(|e| e.id != id);
    doc.experience.len() != before
}

/// Appends an empty achievement bullet to the entry with the given id.
pub fn add_achievement(doc: &mut CvDocument, id: Uuid) -> bool {
    match entry_mut(doc, id) {
        Some(entry) => {
            entry.achievements.push(String::new());
            true
        }
        None => false,
    }
}

/// Replaces the achievement at `index`. Out-of-range indices are rejected
/// rather than left undefined.
pub fn update_achievement(doc: &mut CvDocument, id: Uuid, index: usize, value: &str) -> bool {
    match entry_mut(doc, id).and_then(|e| e.achievements.get_mut(index)) {
        Some(slot) => {
            *slot = value.to_string();
            true
        }
        None => false,
    }
}

/// Removes the achievement at `index`, shifting later bullets down.
pub fn remove_achievement(doc: &mut CvDocument, id: Uuid, index: usize) -> bool {
    match entry_mut(doc, id) {
        Some(entry) if index < entry.achievements.len() => {
            entry.achievements.remove(index);
            true
        }
        _ => false,
    }
}

fn entry_mut(doc: &mut CvDocument, id: Uuid) -> Option<&mut ExperienceEntry> {
    doc.experience.iter_mut().find(|e| e.id == id)
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
