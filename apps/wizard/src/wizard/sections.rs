#![allow(dead_code)]

//! Education & Skills step operations — CRUD over the remaining section
//! arrays (education, skills, projects, references). Same addressing rules
//! as the experience step: by id, unknown ids change nothing. Updates take a
//! closure instead of a per-type field enum; these sections have no field
//! surface beyond "edit the entry".

use uuid::Uuid;

use crate::models::{
    CvDocument, EducationEntry, ProjectEntry, ReferenceEntry, SkillEntry,
};

pub fn add_education(doc: &mut CvDocument) -> Uuid {
    let entry = EducationEntry::new();
    let id = entry.id;
    doc.education.push(entry);
    id
}

pub fn update_education(
    doc: &mut CvDocument,
    id: Uuid,
    f: impl FnOnce(&mut EducationEntry),
) -> bool {
    apply(doc.education.iter_mut().find(|e| e.id == id), f)
}

pub fn remove_education(doc: &mut CvDocument, id: Uuid) -> bool {
    remove_by_id(&mut doc.education, |e| e.id == id)
}

pub fn add_skill(doc: &mut CvDocument) -> Uuid {
    let entry = SkillEntry::new();
    let id = entry.id;
    doc.skills.push(entry);
    id
}

pub fn update_skill(doc: &mut CvDocument, id: Uuid, f: impl FnOnce(&mut SkillEntry)) -> bool {
    apply(doc.skills.iter_mut().find(|e| e.id == id), f)
}

pub fn remove_skill(doc: &mut CvDocument, id: Uuid) -> bool {
    remove_by_id(&mut doc.skills, |e| e.id == id)
}

pub fn add_project(doc: &mut CvDocument) -> Uuid {
    let entry = ProjectEntry::new();
    let id = entry.id;
    doc.projects.push(entry);
    id
}

pub fn update_project(doc: &mut CvDocument, id: Uuid, f: impl FnOnce(&mut ProjectEntry)) -> bool {
    apply(doc.projects.iter_mut().find(|e| e.id == id), f)
}

pub fn remove_project(doc: &mut CvDocument, id: Uuid) -> bool {
    remove_by_id(&mut doc.projects, |e| e.id == id)
}

pub fn add_reference(doc: &mut CvDocument) -> Uuid {
    let entry = ReferenceEntry::new();
    let id = entry.id;
    doc.references.push(entry);
    id
}

pub fn update_reference(
    doc: &mut CvDocument,
    id: Uuid,
    f: impl FnOnce(&mut ReferenceEntry),
) -> bool {
    apply(doc.references.iter_mut().find(|e| e.id == id), f)
}

pub fn remove_reference(doc: &mut CvDocument, id: Uuid) -> bool {
    remove_by_id(&mut doc.references, |e| e.id == id)
}

fn apply<T>(slot: Option<&mut T>, f: impl FnOnce(&mut T)) -> bool {
    match slot {
        Some(entry) => {
            f(entry);
            true
        }
        None => false,
    }
}

fn remove_by_id<T>(entries: &mut Vec<T>, matches: impl Fn(&T) -> bool) -> bool {
    let before = entries.len();
    entries.retain(|e| !matches(e));
    entries.len() != before
}
