pub mod document;
pub mod entries;

pub use document::{ColorSelection, CvDocument};
pub use entries::{
    EducationEntry, ExperienceEntry, ProjectEntry, ReferenceEntry, SkillEntry,
};
