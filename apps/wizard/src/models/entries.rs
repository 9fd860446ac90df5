#![allow(dead_code)]

//! Typed section entries. Each entry carries a v4 UUID assigned at creation —
//! the id is how step editors address an entry, never its position.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExperienceEntry {
    pub id: Uuid,
    pub job_title: String,
    pub company: String,
    pub location: String,
    /// Free-text dates ("Jan 2022", "present") — never parsed or compared.
    pub start_date: String,
    pub end_date: String,
    pub description: String,
    pub achievements: Vec<String>,
}

impl ExperienceEntry {
    pub fn new() -> Self {
        ExperienceEntry {
            id: Uuid::new_v4(),
            job_title: String::new(),
            company: String::new(),
            location: String::new(),
            start_date: String::new(),
            end_date: String::new(),
            description: String::new(),
            achievements: vec![],
        }
    }
}

impl Default for ExperienceEntry {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EducationEntry {
    pub id: Uuid,
    pub institution: String,
    pub degree: String,
    pub field: String,
    pub start_date: String,
    pub end_date: String,
}

impl EducationEntry {
    pub fn new() -> Self {
        EducationEntry {
            id: Uuid::new_v4(),
            institution: String::new(),
            degree: String::new(),
            field: String::new(),
            start_date: String::new(),
            end_date: String::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkillEntry {
    pub id: Uuid,
    pub name: String,
    pub level: String,
}

impl SkillEntry {
    pub fn new() -> Self {
        SkillEntry {
            id: Uuid::new_v4(),
            name: String::new(),
            level: String::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectEntry {
    pub id: Uuid,
    pub name: String,
    pub description: String,
    pub url: String,
    pub technologies: Vec<String>,
}

impl ProjectEntry {
    pub fn new() -> Self {
        ProjectEntry {
            id: Uuid::new_v4(),
            name: String::new(),
            description: String::new(),
            url: String::new(),
            technologies: vec![],
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReferenceEntry {
    pub id: Uuid,
    pub name: String,
    pub relationship: String,
    pub contact: String,
}

impl ReferenceEntry {
    pub fn new() -> Self {
        ReferenceEntry {
            id: Uuid::new_v4(),
            name: String::new(),
            relationship: String::new(),
            contact: String::new(),
        }
    }
}
