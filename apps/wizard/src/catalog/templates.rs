#![allow(dead_code)]

//! Static template catalog — the 10 CV layouts a draft can select.
//!
//! Template ids (`cv_1` .. `cv_10`) are stable: they are persisted inside
//! saved drafts, so renaming an id orphans every draft that selected it.

use serde::{Deserialize, Serialize};

// ────────────────────────────────────────────────────────────────────────────
// Catalog types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TemplateCategory {
    Modern,
    Classic,
    Creative,
    Minimal,
    Professional,
}

impl TemplateCategory {
    pub fn label(&self) -> &'static str {
        match self {
            TemplateCategory::Modern => "modern",
            TemplateCategory::Classic => "classic",
            TemplateCategory::Creative => "creative",
            TemplateCategory::Minimal => "minimal",
            TemplateCategory::Professional => "professional",
        }
    }

    /// Parses a category label (exact, lowercase). Unknown labels are `None`.
    pub fn parse(label: &str) -> Option<Self> {
        match label {
            "modern" => Some(TemplateCategory::Modern),
            "classic" => Some(TemplateCategory::Classic),
            "creative" => Some(TemplateCategory::Creative),
            "minimal" => Some(TemplateCategory::Minimal),
            "professional" => Some(TemplateCategory::Professional),
            _ => None,
        }
    }
}

/// One selectable CV layout.
#[derive(Debug, Clone, Serialize)]
pub struct TemplateSpec {
    pub id: &'static str,
    pub title: &'static str,
    pub category: TemplateCategory,
    pub description: &'static str,
    pub features: &'static [&'static str],
}

// ────────────────────────────────────────────────────────────────────────────
// Static table
// ────────────────────────────────────────────────────────────────────────────

pub static TEMPLATES: &[TemplateSpec] = &[
    TemplateSpec {
        id: "cv_1",
        title: "Horizon",
        category: TemplateCategory::Modern,
        description: "Single-column layout with a bold header band and generous whitespace",
        features: &["single column", "header band", "ATS friendly"],
    },
    TemplateSpec {
        id: "cv_2",
        title: "Broadsheet",
        category: TemplateCategory::Classic,
        description: "Traditional serif layout with ruled section dividers",
        features: &["serif headings", "section rules", "conservative"],
    },
    TemplateSpec {
        id: "cv_3",
        title: "Sidebar",
        category: TemplateCategory::Modern,
        description: "Two-column layout with a tinted sidebar for skills and contact details",
        features: &["two columns", "tinted sidebar", "skill bars"],
    },
    TemplateSpec {
        id: "cv_4",
        title: "Monogram",
        category: TemplateCategory::Creative,
        description: "Large initial monogram with accent-colored section markers",
        features: &["monogram", "accent markers", "portfolio link block"],
    },
    TemplateSpec {
        id: "cv_5",
        title: "Ledger",
        category: TemplateCategory::Professional,
        description: "Dense tabular layout for senior roles with long histories",
        features: &["compact rows", "date column", "multi-page"],
    },
    TemplateSpec {
        id: "cv_6",
        title: "Whitespace",
        category: TemplateCategory::Minimal,
        description: "Near-bare layout that lets the content carry the page",
        features: &["no rules", "single accent", "ATS friendly"],
    },
    TemplateSpec {
        id: "cv_7",
        title: "Gallery",
        category: TemplateCategory::Creative,
        description: "Project-first layout with card-style project blocks",
        features: &["project cards", "two columns", "image slots"],
    },
    TemplateSpec {
        id: "cv_8",
        title: "Chancery",
        category: TemplateCategory::Classic,
        description: "Centered header with small-caps section titles in the academic style",
        features: &["centered header", "small caps", "publication list"],
    },
    TemplateSpec {
        id: "cv_9",
        title: "Switchboard",
        category: TemplateCategory::Professional,
        description: "Executive summary up top, competency matrix below",
        features: &["summary block", "competency matrix", "conservative"],
    },
    TemplateSpec {
        id: "cv_10",
        title: "Terminal",
        category: TemplateCategory::Minimal,
        description: "Monospace-accented layout aimed at engineering roles",
        features: &["monospace accents", "single column", "skills inline"],
    },
];

pub const DEFAULT_TEMPLATE_ID: &str = "cv_1";

// ────────────────────────────────────────────────────────────────────────────
// Lookup and search
// ────────────────────────────────────────────────────────────────────────────

/// Returns the template with the given id, if it exists in the catalog.
pub fn find_template(id: &str) -> Option<&'static TemplateSpec> {
    TEMPLATES.iter().find(|t| t.id == id)
}

/// Client-side catalog search: case-insensitive substring match over
/// title + description, optionally narrowed to an exact category.
///
/// View-layer convenience only — never touches the draft document.
pub fn search_templates(
    query: &str,
    category: Option<TemplateCategory>,
) -> Vec<&'static TemplateSpec> {
    let needle = query.trim().to_lowercase();
    TEMPLATES
        .iter()
        .filter(|t| category.map_or(true, |c| t.category == c))
        .filter(|t| {
            needle.is_empty()
                || t.title.to_lowercase().contains(&needle)
                || t.description.to_lowercase().contains(&needle)
        })
        .collect()
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_catalog_has_ten_templates_with_unique_ids() {
        assert_eq!(TEMPLATES.len(), 10);
        let ids: HashSet<&str> = TEMPLATES.iter().map(|t| t.id).collect();
        assert_eq!(ids.len(), TEMPLATES.len());
    }

    #[test]
    fn test_default_template_exists() {
        assert!(find_template(DEFAULT_TEMPLATE_ID).is_some());
    }

    #[test]
    fn test_find_template_unknown_id() {
        assert!(find_template("cv_99").is_none());
        assert!(find_template("").is_none());
    }

    #[test]
    fn test_search_empty_query_returns_all() {
        assert_eq!(search_templates("", None).len(), TEMPLATES.len());
    }

    #[test]
    fn test_search_matches_title_case_insensitive() {
        let hits = search_templates("HORIZON", None);
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].id, "cv_1");
    }

    #[test]
    fn test_search_matches_description() {
        let hits = search_templates("sidebar", None);
        assert!(hits.iter().any(|t| t.id == "cv_3"));
    }

    #[test]
    fn test_search_category_is_exact() {
        let hits = search_templates("", Some(TemplateCategory::Classic));
        assert_eq!(hits.len(), 2);
        assert!(hits.iter().all(|t| t.category == TemplateCategory::Classic));
    }

    #[test]
    fn test_search_combines_query_and_category() {
        // "layout" appears in several descriptions; narrowing to Minimal
        // must drop the non-minimal hits.
        let hits = search_templates("layout", Some(TemplateCategory::Minimal));
        assert!(!hits.is_empty());
        assert!(hits.iter().all(|t| t.category == TemplateCategory::Minimal));
    }

    #[test]
    fn test_category_parse_round_trip() {
        for t in TEMPLATES {
            assert_eq!(TemplateCategory::parse(t.category.label()), Some(t.category));
        }
        assert_eq!(TemplateCategory::parse("futuristic"), None);
    }
}
