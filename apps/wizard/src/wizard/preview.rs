#![allow(dead_code)]

//! The preview boundary. The real renderer (templates, typography, color) is
//! an external collaborator; the wizard only needs somewhere to push the
//! draft after each change. `MarkdownPreview` is the bundled sink: it renders
//! a plain markdown snapshot, which is also what the CLI's `preview` command
//! prints.

use std::sync::{Arc, Mutex};

use crate::models::CvDocument;

/// Where the controller pushes the draft on every change past the style step.
pub trait PreviewSink: Send {
    fn render(&mut self, doc: &CvDocument);
}

/// Markdown-snapshot sink. Created as a pair: the sink goes to the
/// controller, the handle stays with the caller for reading back the latest
/// rendering.
pub struct MarkdownPreview {
    buffer: Arc<Mutex<Option<String>>>,
}

pub struct PreviewHandle {
    buffer: Arc<Mutex<Option<String>>>,
}

impl MarkdownPreview {
    pub fn new() -> (Self, PreviewHandle) {
        let buffer = Arc::new(Mutex::new(None));
        (
            MarkdownPreview {
                buffer: Arc::clone(&buffer),
            },
            PreviewHandle { buffer },
        )
    }
}

impl PreviewSink for MarkdownPreview {
    fn render(&mut self, doc: &CvDocument) {
        let rendered = render_markdown(doc);
        *self
            .buffer
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner()) = Some(rendered);
    }
}

impl PreviewHandle {
    /// The most recent rendering, or `None` if the sink was never refreshed.
    pub fn latest(&self) -> Option<String> {
        self.buffer
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }

    /// The most recent rendering, falling back to a fresh render when the
    /// sink has not been pushed to yet (the user has not gone past the
    /// style step).
    pub fn latest_or_render(&self, doc: &CvDocument) -> String {
        self.latest().unwrap_or_else(|| render_markdown(doc))
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Markdown rendering
// ────────────────────────────────────────────────────────────────────────────

/// Renders the draft as a markdown snapshot. Empty sections are omitted;
/// empty scalar fields render as placeholders so the structure stays visible
/// while the draft is incomplete.
pub fn render_markdown(doc: &CvDocument) -> String {
    let mut out = String::new();

    let name = placeholder(&doc.name, "(unnamed)");
    out.push_str(&format!("# {name}\n\n"));
    out.push_str(&format!(
        "{} | {}\n\n",
        placeholder(&doc.email, "(no email)"),
        placeholder(&doc.phone, "(no phone)")
    ));
    if !doc.cv_track.is_empty() {
        out.push_str(&format!("Track: {}\n\n", doc.cv_track));
    }
    out.push_str(&format!(
        "_Template {} · font {} · spacing {} ({}x) · colors {} {} {}{}_\n",
        doc.layout,
        doc.font,
        doc.spacing,
        doc.spacing_value,
        doc.colors.primary,
        doc.colors.secondary,
        doc.colors.accent,
        if doc.colors.is_custom { " (custom)" } else { "" },
    ));

    if !doc.experience.is_empty() {
        out.push_str("\n## Experience\n");
        for entry in &doc.experience {
            out.push_str(&format!(
                "\n### {} — {}\n",
                placeholder(&entry.job_title, "(untitled role)"),
                placeholder(&entry.company, "(company)")
            ));
            out.push_str(&format!(
                "{} · {} – {}\n",
                placeholder(&entry.location, "(location)"),
                placeholder(&entry.start_date, "?"),
                placeholder(&entry.end_date, "?")
            ));
            if !entry.description.is_empty() {
                out.push_str(&format!("{}\n", entry.description));
            }
            for achievement in &entry.achievements {
                out.push_str(&format!("- {achievement}\n"));
            }
        }
    }

    if !doc.education.is_empty() {
        out.push_str("\n## Education\n");
        for entry in &doc.education {
            out.push_str(&format!(
                "- {}, {} {} ({} – {})\n",
                placeholder(&entry.institution, "(institution)"),
                entry.degree,
                entry.field,
                placeholder(&entry.start_date, "?"),
                placeholder(&entry.end_date, "?")
            ));
        }
    }

    if !doc.skills.is_empty() {
        out.push_str("\n## Skills\n");
        for entry in &doc.skills {
            if entry.level.is_empty() {
                out.push_str(&format!("- {}\n", entry.name));
            } else {
                out.push_str(&format!("- {} ({})\n", entry.name, entry.level));
            }
        }
    }

    if !doc.projects.is_empty() {
        out.push_str("\n## Projects\n");
        for entry in &doc.projects {
            out.push_str(&format!(
                "- **{}** {}",
                placeholder(&entry.name, "(project)"),
                entry.description
            ));
            if !entry.technologies.is_empty() {
                out.push_str(&format!(" [{}]", entry.technologies.join(", ")));
            }
            if !entry.url.is_empty() {
                out.push_str(&format!(" <{}>", entry.url));
            }
            out.push('\n');
        }
    }

    if !doc.references.is_empty() {
        out.push_str("\n## References\n");
        for entry in &doc.references {
            out.push_str(&format!(
                "- {} ({}) — {}\n",
                entry.name, entry.relationship, entry.contact
            ));
        }
    }

    out
}

fn placeholder<'a>(value: &'a str, fallback: &'a str) -> &'a str {
    if value.is_empty() {
        fallback
    } else {
        value
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wizard::experience;
    use crate::wizard::sections;

    #[test]
    fn test_render_default_document_shows_placeholders() {
        let rendered = render_markdown(&CvDocument::default());
        assert!(rendered.contains("(unnamed)"));
        assert!(rendered.contains("cv_1"));
        assert!(!rendered.contains("## Experience"));
    }

    #[test]
    fn test_render_includes_populated_sections() {
        let mut doc = CvDocument::default();
        doc.name = "Ada Lovelace".to_string();
        let id = experience::add_experience(&mut doc);
        experience::update_field(&mut doc, id, experience::ExperienceField::JobTitle, "Analyst");
        experience::add_achievement(&mut doc, id);
        experience::update_achievement(&mut doc, id, 0, "Wrote the first program");
        let skill = sections::add_skill(&mut doc);
        sections::update_skill(&mut doc, skill, |s| s.name = "Mathematics".to_string());

        let rendered = render_markdown(&doc);
        assert!(rendered.contains("# Ada Lovelace"));
        assert!(rendered.contains("### Analyst"));
        assert!(rendered.contains("- Wrote the first program"));
        assert!(rendered.contains("- Mathematics"));
    }

    #[test]
    fn test_custom_colors_flagged_in_header() {
        let mut doc = CvDocument::default();
        doc.colors.is_custom = true;
        assert!(render_markdown(&doc).contains("(custom)"));
    }

    #[test]
    fn test_latest_or_render_falls_back_before_first_push() {
        let (mut sink, handle) = MarkdownPreview::new();
        let mut doc = CvDocument::default();
        doc.name = "Ada".to_string();

        // Nothing pushed yet — render the current draft directly.
        assert!(handle.latest_or_render(&doc).contains("# Ada"));

        // Once the sink has been pushed to, the handle serves the live copy.
        sink.render(&doc);
        doc.name = "Grace".to_string();
        assert!(handle.latest_or_render(&doc).contains("# Ada"));
    }

    #[test]
    fn test_sink_and_handle_share_latest_rendering() {
        let (mut sink, handle) = MarkdownPreview::new();
        assert!(handle.latest().is_none());

        let mut doc = CvDocument::default();
        doc.name = "Grace".to_string();
        sink.render(&doc);
        assert!(handle.latest().unwrap().contains("# Grace"));
    }
}
