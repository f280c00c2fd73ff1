//! HTML export of completed deliverables. The generator emits markdown-style
//! text (headings, bullet lists, paragraphs); this module renders it with a
//! small line-based pass rather than a full markdown engine.

use crate::action::Action;
use crate::error::{Result, WarroomError};
use crate::incident::Incident;
use crate::io::{atomic_write, ensure_dir};
use crate::paths;
use std::path::{Path, PathBuf};

/// Render an action's deliverable as a standalone HTML document. Fails if the
/// deliverable has no content yet.
pub fn render_deliverable(incident: &Incident, action: &Action) -> Result<String> {
    let deliverable = &action.deliverable;
    if deliverable.is_empty() {
        return Err(WarroomError::DeliverableEmpty(action.title.clone()));
    }

    let mut html = String::new();
    html.push_str("<!DOCTYPE html>\n<html>\n<head>\n");
    html.push_str("<meta charset=\"utf-8\">\n");
    html.push_str(&format!("<title>{}</title>\n", escape(&deliverable.title)));
    html.push_str("</head>\n<body>\n");
    html.push_str(&format!("<h1>{}</h1>\n", escape(&deliverable.title)));
    html.push_str(&format!(
        "<p class=\"meta\">Incident: {} · Role: {} · Source: {}</p>\n",
        escape(&incident.title),
        action.role,
        deliverable.source,
    ));

    html.push_str(&render_body(&deliverable.content));

    if !deliverable.citations.is_empty() {
        html.push_str("<h2>Citations</h2>\n<ul>\n");
        for citation in &deliverable.citations {
            html.push_str(&format!("<li>{}</li>\n", escape(citation)));
        }
        html.push_str("</ul>\n");
    }

    html.push_str("</body>\n</html>\n");
    Ok(html)
}

/// Render and write the deliverable under `.warroom/exports/`, returning the
/// written path.
pub fn export_deliverable(root: &Path, incident: &Incident, action: &Action) -> Result<PathBuf> {
    let html = render_deliverable(incident, action)?;
    let dir = paths::exports_dir(root);
    ensure_dir(&dir)?;
    let path = dir.join(format!("{}-{}.html", incident.slug, action.id));
    atomic_write(&path, html.as_bytes())?;
    Ok(path)
}

fn render_body(content: &str) -> String {
    let mut out = String::new();
    let mut in_list = false;
    let mut paragraph: Vec<&str> = Vec::new();

    let mut flush_paragraph = |out: &mut String, paragraph: &mut Vec<&str>| {
        if !paragraph.is_empty() {
            out.push_str(&format!("<p>{}</p>\n", escape(&paragraph.join(" "))));
            paragraph.clear();
        }
    };

    for line in content.lines() {
        let trimmed = line.trim();
        if in_list && !trimmed.starts_with("- ") {
            out.push_str("</ul>\n");
            in_list = false;
        }

        if trimmed.is_empty() {
            flush_paragraph(&mut out, &mut paragraph);
        } else if let Some(heading) = trimmed.strip_prefix("## ") {
            flush_paragraph(&mut out, &mut paragraph);
            out.push_str(&format!("<h2>{}</h2>\n", escape(heading)));
        } else if let Some(heading) = trimmed.strip_prefix("# ") {
            flush_paragraph(&mut out, &mut paragraph);
            out.push_str(&format!("<h2>{}</h2>\n", escape(heading)));
        } else if let Some(item) = trimmed.strip_prefix("- ") {
            flush_paragraph(&mut out, &mut paragraph);
            if !in_list {
                out.push_str("<ul>\n");
                in_list = true;
            }
            out.push_str(&format!("<li>{}</li>\n", escape(item)));
        } else {
            paragraph.push(trimmed);
        }
    }

    flush_paragraph(&mut out, &mut paragraph);
    if in_list {
        out.push_str("</ul>\n");
    }
    out
}

fn escape(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
