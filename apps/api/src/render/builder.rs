//! Section → document dispatch.
//!
//! One pass over the input, one [`SectionBlock`] per section, in input order.
//! No sorting, deduplication or filtering happens here; the selection step
//! upstream decides what is in the list.

use crate::models::section::{EducationEntry, EntryItem, Role, Section};
use crate::render::contact::contact_token;
use crate::render::document::{Document, Inline, Paragraph, ParagraphRole, Run, SectionBlock};
use crate::render::style::RenderStyle;

/// Builds the document for `sections`. Total over every `Section` value.
pub fn build_document(sections: &[Section], style: &RenderStyle) -> Document {
    let header = if style.page_header {
        page_header(sections, style)
    } else {
        None
    };

    let blocks = sections
        .iter()
        .map(|section| SectionBlock {
            title: section.title().to_string(),
            paragraphs: section_paragraphs(section, style),
        })
        .collect();

    Document { header, blocks }
}

/// `"<Name> - Resume"` from the first Personal Information section with a name.
fn page_header(sections: &[Section], style: &RenderStyle) -> Option<Paragraph> {
    let name = sections.iter().find_map(|section| match section {
        Section::PersonalInfo { name: Some(name), .. } if !name.trim().is_empty() => {
            Some(name.trim())
        }
        _ => None,
    })?;

    let run = Run::plain(format!("{name} - Resume"))
        .bold()
        .underline()
        .sized(style.page_header_size_pt)
        .colored(style.link_color);
    Some(Paragraph::body(run).centered())
}

fn section_paragraphs(section: &Section, style: &RenderStyle) -> Vec<Paragraph> {
    let mut out = Vec::new();

    if let Section::PersonalInfo { name, contacts } = section {
        personal_info(name.as_deref(), contacts, style, &mut out);
        return out;
    }

    out.push(heading(section.title(), style));

    match section {
        Section::PersonalInfo { .. } => {}
        Section::Objective { items } | Section::Certifications { items } => {
            out.extend(items.iter().map(|item| Paragraph::body(Run::plain(item))));
        }
        Section::Competencies { items } => {
            out.push(Paragraph::body(Run::plain(competency_sentence(items))));
        }
        Section::Education { entries } => {
            for entry in entries {
                education_entry(entry, style, &mut out);
            }
        }
        Section::Experience { entries } => {
            for item in entries {
                entry_item(item, style.role_size_pt, style, &mut out);
            }
        }
        Section::Projects { items } => {
            out.extend(items.iter().map(|item| bullet(item, style)));
        }
        Section::Other { items, .. } => {
            for item in items {
                entry_item(item, style.other_role_size_pt, style, &mut out);
            }
        }
    }

    out
}

fn personal_info(
    name: Option<&str>,
    contacts: &[String],
    style: &RenderStyle,
    out: &mut Vec<Paragraph>,
) {
    if let Some(name) = name {
        let run = Run::plain(name).bold().sized(style.name_size_pt);
        out.push(Paragraph::new(ParagraphRole::Title).with(Inline::Text(run)).centered());
    }

    if !contacts.is_empty() {
        let mut line = Paragraph::new(ParagraphRole::Body).centered();
        for (idx, raw) in contacts.iter().enumerate() {
            if idx > 0 {
                line = line.with(Inline::Text(Run::plain(&style.contact_separator)));
            }
            let token = contact_token(raw);
            line = line.with(match token.target() {
                Some(target) => Inline::Link {
                    target,
                    run: Run::plain(token.text).underline().colored(style.link_color),
                },
                None => Inline::Text(Run::plain(token.text)),
            });
        }
        out.push(line);
    }

    out.push(Paragraph::spacer());
}

fn heading(title: &str, style: &RenderStyle) -> Paragraph {
    let run = Run::plain(title)
        .bold()
        .underline()
        .sized(style.heading_size_pt);
    Paragraph::new(ParagraphRole::Heading).with(Inline::Text(run))
}

/// `["A", "B", "C"]` → `"A, B, C."`
pub fn competency_sentence(items: &[String]) -> String {
    format!("{}.", items.join(", "))
}

fn education_entry(entry: &EducationEntry, style: &RenderStyle, out: &mut Vec<Paragraph>) {
    if !entry.heading.is_empty() {
        out.push(Paragraph::body(Run::plain(&entry.heading)));
    }
    out.extend(
        entry
            .details
            .iter()
            .map(|detail| Paragraph::body(Run::plain(detail)).indented(style.detail_indent_pt)),
    );
}

fn entry_item(item: &EntryItem, role_size_pt: f32, style: &RenderStyle, out: &mut Vec<Paragraph>) {
    match item {
        EntryItem::Role(role) => role_paragraphs(role, role_size_pt, style, out),
        EntryItem::Text(text) => out.push(Paragraph::body(Run::plain(text))),
    }
}

fn role_paragraphs(role: &Role, role_size_pt: f32, style: &RenderStyle, out: &mut Vec<Paragraph>) {
    if let Some(line) = role.heading_line() {
        out.push(Paragraph::body(Run::plain(line).bold().sized(role_size_pt)));
    }
    out.extend(role.details.iter().map(|detail| bullet(detail, style)));
}

fn bullet(text: &str, style: &RenderStyle) -> Paragraph {
    Paragraph::new(ParagraphRole::Bullet)
        .with(Inline::Text(Run::plain(text)))
        .indented(style.bullet_indent_pt)
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
