//! HTML writer.
//!
//! The document is flattened into a small view model and rendered through
//! the `resume.html` askama template: the name as `<h1>`, section headings as
//! `<h2>`, runs of bullet paragraphs grouped into one `<ul>`, indents as inline
//! `margin-left`. Text and attribute values are escaped by the template.
//! Output depends only on the document and style, so the same input always
//! produces the same bytes.

use std::io::Write;

use askama::Template;

use crate::render::document::{Align, Document, Inline, Paragraph, ParagraphRole, Run};
use crate::render::style::RenderStyle;
use crate::render::RenderError;

const DEFAULT_TITLE: &str = "Resume";

#[derive(Template)]
#[template(path = "resume.html")]
struct ResumeTemplate {
    title: String,
    font_family: String,
    body_size: String,
    header: Option<ParagraphView>,
    blocks: Vec<BlockView>,
}

struct BlockView {
    title: String,
    items: Vec<BlockItem>,
}

enum BlockItem {
    Paragraph(ParagraphView),
    List(ListView),
    Spacer,
}

struct ParagraphView {
    tag: &'static str,
    centered: bool,
    style: Option<String>,
    inlines: Vec<InlineView>,
}

/// Consecutive bullets sharing one indent.
struct ListView {
    style: Option<String>,
    entries: Vec<Vec<InlineView>>,
}

struct InlineView {
    href: Option<String>,
    style: Option<String>,
    text: String,
}

/// Writes `doc` as HTML to `out`.
pub fn write_html<W: Write>(
    doc: &Document,
    style: &RenderStyle,
    out: &mut W,
) -> Result<(), RenderError> {
    let html = to_html(doc, style)?;
    out.write_all(html.as_bytes()).map_err(RenderError::Write)
}

/// Renders `doc` to an HTML string.
pub fn to_html(doc: &Document, style: &RenderStyle) -> Result<String, RenderError> {
    let template = ResumeTemplate {
        title: doc
            .header
            .as_ref()
            .map(Paragraph::text)
            .unwrap_or_else(|| DEFAULT_TITLE.to_string()),
        font_family: style.font_family.clone(),
        body_size: pt(style.body_size_pt),
        header: doc.header.as_ref().map(paragraph_view),
        blocks: doc
            .blocks
            .iter()
            .map(|block| BlockView {
                title: block.title.clone(),
                items: block_items(&block.paragraphs),
            })
            .collect(),
    };
    template.render().map_err(RenderError::Template)
}

fn block_items(paragraphs: &[Paragraph]) -> Vec<BlockItem> {
    let mut items = Vec::new();
    let mut idx = 0;
    while idx < paragraphs.len() {
        let p = &paragraphs[idx];
        match p.role {
            ParagraphRole::Bullet => {
                let end = paragraphs[idx..]
                    .iter()
                    .position(|next| {
                        next.role != ParagraphRole::Bullet || next.indent_pt != p.indent_pt
                    })
                    .map_or(paragraphs.len(), |offset| idx + offset);
                items.push(BlockItem::List(ListView {
                    style: indent_style(p.indent_pt),
                    entries: paragraphs[idx..end]
                        .iter()
                        .map(|bullet| inline_views(&bullet.inlines))
                        .collect(),
                }));
                idx = end;
            }
            ParagraphRole::Spacer => {
                items.push(BlockItem::Spacer);
                idx += 1;
            }
            _ => {
                items.push(BlockItem::Paragraph(paragraph_view(p)));
                idx += 1;
            }
        }
    }
    items
}

fn paragraph_view(p: &Paragraph) -> ParagraphView {
    ParagraphView {
        tag: match p.role {
            ParagraphRole::Title => "h1",
            ParagraphRole::Heading => "h2",
            _ => "p",
        },
        centered: p.align == Align::Center,
        style: indent_style(p.indent_pt),
        inlines: inline_views(&p.inlines),
    }
}

fn indent_style(indent_pt: f32) -> Option<String> {
    (indent_pt > 0.0).then(|| format!("margin-left: {}pt", pt(indent_pt)))
}

fn inline_views(inlines: &[Inline]) -> Vec<InlineView> {
    inlines
        .iter()
        .map(|inline| match inline {
            Inline::Text(run) => run_view(None, run),
            Inline::Link { target, run } => run_view(Some(target.clone()), run),
        })
        .collect()
}

fn run_view(href: Option<String>, run: &Run) -> InlineView {
    let mut css = Vec::new();
    if run.bold {
        css.push("font-weight: bold".to_string());
    }
    if run.underline {
        css.push("text-decoration: underline".to_string());
    }
    if let Some(size) = run.size_pt {
        css.push(format!("font-size: {}pt", pt(size)));
    }
    if let Some(color) = run.color {
        css.push(format!("color: {}", color.hex()));
    }

    InlineView {
        href,
        style: (!css.is_empty()).then(|| css.join("; ")),
        text: run.text.clone(),
    }
}

/// Formats a point size without a trailing `.0` for whole numbers.
fn pt(value: f32) -> String {
    if value.fract() == 0.0 {
        format!("{}", value as i64)
    } else {
        format!("{value}")
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
