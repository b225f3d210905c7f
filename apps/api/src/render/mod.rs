// Document rendering: selected sections → formatted résumé.
// Pure and synchronous. Async callers run it inside tokio::task::spawn_blocking.

pub mod builder;
pub mod contact;
pub mod document;
pub mod html;
pub mod style;

use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;
use thiserror::Error;
use tracing::{debug, info};

use crate::models::section::Section;

pub use builder::build_document;
pub use style::RenderStyle;

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("failed to write document: {0}")]
    Write(#[source] std::io::Error),

    #[error("failed to write document to {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to render document template: {0}")]
    Template(#[source] askama::Error),
}

/// Renders `sections` and writes the document to `destination`.
///
/// An empty section list produces a valid, empty page.
pub fn render<W: Write>(
    sections: &[Section],
    style: &RenderStyle,
    destination: &mut W,
) -> Result<(), RenderError> {
    let doc = build_document(sections, style);
    debug!(
        "Built document: {} blocks, {} paragraphs",
        doc.blocks.len(),
        doc.paragraphs().count()
    );
    html::write_html(&doc, style, destination)?;
    destination.flush().map_err(RenderError::Write)
}

/// Renders `sections` into an in-memory buffer.
pub fn render_to_vec(sections: &[Section], style: &RenderStyle) -> Result<Vec<u8>, RenderError> {
    let mut buf = Vec::new();
    render(sections, style, &mut buf)?;
    Ok(buf)
}

/// Renders `sections` to the file at `path`.
///
/// The document is written to a temporary file next to `path` and renamed
/// into place, so a failed write never leaves a truncated document behind.
/// Concurrent writers to the same path: last rename wins.
pub fn render_to_path(
    sections: &[Section],
    style: &RenderStyle,
    path: &Path,
) -> Result<(), RenderError> {
    let io_err = |source: std::io::Error| RenderError::Io {
        path: path.to_path_buf(),
        source,
    };

    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let tmp = NamedTempFile::new_in(dir).map_err(io_err)?;
    {
        let mut writer = BufWriter::new(tmp.as_file());
        render(sections, style, &mut writer).map_err(|e| match e {
            RenderError::Write(source) => io_err(source),
            other => other,
        })?;
    }
    tmp.as_file().sync_all().map_err(io_err)?;
    tmp.persist(path).map_err(|e| io_err(e.error))?;

    info!("Rendered {} sections to {}", sections.len(), path.display());
    Ok(())
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::section::{EducationEntry, EntryItem, Role};

    fn sample_sections() -> Vec<Section> {
        vec![
            Section::PersonalInfo {
                name: Some("Jane Doe".to_string()),
                contacts: vec![
                    "jane@example.com".to_string(),
                    "(847) 764-9200".to_string(),
                    "github.com/jdoe".to_string(),
                ],
            },
            Section::Objective {
                items: vec!["Build secure systems.".to_string()],
            },
            Section::Education {
                entries: vec![EducationEntry {
                    heading: "Northwestern University".to_string(),
                    details: vec!["Graduated June 2024".to_string()],
                }],
            },
            Section::Competencies {
                items: vec!["TCP/IP".to_string(), "DNS".to_string()],
            },
            Section::Experience {
                entries: vec![EntryItem::Role(Role {
                    subtitle: Some("Analyst – Acme".to_string()),
                    date: Some("2020-2022".to_string()),
                    details: vec!["Hardened <b>hosts</b>".to_string()],
                })],
            },
        ]
    }

    #[test]
    fn test_render_writes_expected_structure() {
        let html = String::from_utf8(render_to_vec(&sample_sections(), &RenderStyle::default()).unwrap())
            .unwrap();
        assert!(html.contains("<h1 class=\"center\"><span style=\"font-weight: bold; font-size: 14pt\">Jane Doe</span></h1>"));
        assert!(html.contains("href=\"tel:8477649200\""));
        assert!(html.contains("href=\"http://github.com/jdoe\""));
        assert!(html.contains("TCP/IP, DNS."));
        assert!(html.contains("Analyst – Acme (2020-2022)"));
        assert!(html.contains("<li>Hardened &lt;b&gt;hosts&lt;/b&gt;</li>"));
        assert!(html.contains("<p style=\"margin-left: 36pt\">Graduated June 2024</p>"));
    }

    #[test]
    fn test_section_order_in_output_matches_input() {
        let html = String::from_utf8(render_to_vec(&sample_sections(), &RenderStyle::default()).unwrap())
            .unwrap();
        let positions: Vec<usize> = [
            "data-title=\"Personal Information\"",
            "data-title=\"Objective\"",
            "data-title=\"Education\"",
            "data-title=\"Core Competencies\"",
            "data-title=\"Professional Experience\"",
        ]
        .iter()
        .map(|needle| html.find(needle).expect("section present"))
        .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_render_is_idempotent() {
        let style = RenderStyle::default();
        let a = render_to_vec(&sample_sections(), &style).unwrap();
        let b = render_to_vec(&sample_sections(), &style).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_empty_input_renders_valid_document() {
        let html = String::from_utf8(render_to_vec(&[], &RenderStyle::default()).unwrap()).unwrap();
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("<body>\n</body>"));
    }

    #[test]
    fn test_render_to_path_twice_is_byte_identical() {
        let dir = tempfile::tempdir().unwrap();
        let first = dir.path().join("first.html");
        let second = dir.path().join("second.html");
        let style = RenderStyle::default();

        render_to_path(&sample_sections(), &style, &first).unwrap();
        render_to_path(&sample_sections(), &style, &second).unwrap();

        assert_eq!(
            std::fs::read(&first).unwrap(),
            std::fs::read(&second).unwrap()
        );
    }

    #[test]
    fn test_render_to_path_overwrites_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("resume.html");
        std::fs::write(&path, "stale").unwrap();

        render_to_path(&[], &RenderStyle::default(), &path).unwrap();

        let html = std::fs::read_to_string(&path).unwrap();
        assert!(html.starts_with("<!DOCTYPE html>"));
    }

    #[test]
    fn test_render_to_missing_directory_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("resume.html");

        let err = render_to_path(&sample_sections(), &RenderStyle::default(), &path).unwrap_err();

        match err {
            RenderError::Io { path: failed, .. } => assert_eq!(failed, path),
            other => panic!("expected Io error, got {other:?}"),
        }
        assert!(!path.exists());
    }

    struct FailingWriter;

    impl Write for FailingWriter {
        fn write(&mut self, _buf: &[u8]) -> std::io::Result<usize> {
            Err(std::io::Error::new(std::io::ErrorKind::Other, "disk full"))
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_write_failure_is_surfaced() {
        let err = render(&sample_sections(), &RenderStyle::default(), &mut FailingWriter).unwrap_err();
        assert!(matches!(err, RenderError::Write(_)));
        assert!(err.to_string().contains("failed to write document"));
    }
}
