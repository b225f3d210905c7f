//! Handlers that turn sections into documents.

use std::path::PathBuf;

use axum::{
    extract::State,
    http::header,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::errors::AppError;
use crate::models::section::{RawSection, Section};
use crate::render::{render_to_path, render_to_vec};
use crate::routes::run_blocking;
use crate::selection::{apply_selection, Selection};
use crate::state::AppState;

const DOCUMENT_EXTENSION: &str = "html";

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct RenderRequest {
    pub sections: Vec<RawSection>,
}

#[derive(Debug, Deserialize)]
pub struct GenerateRequest {
    #[serde(default)]
    pub selection: Selection,
    /// Output file name, with or without the `.html` extension.
    pub file_name: String,
}

#[derive(Debug, Serialize)]
pub struct GenerateResponse {
    pub path: String,
    pub sections_rendered: usize,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/render
///
/// Renders the posted sections as-is (no selection step) and returns the document.
pub async fn handle_render(
    State(state): State<AppState>,
    Json(request): Json<RenderRequest>,
) -> Result<Response, AppError> {
    let style = state.style.clone();
    let html = run_blocking(move || {
        let sections: Vec<Section> = request.sections.iter().map(Section::from_raw).collect();
        Ok(render_to_vec(&sections, &style)?)
    })
    .await?;

    Ok(([(header::CONTENT_TYPE, "text/html; charset=utf-8")], html).into_response())
}

/// POST /api/v1/resumes/generate
///
/// Loads the master resume, applies the selection, and writes the document
/// into the output directory.
pub async fn handle_generate(
    State(state): State<AppState>,
    Json(request): Json<GenerateRequest>,
) -> Result<Json<GenerateResponse>, AppError> {
    let file_name = output_file_name(&request.file_name)?;
    let path = state.output_dir.join(file_name);

    let store = state.store.clone();
    let output_dir = state.output_dir.clone();
    let style = state.style.clone();
    let selection = request.selection;
    let (path, sections_rendered) = run_blocking(move || {
        let master = store.load()?;
        let sections = apply_selection(&master, &selection);
        std::fs::create_dir_all(&output_dir).map_err(|e| {
            AppError::Internal(anyhow::anyhow!(
                "Failed to create output directory {}: {e}",
                output_dir.display()
            ))
        })?;
        render_to_path(&sections, &style, &path)?;
        Ok((path, sections.len()))
    })
    .await?;

    info!(
        "Generated resume {} ({} sections)",
        path.display(),
        sections_rendered
    );

    Ok(Json(GenerateResponse {
        path: path.display().to_string(),
        sections_rendered,
    }))
}

/// Validates a caller-supplied file name and appends the document extension.
/// Only a bare name is accepted: the document always lands in the output directory.
fn output_file_name(raw: &str) -> Result<PathBuf, AppError> {
    let name = raw.trim();
    if name.is_empty() {
        return Err(AppError::Validation("file_name cannot be empty".to_string()));
    }
    if name.contains(['/', '\\']) || name.contains("..") {
        return Err(AppError::Validation(format!(
            "file_name must be a bare file name: {name:?}"
        )));
    }

    let suffix = format!(".{DOCUMENT_EXTENSION}");
    if name.to_ascii_lowercase().ends_with(&suffix) {
        Ok(PathBuf::from(name))
    } else {
        Ok(PathBuf::from(format!("{name}{suffix}")))
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::routes::test_support::{send, test_app};
    use axum::http::StatusCode;
    use serde_json::json;

    #[test]
    fn test_output_file_name() {
        assert_eq!(output_file_name(" Resume ").unwrap(), PathBuf::from("Resume.html"));
        assert_eq!(output_file_name("cv.HTML").unwrap(), PathBuf::from("cv.HTML"));
        for bad in ["", "   ", "../escape", "a/b", r"a\b"] {
            assert!(
                matches!(output_file_name(bad), Err(AppError::Validation(_))),
                "{bad:?} should be rejected"
            );
        }
    }

    #[tokio::test]
    async fn test_render_endpoint_returns_html() {
        let (app, _dir) = test_app();
        let body = json!({
            "sections": [
                {"title": "Personal Information", "content": ["Jane Doe", "a@b.com"]},
                {"title": "Core Competencies", "content": ["A", "B", "C"]}
            ]
        });
        let (status, body) = send(&app, "POST", "/api/v1/render", Some(body)).await;
        assert_eq!(status, StatusCode::OK);
        let html = String::from_utf8(body).unwrap();
        assert!(html.contains("href=\"mailto:a@b.com\""));
        assert!(html.contains("A, B, C."));
    }

    #[tokio::test]
    async fn test_render_endpoint_accepts_empty_list() {
        let (app, _dir) = test_app();
        let (status, body) =
            send(&app, "POST", "/api/v1/render", Some(json!({"sections": []}))).await;
        assert_eq!(status, StatusCode::OK);
        assert!(String::from_utf8(body).unwrap().starts_with("<!DOCTYPE html>"));
    }

    #[tokio::test]
    async fn test_generate_writes_into_output_dir() {
        let (app, dir) = test_app();
        let body = json!({
            "file_name": "Custom_Resume",
            "selection": {
                "sections": {"Certifications": false},
                "items": {"Core Competencies": {"Skill 2": true}}
            }
        });
        let (status, body) = send(&app, "POST", "/api/v1/resumes/generate", Some(body)).await;
        assert_eq!(status, StatusCode::OK);

        let response: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(response["sections_rendered"], 6);

        let written = dir.path().join("output").join("Custom_Resume.html");
        let html = std::fs::read_to_string(written).unwrap();
        assert!(html.contains("Your Name Here - Resume"));
        assert!(html.contains("Skill 2."));
        assert!(!html.contains("data-title=\"Certifications\""));
    }

    #[tokio::test]
    async fn test_generate_rejects_path_in_file_name() {
        let (app, _dir) = test_app();
        let body = json!({"file_name": "../outside"});
        let (status, _) = send(&app, "POST", "/api/v1/resumes/generate", Some(body)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }
}
