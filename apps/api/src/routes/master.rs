//! Handlers for the stored master resume.

use axum::{
    extract::{Query, State},
    Json,
};
use serde::Deserialize;
use serde_json::{json, Value};

use crate::errors::AppError;
use crate::models::section::RawSection;
use crate::routes::run_blocking;
use crate::state::AppState;
use crate::store::{template_names, DEFAULT_TEMPLATE};

#[derive(Debug, Default, Deserialize)]
pub struct ResetParams {
    /// Starter résumé to reset to; the generic template when absent.
    pub template: Option<String>,
}

/// GET /api/v1/master
pub async fn handle_get_master(
    State(state): State<AppState>,
) -> Result<Json<Vec<RawSection>>, AppError> {
    let store = state.store.clone();
    let master = run_blocking(move || Ok(store.load()?)).await?;
    Ok(Json(master))
}

/// PUT /api/v1/master
///
/// Replaces the stored resume. The body must be a list of sections with
/// non-empty, distinct titles; section content is stored as given.
pub async fn handle_put_master(
    State(state): State<AppState>,
    Json(sections): Json<Vec<RawSection>>,
) -> Result<Json<Vec<RawSection>>, AppError> {
    validate_master(&sections)?;

    let store = state.store.clone();
    let saved = run_blocking(move || {
        store.save(&sections)?;
        Ok(sections)
    })
    .await?;
    Ok(Json(saved))
}

/// POST /api/v1/master/reset?template=<name>
///
/// Overwrites the stored resume with a bundled starter resume.
pub async fn handle_reset_master(
    State(state): State<AppState>,
    Query(params): Query<ResetParams>,
) -> Result<Json<Vec<RawSection>>, AppError> {
    let template = params
        .template
        .unwrap_or_else(|| DEFAULT_TEMPLATE.to_string());
    let store = state.store.clone();
    let master = run_blocking(move || Ok(store.reset_to_template(&template)?)).await?;
    Ok(Json(master))
}

/// GET /api/v1/master/templates
pub async fn handle_list_templates() -> Json<Value> {
    Json(json!({ "templates": template_names() }))
}

/// Section titles key the selection state, so they must be present and unique.
fn validate_master(sections: &[RawSection]) -> Result<(), AppError> {
    let mut seen = std::collections::HashSet::new();
    for section in sections {
        let title = section.title.trim();
        if title.is_empty() {
            return Err(AppError::Validation(
                "section title cannot be empty".to_string(),
            ));
        }
        if !seen.insert(title) {
            return Err(AppError::Validation(format!(
                "duplicate section title: {title}"
            )));
        }
    }
    Ok(())
}
