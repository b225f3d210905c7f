pub mod health;
pub mod master;
pub mod resumes;

use axum::{
    routing::{get, post},
    Router,
};

use crate::errors::AppError;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Master resume data
        .route(
            "/api/v1/master",
            get(master::handle_get_master).put(master::handle_put_master),
        )
        .route("/api/v1/master/reset", post(master::handle_reset_master))
        .route("/api/v1/master/templates", get(master::handle_list_templates))
        // Rendering
        .route("/api/v1/render", post(resumes::handle_render))
        .route("/api/v1/resumes/generate", post(resumes::handle_generate))
        .with_state(state)
}

/// Runs file I/O and rendering on the blocking pool.
pub(crate) async fn run_blocking<T, F>(f: F) -> Result<T, AppError>
where
    F: FnOnce() -> Result<T, AppError> + Send + 'static,
    T: Send + 'static,
{
    tokio::task::spawn_blocking(f)
        .await
        .map_err(|e| AppError::Internal(anyhow::anyhow!("spawn_blocking failed: {e}")))?
}


#[cfg(test)]
mod tests {
    use super::test_support::{send, test_app};
    use axum::http::StatusCode;

    #[tokio::test]
    async fn test_health() {
        let (app, _dir) = test_app();
        let (status, body) = send(&app, "GET", "/health", None).await;
        assert_eq!(status, StatusCode::OK);
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json["status"], "ok");
        assert_eq!(json["service"], "resume-api");
    }

    #[tokio::test]
    async fn test_unknown_route_is_404() {
        let (app, _dir) = test_app();
        let (status, _) = send(&app, "GET", "/api/v1/nope", None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }
}
