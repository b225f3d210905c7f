use std::path::PathBuf;

use crate::config::Config;
use crate::render::RenderStyle;
use crate::store::MasterStore;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub store: MasterStore,
    pub output_dir: PathBuf,
    /// Presentation settings for every render. Immutable after startup.
    pub style: RenderStyle,
}

impl AppState {
    pub fn from_config(config: &Config) -> Self {
        AppState {
            store: MasterStore::new(&config.data_dir),
            output_dir: config.output_dir.clone(),
            style: config.style.clone(),
        }
    }
}
