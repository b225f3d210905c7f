//! Master résumé storage: a single `data.json` under the data directory.
//!
//! Writes go through a temp file in the same directory and are renamed into
//! place. A reader never sees a half-written file.

use std::io::Write;
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;
use thiserror::Error;
use tracing::info;

use crate::models::section::RawSection;

pub const DATA_FILE_NAME: &str = "data.json";

/// Shipped template résumé, used to seed a fresh data directory and for resets.
pub const DEFAULT_MASTER_JSON: &str = include_str!("../data/default_master.json");

pub const DEFAULT_TEMPLATE: &str = "default";

/// Starter résumés a caller can reset to, by name.
const TEMPLATES: &[(&str, &str)] = &[
    (DEFAULT_TEMPLATE, DEFAULT_MASTER_JSON),
    (
        "cybersecurity_analyst",
        include_str!("../data/templates/cybersecurity_analyst.json"),
    ),
    (
        "it_systems_administrator",
        include_str!("../data/templates/it_systems_administrator.json"),
    ),
    (
        "security_engineer",
        include_str!("../data/templates/security_engineer.json"),
    ),
];

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{path} is not a valid section list: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to serialize master resume: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("unknown resume template: {0}")]
    UnknownTemplate(String),
}

#[derive(Debug, Clone)]
pub struct MasterStore {
    data_dir: PathBuf,
}

impl MasterStore {
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        MasterStore {
            data_dir: data_dir.into(),
        }
    }

    pub fn data_path(&self) -> PathBuf {
        self.data_dir.join(DATA_FILE_NAME)
    }

    /// Creates the data directory and seeds `data.json` from the default
    /// résumé if it does not exist yet. Existing data is left alone.
    pub fn ensure_initialized(&self) -> Result<(), StoreError> {
        std::fs::create_dir_all(&self.data_dir).map_err(|source| StoreError::Io {
            path: self.data_dir.clone(),
            source,
        })?;

        let path = self.data_path();
        if !path.exists() {
            write_atomic(&path, DEFAULT_MASTER_JSON.as_bytes())?;
            info!("Seeded {} with the default resume", path.display());
        }
        Ok(())
    }

    pub fn load(&self) -> Result<Vec<RawSection>, StoreError> {
        let path = self.data_path();
        let bytes = std::fs::read(&path).map_err(|source| StoreError::Io {
            path: path.clone(),
            source,
        })?;
        serde_json::from_slice(&bytes).map_err(|source| StoreError::Parse { path, source })
    }

    pub fn save(&self, sections: &[RawSection]) -> Result<(), StoreError> {
        let mut json = serde_json::to_vec_pretty(sections)?;
        json.push(b'\n');
        write_atomic(&self.data_path(), &json)?;
        info!("Saved master resume ({} sections)", sections.len());
        Ok(())
    }

    /// Replaces `data.json` with the named starter résumé and returns it.
    pub fn reset_to_template(&self, name: &str) -> Result<Vec<RawSection>, StoreError> {
        let json =
            template_json(name).ok_or_else(|| StoreError::UnknownTemplate(name.to_string()))?;
        let sections = parse_template(name, json)?;
        write_atomic(&self.data_path(), json.as_bytes())?;
        info!("Reset master resume to template {name}");
        Ok(sections)
    }
}

/// Names of the bundled starter résumés, default first.
pub fn template_names() -> Vec<&'static str> {
    TEMPLATES.iter().map(|(name, _)| *name).collect()
}

fn template_json(name: &str) -> Option<&'static str> {
    TEMPLATES
        .iter()
        .find(|(candidate, _)| *candidate == name)
        .map(|(_, json)| *json)
}

fn parse_template(name: &str, json: &str) -> Result<Vec<RawSection>, StoreError> {
    serde_json::from_str(json).map_err(|source| StoreError::Parse {
        path: PathBuf::from(format!("{name}.json")),
        source,
    })
}

/// The built-in default résumé, parsed.
#[cfg(test)]
pub fn default_master() -> Result<Vec<RawSection>, StoreError> {
    parse_template(DEFAULT_TEMPLATE, DEFAULT_MASTER_JSON)
}

fn write_atomic(path: &Path, bytes: &[u8]) -> Result<(), StoreError> {
    let io_err = |source: std::io::Error| StoreError::Io {
        path: path.to_path_buf(),
        source,
    };
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut tmp = NamedTempFile::new_in(dir).map_err(io_err)?;
    tmp.write_all(bytes).map_err(io_err)?;
    tmp.as_file().sync_all().map_err(io_err)?;
    tmp.persist(path).map_err(|e| io_err(e.error))?;
    Ok(())
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
