//! Selection — turns the master résumé plus the caller's checkbox state into
//! the ordered section list handed to the renderer.
//!
//! Defaults when the caller says nothing about a section or item:
//! - Personal Information is included; any other section is included iff it
//!   has content.
//! - Core Competencies and Technical Projects items start unchecked; items of
//!   every other section start checked.
//! - The first objective is chosen.
//!
//! Master order is kept. Selection only removes; it never reorders or edits.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::models::section::{
    EducationEntry, EntryItem, RawSection, Section, CORE_COMPETENCIES, PERSONAL_INFORMATION,
    TECHNICAL_PROJECTS,
};

/// Key used for a role that has no subtitle.
pub const UNTITLED_ROLE_KEY: &str = "No Title";

/// Which objective ends up on the page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ObjectiveChoice {
    /// One of the stored objectives, by position.
    Index { index: usize },
    /// Free text typed by the user instead of a stored objective.
    Custom { text: String },
}

impl Default for ObjectiveChoice {
    fn default() -> Self {
        ObjectiveChoice::Index { index: 0 }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Selection {
    /// Section title → included.
    #[serde(default)]
    pub sections: HashMap<String, bool>,
    /// Section title → (item key → included).
    #[serde(default)]
    pub items: HashMap<String, HashMap<String, bool>>,
    #[serde(default)]
    pub objective: Option<ObjectiveChoice>,
}

impl Selection {
    fn section_enabled(&self, raw: &RawSection) -> bool {
        self.sections
            .get(&raw.title)
            .copied()
            .unwrap_or_else(|| raw.title == PERSONAL_INFORMATION || raw.has_content())
    }

    fn item_enabled(&self, title: &str, key: &str) -> bool {
        self.items
            .get(title)
            .and_then(|items| items.get(key))
            .copied()
            .unwrap_or_else(|| item_default(title))
    }
}

fn item_default(title: &str) -> bool {
    !matches!(title, CORE_COMPETENCIES | TECHNICAL_PROJECTS)
}

/// Applies `selection` to `master`, returning the sections to render.
pub fn apply_selection(master: &[RawSection], selection: &Selection) -> Vec<Section> {
    let selected: Vec<Section> = master
        .iter()
        .filter(|raw| selection.section_enabled(raw))
        .map(|raw| select_items(Section::from_raw(raw), selection))
        .collect();

    debug!(
        "Selection kept {}/{} sections",
        selected.len(),
        master.len()
    );
    selected
}

fn select_items(section: Section, selection: &Selection) -> Section {
    let title = section.title().to_string();
    let keep = |key: &str| selection.item_enabled(&title, key);

    match section {
        Section::PersonalInfo { .. } => section,
        Section::Objective { items } => Section::Objective {
            items: choose_objective(items, selection.objective.clone().unwrap_or_default()),
        },
        Section::Certifications { items } => Section::Certifications {
            items: keep_strings(items, keep),
        },
        Section::Competencies { items } => Section::Competencies {
            items: keep_strings(items, keep),
        },
        Section::Projects { items } => Section::Projects {
            items: keep_strings(items, keep),
        },
        Section::Education { entries } => Section::Education {
            entries: entries
                .into_iter()
                .filter(|entry: &EducationEntry| keep(entry.heading.as_str()))
                .collect(),
        },
        Section::Experience { entries } => Section::Experience {
            entries: keep_entries(entries, keep),
        },
        Section::Other { title: other, items } => Section::Other {
            items: keep_entries(items, keep),
            title: other,
        },
    }
}

fn choose_objective(items: Vec<String>, choice: ObjectiveChoice) -> Vec<String> {
    match choice {
        ObjectiveChoice::Index { index } => items.into_iter().nth(index).into_iter().collect(),
        ObjectiveChoice::Custom { text } => {
            let text = text.trim();
            if text.is_empty() {
                Vec::new()
            } else {
                vec![text.to_string()]
            }
        }
    }
}

fn keep_strings(items: Vec<String>, keep: impl Fn(&str) -> bool) -> Vec<String> {
    items.into_iter().filter(|item| keep(item.as_str())).collect()
}

fn keep_entries(items: Vec<EntryItem>, keep: impl Fn(&str) -> bool) -> Vec<EntryItem> {
    items
        .into_iter()
        .filter(|item| keep(item_key(item)))
        .collect()
}

/// Key a caller uses to toggle an experience-like item.
pub fn item_key(item: &EntryItem) -> &str {
    match item {
        EntryItem::Role(role) => role.subtitle.as_deref().unwrap_or(UNTITLED_ROLE_KEY),
        EntryItem::Text(text) => text,
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
