//! Résumé section model.
//!
//! Two layers:
//! - [`RawSection`] is what lives in `data.json` and what callers post:
//!   a title plus an untyped JSON `content` value. Unknown keys are kept.
//! - [`Section`] is the closed sum type the renderer dispatches on. Each
//!   variant carries a typed payload for its title.
//!
//! Conversion from raw to typed never fails. Partially edited data (a role
//! without a date, an education entry stored as a bare string) keeps
//! whatever fields are present.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

pub const PERSONAL_INFORMATION: &str = "Personal Information";
pub const OBJECTIVE: &str = "Objective";
pub const CERTIFICATIONS: &str = "Certifications";
pub const EDUCATION: &str = "Education";
pub const CORE_COMPETENCIES: &str = "Core Competencies";
pub const PROFESSIONAL_EXPERIENCE: &str = "Professional Experience";
pub const TECHNICAL_PROJECTS: &str = "Technical Projects";

// ────────────────────────────────────────────────────────────────────────────
// Raw form
// ────────────────────────────────────────────────────────────────────────────

/// A section as stored on disk or received over the wire.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawSection {
    pub title: String,
    #[serde(default = "empty_list")]
    pub content: Value,
    /// Keys other than `title`/`content` (window geometry, font sizes, ...).
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

fn empty_list() -> Value {
    Value::Array(Vec::new())
}

impl RawSection {
    #[cfg(test)]
    pub fn new(title: impl Into<String>, content: Value) -> Self {
        RawSection {
            title: title.into(),
            content,
            extra: Map::new(),
        }
    }

    /// Content as a list. A scalar or object is treated as a one-element list.
    pub fn items(&self) -> Vec<&Value> {
        match &self.content {
            Value::Array(items) => items.iter().collect(),
            Value::Null => Vec::new(),
            other => vec![other],
        }
    }

    pub fn has_content(&self) -> bool {
        !self.items().is_empty()
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Typed form
// ────────────────────────────────────────────────────────────────────────────

/// One education entry: the institution/program line and its detail lines.
#[derive(Debug, Clone, PartialEq)]
pub struct EducationEntry {
    pub heading: String,
    pub details: Vec<String>,
}

/// A dated role (job, position, or any `{subtitle, date, details}` record).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Role {
    pub subtitle: Option<String>,
    pub date: Option<String>,
    pub details: Vec<String>,
}

impl Role {
    /// The bold role line: `"{subtitle} ({date})"`, degrading to whichever
    /// half is present. `None` when the record has neither.
    pub fn heading_line(&self) -> Option<String> {
        match (non_blank(&self.subtitle), non_blank(&self.date)) {
            (Some(subtitle), Some(date)) => Some(format!("{subtitle} ({date})")),
            (Some(subtitle), None) => Some(subtitle.to_string()),
            (None, Some(date)) => Some(format!("({date})")),
            (None, None) => None,
        }
    }
}

fn non_blank(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|s| !s.trim().is_empty())
}

/// Item of an experience-like list: a structured role or a loose line of text.
#[derive(Debug, Clone, PartialEq)]
pub enum EntryItem {
    Role(Role),
    Text(String),
}

/// A résumé section with its title-specific payload.
#[derive(Debug, Clone, PartialEq)]
pub enum Section {
    PersonalInfo {
        name: Option<String>,
        contacts: Vec<String>,
    },
    Objective {
        items: Vec<String>,
    },
    Certifications {
        items: Vec<String>,
    },
    Education {
        entries: Vec<EducationEntry>,
    },
    Competencies {
        items: Vec<String>,
    },
    Experience {
        entries: Vec<EntryItem>,
    },
    Projects {
        items: Vec<String>,
    },
    Other {
        title: String,
        items: Vec<EntryItem>,
    },
}

impl Section {
    /// The title this section was (or would be) stored under.
    pub fn title(&self) -> &str {
        match self {
            Section::PersonalInfo { .. } => PERSONAL_INFORMATION,
            Section::Objective { .. } => OBJECTIVE,
            Section::Certifications { .. } => CERTIFICATIONS,
            Section::Education { .. } => EDUCATION,
            Section::Competencies { .. } => CORE_COMPETENCIES,
            Section::Experience { .. } => PROFESSIONAL_EXPERIENCE,
            Section::Projects { .. } => TECHNICAL_PROJECTS,
            Section::Other { title, .. } => title,
        }
    }

    /// Builds the typed section for a raw one, keyed on the exact title.
    pub fn from_raw(raw: &RawSection) -> Section {
        let items = raw.items();
        match raw.title.as_str() {
            // The name is whatever sits at index 0, even when that slot is blank.
            PERSONAL_INFORMATION => Section::PersonalInfo {
                name: items.first().and_then(|v| value_text(v)),
                contacts: texts(items.get(1..).unwrap_or_default()),
            },
            OBJECTIVE => Section::Objective {
                items: texts(&items),
            },
            CERTIFICATIONS => Section::Certifications {
                items: texts(&items),
            },
            EDUCATION => Section::Education {
                entries: items.into_iter().filter_map(education_entry).collect(),
            },
            CORE_COMPETENCIES => Section::Competencies {
                items: texts(&items),
            },
            PROFESSIONAL_EXPERIENCE => Section::Experience {
                entries: items.into_iter().filter_map(entry_item).collect(),
            },
            TECHNICAL_PROJECTS => Section::Projects {
                items: texts(&items),
            },
            other => Section::Other {
                title: other.to_string(),
                items: items.into_iter().filter_map(entry_item).collect(),
            },
        }
    }
}

impl From<&RawSection> for Section {
    fn from(raw: &RawSection) -> Self {
        Section::from_raw(raw)
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Lenient value helpers
// ────────────────────────────────────────────────────────────────────────────

/// Text of a scalar JSON value. Nested lists are flattened with `", "`.
pub fn value_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Null => None,
        Value::Array(items) => {
            let parts: Vec<String> = items.iter().filter_map(value_text).collect();
            (!parts.is_empty()).then(|| parts.join(", "))
        }
        Value::Object(map) => {
            let parts: Vec<String> = map.values().filter_map(value_text).collect();
            (!parts.is_empty()).then(|| parts.join(", "))
        }
    }
}

fn texts(items: &[&Value]) -> Vec<String> {
    items.iter().filter_map(|v| value_text(v)).collect()
}

fn education_entry(value: &Value) -> Option<EducationEntry> {
    match value {
        Value::Array(lines) => {
            let heading = lines.first().and_then(value_text).unwrap_or_default();
            let details: Vec<String> = lines.iter().skip(1).filter_map(value_text).collect();
            if heading.is_empty() && details.is_empty() {
                return None;
            }
            Some(EducationEntry { heading, details })
        }
        other => value_text(other).map(|heading| EducationEntry {
            heading,
            details: Vec::new(),
        }),
    }
}

fn entry_item(value: &Value) -> Option<EntryItem> {
    match value {
        Value::Object(map) => {
            let role = Role {
                subtitle: map.get("subtitle").and_then(value_text),
                date: map.get("date").and_then(value_text),
                details: match map.get("details") {
                    Some(Value::Array(details)) => {
                        details.iter().filter_map(value_text).collect()
                    }
                    Some(other) => value_text(other).into_iter().collect(),
                    None => Vec::new(),
                },
            };
            Some(EntryItem::Role(role))
        }
        other => value_text(other).map(EntryItem::Text),
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
