//! Core data models.
//!
//! All of these are transient values passed between the host and the
//! template entry points; nothing here is persisted by this crate.

use serde::{Deserialize, Serialize};

/// The record a note-creation template consumes.
///
/// Serialization skips absent fields so the emitted shape matches the host
/// template contract: `{title, alias, text}` for a full result,
/// `{title, text}` on the fast path, `{text}` for a failure payload.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NoteSeed {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alias: Option<String>,
    #[serde(default)]
    pub text: String,
}

impl NoteSeed {
    /// Seed for a plain note: title plus body, no alias.
    pub fn plain(title: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            alias: None,
            text: text.into(),
        }
    }

    /// Degraded seed carrying a diagnostic trace instead of note content.
    pub fn failure(trace: impl Into<String>) -> Self {
        Self {
            title: String::new(),
            alias: None,
            text: trace.into(),
        }
    }

    /// True when this seed carries a failure payload.
    ///
    /// A successful seed always has a non-empty title: the sanitizer maps
    /// an empty candidate to `"-"`.
    pub fn is_failure(&self) -> bool {
        self.title.is_empty()
    }
}

/// A title/link pair produced from a clipboard file path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileLink {
    /// Human-readable, percent-decoded form.
    pub title: String,
    /// Encoding-preserving form, safe as a markdown link target.
    pub link: String,
}

impl FileLink {
    /// Render as `[title](link)`.
    pub fn to_markdown(&self) -> String {
        format!("[{}]({})", self.title, self.link)
    }
}

/// Structured metadata block at the top of a note.
///
/// Keys keep their document order so an edit does not reshuffle the block.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FrontMatter {
    pub data: serde_yaml::Mapping,
}

impl FrontMatter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Look up an entry by string key.
    pub fn get(&self, key: &str) -> Option<&serde_yaml::Value> {
        self.data.get(&serde_yaml::Value::String(key.to_string()))
    }

    /// Insert or replace a string-keyed entry.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<serde_yaml::Value>) {
        self.data
            .insert(serde_yaml::Value::String(key.into()), value.into());
    }

    /// Remove an entry, returning the previous value if any.
    pub fn remove(&mut self, key: &str) -> Option<serde_yaml::Value> {
        self.data.remove(&serde_yaml::Value::String(key.to_string()))
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}
