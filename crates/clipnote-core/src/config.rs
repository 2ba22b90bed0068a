//! Configuration for the template scripts.
//!
//! Follows a builder pattern with validation; persisted as YAML next to the
//! host's own settings when a deployment wants non-default behavior.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Default cap on derived title length, in raw characters.
pub const DEFAULT_MAX_TITLE_CHARS: usize = 60;

/// Default date-folder pattern for new notes.
pub const DEFAULT_DATE_FOLDER_PATTERN: &str = "YYYY/MM/DD/";

/// Settings shared by the note-creation and file-link scripts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScriptConfig {
    /// Cap on derived title length, counted in raw characters.
    pub max_title_chars: usize,
    /// Calendar pattern for the folder new notes land in.
    pub date_folder_pattern: String,
    /// Extension appended when relocating a note, without the dot.
    pub note_extension: String,
    /// Front-matter key the alias is written under.
    pub alias_key: String,
}

impl Default for ScriptConfig {
    fn default() -> Self {
        Self {
            max_title_chars: DEFAULT_MAX_TITLE_CHARS,
            date_folder_pattern: DEFAULT_DATE_FOLDER_PATTERN.to_string(),
            note_extension: "md".to_string(),
            alias_key: "alias".to_string(),
        }
    }
}

impl ScriptConfig {
    /// Create a new configuration with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a builder.
    pub fn builder() -> ScriptConfigBuilder {
        ScriptConfigBuilder::new()
    }

    /// Validate the configuration.
    pub fn validate(&self) -> Result<()> {
        if self.max_title_chars == 0 {
            return Err(Error::config_error("max_title_chars must be at least 1"));
        }

        if self.note_extension.is_empty() {
            return Err(Error::config_error("note_extension cannot be empty"));
        }

        if self.note_extension.contains(['.', '/', '\\']) {
            return Err(Error::config_error(format!(
                "note_extension must be a bare extension, got '{}'",
                self.note_extension
            )));
        }

        if self.alias_key.is_empty() {
            return Err(Error::config_error("alias_key cannot be empty"));
        }

        if self.date_folder_pattern.contains('\\') {
            return Err(Error::config_error(
                "date_folder_pattern must use forward slashes",
            ));
        }

        Ok(())
    }

    /// Save configuration to a YAML file.
    pub async fn save(&self, path: &Path) -> Result<()> {
        let yaml = serde_yaml::to_string(self)
            .map_err(|e| Error::config_error(format!("Failed to serialize config: {}", e)))?;

        tokio::fs::write(path, yaml).await.map_err(|e| {
            Error::config_error(format!(
                "Failed to save config to {}: {}",
                path.display(),
                e
            ))
        })
    }

    /// Load configuration from a YAML file.
    ///
    /// A missing file yields the defaults.
    pub async fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = tokio::fs::read_to_string(path).await.map_err(|e| {
            Error::config_error(format!(
                "Failed to load config from {}: {}",
                path.display(),
                e
            ))
        })?;

        let config: Self = serde_yaml::from_str(&content)
            .map_err(|e| Error::config_error(format!("Invalid configuration: {}", e)))?;
        config.validate()?;
        Ok(config)
    }
}

/// Builder for [`ScriptConfig`].
pub struct ScriptConfigBuilder {
    config: ScriptConfig,
}

impl ScriptConfigBuilder {
    /// Create a new builder with defaults.
    pub fn new() -> Self {
        Self {
            config: ScriptConfig::default(),
        }
    }

    /// Set the title length cap.
    pub fn max_title_chars(mut self, max: usize) -> Self {
        self.config.max_title_chars = max;
        self
    }

    /// Set the date-folder pattern.
    pub fn date_folder_pattern(mut self, pattern: impl Into<String>) -> Self {
        self.config.date_folder_pattern = pattern.into();
        self
    }

    /// Set the note extension (without the dot).
    pub fn note_extension(mut self, ext: impl Into<String>) -> Self {
        self.config.note_extension = ext.into();
        self
    }

    /// Set the front-matter key the alias is written under.
    pub fn alias_key(mut self, key: impl Into<String>) -> Self {
        self.config.alias_key = key.into();
        self
    }

    /// Build and validate.
    pub fn build(self) -> Result<ScriptConfig> {
        self.config.validate()?;
        Ok(self.config)
    }
}

impl Default for ScriptConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}
