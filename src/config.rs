//! Audit configuration persistence
//!
//! Handles saving and loading the options used when auditing translator
//! bundles.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::i18n::Language;

/// Options for [`crate::i18n::audit`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AuditConfig {
    /// Locale every bundle is compared against
    pub reference: Language,
    /// Treat keys missing from the reference as errors instead of warnings
    pub fail_on_unknown_keys: bool,
    /// Warn about values identical to the reference
    pub report_untranslated: bool,
    /// Key paths whose value may equal the reference (brand names and the like)
    pub untranslated_allowlist: Vec<String>,
}

impl Default for AuditConfig {
    fn default() -> Self {
        Self {
            reference: Language::English,
            fail_on_unknown_keys: false,
            report_untranslated: true,
            untranslated_allowlist: vec!["settings.lastFm".to_string()],
        }
    }
}

impl AuditConfig {
    pub fn allows_untranslated(&self, path: &str) -> bool {
        self.untranslated_allowlist.iter().any(|p| p == path)
    }

    /// Get the config file path
    pub fn file_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("app", "musicat", "Musicat")
            .map(|dirs| dirs.config_dir().join("i18n-audit.json"))
    }

    /// Load config from the default file, falling back to defaults
    pub fn load() -> Self {
        Self::file_path()
            .and_then(|path| Self::load_from_file(&path).ok())
            .unwrap_or_default()
    }

    /// Load config from a specific file
    pub fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let content =
            std::fs::read_to_string(path).map_err(|e| ConfigError::Io(e.to_string()))?;
        serde_json::from_str(&content).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// Save config to a specific file
    pub fn save_to_file(&self, path: &Path) -> Result<(), ConfigError> {
        // Ensure parent directory exists
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| ConfigError::Io(e.to_string()))?;
        }

        let content =
            serde_json::to_string_pretty(self).map_err(|e| ConfigError::Parse(e.to_string()))?;
        std::fs::write(path, content).map_err(|e| ConfigError::Io(e.to_string()))?;
        Ok(())
    }
}

/// Errors that can occur with the audit config
#[derive(Debug, Clone)]
pub enum ConfigError {
    Io(String),
    Parse(String),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "IO error: {}", e),
            ConfigError::Parse(e) => write!(f, "Parse error: {}", e),
        }
    }
}

impl std::error::Error for ConfigError {}
