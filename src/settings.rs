//! Editor Settings
//!
//! `editor.toml` in the platform config directory. Every key is optional;
//! an empty or missing file yields the defaults.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::constants::{DOCUMENT_FILE, SETTINGS_FILE};
use crate::error::Result;
use crate::helpers::{get_or_create_config_dir, get_or_create_data_dir};

/// Rules deciding when a commit may be issued and how snapshots treat the draft
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct CommitPolicy {
    /// Refuse to commit while any field fails validation
    pub block_invalid_commits: bool,
    /// Keep a dirty draft when a new snapshot arrives instead of reseeding it
    pub keep_unsaved_on_snapshot: bool,
    /// Refuse a commit while the previous one has not been answered
    pub serialize_commits: bool,
}

impl Default for CommitPolicy {
    fn default() -> Self {
        Self {
            block_invalid_commits: true,
            keep_unsaved_on_snapshot: false,
            serialize_commits: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct EditorSettings {
    /// Config document location; defaults to `<data dir>/config.json`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub document_path: Option<PathBuf>,
    /// Default tracing filter when `RUST_LOG` is unset
    pub log_level: String,
    pub policy: CommitPolicy,
}

impl Default for EditorSettings {
    fn default() -> Self {
        Self {
            document_path: None,
            log_level: "info".to_string(),
            policy: CommitPolicy::default(),
        }
    }
}

impl EditorSettings {
    pub fn from_toml(content: &str) -> Result<Self> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(toml::from_str(content)?)
    }

    pub fn to_toml(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Load from `path`, creating an empty file when it is missing
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            std::fs::write(path, "")?;
        }
        let content = std::fs::read_to_string(path)?;
        Self::from_toml(&content)
    }

    /// Load from the platform config directory
    pub fn load() -> Result<Self> {
        let path = get_or_create_config_dir()?.join(SETTINGS_FILE);

        #[cfg(debug_assertions)]
        tracing::info!("Editor settings file: {}", path.display());

        Self::load_from(&path)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        std::fs::write(path, self.to_toml()?)?;
        Ok(())
    }

    /// Where the config document lives
    pub fn document_path(&self) -> Result<PathBuf> {
        match &self.document_path {
            Some(path) => Ok(path.clone()),
            None => Ok(get_or_create_data_dir()?.join(DOCUMENT_FILE)),
        }
    }
}
