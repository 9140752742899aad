//! File System Utilities
//!
//! Configuration and data directory management.

use crate::constants::{APP_NAME, APP_ORGANIZATION, APP_QUALIFIER};
use crate::error::{Error, Result};
use directories::ProjectDirs;
use std::fs;
use std::path::{Path, PathBuf};

fn project_dirs() -> Result<ProjectDirs> {
    ProjectDirs::from(APP_QUALIFIER, APP_ORGANIZATION, APP_NAME).ok_or_else(|| Error::Invalid {
        message: "Could not determine project directories".to_string(),
    })
}

/// Create `dir` (and parents) if missing; existing contents are left alone
fn ensure_dir(dir: &Path) -> Result<PathBuf> {
    if !dir.exists() {
        fs::create_dir_all(dir)?;
    }
    Ok(dir.to_path_buf())
}

/// Get or create the editor's configuration directory
///
/// Platform-specific locations:
/// - **Linux**: `~/.config/agent-config/` or `$XDG_CONFIG_HOME/agent-config/`
/// - **macOS**: `~/Library/Application Support/com.pokeagent.agent-config/`
/// - **Windows**: `C:\Users\<User>\AppData\Roaming\pokeagent\agent-config\config\`
pub fn get_or_create_config_dir() -> Result<PathBuf> {
    ensure_dir(project_dirs()?.config_dir())
}

/// Get or create the data directory (document file, logs)
///
/// Platform-specific locations:
/// - **Linux**: `~/.local/share/agent-config/`
/// - **macOS**: `~/Library/Application Support/com.pokeagent.agent-config/`
/// - **Windows**: `C:\Users\<User>\AppData\Roaming\pokeagent\agent-config\data\`
pub fn get_or_create_data_dir() -> Result<PathBuf> {
    ensure_dir(project_dirs()?.data_dir())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ensure_dir_creates_and_preserves_contents() {
        let root = std::env::temp_dir().join(format!("agent-config-fs-{}", uuid::Uuid::new_v4()));
        let dir = root.join("nested").join("config");

        assert_eq!(ensure_dir(&dir).expect("create"), dir);
        assert!(dir.is_dir());

        fs::write(dir.join("editor.toml"), "log_level = \"debug\"").expect("write");
        ensure_dir(&dir).expect("reuse");
        assert_eq!(
            fs::read_to_string(dir.join("editor.toml")).expect("read"),
            "log_level = \"debug\""
        );
        let _ = fs::remove_dir_all(&root);
    }
}
