use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::errors::{PassopError, Result};

/// Project-level configuration, loaded from `.passop.toml`.
///
/// Every field has a sensible default so PassOP works out-of-the-box
/// without any config file at all.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Directory (relative to the working directory) where the storage
    /// slot files live.
    #[serde(default = "default_storage_dir")]
    pub storage_dir: String,

    /// Character used to mask passwords in table output.
    #[serde(default = "default_mask_char")]
    pub mask_char: char,
}

// ── Serde default helpers ────────────────────────────────────────────

fn default_storage_dir() -> String {
    ".passop".to_string()
}

fn default_mask_char() -> char {
    '*'
}

// ── Implementation ───────────────────────────────────────────────────

impl Default for Settings {
    fn default() -> Self {
        Self {
            storage_dir: default_storage_dir(),
            mask_char: default_mask_char(),
        }
    }
}

impl Settings {
    /// Name of the config file we look for in the working directory.
    const FILE_NAME: &'static str = ".passop.toml";

    /// Load settings from `<project_dir>/.passop.toml`.
    ///
    /// If the file does not exist, defaults are returned.  If the file
    /// exists but cannot be parsed, an error is returned.
    pub fn load(project_dir: &Path) -> Result<Self> {
        let config_path = project_dir.join(Self::FILE_NAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(&config_path)?;

        let settings: Settings = toml::from_str(&contents).map_err(|e| {
            PassopError::Config(format!("Failed to parse {}: {e}", config_path.display()))
        })?;

        Ok(settings)
    }

    /// Build the full path to the storage directory.
    ///
    /// Example: `project_dir/.passop`
    pub fn storage_path(&self, project_dir: &Path) -> PathBuf {
        project_dir.join(&self.storage_dir)
    }
}

// ── Tests ────────────────────────────────────────────────────────────
