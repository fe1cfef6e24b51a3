//! Configuration handling for the TUI

use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Title used when the config does not set one
pub const DEFAULT_FORM_TITLE: &str = "Student Registration Form";

/// Log filter used when neither `RUST_LOG` nor the config sets one
pub const DEFAULT_LOG_FILTER: &str = "student_registration_tui=info";

/// User configuration for the TUI
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct TuiConfig {
    /// Title shown above the form
    pub form_title: Option<String>,
    /// tracing filter directive, e.g. "student_registration_tui=debug"
    pub log_filter: Option<String>,
    /// Log file location, defaults to the platform data directory
    pub log_file: Option<PathBuf>,
}

impl TuiConfig {
    fn project_dirs() -> Option<ProjectDirs> {
        ProjectDirs::from("io", "student-registration", "student-registration-tui")
    }

    /// Get the config file path
    fn config_path() -> Option<PathBuf> {
        Self::project_dirs().map(|dirs| dirs.config_dir().join("config.json"))
    }

    /// Load configuration from the platform config directory
    pub fn load() -> Result<Self> {
        match Self::config_path() {
            Some(path) => Self::load_from(&path),
            None => Ok(Self::default()),
        }
    }

    /// Load configuration from a specific file, defaulting when it is missing
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path)
            .with_context(|| format!("failed to read config {}", path.display()))?;
        let config: TuiConfig = serde_json::from_str(&content)
            .with_context(|| format!("invalid config {}", path.display()))?;
        Ok(config)
    }

    pub fn form_title(&self) -> &str {
        self.form_title.as_deref().unwrap_or(DEFAULT_FORM_TITLE)
    }

    pub fn log_filter(&self) -> &str {
        self.log_filter.as_deref().unwrap_or(DEFAULT_LOG_FILTER)
    }

    /// Where the operational log is written
    pub fn log_path(&self) -> Option<PathBuf> {
        self.log_file.clone().or_else(|| {
            Self::project_dirs().map(|dirs| dirs.data_local_dir().join("registration.log"))
        })
    }
}
