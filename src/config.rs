//! Configuration file support
//!
//! Loads settings from ~/.boss.toml (or %USERPROFILE%\.boss.toml on Windows)
//!
//! Example:
//! ```text
//! # BOSS configuration
//! tab_width = 4
//! show_line_numbers = true
//! status_bar = true
//! language = "cpp"
//! ```

use std::fs;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::error::{EditorError, Result};
use crate::syntax::Language;

/// Configuration settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Columns between tab stops
    pub tab_width: usize,
    /// Whether to draw the line number gutter
    pub show_line_numbers: bool,
    /// Whether to draw the status bar
    pub status_bar: bool,
    /// Forced language name, overriding detection by file extension
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            tab_width: 4,
            show_line_numbers: true,
            status_bar: true,
            language: None,
        }
    }
}

impl Config {
    /// Get the config file path
    pub fn config_path() -> Option<PathBuf> {
        #[cfg(windows)]
        {
            std::env::var("USERPROFILE")
                .ok()
                .map(|home| PathBuf::from(home).join(".boss.toml"))
        }

        #[cfg(not(windows))]
        {
            std::env::var("HOME")
                .ok()
                .map(|home| PathBuf::from(home).join(".boss.toml"))
        }
    }

    /// Load configuration from file; a missing file yields the defaults
    pub fn load() -> Result<Self> {
        let Some(path) = Self::config_path() else {
            return Ok(Self::default());
        };
        match fs::read_to_string(&path) {
            Ok(contents) => Self::parse(&contents),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(Self::default()),
            Err(e) => Err(e.into()),
        }
    }

    /// Parse config file contents
    pub fn parse(contents: &str) -> Result<Self> {
        let mut config: Config = toml::from_str(contents)?;
        config.tab_width = config.tab_width.clamp(1, 16);
        Ok(config)
    }

    /// Resolve the forced language
    ///
    /// `Ok(None)` means no override; `Ok(Some(None))` forces highlighting off.
    pub fn language(&self) -> Result<Option<Option<Language>>> {
        match &self.language {
            None => Ok(None),
            Some(name) => Language::from_name(name)
                .map(Some)
                .ok_or_else(|| EditorError::UnknownLanguage(name.clone())),
        }
    }

    /// Save current configuration to file
    pub fn save(&self) -> Result<()> {
        if let Some(path) = Self::config_path() {
            let contents = format!(
                "# BOSS configuration\n# Generated automatically\n\n{}",
                toml::to_string_pretty(self)?
            );
            fs::write(path, contents)?;
        }
        Ok(())
    }
}
