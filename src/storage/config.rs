//! Configuration handling for Tally
//!
//! Configuration lives in `~/.config/tally/config.toml`. Only one section is
//! defined: `[colors]`, mapping task names to chart color names:
//!
//! ```toml
//! [colors]
//! WORK = "blue"
//! MUSIC = "deeppink"
//! ```

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

/// Colors that look distinct on a chart, assigned to unconfigured tasks
pub const COLOR_BANK: [&str; 10] = [
    "red", "green", "blue", "magenta", "purple", "orange", "crimson", "brown", "deeppink",
    "maroon",
];

/// User configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
    /// Task name to color name map for the chart legend and markers
    pub colors: BTreeMap<String, String>,
}

impl Config {
    /// Loads the user configuration, falling back to defaults when absent
    pub fn load() -> Result<Self> {
        let Some(dirs) = ProjectDirs::from("", "", "tally") else {
            return Ok(Self::default());
        };
        Self::load_from(&dirs.config_dir().join("config.toml"))
    }

    /// Loads configuration from a specific path; a missing file is fine
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config: {}", path.display()))?;

        toml::from_str(&content)
            .with_context(|| format!("Failed to parse config: {}", path.display()))
    }

    /// Assigns bank colors to tasks the user did not configure
    ///
    /// Colors already claimed in the map are skipped so neighboring tasks
    /// stay distinguishable; the bank cycles once exhausted.
    pub fn assign_colors(&mut self, task_names: &[String]) {
        let unused: Vec<&str> = COLOR_BANK
            .iter()
            .filter(|color| !self.colors.values().any(|c| c == *color))
            .copied()
            .collect();
        let bank: &[&str] = if unused.is_empty() {
            COLOR_BANK.as_slice()
        } else {
            unused.as_slice()
        };

        let missing: Vec<&String> = task_names
            .iter()
            .filter(|name| !self.colors.contains_key(*name))
            .collect();

        for (i, name) in missing.into_iter().enumerate() {
            self.colors
                .insert(name.clone(), bank[i % bank.len()].to_string());
        }
    }
}
