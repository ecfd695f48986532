//! User configuration at ~/.config/daymark/config.toml

use std::path::{Path, PathBuf};

use config::{Config, File};
use serde::{Deserialize, Serialize};

use crate::constants::DEFAULT_EVENTS_FILE;
use crate::error::{DaymarkError, DaymarkResult};
use crate::month::WeekStart;
use crate::variant::Variant;

fn default_events_file() -> PathBuf {
    PathBuf::from(DEFAULT_EVENTS_FILE)
}

fn default_show_week_numbers() -> bool {
    true
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct DaymarkConfig {
    /// Where events are stored. Relative paths resolve against the working directory.
    #[serde(default = "default_events_file")]
    pub events_file: PathBuf,

    #[serde(default)]
    pub variant: Variant,

    #[serde(default)]
    pub week_starts_on: WeekStart,

    #[serde(default = "default_show_week_numbers")]
    pub show_week_numbers: bool,
}

impl Default for DaymarkConfig {
    fn default() -> Self {
        DaymarkConfig {
            events_file: default_events_file(),
            variant: Variant::default(),
            week_starts_on: WeekStart::default(),
            show_week_numbers: default_show_week_numbers(),
        }
    }
}

impl DaymarkConfig {
    pub fn config_path() -> DaymarkResult<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| DaymarkError::Config("Could not determine config directory".into()))?
            .join("daymark");

        Ok(config_dir.join("config.toml"))
    }

    /// Load the user's config, writing a commented default file on first run.
    pub fn load() -> DaymarkResult<Self> {
        let path = Self::config_path()?;

        if !path.exists() {
            Self::create_default_config(&path)?;
        }

        Self::load_from(&path)
    }

    /// Load config from `path`. A missing file yields the defaults.
    pub fn load_from(path: &Path) -> DaymarkResult<Self> {
        Config::builder()
            .add_source(File::from(path.to_path_buf()).required(false))
            .build()
            .map_err(|e| DaymarkError::Config(e.to_string()))?
            .try_deserialize()
            .map_err(|e| DaymarkError::Config(e.to_string()))
    }

    /// The events file with `~` expanded.
    pub fn events_path(&self) -> PathBuf {
        let full_path_str = shellexpand::tilde(&self.events_file.to_string_lossy()).into_owned();

        PathBuf::from(full_path_str)
    }

    pub fn save_to(&self, path: &Path) -> DaymarkResult<()> {
        let content =
            toml::to_string_pretty(self).map_err(|e| DaymarkError::Config(e.to_string()))?;

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        std::fs::write(path, content)
            .map_err(|e| DaymarkError::Config(format!("Could not write config file: {e}")))?;

        Ok(())
    }

    /// Create a default config file with all options commented out.
    pub fn create_default_config(path: &Path) -> DaymarkResult<()> {
        let contents = format!(
            "\
# daymark configuration

# Where events are stored (relative to the working directory unless absolute):
# events_file = \"{}\"

# Editor flavour: \"tagged\", \"free-text\" or \"minimal\"
# variant = \"tagged\"

# First column of the month grid: \"sunday\" or \"monday\"
# week_starts_on = \"sunday\"

# show_week_numbers = true
",
            DEFAULT_EVENTS_FILE
        );

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| {
                DaymarkError::Config(format!("Could not create config directory: {e}"))
            })?;
        }

        std::fs::write(path, contents)
            .map_err(|e| DaymarkError::Config(format!("Could not write config file: {e}")))?;

        Ok(())
    }
}
