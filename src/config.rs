//! Settings for one run: the config file plus command-line overrides.

use daymark_core::config::DaymarkConfig;
use daymark_core::month::WeekStart;
use daymark_core::{EventStore, Variant};
use std::path::PathBuf;
use tracing::warn;

use crate::render::GridOptions;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub events_path: PathBuf,
    pub variant: Variant,
    pub week_start: WeekStart,
    pub show_week_numbers: bool,
}

impl Settings {
    /// Load the user's config, falling back to defaults if it can't be read.
    pub fn resolve(file: Option<PathBuf>, variant: Option<Variant>) -> Self {
        let config = DaymarkConfig::load().unwrap_or_else(|e| {
            warn!(error = %e, "Could not load config, using defaults");
            DaymarkConfig::default()
        });

        Self::from_config(config, file, variant)
    }

    pub fn from_config(config: DaymarkConfig, file: Option<PathBuf>, variant: Option<Variant>) -> Self {
        Settings {
            events_path: file.unwrap_or_else(|| config.events_path()),
            variant: variant.unwrap_or(config.variant),
            week_start: config.week_starts_on,
            show_week_numbers: config.show_week_numbers,
        }
    }

    pub fn open_store(&self) -> EventStore {
        EventStore::open(&self.events_path, self.variant)
    }

    pub fn grid_options(&self) -> GridOptions {
        GridOptions {
            week_start: self.week_start,
            show_week_numbers: self.show_week_numbers,
        }
    }
}
