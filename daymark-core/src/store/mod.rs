//! The event store.
//!
//! Holds every record in memory and mirrors the list to a single JSON file,
//! which is read fully on open and rewritten fully after each mutation.

mod file;
mod ops;

pub use file::{load, save, try_load, try_save};
pub use ops::{delete, find_by_date, month_filter, upsert};

use chrono::NaiveDate;
use std::path::{Path, PathBuf};
use tracing::info;

use crate::event::{CalendarEvent, Category};
use crate::variant::Variant;

/// In-memory event list bound to its backing file.
///
/// One store exists per process and is handed to whichever component needs
/// it. A failed write is logged and leaves memory ahead of disk.
#[derive(Debug)]
pub struct EventStore {
    path: PathBuf,
    variant: Variant,
    events: Vec<CalendarEvent>,
}

impl EventStore {
    /// Open the store at `path`, loading whatever is there.
    pub fn open(path: impl Into<PathBuf>, variant: Variant) -> Self {
        let path = path.into();
        let events = load(&path);
        EventStore {
            path,
            variant,
            events,
        }
    }

    /// A store with the given records that hasn't touched disk yet.
    pub fn with_events(path: impl Into<PathBuf>, variant: Variant, events: Vec<CalendarEvent>) -> Self {
        EventStore {
            path: path.into(),
            variant,
            events,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn variant(&self) -> Variant {
        self.variant
    }

    pub fn events(&self) -> &[CalendarEvent] {
        &self.events
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Throw away memory and read the file again.
    pub fn reload(&mut self) {
        self.events = load(&self.path);
    }

    /// Write the current list to disk. Returns whether the write succeeded.
    pub fn save(&self) -> bool {
        save(&self.path, &self.events, self.variant)
    }

    pub fn event_on(&self, date: NaiveDate) -> Option<&CalendarEvent> {
        find_by_date(&self.events, date)
    }

    pub fn events_in_month(&self, year: i32, month: u32) -> Vec<&CalendarEvent> {
        month_filter(&self.events, year, month)
    }

    /// Upsert the record for `date` and persist.
    ///
    /// Variants without categories ignore `category` and keep whatever the
    /// existing record for `date` already had.
    pub fn save_event(&mut self, date: NaiveDate, text: impl Into<String>, category: Option<Category>) {
        let category = if self.variant.has_category() {
            category
        } else {
            self.event_on(date).and_then(|e| e.category.clone())
        };
        upsert(&mut self.events, date, text, category);
        info!(%date, "Saved event");
        self.save();
    }

    /// Remove the record for `date` and persist. Returns whether one existed.
    pub fn remove_event(&mut self, date: NaiveDate) -> bool {
        let removed = delete(&mut self.events, date);
        info!(%date, removed, "Removed event");
        self.save();
        removed > 0
    }
}
