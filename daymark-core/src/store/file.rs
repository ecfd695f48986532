//! Reading and writing the events file.
//!
//! The whole list is read at startup and rewritten on every mutation. There is
//! no locking and no atomic rename, so two processes sharing a file will race.

use serde::Deserialize;
use serde_json::{Map, Value};
use std::path::Path;
use tracing::{debug, error};

use crate::error::DaymarkResult;
use crate::event::{CalendarEvent, Category, parse_date};
use crate::variant::Variant;

/// A record as found on disk, in any variant's key set.
///
/// PascalCase aliases cover files written with .NET-style property names.
#[derive(Deserialize)]
struct StoredEvent {
    #[serde(alias = "Date")]
    date: String,
    #[serde(default, rename = "eventName", alias = "EventName")]
    event_name: Option<String>,
    #[serde(default, alias = "Description")]
    description: Option<String>,
    #[serde(default, alias = "Category")]
    category: Option<String>,
}

impl StoredEvent {
    fn into_event(self) -> DaymarkResult<CalendarEvent> {
        let date = parse_date(&self.date)?;
        let text = self.event_name.or(self.description).unwrap_or_default();
        let category = self
            .category
            .filter(|c| !c.trim().is_empty())
            .map(Category::from);

        Ok(CalendarEvent {
            date,
            text,
            category,
        })
    }
}

fn to_stored(event: &CalendarEvent, variant: Variant) -> Value {
    let mut object = Map::new();
    object.insert(
        "date".to_string(),
        Value::String(event.date.format("%Y-%m-%d").to_string()),
    );
    object.insert(
        variant.text_key().to_string(),
        Value::String(event.text.clone()),
    );

    // Minimal never adds a category, but keeps one written by another editor.
    let category = if variant.has_category() {
        Some(event.category_or_default())
    } else {
        event.category.clone()
    };
    if let Some(category) = category {
        object.insert("category".to_string(), Value::String(category.into()));
    }

    Value::Object(object)
}

/// Read all events from `path`.
///
/// A missing or blank file holds zero events. Any record with an unreadable
/// date makes the whole file invalid.
pub fn try_load(path: &Path) -> DaymarkResult<Vec<CalendarEvent>> {
    if !path.exists() {
        return Ok(Vec::new());
    }

    let content = std::fs::read_to_string(path)?;
    if content.trim().is_empty() {
        return Ok(Vec::new());
    }

    let stored: Option<Vec<StoredEvent>> = serde_json::from_str(&content)?;

    stored
        .unwrap_or_default()
        .into_iter()
        .map(StoredEvent::into_event)
        .collect()
}

/// Read all events from `path`, logging and returning an empty list on failure.
pub fn load(path: &Path) -> Vec<CalendarEvent> {
    match try_load(path) {
        Ok(events) => {
            debug!(path = %path.display(), count = events.len(), "Loaded events");
            events
        }
        Err(e) => {
            error!(path = %path.display(), error = %e, "Error loading events");
            Vec::new()
        }
    }
}

/// Serialize the full list and overwrite `path`.
pub fn try_save(path: &Path, events: &[CalendarEvent], variant: Variant) -> DaymarkResult<()> {
    let stored: Vec<Value> = events.iter().map(|e| to_stored(e, variant)).collect();
    let json = serde_json::to_string_pretty(&stored)?;

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }

    std::fs::write(path, json)?;
    Ok(())
}

/// Write the full list to `path`, logging instead of failing.
///
/// Returns whether the write succeeded. Callers' in-memory state is left as
/// is either way.
pub fn save(path: &Path, events: &[CalendarEvent], variant: Variant) -> bool {
    match try_save(path, events, variant) {
        Ok(()) => {
            debug!(path = %path.display(), count = events.len(), "Saved events");
            true
        }
        Err(e) => {
            error!(path = %path.display(), error = %e, "Error writing events file");
            false
        }
    }
}
