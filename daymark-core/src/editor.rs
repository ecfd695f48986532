//! Per-day event editor.
//!
//! The editor is a small form bound to one date: a text field and, unless the
//! variant is minimal, a category selector. Saving blank text removes the
//! day's record rather than storing an empty one.

use chrono::NaiveDate;

use crate::event::Category;
use crate::store::EventStore;
use crate::variant::Variant;

/// What a save or clear did to the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditOutcome {
    Saved,
    Deleted,
    /// Nothing to change (blank text on a day with no record).
    Unchanged,
}

#[derive(Debug, Clone)]
pub struct EventEditor {
    date: NaiveDate,
    variant: Variant,
    text: String,
    category: Option<Category>,
}

impl EventEditor {
    /// Open the editor for `date`, pre-filled from the existing record.
    pub fn open(store: &EventStore, date: NaiveDate) -> Self {
        let variant = store.variant();
        let existing = store.event_on(date);

        let text = existing.map(|e| e.text.clone()).unwrap_or_default();
        let category = if variant.has_category() {
            Some(existing.map(|e| e.category_or_default()).unwrap_or_default())
        } else {
            None
        };

        EventEditor {
            date,
            variant,
            text,
            category,
        }
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    pub fn variant(&self) -> Variant {
        self.variant
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn category(&self) -> Option<&Category> {
        self.category.as_ref()
    }

    /// Dialog heading, e.g. "March 15, 2024".
    pub fn heading(&self) -> String {
        self.date.format("%B %-d, %Y").to_string()
    }

    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }

    /// Ignored when the variant has no categories.
    pub fn set_category(&mut self, category: Category) {
        if self.variant.has_category() {
            self.category = Some(category);
        }
    }

    /// Index of the current category in [`Category::BUILTIN`], if it is one.
    pub fn category_index(&self) -> Option<usize> {
        let current = self.category.as_ref()?;
        Category::BUILTIN.iter().position(|c| c == current)
    }

    /// Store the form contents for this date.
    pub fn save(&self, store: &mut EventStore) -> EditOutcome {
        let text = self.text.trim();

        if text.is_empty() {
            return self.clear(store);
        }

        store.save_event(self.date, text, self.category.clone());
        EditOutcome::Saved
    }

    /// Remove this date's record.
    pub fn clear(&self, store: &mut EventStore) -> EditOutcome {
        if store.event_on(self.date).is_none() {
            return EditOutcome::Unchanged;
        }

        store.remove_event(self.date);
        EditOutcome::Deleted
    }
}
