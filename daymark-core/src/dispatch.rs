//! Logical UI events and the observers listening for them.

use chrono::NaiveDate;

use crate::event::Category;
use crate::month::MonthView;

/// Something the user did in the calendar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiEvent {
    DaySelected(NaiveDate),
    MonthChanged(MonthView),
    Save {
        date: NaiveDate,
        text: String,
        category: Option<Category>,
    },
    Clear(NaiveDate),
}

impl UiEvent {
    /// The day this event concerns, if any.
    pub fn date(&self) -> Option<NaiveDate> {
        match self {
            UiEvent::DaySelected(date) | UiEvent::Clear(date) => Some(*date),
            UiEvent::Save { date, .. } => Some(*date),
            UiEvent::MonthChanged(_) => None,
        }
    }
}

pub type Handler = Box<dyn FnMut(&UiEvent)>;

/// Synchronous observer list. Each emit runs every handler to completion.
#[derive(Default)]
pub struct Dispatcher {
    handlers: Vec<Handler>,
}

impl Dispatcher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subscribe<F>(&mut self, handler: F)
    where
        F: FnMut(&UiEvent) + 'static,
    {
        self.handlers.push(Box::new(handler));
    }

    pub fn emit(&mut self, event: &UiEvent) {
        for handler in self.handlers.iter_mut() {
            handler(event);
        }
    }

    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }
}

impl std::fmt::Debug for Dispatcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Dispatcher")
            .field("handlers", &self.handlers.len())
            .finish()
    }
}
