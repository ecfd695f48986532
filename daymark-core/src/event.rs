//! Calendar event records.
//!
//! A record is one entry for one calendar day. The store keeps at most one
//! record per date; time-of-day never takes part in comparisons.

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{DaymarkError, DaymarkResult};

/// Event category shown in the editor's category selector.
///
/// Names that aren't one of the three built-in categories are kept verbatim
/// so a file written elsewhere survives a load/save cycle.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Category {
    #[default]
    Personal,
    Work,
    Other,
    Custom(String),
}

impl Category {
    /// The categories offered by the editor, in selector order.
    pub const BUILTIN: [Category; 3] = [Category::Personal, Category::Work, Category::Other];

    pub fn as_str(&self) -> &str {
        match self {
            Category::Personal => "Personal",
            Category::Work => "Work",
            Category::Other => "Other",
            Category::Custom(name) => name,
        }
    }

    pub fn is_builtin(&self) -> bool {
        !matches!(self, Category::Custom(_))
    }
}

/// Blank names fall back to the default category, since a blank category
/// reads back from disk as no category at all.
impl From<String> for Category {
    fn from(name: String) -> Self {
        if name.trim().is_empty() {
            Category::default()
        } else if name.eq_ignore_ascii_case("personal") {
            Category::Personal
        } else if name.eq_ignore_ascii_case("work") {
            Category::Work
        } else if name.eq_ignore_ascii_case("other") {
            Category::Other
        } else {
            Category::Custom(name)
        }
    }
}

impl From<Category> for String {
    fn from(category: Category) -> Self {
        match category {
            Category::Custom(name) => name,
            known => known.as_str().to_string(),
        }
    }
}

impl FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim();
        if name.is_empty() {
            return Err("Category name can't be blank".to_string());
        }
        Ok(Category::from(name.to_string()))
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One entry in the calendar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalendarEvent {
    pub date: NaiveDate,
    pub text: String,
    /// `None` for records written without a category (minimal editor).
    pub category: Option<Category>,
}

impl CalendarEvent {
    pub fn new(date: NaiveDate, text: impl Into<String>, category: Option<Category>) -> Self {
        CalendarEvent {
            date,
            text: text.into(),
            category,
        }
    }

    /// Category used for display and editing; records without one count as Personal.
    pub fn category_or_default(&self) -> Category {
        self.category.clone().unwrap_or_default()
    }
}

impl fmt::Display for CalendarEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.category {
            Some(category) => write!(f, "{} {} [{}]", self.date, self.text, category),
            None => write!(f, "{} {}", self.date, self.text),
        }
    }
}

/// Parse a stored or user-supplied date, dropping any time-of-day.
///
/// Accepts `YYYY-MM-DD`, `YYYY-MM-DDTHH:MM:SS[.fff]` and RFC 3339 timestamps.
/// For RFC 3339 the local calendar date as written is kept, not the UTC one.
pub fn parse_date(s: &str) -> DaymarkResult<NaiveDate> {
    let s = s.trim();

    if let Ok(date) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
        return Ok(date);
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S%.f") {
        return Ok(dt.date());
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Ok(dt.date_naive());
    }

    Err(DaymarkError::InvalidDate(s.to_string()))
}
