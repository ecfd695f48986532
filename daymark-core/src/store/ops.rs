//! Lookup and edit operations over an in-memory event list.

use chrono::{Datelike, NaiveDate};

use crate::event::{CalendarEvent, Category};

/// First record on `date`. With one record per date this is a unique lookup.
pub fn find_by_date(events: &[CalendarEvent], date: NaiveDate) -> Option<&CalendarEvent> {
    events.iter().find(|e| e.date == date)
}

/// Replace whatever is stored for `date` with a new record.
///
/// Every record on that date is removed first, then the new one is appended,
/// so the last write wins and the one-per-date invariant holds.
pub fn upsert(
    events: &mut Vec<CalendarEvent>,
    date: NaiveDate,
    text: impl Into<String>,
    category: Option<Category>,
) {
    delete(events, date);
    events.push(CalendarEvent::new(date, text, category));
}

/// Remove every record on `date`. Returns how many were removed.
pub fn delete(events: &mut Vec<CalendarEvent>, date: NaiveDate) -> usize {
    let before = events.len();
    events.retain(|e| e.date != date);
    before - events.len()
}

/// All records in the given year and month, in stored order.
pub fn month_filter(events: &[CalendarEvent], year: i32, month: u32) -> Vec<&CalendarEvent> {
    events
        .iter()
        .filter(|e| e.date.year() == year && e.date.month() == month)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn upsert_then_find_returns_arguments() {
        let mut events = Vec::new();
        upsert(&mut events, date(2024, 3, 15), "Dentist", Some(Category::Personal));

        let found = find_by_date(&events, date(2024, 3, 15)).unwrap();
        assert_eq!(found.text, "Dentist");
        assert_eq!(found.category, Some(Category::Personal));
    }

    #[test]
    fn upsert_twice_keeps_last_write() {
        let mut events = Vec::new();
        upsert(&mut events, date(2024, 3, 15), "Dentist", Some(Category::Personal));
        upsert(&mut events, date(2024, 3, 15), "Orthodontist", Some(Category::Work));

        assert_eq!(events.len(), 1);
        let found = find_by_date(&events, date(2024, 3, 15)).unwrap();
        assert_eq!(found.text, "Orthodontist");
        assert_eq!(found.category, Some(Category::Work));
    }

    #[test]
    fn upsert_collapses_existing_duplicates() {
        // Hand-edited files may hold several records for one day.
        let mut events = vec![
            CalendarEvent::new(date(2024, 3, 15), "a", None),
            CalendarEvent::new(date(2024, 3, 16), "keep", None),
            CalendarEvent::new(date(2024, 3, 15), "b", None),
        ];
        upsert(&mut events, date(2024, 3, 15), "c", None);

        assert_eq!(events.len(), 2);
        assert_eq!(events[0].text, "keep");
        assert_eq!(events[1].text, "c");
    }

    #[test]
    fn upsert_stores_empty_text() {
        let mut events = Vec::new();
        upsert(&mut events, date(2024, 3, 15), "", None);
        assert_eq!(find_by_date(&events, date(2024, 3, 15)).unwrap().text, "");
    }

    #[test]
    fn delete_then_find_is_none() {
        let mut events = Vec::new();
        upsert(&mut events, date(2024, 3, 15), "Dentist", None);
        upsert(&mut events, date(2024, 3, 16), "Gym", None);

        assert_eq!(delete(&mut events, date(2024, 3, 15)), 1);
        assert!(find_by_date(&events, date(2024, 3, 15)).is_none());
        assert!(find_by_date(&events, date(2024, 3, 16)).is_some());
    }

    #[test]
    fn delete_missing_date_is_a_no_op() {
        let mut events = vec![CalendarEvent::new(date(2024, 3, 16), "Gym", None)];
        assert_eq!(delete(&mut events, date(2024, 3, 15)), 0);
        assert_eq!(events.len(), 1);
    }

    #[test]
    fn month_filter_selects_exact_year_and_month() {
        let events = vec![
            CalendarEvent::new(date(2024, 3, 1), "first", None),
            CalendarEvent::new(date(2024, 3, 31), "last", None),
            CalendarEvent::new(date(2024, 4, 1), "next month", None),
            CalendarEvent::new(date(2023, 3, 15), "last year", None),
            CalendarEvent::new(date(2024, 2, 29), "leap day", None),
        ];

        let march: Vec<&str> = month_filter(&events, 2024, 3)
            .into_iter()
            .map(|e| e.text.as_str())
            .collect();
        assert_eq!(march, vec!["first", "last"]);

        assert_eq!(month_filter(&events, 2024, 2).len(), 1);
        assert!(month_filter(&events, 2024, 5).is_empty());
    }
}
