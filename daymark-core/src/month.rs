//! The displayed month and which of its days carry an event.

use chrono::{Datelike, Months, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use crate::error::DaymarkError;
use crate::event::{CalendarEvent, Category};
use crate::store::{find_by_date, month_filter};

/// First column of the month grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WeekStart {
    #[default]
    Sunday,
    Monday,
}

impl WeekStart {
    /// Columns between the week's first day and `weekday`.
    fn offset_of(self, weekday: Weekday) -> u32 {
        match self {
            WeekStart::Sunday => weekday.num_days_from_sunday(),
            WeekStart::Monday => weekday.num_days_from_monday(),
        }
    }

    /// Two-letter column headers in display order.
    pub fn headers(self) -> [&'static str; 7] {
        match self {
            WeekStart::Sunday => ["Su", "Mo", "Tu", "We", "Th", "Fr", "Sa"],
            WeekStart::Monday => ["Mo", "Tu", "We", "Th", "Fr", "Sa", "Su"],
        }
    }
}

/// One row of the month grid. Cells outside the month are `None`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Week {
    /// ISO week number of the row's last in-month day.
    pub number: u32,
    pub days: [Option<u32>; 7],
}

/// Day of month -> category of that day's event (`None` if it has none).
pub type MarkedDays = BTreeMap<u32, Option<Category>>;

/// The month currently on screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct MonthView {
    year: i32,
    month: u32,
}

impl MonthView {
    pub fn new(year: i32, month: u32) -> Option<Self> {
        NaiveDate::from_ymd_opt(year, month, 1).map(|_| MonthView { year, month })
    }

    pub fn containing(date: NaiveDate) -> Self {
        MonthView {
            year: date.year(),
            month: date.month(),
        }
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    pub fn first_day(&self) -> NaiveDate {
        // Constructors only produce valid year/month pairs.
        NaiveDate::from_ymd_opt(self.year, self.month, 1).unwrap_or_default()
    }

    pub fn days_in_month(&self) -> u32 {
        let first = self.first_day();
        first
            .checked_add_months(Months::new(1))
            .map(|next| next.signed_duration_since(first).num_days() as u32)
            .unwrap_or(31)
    }

    pub fn day(&self, day: u32) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(self.year, self.month, day)
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        date.year() == self.year && date.month() == self.month
    }

    /// The following month, or `self` at the end of the supported date range.
    pub fn next(&self) -> Self {
        self.first_day()
            .checked_add_months(Months::new(1))
            .map(MonthView::containing)
            .unwrap_or(*self)
    }

    /// The preceding month, or `self` at the start of the supported date range.
    pub fn prev(&self) -> Self {
        self.first_day()
            .checked_sub_months(Months::new(1))
            .map(MonthView::containing)
            .unwrap_or(*self)
    }

    /// Heading such as "March 2024".
    pub fn title(&self) -> String {
        self.first_day().format("%B %Y").to_string()
    }

    /// Days of this month that have an event, with that event's category.
    pub fn marked_days(&self, events: &[CalendarEvent]) -> MarkedDays {
        let in_month = month_filter(events, self.year, self.month);

        in_month
            .iter()
            .filter_map(|e| {
                // The first record wins when a file holds duplicates for a day.
                let event = find_by_date(events, e.date)?;
                Some((e.date.day(), event.category.clone()))
            })
            .collect()
    }

    /// The month laid out in rows of seven.
    pub fn weeks(&self, week_start: WeekStart) -> Vec<Week> {
        let first = self.first_day();
        let offset = week_start.offset_of(first.weekday()) as usize;

        let total = self.days_in_month() as usize;
        let rows = (offset + total).div_ceil(7);

        (0..rows)
            .map(|row| {
                let mut days = [None; 7];
                for (col, cell) in days.iter_mut().enumerate() {
                    let index = row * 7 + col;
                    if index >= offset && index < offset + total {
                        *cell = Some((index - offset + 1) as u32);
                    }
                }

                // A Sunday-first row's Sunday belongs to the previous ISO week.
                let number = days
                    .iter()
                    .flatten()
                    .next_back()
                    .and_then(|d| self.day(*d))
                    .map(|d| d.iso_week().week())
                    .unwrap_or_default();

                Week { number, days }
            })
            .collect()
    }
}

impl fmt::Display for MonthView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

impl FromStr for MonthView {
    type Err = DaymarkError;

    /// Parse `YYYY-MM`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || DaymarkError::InvalidMonth(s.to_string());

        let (year, month) = s.trim().split_once('-').ok_or_else(invalid)?;
        let year: i32 = year.parse().map_err(|_| invalid())?;
        let month: u32 = month.parse().map_err(|_| invalid())?;

        MonthView::new(year, month).ok_or_else(invalid)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn month(y: i32, m: u32) -> MonthView {
        MonthView::new(y, m).unwrap()
    }

    #[test]
    fn rejects_invalid_months() {
        assert!(MonthView::new(2024, 0).is_none());
        assert!(MonthView::new(2024, 13).is_none());
    }

    #[test]
    fn navigation_rolls_over_years() {
        assert_eq!(month(2024, 12).next(), month(2025, 1));
        assert_eq!(month(2025, 1).prev(), month(2024, 12));
        assert_eq!(month(2024, 3).next().prev(), month(2024, 3));
    }

    #[test]
    fn navigation_stops_at_the_date_range() {
        let last = MonthView::containing(NaiveDate::MAX);
        assert_eq!(last.next(), last);
        assert_eq!(last.next().first_day().year(), NaiveDate::MAX.year());

        let first = MonthView::containing(NaiveDate::MIN);
        assert_eq!(first.prev(), first);
    }

    #[test]
    fn days_in_month_handles_leap_years() {
        assert_eq!(month(2024, 2).days_in_month(), 29);
        assert_eq!(month(2023, 2).days_in_month(), 28);
        assert_eq!(month(2024, 4).days_in_month(), 30);
        assert_eq!(month(2024, 12).days_in_month(), 31);
    }

    #[test]
    fn parses_year_month() {
        assert_eq!("2024-03".parse::<MonthView>().unwrap(), month(2024, 3));
        assert!("2024-13".parse::<MonthView>().is_err());
        assert!("March".parse::<MonthView>().is_err());
        assert_eq!(month(2024, 3).to_string(), "2024-03");
    }

    #[test]
    fn title_names_the_month() {
        assert_eq!(month(2024, 3).title(), "March 2024");
    }

    #[test]
    fn marks_only_days_in_this_month() {
        let events = vec![
            CalendarEvent::new(date(2024, 3, 15), "Dentist", Some(Category::Personal)),
            CalendarEvent::new(date(2024, 3, 20), "Standup", Some(Category::Work)),
            CalendarEvent::new(date(2024, 3, 21), "Note", None),
            CalendarEvent::new(date(2024, 4, 15), "Elsewhere", Some(Category::Other)),
        ];

        let marks = month(2024, 3).marked_days(&events);
        assert_eq!(marks.len(), 3);
        assert_eq!(marks[&15], Some(Category::Personal));
        assert_eq!(marks[&20], Some(Category::Work));
        assert_eq!(marks[&21], None);
        assert!(!marks.contains_key(&1));
    }

    #[test]
    fn duplicate_records_mark_first_category() {
        let events = vec![
            CalendarEvent::new(date(2024, 3, 15), "a", Some(Category::Work)),
            CalendarEvent::new(date(2024, 3, 15), "b", Some(Category::Other)),
        ];

        let marks = month(2024, 3).marked_days(&events);
        assert_eq!(marks.len(), 1);
        assert_eq!(marks[&15], Some(Category::Work));
    }

    #[test]
    fn grid_starts_on_configured_weekday() {
        // March 1st 2024 was a Friday.
        let sunday = month(2024, 3).weeks(WeekStart::Sunday);
        assert_eq!(sunday[0].days, [None, None, None, None, None, Some(1), Some(2)]);
        assert_eq!(sunday.len(), 6);

        let monday = month(2024, 3).weeks(WeekStart::Monday);
        assert_eq!(monday[0].days, [None, None, None, None, Some(1), Some(2), Some(3)]);
        assert_eq!(monday.len(), 5);
        assert_eq!(monday[4].days[6], Some(31));
    }

    #[test]
    fn grid_carries_iso_week_numbers() {
        let weeks = month(2024, 3).weeks(WeekStart::Monday);
        assert_eq!(weeks[0].number, 9);
        assert_eq!(weeks[1].number, 10);
    }

    #[test]
    fn sunday_rows_take_the_week_of_their_weekdays() {
        let weeks = month(2024, 3).weeks(WeekStart::Sunday);
        assert_eq!(weeks[0].number, 9);
        // Sun Mar 3 .. Sat Mar 9 is mostly ISO week 10.
        assert_eq!(weeks[1].days[0], Some(3));
        assert_eq!(weeks[1].number, 10);
        // The last row holds only Sun Mar 31.
        assert_eq!(weeks[5].number, 13);
    }

    #[test]
    fn contains_checks_year_and_month() {
        let view = month(2024, 3);
        assert!(view.contains(date(2024, 3, 31)));
        assert!(!view.contains(date(2023, 3, 31)));
        assert_eq!(MonthView::containing(date(2024, 3, 31)), view);
    }
}
