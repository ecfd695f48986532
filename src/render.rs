//! Terminal rendering for daymark types.
//!
//! The month grid colours each marked day by its category style, bolds days
//! whose event has no style, and shows the selected day in reverse video.

use chrono::{Datelike, NaiveDate};
use daymark_core::CalendarEvent;
use daymark_core::month::{MarkedDays, MonthView, WeekStart};
use daymark_core::shell::Renderer;
use daymark_core::style::{StyleClass, style_class};
use owo_colors::OwoColorize;

/// Extension trait for TUI rendering with colors.
pub trait Render {
    fn render(&self) -> String;
}

fn paint(class: StyleClass, text: &str) -> String {
    match class {
        StyleClass::Personal => text.truecolor(255, 183, 3).to_string(),
        StyleClass::Work => text.truecolor(33, 158, 188).to_string(),
        StyleClass::Other => text.truecolor(251, 133, 0).to_string(),
    }
}

impl Render for CalendarEvent {
    fn render(&self) -> String {
        let date = self.date.format("%a %b %-d").to_string();
        let text = if self.text.is_empty() {
            "(empty)".dimmed().to_string()
        } else {
            self.text.clone()
        };

        match &self.category {
            Some(category) => {
                let tag = format!("[{}]", category);
                let tag = match style_class(Some(category)) {
                    Some(class) => paint(class, &tag),
                    None => tag.dimmed().to_string(),
                };
                format!("{:<11} {} {}", date.bold(), text, tag)
            }
            None => format!("{:<11} {}", date.bold(), text),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridOptions {
    pub week_start: WeekStart,
    pub show_week_numbers: bool,
}

impl Default for GridOptions {
    fn default() -> Self {
        GridOptions {
            week_start: WeekStart::Sunday,
            show_week_numbers: true,
        }
    }
}

fn render_day(day: u32, mark: Option<&Option<daymark_core::Category>>, selected: bool) -> String {
    let label = format!("{:>2}", day);

    let styled = match mark {
        None => label,
        Some(category) => match style_class(category.as_ref()) {
            Some(class) => paint(class, &label).bold().to_string(),
            None => label.bold().underline().to_string(),
        },
    };

    if selected {
        styled.reversed().to_string()
    } else {
        styled
    }
}

/// Draw `view` as a grid, one line per week.
pub fn render_month(
    view: &MonthView,
    marks: &MarkedDays,
    selected: Option<NaiveDate>,
    options: GridOptions,
) -> String {
    let selected_day = selected
        .filter(|d| view.contains(*d))
        .map(|d| d.day());

    let gutter = if options.show_week_numbers { "   " } else { "" };
    let width = gutter.len() + 7 * 3;

    let mut lines = Vec::new();
    lines.push(format!("{:^width$}", view.title(), width = width).bold().to_string());

    let headers: Vec<String> = options
        .week_start
        .headers()
        .iter()
        .map(|h| format!("{:>2}", h))
        .collect();
    let week_label = if options.show_week_numbers { "Wk " } else { "" };
    lines.push(format!("{}{}", week_label.dimmed(), headers.join(" ").dimmed()));

    for week in view.weeks(options.week_start) {
        let cells: Vec<String> = week
            .days
            .iter()
            .map(|cell| match cell {
                Some(day) => render_day(*day, marks.get(day), selected_day == Some(*day)),
                None => "  ".to_string(),
            })
            .collect();

        let number = if options.show_week_numbers {
            format!("{:>2} ", week.number).dimmed().to_string()
        } else {
            String::new()
        };

        lines.push(format!("{}{}", number, cells.join(" ")));
    }

    lines.join("\n")
}

/// Month grid printed to stdout.
#[derive(Debug, Default)]
pub struct TerminalRenderer {
    options: GridOptions,
}

impl TerminalRenderer {
    pub fn new(options: GridOptions) -> Self {
        TerminalRenderer { options }
    }
}

impl Renderer for TerminalRenderer {
    fn render_month(&mut self, view: &MonthView, marks: &MarkedDays, selected: Option<NaiveDate>) {
        println!();
        println!("{}", render_month(view, marks, selected, self.options));
        println!();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use daymark_core::Category;

    /// Drop ANSI escape sequences so assertions see the plain layout.
    fn strip_ansi(s: &str) -> String {
        let mut out = String::new();
        let mut chars = s.chars();
        while let Some(c) = chars.next() {
            if c == '\u{1b}' {
                for c in chars.by_ref() {
                    if c.is_ascii_alphabetic() {
                        break;
                    }
                }
            } else {
                out.push(c);
            }
        }
        out
    }

    fn march() -> MonthView {
        MonthView::new(2024, 3).unwrap()
    }

    #[test]
    fn grid_layout_with_week_numbers() {
        let plain = strip_ansi(&render_month(
            &march(),
            &MarkedDays::new(),
            None,
            GridOptions::default(),
        ));
        let lines: Vec<&str> = plain.lines().collect();

        assert_eq!(lines[0].trim(), "March 2024");
        assert_eq!(lines[1], "Wk Su Mo Tu We Th Fr Sa");
        assert_eq!(lines[2], " 9                 1  2");
        assert_eq!(lines.len(), 2 + 6);
        assert_eq!(lines[7].trim(), "13 31");
    }

    #[test]
    fn grid_layout_monday_first_without_numbers() {
        let options = GridOptions {
            week_start: WeekStart::Monday,
            show_week_numbers: false,
        };
        let plain = strip_ansi(&render_month(&march(), &MarkedDays::new(), None, options));
        let lines: Vec<&str> = plain.lines().collect();

        assert_eq!(lines[1], "Mo Tu We Th Fr Sa Su");
        assert_eq!(lines[2], "             1  2  3");
        assert_eq!(lines[6], "25 26 27 28 29 30 31");
    }

    #[test]
    fn marked_days_are_styled() {
        let mut marks = MarkedDays::new();
        marks.insert(15, Some(Category::Work));

        let plain = render_month(&march(), &MarkedDays::new(), None, GridOptions::default());
        let marked = render_month(&march(), &marks, None, GridOptions::default());

        assert_ne!(plain, marked);
        assert_eq!(strip_ansi(&plain), strip_ansi(&marked));
    }

    #[test]
    fn selection_outside_month_is_ignored() {
        let other = NaiveDate::from_ymd_opt(2024, 4, 15).unwrap();
        let plain = render_month(&march(), &MarkedDays::new(), None, GridOptions::default());
        let with_selection =
            render_month(&march(), &MarkedDays::new(), Some(other), GridOptions::default());

        assert_eq!(plain, with_selection);
    }

    #[test]
    fn event_line_shows_text_and_category() {
        let event = CalendarEvent::new(
            NaiveDate::from_ymd_opt(2024, 3, 15).unwrap(),
            "Dentist",
            Some(Category::Personal),
        );
        let line = strip_ansi(&event.render());
        assert!(line.starts_with("Fri Mar 15"));
        assert!(line.contains("Dentist"));
        assert!(line.ends_with("[Personal]"));
    }
}
