//! Application shell: wires the store, the month view and a renderer together.

use chrono::NaiveDate;
use tracing::debug;

use crate::dispatch::{Dispatcher, UiEvent};
use crate::editor::{EditOutcome, EventEditor};
use crate::month::{MarkedDays, MonthView};
use crate::store::EventStore;

/// Draws the month grid. Implemented by whatever front end is in use.
pub trait Renderer {
    fn render_month(&mut self, view: &MonthView, marks: &MarkedDays, selected: Option<NaiveDate>);
}

/// Top-level state of a running calendar.
///
/// Every [`UiEvent`] goes through [`Shell::handle`], which applies it to the
/// store or view, redraws, and then notifies observers.
pub struct Shell<R: Renderer> {
    store: EventStore,
    view: MonthView,
    selected: Option<NaiveDate>,
    renderer: R,
    dispatcher: Dispatcher,
}

impl<R: Renderer> Shell<R> {
    /// Build the shell and draw the initial month.
    pub fn new(store: EventStore, view: MonthView, renderer: R) -> Self {
        let mut shell = Shell {
            store,
            view,
            selected: None,
            renderer,
            dispatcher: Dispatcher::new(),
        };
        shell.refresh();
        shell
    }

    pub fn store(&self) -> &EventStore {
        &self.store
    }

    pub fn view(&self) -> MonthView {
        self.view
    }

    pub fn selected(&self) -> Option<NaiveDate> {
        self.selected
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn renderer_mut(&mut self) -> &mut R {
        &mut self.renderer
    }

    /// Register an observer for every handled event.
    pub fn on_event<F>(&mut self, handler: F)
    where
        F: FnMut(&UiEvent) + 'static,
    {
        self.dispatcher.subscribe(handler);
    }

    pub fn marks(&self) -> MarkedDays {
        self.view.marked_days(self.store.events())
    }

    /// Redraw the current month.
    pub fn refresh(&mut self) {
        let marks = self.marks();
        self.renderer
            .render_month(&self.view, &marks, self.selected);
    }

    /// Apply `event`, redraw, then notify observers.
    ///
    /// Returns what a save or clear did to the store.
    pub fn handle(&mut self, event: UiEvent) -> Option<EditOutcome> {
        debug!(?event, "Handling event");

        let outcome = match &event {
            UiEvent::MonthChanged(view) => {
                self.view = *view;
                None
            }
            UiEvent::DaySelected(date) => {
                self.selected = Some(*date);
                None
            }
            UiEvent::Save {
                date,
                text,
                category,
            } => {
                let mut editor = EventEditor::open(&self.store, *date);
                editor.set_text(text.clone());
                if let Some(category) = category {
                    editor.set_category(category.clone());
                }
                Some(editor.save(&mut self.store))
            }
            UiEvent::Clear(date) => Some(EventEditor::open(&self.store, *date).clear(&mut self.store)),
        };

        self.refresh();
        self.dispatcher.emit(&event);
        outcome
    }

    pub fn next_month(&mut self) {
        self.handle(UiEvent::MonthChanged(self.view.next()));
    }

    pub fn prev_month(&mut self) {
        self.handle(UiEvent::MonthChanged(self.view.prev()));
    }

    pub fn select(&mut self, date: NaiveDate) {
        self.handle(UiEvent::DaySelected(date));
    }

    /// Editor for the selected day.
    pub fn editor(&self) -> Option<EventEditor> {
        self.selected
            .map(|date| EventEditor::open(&self.store, date))
    }

    /// Persist the form of an editor opened from this shell.
    pub fn submit(&mut self, editor: &EventEditor) -> Option<EditOutcome> {
        self.handle(UiEvent::Save {
            date: editor.date(),
            text: editor.text().to_string(),
            category: editor.category().cloned(),
        })
    }

    /// Hand the store back, e.g. when the window closes.
    pub fn into_store(self) -> EventStore {
        self.store
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::Category;
    use crate::variant::Variant;
    use std::cell::RefCell;
    use std::rc::Rc;
    use tempfile::TempDir;

    #[derive(Default)]
    struct Recorder {
        frames: Vec<(MonthView, MarkedDays, Option<NaiveDate>)>,
    }

    impl Renderer for Recorder {
        fn render_month(&mut self, view: &MonthView, marks: &MarkedDays, selected: Option<NaiveDate>) {
            self.frames.push((*view, marks.clone(), selected));
        }
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn shell(dir: &TempDir) -> Shell<Recorder> {
        let store = EventStore::open(dir.path().join("calendar_events.json"), Variant::Tagged);
        let view = MonthView::new(2024, 3).unwrap();
        Shell::new(store, view, Recorder::default())
    }

    #[test]
    fn draws_once_on_start() {
        let dir = TempDir::new().unwrap();
        let shell = shell(&dir);
        assert_eq!(shell.renderer().frames.len(), 1);
        assert!(shell.renderer().frames[0].1.is_empty());
    }

    #[test]
    fn save_marks_the_day() {
        let dir = TempDir::new().unwrap();
        let mut shell = shell(&dir);

        let outcome = shell.handle(UiEvent::Save {
            date: date(2024, 3, 15),
            text: "Dentist".into(),
            category: Some(Category::Work),
        });

        assert_eq!(outcome, Some(EditOutcome::Saved));
        let (_, marks, _) = shell.renderer().frames.last().unwrap();
        assert_eq!(marks.get(&15), Some(&Some(Category::Work)));
    }

    #[test]
    fn month_change_recomputes_marks() {
        let dir = TempDir::new().unwrap();
        let mut shell = shell(&dir);
        shell.handle(UiEvent::Save {
            date: date(2024, 4, 2),
            text: "Taxes".into(),
            category: None,
        });

        assert!(shell.marks().is_empty());
        shell.next_month();
        assert_eq!(shell.view(), MonthView::new(2024, 4).unwrap());
        assert!(shell.marks().contains_key(&2));

        shell.prev_month();
        assert!(shell.marks().is_empty());
    }

    #[test]
    fn selecting_a_day_keeps_the_month() {
        let dir = TempDir::new().unwrap();
        let mut shell = shell(&dir);

        shell.select(date(2024, 5, 1));
        assert_eq!(shell.selected(), Some(date(2024, 5, 1)));
        assert_eq!(shell.view(), MonthView::new(2024, 3).unwrap());
    }

    #[test]
    fn editor_follows_selection() {
        let dir = TempDir::new().unwrap();
        let mut shell = shell(&dir);
        assert!(shell.editor().is_none());

        shell.select(date(2024, 3, 15));
        let mut editor = shell.editor().unwrap();
        editor.set_text("Dentist");
        assert_eq!(shell.submit(&editor), Some(EditOutcome::Saved));

        let editor = shell.editor().unwrap();
        assert_eq!(editor.text(), "Dentist");
    }

    #[test]
    fn clear_unmarks_the_day() {
        let dir = TempDir::new().unwrap();
        let mut shell = shell(&dir);
        shell.handle(UiEvent::Save {
            date: date(2024, 3, 15),
            text: "Dentist".into(),
            category: None,
        });

        assert_eq!(
            shell.handle(UiEvent::Clear(date(2024, 3, 15))),
            Some(EditOutcome::Deleted)
        );
        assert!(shell.marks().is_empty());
        assert!(shell.into_store().is_empty());
    }

    #[test]
    fn observers_see_handled_events() {
        let dir = TempDir::new().unwrap();
        let mut shell = shell(&dir);
        let seen = Rc::new(RefCell::new(Vec::new()));
        {
            let seen = Rc::clone(&seen);
            shell.on_event(move |event| seen.borrow_mut().push(event.clone()));
        }

        shell.select(date(2024, 3, 15));
        shell.next_month();

        assert_eq!(
            *seen.borrow(),
            vec![
                UiEvent::DaySelected(date(2024, 3, 15)),
                UiEvent::MonthChanged(MonthView::new(2024, 4).unwrap()),
            ]
        );
    }
}
