use anyhow::Result;
use chrono::NaiveDate;
use daymark_core::Category;
use daymark_core::editor::EventEditor;

use crate::commands::edit::report;
use crate::config::Settings;

/// Save `text` for `date` without prompting. Blank text clears the day.
pub fn run(settings: &Settings, date: NaiveDate, text: String, category: Option<Category>) -> Result<()> {
    let mut store = settings.open_store();

    let mut editor = EventEditor::open(&store, date);
    editor.set_text(text);
    if let Some(category) = category {
        editor.set_category(category);
    }

    let outcome = editor.save(&mut store);
    report(&editor, outcome);

    Ok(())
}
