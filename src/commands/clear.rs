use anyhow::Result;
use chrono::NaiveDate;
use daymark_core::editor::EventEditor;

use crate::commands::edit::report;
use crate::config::Settings;

pub fn run(settings: &Settings, date: NaiveDate) -> Result<()> {
    let mut store = settings.open_store();

    let editor = EventEditor::open(&store, date);
    let outcome = editor.clear(&mut store);
    report(&editor, outcome);

    Ok(())
}
