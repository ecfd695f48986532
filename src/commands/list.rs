use anyhow::Result;
use daymark_core::month::MonthView;
use owo_colors::OwoColorize;

use crate::config::Settings;
use crate::render::Render;

pub fn run(settings: &Settings, view: MonthView) -> Result<()> {
    let store = settings.open_store();

    let mut events = store.events_in_month(view.year(), view.month());
    events.sort_by_key(|e| e.date);

    println!("{}", view.title().bold());

    if events.is_empty() {
        println!("{}", "  No events".dimmed());
        return Ok(());
    }

    for event in events {
        println!("  {}", event.render());
    }

    Ok(())
}
