use anyhow::Result;
use daymark_core::month::MonthView;

use crate::config::Settings;
use crate::render::render_month;

pub fn run(settings: &Settings, view: MonthView) -> Result<()> {
    let store = settings.open_store();
    let marks = view.marked_days(store.events());

    println!("{}", render_month(&view, &marks, None, settings.grid_options()));

    Ok(())
}
