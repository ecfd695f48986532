use anyhow::Result;
use daymark_core::dispatch::UiEvent;
use daymark_core::month::MonthView;
use daymark_core::shell::Shell;
use dialoguer::{Input, Select};
use tracing::debug;

use crate::commands::edit::{self, Action};
use crate::config::Settings;
use crate::render::TerminalRenderer;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MenuItem {
    PrevMonth,
    NextMonth,
    SelectDay,
    EditDay,
    Quit,
}

fn menu(has_selection: bool) -> Vec<(&'static str, MenuItem)> {
    let mut items = vec![
        ("Select day", MenuItem::SelectDay),
        ("Previous month", MenuItem::PrevMonth),
        ("Next month", MenuItem::NextMonth),
    ];
    if has_selection {
        items.insert(1, ("Edit selected day", MenuItem::EditDay));
    }
    items.push(("Quit", MenuItem::Quit));
    items
}

/// Interactive month view. Runs until the user quits.
pub fn run(settings: &Settings, view: MonthView) -> Result<()> {
    let renderer = TerminalRenderer::new(settings.grid_options());
    let mut shell = Shell::new(settings.open_store(), view, renderer);

    shell.on_event(|event| debug!(?event, "Calendar event"));

    loop {
        let items = menu(shell.selected().is_some());
        let labels: Vec<&str> = items.iter().map(|(label, _)| *label).collect();
        let selection = Select::new().items(&labels).default(0).interact()?;

        match items[selection].1 {
            MenuItem::PrevMonth => shell.prev_month(),
            MenuItem::NextMonth => shell.next_month(),
            MenuItem::SelectDay => {
                let current = shell.view();
                let days = current.days_in_month();
                let day: u32 = Input::new()
                    .with_prompt(format!("  Day (1-{})", days))
                    .validate_with(|d: &u32| {
                        if (1..=days).contains(d) {
                            Ok(())
                        } else {
                            Err(format!("Pick a day between 1 and {}", days))
                        }
                    })
                    .interact_text()?;

                if let Some(date) = current.day(day) {
                    shell.select(date);
                    // Selecting a day opens its editor straight away.
                    edit_selected(&mut shell)?;
                }
            }
            MenuItem::EditDay => edit_selected(&mut shell)?,
            MenuItem::Quit => break,
        }
    }

    Ok(())
}

fn edit_selected(shell: &mut Shell<TerminalRenderer>) -> Result<()> {
    let Some(mut editor) = shell.editor() else {
        return Ok(());
    };

    let outcome = match edit::prompt(&mut editor)? {
        Action::Save => shell.submit(&editor),
        Action::Clear => shell.handle(UiEvent::Clear(editor.date())),
        Action::Cancel => None,
    };

    if let Some(outcome) = outcome {
        edit::report(&editor, outcome);
    }

    Ok(())
}
