use anyhow::Result;
use chrono::NaiveDate;
use daymark_core::Category;
use daymark_core::editor::{EditOutcome, EventEditor};
use dialoguer::{Input, Select};
use owo_colors::OwoColorize;

use crate::config::Settings;

/// What the user chose at the bottom of the editor form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Save,
    Clear,
    Cancel,
}

const ACTIONS: [(&str, Action); 3] = [
    ("Save Event", Action::Save),
    ("Clear Event", Action::Clear),
    ("Cancel", Action::Cancel),
];

pub fn run(settings: &Settings, date: NaiveDate) -> Result<()> {
    let mut store = settings.open_store();
    let mut editor = EventEditor::open(&store, date);

    let outcome = match prompt(&mut editor)? {
        Action::Save => editor.save(&mut store),
        Action::Clear => editor.clear(&mut store),
        Action::Cancel => return Ok(()),
    };
    report(&editor, outcome);

    Ok(())
}

/// Fill in `editor` interactively and ask what to do with it.
pub fn prompt(editor: &mut EventEditor) -> Result<Action> {
    println!("{}", editor.heading().bold());

    let variant = editor.variant();
    let text: String = Input::new()
        .with_prompt(format!("  {}", variant.text_label()))
        .with_initial_text(editor.text())
        .allow_empty(true)
        .interact_text()?;
    editor.set_text(text);

    if variant.has_category() {
        let (choices, current) = category_choices(editor);
        let items: Vec<&str> = choices.iter().map(|c| c.as_str()).collect();
        let selection = Select::new()
            .with_prompt("  Category")
            .items(&items)
            .default(current)
            .interact()?;
        editor.set_category(choices[selection].clone());
    }

    let items: Vec<&str> = ACTIONS.iter().map(|(label, _)| *label).collect();
    let selection = Select::new()
        .with_prompt("  Action")
        .items(&items)
        .default(0)
        .interact()?;

    Ok(ACTIONS[selection].1)
}

/// Categories to offer and the index of the editor's current one.
///
/// A custom category from the file is offered after the built-in ones so
/// re-saving doesn't silently replace it.
fn category_choices(editor: &EventEditor) -> (Vec<Category>, usize) {
    let mut choices = Category::BUILTIN.to_vec();

    let current = match editor.category() {
        Some(category) if !category.is_builtin() => {
            choices.push(category.clone());
            choices.len() - 1
        }
        _ => editor.category_index().unwrap_or(0),
    };

    (choices, current)
}

/// Tell the user what a save or clear did.
pub fn report(editor: &EventEditor, outcome: EditOutcome) {
    match outcome {
        EditOutcome::Saved => {
            println!("{}", format!("  Saved: {}", editor.text().trim()).green())
        }
        EditOutcome::Deleted => {
            println!("{}", format!("  Cleared {}", editor.heading()).yellow())
        }
        EditOutcome::Unchanged => {
            println!("{}", format!("  Nothing to change on {}", editor.heading()).dimmed())
        }
    }
}
