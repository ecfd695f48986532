mod commands;
mod config;
mod logging;
mod render;

use anyhow::Result;
use chrono::{Local, NaiveDate};
use clap::{Parser, Subcommand};
use daymark_core::event::parse_date;
use daymark_core::month::MonthView;
use daymark_core::{Category, Variant};
use std::path::PathBuf;

use crate::config::Settings;

#[derive(Parser)]
#[command(name = "daymark")]
#[command(about = "Month calendar with one event per day, stored in a JSON file")]
struct Cli {
    /// Events file to use instead of the configured one
    #[arg(short, long, global = true)]
    file: Option<PathBuf>,

    /// Editor flavour: tagged, free-text or minimal
    #[arg(long, global = true)]
    variant: Option<Variant>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Browse months and edit days interactively (the default)
    Shell {
        /// Month to start on (YYYY-MM), defaults to the current month
        #[arg(short, long, value_parser = parse_month_arg)]
        month: Option<MonthView>,
    },
    /// Print the month grid with event days marked
    Show {
        /// Month to show (YYYY-MM), defaults to the current month
        #[arg(short, long, value_parser = parse_month_arg)]
        month: Option<MonthView>,
    },
    /// List the events in a month
    List {
        /// Month to list (YYYY-MM), defaults to the current month
        #[arg(short, long, value_parser = parse_month_arg)]
        month: Option<MonthView>,
    },
    /// Open the event editor for a day
    Edit {
        /// Day to edit (YYYY-MM-DD)
        #[arg(value_parser = parse_date_arg)]
        date: NaiveDate,
    },
    /// Set a day's event without prompting. Blank text clears the day.
    Set {
        /// Day to set (YYYY-MM-DD)
        #[arg(value_parser = parse_date_arg)]
        date: NaiveDate,

        /// Event text
        #[arg(required = true, num_args = 1..)]
        text: Vec<String>,

        /// Personal, Work, Other, or any custom name
        #[arg(short, long)]
        category: Option<Category>,
    },
    /// Remove a day's event
    Clear {
        /// Day to clear (YYYY-MM-DD)
        #[arg(value_parser = parse_date_arg)]
        date: NaiveDate,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init_logging()?;

    let settings = Settings::resolve(cli.file, cli.variant);

    match cli.command.unwrap_or(Commands::Shell { month: None }) {
        Commands::Shell { month } => commands::shell::run(&settings, month_or_current(month)),
        Commands::Show { month } => commands::show::run(&settings, month_or_current(month)),
        Commands::List { month } => commands::list::run(&settings, month_or_current(month)),
        Commands::Edit { date } => commands::edit::run(&settings, date),
        Commands::Set {
            date,
            text,
            category,
        } => commands::set::run(&settings, date, text.join(" "), category),
        Commands::Clear { date } => commands::clear::run(&settings, date),
    }
}

fn month_or_current(month: Option<MonthView>) -> MonthView {
    month.unwrap_or_else(|| MonthView::containing(Local::now().date_naive()))
}

fn parse_date_arg(s: &str) -> Result<NaiveDate, String> {
    parse_date(s).map_err(|e| e.to_string())
}

fn parse_month_arg(s: &str) -> Result<MonthView, String> {
    s.parse::<MonthView>().map_err(|e| e.to_string())
}
