//! Core of the daymark calendar.
//!
//! This crate holds everything that doesn't depend on a particular front end:
//! - `event` and `store` for records and the JSON file they live in
//! - `month` and `style` for deciding which days to mark and how
//! - `editor`, `dispatch` and `shell` for the per-day form and event wiring
//! - `config` for user settings

pub mod config;
pub mod constants;
pub mod dispatch;
pub mod editor;
pub mod error;
pub mod event;
pub mod month;
pub mod shell;
pub mod store;
pub mod style;
pub mod variant;

pub use event::{CalendarEvent, Category};
pub use store::EventStore;
pub use variant::Variant;
