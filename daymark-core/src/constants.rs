/// Events file used when nothing else is configured, relative to the working directory.
pub const DEFAULT_EVENTS_FILE: &str = "calendar_events.json";
