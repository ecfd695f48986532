//! Editor/file-format flavours.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Which flavour of event editor is in use.
///
/// The variant decides which key holds the event text on disk and whether the
/// category selector is shown. Loading accepts every variant's keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Variant {
    /// One named event per day, tagged with a category and colour-coded.
    #[default]
    Tagged,
    /// Free-text description with a category.
    FreeText,
    /// Inline text only, no categories.
    Minimal,
}

impl Variant {
    pub const ALL: [Variant; 3] = [Variant::Tagged, Variant::FreeText, Variant::Minimal];

    /// JSON key the event text is written under.
    pub fn text_key(self) -> &'static str {
        match self {
            Variant::Tagged => "eventName",
            Variant::FreeText | Variant::Minimal => "description",
        }
    }

    pub fn has_category(self) -> bool {
        !matches!(self, Variant::Minimal)
    }

    /// Label for the text field in the editor.
    pub fn text_label(self) -> &'static str {
        match self {
            Variant::Tagged => "Event Name",
            Variant::FreeText | Variant::Minimal => "Description",
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Variant::Tagged => "tagged",
            Variant::FreeText => "free-text",
            Variant::Minimal => "minimal",
        }
    }
}

impl FromStr for Variant {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Variant::ALL
            .into_iter()
            .find(|v| v.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| {
                format!("Unknown variant '{s}'. Expected one of: tagged, free-text, minimal")
            })
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
