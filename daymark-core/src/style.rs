//! Category to day-styling lookup.

use crate::event::Category;

/// Styling applied to a marked day in the month grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StyleClass {
    Personal,
    Work,
    Other,
}

impl StyleClass {
    /// Class name added next to `day-with-event` on a styled day.
    pub fn css_class(self) -> &'static str {
        match self {
            StyleClass::Personal => "personal",
            StyleClass::Work => "work",
            StyleClass::Other => "other",
        }
    }
}

/// Styling for a day whose event has `category`.
///
/// Custom or missing categories get no special styling.
pub fn style_class(category: Option<&Category>) -> Option<StyleClass> {
    match category? {
        Category::Personal => Some(StyleClass::Personal),
        Category::Work => Some(StyleClass::Work),
        Category::Other => Some(StyleClass::Other),
        Category::Custom(_) => None,
    }
}
