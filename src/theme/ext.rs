use vinyl_widget_theme::Theme;

use crate::{theme::BackgroundEffect, utils::label_text_color};

/// How the page background is produced for a theme.
///
/// Exactly one mode applies; they are listed in priority order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BackgroundMode<'a> {
    /// Explicit inline CSS background expression.
    Inline(&'a str),
    /// Named class on the page (and on the widget container when embedded).
    Class(&'a str),
    /// Plain `background-color` from the palette.
    Color(&'a str),
    /// Nothing; the page keeps its reset background.
    None,
}

/// Values derived from a theme when it is applied.
pub trait ThemeExt {
    fn background_mode(&self) -> BackgroundMode<'_>;

    /// The named effect to render directly on the widget container, if any.
    ///
    /// Follows `body_class` alone, so an inline `background` still gets it.
    fn background_effect(&self) -> Option<BackgroundEffect>;

    /// Text color for the vinyl label, when the theme colors the label.
    fn label_text_color(&self) -> Option<&'static str>;
}

impl ThemeExt for Theme {
    fn background_mode(&self) -> BackgroundMode<'_> {
        if let Some(background) = self.background.as_deref() {
            BackgroundMode::Inline(background)
        } else if let Some(class) = self.body_class.as_deref() {
            BackgroundMode::Class(class)
        } else if let Some(color) = self.primary_bg() {
            BackgroundMode::Color(color)
        } else {
            BackgroundMode::None
        }
    }

    fn background_effect(&self) -> Option<BackgroundEffect> {
        self.body_class.as_deref().and_then(BackgroundEffect::from_class)
    }

    fn label_text_color(&self) -> Option<&'static str> {
        self.label_color.as_deref().map(label_text_color)
    }
}
