use std::sync::Arc;

use crate::{
    config::WidgetConfig,
    surface::Surface,
    theme::{RegistryError, ThemeRegistry},
    views::{AudioElement, Widget},
};

/// Starts a widget with the built-in themes: builds the theme menu and
/// applies the configured initial theme.
pub fn init<S: Surface, A: AudioElement>(
    surface: S,
    audio: A,
    config: &WidgetConfig,
) -> Result<Widget<S, A>, RegistryError> {
    let registry = Arc::new(ThemeRegistry::builtin().clone());
    let mut widget = Widget::new(surface, audio, registry, config)?;
    widget.init()?;

    Ok(widget)
}
