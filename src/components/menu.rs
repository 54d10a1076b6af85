use indexmap::IndexMap;
use thiserror::Error;
use tracing::debug;

use crate::{
    surface::{MenuEntry, Slot, Surface, SurfaceError, SurfaceExt},
    theme::ThemeRegistry,
};

pub const MENU_ITEM_CLASS: &str = "theme-item no-drag";
pub const MENU_HIDDEN_CLASS: &str = "hidden";

/// A theme listed in the selection menu.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThemeMenuItem {
    /// Position of the theme in the registry.
    pub index: usize,
    pub name: String,
}

/// State of the theme selection menu.
///
/// Items are keyed by theme id and kept in registry order. Visibility is
/// mirrored onto the menu element through the `hidden` class.
#[derive(Debug, Clone, Default)]
pub struct ThemeMenu {
    items: IndexMap<String, ThemeMenuItem>,
    visible: bool,
}

impl ThemeMenu {
    pub fn new() -> Self {
        Self::default()
    }

    /// Clears the menu and lists every theme of `registry`, in order.
    pub fn build<S: Surface + ?Sized>(
        &mut self,
        registry: &ThemeRegistry,
        surface: &mut S,
    ) -> Result<(), SurfaceError> {
        self.items.clear();
        surface.clear_menu()?;

        for (index, theme) in registry.list().iter().enumerate() {
            surface.append_menu_item(&MenuEntry {
                index,
                theme_id: theme.id.clone(),
                label: theme.name.clone(),
                class: MENU_ITEM_CLASS.to_owned(),
            })?;

            self.items.insert(
                theme.id.clone(),
                ThemeMenuItem {
                    index,
                    name: theme.name.clone(),
                },
            );
        }

        debug!(items = self.items.len(), "built theme menu");

        self.sync(surface)
    }

    pub fn get(&self, theme_id: &str) -> Option<&ThemeMenuItem> {
        self.items.get(theme_id)
    }

    /// Registry index of the item for `theme_id`.
    pub fn item_index(&self, theme_id: &str) -> Result<usize, MenuError> {
        self.items
            .get(theme_id)
            .map(|item| item.index)
            .ok_or_else(|| MenuError::InvalidItem(theme_id.to_owned()))
    }

    pub fn get_index(&self, position: usize) -> Option<(&String, &ThemeMenuItem)> {
        self.items.get_index(position)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &ThemeMenuItem)> {
        self.items.iter()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn toggle<S: Surface + ?Sized>(&mut self, surface: &mut S) -> Result<(), SurfaceError> {
        self.visible = !self.visible;
        self.sync(surface)
    }

    pub fn show<S: Surface + ?Sized>(&mut self, surface: &mut S) -> Result<(), SurfaceError> {
        if self.visible {
            return Ok(());
        }

        self.visible = true;
        self.sync(surface)
    }

    pub fn hide<S: Surface + ?Sized>(&mut self, surface: &mut S) -> Result<(), SurfaceError> {
        if !self.visible {
            return Ok(());
        }

        self.visible = false;
        self.sync(surface)
    }

    fn sync<S: Surface + ?Sized>(&self, surface: &mut S) -> Result<(), SurfaceError> {
        surface.toggle_class(Slot::ThemeMenu, MENU_HIDDEN_CLASS, !self.visible)
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MenuError {
    #[error("no menu item for theme \"{0}\".")]
    InvalidItem(String),
}
