//! Presentation surface the widget renders into.
//!
//! The surface exposes the page as a fixed set of named [`Slot`]s instead of
//! free-form element lookups, so the applicator can run against a real page
//! bridge or an in-memory fake alike.

use enum_assoc::Assoc;
use serde::{Deserialize, Serialize};
use thiserror::Error;

cfg_if::cfg_if!(
    if #[cfg(any(test, feature = "test-support"))] {
        mod memory;
        pub use memory::*;
    }
);

/// Elements of the widget page touched by the theme engine.
#[derive(Assoc, Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[func(pub fn element_id(&self) -> &'static str)]
pub enum Slot {
    /// Document element; holds the `--theme-*` custom properties.
    #[assoc(element_id = ":root")]
    Document,
    /// Page body; receives the background and font.
    #[assoc(element_id = "body")]
    Body,
    /// Outer container used when the widget is embedded rather than full page.
    #[assoc(element_id = "widget")]
    Widget,
    #[assoc(element_id = "audio")]
    Audio,
    #[assoc(element_id = "vinyl")]
    Disc,
    #[assoc(element_id = "title")]
    Title,
    #[assoc(element_id = "artist")]
    Artist,
    #[assoc(element_id = "playBtn")]
    PlayButton,
    #[assoc(element_id = "pauseBtn")]
    PauseButton,
    #[assoc(element_id = "themeBtn")]
    ThemeButton,
    #[assoc(element_id = "themeMenu")]
    ThemeMenu,
    #[assoc(element_id = "vinylLabel")]
    Label,
    #[assoc(element_id = "cornerGif")]
    Corner,
    #[assoc(element_id = "vinylWrap")]
    Frame,
    #[assoc(element_id = "heartIcon")]
    Heart,
}

impl Slot {
    pub const ALL: [Slot; 15] = [
        Slot::Document,
        Slot::Body,
        Slot::Widget,
        Slot::Audio,
        Slot::Disc,
        Slot::Title,
        Slot::Artist,
        Slot::PlayButton,
        Slot::PauseButton,
        Slot::ThemeButton,
        Slot::ThemeMenu,
        Slot::Label,
        Slot::Corner,
        Slot::Frame,
        Slot::Heart,
    ];
}

/// Inline style properties written by the theme engine.
#[derive(Assoc, Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[func(pub fn css_name(&self) -> &'static str)]
pub enum StyleProperty {
    #[assoc(css_name = "background")]
    Background,
    #[assoc(css_name = "background-color")]
    BackgroundColor,
    #[assoc(css_name = "background-image")]
    BackgroundImage,
    #[assoc(css_name = "background-size")]
    BackgroundSize,
    #[assoc(css_name = "background-position")]
    BackgroundPosition,
    #[assoc(css_name = "background-repeat")]
    BackgroundRepeat,
    #[assoc(css_name = "color")]
    Color,
    #[assoc(css_name = "border")]
    Border,
    #[assoc(css_name = "border-radius")]
    BorderRadius,
    #[assoc(css_name = "font-family")]
    FontFamily,
}

/// One entry of the theme selection list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuEntry {
    pub index: usize,
    pub theme_id: String,
    pub label: String,
    pub class: String,
}

/// Mutable view of the widget page.
///
/// Mutations report failures instead of panicking; callers decide whether a
/// failure aborts anything. Clearing a value never fails on a present slot.
pub trait Surface {
    /// Whether the element exists on this page.
    fn has(&self, slot: Slot) -> bool;

    fn add_class(&mut self, slot: Slot, class: &str) -> Result<(), SurfaceError>;
    fn remove_class(&mut self, slot: Slot, class: &str) -> Result<(), SurfaceError>;
    fn has_class(&self, slot: Slot, class: &str) -> bool;

    fn set_style(
        &mut self,
        slot: Slot,
        property: StyleProperty,
        value: &str,
    ) -> Result<(), SurfaceError>;
    fn clear_style(&mut self, slot: Slot, property: StyleProperty) -> Result<(), SurfaceError>;
    fn style(&self, slot: Slot, property: StyleProperty) -> Option<String>;

    fn set_text(&mut self, slot: Slot, text: &str) -> Result<(), SurfaceError>;
    fn text(&self, slot: Slot) -> Option<String>;

    fn set_attribute(&mut self, slot: Slot, name: &str, value: &str) -> Result<(), SurfaceError>;
    fn attribute(&self, slot: Slot, name: &str) -> Option<String>;

    /// Sets a `--name` custom property on the document element.
    fn set_custom_property(&mut self, name: &str, value: &str) -> Result<(), SurfaceError>;
    fn remove_custom_property(&mut self, name: &str) -> Result<(), SurfaceError>;
    fn custom_property(&self, name: &str) -> Option<String>;

    /// Whether a stylesheet link with this id is present in the document head.
    fn has_stylesheet(&self, key: &str) -> bool;
    fn append_stylesheet(&mut self, key: &str, href: &str) -> Result<(), SurfaceError>;

    fn clear_menu(&mut self) -> Result<(), SurfaceError>;
    fn append_menu_item(&mut self, entry: &MenuEntry) -> Result<(), SurfaceError>;
}

/// Convenience operations built on top of [`Surface`].
pub trait SurfaceExt: Surface {
    /// Sets the property when a value is given, clears it otherwise.
    fn set_or_clear_style(
        &mut self,
        slot: Slot,
        property: StyleProperty,
        value: Option<&str>,
    ) -> Result<(), SurfaceError> {
        match value {
            Some(value) => self.set_style(slot, property, value),
            None => self.clear_style(slot, property),
        }
    }

    fn clear_styles(&mut self, slot: Slot, properties: &[StyleProperty]) -> Result<(), SurfaceError> {
        for property in properties {
            self.clear_style(slot, *property)?;
        }

        Ok(())
    }

    fn set_or_remove_custom_property(
        &mut self,
        name: &str,
        value: Option<&str>,
    ) -> Result<(), SurfaceError> {
        match value {
            Some(value) => self.set_custom_property(name, value),
            None => self.remove_custom_property(name),
        }
    }

    fn toggle_class(&mut self, slot: Slot, class: &str, on: bool) -> Result<(), SurfaceError> {
        if on {
            self.add_class(slot, class)
        } else {
            self.remove_class(slot, class)
        }
    }
}

impl<S: Surface + ?Sized> SurfaceExt for S {}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SurfaceError {
    #[error("element \"{}\" is not present on this page.", .0.element_id())]
    MissingSlot(Slot),
    #[error("invalid value for {property}: {value:?}")]
    InvalidValue { property: String, value: String },
}

impl SurfaceError {
    pub fn invalid(property: impl Into<String>, value: impl Into<String>) -> Self {
        Self::InvalidValue {
            property: property.into(),
            value: value.into(),
        }
    }
}
