use indexmap::{IndexMap, IndexSet};
use serde::Serialize;

use super::{MenuEntry, Slot, StyleProperty, Surface, SurfaceError};

/// State of a single element of a [`MemorySurface`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ElementState {
    pub classes: IndexSet<String>,
    pub styles: IndexMap<StyleProperty, String>,
    pub attributes: IndexMap<String, String>,
    pub text: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StylesheetLink {
    pub key: String,
    pub href: String,
}

/// Everything observable on a [`MemorySurface`], comparable with `==`.
///
/// Class and style comparisons ignore insertion order, the stylesheet and
/// menu lists do not.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SurfaceSnapshot {
    pub elements: IndexMap<Slot, ElementState>,
    pub custom_properties: IndexMap<String, String>,
    pub stylesheets: Vec<StylesheetLink>,
    pub menu: Vec<MenuEntry>,
}

/// In-memory page used by tests and previews.
///
/// Values are validated the way a CSS engine drops invalid declarations:
/// unbalanced parentheses and control characters are rejected, as are class
/// names containing whitespace.
#[derive(Debug, Clone)]
pub struct MemorySurface {
    state: SurfaceSnapshot,
}

impl Default for MemorySurface {
    fn default() -> Self {
        Self::new()
    }
}

impl MemorySurface {
    /// A page with every slot present, as served by the widget shell.
    pub fn new() -> Self {
        let elements = Slot::ALL
            .iter()
            .map(|slot| (*slot, ElementState::default()))
            .collect();

        Self {
            state: SurfaceSnapshot {
                elements,
                ..Default::default()
            },
        }
        .with_class(Slot::Body, "bg-gray-900")
        .with_class(Slot::ThemeMenu, "hidden")
    }

    /// A full page rendering without the embedded widget container.
    pub fn full_page() -> Self {
        Self::new().without(Slot::Widget)
    }

    pub fn without(mut self, slot: Slot) -> Self {
        self.state.elements.shift_remove(&slot);
        self
    }

    pub fn with_class(mut self, slot: Slot, class: &str) -> Self {
        if let Some(element) = self.state.elements.get_mut(&slot) {
            element.classes.insert(class.to_owned());
        }
        self
    }

    pub fn element(&self, slot: Slot) -> Option<&ElementState> {
        self.state.elements.get(&slot)
    }

    pub fn classes(&self, slot: Slot) -> Vec<&str> {
        self.element(slot)
            .map(|element| element.classes.iter().map(String::as_str).collect())
            .unwrap_or_default()
    }

    pub fn stylesheets(&self) -> &[StylesheetLink] {
        &self.state.stylesheets
    }

    pub fn menu(&self) -> &[MenuEntry] {
        &self.state.menu
    }

    pub fn snapshot(&self) -> SurfaceSnapshot {
        self.state.clone()
    }

    fn element_mut(&mut self, slot: Slot) -> Result<&mut ElementState, SurfaceError> {
        self.state
            .elements
            .get_mut(&slot)
            .ok_or(SurfaceError::MissingSlot(slot))
    }

    fn require(&self, slot: Slot) -> Result<(), SurfaceError> {
        if self.has(slot) {
            Ok(())
        } else {
            Err(SurfaceError::MissingSlot(slot))
        }
    }
}

fn validate_value(property: &str, value: &str) -> Result<(), SurfaceError> {
    let mut depth = 0i32;
    for c in value.chars() {
        match c {
            '(' => depth += 1,
            ')' => depth -= 1,
            c if c.is_control() && c != '\n' => {
                return Err(SurfaceError::invalid(property, value));
            }
            _ => {}
        }

        if depth < 0 {
            return Err(SurfaceError::invalid(property, value));
        }
    }

    if depth != 0 {
        return Err(SurfaceError::invalid(property, value));
    }

    Ok(())
}

fn validate_class(class: &str) -> Result<(), SurfaceError> {
    if class.is_empty() || class.chars().any(char::is_whitespace) {
        return Err(SurfaceError::invalid("class", class));
    }

    Ok(())
}

impl Surface for MemorySurface {
    fn has(&self, slot: Slot) -> bool {
        self.state.elements.contains_key(&slot)
    }

    fn add_class(&mut self, slot: Slot, class: &str) -> Result<(), SurfaceError> {
        validate_class(class)?;
        self.element_mut(slot)?.classes.insert(class.to_owned());
        Ok(())
    }

    fn remove_class(&mut self, slot: Slot, class: &str) -> Result<(), SurfaceError> {
        self.element_mut(slot)?.classes.shift_remove(class);
        Ok(())
    }

    fn has_class(&self, slot: Slot, class: &str) -> bool {
        self.element(slot)
            .is_some_and(|element| element.classes.contains(class))
    }

    fn set_style(
        &mut self,
        slot: Slot,
        property: StyleProperty,
        value: &str,
    ) -> Result<(), SurfaceError> {
        validate_value(property.css_name(), value)?;
        let element = self.element_mut(slot)?;

        // An empty declaration removes the property, as with `style.x = ''`.
        if value.trim().is_empty() {
            element.styles.shift_remove(&property);
        } else {
            element.styles.insert(property, value.to_owned());
        }

        Ok(())
    }

    fn clear_style(&mut self, slot: Slot, property: StyleProperty) -> Result<(), SurfaceError> {
        self.element_mut(slot)?.styles.shift_remove(&property);
        Ok(())
    }

    fn style(&self, slot: Slot, property: StyleProperty) -> Option<String> {
        self.element(slot)?.styles.get(&property).cloned()
    }

    fn set_text(&mut self, slot: Slot, text: &str) -> Result<(), SurfaceError> {
        self.element_mut(slot)?.text = Some(text.to_owned());
        Ok(())
    }

    fn text(&self, slot: Slot) -> Option<String> {
        self.element(slot)?.text.clone()
    }

    fn set_attribute(&mut self, slot: Slot, name: &str, value: &str) -> Result<(), SurfaceError> {
        validate_value(name, value)?;
        self.element_mut(slot)?
            .attributes
            .insert(name.to_owned(), value.to_owned());
        Ok(())
    }

    fn attribute(&self, slot: Slot, name: &str) -> Option<String> {
        self.element(slot)?.attributes.get(name).cloned()
    }

    fn set_custom_property(&mut self, name: &str, value: &str) -> Result<(), SurfaceError> {
        self.require(Slot::Document)?;
        if !name.starts_with("--") {
            return Err(SurfaceError::invalid("custom property name", name));
        }
        validate_value(name, value)?;

        self.state
            .custom_properties
            .insert(name.to_owned(), value.to_owned());
        Ok(())
    }

    fn remove_custom_property(&mut self, name: &str) -> Result<(), SurfaceError> {
        self.require(Slot::Document)?;
        self.state.custom_properties.shift_remove(name);
        Ok(())
    }

    fn custom_property(&self, name: &str) -> Option<String> {
        self.state.custom_properties.get(name).cloned()
    }

    fn has_stylesheet(&self, key: &str) -> bool {
        self.state.stylesheets.iter().any(|link| link.key == key)
    }

    fn append_stylesheet(&mut self, key: &str, href: &str) -> Result<(), SurfaceError> {
        validate_value("href", href)?;
        self.state.stylesheets.push(StylesheetLink {
            key: key.to_owned(),
            href: href.to_owned(),
        });
        Ok(())
    }

    fn clear_menu(&mut self) -> Result<(), SurfaceError> {
        self.require(Slot::ThemeMenu)?;
        self.state.menu.clear();
        Ok(())
    }

    fn append_menu_item(&mut self, entry: &MenuEntry) -> Result<(), SurfaceError> {
        self.require(Slot::ThemeMenu)?;
        self.state.menu.push(entry.clone());
        Ok(())
    }
}
