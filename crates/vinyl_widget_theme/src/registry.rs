use std::{collections::HashSet, sync::LazyLock};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::{Theme, deserializers::de_themes};

macro_rules! generate_builtin_registries {
    ( $( [$path:literal, $name:ident] ),+ ) => {
        $(
            static $name: LazyLock<ThemeRegistry> = LazyLock::new(|| {
                ThemeRegistry::from_string(include_str!($path))
                    .expect("built-in themes are valid")
            });
        )+
    };
}

generate_builtin_registries!(["../themes/builtin.json", BUILTIN]);

/// Ordered, immutable list of themes available to the widget.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(transparent)]
pub struct ThemeRegistry {
    #[serde(deserialize_with = "de_themes")]
    themes: Vec<Theme>,
}

impl ThemeRegistry {
    pub fn new(themes: Vec<Theme>) -> Result<Self, ThemeLoadError> {
        validate_themes(&themes)?;
        Ok(Self { themes })
    }

    /// The themes bundled with the widget.
    pub fn builtin() -> &'static ThemeRegistry {
        &BUILTIN
    }

    pub fn from_string<S: AsRef<str>>(str: S) -> Result<Self, ThemeLoadError> {
        Ok(serde_json::from_str(str.as_ref())?)
    }

    pub fn list(&self) -> &[Theme] {
        &self.themes
    }

    pub fn len(&self) -> usize {
        self.themes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.themes.is_empty()
    }

    pub fn get(&self, index: usize) -> Result<&Theme, RegistryError> {
        self.themes.get(index).ok_or(RegistryError::OutOfRange {
            index,
            count: self.themes.len(),
        })
    }

    pub fn position(&self, id: &str) -> Option<usize> {
        self.themes.iter().position(|theme| theme.id == id)
    }

    pub fn get_by_id(&self, id: &str) -> Option<&Theme> {
        self.themes.iter().find(|theme| theme.id == id)
    }
}

pub(crate) fn validate_themes(themes: &[Theme]) -> Result<(), ThemeLoadError> {
    if themes.is_empty() {
        return Err(ThemeLoadError::Empty);
    }

    let mut seen = HashSet::with_capacity(themes.len());
    for theme in themes {
        if theme.id.trim().is_empty() {
            return Err(ThemeLoadError::EmptyId);
        }

        if !seen.insert(theme.id.as_str()) {
            return Err(ThemeLoadError::DuplicateId(theme.id.clone()));
        }
    }

    Ok(())
}

/// Index of the theme currently applied to a widget instance.
///
/// Always points inside the registry it was validated against.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ActiveTheme(usize);

impl ActiveTheme {
    pub fn new(registry: &ThemeRegistry, index: usize) -> Result<Self, RegistryError> {
        registry.get(index)?;
        Ok(Self(index))
    }

    pub fn index(&self) -> usize {
        self.0
    }

    /// Moves to `index`. On failure the previous selection is kept.
    pub fn select<'a>(
        &mut self,
        registry: &'a ThemeRegistry,
        index: usize,
    ) -> Result<&'a Theme, RegistryError> {
        let theme = registry.get(index)?;
        self.0 = index;
        Ok(theme)
    }

    pub fn theme<'a>(&self, registry: &'a ThemeRegistry) -> Result<&'a Theme, RegistryError> {
        registry.get(self.0)
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RegistryError {
    #[error("theme index {index} is out of range (registry holds {count} themes).")]
    OutOfRange { index: usize, count: usize },
}

#[derive(Error, Debug)]
pub enum ThemeLoadError {
    #[error("at least one theme needs to be provided.")]
    Empty,
    #[error("theme ids can't be empty.")]
    EmptyId,
    #[error("theme id \"{0}\" is used more than once.")]
    DuplicateId(String),
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    fn theme(id: &str) -> Theme {
        serde_json::from_value(serde_json::json!({
            "id": id,
            "name": id.to_uppercase(),
            "title": "Title",
            "artist": "Artist",
            "audioSrc": format!("./{id}.mp3"),
        }))
        .unwrap()
    }

    #[test]
    fn test_builtin_registry() {
        let registry = ThemeRegistry::builtin();

        assert_eq!(registry.len(), 2);
        assert_eq!(registry.list()[0].id, "GLUE");
        assert_eq!(registry.list()[1].id, "anything");
        assert_eq!(registry.position("anything"), Some(1));
        assert!(registry.get_by_id("missing").is_none());
    }

    #[test]
    fn test_builtin_glue_values() {
        let glue = ThemeRegistry::builtin().get(0).unwrap();

        assert_eq!(glue.name, "Snoopy x Glue (Night)");
        assert!(glue.background.is_none(), "empty background means absent");
        assert_eq!(glue.body_class.as_deref(), Some("starlight-background"));
        assert_eq!(glue.label_text.as_deref(), Some("S"));
        assert_eq!(glue.label_color.as_deref(), Some("#E8C67B"));
        assert_eq!(glue.primary_bg(), Some("#1D2B4D"));
        assert_eq!(
            glue.font_family.as_ref().map(|font| font.css()).as_deref(),
            Some("Comic Neue, system-ui, sans-serif")
        );
        assert_eq!(glue.vinyl_frame.as_ref().unwrap().radius(), "9999px");
    }

    #[test]
    fn test_get_out_of_range() {
        let registry = ThemeRegistry::builtin();

        assert_eq!(
            registry.get(2),
            Err(RegistryError::OutOfRange { index: 2, count: 2 })
        );
        assert!(registry.get(usize::MAX).is_err());
    }

    #[test]
    fn test_new_validates() {
        assert!(matches!(
            ThemeRegistry::new(vec![]),
            Err(ThemeLoadError::Empty)
        ));
        assert!(matches!(
            ThemeRegistry::new(vec![theme("a"), theme("a")]),
            Err(ThemeLoadError::DuplicateId(id)) if id == "a"
        ));
        assert!(matches!(
            ThemeRegistry::new(vec![theme(" ")]),
            Err(ThemeLoadError::EmptyId)
        ));
        assert_eq!(ThemeRegistry::new(vec![theme("a"), theme("b")]).unwrap().len(), 2);
    }

    #[test]
    fn test_from_string_validates() {
        assert!(ThemeRegistry::from_string("[]").is_err());
        assert!(ThemeRegistry::from_string("not json").is_err());

        let json = serde_json::to_string(&vec![theme("a"), theme("a")]).unwrap();
        let err = ThemeRegistry::from_string(json).unwrap_err();
        assert!(err.to_string().contains("more than once"));
    }

    #[test]
    fn test_active_theme_select() {
        let registry = ThemeRegistry::builtin();
        let mut active = ActiveTheme::default();
        assert_eq!(active.index(), 0);

        let theme = active.select(registry, 1).unwrap();
        assert_eq!(theme.id, "anything");
        assert_eq!(active.index(), 1);

        assert!(active.select(registry, 5).is_err());
        assert_eq!(active.index(), 1, "failed selection keeps the previous index");
        assert_eq!(active.theme(registry).unwrap().id, "anything");
    }

    #[test]
    fn test_active_theme_new() {
        let registry = ThemeRegistry::builtin();

        assert_eq!(ActiveTheme::new(registry, 1).unwrap().index(), 1);
        assert!(ActiveTheme::new(registry, 2).is_err());
    }
}
