use indexmap::IndexSet;
use tracing::debug;

use crate::surface::{Surface, SurfaceError};

/// Makes a font stylesheet available to the page.
///
/// Loading is fire-and-forget: the loader only makes sure the stylesheet is
/// linked and never waits for it to resolve.
pub trait FontLoader {
    fn ensure_stylesheet<S: Surface + ?Sized>(
        &mut self,
        surface: &mut S,
        key: &str,
        url: &str,
    ) -> Result<(), SurfaceError>;
}

/// Links each stylesheet into the document head once per key.
///
/// Links are never removed, so the set of loaded keys only grows.
#[derive(Debug, Clone, Default)]
pub struct LinkFontLoader {
    loaded: IndexSet<String>,
}

impl LinkFontLoader {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_loaded(&self, key: &str) -> bool {
        self.loaded.contains(key)
    }

    pub fn loaded(&self) -> impl Iterator<Item = &str> {
        self.loaded.iter().map(String::as_str)
    }
}

impl FontLoader for LinkFontLoader {
    fn ensure_stylesheet<S: Surface + ?Sized>(
        &mut self,
        surface: &mut S,
        key: &str,
        url: &str,
    ) -> Result<(), SurfaceError> {
        if surface.has_stylesheet(key) {
            self.loaded.insert(key.to_owned());
            return Ok(());
        }

        surface.append_stylesheet(key, url)?;
        debug!(key, url, "linked font stylesheet");
        self.loaded.insert(key.to_owned());

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::surface::MemorySurface;

    #[test]
    fn test_links_once_per_key() {
        let mut surface = MemorySurface::new();
        let mut fonts = LinkFontLoader::new();

        fonts
            .ensure_stylesheet(&mut surface, "theme-font-GLUE", "https://fonts.example/a.css")
            .unwrap();
        fonts
            .ensure_stylesheet(&mut surface, "theme-font-GLUE", "https://fonts.example/a.css")
            .unwrap();
        fonts
            .ensure_stylesheet(&mut surface, "theme-font-anything", "https://fonts.example/a.css")
            .unwrap();

        assert_eq!(surface.stylesheets().len(), 2);
        assert!(fonts.is_loaded("theme-font-GLUE"));
        assert_eq!(
            fonts.loaded().collect::<Vec<_>>(),
            ["theme-font-GLUE", "theme-font-anything"]
        );
    }

    #[test]
    fn test_existing_link_is_adopted() {
        let mut surface = MemorySurface::new();
        surface
            .append_stylesheet("theme-font-GLUE", "https://fonts.example/a.css")
            .unwrap();

        let mut fonts = LinkFontLoader::new();
        fonts
            .ensure_stylesheet(&mut surface, "theme-font-GLUE", "https://fonts.example/b.css")
            .unwrap();

        assert_eq!(surface.stylesheets().len(), 1);
        assert!(fonts.is_loaded("theme-font-GLUE"));
    }

    #[test]
    fn test_failed_link_is_not_recorded() {
        let mut surface = MemorySurface::new();
        let mut fonts = LinkFontLoader::new();

        let result = fonts.ensure_stylesheet(&mut surface, "theme-font-x", "https://x/(broken");

        assert!(result.is_err());
        assert!(!fonts.is_loaded("theme-font-x"));
        assert!(surface.stylesheets().is_empty());
    }
}
