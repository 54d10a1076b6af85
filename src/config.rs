use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::{applicator::WidgetMode, offline::CacheConfig, surface::Surface};

/// Startup settings for a widget instance. Every field has a default, so
/// `{}` is a valid configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct WidgetConfig {
    /// Forces a rendering mode instead of detecting it from the page.
    pub mode: Option<WidgetMode>,
    /// Registry index applied on startup.
    pub initial_theme: usize,
    pub cache: CacheConfig,
}

impl WidgetConfig {
    pub fn from_string<S: AsRef<str>>(str: S) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(str.as_ref())?)
    }

    /// The configured mode, or the one implied by the page's elements.
    pub fn resolve_mode<S: Surface + ?Sized>(&self, surface: &S) -> WidgetMode {
        self.mode.unwrap_or_else(|| WidgetMode::detect(surface))
    }
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::surface::{MemorySurface, Slot};

    #[test]
    fn test_empty_config_uses_defaults() {
        let config = WidgetConfig::from_string("{}").unwrap();

        assert_eq!(config, WidgetConfig::default());
        assert_eq!(config.cache.name, "music-widget-cache-v10");
    }

    #[test]
    fn test_parse() {
        let config = WidgetConfig::from_string(
            r#"{ "mode": "full-page", "initialTheme": 1, "cache": { "storeResponses": true } }"#,
        )
        .unwrap();

        assert_eq!(config.mode, Some(WidgetMode::FullPage));
        assert_eq!(config.initial_theme, 1);
        assert!(config.cache.store_responses);
        assert!(!config.cache.precache.is_empty());
    }

    #[test]
    fn test_malformed_config() {
        assert!(WidgetConfig::from_string(r#"{ "mode": "sideways" }"#).is_err());
    }

    #[test]
    fn test_resolve_mode() {
        let embedded = MemorySurface::new();
        let full_page = MemorySurface::new().without(Slot::Widget);

        let detected = WidgetConfig::default();
        assert_eq!(detected.resolve_mode(&embedded), WidgetMode::Embedded);
        assert_eq!(detected.resolve_mode(&full_page), WidgetMode::FullPage);

        let forced = WidgetConfig {
            mode: Some(WidgetMode::FullPage),
            ..Default::default()
        };
        assert_eq!(forced.resolve_mode(&embedded), WidgetMode::FullPage);
    }
}
