use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::deserializers::{de_optional_font_stack, de_optional_string};

pub const DEFAULT_FRAME_WIDTH: &str = "2px";
pub const DEFAULT_FRAME_STYLE: &str = "solid";
pub const DEFAULT_FRAME_COLOR: &str = "#6E5A48";
pub const DEFAULT_FRAME_RADIUS: &str = "12px";

/// One complete visual and audio presentation of the widget.
///
/// Themes are plain data: switching themes replaces what has been applied to
/// the page, never the theme itself.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Theme {
    pub id: String,
    pub name: String,
    pub title: String,
    pub artist: String,
    pub audio_src: String,
    #[serde(default, deserialize_with = "de_optional_string", skip_serializing_if = "Option::is_none")]
    pub vinyl_image: Option<String>,
    /// Inline CSS background expression. Takes priority over `body_class`.
    #[serde(default, deserialize_with = "de_optional_string", skip_serializing_if = "Option::is_none")]
    pub background: Option<String>,
    #[serde(default, deserialize_with = "de_optional_string", skip_serializing_if = "Option::is_none")]
    pub body_class: Option<String>,
    #[serde(default, deserialize_with = "de_optional_font_stack", skip_serializing_if = "Option::is_none")]
    pub font_family: Option<FontStack>,
    #[serde(default, deserialize_with = "de_optional_string", skip_serializing_if = "Option::is_none")]
    pub font_url: Option<String>,
    #[serde(default, deserialize_with = "de_optional_string", skip_serializing_if = "Option::is_none")]
    pub corner_gif: Option<String>,
    #[serde(default, deserialize_with = "de_optional_string", skip_serializing_if = "Option::is_none")]
    pub label_text: Option<String>,
    /// CSS color or gradient used as the vinyl label background.
    #[serde(default, deserialize_with = "de_optional_string", skip_serializing_if = "Option::is_none")]
    pub label_color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub colors: Option<ThemePalette>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vinyl_frame: Option<VinylFrame>,
}

impl Theme {
    /// Key of the stylesheet link that provides this theme's font.
    pub fn font_link_key(&self) -> String {
        format!("theme-font-{}", self.id)
    }

    pub fn primary_bg(&self) -> Option<&str> {
        self.colors.as_ref().and_then(|colors| colors.primary_bg.as_deref())
    }
}

/// An ordered CSS font stack, e.g. `Comic Neue, system-ui, sans-serif`.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(transparent)]
pub struct FontStack(SmallVec<[String; 1]>);

impl FontStack {
    pub fn new(families: impl Into<SmallVec<[String; 1]>>) -> Self {
        Self(families.into())
    }

    pub fn families(&self) -> &[String] {
        &self.0
    }

    /// Renders the stack as a `font-family` declaration value.
    pub fn css(&self) -> String {
        self.0.join(", ")
    }
}

/// Semantic palette driving buttons, text and the `--theme-*` custom properties.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub struct ThemePalette {
    #[serde(default, deserialize_with = "de_optional_string")]
    pub primary_bg: Option<String>,
    #[serde(default, deserialize_with = "de_optional_string")]
    pub secondary_bg: Option<String>,
    #[serde(default, deserialize_with = "de_optional_string")]
    pub action: Option<String>,
    #[serde(default, deserialize_with = "de_optional_string")]
    pub text: Option<String>,
    #[serde(default, deserialize_with = "de_optional_string")]
    pub accent: Option<String>,
}

/// Border drawn around the disc's wrapper.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq, Default)]
pub struct VinylFrame {
    #[serde(default, deserialize_with = "de_optional_string")]
    pub color: Option<String>,
    #[serde(default, deserialize_with = "de_optional_string")]
    pub style: Option<String>,
    #[serde(default, deserialize_with = "de_optional_string")]
    pub width: Option<String>,
    #[serde(default, deserialize_with = "de_optional_string")]
    pub radius: Option<String>,
}

impl VinylFrame {
    /// The `border` shorthand, `<width> <style> <color>`.
    pub fn border(&self) -> String {
        format!(
            "{} {} {}",
            self.width.as_deref().unwrap_or(DEFAULT_FRAME_WIDTH),
            self.style.as_deref().unwrap_or(DEFAULT_FRAME_STYLE),
            self.color.as_deref().unwrap_or(DEFAULT_FRAME_COLOR),
        )
    }

    pub fn radius(&self) -> &str {
        self.radius.as_deref().unwrap_or(DEFAULT_FRAME_RADIUS)
    }
}
