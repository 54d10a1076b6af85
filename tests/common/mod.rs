#![allow(dead_code)]

pub mod tracing;

use serde_json::json;
use vinyl_widget::{
    surface::{MemorySurface, SurfaceSnapshot},
    theme::{Theme, ThemeRegistry},
    views::AudioElement,
};

/// Audio element that only counts calls.
#[derive(Debug, Default)]
pub struct CountingAudio {
    pub plays: usize,
    pub pauses: usize,
}

impl AudioElement for CountingAudio {
    fn play(&mut self) {
        self.plays += 1;
    }

    fn pause(&mut self) {
        self.pauses += 1;
    }
}

/// A theme with only the required fields.
pub fn bare_theme(id: &str) -> Theme {
    serde_json::from_value(json!({
        "id": id,
        "name": id,
        "title": format!("{id} title"),
        "artist": format!("{id} artist"),
        "audioSrc": format!("./assets/{id}.mp3"),
    }))
    .unwrap()
}

/// The built-in themes followed by a bare theme and a theme with a custom
/// class, an inline background and a partial palette.
pub fn mixed_registry() -> ThemeRegistry {
    let mut themes = ThemeRegistry::builtin().list().to_vec();
    themes.push(bare_theme("bare"));
    themes.push(
        serde_json::from_value(json!({
            "id": "sunset",
            "name": "Sunset",
            "title": "Golden Hour",
            "artist": "Someone",
            "audioSrc": "./assets/sunset.mp3",
            "background": "linear-gradient(#f97316, #7c2d12)",
            "bodyClass": "sunset-glow",
            "labelText": "GH",
            "labelColor": "#F97316",
            "fontFamily": ["Lora", "serif"],
            "colors": { "primaryBg": "#7C2D12", "action": "#F97316" },
            "vinylFrame": { "color": "#F97316" }
        }))
        .unwrap(),
    );

    ThemeRegistry::new(themes).unwrap()
}

/// Snapshot without the append-only font links.
pub fn without_fonts(surface: &MemorySurface) -> SurfaceSnapshot {
    SurfaceSnapshot {
        stylesheets: Vec::new(),
        ..surface.snapshot()
    }
}
