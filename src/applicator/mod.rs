//! Applies a [`Theme`] to a [`Surface`].
//!
//! Every application starts from a clean baseline: whatever the previous theme
//! contributed (classes, inline backgrounds, color overrides) is removed first,
//! so applying the same theme twice, or switching away and back, always ends
//! in the same observable state. Font stylesheet links are the exception;
//! they are only ever added.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::{
    fonts::{FontLoader, LinkFontLoader},
    surface::{Slot, StyleProperty, Surface, SurfaceError, SurfaceExt},
    theme::{
        BackgroundEffect, BackgroundMode, PaletteToken, RegistryError, Theme, ThemeExt,
        ThemeRegistry,
    },
    utils::css_url,
};

mod report;
pub use report::*;

/// `primary_bg` of the light theme. The play button keeps the theme's text
/// color on it instead of white.
pub const LIGHT_PRIMARY_BG: &str = "#FDFDFD";

const PLAY_BUTTON_TEXT: &str = "#fff";
const SPIN_CLASS: &str = "spin";
const UNFRAMED_RADIUS: &str = "9999px";

/// Classes the page shell may carry before any theme is applied.
const LEGACY_CLASSES: [&str; 2] = ["bg-gray-900", "folded-visual"];

const WIDGET_BACKGROUND: [StyleProperty; 5] = [
    StyleProperty::BackgroundColor,
    StyleProperty::BackgroundImage,
    StyleProperty::BackgroundSize,
    StyleProperty::BackgroundPosition,
    StyleProperty::BackgroundRepeat,
];

const ARTWORK: [StyleProperty; 3] = [
    StyleProperty::BackgroundImage,
    StyleProperty::BackgroundSize,
    StyleProperty::BackgroundPosition,
];

/// Where the widget is rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum WidgetMode {
    /// The widget owns the whole page.
    FullPage,
    /// The widget lives in a bounded container. Theme classes and named
    /// background effects are also rendered onto that container.
    Embedded,
}

impl WidgetMode {
    /// `Embedded` when the page has a widget container.
    pub fn detect<S: Surface + ?Sized>(surface: &S) -> Self {
        if surface.has(Slot::Widget) {
            WidgetMode::Embedded
        } else {
            WidgetMode::FullPage
        }
    }
}

/// Renders themes onto a surface and owns what it rendered.
#[derive(Debug, Clone)]
pub struct Applicator<F: FontLoader = LinkFontLoader> {
    mode: WidgetMode,
    fonts: F,
    /// Class added by the last application, removed on the next reset.
    applied_class: Option<String>,
}

impl Applicator<LinkFontLoader> {
    pub fn new(mode: WidgetMode) -> Self {
        Self::with_font_loader(mode, LinkFontLoader::new())
    }
}

impl<F: FontLoader> Applicator<F> {
    pub fn with_font_loader(mode: WidgetMode, fonts: F) -> Self {
        Self {
            mode,
            fonts,
            applied_class: None,
        }
    }

    pub fn mode(&self) -> WidgetMode {
        self.mode
    }

    pub fn fonts(&self) -> &F {
        &self.fonts
    }

    /// Applies the theme at `index`.
    ///
    /// An index outside the registry is reported before anything on the
    /// surface is touched.
    pub fn apply_theme<S: Surface + ?Sized>(
        &mut self,
        surface: &mut S,
        registry: &ThemeRegistry,
        index: usize,
    ) -> Result<ApplyReport, RegistryError> {
        let theme = registry.get(index)?;
        Ok(self.apply(surface, theme))
    }

    /// Applies `theme`, rendering as much as the surface accepts.
    pub fn apply<S: Surface + ?Sized>(&mut self, surface: &mut S, theme: &Theme) -> ApplyReport {
        let mut report = ApplyReport::new(&theme.id);

        report.record(RenderStep::Reset, self.reset(surface));
        report.record(RenderStep::Track, render_track(surface, theme));
        report.record(RenderStep::Artwork, render_artwork(surface, theme));
        report.record(RenderStep::Label, render_label(surface, theme));
        report.record(RenderStep::Background, self.render_background(surface, theme));
        report.record(RenderStep::Font, self.render_font(surface, theme));
        report.record(RenderStep::Corner, render_corner(surface, theme));
        report.record(RenderStep::WidgetEffect, self.render_widget_effect(surface, theme));
        report.record(RenderStep::Palette, render_palette(surface, theme));
        report.record(RenderStep::Frame, render_frame(surface, theme));

        debug!(theme = %theme.id, mode = ?self.mode, complete = report.is_complete(), "applied theme");

        report
    }

    fn embedded_widget<S: Surface + ?Sized>(&self, surface: &S) -> bool {
        self.mode == WidgetMode::Embedded && surface.has(Slot::Widget)
    }

    fn reset<S: Surface + ?Sized>(&mut self, surface: &mut S) -> Result<(), SurfaceError> {
        let applied = self.applied_class.take();
        let classes = BackgroundEffect::ALL
            .iter()
            .map(|effect| effect.class_name())
            .chain(LEGACY_CLASSES)
            .chain(applied.as_deref());

        let embedded = self.embedded_widget(surface);
        for class in classes {
            surface.remove_class(Slot::Body, class)?;
            if embedded {
                surface.remove_class(Slot::Widget, class)?;
            }
        }

        if embedded {
            surface.clear_styles(Slot::Widget, &WIDGET_BACKGROUND)?;
        }

        surface.clear_styles(
            Slot::Body,
            &[
                StyleProperty::Background,
                StyleProperty::BackgroundColor,
                StyleProperty::FontFamily,
            ],
        )
    }

    fn render_background<S: Surface + ?Sized>(
        &mut self,
        surface: &mut S,
        theme: &Theme,
    ) -> Result<(), SurfaceError> {
        match theme.background_mode() {
            BackgroundMode::Inline(background) => {
                surface.set_style(Slot::Body, StyleProperty::Background, background)
            }
            BackgroundMode::Class(class) => {
                self.applied_class = Some(class.to_owned());
                surface.add_class(Slot::Body, class)?;
                if self.embedded_widget(surface) {
                    surface.add_class(Slot::Widget, class)?;
                    debug!(class, "applied theme class to widget");
                }
                Ok(())
            }
            BackgroundMode::Color(color) => {
                surface.set_style(Slot::Body, StyleProperty::BackgroundColor, color)
            }
            BackgroundMode::None => Ok(()),
        }
    }

    fn render_font<S: Surface + ?Sized>(
        &mut self,
        surface: &mut S,
        theme: &Theme,
    ) -> Result<(), SurfaceError> {
        let family = theme.font_family.as_ref().map(|font| font.css());
        surface.set_or_clear_style(Slot::Body, StyleProperty::FontFamily, family.as_deref())?;

        if let Some(url) = theme.font_url.as_deref() {
            self.fonts
                .ensure_stylesheet(surface, &theme.font_link_key(), url)?;
        }

        Ok(())
    }

    fn render_widget_effect<S: Surface + ?Sized>(
        &self,
        surface: &mut S,
        theme: &Theme,
    ) -> Result<(), SurfaceError> {
        if !self.embedded_widget(surface) {
            return Ok(());
        }

        match theme.background_effect() {
            Some(effect) => render_effect(surface, Slot::Widget, effect),
            None => surface.clear_styles(
                Slot::Widget,
                &[StyleProperty::BackgroundColor, StyleProperty::BackgroundImage],
            ),
        }
    }
}

/// Draws a named effect directly onto `slot`.
pub fn render_effect<S: Surface + ?Sized>(
    surface: &mut S,
    slot: Slot,
    effect: BackgroundEffect,
) -> Result<(), SurfaceError> {
    surface.set_style(slot, StyleProperty::BackgroundColor, effect.base_color())?;
    surface.set_style(slot, StyleProperty::BackgroundImage, &effect.image())?;
    surface.set_style(slot, StyleProperty::BackgroundSize, effect.size())?;
    surface.set_or_clear_style(slot, StyleProperty::BackgroundPosition, effect.position())?;
    surface.set_style(slot, StyleProperty::BackgroundRepeat, "no-repeat")
}

/// Starts or stops the disc spinning.
pub fn update_vinyl<S: Surface + ?Sized>(
    surface: &mut S,
    is_playing: bool,
) -> Result<(), SurfaceError> {
    if !surface.has(Slot::Disc) {
        return Ok(());
    }

    surface.toggle_class(Slot::Disc, SPIN_CLASS, is_playing)
}

fn render_track<S: Surface + ?Sized>(surface: &mut S, theme: &Theme) -> Result<(), SurfaceError> {
    surface.set_text(Slot::Title, &theme.title)?;
    surface.set_text(Slot::Artist, &theme.artist)?;
    surface.set_attribute(Slot::Audio, "src", &theme.audio_src)
}

fn render_artwork<S: Surface + ?Sized>(surface: &mut S, theme: &Theme) -> Result<(), SurfaceError> {
    if !surface.has(Slot::Disc) {
        return Ok(());
    }

    match theme.vinyl_image.as_deref() {
        Some(image) => {
            surface.set_style(Slot::Disc, StyleProperty::BackgroundImage, &css_url(image))?;
            surface.set_style(Slot::Disc, StyleProperty::BackgroundSize, "cover")?;
            surface.set_style(Slot::Disc, StyleProperty::BackgroundPosition, "center")
        }
        None => surface.clear_styles(Slot::Disc, &ARTWORK),
    }
}

fn render_label<S: Surface + ?Sized>(surface: &mut S, theme: &Theme) -> Result<(), SurfaceError> {
    if !surface.has(Slot::Label) {
        return Ok(());
    }

    surface.set_text(Slot::Label, theme.label_text.as_deref().unwrap_or_default())?;

    match (theme.label_color.as_deref(), theme.label_text_color()) {
        (Some(background), Some(text)) => {
            surface.set_style(Slot::Label, StyleProperty::Background, background)?;
            surface.set_style(Slot::Label, StyleProperty::Color, text)
        }
        _ => surface.clear_styles(Slot::Label, &[StyleProperty::Background, StyleProperty::Color]),
    }
}

fn render_corner<S: Surface + ?Sized>(surface: &mut S, theme: &Theme) -> Result<(), SurfaceError> {
    if !surface.has(Slot::Corner) {
        return Ok(());
    }

    let image = theme.corner_gif.as_deref().map(css_url);
    surface.set_or_clear_style(Slot::Corner, StyleProperty::BackgroundImage, image.as_deref())
}

fn render_palette<S: Surface + ?Sized>(surface: &mut S, theme: &Theme) -> Result<(), SurfaceError> {
    let Some(colors) = theme.colors.as_ref() else {
        return clear_palette(surface);
    };

    for token in PaletteToken::ALL {
        surface.set_or_remove_custom_property(token.css_var(), token.resolve(colors).as_deref())?;
    }

    let text = colors.text.as_deref();
    let action = colors.action.as_deref();

    if surface.has(Slot::PlayButton) {
        let play_text = if colors.primary_bg.as_deref() == Some(LIGHT_PRIMARY_BG) {
            text
        } else {
            Some(PLAY_BUTTON_TEXT)
        };

        surface.set_or_clear_style(Slot::PlayButton, StyleProperty::Background, action)?;
        surface.set_or_clear_style(Slot::PlayButton, StyleProperty::Color, play_text)?;
        surface.set_style(Slot::PlayButton, StyleProperty::Border, "none")?;
    }

    if surface.has(Slot::PauseButton) {
        let background = colors.secondary_bg.as_deref();
        surface.set_or_clear_style(Slot::PauseButton, StyleProperty::Background, background)?;
        surface.set_or_clear_style(Slot::PauseButton, StyleProperty::Color, text)?;
        surface.set_style(Slot::PauseButton, StyleProperty::Border, "none")?;
    }

    if surface.has(Slot::ThemeButton) {
        let background = colors.accent.as_deref();
        surface.set_or_clear_style(Slot::ThemeButton, StyleProperty::Background, background)?;
        surface.set_or_clear_style(Slot::ThemeButton, StyleProperty::Color, text)?;
    }

    for slot in [Slot::Title, Slot::Artist] {
        if surface.has(slot) {
            surface.set_or_clear_style(slot, StyleProperty::Color, text)?;
        }
    }

    if surface.has(Slot::Heart) {
        surface.set_or_clear_style(Slot::Heart, StyleProperty::Color, action)?;
    }

    Ok(())
}

fn clear_palette<S: Surface + ?Sized>(surface: &mut S) -> Result<(), SurfaceError> {
    for token in PaletteToken::ALL {
        surface.remove_custom_property(token.css_var())?;
    }

    let overrides: [(Slot, &[StyleProperty]); 6] = [
        (
            Slot::PlayButton,
            &[StyleProperty::Background, StyleProperty::Color, StyleProperty::Border],
        ),
        (
            Slot::PauseButton,
            &[StyleProperty::Background, StyleProperty::Color, StyleProperty::Border],
        ),
        (Slot::ThemeButton, &[StyleProperty::Background, StyleProperty::Color]),
        (Slot::Title, &[StyleProperty::Color]),
        (Slot::Artist, &[StyleProperty::Color]),
        (Slot::Heart, &[StyleProperty::Color]),
    ];

    for (slot, properties) in overrides {
        if surface.has(slot) {
            surface.clear_styles(slot, properties)?;
        }
    }

    Ok(())
}

fn render_frame<S: Surface + ?Sized>(surface: &mut S, theme: &Theme) -> Result<(), SurfaceError> {
    if !surface.has(Slot::Frame) {
        return Ok(());
    }

    match theme.vinyl_frame.as_ref() {
        Some(frame) => {
            surface.set_style(Slot::Frame, StyleProperty::Border, &frame.border())?;
            surface.set_style(Slot::Frame, StyleProperty::BorderRadius, frame.radius())
        }
        None => {
            surface.clear_style(Slot::Frame, StyleProperty::Border)?;
            surface.set_style(Slot::Frame, StyleProperty::BorderRadius, UNFRAMED_RADIUS)
        }
    }
}
