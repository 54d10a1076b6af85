use std::sync::Arc;

use tracing::{debug, warn};

use crate::{
    applicator::{Applicator, ApplyReport, WidgetMode, update_vinyl},
    components::ThemeMenu,
    config::WidgetConfig,
    surface::Surface,
    theme::{ActiveTheme, RegistryError, ThemeRegistry},
};

/// Playback element driven by the widget's buttons.
///
/// Both calls are fire-and-forget: the element reports the actual state
/// change back through [`WidgetEvent::AudioStarted`] and
/// [`WidgetEvent::AudioPaused`].
pub trait AudioElement {
    fn play(&mut self);
    fn pause(&mut self);
}

/// User and media events the widget reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WidgetEvent {
    PlayClicked,
    PauseClicked,
    AudioStarted,
    AudioPaused,
    ThemeButtonClicked,
    /// A menu entry was clicked. Carries the entry's registry index.
    MenuItemClicked(usize),
    /// A click that reached the document.
    DocumentClicked,
}

/// Whether an event should keep bubbling to the document after being handled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Propagation {
    Continue,
    Stop,
}

/// A running player widget: one surface, one audio element and the theme
/// currently applied to them.
pub struct Widget<S: Surface, A: AudioElement> {
    surface: S,
    audio: A,
    registry: Arc<ThemeRegistry>,
    active: ActiveTheme,
    applicator: Applicator,
    menu: ThemeMenu,
    config: WidgetConfig,
    is_playing: bool,
}

impl<S: Surface, A: AudioElement> Widget<S, A> {
    /// Fails when the configured initial theme is not in `registry`.
    pub fn new(
        surface: S,
        audio: A,
        registry: Arc<ThemeRegistry>,
        config: &WidgetConfig,
    ) -> Result<Self, RegistryError> {
        let active = ActiveTheme::new(&registry, config.initial_theme)?;
        let mode = config.resolve_mode(&surface);

        debug!(?mode, theme = active.index(), "created widget");

        Ok(Self {
            surface,
            audio,
            registry,
            active,
            applicator: Applicator::new(mode),
            menu: ThemeMenu::new(),
            config: config.clone(),
            is_playing: false,
        })
    }

    /// Builds the theme menu and applies the active theme.
    pub fn init(&mut self) -> Result<ApplyReport, RegistryError> {
        if let Err(err) = self.menu.build(&self.registry, &mut self.surface) {
            warn!(%err, "failed to build theme menu");
        }

        self.select_theme(self.active.index())
    }

    /// Makes the theme at `index` active and applies it.
    ///
    /// An unknown index leaves both the surface and the active theme as they were.
    pub fn select_theme(&mut self, index: usize) -> Result<ApplyReport, RegistryError> {
        let theme = self.active.select(&self.registry, index)?;
        Ok(self.applicator.apply(&mut self.surface, theme))
    }

    pub fn handle(&mut self, event: WidgetEvent) -> Propagation {
        match event {
            WidgetEvent::PlayClicked => {
                self.audio.play();
                self.set_playing(true);
            }
            WidgetEvent::PauseClicked => {
                self.audio.pause();
                self.set_playing(false);
            }
            WidgetEvent::AudioStarted => self.set_playing(true),
            WidgetEvent::AudioPaused => self.set_playing(false),
            WidgetEvent::ThemeButtonClicked => {
                if let Err(err) = self.menu.toggle(&mut self.surface) {
                    warn!(%err, "failed to toggle theme menu");
                }
                return Propagation::Stop;
            }
            WidgetEvent::MenuItemClicked(index) => match self.select_theme(index) {
                Ok(_) => self.hide_menu(),
                Err(err) => debug!(%err, "ignored theme selection"),
            },
            WidgetEvent::DocumentClicked => self.hide_menu(),
        }

        Propagation::Continue
    }

    fn set_playing(&mut self, is_playing: bool) {
        self.is_playing = is_playing;

        if let Err(err) = update_vinyl(&mut self.surface, is_playing) {
            warn!(%err, "failed to update vinyl");
        }
    }

    fn hide_menu(&mut self) {
        if let Err(err) = self.menu.hide(&mut self.surface) {
            warn!(%err, "failed to hide theme menu");
        }
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    pub fn audio(&self) -> &A {
        &self.audio
    }

    pub fn registry(&self) -> &ThemeRegistry {
        &self.registry
    }

    pub fn active(&self) -> ActiveTheme {
        self.active
    }

    pub fn menu(&self) -> &ThemeMenu {
        &self.menu
    }

    pub fn mode(&self) -> WidgetMode {
        self.applicator.mode()
    }

    pub fn config(&self) -> &WidgetConfig {
        &self.config
    }

    pub fn is_playing(&self) -> bool {
        self.is_playing
    }

    pub fn into_parts(self) -> (S, A) {
        (self.surface, self.audio)
    }
}
