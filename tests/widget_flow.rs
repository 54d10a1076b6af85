#![cfg(feature = "test-support")]

mod common;

use std::sync::Arc;

use vinyl_widget::{
    applicator::WidgetMode,
    components::MENU_HIDDEN_CLASS,
    config::WidgetConfig,
    init,
    surface::{MemorySurface, Slot, StyleProperty, Surface},
    theme::RegistryError,
    views::{Propagation, Widget, WidgetEvent},
};

use crate::common::{CountingAudio, mixed_registry, tracing::init_tracing_from_env, without_fonts};

#[test]
fn init_builds_menu_and_applies_initial_theme() {
    init_tracing_from_env();

    let widget = init(MemorySurface::new(), CountingAudio::default(), &WidgetConfig::default()).unwrap();

    let labels: Vec<_> = widget
        .surface()
        .menu()
        .iter()
        .map(|entry| entry.label.as_str())
        .collect();
    assert_eq!(labels, ["Snoopy x Glue (Night)", "Anything"]);
    assert_eq!(widget.surface().text(Slot::Title).as_deref(), Some("GLUE SONG"));
    assert_eq!(
        widget.surface().attribute(Slot::Audio, "src").as_deref(),
        Some("./assets/clairo_2.mp3")
    );
    assert!(widget.surface().has_class(Slot::ThemeMenu, MENU_HIDDEN_CLASS));
}

#[test]
fn init_rejects_unknown_initial_theme() {
    let config = WidgetConfig::from_string(r#"{ "initialTheme": 9 }"#).unwrap();

    let result = init(MemorySurface::new(), CountingAudio::default(), &config);

    assert!(matches!(result, Err(RegistryError::OutOfRange { index: 9, count: 2 })));
}

#[test]
fn forced_full_page_mode_leaves_widget_alone() {
    let config = WidgetConfig::from_string(r#"{ "mode": "full-page" }"#).unwrap();

    let widget = init(MemorySurface::new(), CountingAudio::default(), &config).unwrap();

    assert_eq!(widget.mode(), WidgetMode::FullPage);
    assert!(widget.surface().classes(Slot::Widget).is_empty());
    assert_eq!(widget.surface().style(Slot::Widget, StyleProperty::BackgroundImage), None);
}

#[test]
fn menu_selection_flow() {
    init_tracing_from_env();
    let registry = Arc::new(mixed_registry());
    let mut widget = Widget::new(
        MemorySurface::new(),
        CountingAudio::default(),
        registry,
        &WidgetConfig::default(),
    )
    .unwrap();
    widget.init().unwrap();
    assert_eq!(widget.surface().menu().len(), 4);

    // The theme button consumes its click so the document doesn't close the menu again.
    assert_eq!(widget.handle(WidgetEvent::ThemeButtonClicked), Propagation::Stop);
    assert!(widget.menu().is_visible());

    assert_eq!(widget.handle(WidgetEvent::MenuItemClicked(3)), Propagation::Continue);
    widget.handle(WidgetEvent::DocumentClicked);

    assert_eq!(widget.active().index(), 3);
    assert!(!widget.menu().is_visible());
    assert_eq!(widget.surface().text(Slot::Label).as_deref(), Some("GH"));
    assert_eq!(
        widget.surface().style(Slot::Body, StyleProperty::FontFamily).as_deref(),
        Some("Lora, serif")
    );
}

#[test]
fn playback_flow() {
    let mut widget = init(MemorySurface::new(), CountingAudio::default(), &WidgetConfig::default()).unwrap();

    widget.handle(WidgetEvent::PlayClicked);
    widget.handle(WidgetEvent::MenuItemClicked(1));
    assert!(widget.surface().has_class(Slot::Disc, "spin"));

    widget.handle(WidgetEvent::PauseClicked);
    widget.handle(WidgetEvent::AudioPaused);
    assert!(!widget.surface().has_class(Slot::Disc, "spin"));

    let (_, audio) = widget.into_parts();
    assert_eq!((audio.plays, audio.pauses), (1, 1));
}

#[test]
fn widget_without_disc_still_plays() {
    let surface = MemorySurface::new().without(Slot::Disc).without(Slot::Corner);

    let mut widget = init(surface, CountingAudio::default(), &WidgetConfig::default()).unwrap();
    widget.handle(WidgetEvent::PlayClicked);

    assert!(widget.is_playing());
    assert_eq!(widget.audio().plays, 1);
}

#[test]
fn reselecting_the_active_theme_is_stable() {
    let mut widget = init(MemorySurface::new(), CountingAudio::default(), &WidgetConfig::default()).unwrap();
    let before = without_fonts(widget.surface());

    widget.handle(WidgetEvent::MenuItemClicked(0));

    assert_eq!(without_fonts(widget.surface()), before);
}
