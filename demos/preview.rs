use std::env;

use tracing_subscriber::EnvFilter;
use vinyl_widget::{
    config::WidgetConfig,
    init,
    surface::MemorySurface,
    views::{AudioElement, WidgetEvent},
};

struct SilentAudio;

impl AudioElement for SilentAudio {
    fn play(&mut self) {}
    fn pause(&mut self) {}
}

/// Renders a theme onto an in-memory page and prints the result.
///
/// Usage: `cargo run --example preview -- [theme index]`
fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let mut widget = init(MemorySurface::new(), SilentAudio, &WidgetConfig::default())?;

    if let Some(index) = env::args().nth(1) {
        widget.handle(WidgetEvent::ThemeButtonClicked);
        widget.handle(WidgetEvent::MenuItemClicked(index.parse()?));
    }
    widget.handle(WidgetEvent::PlayClicked);

    println!("{}", serde_json::to_string_pretty(&widget.surface().snapshot())?);

    Ok(())
}
