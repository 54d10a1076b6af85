use enum_assoc::Assoc;
use vinyl_widget_macros::IntoPaletteField;

/// Palette fields published to the page as `--theme-*` custom properties.
///
/// Use `resolve()` to read the token's value from a palette.
#[derive(Assoc, IntoPaletteField, Debug, Clone, Copy, PartialEq, Eq)]
#[field(Option<String>)]
#[func(pub fn css_var(&self) -> &'static str)]
pub enum PaletteToken {
    /// Page background.
    #[palette(primary_bg)]
    #[assoc(css_var = "--theme-primary-bg")]
    PrimaryBg,
    /// Decorative accent, used by the theme switch button.
    #[palette(accent)]
    #[assoc(css_var = "--theme-accent")]
    Accent,
    /// Secondary surfaces, used by the pause button.
    #[palette(secondary_bg)]
    #[assoc(css_var = "--theme-secondary-bg")]
    SecondaryBg,
    /// Primary action, used by the play button and the favorite icon.
    #[palette(action)]
    #[assoc(css_var = "--theme-action")]
    Action,
    /// Foreground text.
    #[palette(text)]
    #[assoc(css_var = "--theme-text")]
    Text,
}

impl PaletteToken {
    pub const ALL: [PaletteToken; 5] = [
        PaletteToken::PrimaryBg,
        PaletteToken::Accent,
        PaletteToken::SecondaryBg,
        PaletteToken::Action,
        PaletteToken::Text,
    ];
}

const STARLIGHT_LAYERS: &[&str] = &[
    "radial-gradient(circle 2.5px at 20px 40px, rgba(240, 248, 255, 0.9) 0%, transparent 2.5px)",
    "radial-gradient(circle 2.5px at 100px 70px, rgba(240, 248, 255, 0.9) 0%, transparent 2.5px)",
    "radial-gradient(circle 2.5px at 180px 25px, rgba(240, 248, 255, 0.9) 0%, transparent 2.5px)",
    "radial-gradient(circle 2px at 260px 90px, rgba(240, 248, 255, 0.7) 0%, transparent 2px)",
    "radial-gradient(circle 2.5px at 60px 95px, rgba(232, 198, 123, 0.6) 0%, transparent 2.5px)",
    "radial-gradient(circle 2.5px at 140px 50px, rgba(232, 198, 123, 0.6) 0%, transparent 2.5px)",
    "radial-gradient(circle 2px at 220px 120px, rgba(196, 158, 158, 0.6) 0%, transparent 2px)",
    "radial-gradient(circle 2.5px at 40px 130px, rgba(196, 158, 158, 0.6) 0%, transparent 2.5px)",
    "radial-gradient(circle 2px at 280px 45px, rgba(240, 248, 255, 0.9) 0%, transparent 2px)",
    "radial-gradient(circle 2.5px at 120px 110px, rgba(232, 198, 123, 0.6) 0%, transparent 2.5px)",
    "radial-gradient(circle 2px at 200px 75px, rgba(240, 248, 255, 0.9) 0%, transparent 2px)",
];

const BLOSSOM_LAYERS: &[&str] = &[
    "radial-gradient(circle 12px at 32px 24px, #FFB6C1 0%, transparent 12px)",
    "radial-gradient(circle 10px at 272px 32px, #FFB6C1 0%, transparent 10px)",
    "radial-gradient(circle 14px at 48px 80px, #FFB6C1 0%, transparent 14px)",
    "radial-gradient(circle 10px at 256px 88px, #FFB6C1 0%, transparent 10px)",
    "radial-gradient(circle 12px at 80px 128px, #FFB6C1 0%, transparent 12px)",
    "radial-gradient(circle 10px at 224px 136px, #FFB6C1 0%, transparent 10px)",
    "radial-gradient(circle 8px at 144px 64px, #FFB6C1 0%, transparent 8px)",
    "radial-gradient(circle 10px at 176px 80px, #FFB6C1 0%, transparent 10px)",
];

const BLOSSOM_SIZE: &str = "320px 160px, 320px 160px, 320px 160px, 320px 160px, \
                            320px 160px, 320px 160px, 320px 160px, 320px 160px";

const BLOSSOM_POSITION: &str = "32px 24px, 272px 32px, 48px 80px, 256px 88px, \
                                80px 128px, 224px 136px, 144px 64px, 176px 80px";

/// Background effects with a hand-authored fallback render for the embedded
/// widget container, which sits outside the page's class-driven cascade.
#[derive(Assoc, Debug, Clone, Copy, PartialEq, Eq)]
#[func(pub fn class_name(&self) -> &'static str)]
#[func(pub fn base_color(&self) -> &'static str)]
#[func(pub fn layers(&self) -> &'static [&'static str])]
#[func(pub fn size(&self) -> &'static str)]
#[func(pub fn position(&self) -> Option<&'static str>)]
pub enum BackgroundEffect {
    /// Night sky starfield.
    #[assoc(class_name = "starlight-background")]
    #[assoc(base_color = "#1D2B4D")]
    #[assoc(layers = STARLIGHT_LAYERS)]
    #[assoc(size = "320px 160px")]
    Starlight,
    /// Pink blossom dots on white.
    #[assoc(class_name = "anything-background-effect")]
    #[assoc(base_color = "#FDFDFD")]
    #[assoc(layers = BLOSSOM_LAYERS)]
    #[assoc(size = BLOSSOM_SIZE)]
    #[assoc(position = BLOSSOM_POSITION)]
    Anything,
}

impl BackgroundEffect {
    pub const ALL: [BackgroundEffect; 2] = [BackgroundEffect::Starlight, BackgroundEffect::Anything];

    pub fn from_class(class: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|effect| effect.class_name() == class)
    }

    /// The `background-image` value: every layer, front to back.
    pub fn image(&self) -> String {
        self.layers().join(", ")
    }
}
