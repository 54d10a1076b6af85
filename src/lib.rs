pub mod applicator;

pub mod components;

pub mod config;

pub mod fonts;

pub mod host;

pub mod offline;

pub mod surface;

pub mod theme;

pub mod views;

mod utils;
pub use utils::{css_url, label_text_color, parse_hex_rgb, relative_luminance};

mod assets;
pub use assets::*;

mod init;
pub use init::*;
