mod provider;
pub use provider::*;
use cfg_if::cfg_if;

cfg_if!(
    if #[cfg(feature = "assets")] {
        mod widget_assets;
        pub use widget_assets::*;
    }
);
