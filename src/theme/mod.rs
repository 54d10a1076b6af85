//! Theme kinds and derived values used when applying a theme to a page.
//!
//! The theme data model itself lives in `vinyl_widget_theme` and is
//! re-exported here.

pub use vinyl_widget_theme::*;

mod ext;
pub use ext::*;

mod kinds;
pub use kinds::*;
