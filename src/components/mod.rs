mod menu;
pub use menu::*;
