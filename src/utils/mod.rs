mod colors;
pub use colors::*;

mod css;
pub use css::*;
