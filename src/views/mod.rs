mod widget;
pub use widget::*;
