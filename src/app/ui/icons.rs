//! Unicode UI icon constants.
//!
//! Uses a BMP-only "safe" subset for broad font coverage (no emoji fonts needed).

pub const ICON_MENU: &str = "☰";
pub const ICON_SIDE_TOGGLE: &str = "⟷";
pub const ICON_COPY: &str = "⎘";
pub const ICON_CIRCLE: &str = "◯";
pub const ICON_SEGMENT: &str = "╱";
pub const ICON_DONE: &str = "✔";
