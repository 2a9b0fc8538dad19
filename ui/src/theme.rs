//! Stylesheets compiled into the crate.
//!
//! `THEME_CSS` carries the page-wide rules and the utility classes behind
//! [`CONTENT_CLASS`](crate::components::CONTENT_CLASS); `NAVBAR_CSS` styles the
//! navbar markup.

pub const THEME_CSS: &str = include_str!("../assets/theme/main.css");
pub const NAVBAR_CSS: &str = include_str!("../assets/styling/navbar.css");

/// CSS selector for a utility class name (`sm:px-6` → `.sm\:px-6`).
pub fn class_selector(class: &str) -> String {
    format!(".{}", class.replace(':', "\\:"))
}
