//! Shared UI crate for Sitekit: the page layout, navbar, views and i18n.
//!
//! With the `router` feature the crate also owns the site's routes and the
//! [`router::SiteRoot`] component the web and desktop launchers mount.

pub mod components;
pub mod i18n;
pub mod theme;
pub mod views;

#[cfg(feature = "router")]
pub mod router;

pub use components::{Layout, Navbar};
