mod layout;
pub use layout::{Layout, CONTENT_CLASS};

pub mod navbar;
pub use navbar::{register_nav, NavBuilder, Navbar};
