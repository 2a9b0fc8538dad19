//! Site routes and the root component the launchers mount.
//!
//! Every route is nested under [`SiteLayout`], so each page renders inside
//! [`Layout`]. Unknown paths land on [`NotFound`].

use dioxus::prelude::*;

use crate::components::{register_nav, Layout, NavBuilder};
use crate::i18n;
use crate::theme::THEME_CSS;
use crate::views::{About, Home, NotFound};

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(SiteLayout)]
        #[route("/")]
        Home {},
        #[route("/about")]
        About {},
        #[route("/:..segments")]
        NotFound { segments: Vec<String> },
}

fn nav_link(route: Route, label: &str) -> Element {
    rsx! {
        Link { class: "navbar__link", active_class: "active", to: route, "{label}" }
    }
}

fn install_nav() {
    register_nav(NavBuilder {
        home: |label| nav_link(Route::Home {}, label),
        about: |label| nav_link(Route::About {}, label),
    });
}

#[component]
pub fn SiteLayout() -> Element {
    rsx! {
        Layout {
            Outlet::<Route> {}
        }
    }
}

/// Application root: theme, shared language signal and the router.
#[component]
pub fn SiteRoot() -> Element {
    i18n::init();
    install_nav();

    // Seeded from whatever locale the loader settled on; the navbar writes it back.
    let lang_code = use_context_provider(|| Signal::new(i18n::current_language()));

    rsx! {
        document::Style { "{THEME_CSS}" }

        // Remount the routed pages when the language changes so every label is re-read.
        div { key: "{lang_code()}",
            Router::<Route> {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_paths_resolve_to_pages() {
        assert_eq!("/".parse::<Route>().ok(), Some(Route::Home {}));
        assert_eq!("/about".parse::<Route>().ok(), Some(Route::About {}));
    }

    #[test]
    fn unknown_paths_keep_their_segments() {
        assert_eq!(
            "/blog/2024".parse::<Route>().ok(),
            Some(Route::NotFound {
                segments: vec!["blog".to_string(), "2024".to_string()]
            })
        );
    }

    #[test]
    fn routes_print_as_paths() {
        assert_eq!(Route::Home {}.to_string(), "/");
        assert_eq!(Route::About {}.to_string(), "/about");
    }
}
