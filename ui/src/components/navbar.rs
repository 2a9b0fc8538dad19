use crate::i18n;
use crate::t;
use crate::theme::NAVBAR_CSS as NAVBAR_CSS_INLINE;
use dioxus::logger::tracing::{debug, warn};
use dioxus::prelude::*;
use once_cell::sync::OnceCell;

const NAVBAR_CSS: Asset = asset!("/assets/styling/navbar.css");

pub const SITE_NAME: &str = "Sitekit";

/// Link constructors for the navbar.
///
/// The navbar does not depend on the router. Whoever owns the `Route` enum
/// (the `router` module) registers functions that wrap the translated label in
/// a `Link`. Labels are looked up on every render, so a language switch
/// relabels the links.
pub struct NavBuilder {
    pub home: fn(label: &str) -> Element,
    pub about: fn(label: &str) -> Element,
}

static NAV_BUILDER: OnceCell<NavBuilder> = OnceCell::new();

/// Register the platform's link builders. Only the first registration wins.
pub fn register_nav(builder: NavBuilder) {
    if NAV_BUILDER.set(builder).is_err() {
        debug!("navbar links already registered; ignoring");
    }
}

/// Site navigation bar: brand, registered links and the locale switcher.
#[component]
pub fn Navbar() -> Element {
    i18n::init();

    // Global language code, when the platform provides one.
    let lang_code_ctx: Option<Signal<String>> = try_use_context::<Signal<String>>();
    let mut local_lang = use_signal(|| {
        lang_code_ctx
            .map(|code| code.peek().clone())
            .unwrap_or_else(i18n::current_language)
    });
    // Reading the context signal subscribes this render to language changes.
    let selected = lang_code_ctx.map_or_else(|| local_lang(), |code| code());
    let langs = use_signal(i18n::available_languages);
    let show_switcher = langs().len() > 1;

    debug!(lang = %selected, "navbar render");

    let on_change = move |evt: FormEvent| {
        let requested = evt.value();
        match i18n::set_language(&requested) {
            Ok(active) => {
                local_lang.set(active.clone());
                if let Some(mut code) = lang_code_ctx {
                    code.set(active);
                }
            }
            Err(err) => warn!("failed to switch language to {requested}: {err}"),
        }
    };

    let links = NAV_BUILDER.get().map(|b| {
        let home = (b.home)(&t!("nav-home"));
        let about = (b.about)(&t!("nav-about"));
        rsx! {
            {home}
            {about}
        }
    });

    let tagline = t!("tagline");

    rsx! {
        document::Link { rel: "stylesheet", href: NAVBAR_CSS }
        if cfg!(all(not(debug_assertions), not(target_arch = "wasm32"))) {
            document::Style { "{NAVBAR_CSS_INLINE}" }
        }

        header {
            id: "navbar",
            class: "navbar",
            div { class: "navbar__inner",
                div { class: "navbar__brand",
                    span { class: "navbar__brand-mark", "{SITE_NAME}" }
                    span { class: "navbar__brand-subtitle", "{tagline}" }
                }

                nav { class: "navbar__links",
                    if let Some(links) = links {
                        {links}
                    }
                }

                if show_switcher {
                    div { class: "navbar__locale",
                        label {
                            class: "visually-hidden",
                            r#for: "locale-select",
                            {t!("nav-language-label")}
                        }
                        select {
                            id: "locale-select",
                            value: "{selected}",
                            oninput: on_change,
                            for code in langs() {
                                option { key: "{code}", value: "{code}", "{code}" }
                            }
                        }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(app: fn() -> Element) -> String {
        let mut dom = VirtualDom::new(app);
        dom.rebuild_in_place();
        dioxus_ssr::render(&dom)
    }

    #[test]
    fn renders_a_single_header() {
        let html = render(|| rsx! { Navbar {} });
        assert_eq!(html.matches("id=\"navbar\"").count(), 1);
        assert_eq!(html.matches("<header").count(), 1);
        assert!(html.contains(SITE_NAME));
    }

    #[test]
    fn offers_every_embedded_language() {
        let html = render(|| rsx! { Navbar {} });
        assert!(html.contains("id=\"locale-select\""));
        for code in i18n::available_languages() {
            assert!(
                html.contains(&format!("value=\"{code}\"")),
                "missing locale option {code}"
            );
        }
    }

    #[test]
    fn switcher_follows_the_shared_language() {
        fn app() -> Element {
            use_context_provider(|| Signal::new("fr-FR".to_string()));
            rsx! { Navbar {} }
        }
        let html = render(app);
        assert!(
            html.contains("<select id=\"locale-select\" value=\"fr-FR\">"),
            "select should show the shared language: {html}"
        );
    }

    #[test]
    fn link_list_is_always_present() {
        let html = render(|| rsx! { Navbar {} });
        assert_eq!(html.matches("class=\"navbar__links\"").count(), 1);
    }
}
