//! Translated strings for the navbar and pages.
//!
//! Catalogs live in `ui/i18n/<locale>/sitekit-ui.ftl` and are compiled into the
//! binary. The shared [`LOADER`] picks the user's preferred locale the first
//! time it is touched (OS languages on desktop, `navigator.languages` on the
//! web) and falls back to [`FALLBACK_LANGUAGE`] for anything it lacks.
//!
//! Look strings up with `t!("nav-home")` or `t!("not-found-body", path = "/x")`.
use dioxus::logger::tracing::{debug, warn};
use i18n_embed::fluent::FluentLanguageLoader;
use i18n_embed::{I18nEmbedError, LanguageLoader};
use once_cell::sync::Lazy;
use rust_embed::Embed;
use unic_langid::LanguageIdentifier;

pub use i18n_embed_fl::fl;

/// Looks up a message in the active locale through [`LOADER`].
#[macro_export]
macro_rules! t {
    ($key:literal) => {
        $crate::i18n::fl!(&*$crate::i18n::LOADER, $key)
    };
    ($key:literal, $( $arg:ident = $value:expr ),+ $(,)?) => {
        $crate::i18n::fl!(&*$crate::i18n::LOADER, $key, $( $arg = $value ),+ )
    };
}

/// Must match `domain` in `i18n.toml`.
const DOMAIN: &str = "sitekit-ui";

pub const FALLBACK_LANGUAGE: &str = "en-US";

#[derive(Embed)]
#[folder = "i18n"]
struct Catalogs;

pub static LOADER: Lazy<FluentLanguageLoader> = Lazy::new(|| {
    let fallback = FALLBACK_LANGUAGE
        .parse()
        .unwrap_or_else(|_| LanguageIdentifier::default());
    let loader = FluentLanguageLoader::new(DOMAIN, fallback);
    let preferred = preferred_languages();
    match i18n_embed::select(&loader, &Catalogs, &preferred) {
        Ok(selected) => debug!(?preferred, ?selected, "locale selected"),
        Err(err) => warn!("locale selection failed, staying on {FALLBACK_LANGUAGE}: {err}"),
    }
    loader
});

/// Forces the loader (and the initial locale pick). Cheap after the first call.
pub fn init() {
    Lazy::force(&LOADER);
}

/// Tag of the locale strings are currently rendered in.
pub fn current_language() -> String {
    LOADER.current_language().to_string()
}

/// Switches the active locale and returns the tag that ended up active.
///
/// A tag that does not parse leaves the locale untouched. A well-formed tag
/// without a catalog resolves to the fallback.
pub fn set_language(tag: &str) -> Result<String, I18nEmbedError> {
    match tag.parse::<LanguageIdentifier>() {
        Ok(requested) => {
            i18n_embed::select(&*LOADER, &Catalogs, &[requested])?;
        }
        Err(err) => debug!(tag, %err, "ignoring malformed locale tag"),
    }
    Ok(current_language())
}

/// Locales with an embedded catalog, sorted by tag.
pub fn available_languages() -> Vec<String> {
    match LOADER.available_languages(&Catalogs) {
        Ok(found) => {
            let mut tags: Vec<String> = found.iter().map(ToString::to_string).collect();
            tags.sort();
            tags
        }
        Err(err) => {
            warn!("could not list embedded locales: {err}");
            vec![FALLBACK_LANGUAGE.to_string()]
        }
    }
}

fn preferred_languages() -> Vec<LanguageIdentifier> {
    #[cfg(target_arch = "wasm32")]
    let preferred = i18n_embed::WebLanguageRequester::requested_languages();
    #[cfg(not(target_arch = "wasm32"))]
    let preferred = i18n_embed::DesktopLanguageRequester::requested_languages();
    preferred
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_catalog_is_listed() {
        assert_eq!(available_languages(), ["en-US", "es-ES", "fr-FR"]);
    }

    #[test]
    fn macro_config_names_the_catalog_files() {
        const CONFIG: &str = include_str!("../i18n.toml");
        assert!(
            CONFIG.contains(&format!("domain = \"{DOMAIN}\"")),
            "i18n.toml must pin the `{DOMAIN}` domain used by the loader"
        );
        let catalog = format!("{FALLBACK_LANGUAGE}/{DOMAIN}.ftl");
        assert!(Catalogs::iter().any(|path| path == catalog.as_str()));
    }

    #[test]
    fn init_can_run_repeatedly() {
        init();
        init();
        assert!(!fl!(&*LOADER, "nav-home").is_empty());
    }

    // The loader is shared, so every assertion about the active locale lives here.
    #[test]
    fn switching_locales() {
        init();

        assert_eq!(set_language("en-US").unwrap(), "en-US");
        assert_eq!(fl!(&*LOADER, "nav-home"), "Home");

        assert_eq!(set_language("fr-FR").unwrap(), "fr-FR");
        assert_eq!(current_language(), "fr-FR");
        assert_eq!(fl!(&*LOADER, "nav-home"), "Accueil");

        assert_eq!(set_language("not a language tag!").unwrap(), "fr-FR");
        assert_eq!(fl!(&*LOADER, "nav-home"), "Accueil");

        let unknown = set_language("zz-ZZ");
        assert!(unknown.is_ok(), "unknown locale should fall back: {unknown:?}");
        assert_eq!(unknown.unwrap(), FALLBACK_LANGUAGE);
        assert_eq!(fl!(&*LOADER, "nav-home"), "Home");
    }
}
