use dioxus::logger::tracing::debug;
use dioxus::prelude::*;

/// Catch-all page. `segments` are the unmatched path segments from the router.
#[component]
pub fn NotFound(segments: Vec<String>) -> Element {
    let path = requested_path(&segments);
    debug!(%path, "no route matched");

    rsx! {
        section { class: "page page--not-found",
            h1 { {crate::t!("not-found-title")} }
            p { {crate::t!("not-found-body", path = path.as_str())} }
        }
    }
}

fn requested_path(segments: &[String]) -> String {
    format!("/{}", segments.join("/"))
}
