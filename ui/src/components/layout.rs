use dioxus::prelude::*;

use super::Navbar;

/// Classes applied to the content region: a 72rem centered column with
/// horizontal padding that widens at the `sm` and `lg` breakpoints.
pub const CONTENT_CLASS: &str = "max-w-6xl mx-auto px-4 sm:px-6 lg:px-8";

/// Page frame: the navbar followed by a centered content region holding `children` as-is.
#[component]
pub fn Layout(children: Element) -> Element {
    rsx! {
        div {
            Navbar {}
            main { class: CONTENT_CLASS, {children} }
        }
    }
}
