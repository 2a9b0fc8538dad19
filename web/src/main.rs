//! Browser entry point. Routes, layout and theme all come from `ui::router`.

fn main() {
    dioxus::launch(ui::router::SiteRoot);
}
