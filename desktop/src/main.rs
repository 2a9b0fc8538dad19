#![cfg_attr(all(windows, not(debug_assertions)), windows_subsystem = "windows")]

use dioxus::desktop::tao::dpi::LogicalSize;
use dioxus::desktop::tao::window::WindowBuilder;
use dioxus::desktop::Config;
use dioxus::prelude::*;
use ui::components::navbar::SITE_NAME;
use ui::router::SiteRoot;

fn main() {
    // Wide enough for the full content column with `lg` padding; the minimum
    // width still lands below the `sm` breakpoint.
    let window = WindowBuilder::new()
        .with_title(SITE_NAME)
        .with_inner_size(LogicalSize::new(1240.0, 820.0))
        .with_min_inner_size(LogicalSize::new(480.0, 360.0));

    LaunchBuilder::desktop()
        .with_cfg(Config::new().with_window(window))
        .launch(SiteRoot);
}
