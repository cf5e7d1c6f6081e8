//! Wedding Planner Frontend Entry Point

mod app;
mod components;
mod context;
mod storage;

use app::App;
use leptos::prelude::*;
use planner_core::AppConfig;

fn main() {
    console_error_panic_hook::set_once();
    let config = AppConfig::from_build_env();
    if let Err(err) = console_logger::init(config.log_level) {
        web_sys::console::warn_1(&format!("logging disabled: {err}").into());
    }
    mount_to_body(move || view! { <App config=config /> });
}
