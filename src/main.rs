//! Contact Form Frontend Entry Point

mod app;
mod components;
mod config;
mod context;
mod models;
mod store;

use app::App;
use leptos::prelude::*;
use rolling_logger::LoggerConfig;

fn main() {
    console_error_panic_hook::set_once();

    let level = if cfg!(debug_assertions) {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Info
    };
    if let Err(err) = rolling_logger::init(LoggerConfig { level, ..LoggerConfig::default() }) {
        web_sys::console::warn_1(&format!("Logger not installed: {}", err).into());
    }

    mount_to_body(App);
}
