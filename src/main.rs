#![allow(warnings)]
//! Marketplace Admin Frontend Entry Point

mod api;
mod app;
mod components;
mod config;
mod context;
mod debounce;
mod error;
mod logging;
mod models;
mod notifications;
mod store;
mod table;

use app::App;
use config::AppConfig;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();

    let (config, config_error) = match AppConfig::load() {
        Ok(config) => (config, None),
        Err(err) => (AppConfig::default().resolve_against_page(), Some(err)),
    };

    logging::init(config.log_level_filter());
    if let Some(err) = config_error {
        log::warn!("[CONFIG] {}, falling back to defaults", err);
    }
    log::info!("[APP] API base {}", config.api_base_url);

    mount_to_body(move || view! { <App config=config /> });
}
