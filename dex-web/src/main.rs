//! DEX Web Front End
//!
//! Pools overview with the reward payout countdown, sidebar navigation and
//! localization. Logic that does not need the DOM lives in `lib-core`.

use std::sync::Arc;

use leptos::prelude::*;
use lib_core::{Catalog, Config, Language};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::HtmlElement;

mod app;
mod components;
mod pages;
mod services;
mod state;
mod utils;

use app::App;

const EN_CATALOG: &str = include_str!("localizations/en.json");
const FR_CATALOG: &str = include_str!("localizations/fr.json");

#[wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();
    wasm_logger::init(wasm_logger::Config::default());
    log::info!("DEX web front end starting");

    let config = load_config();
    let catalog = Arc::new(load_catalog());

    hide_loading_screen();

    leptos::mount::mount_to_body(move || {
        view! { <App config=config.clone() catalog=Arc::clone(&catalog)/> }
    });
}

/// Settings are captured at compile time; the browser has no environment to read.
fn load_config() -> Config {
    let result = Config::from_lookup(|name| {
        let value = match name {
            "DEX_LCD_ENDPOINT" => option_env!("DEX_LCD_ENDPOINT"),
            "DEX_REWARD_EPOCH_IDENTIFIER" => option_env!("DEX_REWARD_EPOCH_IDENTIFIER"),
            "DEX_IS_FRONTIER" => option_env!("DEX_IS_FRONTIER"),
            "DEX_PROMOTED_LBP_POOL_IDS" => option_env!("DEX_PROMOTED_LBP_POOL_IDS"),
            "DEX_EPOCH_POLL_INTERVAL_MS" => option_env!("DEX_EPOCH_POLL_INTERVAL_MS"),
            _ => None,
        };
        value.map(str::to_string)
    });

    match result {
        Ok(config) => {
            log::debug!("Loaded config: {config:?}");
            config
        }
        Err(e) => {
            log::error!("{e}; falling back to default configuration");
            Config::default()
        }
    }
}

fn load_catalog() -> Catalog {
    Catalog::from_sources(&[(Language::En, EN_CATALOG), (Language::Fr, FR_CATALOG)])
        .unwrap_or_else(|e| {
            log::error!("{e}; labels will show their translation keys");
            Catalog::default()
        })
}

/// Hide the static loading screen shipped in index.html
fn hide_loading_screen() {
    let Some(document) = web_sys::window().and_then(|window| window.document()) else {
        log::warn!("No document available, cannot hide loading screen");
        return;
    };

    let Some(loading_element) = document.get_element_by_id("leptos-loading") else {
        log::debug!("Loading element not found");
        return;
    };

    if let Some(html_element) = loading_element.dyn_ref::<HtmlElement>() {
        if let Err(e) = html_element.class_list().add_1("hidden") {
            log::warn!("Failed to add 'hidden' class: {e:?}");
        }
    }

    if let Err(e) = loading_element.set_attribute("style", "display: none !important;") {
        log::warn!("Failed to hide loading screen: {e:?}");
    }
}
