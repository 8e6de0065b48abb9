//! Application constants

/// localStorage key remembering that the frontier banner was dismissed
pub const FRONTIER_BANNER_STORAGE_KEY: &str = "show_frontier_banner";

/// Where the frontier banner sends users back to
pub const MAIN_APP_URL: &str = "https://app.osmosis.zone/";

pub const LOGO_PATH: &str = "/osmosis-logo-main.svg";

// TODO: replace with the price store once a price feed is wired into the web crate
pub const OSMO_PRICE_USD: f64 = 2.58;
