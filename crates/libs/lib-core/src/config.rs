//! # Application Configuration
//!
//! Settings for the front end. In the browser there is no process environment, so the
//! web crate feeds [`Config::from_lookup`] with values captured at compile time
//! (`option_env!`). The resulting [`Config`] is built once in `main`, validated, and
//! passed down through context rather than stored in a global.
//!
//! | Variable                      | Default                          |
//! |-------------------------------|----------------------------------|
//! | `DEX_LCD_ENDPOINT`            | [`DEFAULT_LCD_ENDPOINT`]         |
//! | `DEX_REWARD_EPOCH_IDENTIFIER` | `day`                            |
//! | `DEX_IS_FRONTIER`             | `false` (`true` or `1` enables)  |
//! | `DEX_PROMOTED_LBP_POOL_IDS`   | empty (comma-separated pool ids) |
//! | `DEX_EPOCH_POLL_INTERVAL_MS`  | `60000`                          |
//!
//! ```rust
//! use lib_core::config::Config;
//!
//! let config = Config::from_lookup(|name| match name {
//!     "DEX_PROMOTED_LBP_POOL_IDS" => Some("21, 42".to_string()),
//!     _ => None,
//! })
//! .unwrap();
//!
//! assert_eq!(config.promoted_lbp_pool_ids, vec!["21", "42"]);
//! assert_eq!(config.reward_epoch_identifier, "day");
//! ```

use crate::error::{CoreError, Result};
use crate::menu::MenuFlags;

pub const DEFAULT_LCD_ENDPOINT: &str = "https://lcd-osmosis.keplr.app";
pub const DEFAULT_REWARD_EPOCH_IDENTIFIER: &str = "day";
pub const DEFAULT_EPOCH_POLL_INTERVAL_MS: u32 = 60_000;

/// Front end configuration.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Config {
    /// Base URL of the chain's LCD (REST) endpoint, without a trailing slash
    pub lcd_endpoint: String,

    /// Epoch whose end marks the reward payout
    pub reward_epoch_identifier: String,

    /// Frontier builds use the white icon set and show the frontier banner
    pub is_frontier: bool,

    /// Pools promoted as liquidity bootstrapping pools; non-empty enables the Bootstrap menu
    pub promoted_lbp_pool_ids: Vec<String>,

    /// How often the epoch query is re-run
    ///
    /// Valid range: 1000-3600000 ms
    pub epoch_poll_interval_ms: u32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            lcd_endpoint: DEFAULT_LCD_ENDPOINT.to_string(),
            reward_epoch_identifier: DEFAULT_REWARD_EPOCH_IDENTIFIER.to_string(),
            is_frontier: false,
            promoted_lbp_pool_ids: Vec::new(),
            epoch_poll_interval_ms: DEFAULT_EPOCH_POLL_INTERVAL_MS,
        }
    }
}

impl Config {
    /// Load configuration through `lookup`, falling back to defaults for unset names.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let defaults = Self::default();

        let lcd_endpoint = lookup("DEX_LCD_ENDPOINT")
            .map(|url| url.trim_end_matches('/').to_string())
            .unwrap_or(defaults.lcd_endpoint);

        let reward_epoch_identifier =
            lookup("DEX_REWARD_EPOCH_IDENTIFIER").unwrap_or(defaults.reward_epoch_identifier);

        let is_frontier = match lookup("DEX_IS_FRONTIER").as_deref() {
            None | Some("") | Some("false") | Some("0") => false,
            Some("true") | Some("1") => true,
            Some(other) => {
                return Err(CoreError::Config(format!(
                    "DEX_IS_FRONTIER must be true/false, got {other:?}"
                )))
            }
        };

        let promoted_lbp_pool_ids = lookup("DEX_PROMOTED_LBP_POOL_IDS")
            .map(|ids| {
                ids.split(',')
                    .map(str::trim)
                    .filter(|id| !id.is_empty())
                    .map(str::to_string)
                    .collect()
            })
            .unwrap_or_default();

        let epoch_poll_interval_ms = match lookup("DEX_EPOCH_POLL_INTERVAL_MS") {
            Some(raw) => raw.parse().map_err(|e| {
                CoreError::Config(format!(
                    "DEX_EPOCH_POLL_INTERVAL_MS must be a valid number: {e}"
                ))
            })?,
            None => defaults.epoch_poll_interval_ms,
        };

        let config = Self {
            lcd_endpoint,
            reward_epoch_identifier,
            is_frontier,
            promoted_lbp_pool_ids,
            epoch_poll_interval_ms,
        };
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if !self.lcd_endpoint.starts_with("http://") && !self.lcd_endpoint.starts_with("https://") {
            return Err(CoreError::Config(format!(
                "DEX_LCD_ENDPOINT must be an http(s) URL, got {:?}",
                self.lcd_endpoint
            )));
        }

        if self.reward_epoch_identifier.trim().is_empty() {
            return Err(CoreError::Config(
                "DEX_REWARD_EPOCH_IDENTIFIER cannot be empty".to_string(),
            ));
        }

        if !(1_000..=3_600_000).contains(&self.epoch_poll_interval_ms) {
            return Err(CoreError::Config(
                "DEX_EPOCH_POLL_INTERVAL_MS must be between 1000 and 3600000".to_string(),
            ));
        }

        Ok(())
    }

    pub fn menu_flags(&self) -> MenuFlags {
        MenuFlags {
            is_frontier: self.is_frontier,
            promoted_lbp_pool_ids: self.promoted_lbp_pool_ids.clone(),
        }
    }

    /// URL of the epochs query.
    pub fn epochs_url(&self) -> String {
        format!("{}/osmosis/epochs/v1beta1/epochs", self.lcd_endpoint)
    }
}
