//! # Core Library
//!
//! Framework-independent logic behind the DEX web front end: countdown formatting,
//! periodic refresh, menu composition, selectable options, localization and configuration.
//! Nothing in here touches the DOM, so everything is testable on the host.

pub mod config;
pub mod countdown;
pub mod error;
pub mod i18n;
pub mod menu;
pub mod refresh;
pub mod select;

// Re-export commonly used types
pub use config::Config;
pub use countdown::{format_time_left, time_left, EpochCountdown, TimeLeft};
pub use error::{CoreError, Result};
pub use i18n::{Catalog, Language, Localizer, Translate};
pub use menu::{compose_menus, MenuEntry, MenuFlags};
pub use refresh::{RefreshDriver, TickSource};
pub use select::{SelectableOption, Selected, SelectionKey};
