//! # Sidebar Menu
//!
//! [`compose_menus`] builds the ordered sidebar entries from translated labels and
//! feature flags. The list is rebuilt whenever the language changes; display order
//! is list order.
//!
//! ## Entries
//!
//! | Entry     | Link                  | Shown when                          |
//! |-----------|-----------------------|-------------------------------------|
//! | Swap      | `/`                   | always                              |
//! | Pools     | `/pools`              | always                              |
//! | Assets    | `/assets`             | always                              |
//! | Bootstrap | `/bootstrap`          | promoted LBP pool list is non-empty |
//! | Stake     | Keplr wallet          | always                              |
//! | Vote      | Keplr governance tab  | always                              |
//! | Info      | info site             | always                              |

use std::sync::LazyLock;

use regex::Regex;

use crate::i18n::Translate;

pub const STAKE_URL: &str = "https://wallet.keplr.app/chains/osmosis";
pub const VOTE_URL: &str = "https://wallet.keplr.app/chains/osmosis?tab=governance";
pub const INFO_URL: &str = "https://info.osmosis.zone";

/// Analytics events attached to sidebar links.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SidebarEvent {
    StakeClicked,
    VoteClicked,
    InfoClicked,
}

impl SidebarEvent {
    pub fn name(self) -> &'static str {
        match self {
            SidebarEvent::StakeClicked => "Sidebar: Stake clicked",
            SidebarEvent::VoteClicked => "Sidebar: Vote clicked",
            SidebarEvent::InfoClicked => "Sidebar: Info clicked",
        }
    }
}

/// Flags and config values that gate optional entries.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MenuFlags {
    pub is_frontier: bool,
    pub promoted_lbp_pool_ids: Vec<String>,
}

#[derive(Debug, Clone)]
pub struct MenuEntry {
    pub label: String,
    pub link: String,
    pub icon: String,
    pub icon_selected: Option<String>,
    /// Matched against the current pathname; entries without one are never highlighted.
    pub selection_test: Option<Regex>,
    pub amplitude_event: Option<Vec<SidebarEvent>>,
}

impl MenuEntry {
    fn page(label: String, link: &str, icon: String, icon_selected: Option<&str>, test: Regex) -> Self {
        Self {
            label,
            link: link.to_string(),
            icon,
            icon_selected: icon_selected.map(str::to_string),
            selection_test: Some(test),
            amplitude_event: None,
        }
    }

    fn external(label: String, link: &str, icon: &str, event: SidebarEvent) -> Self {
        Self {
            label,
            link: link.to_string(),
            icon: icon.to_string(),
            icon_selected: None,
            selection_test: None,
            amplitude_event: Some(vec![event]),
        }
    }

    pub fn is_selected(&self, pathname: &str) -> bool {
        self.selection_test
            .as_ref()
            .is_some_and(|test| test.is_match(pathname))
    }

    pub fn icon_for(&self, selected: bool) -> &str {
        match (&self.icon_selected, selected) {
            (Some(icon), true) => icon,
            _ => &self.icon,
        }
    }

    pub fn is_external(&self) -> bool {
        self.link.starts_with("http://") || self.link.starts_with("https://")
    }

    pub fn events(&self) -> &[SidebarEvent] {
        self.amplitude_event.as_deref().unwrap_or_default()
    }
}

macro_rules! route_pattern {
    ($name:ident, $source:literal) => {
        static $name: LazyLock<Regex> =
            LazyLock::new(|| Regex::new($source).expect("menu patterns are static literals"));
    };
}

route_pattern!(SWAP_ROUTE, r"/$");
route_pattern!(POOLS_ROUTE, r"/pools");
route_pattern!(ASSETS_ROUTE, r"/assets");
route_pattern!(BOOTSTRAP_ROUTE, r"/bootstrap");

fn page_icon(name: &str, is_frontier: bool) -> String {
    if is_frontier {
        format!("/icons/{name}-white.svg")
    } else {
        format!("/icons/{name}.svg")
    }
}

/// Build the sidebar entries in display order.
pub fn compose_menus(t: &impl Translate, flags: &MenuFlags) -> Vec<MenuEntry> {
    let frontier = flags.is_frontier;

    let mut menus = vec![
        MenuEntry::page(
            t.t("menu.swap"),
            "/",
            page_icon("trade", frontier),
            Some("/icons/trade-white.svg"),
            SWAP_ROUTE.clone(),
        ),
        MenuEntry::page(
            t.t("menu.pools"),
            "/pools",
            page_icon("pool", frontier),
            Some("/icons/pool-white.svg"),
            POOLS_ROUTE.clone(),
        ),
        MenuEntry::page(
            t.t("menu.assets"),
            "/assets",
            page_icon("asset", frontier),
            Some("/icons/asset-white.svg"),
            ASSETS_ROUTE.clone(),
        ),
    ];

    if !flags.promoted_lbp_pool_ids.is_empty() {
        menus.push(MenuEntry::page(
            "Bootstrap".to_string(),
            "/bootstrap",
            "/icons/pool-white.svg".to_string(),
            None,
            BOOTSTRAP_ROUTE.clone(),
        ));
    }

    menus.extend([
        MenuEntry::external(
            t.t("menu.stake"),
            STAKE_URL,
            "/icons/ticket-white.svg",
            SidebarEvent::StakeClicked,
        ),
        MenuEntry::external(
            t.t("menu.vote"),
            VOTE_URL,
            "/icons/vote-white.svg",
            SidebarEvent::VoteClicked,
        ),
        MenuEntry::external(
            t.t("menu.info"),
            INFO_URL,
            "/icons/chart-white.svg",
            SidebarEvent::InfoClicked,
        ),
    ]);

    menus
}
