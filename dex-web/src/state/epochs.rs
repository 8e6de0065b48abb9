//! Epoch query state
//!
//! Polls the LCD for the reward epoch while the app is mounted. Each successful
//! response replaces the stored epoch, which is how a rollover reaches the countdown.

use std::time::Duration;

use chrono::{DateTime, Utc};
use leptos::prelude::*;
use lib_core::Config;
use shared::dto::epoch::Epoch;

use crate::services::epochs::fetch_epoch;

#[derive(Clone, Copy)]
pub struct EpochContext {
    pub epoch: RwSignal<Option<Epoch>>,
    pub error: RwSignal<Option<String>>,
}

impl EpochContext {
    pub fn new() -> Self {
        Self {
            epoch: RwSignal::new(None),
            error: RwSignal::new(None),
        }
    }

    pub fn end_time(&self) -> Option<DateTime<Utc>> {
        self.epoch.with(|epoch| epoch.as_ref().map(|epoch| epoch.end_time))
    }

    pub fn set_epoch(&self, epoch: Epoch) {
        self.epoch.set(Some(epoch));
        self.error.set(None);
    }

    /// Keep the last known epoch; only record what went wrong.
    pub fn set_error(&self, error: String) {
        self.error.set(Some(error));
    }
}

pub fn provide_epoch_context(config: &Config) -> EpochContext {
    let context = EpochContext::new();
    provide_context(context);
    start_polling(
        context,
        config.epochs_url(),
        config.reward_epoch_identifier.clone(),
        config.epoch_poll_interval_ms,
    );
    context
}

pub fn use_epoch_context() -> EpochContext {
    expect_context::<EpochContext>()
}

/// True until the current owner is cleaned up.
fn owner_alive() -> impl Fn() -> bool + Copy + 'static {
    let alive = StoredValue::new(());
    move || alive.try_get_value().is_some()
}

fn start_polling(context: EpochContext, url: String, identifier: String, interval_ms: u32) {
    let is_alive = owner_alive();

    leptos::task::spawn_local(async move {
        while is_alive() {
            let result = fetch_epoch(&url, &identifier).await;
            if !is_alive() {
                break;
            }

            match result {
                Ok(epoch) => {
                    log::debug!("Epoch {} ends at {}", epoch.identifier, epoch.end_time);
                    context.set_epoch(epoch);
                }
                Err(e) => {
                    log::warn!("Epoch query failed: {e}");
                    context.set_error(e.to_string());
                }
            }

            gloo_timers::future::sleep(Duration::from_millis(u64::from(interval_ms))).await;
        }
        log::debug!("Epoch polling stopped");
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_alive_until_owner_cleanup() {
        let owner = Owner::new();
        let is_alive = owner.with(owner_alive);

        assert!(is_alive());
        owner.cleanup();
        assert!(!is_alive());
    }

    #[test]
    fn test_error_keeps_last_epoch() {
        let owner = Owner::new();
        owner.with(|| {
            let context = EpochContext::new();
            let end_time = Utc::now();
            context.set_epoch(Epoch {
                identifier: "day".to_string(),
                end_time,
            });

            context.set_error("timeout".to_string());
            assert_eq!(context.end_time(), Some(end_time));
            assert_eq!(context.error.get_untracked().as_deref(), Some("timeout"));

            context.set_epoch(Epoch {
                identifier: "day".to_string(),
                end_time,
            });
            assert_eq!(context.error.get_untracked(), None);
        });
    }
}
