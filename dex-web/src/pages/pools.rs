//! Pools Page - overview of the active labs with price and reward payout

use leptos::prelude::*;

use crate::components::{DisplayLeftTime, OverviewLabelValue};
use crate::state::countdown::use_countdown;
use crate::state::epochs::use_epoch_context;
use crate::state::i18n::use_i18n;
use crate::utils::constants::OSMO_PRICE_USD;
use crate::utils::format::format_usd;

#[component]
pub fn PoolsPage() -> impl IntoView {
    view! {
        <div class="pools-page">
            <LabsOverview/>
        </div>
    }
}

#[component]
fn LabsOverview() -> impl IntoView {
    let i18n = use_i18n();

    view! {
        <section>
            <div class="flex items-center mb-6">
                <h5 class="mr-0.5">{move || i18n.t("pools.activeLabs")}</h5>
            </div>
            <ul class="flex items-center gap-20">
                <DispPrice/>
                <DispRewardPayout/>
            </ul>
        </section>
    }
}

#[component]
fn DispPrice() -> impl IntoView {
    let i18n = use_i18n();

    view! {
        <OverviewLabelValue label=Signal::derive(move || i18n.t("pools.osmoPrice"))>
            <h4>{format_usd(OSMO_PRICE_USD)}</h4>
        </OverviewLabelValue>
    }
}

/// Countdown to the end of the reward epoch.
#[component]
fn DispRewardPayout() -> impl IntoView {
    let i18n = use_i18n();
    let epochs = use_epoch_context();

    let time_left = use_countdown(Signal::derive(move || epochs.end_time()));

    view! {
        <OverviewLabelValue label=Signal::derive(move || i18n.t("pools.rewardPayout"))>
            <DisplayLeftTime time_left=time_left/>
            <Show when=move || epochs.error.with(Option::is_some)>
                <span class="overview-stale" title=move || epochs.error.get().unwrap_or_default()>
                    "•"
                </span>
            </Show>
        </OverviewLabelValue>
    }
}
