//! Day / hour / minute readout of a countdown

use leptos::prelude::*;
use lib_core::countdown::TimeLeft;

use crate::state::i18n::use_i18n;

#[component]
pub fn DisplayLeftTime(#[prop(into)] time_left: Signal<TimeLeft>) -> impl IntoView {
    let i18n = use_i18n();

    view! {
        <div class="left-time">
            <h4>{move || time_left.with(|left| left.days.clone())}</h4>
            <span class="left-time-unit">{move || i18n.t("timer.days")}</span>
            <span class="left-time-colon">":"</span>
            <h4>{move || time_left.with(|left| left.hours.clone())}</h4>
            <span class="left-time-unit">{move || i18n.t("timer.hours")}</span>
            <span class="left-time-colon">":"</span>
            <h4>{move || time_left.with(|left| left.minutes.clone())}</h4>
            <span class="left-time-unit">{move || i18n.t("timer.minutes")}</span>
        </div>
    }
}
