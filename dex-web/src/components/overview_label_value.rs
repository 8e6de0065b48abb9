//! Label above a headline value in the pools overview

use leptos::prelude::*;

#[component]
pub fn OverviewLabelValue(#[prop(into)] label: Signal<String>, children: Children) -> impl IntoView {
    view! {
        <li class="overview-item">
            <p class="overview-label">{move || label.get()}</p>
            {children()}
        </li>
    }
}
