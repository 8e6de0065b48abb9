//! DEX Web App - Leptos Frontend
//!
//! Sidebar layout, localized menus and the pools overview

use std::sync::Arc;

use leptos::prelude::*;
use leptos_router::{
    components::{Redirect, Route, Router, Routes, A},
    path,
};
use lib_core::menu::compose_menus;
use lib_core::{Catalog, Config};

use crate::components::{MainLayout, TempBanner};
use crate::pages::PoolsPage;
use crate::state::epochs::provide_epoch_context;
use crate::state::i18n::{provide_i18n_context, use_i18n};
use crate::utils::constants::{FRONTIER_BANNER_STORAGE_KEY, MAIN_APP_URL};

#[component]
pub fn App(config: Config, catalog: Arc<Catalog>) -> impl IntoView {
    let i18n = provide_i18n_context(catalog);
    provide_epoch_context(&config);

    let menu_flags = config.menu_flags();
    let is_frontier = config.is_frontier;

    // Once the app is mounted, switch to the browser language if we ship it
    Effect::new(move || i18n.detect_browser_language());

    let menus = Signal::derive(move || compose_menus(&i18n.localizer(), &menu_flags));

    view! {
        <Router>
            <MainLayout menus=menus>
                {is_frontier.then(|| view! { <FrontierBanner/> })}
                <Routes fallback=|| view! { <NotFound/> }>
                    <Route path=path!("/") view=|| view! { <Redirect path="/pools"/> }/>
                    <Route path=path!("/pools") view=PoolsPage/>
                </Routes>
            </MainLayout>
        </Router>
    }
}

#[component]
fn FrontierBanner() -> impl IntoView {
    let i18n = use_i18n();

    view! {
        <TempBanner
            storage_key=FRONTIER_BANNER_STORAGE_KEY
            title=Signal::derive(move || i18n.t("app.banner.title"))
            message=Signal::derive(move || i18n.t("app.banner.message"))
            link_text=Signal::derive(move || i18n.t("app.banner.linkText"))
            link=MAIN_APP_URL
        />
    }
}

#[component]
fn NotFound() -> impl IntoView {
    let i18n = use_i18n();

    view! {
        <div class="not-found">
            <div class="card">
                <h1>{move || i18n.t("notFound.title")}</h1>
                <p>{move || i18n.t("notFound.message")}</p>
                <A href="/pools">
                    <span class="btn">{move || i18n.t("notFound.home")}</span>
                </A>
            </div>
        </div>
    }
}
