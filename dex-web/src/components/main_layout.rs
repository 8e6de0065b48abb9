//! Sidebar navigation and page frame

use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_location;
use lib_core::menu::{MenuEntry, SidebarEvent};

use crate::components::LanguageSelect;
use crate::utils::constants::LOGO_PATH;

fn track(events: &[SidebarEvent]) {
    for event in events {
        log::info!("analytics event: {}", event.name());
    }
}

#[component]
pub fn MainLayout(#[prop(into)] menus: Signal<Vec<MenuEntry>>, children: Children) -> impl IntoView {
    let location = use_location();
    let pathname = location.pathname;

    view! {
        <div class="app-container">
            <nav class="sidebar">
                <A href="/">
                    <span class="sidebar-logo">
                        <img src=LOGO_PATH alt="logo" height="48"/>
                    </span>
                </A>
                <ul class="sidebar-menu">
                    <For
                        each=move || menus.get()
                        key=|entry| (entry.link.clone(), entry.label.clone())
                        children=move |entry| view! { <SidebarItem entry=entry pathname=pathname/> }
                    />
                </ul>
                <LanguageSelect/>
            </nav>
            <main class="main-content">{children()}</main>
        </div>
    }
}

#[component]
fn SidebarItem(entry: MenuEntry, pathname: Memo<String>) -> impl IntoView {
    let selected = {
        let entry = entry.clone();
        Memo::new(move |_| pathname.with(|path| entry.is_selected(path)))
    };

    let icon = {
        let entry = entry.clone();
        move || entry.icon_for(selected.get()).to_string()
    };
    let class = move || {
        if selected.get() {
            "sidebar-item selected"
        } else {
            "sidebar-item"
        }
    };
    let content = {
        let label = entry.label.clone();
        move || {
            view! {
                <span class="sidebar-item-content">
                    <img src=icon.clone() width="20" height="20" alt=""/>
                    <p>{label.clone()}</p>
                </span>
            }
        }
    };

    let item = if entry.is_external() {
        let events = entry.events().to_vec();
        view! {
            <a
                href=entry.link.clone()
                target="_blank"
                rel="noopener noreferrer"
                on:click=move |_| track(&events)
            >
                {content()}
            </a>
        }
        .into_any()
    } else {
        view! { <A href=entry.link.clone()>{content()}</A> }.into_any()
    };

    view! { <li class=class>{item}</li> }
}
