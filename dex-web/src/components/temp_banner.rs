//! Dismissable banner whose dismissal survives reloads

use leptos::prelude::*;
use web_sys::Storage;

fn local_storage() -> Option<Storage> {
    web_sys::window()?.local_storage().ok()?
}

fn is_dismissed(storage_key: &str) -> bool {
    local_storage()
        .and_then(|storage| storage.get_item(storage_key).ok().flatten())
        .is_some_and(|value| value == "false")
}

fn persist_dismissed(storage_key: &str) {
    let Some(storage) = local_storage() else {
        log::warn!("localStorage unavailable, banner will return on reload");
        return;
    };
    if let Err(e) = storage.set_item(storage_key, "false") {
        log::warn!("Failed to persist banner dismissal: {e:?}");
    }
}

#[component]
pub fn TempBanner(
    storage_key: &'static str,
    #[prop(into)] title: Signal<String>,
    #[prop(into)] message: Signal<String>,
    #[prop(into)] link_text: Signal<String>,
    link: &'static str,
) -> impl IntoView {
    let (visible, set_visible) = signal(!is_dismissed(storage_key));

    let dismiss = move |_| {
        persist_dismissed(storage_key);
        set_visible.set(false);
    };

    view! {
        <Show when=move || visible.get()>
            <div class="temp-banner">
                <div class="temp-banner-text">
                    <h6>{move || title.get()}</h6>
                    <p>
                        {move || message.get()}" "
                        <a class="items-center underline" href=link target="_self">
                            {move || link_text.get()}
                        </a>
                    </p>
                </div>
                <button class="temp-banner-close" aria-label="close" on:click=dismiss>
                    "×"
                </button>
            </div>
        </Show>
    }
}
