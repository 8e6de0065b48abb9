//! Language dropdown in the sidebar footer

use leptos::prelude::*;
use lib_core::i18n::Language;
use lib_core::select::{SelectableOption, Selected};

use crate::components::MenuDropdownIcon;
use crate::state::i18n::use_i18n;

fn language_options() -> Vec<SelectableOption<Language>> {
    Language::ALL
        .into_iter()
        .map(|language| {
            SelectableOption::new(
                language,
                language.display_name(),
                format!("/icons/flags/{}.svg", language.code()),
            )
        })
        .collect()
}

#[component]
pub fn LanguageSelect() -> impl IntoView {
    let i18n = use_i18n();
    let (open, set_open) = signal(false);

    let current = Signal::derive(move || i18n.language.get());
    let options = language_options();
    let option_length = options.len();

    let on_select = Callback::new(move |selected: Selected<Language>| {
        i18n.set_language(selected.value);
        set_open.set(false);
    });

    view! {
        <div class="language-select">
            <button
                class="language-select-toggle"
                title=move || i18n.t("app.language")
                on:click=move |_| set_open.update(|open| *open = !*open)
            >
                {move || i18n.language.get().display_name()}
            </button>
            <Show when=move || open.get()>
                <div class="dropdown">
                    {options
                        .iter()
                        .enumerate()
                        .map(|(index, option)| {
                            view! {
                                <MenuDropdownIcon
                                    value=option.value
                                    display=option.display.clone()
                                    current_value=current
                                    image=option.image.clone()
                                    index=index
                                    option_length=option_length
                                    on_select=on_select
                                />
                            }
                        })
                        .collect_view()}
                </div>
            </Show>
        </div>
    }
}
