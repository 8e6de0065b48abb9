//! Dropdown row with an icon, generic over the selected value type

use leptos::prelude::*;
use lib_core::select::{OptionPosition, RowState, SelectableOption, Selected, SelectionKey};

const ROW_CLASSES: &str = "dropdown-row px-[1rem] py-[0.5rem] cursor-pointer hover:bg-osmoverse-700 flex items-center";

fn row_classes(state: RowState) -> String {
    let mut classes = String::from(ROW_CLASSES);
    if state.selected {
        classes.push_str(" text-rust-200");
    }
    if state.last {
        classes.push_str(" rounded-b-xlinset");
    }
    if state.first {
        classes.push_str(" rounded-t-xlinset");
    }
    classes
}

/// One selectable row. Clicking it calls `on_select` once with this row's value;
/// the row is highlighted while `current_value` equals it.
#[component]
pub fn MenuDropdownIcon<T>(
    value: T,
    #[prop(into)] display: String,
    #[prop(into)] current_value: Signal<T>,
    #[prop(into)] image: String,
    index: usize,
    option_length: usize,
    on_select: Callback<Selected<T>>,
) -> impl IntoView
where
    T: SelectionKey + PartialEq + Clone + Send + Sync + 'static,
{
    let option = SelectableOption::new(value, display, image);
    let position = OptionPosition::new(index, option_length);

    let key = option.key();
    let label = option.display.clone();
    let alt = option.display.clone();
    let src = option.image.clone();

    let row_option = option.clone();
    let class = move || current_value.with(|current| row_classes(row_option.row_state(current, position)));

    view! {
        <button
            class=class
            data-key=key
            on:click=move |_| option.activate(|selected| on_select.run(selected))
        >
            <div class="flex items-center justify-center min-w-[24px]">
                <img src=src width="24" height="24" alt=alt/>
            </div>
            <p class="ml-[0.75rem]">{label}</p>
        </button>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_row_classes() {
        let plain = row_classes(RowState::default());
        assert_eq!(plain, ROW_CLASSES);

        let edge = row_classes(RowState { selected: true, first: true, last: true });
        assert!(edge.contains("text-rust-200"));
        assert!(edge.contains("rounded-t-xlinset"));
        assert!(edge.contains("rounded-b-xlinset"));
    }
}
