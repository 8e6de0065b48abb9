//! Selectable option rows used by dropdown menus.
//!
//! An option is identified by [`SelectionKey`], which must be deterministic so the
//! row keeps its identity across re-renders. Whether a row is highlighted is decided
//! by the value type's own `PartialEq` against the currently chosen value.

use crate::i18n::Language;

/// Stable identity of a value used as a selection key.
pub trait SelectionKey {
    fn selection_key(&self) -> String;
}

impl SelectionKey for String {
    fn selection_key(&self) -> String {
        self.clone()
    }
}

impl SelectionKey for &str {
    fn selection_key(&self) -> String {
        (*self).to_string()
    }
}

macro_rules! impl_selection_key_for_int {
    ($($ty:ty),*) => {
        $(impl SelectionKey for $ty {
            fn selection_key(&self) -> String {
                self.to_string()
            }
        })*
    };
}

impl_selection_key_for_int!(u8, u16, u32, u64, usize, i32, i64);

impl SelectionKey for Language {
    fn selection_key(&self) -> String {
        self.code().to_string()
    }
}

/// Payload handed to the selection callback.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selected<T> {
    pub value: T,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OptionPosition {
    pub index: usize,
    pub option_length: usize,
}

impl OptionPosition {
    pub fn new(index: usize, option_length: usize) -> Self {
        Self { index, option_length }
    }

    pub fn is_first(self) -> bool {
        self.index == 0
    }

    pub fn is_last(self) -> bool {
        self.option_length > 0 && self.index == self.option_length - 1
    }
}

/// Visual state of one row; the renderer maps it to classes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RowState {
    pub selected: bool,
    pub first: bool,
    pub last: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectableOption<T> {
    pub value: T,
    pub display: String,
    pub image: String,
}

impl<T> SelectableOption<T>
where
    T: SelectionKey + PartialEq + Clone,
{
    pub fn new(value: T, display: impl Into<String>, image: impl Into<String>) -> Self {
        Self {
            value,
            display: display.into(),
            image: image.into(),
        }
    }

    pub fn key(&self) -> String {
        self.value.selection_key()
    }

    pub fn is_selected(&self, current: &T) -> bool {
        self.value == *current
    }

    pub fn row_state(&self, current: &T, position: OptionPosition) -> RowState {
        RowState {
            selected: self.is_selected(current),
            first: position.is_first(),
            last: position.is_last(),
        }
    }

    /// Report a user activation of this row: `on_select` runs once with this row's value.
    pub fn activate<F>(&self, on_select: F)
    where
        F: FnOnce(Selected<T>),
    {
        on_select(Selected {
            value: self.value.clone(),
        });
    }
}
