//! Reactive state shared through Leptos context

pub mod countdown;
pub mod epochs;
pub mod i18n;
