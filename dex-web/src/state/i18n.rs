//! Localization state

use std::sync::Arc;

use leptos::prelude::*;
use lib_core::i18n::{Catalog, Language, Localizer, Translate, DEFAULT_LANGUAGE};

/// Catalog plus the language the user is reading in.
#[derive(Clone, Copy)]
pub struct I18nContext {
    catalog: StoredValue<Arc<Catalog>>,
    pub language: RwSignal<Language>,
}

impl I18nContext {
    pub fn new(catalog: Arc<Catalog>) -> Self {
        Self {
            catalog: StoredValue::new(catalog),
            language: RwSignal::new(DEFAULT_LANGUAGE),
        }
    }

    /// Tracks the current language, so callers re-run when it changes.
    pub fn localizer(&self) -> Localizer {
        Localizer::new(self.catalog.get_value(), self.language.get())
    }

    pub fn t(&self, key: &str) -> String {
        self.localizer().t(key)
    }

    pub fn set_language(&self, language: Language) {
        log::info!("Switching language to {}", language.code());
        self.language.set(language);
    }

    /// Adopt the browser language when it is one we ship.
    pub fn detect_browser_language(&self) {
        let Some(tag) = web_sys::window().and_then(|window| window.navigator().language()) else {
            return;
        };

        match Language::detect(&tag) {
            Some(language) if language != DEFAULT_LANGUAGE => self.set_language(language),
            Some(_) => {}
            None => log::debug!("Browser language {tag:?} not supported, keeping default"),
        }
    }
}

pub fn provide_i18n_context(catalog: Arc<Catalog>) -> I18nContext {
    let context = I18nContext::new(catalog);
    provide_context(context);
    context
}

pub fn use_i18n() -> I18nContext {
    expect_context::<I18nContext>()
}
