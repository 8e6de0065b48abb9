//! # Localization
//!
//! Translation catalogs are parsed once at startup into a [`Catalog`] and shared
//! behind an `Arc`. A [`Localizer`] pairs the catalog with the language currently
//! selected and is what components receive to look up labels.
//!
//! ## Lookup Order
//!
//! 1. The selected language
//! 2. [`DEFAULT_LANGUAGE`]
//! 3. The key itself
//!
//! ```rust
//! use std::sync::Arc;
//! use lib_core::i18n::{Catalog, Language, Localizer, Translate};
//!
//! let catalog = Catalog::from_sources(&[
//!     (Language::En, r#"{"menu": {"swap": "Swap", "pools": "Pools"}}"#),
//!     (Language::Fr, r#"{"menu": {"swap": "Échanger"}}"#),
//! ])
//! .unwrap();
//!
//! let fr = Localizer::new(Arc::new(catalog), Language::Fr);
//! assert_eq!(fr.t("menu.swap"), "Échanger");
//! assert_eq!(fr.t("menu.pools"), "Pools");
//! assert_eq!(fr.t("menu.unknown"), "menu.unknown");
//! ```

use std::collections::HashMap;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{CoreError, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    En,
    Fr,
}

pub const DEFAULT_LANGUAGE: Language = Language::En;

impl Language {
    /// Supported languages, in detection priority order.
    pub const ALL: [Language; 2] = [Language::En, Language::Fr];

    pub fn code(self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Fr => "fr",
        }
    }

    /// Name of the language in that language.
    pub fn display_name(self) -> &'static str {
        match self {
            Language::En => "English",
            Language::Fr => "Français",
        }
    }

    pub fn from_code(code: &str) -> Option<Language> {
        Self::ALL.into_iter().find(|language| language.code() == code)
    }

    /// Pick a supported language from a browser language tag.
    ///
    /// Tags look like `en-US`, `fr-FR`, `en-FR` or plain `fr`. The first supported
    /// code contained in the tag wins, so `en-FR` resolves to English. Matching is
    /// case-sensitive: browsers report the language subtag in lowercase.
    pub fn detect(navigator_language: &str) -> Option<Language> {
        Self::ALL
            .into_iter()
            .find(|language| navigator_language.contains(language.code()))
    }
}

impl Default for Language {
    fn default() -> Self {
        DEFAULT_LANGUAGE
    }
}

/// Label lookup capability handed to anything that renders text.
pub trait Translate {
    fn t(&self, key: &str) -> String;
}

/// Parsed translation files, keyed by language. Immutable once built.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    entries: HashMap<Language, Value>,
}

impl Catalog {
    pub fn from_sources(sources: &[(Language, &str)]) -> Result<Self> {
        let mut entries = HashMap::with_capacity(sources.len());
        for (language, source) in sources {
            let value = serde_json::from_str(source).map_err(|source| CoreError::Catalog {
                language: *language,
                source,
            })?;
            entries.insert(*language, value);
        }
        Ok(Self { entries })
    }

    /// Resolve a dotted key (`"menu.swap"`) in one language only.
    pub fn lookup(&self, language: Language, key: &str) -> Option<&str> {
        key.split('.')
            .try_fold(self.entries.get(&language)?, |node, part| node.get(part))?
            .as_str()
    }
}

#[derive(Debug, Clone)]
pub struct Localizer {
    catalog: Arc<Catalog>,
    language: Language,
}

impl Localizer {
    pub fn new(catalog: Arc<Catalog>, language: Language) -> Self {
        Self { catalog, language }
    }

    pub fn language(&self) -> Language {
        self.language
    }
}

impl Translate for Localizer {
    fn t(&self, key: &str) -> String {
        if let Some(text) = self.catalog.lookup(self.language, key) {
            return text.to_string();
        }
        if let Some(text) = self.catalog.lookup(DEFAULT_LANGUAGE, key) {
            return text.to_string();
        }
        log::debug!("missing translation for {key:?} ({})", self.language.code());
        key.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog() -> Arc<Catalog> {
        Arc::new(
            Catalog::from_sources(&[
                (
                    Language::En,
                    r#"{"menu": {"swap": "Swap", "stake": "Stake"}, "app": {"banner": {"title": "Frontier"}}}"#,
                ),
                (Language::Fr, r#"{"menu": {"swap": "Échanger"}}"#),
            ])
            .unwrap(),
        )
    }

    #[test]
    fn test_detect_language() {
        assert_eq!(Language::detect("en-US"), Some(Language::En));
        assert_eq!(Language::detect("fr-FR"), Some(Language::Fr));
        assert_eq!(Language::detect("fr"), Some(Language::Fr));
        assert_eq!(Language::detect("en-FR"), Some(Language::En));
        assert_eq!(Language::detect("fr-CA"), Some(Language::Fr));
        assert_eq!(Language::detect("FR-ca"), None);
        assert_eq!(Language::detect("de-DE"), None);
    }

    #[test]
    fn test_nested_lookup() {
        let catalog = catalog();
        assert_eq!(catalog.lookup(Language::En, "app.banner.title"), Some("Frontier"));
        assert_eq!(catalog.lookup(Language::En, "app.banner"), None);
        assert_eq!(catalog.lookup(Language::Fr, "app.banner.title"), None);
    }

    #[test]
    fn test_fallback_order() {
        let fr = Localizer::new(catalog(), Language::Fr);
        assert_eq!(fr.t("menu.swap"), "Échanger");
        assert_eq!(fr.t("menu.stake"), "Stake");
        assert_eq!(fr.t("menu.vote"), "menu.vote");
    }

    #[test]
    fn test_invalid_catalog() {
        let err = Catalog::from_sources(&[(Language::Fr, "{not json")]).unwrap_err();
        assert!(matches!(err, CoreError::Catalog { language: Language::Fr, .. }));
    }

    #[test]
    fn test_code_round_trip() {
        for language in Language::ALL {
            assert_eq!(Language::from_code(language.code()), Some(language));
        }
        assert_eq!(Language::from_code("de"), None);
    }
}
