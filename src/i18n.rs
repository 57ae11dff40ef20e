//! Translation lookup supplied by the host.

use std::collections::HashMap;

/// Key of the default first text block.
pub const DEFAULT_TEXT_KEY: &str = "defaultText";
/// Key of the default second text block.
pub const DEFAULT_TEXT_2_KEY: &str = "defaultText2";

/// Resolves translation keys to localized strings.
pub trait Translator {
    fn translate(&self, key: &str) -> String;
}

impl<F: Fn(&str) -> String> Translator for F {
    fn translate(&self, key: &str) -> String {
        self(key)
    }
}

/// Map-backed translator. Unknown keys translate to themselves.
#[derive(Debug, Clone, Default)]
pub struct StaticTranslations {
    entries: HashMap<String, String>,
}

impl StaticTranslations {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace one entry.
    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.entries.insert(key.into(), value.into());
        self
    }

    /// Load entries from a flat JSON object of strings, the shape of a
    /// locale file.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        let entries = serde_json::from_str(json)?;
        Ok(Self { entries })
    }
}

impl Translator for StaticTranslations {
    fn translate(&self, key: &str) -> String {
        self.entries
            .get(key)
            .cloned()
            .unwrap_or_else(|| key.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_static_lookup() {
        let t = StaticTranslations::new().with(DEFAULT_TEXT_KEY, "Your cart is reserved for");
        assert_eq!(t.translate(DEFAULT_TEXT_KEY), "Your cart is reserved for");
        assert_eq!(t.translate(DEFAULT_TEXT_2_KEY), "defaultText2");
    }

    #[test]
    fn test_from_locale_json() {
        let t = StaticTranslations::from_json(r#"{"defaultText": "Hurry!", "defaultText2": "Ends in"}"#)
            .unwrap();
        assert_eq!(t.translate("defaultText2"), "Ends in");
        assert!(StaticTranslations::from_json("[1, 2]").is_err());
    }

    #[test]
    fn test_closure_translator() {
        let upper = |key: &str| key.to_uppercase();
        assert_eq!(upper.translate("defaulttext"), "DEFAULTTEXT");
    }
}
