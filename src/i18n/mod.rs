//! Internationalization module
//!
//! Provides report labels in English (en) and Turkish (tr).
//! Supports automatic language detection based on system locale.

mod en;
mod tr;

use std::collections::HashMap;

/// Internationalization manager
pub struct I18n {
    current_lang: String,
    translations: HashMap<String, String>,
}

impl I18n {
    /// Create a new I18n instance with the specified language
    pub fn new(lang: &str) -> Self {
        let mut i18n = Self {
            current_lang: String::new(),
            translations: HashMap::new(),
        };
        i18n.set_language(lang);
        i18n
    }

    /// Set the current language
    pub fn set_language(&mut self, lang: &str) {
        let lang = if lang == "auto" {
            detect_system_language()
        } else {
            lang.to_lowercase()
        };

        self.translations = match lang.as_str() {
            "tr" => tr::get_translations(),
            _ => en::get_translations(),
        };
        self.current_lang = if lang == "tr" { lang } else { "en".to_string() };

        log::debug!("Language set to: {}", self.current_lang);
    }

    /// Get a translated string by key
    pub fn get(&self, key: &str) -> String {
        self.translations
            .get(key)
            .cloned()
            .unwrap_or_else(|| key.to_string())
    }

    /// Get the current language code
    pub fn current_language(&self) -> &str {
        &self.current_lang
    }
}

impl Default for I18n {
    fn default() -> Self {
        Self::new("auto")
    }
}

/// Detect system language from the usual locale variables
fn detect_system_language() -> String {
    let lang_env = std::env::var("LC_ALL")
        .or_else(|_| std::env::var("LC_MESSAGES"))
        .or_else(|_| std::env::var("LANG"))
        .unwrap_or_else(|_| "en".to_string());

    // "tr_TR.UTF-8" -> "tr"
    let lang_code = lang_env
        .split(['_', '.', '-'])
        .next()
        .unwrap_or("en")
        .to_lowercase();

    match lang_code.as_str() {
        "tr" => "tr".to_string(),
        _ => "en".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_explicit_languages() {
        let en = I18n::new("en");
        assert_eq!(en.current_language(), "en");
        assert_eq!(en.get("summary.sale_price"), "Suggested sale price");

        let tr = I18n::new("TR");
        assert_eq!(tr.current_language(), "tr");
        assert_eq!(tr.get("summary.sale_price"), "\u{00D6}nerilen sat\u{0131}\u{015F}");
    }

    #[test]
    fn test_unknown_language_falls_back_to_english() {
        let i18n = I18n::new("fr");
        assert_eq!(i18n.current_language(), "en");
    }

    #[test]
    fn test_missing_key_returns_key() {
        let i18n = I18n::new("en");
        assert_eq!(i18n.get("no.such.key"), "no.such.key");
    }

    #[test]
    fn test_tables_have_same_keys() {
        let en = en::get_translations();
        let tr = tr::get_translations();
        for key in en.keys() {
            assert!(tr.contains_key(key), "missing Turkish label for {}", key);
        }
        assert_eq!(en.len(), tr.len());
    }
}
