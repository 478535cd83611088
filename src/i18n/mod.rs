//! Internationalization module
//!
//! Provides French (fr) and English (en) texts for every message the
//! calculator shows. Supports automatic language detection based on the
//! system locale.

mod en;
mod fr;

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

    /// Set the current language ("auto" detects from the environment)
    fn set_language(&mut self, lang: &str) {
        let lang = if lang == "auto" {
            detect_system_language()
        } else {
            lang.to_string()
        };

        self.translations = match lang.as_str() {
            "fr" => fr::get_translations(),
            _ => en::get_translations(),
        };
        self.current_lang = if lang == "fr" { lang } else { "en".to_string() };

        log::info!("Language set to: {}", self.current_lang);
    }

    /// Get a translated string by key, or the key itself if missing
    pub fn get(&self, key: &str) -> String {
        self.translations
            .get(key)
            .cloned()
            .unwrap_or_else(|| key.to_string())
    }

    /// Get a translated string with `{value}` replaced
    pub fn get_with_value(&self, key: &str, value: &str) -> String {
        self.get(key).replace("{value}", value)
    }

    pub fn current_language(&self) -> &str {
        &self.current_lang
    }
}

/// Map e.g. "fr_FR.UTF-8" to "fr"; anything unsupported becomes "en"
fn detect_system_language() -> String {
    let lang_env = std::env::var("LANG")
        .or_else(|_| std::env::var("LC_ALL"))
        .or_else(|_| std::env::var("LC_MESSAGES"))
        .unwrap_or_else(|_| "en".to_string());

    parse_language_code(&lang_env).to_string()
}

fn parse_language_code(locale: &str) -> &'static str {
    let code = locale.split(['_', '.']).next().unwrap_or("en");
    match code {
        "fr" => "fr",
        _ => "en",
    }
}
