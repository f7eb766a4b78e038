use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;
use tracing::{debug, warn};

/// Compiled-in English so the form still has labels without a translations directory.
const EMBEDDED_ENGLISH: &str = include_str!("../../../translations/en.json");

/// Language metadata loaded from JSON
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LanguageInfo {
    pub code: String,
    pub name: String,
    pub flag: String,
    pub native_name: String,
}

/// Translation data loaded from JSON
#[derive(Debug, Clone, Deserialize)]
pub struct TranslationData {
    pub language: LanguageInfo,
    pub ui: HashMap<String, String>,
}

/// Internationalization service with dynamic language loading
pub struct I18nService {
    current_language: String,
    translations: HashMap<String, TranslationData>,
    available_languages: Vec<LanguageInfo>,
}

impl I18nService {
    /// Create a new I18nService that auto-discovers `translations/*.json`
    pub fn new() -> Self {
        Self::from_dir(Path::new("translations"))
    }

    pub fn from_dir(translations_dir: &Path) -> Self {
        let mut translations = HashMap::new();

        if let Ok(entries) = std::fs::read_dir(translations_dir) {
            for entry in entries.flatten() {
                let path = entry.path();
                if path.extension().and_then(|s| s.to_str()) != Some("json") {
                    continue;
                }
                match std::fs::read_to_string(&path)
                    .map_err(|e| e.to_string())
                    .and_then(|json| {
                        serde_json::from_str::<TranslationData>(&json).map_err(|e| e.to_string())
                    }) {
                    Ok(data) => {
                        debug!("Loaded translation {:?}", path);
                        translations.insert(data.language.code.clone(), data);
                    }
                    Err(e) => warn!("Skipping translation file {:?}: {}", path, e),
                }
            }
        }

        if !translations.contains_key("en")
            && let Ok(data) = serde_json::from_str::<TranslationData>(EMBEDDED_ENGLISH)
        {
            translations.insert(data.language.code.clone(), data);
        }

        let mut available_languages: Vec<LanguageInfo> = translations
            .values()
            .map(|data| data.language.clone())
            .collect();

        // Sort languages by code for consistency
        available_languages.sort_by(|a, b| a.code.cmp(&b.code));

        Self {
            current_language: "en".to_string(),
            translations,
            available_languages,
        }
    }

    /// Builder-style language selection; unknown codes keep English.
    pub fn with_language(mut self, language_code: &str) -> Self {
        if !self.set_language(language_code) {
            warn!("Unknown UI language '{}', using English", language_code);
        }
        self
    }

    /// Get list of all available languages
    pub fn available_languages(&self) -> &[LanguageInfo] {
        &self.available_languages
    }

    /// Get current language info
    pub fn current_language_info(&self) -> Option<&LanguageInfo> {
        self.available_languages
            .iter()
            .find(|l| l.code == self.current_language)
    }

    /// Set current language by code
    pub fn set_language(&mut self, language_code: &str) -> bool {
        if self.translations.contains_key(language_code) {
            self.current_language = language_code.to_string();
            true
        } else {
            false
        }
    }

    /// Get current language code
    pub fn current_language_code(&self) -> &str {
        &self.current_language
    }

    /// Translate a UI key
    pub fn t<'a>(&'a self, key: &'a str) -> &'a str {
        self.translations
            .get(&self.current_language)
            .and_then(|data| data.ui.get(key))
            .map(|s| s.as_str())
            .unwrap_or(key)
    }

    /// Translate with format parameters
    /// Usage: i18n.tf("model_label", &[("name", "SmartCore Random Forest")])
    /// Template in JSON: "Model: {name}"
    pub fn tf(&self, key: &str, params: &[(&str, &str)]) -> String {
        let template = self.t(key);
        let mut result = template.to_string();

        for (placeholder, value) in params {
            let placeholder_pattern = format!("{{{}}}", placeholder);
            result = result.replace(&placeholder_pattern, value);
        }

        result
    }
}

impl Default for I18nService {
    fn default() -> Self {
        Self::new()
    }
}
