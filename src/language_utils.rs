use once_cell::sync::Lazy;
use std::collections::HashMap;
use std::sync::Arc;

/// Language utilities for provider language identifiers
///
/// The translation endpoint expects short identifiers ("ja", "zh-CN", ...)
/// while callers name languages in plain English ("Japanese", "Chinese").
/// `LanguageTable` holds that mapping. It is built once and never mutated.

/// Full stop used by languages written with CJK punctuation
pub const IDEOGRAPHIC_FULL_STOP: char = '\u{3002}';

/// Full stop used by every other supported language
pub const LATIN_FULL_STOP: char = '.';

// (name, provider identifier)
const LANGUAGES: &[(&str, &str)] = &[
    ("Afrikaans", "af"),
    ("Albanian", "sq"),
    ("Arabic", "ar"),
    ("Armenian", "hy"),
    ("Azerbaijani", "az"),
    ("Basque", "eu"),
    ("Belarusian", "be"),
    ("Bengali", "bn"),
    ("Bulgarian", "bg"),
    ("Catalan", "ca"),
    ("Chinese", "zh-CN"),
    ("Croatian", "hr"),
    ("Czech", "cs"),
    ("Danish", "da"),
    ("Dutch", "nl"),
    ("English", "en"),
    ("Esperanto", "eo"),
    ("Estonian", "et"),
    ("Filipino", "tl"),
    ("Finnish", "fi"),
    ("French", "fr"),
    ("Galician", "gl"),
    ("German", "de"),
    ("Georgian", "ka"),
    ("Greek", "el"),
    ("Haitian Creole", "ht"),
    ("Hebrew", "iw"),
    ("Hindi", "hi"),
    ("Hungarian", "hu"),
    ("Icelandic", "is"),
    ("Indonesian", "id"),
    ("Irish", "ga"),
    ("Italian", "it"),
    ("Japanese", "ja"),
    ("Korean", "ko"),
    ("Lao", "lo"),
    ("Latin", "la"),
    ("Latvian", "lv"),
    ("Lithuanian", "lt"),
    ("Macedonian", "mk"),
    ("Malay", "ms"),
    ("Maltese", "mt"),
    ("Norwegian", "no"),
    ("Persian", "fa"),
    ("Polish", "pl"),
    ("Portuguese", "pt"),
    ("Romanian", "ro"),
    ("Russian", "ru"),
    ("Serbian", "sr"),
    ("Slovak", "sk"),
    ("Slovenian", "sl"),
    ("Spanish", "es"),
    ("Swahili", "sw"),
    ("Swedish", "sv"),
    ("Tamil", "ta"),
    ("Telugu", "te"),
    ("Thai", "th"),
    ("Turkish", "tr"),
    ("Ukrainian", "uk"),
    ("Urdu", "ur"),
    ("Vietnamese", "vi"),
    ("Welsh", "cy"),
    ("Yiddish", "yi"),
];

static SHARED_TABLE: Lazy<Arc<LanguageTable>> = Lazy::new(|| Arc::new(LanguageTable::new()));

/// Immutable mapping from language name to provider identifier
#[derive(Debug, Clone)]
pub struct LanguageTable {
    identifiers: HashMap<&'static str, &'static str>,
}

impl Default for LanguageTable {
    fn default() -> Self {
        Self::new()
    }
}

impl LanguageTable {
    /// Build the table of supported languages
    pub fn new() -> Self {
        Self {
            identifiers: LANGUAGES.iter().copied().collect(),
        }
    }

    /// Process-wide table, initialized on first access
    pub fn shared() -> Arc<LanguageTable> {
        Arc::clone(&SHARED_TABLE)
    }

    /// Provider identifier for a language name, or `""` when the name is unknown
    pub fn identifier(&self, language: &str) -> &'static str {
        self.identifiers.get(language.trim()).copied().unwrap_or("")
    }

    /// Check whether a language name is supported
    pub fn is_supported(&self, language: &str) -> bool {
        self.identifiers.contains_key(language.trim())
    }

    /// Supported language names in alphabetical order
    pub fn supported_languages(&self) -> Vec<&'static str> {
        let mut names: Vec<&'static str> = self.identifiers.keys().copied().collect();
        names.sort_unstable();
        names
    }

    /// Number of supported languages
    pub fn len(&self) -> usize {
        self.identifiers.len()
    }

    /// Whether the table is empty
    pub fn is_empty(&self) -> bool {
        self.identifiers.is_empty()
    }
}

/// Sentence boundary marker for a source language name
pub fn boundary_marker_for(language: &str) -> char {
    match language.trim() {
        "Japanese" | "Chinese" => IDEOGRAPHIC_FULL_STOP,
        _ => LATIN_FULL_STOP,
    }
}
