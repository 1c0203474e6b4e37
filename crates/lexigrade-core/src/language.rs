//! Language identification and per-language capabilities.
//!
//! The scoring pipeline never branches on language inline. Instead a
//! [`LanguageClassifier`] tags the document once, and a [`LanguageProfile`]
//! bundles everything language-specific (syllable counter, stop words, the
//! hard-word syllable threshold, the optional familiar-word list) that the
//! rest of the pipeline consumes.

use std::collections::HashSet;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::dictionaries::dale_chall::DALE_CHALL_WORDS;
use crate::dictionaries::stop_words::{ENGLISH_STOP_WORDS, RUSSIAN_STOP_WORDS};
use crate::syllables;

/// Detected document language.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    /// English.
    En,
    /// Russian.
    Ru,
    /// Anything else; formulas report not-applicable.
    Other,
}

impl Language {
    /// Returns the language as a lowercase tag.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::En => "en",
            Self::Ru => "ru",
            Self::Other => "other",
        }
    }
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Pluggable language detection.
///
/// The default [`ScriptClassifier`] distinguishes the two supported
/// languages by script; callers with a real detector can implement this
/// trait and pass it to [`crate::evaluate_with_classifier`].
pub trait LanguageClassifier {
    /// Tag the text with a language.
    fn classify(&self, text: &str) -> Language;
}

/// Default classifier: counts Cyrillic vs Latin letters.
///
/// Texts with a Cyrillic majority are tagged Russian, Latin majority
/// English, and anything without alphabetic content `Other`. Latin-script
/// languages other than English are indistinguishable here; that is the
/// accepted limit of the default.
#[derive(Debug, Clone, Copy, Default)]
pub struct ScriptClassifier;

impl LanguageClassifier for ScriptClassifier {
    fn classify(&self, text: &str) -> Language {
        let mut latin = 0usize;
        let mut cyrillic = 0usize;
        for ch in text.chars() {
            if ch.is_ascii_alphabetic() {
                latin += 1;
            } else if ('\u{0400}'..='\u{04FF}').contains(&ch) {
                cyrillic += 1;
            }
        }
        if latin == 0 && cyrillic == 0 {
            return Language::Other;
        }
        if cyrillic > latin {
            Language::Ru
        } else {
            Language::En
        }
    }
}

/// Per-language capability record, selected once per evaluation.
pub struct LanguageProfile {
    language: Language,
    hard_syllable_threshold: usize,
    stop_words: &'static HashSet<&'static str>,
    count_syllables: fn(&str) -> usize,
    familiar_words: Option<&'static HashSet<&'static str>>,
}

impl LanguageProfile {
    /// Build the profile for a supported language.
    ///
    /// Returns `None` for [`Language::Other`]: there is no tokenizer or
    /// syllable model to offer, and formulas must report not-applicable.
    pub fn for_language(language: Language) -> Option<Self> {
        match language {
            Language::En => Some(Self {
                language,
                hard_syllable_threshold: 2,
                stop_words: &ENGLISH_STOP_WORDS,
                count_syllables: syllables::count_syllables_en,
                familiar_words: Some(&DALE_CHALL_WORDS),
            }),
            Language::Ru => Some(Self {
                language,
                hard_syllable_threshold: 4,
                stop_words: &RUSSIAN_STOP_WORDS,
                count_syllables: syllables::count_syllables_ru,
                familiar_words: None,
            }),
            Language::Other => None,
        }
    }

    /// The language this profile serves.
    pub const fn language(&self) -> Language {
        self.language
    }

    /// Syllable count for a word under this language's estimator.
    pub fn count_syllables(&self, word: &str) -> usize {
        (self.count_syllables)(word)
    }

    /// Whether the word is in this language's stop-word set.
    pub fn is_stop_word(&self, word: &str) -> bool {
        self.stop_words.contains(word)
    }

    /// Syllable count above which a non-stop word counts as hard.
    pub const fn hard_syllable_threshold(&self) -> usize {
        self.hard_syllable_threshold
    }

    /// The familiar-word list, if this language has one (English only).
    pub const fn familiar_words(&self) -> Option<&'static HashSet<&'static str>> {
        self.familiar_words
    }
}
