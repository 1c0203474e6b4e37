//! Scalar text statistics, one snapshot per evaluation.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::{AnalysisError, AnalysisResult};
use crate::language::LanguageProfile;
use crate::lexicon;
use crate::text;

/// Value object holding every aggregate the formula engine consumes.
///
/// Computed fresh per document, never mutated after construction. Ratios
/// are only present because construction guarantees non-zero word and
/// sentence counts.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct MetricsSnapshot {
    /// Number of words (normalized tokens, numerals excluded).
    pub word_count: usize,
    /// Number of sentences.
    pub sentence_count: usize,
    /// Non-whitespace, non-punctuation characters in the raw text.
    pub letter_count: usize,
    /// Words per sentence.
    pub avg_sentence_length: f64,
    /// Syllables per word.
    pub avg_syllables_per_word: f64,
    /// Words that are hard in the Gunning-Fog sense.
    pub hard_word_count: usize,
    /// Hard words as a percentage of all words.
    pub hard_word_percentage: f64,
    /// Letters per 100 words.
    pub letters_per_100_words: f64,
    /// Sentences per 100 words.
    pub sentences_per_100_words: f64,
    /// Words whose lemma is absent from the familiar list (English only).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unfamiliar_word_count: Option<usize>,
}

/// Measure a document: tokenize, count syllables, classify hard words, and
/// aggregate.
#[tracing::instrument(skip_all, fields(text_len = text.len(), language = %profile.language()))]
pub fn measure(text: &str, profile: &LanguageProfile) -> AnalysisResult<MetricsSnapshot> {
    if text.trim().is_empty() {
        return Err(AnalysisError::EmptyInput);
    }

    let sentences = text::split_sentences(text, profile.language());
    let words = text::extract_words(text);

    let syllable_total: usize = words.iter().map(|w| profile.count_syllables(w)).sum();
    let hard_word_count = words.iter().filter(|w| lexicon::is_hard_word(w, profile)).count();
    let unfamiliar_word_count = profile.familiar_words().map(|_| {
        words
            .iter()
            .filter(|w| lexicon::is_dale_chall_hard(w, profile) == Some(true))
            .count()
    });
    let letter_count = text::count_letters(text);

    aggregate(
        words.len(),
        sentences.len(),
        letter_count,
        syllable_total,
        hard_word_count,
        unfamiliar_word_count,
    )
}

/// Derive the ratio aggregates from raw counts.
///
/// Zero word or sentence counts are a precondition violation and surface as
/// [`AnalysisError::InsufficientInput`]; no ratio is ever formed from them.
pub fn aggregate(
    word_count: usize,
    sentence_count: usize,
    letter_count: usize,
    syllable_total: usize,
    hard_word_count: usize,
    unfamiliar_word_count: Option<usize>,
) -> AnalysisResult<MetricsSnapshot> {
    if word_count == 0 || sentence_count == 0 {
        return Err(AnalysisError::InsufficientInput);
    }

    let words = word_count as f64;
    Ok(MetricsSnapshot {
        word_count,
        sentence_count,
        letter_count,
        avg_sentence_length: words / sentence_count as f64,
        avg_syllables_per_word: syllable_total as f64 / words,
        hard_word_count,
        hard_word_percentage: hard_word_count as f64 / words * 100.0,
        letters_per_100_words: letter_count as f64 / words * 100.0,
        sentences_per_100_words: sentence_count as f64 / words * 100.0,
        unfamiliar_word_count,
    })
}
