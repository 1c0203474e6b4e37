//! Hard-word classification and English lemmatization.
//!
//! Two notions of "hard" live here. Gunning-Fog-style hardness is
//! syllable-based: a word that is not a stop word and exceeds the
//! language's syllable threshold. Dale-Chall hardness is lexicon-based: a
//! word whose lemma is missing from the familiar-word list, defined for
//! English only.

use crate::dictionaries::dale_chall::DALE_CHALL_WORDS;
use crate::dictionaries::en_lemmas::EN_IRREGULAR_LEMMAS;
use crate::language::LanguageProfile;

/// Gunning-Fog-style hardness: not a stop word, and more syllables than the
/// language threshold (English > 2, Russian > 4).
pub fn is_hard_word(word: &str, profile: &LanguageProfile) -> bool {
    !profile.is_stop_word(word)
        && profile.count_syllables(word) > profile.hard_syllable_threshold()
}

/// Dale-Chall-style hardness: the word's lemma is absent from the familiar
/// list.
///
/// Returns `None` for languages without a familiar-word list (everything
/// but English) — the formula is undefined there, not zero.
pub fn is_dale_chall_hard(word: &str, profile: &LanguageProfile) -> Option<bool> {
    let familiar = profile.familiar_words()?;
    if familiar.contains(word) {
        return Some(false);
    }
    let known = lemma_candidates(word)
        .iter()
        .any(|lemma| familiar.contains(lemma.as_str()));
    Some(!known)
}

/// Best-effort English lemma: irregular table first, then the first suffix
/// candidate the familiar list recognizes, then the plainest stripped form.
pub fn lemmatize_en(word: &str) -> String {
    if let Some(&base) = EN_IRREGULAR_LEMMAS.get(word) {
        return base.to_string();
    }
    let candidates = lemma_candidates(word);
    candidates
        .iter()
        .find(|c| DALE_CHALL_WORDS.contains(c.as_str()))
        .or_else(|| candidates.first())
        .cloned()
        .unwrap_or_else(|| word.to_string())
}

/// Plausible base forms for a regular English inflection.
///
/// Multiple candidates are produced because suffix stripping is ambiguous
/// without a dictionary ("making" → "mak"/"make"); callers test the whole
/// set against their lexicon.
fn lemma_candidates(word: &str) -> Vec<String> {
    if let Some(&base) = EN_IRREGULAR_LEMMAS.get(word) {
        return vec![base.to_string()];
    }

    let mut candidates = Vec::new();

    // Plural and third-person -s
    if let Some(stem) = word.strip_suffix("ies")
        && word.len() > 4
    {
        candidates.push(format!("{stem}y"));
    }
    if let Some(stem) = word.strip_suffix("es")
        && (stem.ends_with(['s', 'x', 'z']) || stem.ends_with("ch") || stem.ends_with("sh"))
    {
        candidates.push(stem.to_string());
    }
    if let Some(stem) = word.strip_suffix('s')
        && !word.ends_with("ss")
        && !word.ends_with("us")
        && !word.ends_with("is")
        && stem.len() > 1
    {
        candidates.push(stem.to_string());
    }

    // Progressive -ing
    if let Some(stem) = word.strip_suffix("ing")
        && stem.len() > 2
    {
        push_destemmed(&mut candidates, stem);
    }

    // Past -ed
    if let Some(stem) = word.strip_suffix("ed")
        && stem.len() > 1
    {
        push_destemmed(&mut candidates, stem);
    }

    candidates
}

/// Push a stripped stem plus its undoubled and e-restored variants.
fn push_destemmed(candidates: &mut Vec<String>, stem: &str) {
    candidates.push(stem.to_string());

    let chars: Vec<char> = stem.chars().collect();
    let n = chars.len();
    if n >= 2 && chars[n - 1] == chars[n - 2] && !matches!(chars[n - 1], 'l' | 's') {
        // stopped → stopp → stop
        candidates.push(chars[..n - 1].iter().collect());
    }
    // making → mak → make
    candidates.push(format!("{stem}e"));
}
