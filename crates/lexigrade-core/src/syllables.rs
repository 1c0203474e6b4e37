//! Syllable estimation, one counter per supported language.
//!
//! English uses an exception dictionary backed by a vowel-group heuristic;
//! Russian counts vowel letters directly. Both counters are exposed through
//! [`crate::language::LanguageProfile`], never called with a language
//! mismatch by the pipeline.

use crate::dictionaries::en_syllables::EN_SYLLABLE_EXCEPTIONS;

/// Russian vowel letters. Deliberately the fixed nine-vowel set; ё is not
/// included.
const RUSSIAN_VOWELS: [char; 9] = ['а', 'е', 'и', 'о', 'у', 'ы', 'э', 'ю', 'я'];

/// Count syllables in an English word.
///
/// Dictionary lookup first, vowel-group estimation as fallback. Returns 0
/// only for tokens with no letters at all.
pub fn count_syllables_en(word: &str) -> usize {
    let normalized = word.to_lowercase();
    if let Some(&count) = EN_SYLLABLE_EXCEPTIONS.get(normalized.as_str()) {
        return count;
    }
    estimate_syllables_en(&normalized)
}

/// Vowel-group heuristic with silent-e and -ed adjustments.
fn estimate_syllables_en(word: &str) -> usize {
    let letters: Vec<char> = word.chars().filter(char::is_ascii_alphabetic).collect();
    if letters.is_empty() {
        return 0;
    }

    let is_vowel = |c: char| matches!(c, 'a' | 'e' | 'i' | 'o' | 'u' | 'y');

    let mut count = 0usize;
    let mut previous_was_vowel = false;
    for &c in &letters {
        let vowel = is_vowel(c);
        if vowel && !previous_was_vowel {
            count += 1;
        }
        previous_was_vowel = vowel;
    }

    let n = letters.len();

    // Trailing silent e, except in consonant+le (ta-ble, lit-tle)
    if count > 1
        && letters[n - 1] == 'e'
        && !(n >= 2 && letters[n - 2] == 'l' && (n < 3 || !is_vowel(letters[n - 3])))
    {
        count -= 1;
    }

    // -ed is silent unless preceded by t or d (wanted, needed)
    if count > 1
        && n >= 3
        && letters[n - 1] == 'd'
        && letters[n - 2] == 'e'
        && !matches!(letters[n - 3], 't' | 'd')
        && !is_vowel(letters[n - 3])
    {
        count -= 1;
    }

    count.max(1)
}

/// Count syllables in a Russian word by counting vowel letters.
///
/// Words of one character or less count as exactly 1 syllable — the floor
/// rule that keeps particles like «и» from skewing the per-word average to
/// zero.
pub fn count_syllables_ru(word: &str) -> usize {
    if word.chars().count() <= 1 {
        return 1;
    }
    let normalized = word.to_lowercase();
    normalized
        .chars()
        .filter(|c| RUSSIAN_VOWELS.contains(c))
        .count()
}
