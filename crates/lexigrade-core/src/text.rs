//! Tokenization primitives.
//!
//! Sentence splitting, word extraction, and letter counting for English and
//! Russian prose. Every formula upstream is built from these measurements.

use regex::Regex;
use std::sync::LazyLock;

use crate::dictionaries::abbreviations::is_abbreviation;
use crate::language::Language;

/// Regex for decimal numbers (3.14, 2.5, etc.).
static DECIMAL_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\d+\.\d+").expect("valid regex"));

/// Regex for URLs.
static URL_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?:https?://|www\.)\S+").expect("valid regex"));

/// Regex for email addresses.
static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\b[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}\b").expect("valid regex")
});

/// Regex for initials (J.K., У.Е., etc.) in either script.
static INITIALS_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\p{Lu}\.(?:\p{Lu}\.)*").expect("valid regex"));

/// Regex for purely numeric tokens, excluded from the word list.
static NUMERIC_TOKEN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\d+$").expect("valid regex"));

/// Extract normalized words: whitespace split, edge punctuation stripped,
/// lowercased, purely numeric tokens dropped.
///
/// Order is preserved and duplicates are retained — downstream ratios
/// depend on occurrence counts, not vocabulary.
pub fn extract_words(text: &str) -> Vec<String> {
    text.split_whitespace()
        .map(|w| w.trim_matches(|c: char| !c.is_alphanumeric()))
        .filter(|w| !w.is_empty() && !NUMERIC_TOKEN.is_match(w))
        .map(|w| w.to_lowercase())
        .collect()
}

/// Count letters: characters that are neither whitespace nor punctuation.
///
/// Covers ASCII punctuation plus the typographic marks common in Russian
/// prose («», dashes, ellipsis, curly quotes), so Cyrillic letters count
/// and typography does not.
pub fn count_letters(text: &str) -> usize {
    text.chars()
        .filter(|&c| !c.is_whitespace() && !is_punctuation_char(c))
        .count()
}

const fn is_punctuation_char(c: char) -> bool {
    c.is_ascii_punctuation()
        || matches!(
            c,
            '«' | '»' | '—' | '–' | '…' | '“' | '”' | '‘' | '’' | '„' | '‚'
        )
}

/// Split text into sentences with abbreviation, decimal, URL, and email
/// awareness.
///
/// Uses a character-by-character scan with context-based boundary
/// detection; the abbreviation dictionary is selected by language.
#[tracing::instrument(skip_all, fields(text_len = text.len(), language = %language))]
pub fn split_sentences(text: &str, language: Language) -> Vec<String> {
    if text.trim().is_empty() {
        return Vec::new();
    }

    let min_length = 3;
    let mut sentences = Vec::new();
    let mut current = String::new();
    let chars: Vec<char> = text.chars().collect();
    let mut i = 0;

    while i < chars.len() {
        let ch = chars[i];
        current.push(ch);

        if is_sentence_terminator(ch) {
            let context = extract_context(&chars, i);

            if is_sentence_boundary(&context, &current, language) {
                let sentence = current.trim().to_string();
                if sentence.chars().count() >= min_length {
                    sentences.push(sentence);
                }
                current.clear();
            }
        }

        i += 1;
    }

    // Remaining text
    let sentence = current.trim().to_string();
    if sentence.chars().count() >= min_length {
        sentences.push(sentence);
    }

    sentences
}

const fn is_sentence_terminator(ch: char) -> bool {
    matches!(ch, '.' | '!' | '?')
}

/// Context around a potential sentence boundary.
struct SentenceContext {
    punctuation: char,
    word_before: String,
    char_after: Option<char>,
    text_after: String,
    is_end_of_text: bool,
}

fn extract_context(chars: &[char], pos: usize) -> SentenceContext {
    let before = get_word_before(chars, pos);

    let mut after_start = pos + 1;
    while after_start < chars.len() && chars[after_start].is_whitespace() {
        after_start += 1;
    }

    let after_char = chars.get(after_start).copied();
    let after_text: String = chars[after_start..].iter().take(20).collect();

    SentenceContext {
        punctuation: chars[pos],
        word_before: before,
        char_after: after_char,
        text_after: after_text,
        is_end_of_text: pos == chars.len() - 1,
    }
}

fn get_word_before(chars: &[char], pos: usize) -> String {
    let mut i = pos;

    // Skip back past punctuation and whitespace
    while i > 0 {
        i -= 1;
        if !chars[i].is_whitespace() && chars[i] != '.' {
            break;
        }
    }

    // Collect the word
    let mut word_chars = Vec::new();
    loop {
        if chars[i].is_alphanumeric() || chars[i] == '.' {
            word_chars.push(chars[i]);
        } else {
            break;
        }
        if i == 0 {
            break;
        }
        i -= 1;
    }

    word_chars.reverse();
    word_chars.iter().collect()
}

fn is_sentence_boundary(
    context: &SentenceContext,
    current_sentence: &str,
    language: Language,
) -> bool {
    if context.is_end_of_text {
        return true;
    }

    // ! and ? are almost always boundaries
    if context.punctuation == '!' || context.punctuation == '?' {
        return check_next_char_capitalization(context);
    }

    // For periods, apply heuristics
    if is_likely_abbreviation(&context.word_before, language) {
        return false;
    }

    if is_likely_initial(&context.word_before) {
        return false;
    }

    if is_decimal_number(current_sentence) {
        return false;
    }

    if current_sentence.ends_with("...") || current_sentence.ends_with('…') {
        return false;
    }

    if contains_url_or_email(current_sentence) {
        return false;
    }

    // Digit after period following a digit = decimal number (e.g., "3.14")
    if let Some(next_char) = context.char_after
        && next_char.is_ascii_digit()
        && context
            .word_before
            .chars()
            .last()
            .is_some_and(|c| c.is_ascii_digit())
    {
        return false;
    }

    // Uppercase next char = strong boundary signal
    if let Some(next_char) = context.char_after {
        if next_char.is_uppercase() {
            return true;
        }
        if next_char.is_lowercase() {
            return false;
        }
    }

    true
}

fn check_next_char_capitalization(context: &SentenceContext) -> bool {
    if let Some(next_char) = context.char_after {
        if next_char.is_uppercase() {
            return true;
        }
        if next_char == '"' || next_char == '\'' || next_char == '«' {
            return context
                .text_after
                .chars()
                .nth(1)
                .is_some_and(|c| c.is_uppercase());
        }
    }
    true
}

fn is_likely_abbreviation(word: &str, language: Language) -> bool {
    if word.is_empty() {
        return false;
    }
    let word_clean = word.trim_end_matches('.').to_lowercase();
    if is_abbreviation(&word_clean, language) {
        return true;
    }
    // Single uppercase letter = likely initial/abbreviation
    let mut chars = word_clean.chars();
    chars.next().is_some()
        && chars.next().is_none()
        && word.chars().next().is_some_and(char::is_uppercase)
}

fn is_likely_initial(word: &str) -> bool {
    if word.is_empty() {
        return false;
    }
    if word.chars().count() == 2
        && word.chars().next().is_some_and(char::is_uppercase)
        && word.ends_with('.')
    {
        return true;
    }
    INITIALS_PATTERN.is_match(word)
}

fn is_decimal_number(sentence: &str) -> bool {
    let last_part: String = sentence
        .chars()
        .rev()
        .take(10)
        .collect::<String>()
        .chars()
        .rev()
        .collect();
    DECIMAL_PATTERN.is_match(&last_part)
}

fn contains_url_or_email(sentence: &str) -> bool {
    let last_part: String = sentence
        .chars()
        .rev()
        .take(50)
        .collect::<String>()
        .chars()
        .rev()
        .collect();
    URL_PATTERN.is_match(&last_part) || EMAIL_PATTERN.is_match(&last_part)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn basic_sentences() {
        let sentences = split_sentences(
            "This is a sentence. This is another sentence.",
            Language::En,
        );
        assert_eq!(sentences.len(), 2);
        assert_eq!(sentences[0], "This is a sentence.");
        assert_eq!(sentences[1], "This is another sentence.");
    }

    #[test]
    fn abbreviations_not_split() {
        let sentences = split_sentences("Dr. Smith went to the store. He bought milk.", Language::En);
        assert_eq!(sentences.len(), 2);
        assert!(sentences[0].contains("Dr. Smith"));
    }

    #[test]
    fn russian_sentences() {
        let sentences = split_sentences(
            "Мороз и солнце. День чудесный! Ещё ты дремлешь?",
            Language::Ru,
        );
        assert_eq!(sentences.len(), 3);
    }

    #[test]
    fn russian_abbreviations_not_split() {
        let sentences = split_sentences("Он родился в 1799 г. в Москве. Писал стихи.", Language::Ru);
        assert_eq!(sentences.len(), 2);
    }

    #[test]
    fn decimal_numbers_not_split() {
        let sentences = split_sentences("The price is 3.14 dollars. That's cheap.", Language::En);
        assert_eq!(sentences.len(), 2);
        assert!(sentences[0].contains("3.14"));
    }

    #[test]
    fn empty_input() {
        assert!(split_sentences("", Language::En).is_empty());
        assert!(split_sentences("   ", Language::Ru).is_empty());
    }

    #[test]
    fn extract_words_basic() {
        let words = extract_words("Hello, world! This is a test.");
        assert_eq!(words, vec!["hello", "world", "this", "is", "a", "test"]);
    }

    #[test]
    fn extract_words_drops_numerals() {
        let words = extract_words("In 1999 they sold 42 cars.");
        assert_eq!(words, vec!["in", "they", "sold", "cars"]);
    }

    #[test]
    fn extract_words_keeps_order_and_duplicates() {
        let words = extract_words("the cat and the dog");
        assert_eq!(words, vec!["the", "cat", "and", "the", "dog"]);
    }

    #[test]
    fn extract_words_cyrillic() {
        let words = extract_words("Мороз и солнце, день чудесный!");
        assert_eq!(words, vec!["мороз", "и", "солнце", "день", "чудесный"]);
    }

    #[test]
    fn letters_exclude_spaces_and_punctuation() {
        assert_eq!(count_letters("cat, dog."), 6);
        assert_eq!(count_letters("«да — нет»"), 5);
    }
}
