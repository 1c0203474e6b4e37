//! Abbreviation dictionaries for sentence boundary detection.
//!
//! Periods after these tokens do not terminate a sentence. English and
//! Russian carry separate sets; lookups are against the lowercased token
//! with any trailing period removed.

use std::collections::HashSet;
use std::sync::LazyLock;

use crate::language::Language;

/// English abbreviations that should not trigger sentence breaks.
pub static ENGLISH_ABBREVIATIONS: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    let mut set = HashSet::new();

    // Titles and honorifics
    set.extend([
        "mr", "mrs", "ms", "miss", "dr", "prof", "rev", "fr", "sr", "jr", "hon", "esq", "capt",
        "col", "gen", "lt", "maj", "sgt", "sen", "rep", "gov", "pres", "sec",
    ]);

    // Common Latin and scholarly abbreviations
    set.extend([
        "etc", "vs", "e.g", "i.e", "cf", "viz", "ibid", "n.b", "p.s", "et al", "approx",
    ]);

    // Time and dates
    set.extend([
        "a.m", "p.m", "b.c", "a.d", "jan", "feb", "mar", "apr", "jun", "jul", "aug", "sep",
        "sept", "oct", "nov", "dec", "mon", "tue", "wed", "thu", "fri", "sat", "sun",
    ]);

    // Places and organizations
    set.extend([
        "st", "ave", "blvd", "rd", "apt", "dept", "u.s", "u.k", "u.s.a", "e.u", "inc", "corp",
        "ltd", "llc", "co", "assn", "intl", "no", "vol", "pp", "ch", "fig", "ed",
    ]);

    set
});

/// Russian abbreviations that should not trigger sentence breaks.
pub static RUSSIAN_ABBREVIATIONS: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    let mut set = HashSet::new();

    // Enumeration and reference shorthand
    set.extend([
        "т.д", "т.п", "т.е", "т.к", "т.н", "др", "пр", "см", "ср", "напр", "стр", "рис", "табл",
        "гл", "разд", "п", "пп", "изд", "тт",
    ]);

    // Titles, places, units
    set.extend([
        "г", "гг", "с", "им", "ул", "пер", "просп", "пл", "обл", "респ", "оз", "р", "проф",
        "акад", "доц", "канд", "тыс", "млн", "млрд", "руб", "коп", "экз", "чел",
    ]);

    set
});

/// Check whether a token (lowercased, trailing period stripped) is a known
/// abbreviation in the given language.
pub fn is_abbreviation(word: &str, language: Language) -> bool {
    match language {
        Language::En => ENGLISH_ABBREVIATIONS.contains(word),
        Language::Ru => RUSSIAN_ABBREVIATIONS.contains(word),
        Language::Other => false,
    }
}
