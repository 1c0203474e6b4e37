//! The five readability formulas.
//!
//! Each formula is a pure function of a [`MetricsSnapshot`] and the
//! document language, returning `None` when it is not applicable to that
//! language. Rounding is deliberately asymmetric — Flesch and Dale-Chall
//! round to 2 decimals, the rest to integers — because the published tier
//! tables are defined against those roundings.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::language::Language;
use crate::metrics::MetricsSnapshot;

/// A readability index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "kebab-case")]
#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
pub enum Formula {
    /// Flesch reading-ease (English and Russian coefficient sets).
    Flesch,
    /// Gunning fog index (English and Russian variants).
    GunningFog,
    /// Coleman-Liau index (English-tuned, computed for Russian with an
    /// advisory).
    ColemanLiau,
    /// Dale-Chall readability score (English only).
    DaleChall,
    /// Automated Readability Index (English-tuned, computed for Russian
    /// with an advisory).
    Ari,
}

impl Formula {
    /// Every formula, in presentation order.
    pub const ALL: [Self; 5] = [
        Self::Flesch,
        Self::GunningFog,
        Self::ColemanLiau,
        Self::DaleChall,
        Self::Ari,
    ];

    /// Stable machine-readable name.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Flesch => "flesch",
            Self::GunningFog => "gunning-fog",
            Self::ColemanLiau => "coleman-liau",
            Self::DaleChall => "dale-chall",
            Self::Ari => "ari",
        }
    }

    /// Human-readable index name used in output lines.
    pub const fn display_name(&self) -> &'static str {
        match self {
            Self::Flesch => "Flesch reading-ease score",
            Self::GunningFog => "Gunning fog index",
            Self::ColemanLiau => "Coleman-Liau index",
            Self::DaleChall => "Dale-Chall readability score",
            Self::Ari => "Automated Readability Index",
        }
    }

    /// Whether the score is reported with two decimals (`true`) or as an
    /// integer (`false`).
    pub const fn two_decimal(&self) -> bool {
        matches!(self, Self::Flesch | Self::DaleChall)
    }
}

impl std::fmt::Display for Formula {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

fn round2(v: f64) -> f64 {
    (v * 100.0).round() / 100.0
}

/// Flesch reading-ease. Higher = easier. English and Russian use different
/// coefficient sets.
pub fn flesch(m: &MetricsSnapshot, language: Language) -> Option<f64> {
    let asl = m.avg_sentence_length;
    let asw = m.avg_syllables_per_word;
    match language {
        Language::En => Some(round2(206.835 - 1.015 * asl - 84.6 * asw)),
        Language::Ru => Some(round2(206.835 - 1.3 * asl - 60.1 * asw)),
        Language::Other => None,
    }
}

/// Gunning fog index: years of schooling required. The Russian variant
/// damps the sentence-length term.
pub fn gunning_fog(m: &MetricsSnapshot, language: Language) -> Option<f64> {
    let asl = m.avg_sentence_length;
    let hard_pct = m.hard_word_percentage;
    match language {
        Language::En => Some((0.4 * (asl + hard_pct)).round()),
        Language::Ru => Some((0.4 * (0.78 * asl + hard_pct)).round()),
        Language::Other => None,
    }
}

/// Coleman-Liau index from letters and sentences per 100 words.
///
/// Language-agnostic arithmetic tuned for English; callers attach an
/// advisory for Russian instead of refusing.
pub fn coleman_liau(m: &MetricsSnapshot, language: Language) -> Option<f64> {
    if language == Language::Other {
        return None;
    }
    Some((0.0588 * m.letters_per_100_words - 0.296 * m.sentences_per_100_words - 15.8).round())
}

/// Dale-Chall readability score. Defined only where a familiar-word list
/// exists, i.e. English.
pub fn dale_chall(m: &MetricsSnapshot, language: Language) -> Option<f64> {
    if language != Language::En {
        return None;
    }
    let unfamiliar = m.unfamiliar_word_count?;
    let pct = unfamiliar as f64 / m.word_count as f64 * 100.0;
    let mut score = 0.1579 * pct + 0.0496 * m.avg_sentence_length;
    if pct > 5.0 {
        score += 3.6365;
    }
    Some(round2(score))
}

/// Automated Readability Index from characters per word and words per
/// sentence. Same degrade-with-advisory policy as Coleman-Liau.
pub fn automated_readability(m: &MetricsSnapshot, language: Language) -> Option<f64> {
    if language == Language::Other {
        return None;
    }
    let letters_per_word = m.letter_count as f64 / m.word_count as f64;
    Some((4.71 * letters_per_word + 0.5 * m.avg_sentence_length - 21.43).round())
}

/// Apply one formula to a snapshot.
pub fn score(formula: Formula, m: &MetricsSnapshot, language: Language) -> Option<f64> {
    match formula {
        Formula::Flesch => flesch(m, language),
        Formula::GunningFog => gunning_fog(m, language),
        Formula::ColemanLiau => coleman_liau(m, language),
        Formula::DaleChall => dale_chall(m, language),
        Formula::Ari => automated_readability(m, language),
    }
}

/// Advisory text for formulas computed outside their tuned language.
pub const fn advisory(formula: Formula, language: Language) -> Option<&'static str> {
    match (formula, language) {
        (Formula::ColemanLiau | Formula::Ari, Language::Ru) => Some(
            "this formula was designed for English texts and may be inaccurate for other languages",
        ),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::metrics::aggregate;

    /// Snapshot with avg_sentence_length 15.0 and avg_syllables_per_word 1.5.
    fn scenario_snapshot() -> MetricsSnapshot {
        aggregate(150, 10, 690, 225, 15, Some(9)).unwrap()
    }

    #[test]
    fn flesch_english_scenario() {
        let m = scenario_snapshot();
        // 206.835 - 1.015*15 - 84.6*1.5 = 64.71
        let score = flesch(&m, Language::En).unwrap();
        assert!((score - 64.71).abs() < 1e-9);
        assert!((60.0..70.0).contains(&score));
    }

    #[test]
    fn flesch_russian_coefficients() {
        let m = scenario_snapshot();
        // 206.835 - 1.3*15 - 60.1*1.5 = 97.185 -> 97.19 (the 2-decimal round)
        let score = flesch(&m, Language::Ru).unwrap();
        assert!((score - 97.19).abs() < 1e-9);
    }

    #[test]
    fn gunning_fog_integer_rounding() {
        let m = scenario_snapshot();
        // hard_pct = 10, en: 0.4*(15+10) = 10
        assert_eq!(gunning_fog(&m, Language::En), Some(10.0));
        // ru: 0.4*(0.78*15+10) = 8.68 -> 9
        assert_eq!(gunning_fog(&m, Language::Ru), Some(9.0));
    }

    #[test]
    fn coleman_liau_computes_for_both_languages() {
        let m = scenario_snapshot();
        // L100 = 460, S100 = 20/3: 0.0588*460 - 0.296*6.666.. - 15.8 = 9.27.. -> 9
        assert_eq!(coleman_liau(&m, Language::En), Some(9.0));
        assert_eq!(coleman_liau(&m, Language::Ru), Some(9.0));
        assert_eq!(coleman_liau(&m, Language::Other), None);
    }

    #[test]
    fn dale_chall_english_only() {
        let m = scenario_snapshot();
        // pct = 6 > 5: 0.1579*6 + 0.0496*15 + 3.6365 = 5.3279 -> 5.33
        let score = dale_chall(&m, Language::En).unwrap();
        assert!((score - 5.33).abs() < 1e-9);
        assert_eq!(dale_chall(&m, Language::Ru), None);
        assert_eq!(dale_chall(&m, Language::Other), None);
    }

    #[test]
    fn dale_chall_penalty_threshold() {
        // pct exactly 5 gets no penalty
        let m = aggregate(100, 10, 500, 150, 10, Some(5)).unwrap();
        let score = dale_chall(&m, Language::En).unwrap();
        // 0.1579*5 + 0.0496*10 = 1.2855 -> 1.29
        assert!((score - 1.29).abs() < 1e-9);
    }

    #[test]
    fn ari_letters_per_word() {
        let m = scenario_snapshot();
        // 4.71*(690/150) + 0.5*15 - 21.43 = 4.71*4.6 + 7.5 - 21.43 = 7.736 -> 8
        assert_eq!(automated_readability(&m, Language::En), Some(8.0));
    }

    #[test]
    fn advisory_only_for_russian_agnostic_formulas() {
        assert!(advisory(Formula::ColemanLiau, Language::Ru).is_some());
        assert!(advisory(Formula::Ari, Language::Ru).is_some());
        assert!(advisory(Formula::ColemanLiau, Language::En).is_none());
        assert!(advisory(Formula::Flesch, Language::Ru).is_none());
    }

    #[test]
    fn unsupported_language_yields_no_scores() {
        let m = scenario_snapshot();
        for formula in Formula::ALL {
            assert_eq!(score(formula, &m, Language::Other), None);
        }
    }
}
