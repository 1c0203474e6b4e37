//! Difficulty tier mapping.
//!
//! Each formula has an ordered band table scanned low to high; a score
//! belongs to the first band whose upper bound exceeds it. Bands are
//! half-open `[lower, upper)`, the bottom band unbounded below and the top
//! band unbounded above.

use crate::formulas::Formula;

/// One tier band: `score < upper` selects `label`.
struct Band {
    upper: f64,
    label: &'static str,
}

const fn band(upper: f64, label: &'static str) -> Band {
    Band { upper, label }
}

const FLESCH_BANDS: &[Band] = &[
    band(10.0, "professional (extremely difficult to read)"),
    band(30.0, "college graduate (very difficult to read)"),
    band(50.0, "college (difficult to read)"),
    band(60.0, "10th to 12th grade (fairly difficult to read)"),
    band(70.0, "8th to 9th grade (plain language)"),
    band(80.0, "7th grade (fairly easy to read)"),
    band(90.0, "6th grade (easy to read)"),
    band(f64::INFINITY, "5th grade (very easy to read)"),
];

/// Grade ladder shared by Gunning fog and Coleman-Liau (both report
/// integer-rounded scores).
const GRADE_LADDER_BANDS: &[Band] = &[
    band(7.0, "6th grade or lower"),
    band(8.0, "7th grade"),
    band(9.0, "8th grade"),
    band(10.0, "high school freshman"),
    band(11.0, "high school sophomore"),
    band(12.0, "high school junior"),
    band(13.0, "high school senior"),
    band(14.0, "college freshman"),
    band(15.0, "college sophomore"),
    band(16.0, "college junior"),
    band(17.0, "college senior"),
    band(f64::INFINITY, "college graduate"),
];

const DALE_CHALL_BANDS: &[Band] = &[
    band(4.9, "easily understood by an average 4th-grade student or lower"),
    band(5.9, "easily understood by an average 5th or 6th-grade student"),
    band(6.9, "easily understood by an average 7th or 8th-grade student"),
    band(7.9, "easily understood by an average 9th or 10th-grade student"),
    band(8.9, "easily understood by an average 11th or 12th-grade student"),
    band(9.9, "easily understood by an average 13th to 15th-grade (college) student"),
    band(f64::INFINITY, "understood by an average college graduate"),
];

const ARI_BANDS: &[Band] = &[
    band(2.0, "understood by a 5 to 6-year-old child"),
    band(3.0, "understood by a 6 to 7-year-old child"),
    band(4.0, "understood by a 7 to 8-year-old child"),
    band(5.0, "understood by an 8 to 9-year-old child"),
    band(6.0, "understood by a 9 to 10-year-old child"),
    band(7.0, "understood by a 10 to 11-year-old child"),
    band(8.0, "understood by an 11 to 12-year-old child"),
    band(9.0, "understood by a 12 to 13-year-old person"),
    band(10.0, "understood by a 13 to 14-year-old person"),
    band(11.0, "understood by a 14 to 15-year-old person"),
    band(12.0, "understood by a 15 to 16-year-old person"),
    band(13.0, "understood by a 16 to 17-year-old person"),
    band(14.0, "understood by a 17 to 18-year-old person"),
    band(f64::INFINITY, "understood by an adult"),
];

const fn bands(formula: Formula) -> &'static [Band] {
    match formula {
        Formula::Flesch => FLESCH_BANDS,
        Formula::GunningFog | Formula::ColemanLiau => GRADE_LADDER_BANDS,
        Formula::DaleChall => DALE_CHALL_BANDS,
        Formula::Ari => ARI_BANDS,
    }
}

/// Map a (rounded) score to its difficulty tier label.
pub fn interpret(formula: Formula, score: f64) -> &'static str {
    let table = bands(formula);
    table
        .iter()
        .find(|b| score < b.upper)
        .map_or(table[table.len() - 1].label, |b| b.label)
}

/// Fixed message rendered instead of a tier when a formula is not
/// applicable to the document language.
pub const fn not_applicable(formula: Formula) -> &'static str {
    match formula {
        Formula::DaleChall => "this formula works only with English texts",
        _ => "this formula works only with English or Russian texts",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flesch_boundary_at_60() {
        // 60 belongs to [60, 70), not [50, 60)
        assert_eq!(
            interpret(Formula::Flesch, 60.0),
            "8th to 9th grade (plain language)"
        );
        assert_eq!(
            interpret(Formula::Flesch, 59.99),
            "10th to 12th grade (fairly difficult to read)"
        );
    }

    #[test]
    fn flesch_extremes() {
        assert_eq!(
            interpret(Formula::Flesch, -12.0),
            "professional (extremely difficult to read)"
        );
        assert_eq!(
            interpret(Formula::Flesch, 95.3),
            "5th grade (very easy to read)"
        );
    }

    #[test]
    fn fog_17_is_college_graduate() {
        assert_eq!(interpret(Formula::GunningFog, 17.0), "college graduate");
        assert_eq!(interpret(Formula::GunningFog, 16.0), "college senior");
        assert_eq!(interpret(Formula::GunningFog, 6.0), "6th grade or lower");
    }

    #[test]
    fn coleman_liau_shares_the_ladder() {
        assert_eq!(interpret(Formula::ColemanLiau, 9.0), "high school freshman");
        assert_eq!(interpret(Formula::ColemanLiau, 20.0), "college graduate");
    }

    #[test]
    fn ari_14_is_adult() {
        assert_eq!(interpret(Formula::Ari, 14.0), "understood by an adult");
        assert_eq!(
            interpret(Formula::Ari, 13.0),
            "understood by a 17 to 18-year-old person"
        );
    }

    #[test]
    fn dale_chall_bands() {
        assert_eq!(
            interpret(Formula::DaleChall, 4.89),
            "easily understood by an average 4th-grade student or lower"
        );
        assert_eq!(
            interpret(Formula::DaleChall, 4.9),
            "easily understood by an average 5th or 6th-grade student"
        );
        assert_eq!(
            interpret(Formula::DaleChall, 10.2),
            "understood by an average college graduate"
        );
    }

    #[test]
    fn not_applicable_messages() {
        assert_eq!(
            not_applicable(Formula::DaleChall),
            "this formula works only with English texts"
        );
        assert_eq!(
            not_applicable(Formula::Flesch),
            "this formula works only with English or Russian texts"
        );
    }
}
