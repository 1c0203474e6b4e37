//! Evaluation pipeline: classify, measure, score, interpret.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::AnalysisResult;
use crate::formulas::{self, Formula};
use crate::interpret;
use crate::language::{Language, LanguageClassifier, LanguageProfile, ScriptClassifier};
use crate::metrics::{self, MetricsSnapshot};

/// Outcome of one formula on one document.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct ReadabilityResult {
    /// Which index this is.
    pub formula: Formula,
    /// The rounded score; `None` means the formula is not applicable to the
    /// document language.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub score: Option<f64>,
    /// Difficulty tier for the score; absent exactly when `score` is.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tier: Option<String>,
    /// Inaccuracy advisory for English-tuned formulas applied to Russian.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub advisory: Option<String>,
}

impl std::fmt::Display for ReadabilityResult {
    /// Render the two-part output line: score, then interpretation.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = self.formula.display_name();
        match (self.score, self.tier.as_deref()) {
            (Some(score), Some(tier)) => {
                if self.formula.two_decimal() {
                    write!(f, "{name} is {score:.2}. ")?;
                } else {
                    write!(f, "{name} is {score:.0}. ")?;
                }
                match self.formula {
                    Formula::DaleChall | Formula::Ari => write!(f, "The text is {tier}.")?,
                    _ => write!(f, "School level of difficulty: {tier}.")?,
                }
                if let Some(ref advisory) = self.advisory {
                    write!(f, " Note: {advisory}.")?;
                }
                Ok(())
            }
            _ => {
                write!(
                    f,
                    "{name}: not applicable. Make sure the input text is written in a supported language ({}).",
                    interpret::not_applicable(self.formula)
                )
            }
        }
    }
}

/// Everything one evaluation produces.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct EvaluationReport {
    /// Detected document language.
    pub language: Language,
    /// Text statistics; `None` when the language is unsupported and no
    /// measurement model exists.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metrics: Option<MetricsSnapshot>,
    /// One result per requested formula, in request order.
    pub results: Vec<ReadabilityResult>,
}

/// Evaluate a text with the default script-based language classifier.
///
/// `formulas` of `None` runs all five. The caller is expected to reject
/// texts under the word minimum (see [`crate::DEFAULT_MIN_WORDS`]); shorter
/// inputs still evaluate, degraded, as long as at least one word and one
/// sentence are present.
pub fn evaluate(text: &str, formulas: Option<&[Formula]>) -> AnalysisResult<EvaluationReport> {
    evaluate_with_classifier(text, formulas, &ScriptClassifier)
}

/// Evaluate a text, supplying the language classifier.
#[tracing::instrument(skip_all, fields(text_len = text.len()))]
pub fn evaluate_with_classifier(
    text: &str,
    formulas: Option<&[Formula]>,
    classifier: &dyn LanguageClassifier,
) -> AnalysisResult<EvaluationReport> {
    if text.trim().is_empty() {
        return Err(crate::error::AnalysisError::EmptyInput);
    }

    let selected: Vec<Formula> = formulas.map_or_else(|| Formula::ALL.to_vec(), <[Formula]>::to_vec);

    let language = classifier.classify(text);
    tracing::debug!(language = %language, "language classified");

    let Some(profile) = LanguageProfile::for_language(language) else {
        // No tokenizer or syllable model: every formula reports
        // not-applicable instead of crashing on undefined counts.
        let results = selected
            .iter()
            .map(|&formula| ReadabilityResult {
                formula,
                score: None,
                tier: None,
                advisory: None,
            })
            .collect();
        return Ok(EvaluationReport {
            language,
            metrics: None,
            results,
        });
    };

    let metrics = metrics::measure(text, &profile)?;

    let results = selected
        .iter()
        .map(|&formula| score_one(formula, &metrics, language))
        .collect();

    Ok(EvaluationReport {
        language,
        metrics: Some(metrics),
        results,
    })
}

fn score_one(formula: Formula, metrics: &MetricsSnapshot, language: Language) -> ReadabilityResult {
    let score = formulas::score(formula, metrics, language);
    let tier = score.map(|s| interpret::interpret(formula, s).to_string());
    let advisory = score
        .and(formulas::advisory(formula, language))
        .map(str::to_string);
    ReadabilityResult {
        formula,
        score,
        tier,
        advisory,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AnalysisError;

    const ENGLISH: &str = "The cat sat on the mat by the door. The dog ran fast across the \
                           yard. Every child in the school could read the simple story aloud.";

    const RUSSIAN: &str = "Мороз и солнце, день чудесный. Ещё ты дремлешь, друг прелестный. \
                           Пора, красавица, проснись, открой сомкнуты негой взоры.";

    #[test]
    fn english_runs_all_formulas() {
        let report = evaluate(ENGLISH, None).unwrap();
        assert_eq!(report.language, Language::En);
        assert_eq!(report.results.len(), 5);
        for result in &report.results {
            assert!(result.score.is_some());
            assert!(result.tier.is_some());
            assert!(result.advisory.is_none());
        }
    }

    #[test]
    fn russian_dale_chall_not_applicable() {
        let report = evaluate(RUSSIAN, None).unwrap();
        assert_eq!(report.language, Language::Ru);
        let dc = report
            .results
            .iter()
            .find(|r| r.formula == Formula::DaleChall)
            .unwrap();
        assert!(dc.score.is_none());
        assert!(dc.tier.is_none());
    }

    #[test]
    fn russian_agnostic_formulas_carry_advisory() {
        let report = evaluate(RUSSIAN, None).unwrap();
        for formula in [Formula::ColemanLiau, Formula::Ari] {
            let result = report
                .results
                .iter()
                .find(|r| r.formula == formula)
                .unwrap();
            assert!(result.score.is_some());
            assert!(result.advisory.is_some());
        }
        let flesch = report
            .results
            .iter()
            .find(|r| r.formula == Formula::Flesch)
            .unwrap();
        assert!(flesch.score.is_some());
        assert!(flesch.advisory.is_none());
    }

    #[test]
    fn evaluation_is_idempotent() {
        let first = evaluate(ENGLISH, None).unwrap();
        let second = evaluate(ENGLISH, None).unwrap();
        for (a, b) in first.results.iter().zip(second.results.iter()) {
            assert_eq!(a.score, b.score);
            assert_eq!(a.tier, b.tier);
        }
    }

    #[test]
    fn selected_formulas_only() {
        let report = evaluate(ENGLISH, Some(&[Formula::Flesch, Formula::Ari])).unwrap();
        assert_eq!(report.results.len(), 2);
        assert_eq!(report.results[0].formula, Formula::Flesch);
        assert_eq!(report.results[1].formula, Formula::Ari);
    }

    #[test]
    fn unrecognized_language_degrades_without_metrics() {
        let report = evaluate("12345 67890 ... 42", None).unwrap();
        assert_eq!(report.language, Language::Other);
        assert!(report.metrics.is_none());
        assert!(report.results.iter().all(|r| r.score.is_none()));
    }

    #[test]
    fn empty_text_is_an_error() {
        assert!(matches!(evaluate("", None), Err(AnalysisError::EmptyInput)));
    }

    #[test]
    fn display_line_for_scored_result() {
        let report = evaluate(ENGLISH, Some(&[Formula::Flesch])).unwrap();
        let line = report.results[0].to_string();
        assert!(line.starts_with("Flesch reading-ease score is "));
        assert!(line.contains("School level of difficulty:"));
    }

    #[test]
    fn display_line_for_not_applicable_result() {
        let report = evaluate(RUSSIAN, Some(&[Formula::DaleChall])).unwrap();
        let line = report.results[0].to_string();
        assert!(line.contains("not applicable"));
        assert!(line.contains("only with English texts"));
    }

    #[test]
    fn report_serializes_to_json() {
        let report = evaluate(ENGLISH, None).unwrap();
        let json = serde_json::to_string(&report).unwrap();
        assert!(json.contains("\"language\":\"en\""));
        assert!(json.contains("\"formula\":\"flesch\""));
    }
}
