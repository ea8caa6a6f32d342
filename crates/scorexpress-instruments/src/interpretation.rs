use serde::Serialize;

use scorexpress_core::models::answer::format_number;
use scorexpress_core::models::interpretation::Interpretation;
use scorexpress_core::models::level::Level;

use crate::scoring::ScoreRange;

/// Text shown when a score lands outside every declared band.
pub const UNEXPECTED_TEXT: &str = "Unexpected score {score}. Check the entered data.";

/// A severity band with its text template. `{score}` in the template is
/// replaced by the formatted score.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Band {
    pub level: Level,
    pub text: String,
}

impl Band {
    pub fn new(level: Level, text: impl Into<String>) -> Self {
        Self {
            level,
            text: text.into(),
        }
    }

    pub fn render(&self, score: f64) -> Interpretation {
        Interpretation::new(self.level, self.text.replace("{score}", &format_number(score)))
    }
}

/// One link of a range chain: scores `<= upper` not claimed by an earlier
/// link fall into `band`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RangeStep {
    pub upper: f64,
    pub band: Band,
}

/// One case of an exact-match table.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExactCase {
    pub value: f64,
    pub band: Band,
}

/// How an instrument maps its raw score to a band.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "rule", rename_all = "snake_case")]
pub enum InterpretationRule {
    /// Ordered inclusive upper thresholds, first match wins, with a
    /// catch-all band. Scores outside `domain` are unexpected.
    RangeChain {
        domain: ScoreRange,
        steps: Vec<RangeStep>,
        otherwise: Band,
    },
    /// One band per legal value, no interpolation.
    ExactMatch { cases: Vec<ExactCase> },
}

impl InterpretationRule {
    /// Start a range chain over `domain`.
    pub fn chain(domain: ScoreRange) -> RangeChainBuilder {
        RangeChainBuilder {
            domain,
            steps: Vec::new(),
        }
    }

    /// Build an exact-match table from `(value, level, text)` triples.
    pub fn exact<I, S>(cases: I) -> Self
    where
        I: IntoIterator<Item = (f64, Level, S)>,
        S: Into<String>,
    {
        InterpretationRule::ExactMatch {
            cases: cases
                .into_iter()
                .map(|(value, level, text)| ExactCase {
                    value,
                    band: Band::new(level, text),
                })
                .collect(),
        }
    }

    /// Map a raw score to its interpretation. Total: anything no band
    /// claims gets [`Level::Unexpected`].
    pub fn interpret(&self, score: f64) -> Interpretation {
        self.band_for(score)
            .map(|band| band.render(score))
            .unwrap_or_else(|| unexpected(score))
    }

    /// The declared band for `score`, if any.
    pub fn band_for(&self, score: f64) -> Option<&Band> {
        if !score.is_finite() {
            return None;
        }
        match self {
            InterpretationRule::RangeChain {
                domain,
                steps,
                otherwise,
            } => {
                if !domain.contains(score) {
                    return None;
                }
                Some(
                    steps
                        .iter()
                        .find(|step| score <= step.upper)
                        .map(|step| &step.band)
                        .unwrap_or(otherwise),
                )
            }
            InterpretationRule::ExactMatch { cases } => cases
                .iter()
                .find(|case| case.value == score)
                .map(|case| &case.band),
        }
    }

    /// Every score value the rule declares a band for, when enumerable.
    pub fn declared_scores(&self) -> Option<Vec<f64>> {
        match self {
            InterpretationRule::RangeChain { domain, .. } => domain.values(),
            InterpretationRule::ExactMatch { cases } => {
                Some(cases.iter().map(|c| c.value).collect())
            }
        }
    }

    pub(crate) fn definition_problems(&self) -> Vec<String> {
        let mut problems = Vec::new();
        match self {
            InterpretationRule::RangeChain { domain, steps, .. } => {
                if domain.min > domain.max {
                    problems.push("range chain domain is empty".to_string());
                }
                for pair in steps.windows(2) {
                    if pair[1].upper <= pair[0].upper {
                        problems.push(format!(
                            "range chain thresholds are not increasing ({} then {})",
                            format_number(pair[0].upper),
                            format_number(pair[1].upper)
                        ));
                    }
                }
                if let Some(last) = steps.last()
                    && last.upper >= domain.max
                {
                    problems.push("catch-all band of range chain is unreachable".to_string());
                }
            }
            InterpretationRule::ExactMatch { cases } => {
                if cases.is_empty() {
                    problems.push("exact-match table has no cases".to_string());
                }
                for (i, case) in cases.iter().enumerate() {
                    if cases[..i].iter().any(|c| c.value == case.value) {
                        problems.push(format!(
                            "exact-match value {} is declared twice",
                            format_number(case.value)
                        ));
                    }
                }
            }
        }
        problems
    }
}

/// Builder for [`InterpretationRule::RangeChain`].
pub struct RangeChainBuilder {
    domain: ScoreRange,
    steps: Vec<RangeStep>,
}

impl RangeChainBuilder {
    /// Scores `<= upper` not claimed earlier map to this band.
    pub fn upto(mut self, upper: f64, level: Level, text: impl Into<String>) -> Self {
        self.steps.push(RangeStep {
            upper,
            band: Band::new(level, text),
        });
        self
    }

    /// Close the chain with its catch-all band.
    pub fn otherwise(self, level: Level, text: impl Into<String>) -> InterpretationRule {
        InterpretationRule::RangeChain {
            domain: self.domain,
            steps: self.steps,
            otherwise: Band::new(level, text),
        }
    }
}

/// The distinguished band for scores no rule claims.
pub fn unexpected(score: f64) -> Interpretation {
    Band::new(Level::Unexpected, UNEXPECTED_TEXT).render(score)
}
