use serde::{Deserialize, Serialize};
use thiserror::Error;
use ts_rs::TS;

use scorexpress_core::models::answer::{AnswerValue, format_number};

/// Defines the valid range for a score.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ScoreRange {
    pub min: f64,
    pub max: f64,
    pub step: Option<f64>,
}

impl ScoreRange {
    /// Whole-number range `[min, max]`.
    pub const fn integers(min: f64, max: f64) -> Self {
        Self {
            min,
            max,
            step: Some(1.0),
        }
    }

    pub const fn stepped(min: f64, max: f64, step: f64) -> Self {
        Self {
            min,
            max,
            step: Some(step),
        }
    }

    pub fn contains(&self, value: f64) -> bool {
        if !value.is_finite() || value < self.min || value > self.max {
            return false;
        }
        if let Some(step) = self.step {
            let offset = value - self.min;
            let remainder = offset % step;
            // Allow floating point tolerance
            remainder < 1e-9 || (step - remainder) < 1e-9
        } else {
            true
        }
    }

    /// Every value on the step grid, or `None` for a continuous range.
    pub fn values(&self) -> Option<Vec<f64>> {
        let step = self.step.filter(|s| *s > 0.0)?;
        let count = ((self.max - self.min) / step + 1e-9).floor() as usize;
        Some((0..=count).map(|i| self.min + step * i as f64).collect())
    }
}

/// One selectable answer of a select criterion.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct CriterionOption {
    /// Points contributed when chosen.
    pub value: f64,
    pub label: String,
}

/// The kind of input a criterion takes, with its kind-specific settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(tag = "type", rename_all = "snake_case")]
#[ts(export)]
pub enum CriterionKind {
    /// Checkbox. Contributes `points` when ticked.
    Boolean { points: f64, default: bool },
    /// Free numeric entry. `range` is advisory and only feeds validation.
    Numeric {
        default: f64,
        unit: Option<String>,
        range: Option<ScoreRange>,
    },
    /// Single choice among ordered options.
    Select {
        options: Vec<CriterionOption>,
        default: f64,
    },
}

/// One input the user supplies for an instrument.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Criterion {
    pub id: String,
    pub name: String,
    pub kind: CriterionKind,
    pub description: Option<String>,
}

impl Criterion {
    /// The answer a blank form starts with.
    pub fn default_answer(&self) -> AnswerValue {
        match &self.kind {
            CriterionKind::Boolean { default, .. } => AnswerValue::Boolean(*default),
            CriterionKind::Numeric { default, .. } => AnswerValue::Numeric(*default),
            CriterionKind::Select { default, .. } => AnswerValue::Select(*default),
        }
    }

    /// Parse raw form text into an answer of this criterion's kind.
    ///
    /// Returns `None` when the text means nothing for this kind; callers
    /// treat that as "not answered".
    pub fn parse_answer(&self, raw: &str) -> Option<AnswerValue> {
        let raw = raw.trim();
        match &self.kind {
            CriterionKind::Boolean { .. } => match raw.to_ascii_lowercase().as_str() {
                "true" | "on" | "yes" | "1" => Some(AnswerValue::Boolean(true)),
                "false" | "off" | "no" | "0" | "" => Some(AnswerValue::Boolean(false)),
                _ => None,
            },
            CriterionKind::Numeric { .. } => raw
                .parse::<f64>()
                .ok()
                .filter(|n| n.is_finite())
                .map(AnswerValue::Numeric),
            CriterionKind::Select { .. } => raw
                .parse::<f64>()
                .ok()
                .filter(|n| n.is_finite())
                .map(AnswerValue::Select),
        }
    }

    /// Label of the select option with the given value.
    pub fn option_label(&self, value: f64) -> Option<&str> {
        match &self.kind {
            CriterionKind::Select { options, .. } => options
                .iter()
                .find(|o| o.value == value)
                .map(|o| o.label.as_str()),
            _ => None,
        }
    }

    /// Lowest and highest contribution this criterion can make, or `None`
    /// when it is unbounded (numeric entry without a range).
    pub fn contribution_bounds(&self) -> Option<(f64, f64)> {
        match &self.kind {
            CriterionKind::Boolean { points, .. } => Some((points.min(0.0), points.max(0.0))),
            CriterionKind::Numeric { range, .. } => range.map(|r| (r.min, r.max)),
            CriterionKind::Select { options, .. } => {
                let min = options.iter().map(|o| o.value).reduce(f64::min)?;
                let max = options.iter().map(|o| o.value).reduce(f64::max)?;
                Some((min, max))
            }
        }
    }

    /// Every answer a user can give, or a handful of samples for numeric
    /// entry.
    pub fn answer_domain(&self) -> Vec<AnswerValue> {
        match &self.kind {
            CriterionKind::Boolean { .. } => {
                vec![AnswerValue::Boolean(false), AnswerValue::Boolean(true)]
            }
            CriterionKind::Numeric { default, range, .. } => match range {
                Some(r) => r
                    .values()
                    .unwrap_or_else(|| vec![r.min, *default, r.max])
                    .into_iter()
                    .map(AnswerValue::Numeric)
                    .collect(),
                None => vec![AnswerValue::Numeric(*default)],
            },
            CriterionKind::Select { options, .. } => options
                .iter()
                .map(|o| AnswerValue::Select(o.value))
                .collect(),
        }
    }

    /// Describe why `answer` is outside this criterion's domain.
    pub(crate) fn answer_problem(&self, answer: &AnswerValue) -> Option<String> {
        match (&self.kind, answer) {
            (CriterionKind::Boolean { .. }, AnswerValue::Boolean(_)) => None,
            (CriterionKind::Numeric { range, .. }, AnswerValue::Numeric(n)) => {
                if !n.is_finite() {
                    return Some(format!("{}: value is not a number", self.name));
                }
                match range {
                    Some(r) if !r.contains(*n) => Some(format!(
                        "{}: {} is outside range [{}, {}]",
                        self.name,
                        format_number(*n),
                        format_number(r.min),
                        format_number(r.max),
                    )),
                    _ => None,
                }
            }
            (CriterionKind::Select { options, .. }, AnswerValue::Select(v)) => {
                if options.iter().any(|o| o.value == *v) {
                    None
                } else {
                    Some(format!(
                        "{}: {} is not one of the options",
                        self.name,
                        format_number(*v)
                    ))
                }
            }
            _ => Some(format!(
                "{}: answer kind does not match the criterion",
                self.name
            )),
        }
    }

    /// Describe what is wrong with this criterion's own definition.
    pub(crate) fn definition_problems(&self) -> Vec<String> {
        let mut problems = Vec::new();
        match &self.kind {
            CriterionKind::Boolean { points, .. } => {
                if !points.is_finite() {
                    problems.push(format!("criterion '{}' has non-finite points", self.id));
                }
            }
            CriterionKind::Numeric { default, range, .. } => {
                if !default.is_finite() {
                    problems.push(format!("criterion '{}' has a non-finite default", self.id));
                } else if let Some(r) = range
                    && !r.contains(*default)
                {
                    problems.push(format!(
                        "criterion '{}' default {} is outside its range",
                        self.id,
                        format_number(*default)
                    ));
                }
            }
            CriterionKind::Select { options, default } => {
                if options.is_empty() {
                    problems.push(format!("criterion '{}' has no options", self.id));
                } else if !options.iter().any(|o| o.value == *default) {
                    problems.push(format!(
                        "criterion '{}' default {} is not one of its options",
                        self.id,
                        format_number(*default)
                    ));
                }
                if options.iter().any(|o| !o.value.is_finite()) {
                    problems.push(format!("criterion '{}' has a non-finite option", self.id));
                }
            }
        }
        problems
    }
}

/// An answer that falls outside its criterion's domain.
///
/// Advisory: evaluation still runs and normalizes such answers to zero.
#[derive(Debug, Clone, Serialize, Deserialize, TS, Error)]
#[ts(export)]
#[error("{message}")]
pub struct ValidationError {
    pub criterion_id: String,
    pub answer: Option<AnswerValue>,
    pub message: String,
}
