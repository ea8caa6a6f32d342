use std::fmt;

use serde::{Serialize, Serializer};

/// How an instrument turns its contribution vector into a raw score.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "strategy", content = "formula", rename_all = "snake_case")]
pub enum Calculation {
    /// Signed sum of every contribution.
    Sum,
    /// The single contribution is the score (ordinal grades, classes).
    Passthrough,
    /// Instrument-specific rule over the whole vector.
    Custom(Formula),
}

/// A named, pure scoring rule.
#[derive(Clone, Copy)]
pub struct Formula {
    pub name: &'static str,
    /// Number of contributions the rule expects.
    pub arity: usize,
    pub apply: fn(&[f64]) -> f64,
}

impl fmt::Debug for Formula {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Formula")
            .field("name", &self.name)
            .field("arity", &self.arity)
            .finish()
    }
}

impl PartialEq for Formula {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name && self.arity == other.arity
    }
}

impl Serialize for Formula {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name)
    }
}

impl Calculation {
    /// Compute the raw score. Non-finite contributions count as `0`, and a
    /// non-finite result is reported as `0`.
    pub fn calculate(&self, contributions: &[f64]) -> f64 {
        let sanitized: Vec<f64> = contributions
            .iter()
            .map(|v| if v.is_finite() { *v } else { 0.0 })
            .collect();

        let raw = match self {
            Calculation::Sum => sanitized.iter().sum(),
            Calculation::Passthrough => sanitized.first().copied().unwrap_or(0.0),
            Calculation::Custom(formula) => (formula.apply)(&sanitized),
        };

        if raw.is_finite() { raw } else { 0.0 }
    }

    /// Number of criteria this strategy needs, when it is fixed.
    pub fn arity(&self) -> Option<usize> {
        match self {
            Calculation::Sum => None,
            Calculation::Passthrough => Some(1),
            Calculation::Custom(formula) => Some(formula.arity),
        }
    }
}

/// `1` when both subgroups have at least one positive contribution.
///
/// The first `split` contributions form the first subgroup, the rest form
/// the second.
pub fn both_subgroups_positive(contributions: &[f64], split: usize) -> f64 {
    let split = split.min(contributions.len());
    let (first, second) = contributions.split_at(split);
    let first: f64 = first.iter().sum();
    let second: f64 = second.iter().sum();
    if first > 0.0 && second > 0.0 { 1.0 } else { 0.0 }
}

/// Count of positions where "answered yes" agrees with the symptomatic
/// answer for that question.
///
/// Positions beyond `symptomatic` are ignored.
pub fn symptomatic_answers(contributions: &[f64], symptomatic: &[bool]) -> f64 {
    contributions
        .iter()
        .zip(symptomatic)
        .filter(|(value, expected)| (**value > 0.0) == **expected)
        .count() as f64
}
