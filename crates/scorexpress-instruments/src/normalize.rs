//! Criterion value normalization.
//!
//! Turns the user's typed answers into one numeric contribution per
//! criterion, in declaration order. Missing, malformed or mismatched
//! answers contribute `0`; nothing here fails.

use scorexpress_core::models::answer::{AnswerValue, Answers};
use tracing::debug;

use crate::scoring::{Criterion, CriterionKind};

/// Contribution of every criterion, in declaration order.
///
/// The output always has exactly `criteria.len()` entries.
pub fn normalize(criteria: &[Criterion], answers: &Answers) -> Vec<f64> {
    criteria
        .iter()
        .map(|criterion| contribution(criterion, answers.get(&criterion.id)))
        .collect()
}

/// Contribution of a single criterion for an optional answer.
pub fn contribution(criterion: &Criterion, answer: Option<&AnswerValue>) -> f64 {
    let Some(answer) = answer else {
        return 0.0;
    };

    let value = match (&criterion.kind, answer) {
        (CriterionKind::Boolean { points, .. }, AnswerValue::Boolean(checked)) => {
            if *checked {
                *points
            } else {
                0.0
            }
        }
        (CriterionKind::Numeric { .. }, AnswerValue::Numeric(n)) => *n,
        (CriterionKind::Select { options, .. }, AnswerValue::Select(v)) => options
            .iter()
            .find(|o| o.value == *v)
            .map(|o| o.value)
            .unwrap_or(0.0),
        (_, other) => {
            debug!(
                criterion_id = %criterion.id,
                answer = ?other,
                "answer kind does not match criterion, contributing 0"
            );
            0.0
        }
    };

    if value.is_finite() { value } else { 0.0 }
}
