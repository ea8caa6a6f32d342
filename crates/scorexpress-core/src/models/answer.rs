use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// A user's answer to one criterion, tagged by the kind of input that
/// produced it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
#[ts(export)]
pub enum AnswerValue {
    /// Checkbox state.
    Boolean(bool),
    /// Free numeric entry. May be NaN when the field could not be parsed.
    Numeric(f64),
    /// Value of the chosen select option.
    Select(f64),
}

impl AnswerValue {
    /// Short form used when echoing an answer back to the user.
    pub fn display(&self) -> String {
        match self {
            AnswerValue::Boolean(true) => "yes".to_string(),
            AnswerValue::Boolean(false) => "no".to_string(),
            AnswerValue::Numeric(n) | AnswerValue::Select(n) => format_number(*n),
        }
    }
}

/// Answers keyed by criterion id. Absent keys mean "not answered".
pub type Answers = BTreeMap<String, AnswerValue>;

/// Format a score or answer without a trailing `.0` for whole numbers.
pub fn format_number(value: f64) -> String {
    if value.is_finite() && value.fract() == 0.0 {
        format!("{value:.0}")
    } else {
        format!("{value}")
    }
}
