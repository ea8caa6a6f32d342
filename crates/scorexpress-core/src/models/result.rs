use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::answer::Answers;
use super::interpretation::Interpretation;
use crate::error::CoreError;

/// Outcome of one evaluation.
///
/// Built fresh on every input change and replaced wholesale, never edited
/// in place. Not persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ScoreResult {
    pub instrument_id: String,
    pub value: f64,
    pub interpretation: Interpretation,
    /// The answers the value was computed from.
    pub criteria_values: Answers,
}

impl ScoreResult {
    /// Whether two results agree on the computed outcome, ignoring the
    /// answers that produced them.
    pub fn same_outcome(&self, other: &ScoreResult) -> bool {
        self.instrument_id == other.instrument_id
            && self.value.to_bits() == other.value.to_bits()
            && self.interpretation == other.interpretation
    }

    /// JSON form handed to share and email collaborators.
    pub fn to_json(&self) -> Result<String, CoreError> {
        Ok(serde_json::to_string(self)?)
    }
}
