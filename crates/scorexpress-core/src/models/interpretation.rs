use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::level::Level;

/// Categorical meaning of a raw score.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Interpretation {
    pub level: Level,
    pub text: String,
}

impl Interpretation {
    pub fn new(level: Level, text: impl Into<String>) -> Self {
        Self {
            level,
            text: text.into(),
        }
    }
}
