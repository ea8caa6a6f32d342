use thiserror::Error;

use scorexpress_core::models::category::Category;

#[derive(Debug, Error)]
pub enum InstrumentError {
    #[error("unknown instrument: {0}")]
    UnknownInstrument(String),

    #[error("unknown criterion '{criterion_id}' for instrument '{instrument_id}'")]
    UnknownCriterion {
        instrument_id: String,
        criterion_id: String,
    },

    #[error("invalid definition for instrument '{instrument_id}': {reason}")]
    InvalidDefinition {
        instrument_id: String,
        reason: String,
    },

    #[error("instrument '{instrument_id}' is tagged {found}, expected {expected}")]
    WrongCategory {
        instrument_id: String,
        expected: Category,
        found: Category,
    },

    #[error("loading category {category} failed: {reason}")]
    CategoryLoad { category: Category, reason: String },
}
