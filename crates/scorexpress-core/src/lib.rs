//! scorexpress-core
//!
//! Pure domain types shared by every ScoreXpress crate: categories, severity
//! levels, typed answers and score results. No scoring logic lives here.

pub mod error;
pub mod models;
