//! scorexpress-instruments
//!
//! Medical scoring instrument definitions and the engine that evaluates
//! them. Pure data and pure functions apart from the async catalog loader.
//! Each instrument declares its criteria, a calculation strategy and an
//! interpretation rule; [`evaluate`] runs normalize → calculate → interpret.

pub mod calculation;
pub mod catalog;
pub mod error;
pub mod instruments;
pub mod interpretation;
pub mod normalize;
pub mod scoring;

use serde::Serialize;

use scorexpress_core::models::answer::Answers;
use scorexpress_core::models::category::Category;
use scorexpress_core::models::result::ScoreResult;

use calculation::Calculation;
use error::InstrumentError;
use interpretation::InterpretationRule;
use scoring::{Criterion, ValidationError};

/// One scoring tool: identity, ordered criteria and its two strategies.
#[derive(Debug, Clone, Serialize)]
pub struct Instrument {
    /// Unique across the catalog (e.g. "crb65", "child-pugh").
    pub id: String,
    pub name: String,
    pub short_name: String,
    pub category: Category,
    pub description: String,
    /// Literature reference the thresholds come from.
    pub source: String,
    pub notes: Option<String>,
    pub more_info_link: Option<String>,
    /// Reference bands shown next to the calculator, in display order.
    pub reference_values: Vec<(String, String)>,
    /// Order drives form layout and the positional order seen by the
    /// calculation.
    pub criteria: Vec<Criterion>,
    pub calculation: Calculation,
    pub interpretation: InterpretationRule,
}

impl Instrument {
    /// Answers of a blank form: every criterion at its default.
    pub fn default_answers(&self) -> Answers {
        self.criteria
            .iter()
            .map(|c| (c.id.clone(), c.default_answer()))
            .collect()
    }

    pub fn criterion(&self, id: &str) -> Option<&Criterion> {
        self.criteria.iter().find(|c| c.id == id)
    }

    /// Raw score for the given answers.
    pub fn calculate(&self, answers: &Answers) -> f64 {
        let contributions = normalize::normalize(&self.criteria, answers);
        self.calculation.calculate(&contributions)
    }

    /// Lowest and highest raw score a summed or passthrough instrument can
    /// produce. `None` for custom formulas and unbounded numeric criteria.
    pub fn score_bounds(&self) -> Option<(f64, f64)> {
        match self.calculation {
            Calculation::Sum => self.criteria.iter().try_fold((0.0, 0.0), |(lo, hi), c| {
                let (min, max) = c.contribution_bounds()?;
                Some((lo + min, hi + max))
            }),
            Calculation::Passthrough => self.criteria.first()?.contribution_bounds(),
            Calculation::Custom(_) => None,
        }
    }

    /// Check answers against each criterion's domain.
    ///
    /// Advisory only: [`evaluate`] accepts anything and normalizes
    /// out-of-domain answers to zero.
    pub fn validate_answers(&self, answers: &Answers) -> Vec<ValidationError> {
        let mut errors = Vec::new();
        for (criterion_id, answer) in answers {
            match self.criterion(criterion_id) {
                Some(criterion) => {
                    if let Some(problem) = criterion.answer_problem(answer) {
                        errors.push(ValidationError {
                            criterion_id: criterion_id.clone(),
                            answer: Some(*answer),
                            message: format!("{}: {problem}", self.short_name),
                        });
                    }
                }
                None => errors.push(ValidationError {
                    criterion_id: criterion_id.clone(),
                    answer: Some(*answer),
                    message: format!(
                        "{}: unknown criterion '{criterion_id}'",
                        self.short_name
                    ),
                }),
            }
        }
        errors
    }

    /// Check the definition's own invariants: unique criterion ids, valid
    /// defaults and options, strategy arity, well-formed interpretation.
    pub fn validate(&self) -> Result<(), InstrumentError> {
        let mut problems = Vec::new();

        if self.id.trim().is_empty() {
            problems.push("instrument id is empty".to_string());
        }
        for (i, criterion) in self.criteria.iter().enumerate() {
            if self.criteria[..i].iter().any(|c| c.id == criterion.id) {
                problems.push(format!("criterion id '{}' is declared twice", criterion.id));
            }
            problems.extend(criterion.definition_problems());
        }
        if let Some(arity) = self.calculation.arity()
            && arity != self.criteria.len()
        {
            problems.push(format!(
                "calculation expects {arity} criteria, instrument declares {}",
                self.criteria.len()
            ));
        }
        problems.extend(self.interpretation.definition_problems());

        if problems.is_empty() {
            Ok(())
        } else {
            Err(InstrumentError::InvalidDefinition {
                instrument_id: self.id.clone(),
                reason: problems.join("; "),
            })
        }
    }
}

/// Evaluate an instrument: normalize the answers, compute the raw score and
/// interpret it.
///
/// Never fails. Missing answers contribute zero and a score outside every
/// band is reported with [`scorexpress_core::models::level::Level::Unexpected`].
pub fn evaluate(instrument: &Instrument, answers: &Answers) -> ScoreResult {
    let value = instrument.calculate(answers);
    let interpretation = instrument.interpretation.interpret(value);

    ScoreResult {
        instrument_id: instrument.id.clone(),
        value,
        interpretation,
        criteria_values: answers.clone(),
    }
}
