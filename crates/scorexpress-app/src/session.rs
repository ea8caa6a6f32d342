//! One open calculator: an instrument, the answers typed so far and the
//! result computed from them.

use std::sync::Arc;

use jiff::civil::Date;
use tracing::debug;

use scorexpress_core::models::answer::{AnswerValue, Answers};
use scorexpress_core::models::result::ScoreResult;
use scorexpress_export::docx::generate_docx;
use scorexpress_export::error::ExportError;
use scorexpress_export::filename::{ExportFormat, export_filename};
use scorexpress_export::render::render_recap;
use scorexpress_export::styles::DocumentStyles;
use scorexpress_instruments::error::InstrumentError;
use scorexpress_instruments::scoring::{Criterion, ValidationError};
use scorexpress_instruments::{Instrument, evaluate};

/// A recap ready to be saved or attached.
#[derive(Debug, Clone, PartialEq)]
pub struct ExportedRecap {
    pub filename: String,
    pub bytes: Vec<u8>,
}

/// Calculator state for one instrument.
///
/// Every answer change re-evaluates the instrument and replaces the result
/// wholesale.
#[derive(Debug, Clone)]
pub struct CalculatorSession {
    instrument: Arc<Instrument>,
    answers: Answers,
    result: ScoreResult,
}

impl CalculatorSession {
    /// Open a session with every criterion at its default.
    pub fn new(instrument: Arc<Instrument>) -> Self {
        let answers = instrument.default_answers();
        let result = evaluate(&instrument, &answers);
        Self {
            instrument,
            answers,
            result,
        }
    }

    pub fn instrument(&self) -> &Instrument {
        &self.instrument
    }

    pub fn answers(&self) -> &Answers {
        &self.answers
    }

    pub fn result(&self) -> &ScoreResult {
        &self.result
    }

    /// Replace one answer and recompute.
    pub fn set_answer(
        &mut self,
        criterion_id: &str,
        value: AnswerValue,
    ) -> Result<&ScoreResult, InstrumentError> {
        self.require_criterion(criterion_id)?;
        self.answers.insert(criterion_id.to_string(), value);
        Ok(self.recompute())
    }

    /// Replace one answer from raw form text and recompute. Text that means
    /// nothing for the criterion's kind clears the answer.
    pub fn set_raw(&mut self, criterion_id: &str, raw: &str) -> Result<&ScoreResult, InstrumentError> {
        let parsed = self.require_criterion(criterion_id)?.parse_answer(raw);
        match parsed {
            Some(value) => {
                self.answers.insert(criterion_id.to_string(), value);
            }
            None => {
                debug!(
                    instrument_id = %self.instrument.id,
                    criterion_id,
                    raw,
                    "unparseable answer, treating as not answered"
                );
                self.answers.remove(criterion_id);
            }
        }
        Ok(self.recompute())
    }

    /// Back to the blank form.
    pub fn reset(&mut self) -> &ScoreResult {
        self.answers = self.instrument.default_answers();
        self.recompute()
    }

    /// Answers outside their criterion's domain. Advisory only.
    pub fn validation(&self) -> Vec<ValidationError> {
        self.instrument.validate_answers(&self.answers)
    }

    /// Markdown recap of the current result.
    pub fn recap(&self) -> Result<String, ExportError> {
        render_recap(&self.instrument, &self.result)
    }

    /// The current recap in `format`, with its dated file name.
    pub fn export(
        &self,
        format: ExportFormat,
        styles: &DocumentStyles,
        date: Date,
    ) -> Result<ExportedRecap, ExportError> {
        let markdown = self.recap()?;
        let bytes = match format {
            ExportFormat::Markdown => markdown.into_bytes(),
            ExportFormat::Docx => generate_docx(&markdown, styles)?,
        };

        Ok(ExportedRecap {
            filename: export_filename(&self.instrument.name, date, format),
            bytes,
        })
    }

    fn require_criterion(&self, criterion_id: &str) -> Result<&Criterion, InstrumentError> {
        self.instrument
            .criterion(criterion_id)
            .ok_or_else(|| InstrumentError::UnknownCriterion {
                instrument_id: self.instrument.id.clone(),
                criterion_id: criterion_id.to_string(),
            })
    }

    fn recompute(&mut self) -> &ScoreResult {
        self.result = evaluate(&self.instrument, &self.answers);
        debug!(
            instrument_id = %self.instrument.id,
            value = self.result.value,
            level = %self.result.interpretation.level,
            "score recomputed"
        );
        &self.result
    }
}
