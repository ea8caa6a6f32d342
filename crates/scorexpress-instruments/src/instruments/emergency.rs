use scorexpress_core::models::category::Category;
use scorexpress_core::models::level::Level;

use super::{boolean, described};
use crate::calculation::Calculation;
use crate::error::InstrumentError;
use crate::interpretation::InterpretationRule;
use crate::scoring::ScoreRange;
use crate::Instrument;

pub fn instruments() -> Result<Vec<Instrument>, InstrumentError> {
    Ok(vec![qsofa(), spesi()])
}

/// Quick SOFA: bedside sepsis screen outside the ICU. 0–3.
fn qsofa() -> Instrument {
    Instrument {
        id: "qsofa".to_string(),
        name: "qSOFA Score (Quick SOFA)".to_string(),
        short_name: "qSOFA".to_string(),
        category: Category::Emergency,
        description: "Identifies patients with suspected infection at risk of poor outcome \
                      outside the ICU."
            .to_string(),
        source: "Singer M, Deutschman CS, Seymour CW, et al. The Third International Consensus \
                 Definitions for Sepsis and Septic Shock (Sepsis-3). JAMA. 2016 Feb \
                 23;315(8):801-10."
            .to_string(),
        notes: Some(
            "Not a diagnostic criterion for sepsis. A score ≥ 2 should prompt assessment for \
             organ dysfunction."
                .to_string(),
        ),
        more_info_link: Some(
            "https://www.mdcalc.com/calc/2654/qsofa-quick-sofa-score-sepsis".to_string(),
        ),
        reference_values: Vec::new(),
        criteria: vec![
            boolean("respiratory_rate_qsofa", "Respiratory rate ≥ 22/min", 1.0),
            boolean("altered_mentation", "Altered mentation (GCS < 15)", 1.0),
            boolean("systolic_bp_qsofa", "Systolic blood pressure ≤ 100 mmHg", 1.0),
        ],
        calculation: Calculation::Sum,
        interpretation: InterpretationRule::chain(ScoreRange::integers(0.0, 3.0))
            .upto(1.0, Level::Low, "Low risk of poor outcome (qSOFA < 2).")
            .otherwise(
                Level::High,
                "High risk of poor outcome (qSOFA ≥ 2). Assess for organ dysfunction.",
            ),
    }
}

/// Simplified Pulmonary Embolism Severity Index. 0–6.
fn spesi() -> Instrument {
    Instrument {
        id: "spesi".to_string(),
        name: "sPESI (Simplified Pulmonary Embolism Severity Index)".to_string(),
        short_name: "sPESI".to_string(),
        category: Category::Emergency,
        description: "Estimates 30-day mortality in patients with confirmed pulmonary embolism."
            .to_string(),
        source: "Jiménez D, Aujesky D, Moores L, et al. Simplification of the pulmonary \
                 embolism severity index for prognostication in patients with acute \
                 symptomatic pulmonary embolism. Arch Intern Med. 2010 Aug 9;170(15):1383-9."
            .to_string(),
        notes: Some("A score of 0 identifies low-risk patients eligible for early discharge.".to_string()),
        more_info_link: Some(
            "https://www.mdcalc.com/calc/1247/simplified-pesi-pulmonary-embolism-severity-index"
                .to_string(),
        ),
        reference_values: Vec::new(),
        criteria: vec![
            boolean("age_gt_80", "Age > 80 years", 1.0),
            boolean("cancer_history", "History of cancer", 1.0),
            described(
                boolean("chronic_cardiopulmonary_disease", "Chronic cardiopulmonary disease", 1.0),
                "Heart failure or chronic lung disease.",
            ),
            boolean("heart_rate_ge_110", "Heart rate ≥ 110 bpm", 1.0),
            boolean("systolic_bp_lt_100", "Systolic blood pressure < 100 mmHg", 1.0),
            boolean("o2_saturation_lt_90", "Arterial oxygen saturation < 90%", 1.0),
        ],
        calculation: Calculation::Sum,
        interpretation: InterpretationRule::chain(ScoreRange::integers(0.0, 6.0))
            .upto(0.0, Level::Low, "Low risk: 30-day mortality ~1.0%.")
            .otherwise(Level::High, "High risk (score ≥ 1): 30-day mortality ~10.9%."),
    }
}
