use scorexpress_core::models::category::Category;
use scorexpress_core::models::level::Level;

use super::{references, select};
use crate::calculation::Calculation;
use crate::error::InstrumentError;
use crate::interpretation::InterpretationRule;
use crate::scoring::ScoreRange;
use crate::Instrument;

pub fn instruments() -> Result<Vec<Instrument>, InstrumentError> {
    Ok(vec![glasgow()])
}

/// Glasgow Coma Scale, E + V + M. 3–15.
fn glasgow() -> Instrument {
    Instrument {
        id: "glasgow".to_string(),
        name: "Glasgow Coma Scale (GCS)".to_string(),
        short_name: "GCS".to_string(),
        category: Category::Neurology,
        description: "Assesses level of consciousness after head injury.".to_string(),
        source: "Teasdale G, Jennett B. Assessment of coma and impaired consciousness. A \
                 practical scale. Lancet. 1974 Jul 13;2(7872):81-4."
            .to_string(),
        notes: Some(
            "GCS ranges from 3 (deep coma) to 15 (fully conscious). Add E + V + M.".to_string(),
        ),
        more_info_link: Some(
            "https://www.mdcalc.com/calc/119/glasgow-coma-scale-score-gcs".to_string(),
        ),
        reference_values: references(&[
            ("severe", "Score ≤ 8: severe head injury."),
            ("moderate", "Score 9–12: moderate head injury."),
            ("mild", "Score 13–15: mild head injury."),
        ]),
        criteria: vec![
            select("eye_opening", "Eye opening (E)", 4.0, &[
                (4.0, "Spontaneous"),
                (3.0, "To verbal command"),
                (2.0, "To pain"),
                (1.0, "None"),
            ]),
            select("verbal_response", "Verbal response (V)", 5.0, &[
                (5.0, "Oriented"),
                (4.0, "Confused"),
                (3.0, "Inappropriate words"),
                (2.0, "Incomprehensible sounds"),
                (1.0, "None"),
            ]),
            select("motor_response", "Motor response (M)", 6.0, &[
                (6.0, "Obeys commands"),
                (5.0, "Localizes pain"),
                (4.0, "Withdraws from pain"),
                (3.0, "Abnormal flexion (decorticate)"),
                (2.0, "Extension (decerebrate)"),
                (1.0, "None"),
            ]),
        ],
        calculation: Calculation::Sum,
        interpretation: InterpretationRule::chain(ScoreRange::integers(3.0, 15.0))
            .upto(8.0, Level::Severe, "Severe head injury (GCS ≤ 8)")
            .upto(12.0, Level::Moderate, "Moderate head injury (GCS 9–12)")
            .otherwise(Level::Low, "Mild head injury (GCS 13–15)"),
    }
}
