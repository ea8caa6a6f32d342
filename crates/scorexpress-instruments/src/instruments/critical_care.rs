use scorexpress_core::models::category::Category;
use scorexpress_core::models::level::Level;

use super::{references, select};
use crate::calculation::Calculation;
use crate::error::InstrumentError;
use crate::interpretation::InterpretationRule;
use crate::scoring::ScoreRange;
use crate::Instrument;

pub fn instruments() -> Result<Vec<Instrument>, InstrumentError> {
    Ok(vec![sofa()])
}

/// Sequential Organ Failure Assessment: six organ systems scored 0–4.
fn sofa() -> Instrument {
    let organ = |id: &str, name: &str, labels: [&str; 5]| {
        let options: Vec<(f64, &str)> = labels
            .iter()
            .enumerate()
            .map(|(points, label)| (points as f64, *label))
            .collect();
        select(id, name, 0.0, &options)
    };

    Instrument {
        id: "sofa".to_string(),
        name: "SOFA Score (Sequential Organ Failure Assessment)".to_string(),
        short_name: "SOFA".to_string(),
        category: Category::CriticalCare,
        description: "Tracks organ dysfunction in ICU patients and estimates mortality."
            .to_string(),
        source: "Vincent JL, Moreno R, Takala J, et al. The SOFA (Sepsis-related Organ Failure \
                 Assessment) score to describe organ dysfunction/failure. Intensive Care Med. \
                 1996 Jul;22(7):707-10."
            .to_string(),
        notes: Some(
            "Use the worst value of each parameter over the previous 24 hours. An increase of \
             2 points or more suggests sepsis-related organ dysfunction."
                .to_string(),
        ),
        more_info_link: Some(
            "https://www.mdcalc.com/calc/691/sequential-organ-failure-assessment-sofa-score"
                .to_string(),
        ),
        reference_values: references(&[
            ("mortality_0_6", "Score 0–6: mortality < 10%."),
            ("mortality_7_9", "Score 7–9: mortality 15–20%."),
            ("mortality_10_12", "Score 10–12: mortality 40–50%."),
            ("mortality_13_15", "Score 13–15: mortality 50–60%."),
            ("mortality_gt_15", "Score > 15: mortality > 80%."),
        ]),
        criteria: vec![
            organ("respiration_pao2_fio2", "Respiration (PaO₂/FiO₂, mmHg)", [
                "≥ 400",
                "< 400",
                "< 300",
                "< 200 with respiratory support",
                "< 100 with respiratory support",
            ]),
            organ("coagulation_platelets", "Coagulation (platelets ×10³/µL)", [
                "≥ 150",
                "< 150",
                "< 100",
                "< 50",
                "< 20",
            ]),
            organ("liver_bilirubin", "Liver (bilirubin, µmol/L)", [
                "< 20",
                "20–32",
                "33–101",
                "102–204",
                "> 204",
            ]),
            organ("cardiovascular_map_vasopressors", "Cardiovascular (MAP or vasopressors)", [
                "MAP ≥ 70 mmHg",
                "MAP < 70 mmHg",
                "Dopamine ≤ 5 or any dobutamine",
                "Dopamine > 5, epinephrine ≤ 0.1 or norepinephrine ≤ 0.1",
                "Dopamine > 15, epinephrine > 0.1 or norepinephrine > 0.1",
            ]),
            organ("cns_gcs_sofa", "Central nervous system (Glasgow Coma Scale)", [
                "15",
                "13–14",
                "10–12",
                "6–9",
                "< 6",
            ]),
            organ("renal_creatinine_urine_output", "Renal (creatinine µmol/L or urine output)", [
                "< 110",
                "110–170",
                "171–299",
                "300–440 or urine < 500 mL/day",
                "> 440 or urine < 200 mL/day",
            ]),
        ],
        calculation: Calculation::Sum,
        interpretation: InterpretationRule::chain(ScoreRange::integers(0.0, 24.0))
            .upto(1.0, Level::VeryLow, "Score {score}: minimal organ dysfunction, mortality < 10%.")
            .upto(6.0, Level::Low, "Score {score}: mild organ dysfunction, mortality < 10%.")
            .upto(9.0, Level::Moderate, "Score {score}: moderate organ dysfunction, mortality 15–20%.")
            .upto(12.0, Level::High, "Score {score}: severe organ dysfunction, mortality 40–50%.")
            .upto(15.0, Level::VeryHigh, "Score {score}: very severe organ dysfunction, mortality 50–60%.")
            .otherwise(Level::Severe, "Score {score}: critical multi-organ failure, mortality > 80%."),
    }
}
