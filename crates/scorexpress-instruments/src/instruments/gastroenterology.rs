use scorexpress_core::models::category::Category;
use scorexpress_core::models::level::Level;

use super::{described, references, select};
use crate::calculation::Calculation;
use crate::error::InstrumentError;
use crate::interpretation::InterpretationRule;
use crate::scoring::ScoreRange;
use crate::Instrument;

pub fn instruments() -> Result<Vec<Instrument>, InstrumentError> {
    Ok(vec![rockall(), child_pugh()])
}

/// Complete Rockall score after upper GI bleeding. 0–11.
fn rockall() -> Instrument {
    Instrument {
        id: "rockall".to_string(),
        name: "Rockall Score".to_string(),
        short_name: "Rockall".to_string(),
        category: Category::Gastroenterology,
        description: "Estimates rebleeding and mortality risk after acute upper gastrointestinal \
                      hemorrhage."
            .to_string(),
        source: "Rockall TA, Logan RF, Devlin HB, Northfield TC. Risk assessment after acute \
                 upper gastrointestinal haemorrhage. Gut. 1996 Mar;38(3):316-21."
            .to_string(),
        notes: Some(
            "The complete score (maximum 11) includes endoscopic criteria. A pre-endoscopy \
             clinical score (maximum 7) omits the last two criteria."
                .to_string(),
        ),
        more_info_link: Some(
            "https://www.mdcalc.com/calc/123/rockall-score-upper-gi-bleeding".to_string(),
        ),
        reference_values: references(&[
            ("low_risk_rebleed", "Score 0–2: low rebleeding risk (0–5%)."),
            ("high_risk_rebleed", "Score 3–5: high rebleeding risk (11–25%)."),
            ("very_high_risk_rebleed", "Score >5: very high rebleeding risk (>30%)."),
            ("low_risk_mortality", "Score 0–2: low mortality (0–2%)."),
            ("intermediate_risk_mortality", "Score 3–4: intermediate mortality (5–11%)."),
            ("high_risk_mortality", "Score ≥5: high mortality (24–40%)."),
        ]),
        criteria: vec![
            select("age", "Age", 0.0, &[
                (0.0, "< 60 years"),
                (1.0, "60–79 years"),
                (2.0, "≥ 80 years"),
            ]),
            select("shock", "Shock", 0.0, &[
                (0.0, "None (SBP ≥ 100 mmHg, HR < 100/min)"),
                (1.0, "Tachycardia (SBP ≥ 100 mmHg, HR ≥ 100/min)"),
                (2.0, "Hypotension (SBP < 100 mmHg)"),
            ]),
            select("comorbidity", "Major comorbidity", 0.0, &[
                (0.0, "No major comorbidity"),
                (2.0, "Heart failure, ischemic heart disease, other major comorbidity"),
                (3.0, "Renal failure, liver failure, disseminated malignancy"),
            ]),
            described(
                select("endoscopic_diagnosis", "Endoscopic diagnosis", 0.0, &[
                    (0.0, "Mallory-Weiss tear, no lesion, no stigmata of recent hemorrhage"),
                    (1.0, "All other diagnoses"),
                    (2.0, "Upper GI malignancy"),
                ]),
                "Based on endoscopy findings.",
            ),
            described(
                select("endoscopic_stigmata_recent_hemorrhage", "Endoscopic stigmata of recent hemorrhage", 0.0, &[
                    (0.0, "None or dark spot only"),
                    (2.0, "Blood in upper GI tract, adherent clot, visible or spurting vessel"),
                ]),
                "Based on endoscopy findings.",
            ),
        ],
        calculation: Calculation::Sum,
        interpretation: InterpretationRule::chain(ScoreRange::integers(0.0, 11.0))
            .upto(2.0, Level::Low, "Low mortality risk (score 0–2: 0.2–2.4%).")
            .upto(4.0, Level::Moderate, "Moderate mortality risk (score 3–4: 5.6–11%).")
            .otherwise(Level::High, "High mortality risk (score ≥5: 24.6–39.6%)."),
    }
}

/// Child-Pugh classification of cirrhosis severity. 5–15.
fn child_pugh() -> Instrument {
    Instrument {
        id: "child-pugh".to_string(),
        name: "Child-Pugh Score".to_string(),
        short_name: "Child-Pugh".to_string(),
        category: Category::Gastroenterology,
        description: "Assesses the severity and prognosis of liver cirrhosis.".to_string(),
        source: "Pugh RN, Murray-Lyon IM, Dawson JL, Pietroni MC, Williams R. Transection of the \
                 oesophagus for bleeding oesophageal varices. Br J Surg. 1973 Aug;60(8):646-9."
            .to_string(),
        notes: Some(
            "Maximum score 15. Used to grade chronic liver disease, mainly cirrhosis.".to_string(),
        ),
        more_info_link: Some(
            "https://www.mdcalc.com/calc/14/child-pugh-score-cirrhosis-mortality".to_string(),
        ),
        reference_values: references(&[
            ("class_a", "Class A (score 5–6): 1-year survival 100%, 2-year 85%. Well compensated."),
            ("class_b", "Class B (score 7–9): 1-year survival 81%, 2-year 57%. Significant functional compromise."),
            ("class_c", "Class C (score 10–15): 1-year survival 45%, 2-year 35%. Decompensated."),
        ]),
        criteria: vec![
            select("ascites", "Ascites", 1.0, &[
                (1.0, "Absent"),
                (2.0, "Slight (controlled with diuretics)"),
                (3.0, "Moderate to severe (poorly controlled)"),
            ]),
            select("bilirubin", "Serum bilirubin", 1.0, &[
                (1.0, "< 34 µmol/L (< 2 mg/dL)"),
                (2.0, "34–50 µmol/L (2–3 mg/dL)"),
                (3.0, "> 50 µmol/L (> 3 mg/dL)"),
            ]),
            select("albumin", "Serum albumin", 1.0, &[
                (1.0, "> 35 g/L (> 3.5 g/dL)"),
                (2.0, "28–35 g/L (2.8–3.5 g/dL)"),
                (3.0, "< 28 g/L (< 2.8 g/dL)"),
            ]),
            described(
                select("prothrombin_time_inr", "Prothrombin time / INR", 1.0, &[
                    (1.0, "PT > 50% or INR < 1.7"),
                    (2.0, "PT 30–50% or INR 1.7–2.3"),
                    (3.0, "PT < 30% or INR > 2.3"),
                ]),
                "Use either the prothrombin time or the INR.",
            ),
            select("encephalopathy", "Hepatic encephalopathy", 1.0, &[
                (1.0, "None (grade 0)"),
                (2.0, "Grade 1–2 (mild to moderate)"),
                (3.0, "Grade 3–4 (severe, coma)"),
            ]),
        ],
        calculation: Calculation::Sum,
        interpretation: InterpretationRule::chain(ScoreRange::integers(5.0, 15.0))
            .upto(6.0, Level::ClassA, "Class A (score 5–6). 1-year survival 100%, 2-year 85%.")
            .upto(9.0, Level::ClassB, "Class B (score 7–9). 1-year survival 81%, 2-year 57%.")
            .otherwise(Level::ClassC, "Class C (score 10–15). 1-year survival 45%, 2-year 35%."),
    }
}
