use scorexpress_core::models::category::Category;
use scorexpress_core::models::level::Level;

use super::{boolean, references, select};
use crate::calculation::Calculation;
use crate::error::InstrumentError;
use crate::interpretation::InterpretationRule;
use crate::scoring::ScoreRange;
use crate::Instrument;

pub fn instruments() -> Result<Vec<Instrument>, InstrumentError> {
    Ok(vec![crb65(), wells_pe(), curb65(), mmrc()])
}

/// CRB-65: community-acquired pneumonia severity without urea. 0–4.
fn crb65() -> Instrument {
    Instrument {
        id: "crb65".to_string(),
        name: "CRB-65 Score".to_string(),
        short_name: "CRB-65".to_string(),
        category: Category::Pneumology,
        description: "Assesses community-acquired pneumonia severity to guide the decision to \
                      hospitalize."
            .to_string(),
        source: "Lim WS, van der Eerden MM, Laing R, et al. Defining community acquired \
                 pneumonia severity on presentation to hospital: an international derivation \
                 and validation study. Thorax. 2003 May;58(5):377-82."
            .to_string(),
        notes: Some("One point per criterion present. Maximum score 4.".to_string()),
        more_info_link: Some("https://www.mdcalc.com/calc/44/crb-65-score".to_string()),
        reference_values: references(&[
            ("low_risk", "Score 0: low mortality, outpatient treatment possible."),
            ("moderate_risk", "Score 1–2: increased mortality, consider hospital referral."),
            ("high_risk", "Score 3–4: high mortality, urgent hospital admission."),
        ]),
        criteria: vec![
            boolean("confusion", "Confusion (new disorientation)", 1.0),
            boolean("respiratory_rate", "Respiratory rate ≥ 30/min", 1.0),
            boolean("blood_pressure", "Blood pressure (SBP < 90 mmHg or DBP ≤ 60 mmHg)", 1.0),
            boolean("age", "Age ≥ 65 years", 1.0),
        ],
        calculation: Calculation::Sum,
        interpretation: InterpretationRule::chain(ScoreRange::integers(0.0, 4.0))
            .upto(0.0, Level::Low, "Low risk (mortality 0.6–1.2%). Outpatient treatment.")
            .upto(1.0, Level::Moderate, "Moderate risk (mortality 5.2–8.5%). Consider hospital admission.")
            .upto(2.0, Level::Moderate, "Moderate risk (mortality 12%). Hospital admission usually needed.")
            .otherwise(Level::High, "High risk (mortality 31–40%). Urgent admission, consider ICU at score 4."),
    }
}

/// Two-tier Wells criteria for pulmonary embolism. 0–12.5 in half points.
fn wells_pe() -> Instrument {
    Instrument {
        id: "wells-pe".to_string(),
        name: "Wells Score (PE)".to_string(),
        short_name: "Wells PE".to_string(),
        category: Category::Pneumology,
        description: "Estimates the clinical probability of pulmonary embolism.".to_string(),
        source: "Wells PS, Anderson DR, Rodger M, et al. Derivation of a simple clinical model \
                 to categorize patients probability of pulmonary embolism: increasing the models \
                 utility with the SimpliRED D-dimer. Thromb Haemost. 2000 Mar;83(3):416-20."
            .to_string(),
        notes: Some(
            "Several versions exist; point values for some items vary (1.5 vs 1). Maximum score \
             12.5."
                .to_string(),
        ),
        more_info_link: Some(
            "https://www.mdcalc.com/calc/130/wells-criteria-pulmonary-embolism".to_string(),
        ),
        reference_values: references(&[
            ("pe_unlikely_2_tier", "Score ≤4: PE unlikely (probability ~12%)."),
            ("pe_likely_2_tier", "Score >4: PE likely (probability ~37%)."),
            ("pe_low_3_tier", "Score 0–1: low risk (probability ~3.6%)."),
            ("pe_moderate_3_tier", "Score 2–6: moderate risk (probability ~20.5%)."),
            ("pe_high_3_tier", "Score >6: high risk (probability ~66.7%)."),
        ]),
        criteria: vec![
            boolean("clinical_signs_dvt", "Clinical signs of DVT", 3.0),
            boolean("pe_as_likely_or_more_likely_than_alternative", "PE is the most likely diagnosis", 3.0),
            boolean("heart_rate_gt_100", "Heart rate > 100 bpm", 1.5),
            boolean("immobilization_or_surgery_prev_4wks", "Immobilization ≥ 3 days or surgery in the previous 4 weeks", 1.5),
            boolean("previous_dvt_pe", "Previous DVT or PE", 1.5),
            boolean("hemoptysis", "Hemoptysis", 1.0),
            boolean("malignancy_active_treatment", "Malignancy (treatment within 6 months or palliative)", 1.0),
        ],
        calculation: Calculation::Sum,
        interpretation: InterpretationRule::chain(ScoreRange::stepped(0.0, 12.5, 0.5))
            .upto(4.0, Level::Low, "PE unlikely (score ≤4). Consider D-dimer if PERC is negative.")
            .otherwise(Level::High, "PE likely (score >4). Consider CT pulmonary angiography."),
    }
}

/// CURB-65: pneumonia severity including urea. 0–5.
fn curb65() -> Instrument {
    Instrument {
        id: "curb-65".to_string(),
        name: "CURB-65 Score".to_string(),
        short_name: "CURB-65".to_string(),
        category: Category::Pneumology,
        description: "Assesses community-acquired pneumonia severity to guide the decision to \
                      hospitalize."
            .to_string(),
        source: "Lim WS, van der Eerden MM, Laing R, et al. Defining community acquired \
                 pneumonia severity on presentation to hospital: an international derivation \
                 and validation study. Thorax. 2003 May;58(5):377-82."
            .to_string(),
        notes: Some(
            "Score 0 to 5. Confusion may be assessed with an AMTS ≤ 8 or new disorientation to \
             person, place or time."
                .to_string(),
        ),
        more_info_link: Some(
            "https://www.mdcalc.com/calc/334/curb-65-score-pneumonia-severity".to_string(),
        ),
        reference_values: references(&[
            ("score_0_1", "Score 0–1: low mortality (0.6–2.7%). Outpatient treatment possible."),
            ("score_2", "Score 2: intermediate mortality (6.8–9.2%). Short admission or close follow-up."),
            ("score_3_5", "Score 3–5: high mortality (14.5–27.8%). Admission, consider ICU at 4–5."),
        ]),
        criteria: vec![
            boolean("confusion", "Confusion (AMTS ≤ 8 or new disorientation)", 1.0),
            boolean("urea", "Blood urea > 7 mmol/L (BUN > 19 mg/dL)", 1.0),
            boolean("respiratory_rate_ge_30", "Respiratory rate ≥ 30/min", 1.0),
            boolean("blood_pressure_curb", "SBP < 90 mmHg or DBP ≤ 60 mmHg", 1.0),
            boolean("age_ge_65_curb", "Age ≥ 65 years", 1.0),
        ],
        calculation: Calculation::Sum,
        interpretation: InterpretationRule::chain(ScoreRange::integers(0.0, 5.0))
            .upto(1.0, Level::Low, "Low mortality (score 0–1). Outpatient treatment.")
            .upto(2.0, Level::Moderate, "Moderate mortality (score 2). Consider hospital admission.")
            .otherwise(Level::High, "High mortality (score 3–5). Urgent admission, ICU at score 4–5."),
    }
}

/// mMRC dyspnea scale: the selected grade is the score.
fn mmrc() -> Instrument {
    Instrument {
        id: "mmrc".to_string(),
        name: "mMRC Dyspnea Scale (Modified Medical Research Council)".to_string(),
        short_name: "mMRC".to_string(),
        category: Category::Pneumology,
        description: "Grades exertional dyspnea in patients with respiratory disease.".to_string(),
        source: "Bestall JC, Paul EA, Garrod R, et al. Usefulness of the Medical Research \
                 Council (MRC) dyspnoea scale as a measure of disability in patients with \
                 chronic obstructive pulmonary disease. Thorax. 1999;54(7):581-6."
            .to_string(),
        notes: None,
        more_info_link: Some(
            "https://www.mdcalc.com/calc/1936/mmrc-modified-medical-research-council-dyspnea-scale"
                .to_string(),
        ),
        reference_values: Vec::new(),
        criteria: vec![select("dyspnea_grade_mmrc", "Dyspnea grade", 0.0, &[
            (0.0, "Grade 0: breathless only with strenuous exercise"),
            (1.0, "Grade 1: short of breath when hurrying on the level or walking up a slight hill"),
            (2.0, "Grade 2: walks slower than people of the same age on the level, or stops for breath at own pace"),
            (3.0, "Grade 3: stops for breath after about 100 meters or a few minutes on the level"),
            (4.0, "Grade 4: too breathless to leave the house, or breathless when dressing"),
        ])],
        calculation: Calculation::Passthrough,
        interpretation: InterpretationRule::exact([
            (0.0, Level::VeryLow, "Grade 0: dyspnea only with strenuous exercise."),
            (1.0, Level::Low, "Grade 1: dyspnea when hurrying or walking up a slight hill."),
            (2.0, Level::Moderate, "Grade 2: walks slower than peers or stops for breath at own pace."),
            (3.0, Level::High, "Grade 3: stops for breath after ~100 m or a few minutes."),
            (4.0, Level::VeryHigh, "Grade 4: too breathless to leave the house or when dressing."),
        ]),
    }
}
