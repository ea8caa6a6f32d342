use scorexpress_core::models::category::Category;
use scorexpress_core::models::level::Level;

use super::{boolean, described, references, select};
use crate::calculation::Calculation;
use crate::error::InstrumentError;
use crate::interpretation::InterpretationRule;
use crate::scoring::ScoreRange;
use crate::Instrument;

pub fn instruments() -> Result<Vec<Instrument>, InstrumentError> {
    Ok(vec![chads2vasc(), wells_dvt(), heart(), nyha()])
}

/// CHA₂DS₂-VASc: stroke risk in non-valvular atrial fibrillation. 0–9 in
/// practice; both age boxes ticked reads 10.
fn chads2vasc() -> Instrument {
    Instrument {
        id: "chads2vasc".to_string(),
        name: "CHA₂DS₂-VASc Score".to_string(),
        short_name: "CHA₂DS₂-VASc".to_string(),
        category: Category::Cardiology,
        description: "Estimates stroke risk in patients with non-valvular atrial fibrillation."
            .to_string(),
        source: "Lip GY, Nieuwlaat R, Pisters R, Lane DA, Crijns HJ. Refining clinical risk \
                 stratification for predicting stroke and thromboembolism in atrial fibrillation \
                 using a novel risk factor-based approach: the Euro Heart Survey on Atrial \
                 Fibrillation. Chest. 2010 Feb;137(2):263-72."
            .to_string(),
        notes: Some(
            "Maximum score 9. Treatment thresholds for low scores may differ by sex and local \
             guidelines."
                .to_string(),
        ),
        more_info_link: Some(
            "https://www.mdcalc.com/calc/102/chads2-vasc-score-atrial-fibrillation-stroke-risk"
                .to_string(),
        ),
        reference_values: references(&[
            ("score_0_male", "Score 0 (male): very low risk, no antithrombotic therapy."),
            ("score_1_female", "Score 1 (female): very low risk, no antithrombotic therapy."),
            ("score_1_male", "Score 1 (male): low risk, consider antiplatelet or oral anticoagulant."),
            ("score_2_plus_male", "Score ≥2 (male): moderate to high risk, oral anticoagulation recommended."),
            ("score_3_plus_female", "Score ≥3 (female): moderate to high risk, oral anticoagulation recommended."),
        ]),
        criteria: vec![
            boolean("congestive_heart_failure", "Congestive heart failure (C)", 1.0),
            boolean("hypertension", "Hypertension (H)", 1.0),
            boolean("age_gte_75", "Age ≥ 75 years (A₂)", 2.0),
            boolean("diabetes_mellitus", "Diabetes mellitus (D)", 1.0),
            boolean("stroke_tia_thromboembolism", "Prior stroke, TIA or thromboembolism (S₂)", 2.0),
            boolean("vascular_disease", "Vascular disease: prior MI, PAD, aortic plaque (V)", 1.0),
            boolean("age_65_74", "Age 65–74 years (A)", 1.0),
            boolean("sex_female", "Female sex (Sc)", 1.0),
        ],
        calculation: Calculation::Sum,
        interpretation: InterpretationRule::chain(ScoreRange::integers(0.0, 10.0))
            .upto(0.0, Level::Low, "Very low risk (0.2–0.6% stroke/year). Consider no antithrombotic therapy.")
            .upto(1.0, Level::Low, "Low risk (0.6–1.3% stroke/year). Consider antiplatelet or anticoagulant therapy.")
            .upto(2.0, Level::Moderate, "Moderate risk (2.2–2.8% stroke/year). Oral anticoagulation recommended.")
            .upto(4.0, Level::High, "High risk (3.2–5.9% stroke/year). Oral anticoagulation recommended.")
            .otherwise(Level::VeryHigh, "Very high risk (≥9.6% stroke/year). Oral anticoagulation recommended."),
    }
}

/// Wells criteria for DVT, including the −2 alternative-diagnosis item.
fn wells_dvt() -> Instrument {
    Instrument {
        id: "wells-dvt".to_string(),
        name: "Wells Score (DVT)".to_string(),
        short_name: "Wells DVT".to_string(),
        category: Category::Cardiology,
        description: "Estimates the clinical probability of deep vein thrombosis.".to_string(),
        source: "Wells PS, Anderson DR, Bormanis J, et al. Value of assessment of pretest \
                 probability of deep-vein thrombosis in clinical management. Lancet. 1997 Dec \
                 20-27;350(9094):1795-8."
            .to_string(),
        notes: Some(
            "A negative score is possible: an alternative diagnosis at least as likely subtracts \
             2 points."
                .to_string(),
        ),
        more_info_link: Some("https://www.mdcalc.com/calc/128/wells-criteria-dvt".to_string()),
        reference_values: references(&[
            ("dvt_unlikely", "Score ≤1: DVT unlikely."),
            ("dvt_likely", "Score ≥2: DVT likely."),
            ("three_tier_low", "Score 0: low probability (3%)."),
            ("three_tier_moderate", "Score 1–2: moderate probability (17%)."),
            ("three_tier_high", "Score ≥3: high probability (75%)."),
        ]),
        criteria: vec![
            boolean("active_cancer", "Active cancer (treatment ongoing, within 6 months, or palliative)", 1.0),
            boolean("paralysis_paresis_immobilization", "Paralysis, paresis or recent plaster immobilization of a lower limb", 1.0),
            boolean("bedridden_gt_3days_major_surgery_lt_12wks", "Bedridden > 3 days or major surgery within 12 weeks", 1.0),
            boolean("localized_tenderness", "Localized tenderness along the deep venous system", 1.0),
            boolean("entire_leg_swollen", "Entire leg swollen", 1.0),
            boolean("calf_swelling_gt_3cm", "Calf swelling > 3 cm compared with the asymptomatic side", 1.0),
            boolean("pitting_edema", "Pitting edema confined to the symptomatic leg", 1.0),
            boolean("collateral_superficial_veins", "Collateral superficial veins (non-varicose)", 1.0),
            boolean("previous_dvt", "Previously documented DVT", 1.0),
            boolean("alternative_diagnosis_as_likely", "Alternative diagnosis at least as likely as DVT", -2.0),
        ],
        calculation: Calculation::Sum,
        interpretation: InterpretationRule::chain(ScoreRange::integers(-2.0, 9.0))
            .upto(1.0, Level::Low, "DVT unlikely (score ≤1). Consider D-dimer testing.")
            .otherwise(Level::High, "DVT likely (score ≥2). Consider Doppler ultrasound."),
    }
}

/// HEART score for major adverse cardiac events. 0–10.
fn heart() -> Instrument {
    Instrument {
        id: "heart".to_string(),
        name: "HEART Score for Major Cardiac Events".to_string(),
        short_name: "HEART Score".to_string(),
        category: Category::Cardiology,
        description: "Predicts 6-week risk of major adverse cardiac events in emergency \
                      department patients with chest pain."
            .to_string(),
        source: "Six AJ, Backus BE, Kelder JC. Chest pain in the emergency room: a multicenter \
                 validation of the HEART Score. Crit Pathw Cardiol. 2008 Sep;7(3):165-9."
            .to_string(),
        notes: Some(
            "MACE: myocardial infarction, coronary revascularization, or cardiovascular death. \
             Score 0 to 10."
                .to_string(),
        ),
        more_info_link: Some(
            "https://www.mdcalc.com/calc/1752/heart-score-major-cardiac-events".to_string(),
        ),
        reference_values: references(&[
            ("low_risk", "Score 0–3: low risk (0.9–1.7% MACE). Consider early discharge."),
            ("moderate_risk", "Score 4–6: moderate risk (12–16.6% MACE). Observation or admission."),
            ("high_risk", "Score 7–10: high risk (50–65% MACE). Early invasive strategy."),
        ]),
        criteria: vec![
            select("history_heart", "History", 0.0, &[
                (0.0, "Slightly suspicious"),
                (1.0, "Moderately suspicious"),
                (2.0, "Highly suspicious"),
            ]),
            select("ecg_heart", "ECG", 0.0, &[
                (0.0, "Normal"),
                (1.0, "Non-specific repolarization disturbance"),
                (2.0, "Significant ST deviation"),
            ]),
            select("age_heart", "Age", 0.0, &[
                (0.0, "< 45 years"),
                (1.0, "45–64 years"),
                (2.0, "≥ 65 years"),
            ]),
            described(
                select("risk_factors_heart", "Risk factors", 0.0, &[
                    (0.0, "No known risk factors"),
                    (1.0, "1–2 risk factors"),
                    (2.0, "≥ 3 risk factors or known atherosclerotic disease"),
                ]),
                "Diabetes, current or recent smoking, hypertension, hyperlipidemia, family \
                 history of coronary disease, obesity (BMI > 30).",
            ),
            described(
                select("troponin_heart", "Initial troponin", 0.0, &[
                    (0.0, "≤ normal limit"),
                    (1.0, "1–3× normal limit"),
                    (2.0, "> 3× normal limit"),
                ]),
                "Use high-sensitivity troponin with local thresholds when available.",
            ),
        ],
        calculation: Calculation::Sum,
        interpretation: InterpretationRule::chain(ScoreRange::integers(0.0, 10.0))
            .upto(3.0, Level::Low, "Score {score} (0–3): low risk of MACE. Consider discharge.")
            .upto(6.0, Level::Moderate, "Score {score} (4–6): moderate risk of MACE. Consider admission.")
            .otherwise(Level::High, "Score {score} (7–10): high risk of MACE. Aggressive management."),
    }
}

/// NYHA functional class: the selected class is the score.
fn nyha() -> Instrument {
    Instrument {
        id: "nyha".to_string(),
        name: "NYHA Functional Classification".to_string(),
        short_name: "NYHA".to_string(),
        category: Category::Cardiology,
        description: "Grades heart failure severity by symptoms and limitation of physical \
                      activity."
            .to_string(),
        source: "The Criteria Committee of the New York Heart Association. Nomenclature and \
                 Criteria for Diagnosis of Diseases of the Heart and Great Vessels. 9th ed. 1994."
            .to_string(),
        notes: None,
        more_info_link: Some("https://www.mdcalc.com/calc/116/nyha-classification".to_string()),
        reference_values: Vec::new(),
        criteria: vec![select("nyha_class", "NYHA class", 1.0, &[
            (1.0, "Class I: no limitation of physical activity"),
            (2.0, "Class II: slight limitation of physical activity"),
            (3.0, "Class III: marked limitation of physical activity"),
            (4.0, "Class IV: unable to carry on any physical activity without discomfort"),
        ])],
        calculation: Calculation::Passthrough,
        interpretation: InterpretationRule::exact([
            (1.0, Level::ClassI, "Class I: no symptoms with ordinary activity."),
            (2.0, Level::ClassII, "Class II: symptoms with ordinary activity."),
            (3.0, Level::ClassIII, "Class III: symptoms with less than ordinary activity."),
            (4.0, Level::ClassIV, "Class IV: symptoms at rest or with any activity."),
        ]),
    }
}
