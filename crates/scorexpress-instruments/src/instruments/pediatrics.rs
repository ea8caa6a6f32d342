use scorexpress_core::models::category::Category;
use scorexpress_core::models::level::Level;

use super::select;
use crate::calculation::{Calculation, Formula};
use crate::error::InstrumentError;
use crate::interpretation::InterpretationRule;
use crate::scoring::ScoreRange;
use crate::Instrument;

pub fn instruments() -> Result<Vec<Instrument>, InstrumentError> {
    Ok(vec![apgar(), tanner()])
}

/// Apgar score at 1 and 5 minutes. 0–10.
fn apgar() -> Instrument {
    let rating = |id: &str, name: &str, labels: [&str; 3]| {
        select(id, name, 2.0, &[(0.0, labels[0]), (1.0, labels[1]), (2.0, labels[2])])
    };

    Instrument {
        id: "apgar".to_string(),
        name: "Apgar Score".to_string(),
        short_name: "Apgar".to_string(),
        category: Category::Pediatrics,
        description: "Rapid assessment of a newborn's condition right after birth.".to_string(),
        source: "Apgar V. A proposal for a new method of evaluation of the newborn infant. Curr \
                 Res Anesth Analg. 1953;32(4):260-7."
            .to_string(),
        notes: Some(
            "Assessed at 1 and 5 minutes after birth. A low score at 5 minutes may call for \
             continued resuscitation."
                .to_string(),
        ),
        more_info_link: Some("https://www.mdcalc.com/calc/203/apgar-score".to_string()),
        reference_values: Vec::new(),
        criteria: vec![
            rating("appearance_apgar", "Appearance (skin color)", [
                "Blue or pale all over (0 pts)",
                "Pink body, blue extremities (1 pt)",
                "Pink all over (2 pts)",
            ]),
            rating("pulse_apgar", "Pulse (heart rate)", [
                "Absent (0 pts)",
                "< 100 bpm (1 pt)",
                "≥ 100 bpm (2 pts)",
            ]),
            rating("grimace_apgar", "Grimace (reflex irritability)", [
                "No response (0 pts)",
                "Grimace (1 pt)",
                "Cough, sneeze or cry (2 pts)",
            ]),
            rating("activity_apgar", "Activity (muscle tone)", [
                "Limp (0 pts)",
                "Some flexion (1 pt)",
                "Active motion (2 pts)",
            ]),
            rating("respiration_apgar", "Respiration (breathing effort)", [
                "Absent (0 pts)",
                "Slow, irregular (1 pt)",
                "Good, strong cry (2 pts)",
            ]),
        ],
        calculation: Calculation::Sum,
        interpretation: InterpretationRule::chain(ScoreRange::integers(0.0, 10.0))
            .upto(3.0, Level::Severe, "Score {score}: severely depressed (0–3)")
            .upto(6.0, Level::Moderate, "Score {score}: moderately depressed (4–6)")
            .otherwise(Level::Normal, "Score {score}: normal (7–10)"),
    }
}

fn descriptive(_contributions: &[f64]) -> f64 {
    0.0
}

/// Tanner stages are descriptive: each criterion is read on its own and no
/// summary score exists.
fn tanner() -> Instrument {
    let stages = |na: Option<&'static str>, labels: [&'static str; 5]| {
        let mut options: Vec<(f64, &str)> = Vec::new();
        if let Some(na) = na {
            options.push((0.0, na));
        }
        options.extend(labels.iter().enumerate().map(|(i, label)| ((i + 1) as f64, *label)));
        options
    };

    let pubic_hair = stages(None, [
        "Stage I: prepubertal, no terminal pubic hair",
        "Stage II: sparse, long, slightly pigmented hair at the base of the penis or along the labia",
        "Stage III: darker, coarser, curlier hair spreading over the pubic symphysis",
        "Stage IV: adult-type hair covering a smaller area than in adults, not reaching the thighs",
        "Stage V: adult-type hair in quantity and quality, spreading to the medial thighs",
    ]);
    let breast = stages(Some("N/A (boy)"), [
        "Stage I: prepubertal, elevation of the papilla only",
        "Stage II: breast bud, small mound with areolar enlargement",
        "Stage III: further enlargement of breast and areola without separation of contours",
        "Stage IV: areola and papilla form a secondary mound above the breast",
        "Stage V: mature stage, projection of the papilla only",
    ]);
    let genital = stages(Some("N/A (girl)"), [
        "Stage I: prepubertal testes, scrotum and penis",
        "Stage II: enlargement of scrotum and testes, scrotal skin reddens and changes texture",
        "Stage III: penis grows mainly in length, testes and scrotum enlarge further",
        "Stage IV: penis grows in breadth with glans development, scrotal skin darkens",
        "Stage V: adult size and shape genitalia",
    ]);

    Instrument {
        id: "tanner".to_string(),
        name: "Tanner Stages".to_string(),
        short_name: "Tanner".to_string(),
        category: Category::Pediatrics,
        description: "Scale of physical pubertal development.".to_string(),
        source: "Marshall WA, Tanner JM. Variations in pattern of pubertal changes in girls. \
                 Arch Dis Child. 1969 Jun;44(235):291-303. Marshall WA, Tanner JM. Variations \
                 in the pattern of pubertal changes in boys. Arch Dis Child. 1970 \
                 Feb;45(239):13-23."
            .to_string(),
        notes: Some(
            "Descriptive assessment based on clinical observation; options are detailed for \
             reference."
                .to_string(),
        ),
        more_info_link: Some("https://en.wikipedia.org/wiki/Tanner_scale".to_string()),
        reference_values: Vec::new(),
        criteria: vec![
            select("pubic_hair_tanner", "Pubic hair (boys and girls)", 1.0, &pubic_hair),
            select("breast_development_female_tanner", "Breast development (girls)", 0.0, &breast),
            select("genital_development_male_tanner", "Genital development (boys)", 0.0, &genital),
        ],
        calculation: Calculation::Custom(Formula {
            name: "descriptive",
            arity: 3,
            apply: descriptive,
        }),
        interpretation: InterpretationRule::chain(ScoreRange::integers(0.0, 0.0)).otherwise(
            Level::Normal,
            "Tanner stages describe pubertal development. Each criterion is assessed \
             separately; see the detailed stage descriptions.",
        ),
    }
}
