use scorexpress_core::models::category::Category;
use scorexpress_core::models::level::Level;

use super::question;
use crate::calculation::{Calculation, Formula, symptomatic_answers};
use crate::error::InstrumentError;
use crate::interpretation::InterpretationRule;
use crate::scoring::ScoreRange;
use crate::Instrument;

pub fn instruments() -> Result<Vec<Instrument>, InstrumentError> {
    Ok(vec![gds15()])
}

/// The depressive answer to each GDS-15 question: `true` when "yes" scores.
const GDS15_SYMPTOMATIC: [bool; 15] = [
    false, true, true, true, false, true, false, true, true, true, false, true, false, true, true,
];

fn gds15_score(contributions: &[f64]) -> f64 {
    symptomatic_answers(contributions, &GDS15_SYMPTOMATIC)
}

/// Geriatric Depression Scale, 15-item short form. Each depressive answer
/// scores one point, whether that answer is "yes" or "no".
fn gds15() -> Instrument {
    let questions = [
        ("gds1_satisfied", "1. Are you basically satisfied with your life?", true),
        ("gds2_abandoned_activities", "2. Have you dropped many of your activities and interests?", false),
        ("gds3_life_empty", "3. Do you feel that your life is empty?", false),
        ("gds4_often_bored", "4. Do you often get bored?", false),
        ("gds5_good_spirits", "5. Are you in good spirits most of the time?", true),
        ("gds6_afraid_bad_happening", "6. Are you afraid that something bad is going to happen to you?", false),
        ("gds7_mostly_happy", "7. Do you feel happy most of the time?", true),
        ("gds8_often_helpless", "8. Do you often feel helpless?", false),
        ("gds9_prefer_stay_home", "9. Do you prefer to stay at home rather than going out and doing new things?", false),
        ("gds10_memory_problems", "10. Do you feel you have more problems with memory than most?", false),
        ("gds11_wonderful_to_be_alive", "11. Do you think it is wonderful to be alive now?", true),
        ("gds12_worthless", "12. Do you feel pretty worthless the way you are now?", false),
        ("gds13_full_of_energy", "13. Do you feel full of energy?", true),
        ("gds14_situation_hopeless", "14. Do you feel that your situation is hopeless?", false),
        ("gds15_others_better_off", "15. Do you think that most people are better off than you are?", false),
    ];

    let criteria = questions
        .iter()
        .zip(GDS15_SYMPTOMATIC)
        .map(|((id, name, default), symptomatic)| {
            let mut criterion = question(id, name, *default);
            criterion.description =
                Some(if symptomatic { "Yes = 1 pt" } else { "No = 1 pt" }.to_string());
            criterion
        })
        .collect();

    Instrument {
        id: "gds15".to_string(),
        name: "Geriatric Depression Scale (GDS-15)".to_string(),
        short_name: "GDS-15".to_string(),
        category: Category::Geriatrics,
        description: "Screens for depression in older adults (15-item short form).".to_string(),
        source: "Yesavage JA, Brink TL, Rose TL, et al. Development and validation of a \
                 geriatric depression screening scale: a preliminary report. J Psychiatr Res. \
                 1982-1983;17(1):37-49."
            .to_string(),
        notes: Some(
            "Each answer matching a depressed mood scores 1 point. A total above 5 suggests \
             depression and warrants further assessment."
                .to_string(),
        ),
        more_info_link: Some(
            "https://www.mdcalc.com/calc/106/geriatric-depression-scale-gds-15".to_string(),
        ),
        reference_values: Vec::new(),
        criteria,
        calculation: Calculation::Custom(Formula {
            name: "symptomatic_answers",
            arity: GDS15_SYMPTOMATIC.len(),
            apply: gds15_score,
        }),
        interpretation: InterpretationRule::chain(ScoreRange::integers(0.0, 15.0))
            .upto(4.0, Level::Normal, "Score {score} (0–4): normal, no depression suggested.")
            .upto(8.0, Level::Low, "Score {score} (5–8): mild depression suggested.")
            .upto(11.0, Level::Moderate, "Score {score} (9–11): moderate depression suggested.")
            .otherwise(Level::Severe, "Score {score} (12–15): severe depression suggested."),
    }
}
