use scorexpress_core::models::category::Category;
use scorexpress_core::models::level::Level;

use super::boolean;
use crate::calculation::Calculation;
use crate::error::InstrumentError;
use crate::interpretation::InterpretationRule;
use crate::scoring::ScoreRange;
use crate::Instrument;

pub fn instruments() -> Result<Vec<Instrument>, InstrumentError> {
    Ok(vec![cage()])
}

fn cage() -> Instrument {
    Instrument {
        id: "cage".to_string(),
        name: "CAGE Questionnaire".to_string(),
        short_name: "CAGE".to_string(),
        category: Category::Psychiatry,
        description: "Screens for alcohol use problems with four questions.".to_string(),
        source: "Ewing JA. Detecting alcoholism. The CAGE questionnaire. JAMA. 1984 Oct \
                 12;252(14):1905-7."
            .to_string(),
        notes: Some(
            "A score of 2 or more is clinically significant and warrants further assessment."
                .to_string(),
        ),
        more_info_link: Some(
            "https://www.mdcalc.com/calc/1907/cage-questions-alcohol-use".to_string(),
        ),
        reference_values: Vec::new(),
        criteria: vec![
            boolean("cut_down", "Have you ever felt you should Cut down on your drinking?", 1.0),
            boolean("annoyed", "Have people Annoyed you by criticizing your drinking?", 1.0),
            boolean("guilty", "Have you ever felt bad or Guilty about your drinking?", 1.0),
            boolean(
                "eye_opener",
                "Have you ever had a drink first thing in the morning (Eye-opener)?",
                1.0,
            ),
        ],
        calculation: Calculation::Sum,
        interpretation: InterpretationRule::chain(ScoreRange::integers(0.0, 4.0))
            .upto(0.0, Level::Low, "Low risk of alcohol use disorder.")
            .upto(1.0, Level::Low, "Low risk. One positive answer, stay attentive.")
            .upto(3.0, Level::Moderate, "Score {score}: possible alcohol use problem. Further assessment recommended.")
            .otherwise(Level::High, "Score 4: alcohol dependence highly likely."),
    }
}
