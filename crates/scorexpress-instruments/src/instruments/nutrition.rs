use scorexpress_core::models::category::Category;
use scorexpress_core::models::level::Level;

use super::boolean;
use crate::calculation::{Calculation, Formula, both_subgroups_positive};
use crate::error::InstrumentError;
use crate::interpretation::InterpretationRule;
use crate::Instrument;

pub fn instruments() -> Result<Vec<Instrument>, InstrumentError> {
    Ok(vec![has_malnutrition()])
}

/// The first three criteria are phenotypic, the last three etiologic.
const PHENOTYPIC_CRITERIA: usize = 3;

fn malnutrition_rule(contributions: &[f64]) -> f64 {
    both_subgroups_positive(contributions, PHENOTYPIC_CRITERIA)
}

/// HAS 2019 adult malnutrition criteria: diagnosis needs at least one
/// phenotypic and one etiologic criterion.
fn has_malnutrition() -> Instrument {
    Instrument {
        id: "has-malnutrition".to_string(),
        name: "HAS Malnutrition Criteria".to_string(),
        short_name: "HAS Malnutrition".to_string(),
        category: Category::Nutrition,
        description: "Diagnoses adult malnutrition per the 2019 French National Authority for \
                      Health (HAS) criteria: at least one phenotypic and one etiologic criterion."
            .to_string(),
        source: "Haute Autorité de Santé (HAS). Diagnostic de la dénutrition de l'enfant et de \
                 l'adulte. November 2019."
            .to_string(),
        notes: Some(
            "Severity is then graded from phenotypic thresholds, e.g. BMI < 17 (< 20 if aged \
             ≥ 70) for severe malnutrition. This calculator confirms the diagnosis only."
                .to_string(),
        ),
        more_info_link: Some(
            "https://www.has-sante.fr/jcms/p_3152897/fr/diagnostic-de-la-denutrition-de-l-enfant-et-de-l-adulte"
                .to_string(),
        ),
        reference_values: Vec::new(),
        criteria: vec![
            boolean("phenotypic_weight_loss", "Weight loss ≥ 5% in 1 month or ≥ 10% in 6 months", 1.0),
            boolean("phenotypic_bmi", "BMI < 18.5 kg/m² (< 21 kg/m² if aged ≥ 70)", 1.0),
            boolean("phenotypic_muscle_reduction", "Reduced muscle mass and/or function", 1.0),
            boolean("etiologic_food_reduction", "Food intake reduced ≥ 50% for > 1 week", 10.0),
            boolean("etiologic_absorption_reduction", "Reduced absorption (maldigestion or malabsorption)", 10.0),
            boolean("etiologic_aggression", "Inflammatory or acute disease state", 10.0),
        ],
        calculation: Calculation::Custom(Formula {
            name: "both_subgroups_positive",
            arity: 6,
            apply: malnutrition_rule,
        }),
        interpretation: InterpretationRule::exact([
            (0.0, Level::Normal, "Malnutrition criteria not met."),
            (1.0, Level::High, "Malnutrition confirmed. Severity (moderate or severe) follows the phenotypic criteria thresholds."),
        ]),
    }
}
