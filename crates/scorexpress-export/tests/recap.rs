use scorexpress_core::models::answer::AnswerValue;
use scorexpress_core::models::interpretation::Interpretation;
use scorexpress_core::models::level::Level;
use scorexpress_core::models::result::ScoreResult;
use scorexpress_export::render::{display_value, render_recap, render_template};
use scorexpress_instruments::instruments::{gastroenterology, pneumology};
use scorexpress_instruments::{Instrument, evaluate};

fn instrument(instruments: Vec<Instrument>, id: &str) -> Instrument {
    instruments
        .into_iter()
        .find(|i| i.id == id)
        .unwrap_or_else(|| panic!("missing instrument {id}"))
}

fn result_with_text(value: f64, text: &str) -> ScoreResult {
    ScoreResult {
        instrument_id: "fixture".to_string(),
        value,
        interpretation: Interpretation::new(Level::ClassB, text),
        criteria_values: Default::default(),
    }
}

#[test]
fn recap_lists_score_level_and_answers() {
    let crb65 = instrument(pneumology::instruments().unwrap(), "crb65");
    let mut answers = crb65.default_answers();
    answers.insert("confusion".to_string(), AnswerValue::Boolean(true));
    answers.insert("age".to_string(), AnswerValue::Boolean(true));
    let result = evaluate(&crb65, &answers);

    let recap = render_recap(&crb65, &result).unwrap();
    assert!(recap.starts_with("# CRB-65 Score\n"));
    assert!(recap.contains("**Category:** Pneumology"));
    assert!(recap.contains("**Score:** 2"));
    assert!(recap.contains("**Level:** moderate (guarded)"));
    assert!(recap.contains(&format!("> {}", result.interpretation.text)));
    assert!(recap.contains("- **Confusion (new disorientation):** yes"));
    assert!(recap.contains("- **Respiratory rate ≥ 30/min:** no"));
    assert!(recap.contains("## Notes"));
    assert!(recap.contains("Thorax. 2003"));
    assert!(recap.contains("More information: https://www.mdcalc.com/calc/44/crb-65-score"));
}

#[test]
fn recap_uses_option_labels() {
    let mmrc = instrument(pneumology::instruments().unwrap(), "mmrc");
    let mut answers = mmrc.default_answers();
    answers.insert("dyspnea_grade_mmrc".to_string(), AnswerValue::Select(3.0));
    let result = evaluate(&mmrc, &answers);

    let recap = render_recap(&mmrc, &result).unwrap();
    assert!(recap.contains("- **Dyspnea grade:** Grade 3: stops for breath"));
    assert!(recap.contains("(elevated)"));
    assert!(!recap.contains("## Notes"));
}

#[test]
fn recap_marks_missing_answers() {
    let rockall = instrument(gastroenterology::instruments().unwrap(), "rockall");
    let result = evaluate(&rockall, &Default::default());

    let recap = render_recap(&rockall, &result).unwrap();
    assert!(recap.contains("- **Age:** not answered"));
}

#[test]
fn recap_does_not_touch_the_result() {
    let crb65 = instrument(pneumology::instruments().unwrap(), "crb65");
    let result = evaluate(&crb65, &crb65.default_answers());
    let before = result.clone();
    render_recap(&crb65, &result).unwrap();
    assert_eq!(result, before);
}

#[test]
fn display_value_prefers_grade_letters() {
    assert_eq!(display_value(&result_with_text(8.0, "Grade B: significant")), "B");
    assert_eq!(display_value(&result_with_text(8.0, "grade   c, decompensated")), "c");
    assert_eq!(display_value(&result_with_text(8.0, "Grade F")), "8");
    assert_eq!(display_value(&result_with_text(8.0, "GradeA")), "8");
    assert_eq!(display_value(&result_with_text(4.5, "Class B (score 7–9)")), "4.5");
}

#[test]
fn render_template_reports_parse_errors() {
    let err = render_template("broken", "{% if %}", &serde_json::json!({})).unwrap_err();
    assert!(err.to_string().starts_with("template parse error"));
    assert!(!err.is_transient());
}

#[test]
fn render_template_reports_missing_variables() {
    let err = render_template("missing", "{{ nope }}", &serde_json::json!({})).unwrap_err();
    assert!(err.to_string().starts_with("template rendering failed"));
}
