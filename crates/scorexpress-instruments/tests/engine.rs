use scorexpress_core::models::answer::{AnswerValue, Answers};
use scorexpress_core::models::category::Category;
use scorexpress_core::models::level::Level;
use scorexpress_instruments::calculation::{
    Calculation, Formula, both_subgroups_positive, symptomatic_answers,
};
use scorexpress_instruments::error::InstrumentError;
use scorexpress_instruments::interpretation::{InterpretationRule, unexpected};
use scorexpress_instruments::normalize::{contribution, normalize};
use scorexpress_instruments::scoring::{Criterion, CriterionKind, CriterionOption, ScoreRange};
use scorexpress_instruments::{Instrument, evaluate};

fn checkbox(id: &str, points: f64) -> Criterion {
    Criterion {
        id: id.to_string(),
        name: id.to_string(),
        kind: CriterionKind::Boolean {
            points,
            default: false,
        },
        description: None,
    }
}

fn grade(id: &str, values: &[f64]) -> Criterion {
    Criterion {
        id: id.to_string(),
        name: id.to_string(),
        kind: CriterionKind::Select {
            options: values
                .iter()
                .map(|v| CriterionOption {
                    value: *v,
                    label: format!("option {v}"),
                })
                .collect(),
            default: values[0],
        },
        description: None,
    }
}

fn entry(id: &str, range: Option<ScoreRange>) -> Criterion {
    Criterion {
        id: id.to_string(),
        name: id.to_string(),
        kind: CriterionKind::Numeric {
            default: 0.0,
            unit: Some("kg".to_string()),
            range,
        },
        description: None,
    }
}

fn three_point_chain() -> InterpretationRule {
    InterpretationRule::chain(ScoreRange::integers(0.0, 4.0))
        .upto(0.0, Level::Low, "none")
        .upto(2.0, Level::Moderate, "some ({score})")
        .otherwise(Level::High, "many")
}

fn fixture(criteria: Vec<Criterion>, calculation: Calculation, rule: InterpretationRule) -> Instrument {
    Instrument {
        id: "fixture".to_string(),
        name: "Fixture Score".to_string(),
        short_name: "Fixture".to_string(),
        category: Category::Other,
        description: "Test instrument".to_string(),
        source: "none".to_string(),
        notes: None,
        more_info_link: None,
        reference_values: Vec::new(),
        criteria,
        calculation,
        interpretation: rule,
    }
}

fn answers(entries: &[(&str, AnswerValue)]) -> Answers {
    entries
        .iter()
        .map(|(id, value)| (id.to_string(), *value))
        .collect()
}

// Normalization

#[test]
fn missing_answers_contribute_zero() {
    let criteria = vec![checkbox("a", 2.0), grade("b", &[0.0, 1.0, 3.0])];
    assert_eq!(normalize(&criteria, &Answers::new()), vec![0.0, 0.0]);
}

#[test]
fn normalize_keeps_declaration_order() {
    let criteria = vec![checkbox("a", 2.0), grade("b", &[0.0, 1.0, 3.0]), entry("c", None)];
    let given = answers(&[
        ("c", AnswerValue::Numeric(7.5)),
        ("a", AnswerValue::Boolean(true)),
        ("b", AnswerValue::Select(3.0)),
    ]);
    assert_eq!(normalize(&criteria, &given), vec![2.0, 3.0, 7.5]);
}

#[test]
fn mismatched_kind_contributes_zero() {
    let criterion = checkbox("a", 2.0);
    assert_eq!(contribution(&criterion, Some(&AnswerValue::Select(1.0))), 0.0);
}

#[test]
fn unknown_select_value_contributes_zero() {
    let criterion = grade("b", &[0.0, 1.0, 3.0]);
    assert_eq!(contribution(&criterion, Some(&AnswerValue::Select(2.0))), 0.0);
}

#[test]
fn nan_numeric_contributes_zero() {
    let criterion = entry("c", None);
    assert_eq!(contribution(&criterion, Some(&AnswerValue::Numeric(f64::NAN))), 0.0);
}

#[test]
fn unticked_checkbox_contributes_zero() {
    let criterion = checkbox("a", -2.0);
    assert_eq!(contribution(&criterion, Some(&AnswerValue::Boolean(false))), 0.0);
    assert_eq!(contribution(&criterion, Some(&AnswerValue::Boolean(true))), -2.0);
}

#[test]
fn parse_answer_by_kind() {
    let tick = checkbox("a", 1.0);
    assert_eq!(tick.parse_answer("on"), Some(AnswerValue::Boolean(true)));
    assert_eq!(tick.parse_answer(""), Some(AnswerValue::Boolean(false)));
    assert_eq!(tick.parse_answer("maybe"), None);

    let weight = entry("c", None);
    assert_eq!(weight.parse_answer(" 72.5 "), Some(AnswerValue::Numeric(72.5)));
    assert_eq!(weight.parse_answer("abc"), None);
    assert_eq!(weight.parse_answer("NaN"), None);

    let choice = grade("b", &[0.0, 1.0]);
    assert_eq!(choice.parse_answer("1"), Some(AnswerValue::Select(1.0)));
}

// Calculation

#[test]
fn sum_adds_signed_contributions() {
    assert_eq!(Calculation::Sum.calculate(&[1.0, 1.0, 1.0, -2.0]), 1.0);
    assert_eq!(Calculation::Sum.calculate(&[]), 0.0);
}

#[test]
fn passthrough_takes_the_first_contribution() {
    assert_eq!(Calculation::Passthrough.calculate(&[3.0]), 3.0);
    assert_eq!(Calculation::Passthrough.calculate(&[]), 0.0);
}

#[test]
fn non_finite_contributions_count_as_zero() {
    assert_eq!(Calculation::Sum.calculate(&[f64::NAN, 2.0, f64::INFINITY]), 2.0);
}

#[test]
fn non_finite_formula_result_reads_zero() {
    fn divide(values: &[f64]) -> f64 {
        values[0] / values[1]
    }
    let ratio = Calculation::Custom(Formula {
        name: "ratio",
        arity: 2,
        apply: divide,
    });
    assert_eq!(ratio.calculate(&[1.0, 0.0]), 0.0);
    assert_eq!(ratio.calculate(&[3.0, 2.0]), 1.5);
}

#[test]
fn subgroup_rule_needs_both_halves() {
    assert_eq!(both_subgroups_positive(&[1.0, 0.0, 10.0, 0.0], 2), 1.0);
    assert_eq!(both_subgroups_positive(&[1.0, 1.0, 0.0, 0.0], 2), 0.0);
    assert_eq!(both_subgroups_positive(&[0.0, 0.0, 10.0, 10.0], 2), 0.0);
    assert_eq!(both_subgroups_positive(&[1.0], 3), 0.0);
}

#[test]
fn symptomatic_answers_count_matches() {
    let pattern = [true, false, true];
    assert_eq!(symptomatic_answers(&[1.0, 0.0, 1.0], &pattern), 3.0);
    assert_eq!(symptomatic_answers(&[0.0, 1.0, 0.0], &pattern), 0.0);
    assert_eq!(symptomatic_answers(&[1.0, 1.0], &pattern), 1.0);
}

#[test]
fn calculation_serializes_with_strategy_tag() {
    let json = serde_json::to_value(Calculation::Sum).unwrap();
    assert_eq!(json, serde_json::json!({ "strategy": "sum" }));

    fn never(_: &[f64]) -> f64 {
        0.0
    }
    let custom = Calculation::Custom(Formula {
        name: "both_subgroups_positive",
        arity: 6,
        apply: never,
    });
    let json = serde_json::to_value(custom).unwrap();
    assert_eq!(
        json,
        serde_json::json!({ "strategy": "custom", "formula": "both_subgroups_positive" })
    );
}

// Interpretation

#[test]
fn range_chain_first_match_wins() {
    let rule = three_point_chain();
    assert_eq!(rule.interpret(0.0).level, Level::Low);
    assert_eq!(rule.interpret(1.0).level, Level::Moderate);
    assert_eq!(rule.interpret(2.0).level, Level::Moderate);
    assert_eq!(rule.interpret(3.0).level, Level::High);
    assert_eq!(rule.interpret(4.0).level, Level::High);
}

#[test]
fn score_placeholder_is_rendered() {
    let rule = three_point_chain();
    assert_eq!(rule.interpret(2.0).text, "some (2)");
}

#[test]
fn scores_outside_the_domain_are_unexpected() {
    let rule = three_point_chain();
    for score in [-1.0, 5.0, 2.5, f64::NAN, f64::INFINITY] {
        let interpretation = rule.interpret(score);
        assert_eq!(interpretation.level, Level::Unexpected, "score {score}");
    }
    assert_eq!(
        rule.interpret(2.5).text,
        "Unexpected score 2.5. Check the entered data."
    );
}

#[test]
fn exact_match_has_no_interpolation() {
    let rule = InterpretationRule::exact([
        (1.0, Level::ClassI, "class I"),
        (2.0, Level::ClassII, "class II"),
    ]);
    assert_eq!(rule.interpret(2.0).level, Level::ClassII);
    assert_eq!(rule.interpret(1.5).level, Level::Unexpected);
    assert_eq!(rule.interpret(0.0).level, Level::Unexpected);
    assert_eq!(rule.declared_scores(), Some(vec![1.0, 2.0]));
}

#[test]
fn declared_scores_walk_the_domain() {
    let rule = InterpretationRule::chain(ScoreRange::stepped(0.0, 1.5, 0.5))
        .otherwise(Level::Normal, "any");
    assert_eq!(rule.declared_scores(), Some(vec![0.0, 0.5, 1.0, 1.5]));
}

#[test]
fn unexpected_formats_whole_scores() {
    let interpretation = unexpected(12.0);
    assert_eq!(interpretation.level, Level::Unexpected);
    assert_eq!(interpretation.text, "Unexpected score 12. Check the entered data.");
}

#[test]
fn interpretation_serializes_with_rule_tag() {
    let json = serde_json::to_value(three_point_chain()).unwrap();
    assert_eq!(json["rule"], "range_chain");
    assert_eq!(json["steps"][1]["upper"], 2.0);
    assert_eq!(json["otherwise"]["level"], "high");
}

// Instrument

#[test]
fn evaluate_echoes_the_answers() {
    let instrument = fixture(
        vec![checkbox("a", 1.0), checkbox("b", 1.0)],
        Calculation::Sum,
        three_point_chain(),
    );
    let given = answers(&[("a", AnswerValue::Boolean(true))]);
    let result = evaluate(&instrument, &given);
    assert_eq!(result.instrument_id, "fixture");
    assert_eq!(result.value, 1.0);
    assert_eq!(result.interpretation.level, Level::Moderate);
    assert_eq!(result.criteria_values, given);
}

#[test]
fn validate_answers_reports_out_of_domain_values() {
    let instrument = fixture(
        vec![
            checkbox("a", 1.0),
            grade("b", &[0.0, 1.0]),
            entry("c", Some(ScoreRange::integers(0.0, 10.0))),
        ],
        Calculation::Sum,
        three_point_chain(),
    );
    let given = answers(&[
        ("a", AnswerValue::Numeric(1.0)),
        ("b", AnswerValue::Select(4.0)),
        ("c", AnswerValue::Numeric(11.0)),
        ("zzz", AnswerValue::Boolean(true)),
    ]);

    let errors = instrument.validate_answers(&given);
    let ids: Vec<&str> = errors.iter().map(|e| e.criterion_id.as_str()).collect();
    assert_eq!(ids, vec!["a", "b", "c", "zzz"]);
    assert!(errors.iter().all(|e| e.message.starts_with("Fixture: ")));
    assert!(errors[2].to_string().contains("outside range [0, 10]"));
}

#[test]
fn score_bounds_follow_the_strategy() {
    let summed = fixture(
        vec![checkbox("a", 3.0), checkbox("b", -2.0), grade("c", &[1.0, 2.0])],
        Calculation::Sum,
        three_point_chain(),
    );
    assert_eq!(summed.score_bounds(), Some((-1.0, 5.0)));

    let unbounded = fixture(vec![entry("c", None)], Calculation::Sum, three_point_chain());
    assert_eq!(unbounded.score_bounds(), None);
}

#[test]
fn validate_accepts_a_sound_definition() {
    let instrument = fixture(
        vec![checkbox("a", 1.0), checkbox("b", 1.0)],
        Calculation::Sum,
        three_point_chain(),
    );
    assert!(instrument.validate().is_ok());
}

#[test]
fn validate_rejects_duplicate_criteria() {
    let instrument = fixture(
        vec![checkbox("a", 1.0), checkbox("a", 1.0)],
        Calculation::Sum,
        three_point_chain(),
    );
    let Err(InstrumentError::InvalidDefinition { reason, .. }) = instrument.validate() else {
        panic!("duplicate criterion ids should be rejected");
    };
    assert!(reason.contains("declared twice"));
}

#[test]
fn validate_rejects_arity_mismatch() {
    let instrument = fixture(
        vec![grade("a", &[1.0, 2.0]), grade("b", &[1.0, 2.0])],
        Calculation::Passthrough,
        InterpretationRule::exact([(1.0, Level::ClassI, "I"), (2.0, Level::ClassII, "II")]),
    );
    let err = instrument.validate().unwrap_err();
    assert!(err.to_string().contains("expects 1 criteria"));
}

#[test]
fn validate_rejects_bad_select_default() {
    let mut criterion = grade("a", &[1.0, 2.0]);
    criterion.kind = CriterionKind::Select {
        options: vec![CriterionOption {
            value: 1.0,
            label: "one".to_string(),
        }],
        default: 0.0,
    };
    let instrument = fixture(vec![criterion], Calculation::Sum, three_point_chain());
    let err = instrument.validate().unwrap_err();
    assert!(err.to_string().contains("is not one of its options"));
}

#[test]
fn validate_rejects_unordered_thresholds() {
    let rule = InterpretationRule::chain(ScoreRange::integers(0.0, 5.0))
        .upto(3.0, Level::Low, "low")
        .upto(1.0, Level::Moderate, "moderate")
        .otherwise(Level::High, "high");
    let instrument = fixture(vec![checkbox("a", 1.0)], Calculation::Sum, rule);
    let err = instrument.validate().unwrap_err();
    assert!(err.to_string().contains("not increasing"));
}

#[test]
fn validate_rejects_unreachable_catch_all() {
    let rule = InterpretationRule::chain(ScoreRange::integers(0.0, 2.0))
        .upto(2.0, Level::Low, "low")
        .otherwise(Level::High, "high");
    let instrument = fixture(vec![checkbox("a", 1.0)], Calculation::Sum, rule);
    let err = instrument.validate().unwrap_err();
    assert!(err.to_string().contains("unreachable"));
}

#[test]
fn validate_rejects_duplicate_exact_cases() {
    let rule = InterpretationRule::exact([(1.0, Level::Low, "a"), (1.0, Level::High, "b")]);
    let instrument = fixture(vec![grade("a", &[1.0])], Calculation::Passthrough, rule);
    let err = instrument.validate().unwrap_err();
    assert!(err.to_string().contains("declared twice"));
}

#[test]
fn score_range_rejects_off_step_values() {
    let range = ScoreRange::stepped(0.0, 12.5, 0.5);
    assert!(range.contains(4.5));
    assert!(range.contains(12.5));
    assert!(!range.contains(4.25));
    assert!(!range.contains(13.0));
    assert!(!range.contains(f64::NAN));

    let continuous = ScoreRange {
        min: 0.0,
        max: 1.0,
        step: None,
    };
    assert!(continuous.contains(0.3));
    assert_eq!(continuous.values(), None);
}
