use serde::Serialize;
use tera::{Context, Tera};

use scorexpress_core::models::answer::{AnswerValue, format_number};
use scorexpress_core::models::level::Tone;
use scorexpress_core::models::result::ScoreResult;
use scorexpress_instruments::Instrument;
use scorexpress_instruments::scoring::{Criterion, CriterionKind};

use crate::error::ExportError;

/// Markdown recap of one evaluation. `generate_docx` understands the same
/// subset.
pub const RECAP_TEMPLATE: &str = r#"# {{ name }}

**Category:** {{ category }}

{{ description }}

## Result

**Score:** {{ score }}

**Level:** {{ level }} ({{ tone }})

> {{ interpretation }}

## Criteria

{% for criterion in criteria -%}
- **{{ criterion.name }}:** {{ criterion.answer }}
{% endfor %}
{%- if notes %}
## Notes

{{ notes }}
{% endif %}
## Source

{{ source }}
{% if more_info_link %}
More information: {{ more_info_link }}
{% endif %}"#;

#[derive(Debug, Serialize)]
struct RecapContext<'a> {
    name: &'a str,
    description: &'a str,
    category: &'static str,
    score: String,
    level: &'static str,
    tone: Tone,
    interpretation: &'a str,
    criteria: Vec<RecapCriterion<'a>>,
    notes: Option<&'a str>,
    source: &'a str,
    more_info_link: Option<&'a str>,
}

#[derive(Debug, Serialize)]
struct RecapCriterion<'a> {
    name: &'a str,
    answer: String,
}

/// Render a Tera template with any serializable context.
///
/// The `template_content` is the raw template string (Jinja2 syntax).
pub fn render_template<C: Serialize>(
    template_name: &str,
    template_content: &str,
    context: &C,
) -> Result<String, ExportError> {
    let mut tera = Tera::default();
    tera.add_raw_template(template_name, template_content)
        .map_err(|e| ExportError::TemplateParse(e.to_string()))?;

    let value = serde_json::to_value(context)?;
    let context =
        Context::from_value(value).map_err(|e| ExportError::TemplateRender(e.to_string()))?;

    let rendered = tera.render(template_name, &context)?;
    Ok(rendered)
}

/// Markdown recap of `result` for sharing or printing.
pub fn render_recap(instrument: &Instrument, result: &ScoreResult) -> Result<String, ExportError> {
    let level = result.interpretation.level;
    let context = RecapContext {
        name: &instrument.name,
        description: &instrument.description,
        category: instrument.category.label(),
        score: display_value(result),
        level: level.key(),
        tone: level.tone(),
        interpretation: &result.interpretation.text,
        criteria: instrument
            .criteria
            .iter()
            .map(|criterion| RecapCriterion {
                name: &criterion.name,
                answer: answer_label(criterion, result.criteria_values.get(&criterion.id)),
            })
            .collect(),
        notes: instrument.notes.as_deref(),
        source: &instrument.source,
        more_info_link: instrument.more_info_link.as_deref(),
    };

    render_template("recap.md", RECAP_TEMPLATE, &context)
}

/// Score as shown to the user: the grade letter when the interpretation
/// reads "Grade A" to "Grade E", the number otherwise.
pub fn display_value(result: &ScoreResult) -> String {
    grade_letter(&result.interpretation.text)
        .map(String::from)
        .unwrap_or_else(|| format_number(result.value))
}

fn grade_letter(text: &str) -> Option<char> {
    let prefix = text.get(..5)?;
    if !prefix.eq_ignore_ascii_case("grade") {
        return None;
    }
    let rest = &text[5..];
    let letter_part = rest.trim_start();
    if letter_part.len() == rest.len() {
        return None;
    }
    letter_part
        .chars()
        .next()
        .filter(|c| matches!(c.to_ascii_uppercase(), 'A'..='E'))
}

/// How an answer reads in the recap: option labels for selects, yes/no for
/// checkboxes, value and unit for numeric entry.
fn answer_label(criterion: &Criterion, answer: Option<&AnswerValue>) -> String {
    let Some(answer) = answer else {
        return "not answered".to_string();
    };

    match (&criterion.kind, answer) {
        (CriterionKind::Select { .. }, AnswerValue::Select(value)) => criterion
            .option_label(*value)
            .map(str::to_string)
            .unwrap_or_else(|| answer.display()),
        (CriterionKind::Numeric { unit: Some(unit), .. }, AnswerValue::Numeric(_)) => {
            format!("{} {unit}", answer.display())
        }
        _ => answer.display(),
    }
}
