//! Built-in instrument definitions, one module per category.
//!
//! Every module exposes `instruments()`, a [`CategoryLoader`] returning its
//! definitions in display order.

pub mod cardiology;
pub mod critical_care;
pub mod emergency;
pub mod gastroenterology;
pub mod geriatrics;
pub mod neurology;
pub mod nutrition;
pub mod pediatrics;
pub mod pneumology;
pub mod psychiatry;

use scorexpress_core::models::category::Category;

use crate::catalog::CategoryLoader;
use crate::scoring::{Criterion, CriterionKind, CriterionOption};

/// Loader table for every category that ships with data, in the order the
/// aggregate catalog lists them.
pub const LOADERS: [(Category, CategoryLoader); 10] = [
    (Category::Cardiology, cardiology::instruments),
    (Category::Gastroenterology, gastroenterology::instruments),
    (Category::Geriatrics, geriatrics::instruments),
    (Category::Neurology, neurology::instruments),
    (Category::Pediatrics, pediatrics::instruments),
    (Category::Pneumology, pneumology::instruments),
    (Category::Psychiatry, psychiatry::instruments),
    (Category::CriticalCare, critical_care::instruments),
    (Category::Emergency, emergency::instruments),
    (Category::Nutrition, nutrition::instruments),
];

/// Checkbox criterion, unticked by default.
fn boolean(id: &str, name: &str, points: f64) -> Criterion {
    Criterion {
        id: id.to_string(),
        name: name.to_string(),
        kind: CriterionKind::Boolean {
            points,
            default: false,
        },
        description: None,
    }
}

/// Yes/no question scored by a custom formula, with an explicit default.
fn question(id: &str, name: &str, default: bool) -> Criterion {
    Criterion {
        id: id.to_string(),
        name: name.to_string(),
        kind: CriterionKind::Boolean {
            points: 1.0,
            default,
        },
        description: None,
    }
}

fn select(id: &str, name: &str, default: f64, options: &[(f64, &str)]) -> Criterion {
    Criterion {
        id: id.to_string(),
        name: name.to_string(),
        kind: CriterionKind::Select {
            options: options
                .iter()
                .map(|(value, label)| CriterionOption {
                    value: *value,
                    label: label.to_string(),
                })
                .collect(),
            default,
        },
        description: None,
    }
}

fn described(mut criterion: Criterion, description: &str) -> Criterion {
    criterion.description = Some(description.to_string());
    criterion
}

fn references(entries: &[(&str, &str)]) -> Vec<(String, String)> {
    entries
        .iter()
        .map(|(key, text)| (key.to_string(), text.to_string()))
        .collect()
}
