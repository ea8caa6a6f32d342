use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::CoreError;

/// Medical specialty an instrument is filed under.
///
/// Purely a partition key for lookup and display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum Category {
    Emergency,
    Cardiology,
    CriticalCare,
    Surgery,
    Pneumology,
    Neurology,
    Gastroenterology,
    Infectiology,
    Hematology,
    Nephrology,
    Geriatrics,
    Gynecology,
    Pediatrics,
    Psychiatry,
    Endocrinology,
    Oncology,
    Dermatology,
    Rheumatology,
    Urology,
    Ent,
    Ophthalmology,
    Nutrition,
    Other,
}

impl Category {
    /// Every category, in display order.
    pub const ALL: [Category; 23] = [
        Category::Emergency,
        Category::Cardiology,
        Category::CriticalCare,
        Category::Surgery,
        Category::Pneumology,
        Category::Neurology,
        Category::Gastroenterology,
        Category::Infectiology,
        Category::Hematology,
        Category::Nephrology,
        Category::Geriatrics,
        Category::Gynecology,
        Category::Pediatrics,
        Category::Psychiatry,
        Category::Endocrinology,
        Category::Oncology,
        Category::Dermatology,
        Category::Rheumatology,
        Category::Urology,
        Category::Ent,
        Category::Ophthalmology,
        Category::Nutrition,
        Category::Other,
    ];

    /// Stable snake_case key, identical to the serde representation.
    pub fn key(self) -> &'static str {
        match self {
            Category::Emergency => "emergency",
            Category::Cardiology => "cardiology",
            Category::CriticalCare => "critical_care",
            Category::Surgery => "surgery",
            Category::Pneumology => "pneumology",
            Category::Neurology => "neurology",
            Category::Gastroenterology => "gastroenterology",
            Category::Infectiology => "infectiology",
            Category::Hematology => "hematology",
            Category::Nephrology => "nephrology",
            Category::Geriatrics => "geriatrics",
            Category::Gynecology => "gynecology",
            Category::Pediatrics => "pediatrics",
            Category::Psychiatry => "psychiatry",
            Category::Endocrinology => "endocrinology",
            Category::Oncology => "oncology",
            Category::Dermatology => "dermatology",
            Category::Rheumatology => "rheumatology",
            Category::Urology => "urology",
            Category::Ent => "ent",
            Category::Ophthalmology => "ophthalmology",
            Category::Nutrition => "nutrition",
            Category::Other => "other",
        }
    }

    /// Human-readable name.
    pub fn label(self) -> &'static str {
        match self {
            Category::Emergency => "Emergency Medicine",
            Category::Cardiology => "Cardiology",
            Category::CriticalCare => "Critical Care",
            Category::Surgery => "Surgery",
            Category::Pneumology => "Pneumology",
            Category::Neurology => "Neurology",
            Category::Gastroenterology => "Gastroenterology",
            Category::Infectiology => "Infectious Diseases",
            Category::Hematology => "Hematology",
            Category::Nephrology => "Nephrology",
            Category::Geriatrics => "Geriatrics",
            Category::Gynecology => "Gynecology",
            Category::Pediatrics => "Pediatrics",
            Category::Psychiatry => "Psychiatry",
            Category::Endocrinology => "Endocrinology",
            Category::Oncology => "Oncology",
            Category::Dermatology => "Dermatology",
            Category::Rheumatology => "Rheumatology",
            Category::Urology => "Urology",
            Category::Ent => "ENT",
            Category::Ophthalmology => "Ophthalmology",
            Category::Nutrition => "Nutrition",
            Category::Other => "Other",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for Category {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::ALL
            .into_iter()
            .find(|c| c.key() == s)
            .ok_or_else(|| CoreError::UnknownCategory(s.to_string()))
    }
}
