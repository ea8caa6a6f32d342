use std::fmt;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Severity or risk band assigned to a raw score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum Level {
    VeryLow,
    Low,
    Intermediate,
    Moderate,
    High,
    VeryHigh,
    Severe,
    Normal,
    Abnormal,
    ClassA,
    ClassB,
    ClassC,
    #[serde(rename = "class_i")]
    ClassI,
    #[serde(rename = "class_ii")]
    ClassII,
    #[serde(rename = "class_iii")]
    ClassIII,
    #[serde(rename = "class_iv")]
    ClassIV,
    #[serde(rename = "stage_1")]
    Stage1,
    #[serde(rename = "stage_2")]
    Stage2,
    #[serde(rename = "stage_3")]
    Stage3,
    #[serde(rename = "stage_4")]
    Stage4,
    #[serde(rename = "stage_5")]
    Stage5,
    /// The score fell outside every declared band.
    Unexpected,
}

/// Display tone of a level, used by formatters to pick a colour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum Tone {
    Favorable,
    Guarded,
    Elevated,
    Critical,
    Neutral,
}

impl Level {
    pub fn key(self) -> &'static str {
        match self {
            Level::VeryLow => "very_low",
            Level::Low => "low",
            Level::Intermediate => "intermediate",
            Level::Moderate => "moderate",
            Level::High => "high",
            Level::VeryHigh => "very_high",
            Level::Severe => "severe",
            Level::Normal => "normal",
            Level::Abnormal => "abnormal",
            Level::ClassA => "class_a",
            Level::ClassB => "class_b",
            Level::ClassC => "class_c",
            Level::ClassI => "class_i",
            Level::ClassII => "class_ii",
            Level::ClassIII => "class_iii",
            Level::ClassIV => "class_iv",
            Level::Stage1 => "stage_1",
            Level::Stage2 => "stage_2",
            Level::Stage3 => "stage_3",
            Level::Stage4 => "stage_4",
            Level::Stage5 => "stage_5",
            Level::Unexpected => "unexpected",
        }
    }

    /// Colour family for the recap badge. NYHA classes and stages have no
    /// intrinsic risk wording, so they stay neutral.
    pub fn tone(self) -> Tone {
        match self {
            Level::VeryLow | Level::Low | Level::Normal | Level::ClassA => Tone::Favorable,
            Level::Intermediate | Level::Moderate | Level::ClassB => Tone::Guarded,
            Level::High | Level::ClassC => Tone::Elevated,
            Level::VeryHigh | Level::Severe => Tone::Critical,
            _ => Tone::Neutral,
        }
    }

    pub fn is_unexpected(self) -> bool {
        self == Level::Unexpected
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}
