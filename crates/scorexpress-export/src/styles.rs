use serde::{Deserialize, Serialize};

/// Document styling for DOCX recaps.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DocumentStyles {
    /// Font for body text (e.g. "Calibri").
    pub body_font: String,

    /// Font for headings.
    pub heading_font: String,

    /// Heading 1 font size in points (instrument name).
    pub heading1_size: usize,

    /// Heading 2 font size in points (recap sections).
    pub heading2_size: usize,

    /// Heading 3 font size in points.
    pub heading3_size: usize,

    /// Hex colour (no `#`) of the highlighted interpretation line.
    pub interpretation_color: String,
}

impl Default for DocumentStyles {
    fn default() -> Self {
        Self {
            body_font: "Calibri".to_string(),
            heading_font: "Calibri".to_string(),
            heading1_size: 18,
            heading2_size: 14,
            heading3_size: 12,
            interpretation_color: "1D4ED8".to_string(),
        }
    }
}
