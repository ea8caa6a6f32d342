use thiserror::Error;

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("template rendering failed: {0}")]
    TemplateRender(String),

    #[error("template parse error: {0}")]
    TemplateParse(String),

    #[error("DOCX generation failed: {0}")]
    Docx(String),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl ExportError {
    /// Whether retrying the same export may succeed. Only DOCX packing
    /// qualifies.
    pub fn is_transient(&self) -> bool {
        matches!(self, ExportError::Docx(_))
    }
}

impl From<tera::Error> for ExportError {
    fn from(e: tera::Error) -> Self {
        ExportError::TemplateRender(e.to_string())
    }
}
