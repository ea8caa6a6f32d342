use std::io::Cursor;

use docx_rs::{AlignmentType, Docx, Paragraph, Run, RunFonts, Style, StyleType};
use tracing::debug;

use scorexpress_core::models::result::ScoreResult;
use scorexpress_instruments::Instrument;

use crate::error::ExportError;
use crate::render::render_recap;
use crate::styles::DocumentStyles;

/// Generate a DOCX document from recap Markdown.
///
/// Understood subset:
/// - `# Heading` / `## Heading` / `### Heading` → DOCX Heading 1–3
/// - `- item` → bullet item
/// - `> text` → highlighted interpretation line
/// - `**bold**` → bold run
/// - Everything else → normal paragraph
pub fn generate_docx(markdown: &str, styles: &DocumentStyles) -> Result<Vec<u8>, ExportError> {
    let mut docx = Docx::new()
        .add_style(heading_style("Heading1", "heading 1", styles.heading1_size))
        .add_style(heading_style("Heading2", "heading 2", styles.heading2_size))
        .add_style(heading_style("Heading3", "heading 3", styles.heading3_size));

    let mut previous_blank = false;
    for line in markdown.lines() {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            // Collapse runs of blank lines into one spacer.
            if !previous_blank {
                docx = docx.add_paragraph(Paragraph::new());
            }
            previous_blank = true;
            continue;
        }
        previous_blank = false;

        let paragraph = if let Some(text) = trimmed.strip_prefix("### ") {
            heading_paragraph(text, "Heading3", styles)
        } else if let Some(text) = trimmed.strip_prefix("## ") {
            heading_paragraph(text, "Heading2", styles)
        } else if let Some(text) = trimmed.strip_prefix("# ") {
            heading_paragraph(text, "Heading1", styles)
        } else if let Some(text) = trimmed.strip_prefix("- ") {
            bullet_paragraph(text, styles)
        } else if let Some(text) = trimmed.strip_prefix("> ") {
            interpretation_paragraph(text, styles)
        } else {
            body_paragraph(trimmed, styles)
        };
        docx = docx.add_paragraph(paragraph);
    }

    let mut buf = Cursor::new(Vec::new());
    docx.build()
        .pack(&mut buf)
        .map_err(|e| ExportError::Docx(e.to_string()))?;

    let bytes = buf.into_inner();
    debug!(bytes = bytes.len(), "docx generated");
    Ok(bytes)
}

/// Render the recap of `result` and pack it as DOCX.
pub fn recap_docx(
    instrument: &Instrument,
    result: &ScoreResult,
    styles: &DocumentStyles,
) -> Result<Vec<u8>, ExportError> {
    let markdown = render_recap(instrument, result)?;
    generate_docx(&markdown, styles)
}

fn heading_style(style_id: &str, name: &str, size_pt: usize) -> Style {
    Style::new(style_id, StyleType::Paragraph)
        .name(name)
        .size(size_pt * 2) // OOXML uses half-points
}

fn heading_paragraph(text: &str, style_id: &str, styles: &DocumentStyles) -> Paragraph {
    Paragraph::new().style(style_id).add_run(
        Run::new()
            .add_text(text)
            .bold()
            .fonts(RunFonts::new().ascii(&styles.heading_font)),
    )
}

fn bullet_paragraph(text: &str, styles: &DocumentStyles) -> Paragraph {
    let bullet_run = Run::new()
        .add_text("\u{2022} ")
        .fonts(RunFonts::new().ascii(&styles.body_font));

    parse_inline(text, styles)
        .into_iter()
        .fold(
            Paragraph::new().align(AlignmentType::Left).add_run(bullet_run),
            Paragraph::add_run,
        )
}

fn interpretation_paragraph(text: &str, styles: &DocumentStyles) -> Paragraph {
    Paragraph::new().align(AlignmentType::Left).add_run(
        Run::new()
            .add_text(text)
            .italic()
            .color(&styles.interpretation_color)
            .fonts(RunFonts::new().ascii(&styles.body_font)),
    )
}

fn body_paragraph(text: &str, styles: &DocumentStyles) -> Paragraph {
    parse_inline(text, styles)
        .into_iter()
        .fold(Paragraph::new().align(AlignmentType::Left), Paragraph::add_run)
}

/// Split `text` into plain and `**bold**` runs. An unclosed `**` is kept as
/// literal text.
fn parse_inline(text: &str, styles: &DocumentStyles) -> Vec<Run> {
    let run = |s: &str| Run::new().add_text(s).fonts(RunFonts::new().ascii(&styles.body_font));

    let mut runs = Vec::new();
    let mut remaining = text;

    while let Some(start) = remaining.find("**") {
        let after_start = &remaining[start + 2..];
        let Some(end) = after_start.find("**") else {
            break;
        };

        if start > 0 {
            runs.push(run(&remaining[..start]));
        }
        runs.push(run(&after_start[..end]).bold());
        remaining = &after_start[end + 2..];
    }

    if !remaining.is_empty() {
        runs.push(run(remaining));
    }

    runs
}
