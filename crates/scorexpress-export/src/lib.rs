//! scorexpress-export
//!
//! Score recaps for sharing: Markdown rendered from a Tera template, DOCX
//! built from that Markdown, and the file names they are saved under.
//! Formatters only read a finished result; they never change the score.

pub mod docx;
pub mod error;
pub mod filename;
pub mod render;
pub mod styles;
