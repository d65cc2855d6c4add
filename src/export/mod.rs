// ABOUTME: Export generator for the lega-slides application
// ABOUTME: Walks the fixed deck in canonical order and hands each slide to a per-format writer

pub mod html;
pub mod pdf;
pub mod pptx;
pub mod text;

use crate::config::Config;
use crate::deck::{ClinicNote, ClinicRow, ListEntry, Slide, SlideBody};
use crate::errors::{DeckError, Result};
use crate::utils;
use log::info;
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

/// One method per slide body variant plus a finalizer. Each format keeps its
/// own templates; the driver guarantees slides and entries are visited in
/// dataset order.
pub trait SlideWriter {
    fn cover(&mut self, slide: &Slide, subtitle: &str) -> Result<()>;
    fn list(&mut self, slide: &Slide, entries: &[ListEntry]) -> Result<()>;
    fn table(&mut self, slide: &Slide, caption: &str, rows: &[ClinicRow]) -> Result<()>;
    fn notes(&mut self, slide: &Slide, entries: &[ClinicNote]) -> Result<()>;
    fn paragraphs(&mut self, slide: &Slide, text: &[&str]) -> Result<()>;
    fn finish(self) -> Result<Vec<u8>>;
}

/// Render the whole deck through a writer, producing the final artifact
/// bytes. Order of slides and of entries within a slide always matches the
/// dataset; no reordering or filtering happens here or in any writer.
pub fn render_deck<W: SlideWriter>(slides: &[Slide], mut writer: W) -> Result<Vec<u8>> {
    for slide in slides {
        match slide.body {
            SlideBody::Cover { subtitle } => writer.cover(slide, subtitle)?,
            SlideBody::List { entries } => writer.list(slide, entries)?,
            SlideBody::Table { caption, rows } => writer.table(slide, caption, rows)?,
            SlideBody::Notes { entries } => writer.notes(slide, entries)?,
            SlideBody::Paragraphs { text } => writer.paragraphs(slide, text)?,
        }
    }
    writer.finish()
}

/// The four supported output formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Pptx,
    Pdf,
    Html,
    Text,
}

impl ExportFormat {
    pub const ALL: [ExportFormat; 4] = [
        ExportFormat::Pptx,
        ExportFormat::Pdf,
        ExportFormat::Html,
        ExportFormat::Text,
    ];

    /// Fixed download filename for this format.
    pub fn file_name(self) -> &'static str {
        match self {
            ExportFormat::Pptx => "Legalizacao_Infraestrutura.pptx",
            ExportFormat::Pdf => "Legalizacao_Infraestrutura.pdf",
            ExportFormat::Html => "Legalizacao_Infraestrutura.html",
            ExportFormat::Text => "Legalizacao_Infraestrutura.txt",
        }
    }
}

impl FromStr for ExportFormat {
    type Err = DeckError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "pptx" | "powerpoint" => Ok(ExportFormat::Pptx),
            "pdf" => Ok(ExportFormat::Pdf),
            "html" => Ok(ExportFormat::Html),
            "text" | "txt" => Ok(ExportFormat::Text),
            other => Err(DeckError::ValidationError(format!(
                "Unknown export format: {}",
                other
            ))),
        }
    }
}

/// Produce the artifact bytes for one format without touching the
/// filesystem output.
pub fn render_to_bytes(slides: &[Slide], format: ExportFormat, config: &Config) -> Result<Vec<u8>> {
    match format {
        ExportFormat::Pptx => render_deck(slides, pptx::PptxWriter::new(config)),
        ExportFormat::Pdf => render_deck(slides, pdf::PdfWriter::new(config)),
        ExportFormat::Html => render_deck(slides, html::HtmlWriter::new()),
        ExportFormat::Text => render_deck(slides, text::TextWriter::new()),
    }
}

/// Generate one export artifact under its fixed filename. This is the
/// boundary where generation failures stop: callers get a single error
/// result, never a partially written file (bytes are rendered fully before
/// the file is created).
pub fn export_deck(
    slides: &[Slide],
    format: ExportFormat,
    out_dir: &Path,
    config: &Config,
) -> Result<PathBuf> {
    utils::ensure_directory_exists(out_dir)?;
    utils::validate_directory_writable(out_dir)?;

    info!("Exporting deck as {:?}", format);
    let bytes = render_to_bytes(slides, format, config)?;

    let path = out_dir.join(format.file_name());
    fs::write(&path, bytes).map_err(DeckError::FileReadError)?;

    info!("Export written to {:?}", path);
    Ok(path)
}
