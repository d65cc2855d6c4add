// ABOUTME: Plain-text export writer for the lega-slides application
// ABOUTME: Produces the newline-delimited transcript of the deck

use crate::deck::{ClinicNote, ClinicRow, ListEntry, Slide};
use crate::errors::Result;
use crate::export::SlideWriter;
use std::fmt::Write as _;

/// Flat transcript: uppercased titles as section headings, `- item` list
/// lines, table rows as inline `Field: value` pairs.
pub struct TextWriter {
    out: String,
}

impl TextWriter {
    pub fn new() -> Self {
        Self { out: String::new() }
    }

    fn heading(&mut self, title: &str) {
        if !self.out.is_empty() {
            self.out.push('\n');
        }
        let _ = writeln!(self.out, "{}:", title.to_uppercase());
    }
}

impl Default for TextWriter {
    fn default() -> Self {
        Self::new()
    }
}

/// One transcript line per table row. The `Validade` segment is dropped
/// entirely when the validity string is empty; the other segments are always
/// present.
pub fn row_line(row: &ClinicRow) -> String {
    let mut line = format!(
        "{} - {} - Aprovação LTA: {} - Alvará: {}",
        row.clinic,
        row.kind,
        row.lta_status().label(),
        row.permit_status().label()
    );
    if !row.validity.is_empty() {
        let _ = write!(line, " - Validade: {}", row.validity);
    }
    line
}

impl SlideWriter for TextWriter {
    fn cover(&mut self, slide: &Slide, subtitle: &str) -> Result<()> {
        let _ = writeln!(self.out, "{}", slide.title.to_uppercase());
        let _ = writeln!(self.out, "{}", subtitle);
        Ok(())
    }

    fn list(&mut self, slide: &Slide, entries: &[ListEntry]) -> Result<()> {
        self.heading(slide.title);
        for entry in entries {
            let _ = writeln!(self.out, "- {}", entry.label);
        }
        Ok(())
    }

    fn table(&mut self, slide: &Slide, _caption: &str, rows: &[ClinicRow]) -> Result<()> {
        self.heading(slide.title);
        for row in rows {
            let _ = writeln!(self.out, "{}", row_line(row));
        }
        Ok(())
    }

    fn notes(&mut self, slide: &Slide, entries: &[ClinicNote]) -> Result<()> {
        self.heading(slide.title);
        for (i, note) in entries.iter().enumerate() {
            if i > 0 {
                self.out.push('\n');
            }
            let _ = writeln!(self.out, "{}: {}. {}", note.clinic, note.status, note.description);
        }
        Ok(())
    }

    fn paragraphs(&mut self, slide: &Slide, text: &[&str]) -> Result<()> {
        self.heading(slide.title);
        for (i, paragraph) in text.iter().enumerate() {
            if i > 0 {
                self.out.push('\n');
            }
            let _ = writeln!(self.out, "{}", paragraph);
        }
        Ok(())
    }

    fn finish(self) -> Result<Vec<u8>> {
        Ok(self.out.into_bytes())
    }
}
