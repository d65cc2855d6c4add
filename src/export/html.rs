// ABOUTME: Standalone HTML export writer for the lega-slides application
// ABOUTME: Emits a single self-contained document with one section per slide

use crate::deck::{ClinicNote, ClinicRow, ListEntry, Slide, TABLE_HEADERS};
use crate::errors::Result;
use crate::export::SlideWriter;
use std::fmt::Write as _;

const HTML_HEAD: &str = r#"<!DOCTYPE html>
<html lang="pt-BR">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>Legalização e Infraestrutura</title>
    <style>
        body { font-family: Arial, sans-serif; margin: 0; padding: 20px; background: #f5f5f5; }
        .container { max-width: 1200px; margin: 0 auto; background: white; padding: 40px; border-radius: 10px; box-shadow: 0 2px 10px rgba(0,0,0,0.1); }
        h1 { color: #333; text-align: center; font-size: 36px; margin-bottom: 20px; }
        h2 { color: #666; text-align: center; font-size: 24px; margin-bottom: 40px; }
        h3 { color: #333; font-size: 28px; margin-top: 40px; border-bottom: 2px solid #eee; padding-bottom: 10px; }
        ul { color: #666; font-size: 16px; line-height: 1.6; }
        li { margin-bottom: 8px; }
        p { color: #666; font-size: 16px; line-height: 1.6; }
        table { width: 100%; border-collapse: collapse; margin: 20px 0; font-size: 14px; }
        th { border: 1px solid #ddd; padding: 12px; text-align: left; font-weight: bold; background-color: #f5f5f5; }
        td { border: 1px solid #ddd; padding: 12px; }
        tr.alt { background-color: #f9f9f9; }
        .slide { page-break-after: always; margin-bottom: 40px; }
        .slide:last-child { page-break-after: avoid; }
    </style>
</head>
<body>
    <div class="container">
"#;

const HTML_FOOT: &str = "    </div>\n</body>\n</html>\n";

fn escape(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(c),
        }
    }
    out
}

/// Writes each slide as a `.slide` section; the stylesheet carries the print
/// page-break hints between sections.
pub struct HtmlWriter {
    out: String,
}

impl HtmlWriter {
    pub fn new() -> Self {
        Self {
            out: String::from(HTML_HEAD),
        }
    }
}

impl Default for HtmlWriter {
    fn default() -> Self {
        Self::new()
    }
}

/// Table markup shared with no one: statuses render as plain labels, rows
/// alternate background colors, and an empty validity is still a cell.
fn push_table(out: &mut String, rows: &[ClinicRow]) {
    out.push_str("            <table>\n                <thead>\n                    <tr>");
    for header in TABLE_HEADERS {
        let _ = write!(out, "<th>{}</th>", escape(header));
    }
    out.push_str("</tr>\n                </thead>\n                <tbody>\n");
    for (i, row) in rows.iter().enumerate() {
        let class = if i % 2 == 1 { " class=\"alt\"" } else { "" };
        let _ = writeln!(
            out,
            "                    <tr{}><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>{}</td></tr>",
            class,
            escape(row.clinic),
            escape(row.kind),
            escape(row.lta_status().label()),
            escape(row.permit_status().label()),
            escape(row.validity),
        );
    }
    out.push_str("                </tbody>\n            </table>\n");
}

impl SlideWriter for HtmlWriter {
    fn cover(&mut self, slide: &Slide, subtitle: &str) -> Result<()> {
        let _ = writeln!(self.out, "        <div class=\"slide\">");
        let _ = writeln!(self.out, "            <h1>{}</h1>", escape(slide.title));
        let _ = writeln!(self.out, "            <h2>{}</h2>", escape(subtitle));
        let _ = writeln!(self.out, "        </div>");
        Ok(())
    }

    fn list(&mut self, slide: &Slide, entries: &[ListEntry]) -> Result<()> {
        let _ = writeln!(self.out, "        <div class=\"slide\">");
        let _ = writeln!(self.out, "            <h3>{}</h3>", escape(slide.title));
        self.out.push_str("            <ul>\n");
        for entry in entries {
            let _ = writeln!(self.out, "                <li>{}</li>", escape(entry.label));
        }
        self.out.push_str("            </ul>\n        </div>\n");
        Ok(())
    }

    fn table(&mut self, slide: &Slide, _caption: &str, rows: &[ClinicRow]) -> Result<()> {
        let _ = writeln!(self.out, "        <div class=\"slide\">");
        let _ = writeln!(self.out, "            <h3>{}</h3>", escape(slide.title));
        push_table(&mut self.out, rows);
        self.out.push_str("        </div>\n");
        Ok(())
    }

    fn notes(&mut self, slide: &Slide, entries: &[ClinicNote]) -> Result<()> {
        let _ = writeln!(self.out, "        <div class=\"slide\">");
        let _ = writeln!(self.out, "            <h3>{}</h3>", escape(slide.title));
        for note in entries {
            let _ = writeln!(
                self.out,
                "            <p><strong>{}:</strong> {}. {}</p>",
                escape(note.clinic),
                escape(note.status),
                escape(note.description),
            );
        }
        self.out.push_str("        </div>\n");
        Ok(())
    }

    fn paragraphs(&mut self, slide: &Slide, text: &[&str]) -> Result<()> {
        let _ = writeln!(self.out, "        <div class=\"slide\">");
        let _ = writeln!(self.out, "            <h3>{}</h3>", escape(slide.title));
        for paragraph in text {
            let _ = writeln!(self.out, "            <p>{}</p>", escape(paragraph));
        }
        self.out.push_str("        </div>\n");
        Ok(())
    }

    fn finish(mut self) -> Result<Vec<u8>> {
        self.out.push_str(HTML_FOOT);
        Ok(self.out.into_bytes())
    }
}
