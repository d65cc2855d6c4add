// ABOUTME: PDF export writer for the lega-slides application
// ABOUTME: Prints the HTML rendition of the deck through a headless browser

use crate::config::Config;
use crate::deck::{ClinicNote, ClinicRow, ListEntry, Slide};
use crate::errors::{DeckError, Result};
use crate::export::html::HtmlWriter;
use crate::export::SlideWriter;
use headless_chrome::types::PrintToPdfOptions;
use headless_chrome::{Browser, LaunchOptionsBuilder};
use log::{info, warn};
use std::env;
use std::fs;
use std::path::Path;
use std::time::Duration;
use uuid::Uuid;

/// Builds the same document as the HTML export, then prints it to PDF in a
/// headless browser. The browser owns layout and pagination, so this format
/// is not byte-stable across environments.
pub struct PdfWriter {
    html: HtmlWriter,
    browser_path: Option<String>,
    timeout_ms: u64,
}

impl PdfWriter {
    pub fn new(config: &Config) -> Self {
        Self {
            html: HtmlWriter::new(),
            browser_path: config.browser_path.clone(),
            timeout_ms: config.default_timeout_ms,
        }
    }
}

fn print_to_pdf(html_path: &Path, browser_path: Option<&str>, timeout_ms: u64) -> Result<Vec<u8>> {
    let mut launch_options_builder = LaunchOptionsBuilder::default();
    launch_options_builder.headless(true);

    if let Some(path) = browser_path {
        if !Path::new(path).exists() {
            return Err(DeckError::BrowserNotFound);
        }
        launch_options_builder.path(Some(path.into()));
    } else if let Ok(path) = env::var("BROWSER_PATH") {
        if !path.is_empty() {
            launch_options_builder.path(Some(path.into()));
        }
    }

    let launch_options = launch_options_builder
        .build()
        .map_err(|e| DeckError::BrowserError {
            message: format!("Failed to build browser options: {:?}", e),
            source: None,
        })?;

    info!("Launching headless browser for PDF export");
    let browser = match Browser::new(launch_options) {
        Ok(browser) => browser,
        Err(e) => {
            let message = format!("Failed to launch browser: {}", e);
            warn!("{}", message);
            return Err(DeckError::BrowserError {
                message,
                source: None,
            });
        }
    };

    let html_path_abs = fs::canonicalize(html_path).map_err(DeckError::FileReadError)?;
    let url = format!("file://{}", html_path_abs.to_string_lossy());

    info!("Opening page at URL: {}", url);

    let tab = browser.new_tab().map_err(|e| DeckError::BrowserError {
        message: format!("Failed to create new tab: {}", e),
        source: None,
    })?;

    tab.navigate_to(&url).map_err(|e| DeckError::BrowserError {
        message: format!("Failed to navigate to HTML: {}", e),
        source: None,
    })?;

    tab.wait_until_navigated()
        .map_err(|e| DeckError::BrowserError {
            message: format!("Navigation failed: {}", e),
            source: None,
        })?;

    tab.wait_for_element_with_custom_timeout("body", Duration::from_millis(timeout_ms))
        .map_err(|e| DeckError::BrowserError {
            message: format!("Failed to wait for body element: {}", e),
            source: None,
        })?;

    // A4 portrait with one-inch margins, backgrounds included.
    let pdf_options = PrintToPdfOptions {
        paper_width: Some(8.27),
        paper_height: Some(11.69),
        margin_top: Some(1.0),
        margin_bottom: Some(1.0),
        margin_left: Some(1.0),
        margin_right: Some(1.0),
        print_background: Some(true),
        ..Default::default()
    };

    tab.print_to_pdf(Some(pdf_options))
        .map_err(|e| DeckError::BrowserError {
            message: format!("Failed to print page to PDF: {}", e),
            source: None,
        })
}

impl SlideWriter for PdfWriter {
    fn cover(&mut self, slide: &Slide, subtitle: &str) -> Result<()> {
        self.html.cover(slide, subtitle)
    }

    fn list(&mut self, slide: &Slide, entries: &[ListEntry]) -> Result<()> {
        self.html.list(slide, entries)
    }

    fn table(&mut self, slide: &Slide, caption: &str, rows: &[ClinicRow]) -> Result<()> {
        self.html.table(slide, caption, rows)
    }

    fn notes(&mut self, slide: &Slide, entries: &[ClinicNote]) -> Result<()> {
        self.html.notes(slide, entries)
    }

    fn paragraphs(&mut self, slide: &Slide, text: &[&str]) -> Result<()> {
        self.html.paragraphs(slide, text)
    }

    fn finish(self) -> Result<Vec<u8>> {
        let PdfWriter {
            html,
            browser_path,
            timeout_ms,
        } = self;

        let document = html.finish()?;

        let scratch_path = env::temp_dir().join(format!("deck_{}.html", Uuid::new_v4()));
        fs::write(&scratch_path, document).map_err(DeckError::FileReadError)?;

        let result = print_to_pdf(&scratch_path, browser_path.as_deref(), timeout_ms);

        // Best-effort cleanup of the scratch document.
        if let Err(e) = fs::remove_file(&scratch_path) {
            warn!("Failed to remove scratch file {:?}: {}", scratch_path, e);
        }

        result
    }
}
