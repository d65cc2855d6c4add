use lega::{deck, render_to_bytes, Config, ExportFormat};

// Requires a local Chrome/Chromium install (or BROWSER_PATH); run with
// `cargo test -- --ignored` on a machine that has one.
#[test]
#[ignore]
fn test_pdf_export_produces_pdf_bytes() {
    let config = Config::from_env();
    let bytes = render_to_bytes(deck(), ExportFormat::Pdf, &config).expect("PDF export failed");

    assert!(bytes.starts_with(b"%PDF-"), "Output is not a PDF document");
    assert!(bytes.len() > 1024, "PDF output suspiciously small");
}
