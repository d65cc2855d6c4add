use image::{ImageBuffer, Rgb};
use lega::{deck, render_to_bytes, Config, ExportFormat};
use std::io::{Cursor, Read};
use tempfile::TempDir;
use zip::ZipArchive;

fn open_archive(bytes: Vec<u8>) -> ZipArchive<Cursor<Vec<u8>>> {
    ZipArchive::new(Cursor::new(bytes)).expect("Generated PPTX is not a valid zip archive")
}

fn read_entry(archive: &mut ZipArchive<Cursor<Vec<u8>>>, name: &str) -> String {
    let mut entry = archive
        .by_name(name)
        .unwrap_or_else(|_| panic!("Missing archive entry: {}", name));
    let mut content = String::new();
    entry
        .read_to_string(&mut content)
        .expect("Failed to read archive entry");
    content
}

#[test]
fn test_pptx_archive_structure() {
    let config = Config::new();
    let bytes = render_to_bytes(deck(), ExportFormat::Pptx, &config).expect("PPTX export failed");
    let mut archive = open_archive(bytes);

    for name in [
        "[Content_Types].xml",
        "_rels/.rels",
        "docProps/core.xml",
        "docProps/app.xml",
        "ppt/presentation.xml",
        "ppt/_rels/presentation.xml.rels",
    ] {
        assert!(archive.by_name(name).is_ok(), "Missing entry: {}", name);
    }

    // One slide part per deck record, in order.
    for i in 1..=deck().len() {
        let name = format!("ppt/slides/slide{}.xml", i);
        assert!(archive.by_name(&name).is_ok(), "Missing entry: {}", name);
    }
    assert!(archive
        .by_name(&format!("ppt/slides/slide{}.xml", deck().len() + 1))
        .is_err());

    let presentation = read_entry(&mut archive, "ppt/presentation.xml");
    assert!(presentation.contains(r#"<p:sldSz cx="9144000" cy="5143500"/>"#));

    let core = read_entry(&mut archive, "docProps/core.xml");
    assert!(core.contains("Legalização e Infraestrutura"));
    assert!(core.contains("Setor de Infraestrutura e Legalização"));
    assert!(!core.contains("dcterms:created"));
}

#[test]
fn test_pptx_status_cells_are_colored() {
    let config = Config::new();
    let bytes = render_to_bytes(deck(), ExportFormat::Pptx, &config).expect("PPTX export failed");
    let mut archive = open_archive(bytes);

    // Third deck slide is the clinic status table.
    let table_slide = read_entry(&mut archive, "ppt/slides/slide3.xml");
    assert!(table_slide.contains("SP Indianópolis"));
    assert!(table_slide.contains(r#"<a:srgbClr val="22C55E"/>"#), "approved fill missing");
    assert!(table_slide.contains(r#"<a:srgbClr val="3B82F6"/>"#), "header fill missing");

    // The pending table carries the amber fallback badge.
    let pending_slide = read_entry(&mut archive, "ppt/slides/slide5.xml");
    assert!(pending_slide.contains(r#"<a:srgbClr val="F59E0B"/>"#), "pending fill missing");
    assert!(pending_slide.contains("Não precisa"));
}

#[test]
fn test_pptx_logo_embedding() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let logo_path = temp_dir.path().join("logo.png");
    let logo = ImageBuffer::from_fn(64, 64, |_, _| Rgb([40u8, 40u8, 200u8]));
    logo.save(&logo_path).expect("Failed to save logo image");

    let mut config = Config::new();
    config.logo_path = logo_path;

    let bytes = render_to_bytes(deck(), ExportFormat::Pptx, &config).expect("PPTX export failed");
    let mut archive = open_archive(bytes);

    assert!(archive.by_name("ppt/media/image1.png").is_ok());
    let cover_rels = read_entry(&mut archive, "ppt/slides/_rels/slide1.xml.rels");
    assert!(cover_rels.contains("../media/image1.png"));

    let cover = read_entry(&mut archive, "ppt/slides/slide1.xml");
    assert!(cover.contains(r#"r:embed="rId1""#));
    assert!(!cover.contains("LOGO"));
}

#[test]
fn test_pptx_missing_logo_falls_back_to_placeholder() {
    let mut config = Config::new();
    config.logo_path = std::path::PathBuf::from("/nonexistent/logo.png");

    let bytes = render_to_bytes(deck(), ExportFormat::Pptx, &config).expect("PPTX export failed");
    let mut archive = open_archive(bytes);

    assert!(archive.by_name("ppt/media/image1.png").is_err());
    assert!(archive.by_name("ppt/slides/_rels/slide1.xml.rels").is_err());

    let cover = read_entry(&mut archive, "ppt/slides/slide1.xml");
    assert!(cover.contains("LOGO"));
}
