// ABOUTME: PPTX export writer for the lega-slides application
// ABOUTME: Builds a native OOXML package with positioned text, card shapes and status tables

use crate::config::{Config, DECK_AUTHOR, DECK_TITLE};
use crate::deck::{ClinicNote, ClinicRow, ListEntry, Slide, TABLE_HEADERS};
use crate::errors::Result;
use crate::export::SlideWriter;
use image::io::Reader as ImageReader;
use log::{info, warn};
use quick_xml::escape::escape;
use std::fmt::Write as _;
use std::fs;
use std::io::{Cursor, Write};
use std::path::PathBuf;
use zip::{write::FileOptions, ZipWriter};

// 16:9 canvas in EMU.
const CANVAS_CX: i64 = 9144000;
const CANVAS_CY: i64 = 5143500;

const HEADER_FILL: &str = "3B82F6";
const ROW_FILL: &str = "1E293B";
const ALT_ROW_FILL: &str = "334155";

fn emu(inches: f64) -> i64 {
    (inches * 914400.0).round() as i64
}

struct TextOpts {
    size: u32, // hundredths of a point
    bold: bool,
    color: &'static str,
    align: &'static str,  // "l" | "ctr" | "r"
    anchor: &'static str, // "t" | "ctr" | "b"
}

fn text_box(id: u32, name: &str, x: f64, y: f64, w: f64, h: f64, text: &str, opts: &TextOpts) -> String {
    let bold = if opts.bold { r#" b="1""# } else { "" };
    format!(
        r#"<p:sp><p:nvSpPr><p:cNvPr id="{id}" name="{name}"/><p:cNvSpPr txBox="1"/><p:nvPr/></p:nvSpPr><p:spPr><a:xfrm><a:off x="{x}" y="{y}"/><a:ext cx="{cx}" cy="{cy}"/></a:xfrm><a:prstGeom prst="rect"><a:avLst/></a:prstGeom><a:noFill/></p:spPr><p:txBody><a:bodyPr wrap="square" anchor="{anchor}"><a:normAutofit/></a:bodyPr><a:lstStyle/><a:p><a:pPr algn="{align}"/><a:r><a:rPr lang="pt-BR" sz="{size}"{bold}><a:solidFill><a:srgbClr val="{color}"/></a:solidFill></a:rPr><a:t>{text}</a:t></a:r></a:p></p:txBody></p:sp>"#,
        id = id,
        name = name,
        x = emu(x),
        y = emu(y),
        cx = emu(w),
        cy = emu(h),
        anchor = opts.anchor,
        align = opts.align,
        size = opts.size,
        bold = bold,
        color = opts.color,
        text = escape(text),
    )
}

// Card backdrop: 5% white fill with a thin white outline, matching the
// translucent cards of the live deck.
fn card(id: u32, x: f64, y: f64, w: f64, h: f64) -> String {
    format!(
        r#"<p:sp><p:nvSpPr><p:cNvPr id="{id}" name="Card"/><p:cNvSpPr/><p:nvPr/></p:nvSpPr><p:spPr><a:xfrm><a:off x="{x}" y="{y}"/><a:ext cx="{cx}" cy="{cy}"/></a:xfrm><a:prstGeom prst="rect"><a:avLst/></a:prstGeom><a:solidFill><a:srgbClr val="FFFFFF"><a:alpha val="5000"/></a:srgbClr></a:solidFill><a:ln w="12700"><a:solidFill><a:srgbClr val="FFFFFF"/></a:solidFill></a:ln></p:spPr><p:txBody><a:bodyPr/><a:lstStyle/><a:p/></p:txBody></p:sp>"#,
        id = id,
        x = emu(x),
        y = emu(y),
        cx = emu(w),
        cy = emu(h),
    )
}

fn slide_title(id: u32, text: &str) -> String {
    text_box(
        id,
        "Title",
        0.5,
        0.3,
        9.0,
        1.0,
        text,
        &TextOpts { size: 3600, bold: true, color: "FFFFFF", align: "ctr", anchor: "t" },
    )
}

fn table_cell(text: &str, size: u32, bold: bool, fill: &str) -> String {
    let bold_attr = if bold { r#" b="1""# } else { "" };
    format!(
        r#"<a:tc><a:txBody><a:bodyPr/><a:lstStyle/><a:p><a:r><a:rPr lang="pt-BR" sz="{size}"{bold}><a:solidFill><a:srgbClr val="FFFFFF"/></a:solidFill></a:rPr><a:t>{text}</a:t></a:r></a:p></a:txBody><a:tcPr><a:solidFill><a:srgbClr val="{fill}"/></a:solidFill></a:tcPr></a:tc>"#,
        size = size,
        bold = bold_attr,
        fill = fill,
        text = escape(text),
    )
}

/// Native table frame. Header row carries its own fill; body rows alternate;
/// the two status columns override the row fill with the badge color.
fn status_table(id: u32, rows: &[ClinicRow], font_size: u32) -> String {
    let x = 0.3;
    let y = 1.5;
    let widths = [1.8, 1.2, 1.6, 1.6, 3.2];
    let header_h = 0.35;
    let body_h = (3.9 - header_h) / rows.len() as f64;

    let mut grid = String::new();
    for w in widths {
        let _ = write!(grid, r#"<a:gridCol w="{}"/>"#, emu(w));
    }

    let mut body = String::new();
    let _ = write!(body, r#"<a:tr h="{}">"#, emu(header_h));
    for header in TABLE_HEADERS {
        body.push_str(&table_cell(header, font_size + 100, true, HEADER_FILL));
    }
    body.push_str("</a:tr>");

    for (i, row) in rows.iter().enumerate() {
        let row_fill = if i % 2 == 1 { ALT_ROW_FILL } else { ROW_FILL };
        let _ = write!(body, r#"<a:tr h="{}">"#, emu(body_h));
        body.push_str(&table_cell(row.clinic, font_size, false, row_fill));
        body.push_str(&table_cell(row.kind, font_size, false, row_fill));
        body.push_str(&table_cell(
            row.lta_status().label(),
            font_size,
            false,
            row.lta_status().fill_color(),
        ));
        body.push_str(&table_cell(
            row.permit_status().label(),
            font_size,
            false,
            row.permit_status().fill_color(),
        ));
        body.push_str(&table_cell(row.validity, font_size, false, row_fill));
        body.push_str("</a:tr>");
    }

    format!(
        r#"<p:graphicFrame><p:nvGraphicFramePr><p:cNvPr id="{id}" name="Table"/><p:cNvGraphicFramePr/><p:nvPr/></p:nvGraphicFramePr><p:xfrm><a:off x="{x}" y="{y}"/><a:ext cx="{cx}" cy="{cy}"/></p:xfrm><a:graphic><a:graphicData uri="http://schemas.openxmlformats.org/drawingml/2006/table"><a:tbl><a:tblPr firstRow="1" bandRow="1"/><a:tblGrid>{grid}</a:tblGrid>{body}</a:tbl></a:graphicData></a:graphic></p:graphicFrame>"#,
        id = id,
        x = emu(x),
        y = emu(y),
        cx = emu(9.4),
        cy = emu(3.9),
        grid = grid,
        body = body,
    )
}

struct SlidePart {
    shapes: String,
    image: Option<(String, Vec<u8>)>,
}

/// Accumulates one slide part per record, then packs the archive. Every zip
/// entry uses a fixed modification time and the package metadata carries no
/// timestamps, so the same dataset always produces the same bytes.
pub struct PptxWriter {
    parts: Vec<SlidePart>,
    logo_path: PathBuf,
}

impl PptxWriter {
    pub fn new(config: &Config) -> Self {
        Self {
            parts: Vec::new(),
            logo_path: config.logo_path.clone(),
        }
    }

    fn push(&mut self, shapes: String, image: Option<(String, Vec<u8>)>) {
        self.parts.push(SlidePart { shapes, image });
    }

    // Reads and decode-validates the logo asset. A missing or corrupt file
    // is logged and the cover falls back to a placeholder text box.
    fn load_logo(&self) -> Option<(String, Vec<u8>)> {
        let decoded = ImageReader::open(&self.logo_path)
            .map_err(|e| warn!("Failed to open logo {:?}: {}", self.logo_path, e))
            .ok()?
            .decode()
            .map_err(|e| warn!("Failed to decode logo {:?}: {}", self.logo_path, e))
            .ok();
        decoded?;

        let ext = self
            .logo_path
            .extension()
            .map(|e| e.to_string_lossy().to_lowercase())
            .unwrap_or_else(|| "png".to_string());
        let bytes = fs::read(&self.logo_path).ok()?;
        Some((ext, bytes))
    }
}

impl SlideWriter for PptxWriter {
    fn cover(&mut self, slide: &Slide, subtitle: &str) -> Result<()> {
        let mut shapes = String::new();
        shapes.push_str(&text_box(
            2,
            "Title",
            1.0,
            2.0,
            8.0,
            1.5,
            slide.title,
            &TextOpts { size: 4800, bold: true, color: "FFFFFF", align: "l", anchor: "t" },
        ));
        shapes.push_str(&text_box(
            3,
            "Subtitle",
            1.0,
            3.5,
            8.0,
            0.8,
            subtitle,
            &TextOpts { size: 2800, bold: false, color: "CCCCCC", align: "l", anchor: "t" },
        ));

        let logo = self.load_logo();
        match &logo {
            Some(_) => {
                shapes.push_str(&format!(
                    r#"<p:pic><p:nvPicPr><p:cNvPr id="4" name="Logo"/><p:cNvPicPr><a:picLocks noChangeAspect="1"/></p:cNvPicPr><p:nvPr/></p:nvPicPr><p:blipFill><a:blip r:embed="rId1"/><a:stretch><a:fillRect/></a:stretch></p:blipFill><p:spPr><a:xfrm><a:off x="{x}" y="{y}"/><a:ext cx="{cx}" cy="{cy}"/></a:xfrm><a:prstGeom prst="rect"><a:avLst/></a:prstGeom></p:spPr></p:pic>"#,
                    x = emu(7.5),
                    y = emu(0.8),
                    cx = emu(2.0),
                    cy = emu(2.0),
                ));
            }
            None => {
                shapes.push_str(&text_box(
                    4,
                    "LogoPlaceholder",
                    7.5,
                    0.8,
                    2.0,
                    2.0,
                    "LOGO",
                    &TextOpts { size: 1600, bold: false, color: "FFFFFF", align: "ctr", anchor: "ctr" },
                ));
            }
        }

        self.push(shapes, logo);
        Ok(())
    }

    fn list(&mut self, slide: &Slide, entries: &[ListEntry]) -> Result<()> {
        let mut shapes = slide_title(2, slide.title);
        let mut id = 3;

        // Dense lists use the 4-column service grid, short lists the
        // 2-column card grid.
        let columns = if entries.len() > 8 { 4 } else { 2 };
        let (card_w, card_h) = if columns == 4 { (2.2, 1.2) } else { (4.5, 1.8) };
        let start_x = 0.3;
        let start_y = 1.5;

        for (i, entry) in entries.iter().enumerate() {
            let x = start_x + (i % columns) as f64 * card_w;
            let y = start_y + (i / columns) as f64 * card_h;

            shapes.push_str(&card(id, x, y, card_w - 0.1, card_h - 0.1));
            if columns == 4 {
                shapes.push_str(&text_box(
                    id + 1,
                    "Icon",
                    x + 0.1,
                    y + 0.1,
                    0.5,
                    0.5,
                    entry.icon,
                    &TextOpts { size: 2000, bold: false, color: "FFFFFF", align: "ctr", anchor: "t" },
                ));
                shapes.push_str(&text_box(
                    id + 2,
                    "Label",
                    x + 0.1,
                    y + 0.6,
                    card_w - 0.2,
                    0.5,
                    entry.label,
                    &TextOpts { size: 1000, bold: false, color: "FFFFFF", align: "ctr", anchor: "ctr" },
                ));
            } else {
                shapes.push_str(&text_box(
                    id + 1,
                    "Icon",
                    x + 0.2,
                    y + 0.3,
                    1.0,
                    1.0,
                    entry.icon,
                    &TextOpts { size: 2400, bold: false, color: "FFFFFF", align: "ctr", anchor: "ctr" },
                ));
                shapes.push_str(&text_box(
                    id + 2,
                    "Label",
                    x + 1.5,
                    y + 0.3,
                    card_w - 1.7,
                    1.0,
                    entry.label,
                    &TextOpts { size: 1200, bold: false, color: "FFFFFF", align: "l", anchor: "ctr" },
                ));
            }
            id += 3;
        }

        self.push(shapes, None);
        Ok(())
    }

    fn table(&mut self, slide: &Slide, _caption: &str, rows: &[ClinicRow]) -> Result<()> {
        let font_size = if rows.len() > 12 { 900 } else { 1000 };
        let mut shapes = slide_title(2, slide.title);
        shapes.push_str(&status_table(3, rows, font_size));
        self.push(shapes, None);
        Ok(())
    }

    fn notes(&mut self, slide: &Slide, entries: &[ClinicNote]) -> Result<()> {
        let mut shapes = slide_title(2, slide.title);
        let mut id = 3;

        let card_w = 4.5;
        let card_h = 2.2;
        let start_x = 0.3;
        let start_y = 1.5;

        for (i, note) in entries.iter().enumerate() {
            let x = start_x + (i % 2) as f64 * card_w;
            let y = start_y + (i / 2) as f64 * card_h;

            shapes.push_str(&card(id, x, y, card_w - 0.1, card_h - 0.1));
            shapes.push_str(&text_box(
                id + 1,
                "Icon",
                x + 0.2,
                y + 0.2,
                1.0,
                1.0,
                note.icon,
                &TextOpts { size: 2000, bold: false, color: "FFFFFF", align: "ctr", anchor: "t" },
            ));
            shapes.push_str(&text_box(
                id + 2,
                "Clinic",
                x + 1.5,
                y + 0.2,
                card_w - 1.7,
                0.5,
                note.clinic,
                &TextOpts { size: 1400, bold: true, color: "FFFFFF", align: "l", anchor: "t" },
            ));
            shapes.push_str(&text_box(
                id + 3,
                "Status",
                x + 1.5,
                y + 0.7,
                card_w - 1.7,
                0.4,
                note.status,
                &TextOpts { size: 1000, bold: false, color: "CCCCCC", align: "l", anchor: "t" },
            ));
            shapes.push_str(&text_box(
                id + 4,
                "Description",
                x + 0.2,
                y + 1.2,
                card_w - 0.4,
                0.8,
                note.description,
                &TextOpts { size: 900, bold: false, color: "FFFFFF", align: "l", anchor: "t" },
            ));
            id += 5;
        }

        self.push(shapes, None);
        Ok(())
    }

    fn paragraphs(&mut self, slide: &Slide, text: &[&str]) -> Result<()> {
        let mut shapes = slide_title(2, slide.title);
        let mut id = 3;
        let mut y = 1.5;

        for paragraph in text {
            shapes.push_str(&text_box(
                id,
                "Paragraph",
                0.5,
                y,
                9.0,
                1.0,
                paragraph,
                &TextOpts { size: 1200, bold: false, color: "FFFFFF", align: "l", anchor: "t" },
            ));
            id += 1;
            y += 1.1;
        }

        self.push(shapes, None);
        Ok(())
    }

    fn finish(self) -> Result<Vec<u8>> {
        info!("Packing PPTX with {} slides", self.parts.len());

        let mut zip = ZipWriter::new(Cursor::new(Vec::new()));
        // Fixed timestamp keeps the archive byte-identical across runs.
        let options = FileOptions::default().last_modified_time(zip::DateTime::default());

        let slide_count = self.parts.len();

        zip.start_file("[Content_Types].xml", options)?;
        let content_types = format!(
            r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Types xmlns="http://schemas.openxmlformats.org/package/2006/content-types">
    <Default Extension="xml" ContentType="application/xml"/>
    <Default Extension="rels" ContentType="application/vnd.openxmlformats-package.relationships+xml"/>
    <Default Extension="jpeg" ContentType="image/jpeg"/>
    <Default Extension="jpg" ContentType="image/jpeg"/>
    <Default Extension="png" ContentType="image/png"/>
    <Override PartName="/ppt/presentation.xml" ContentType="application/vnd.openxmlformats-officedocument.presentationml.presentation.main+xml"/>
    <Override PartName="/docProps/core.xml" ContentType="application/vnd.openxmlformats-package.core-properties+xml"/>
    <Override PartName="/docProps/app.xml" ContentType="application/vnd.openxmlformats-officedocument.extended-properties+xml"/>
    {slides}
</Types>"#,
            slides = (0..slide_count).map(|i| {
                format!(r#"<Override PartName="/ppt/slides/slide{}.xml" ContentType="application/vnd.openxmlformats-officedocument.presentationml.slide+xml"/>"#, i + 1)
            }).collect::<Vec<String>>().join("\n")
        );
        zip.write_all(content_types.as_bytes())?;

        zip.start_file("_rels/.rels", options)?;
        let rels = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships">
    <Relationship Id="rId1" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/officeDocument" Target="ppt/presentation.xml"/>
    <Relationship Id="rId2" Type="http://schemas.openxmlformats.org/package/2006/relationships/metadata/core-properties" Target="docProps/core.xml"/>
    <Relationship Id="rId3" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/extended-properties" Target="docProps/app.xml"/>
</Relationships>"#;
        zip.write_all(rels.as_bytes())?;

        zip.start_file("docProps/app.xml", options)?;
        let app_xml = format!(
            r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Properties xmlns="http://schemas.openxmlformats.org/officeDocument/2006/extended-properties" xmlns:vt="http://schemas.openxmlformats.org/officeDocument/2006/docPropsVTypes">
    <Application>lega-slides</Application>
    <Slides>{}</Slides>
</Properties>"#,
            slide_count
        );
        zip.write_all(app_xml.as_bytes())?;

        // No creation timestamp: output must not vary between runs.
        zip.start_file("docProps/core.xml", options)?;
        let core_xml = format!(
            r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<cp:coreProperties xmlns:cp="http://schemas.openxmlformats.org/package/2006/metadata/core-properties" xmlns:dc="http://purl.org/dc/elements/1.1/" xmlns:dcterms="http://purl.org/dc/terms/" xmlns:dcmitype="http://purl.org/dc/dcmitype/" xmlns:xsi="http://www.w3.org/2001/XMLSchema-instance">
    <dc:title>{}</dc:title>
    <dc:creator>{}</dc:creator>
    <cp:revision>1</cp:revision>
</cp:coreProperties>"#,
            escape(DECK_TITLE),
            escape(DECK_AUTHOR),
        );
        zip.write_all(core_xml.as_bytes())?;

        zip.start_file("ppt/_rels/presentation.xml.rels", options)?;
        let mut pres_rels = String::from(
            r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships">
"#,
        );
        for i in 0..slide_count {
            pres_rels.push_str(&format!(
                r#"    <Relationship Id="rId{}" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/slide" Target="slides/slide{}.xml"/>"#,
                i + 1,
                i + 1
            ));
            pres_rels.push('\n');
        }
        pres_rels.push_str("</Relationships>");
        zip.write_all(pres_rels.as_bytes())?;

        zip.start_file("ppt/presentation.xml", options)?;
        let presentation_xml = format!(
            r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<p:presentation xmlns:a="http://schemas.openxmlformats.org/drawingml/2006/main" xmlns:r="http://schemas.openxmlformats.org/officeDocument/2006/relationships" xmlns:p="http://schemas.openxmlformats.org/presentationml/2006/main">
    <p:sldIdLst>
{slide_ids}
    </p:sldIdLst>
    <p:sldSz cx="{cx}" cy="{cy}"/>
    <p:notesSz cx="6858000" cy="9144000"/>
</p:presentation>"#,
            slide_ids = (0..slide_count)
                .map(|i| format!(r#"        <p:sldId id="{}" r:id="rId{}"/>"#, 256 + i, i + 1))
                .collect::<Vec<String>>()
                .join("\n"),
            cx = CANVAS_CX,
            cy = CANVAS_CY,
        );
        zip.write_all(presentation_xml.as_bytes())?;

        for (i, part) in self.parts.iter().enumerate() {
            let slide_num = i + 1;

            if let Some((ext, data)) = &part.image {
                let image_name = format!("image{}.{}", slide_num, ext);
                zip.start_file(format!("ppt/media/{}", image_name), options)?;
                zip.write_all(data)?;

                zip.start_file(
                    format!("ppt/slides/_rels/slide{}.xml.rels", slide_num),
                    options,
                )?;
                let slide_rels = format!(
                    r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships">
    <Relationship Id="rId1" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/image" Target="../media/{}"/>
</Relationships>"#,
                    image_name
                );
                zip.write_all(slide_rels.as_bytes())?;
            }

            zip.start_file(format!("ppt/slides/slide{}.xml", slide_num), options)?;
            let slide_xml = format!(
                r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<p:sld xmlns:a="http://schemas.openxmlformats.org/drawingml/2006/main" xmlns:r="http://schemas.openxmlformats.org/officeDocument/2006/relationships" xmlns:p="http://schemas.openxmlformats.org/presentationml/2006/main">
    <p:cSld>
        <p:bg><p:bgPr><a:solidFill><a:srgbClr val="000000"/></a:solidFill><a:effectLst/></p:bgPr></p:bg>
        <p:spTree>
            <p:nvGrpSpPr>
                <p:cNvPr id="1" name=""/>
                <p:cNvGrpSpPr/>
                <p:nvPr/>
            </p:nvGrpSpPr>
            <p:grpSpPr>
                <a:xfrm>
                    <a:off x="0" y="0"/>
                    <a:ext cx="0" cy="0"/>
                    <a:chOff x="0" y="0"/>
                    <a:chExt cx="0" cy="0"/>
                </a:xfrm>
            </p:grpSpPr>
            {shapes}
        </p:spTree>
    </p:cSld>
    <p:clrMapOvr>
        <a:masterClrMapping/>
    </p:clrMapOvr>
</p:sld>"#,
                shapes = part.shapes,
            );
            zip.write_all(slide_xml.as_bytes())?;
        }

        let cursor = zip.finish()?;
        Ok(cursor.into_inner())
    }
}
