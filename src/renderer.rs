//! PDF serialization
//!
//! ## Architecture
//!
//! The renderer does no layout of its own. It receives a finished
//! [`Document`] whose pages already hold positioned draw commands and writes
//! them out with `pdf-writer`:
//!
//! ```text
//! Brief → layout_brief() → Document → PdfRenderer → PDF bytes
//! ```
//!
//! Object numbering: 1 = catalog, 2 = page tree, 3 = document info, then
//! content streams, pages and fonts in the order they are first needed.

use std::io::Write;

use chrono::{DateTime, Datelike, Timelike, Utc};
use flate2::write::ZlibEncoder;
use flate2::Compression;
use log::{debug, warn};
use pdf_writer::{Date, Filter, Finish, Pdf, Rect as PdfRect, Ref, TextStr};

use crate::canvas::PdfCanvas;
use crate::document::{Document, DrawCommand, Page};
use crate::error::{BriefError, BriefResult};
use crate::font_metrics::StandardFont;
use crate::font_registry::FontRegistry;
use crate::unicode_utils::count_unencodable;

/// Hands out consecutive indirect object ids
#[derive(Debug)]
pub struct RefAllocator {
    next_ref_id: i32,
}

impl RefAllocator {
    pub fn new(start: i32) -> Self {
        Self { next_ref_id: start }
    }

    pub fn next_ref(&mut self) -> Ref {
        let id = Ref::new(self.next_ref_id);
        self.next_ref_id += 1;
        id
    }
}

/// Serialization settings
#[derive(Debug, Clone)]
pub struct RenderOptions {
    /// Flate-compress page content streams.
    pub compress: bool,
    /// Written as `/CreationDate`; the only non-deterministic output.
    pub creation_date: Option<DateTime<Utc>>,
    /// Written as `/Author`.
    pub author: String,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            compress: true,
            creation_date: None,
            author: String::new(),
        }
    }
}

/// Writes a laid-out document into a PDF byte buffer
pub struct PdfRenderer {
    pdf: Pdf,
    refs: RefAllocator,
    catalog_id: Ref,
    page_tree_id: Ref,
    info_id: Ref,
    pages: Vec<Ref>,
    fonts_registry: FontRegistry,
    options: RenderOptions,
}

impl PdfRenderer {
    pub fn new(options: RenderOptions) -> Self {
        let mut refs = RefAllocator::new(1);
        let catalog_id = refs.next_ref();
        let page_tree_id = refs.next_ref();
        let info_id = refs.next_ref();

        Self {
            pdf: Pdf::new(),
            refs,
            catalog_id,
            page_tree_id,
            info_id,
            pages: Vec::new(),
            fonts_registry: FontRegistry::new(),
            options,
        }
    }

    fn compress(&self, bytes: Vec<u8>) -> BriefResult<Vec<u8>> {
        let mut encoder = ZlibEncoder::new(Vec::with_capacity(bytes.len() / 2), Compression::default());
        encoder.write_all(&bytes)?;
        Ok(encoder.finish()?)
    }

    /// Write one page: its content stream, then the page object.
    fn render_page(&mut self, page: &Page) -> BriefResult<()> {
        let mut canvas = PdfCanvas::new();

        for command in &page.commands {
            match command {
                DrawCommand::Text(run) => {
                    let replaced = count_unencodable(&run.text);
                    if replaced > 0 {
                        warn!(
                            "{} character(s) in {:?} cannot be encoded in WinAnsi and were replaced",
                            replaced, run.text
                        );
                    }
                    let font = self.fonts_registry.get_or_builtin(
                        &mut self.pdf,
                        &mut self.refs,
                        StandardFont::for_weight(run.weight),
                    );
                    canvas.set_fill_color(run.color);
                    canvas.set_font(font, run.font_size);
                    canvas.draw_string(run.x, run.y, &run.text);
                }
                DrawCommand::Rule {
                    x1,
                    x2,
                    y,
                    thickness,
                    color,
                } => {
                    canvas.save_state();
                    canvas.set_stroke_color(*color);
                    canvas.set_line_width(*thickness);
                    canvas.line(*x1, *y, *x2, *y);
                    canvas.restore_state();
                }
            }
        }

        let content_id = self.refs.next_ref();
        let page_id = self.refs.next_ref();
        let raw = canvas.finish();

        if self.options.compress {
            let compressed = self.compress(raw)?;
            self.pdf
                .stream(content_id, &compressed)
                .filter(Filter::FlateDecode);
        } else {
            self.pdf.stream(content_id, &raw);
        }

        let mut pdf_page = self.pdf.page(page_id);
        pdf_page.media_box(PdfRect::new(
            0.0,
            0.0,
            page.size.width as f32,
            page.size.height as f32,
        ));
        pdf_page.parent(self.page_tree_id);
        pdf_page.contents(content_id);
        self.fonts_registry
            .write_resources(&mut pdf_page.resources());
        pdf_page.finish();

        self.pages.push(page_id);
        debug!(
            "Rendered page {} ({} draw commands)",
            self.pages.len(),
            page.commands.len()
        );
        Ok(())
    }

    fn write_info(&mut self, title: &str) {
        let mut info = self.pdf.document_info(self.info_id);
        if !title.is_empty() {
            info.title(TextStr(title));
        }
        if !self.options.author.is_empty() {
            info.author(TextStr(&self.options.author));
        }
        info.subject(TextStr("Investor brief"));
        info.creator(TextStr("investor_brief"));
        info.producer(TextStr(concat!("investor_brief ", env!("CARGO_PKG_VERSION"))));
        if let Some(date) = self.options.creation_date {
            info.creation_date(
                Date::new(date.year() as u16)
                    .month(date.month() as u8)
                    .day(date.day() as u8)
                    .hour(date.hour() as u8)
                    .minute(date.minute() as u8)
                    .second(date.second() as u8)
                    .utc_offset_hour(0)
                    .utc_offset_minute(0),
            );
        }
        info.finish();
    }

    /// Serialize `document` and return the finished PDF bytes.
    pub fn render(mut self, document: &Document) -> BriefResult<Vec<u8>> {
        if document.pages.is_empty() {
            return Err(BriefError::PdfError("document has no pages".to_string()));
        }

        for page in &document.pages {
            self.render_page(page)?;
        }

        self.pdf.catalog(self.catalog_id).pages(self.page_tree_id);
        self.pdf
            .pages(self.page_tree_id)
            .kids(self.pages.iter().copied())
            .count(self.pages.len() as i32);
        self.write_info(&document.title);

        let bytes = self.pdf.finish();
        debug!(
            "PDF generated: {} bytes, {} page(s), {} font(s)",
            bytes.len(),
            self.pages.len(),
            self.fonts_registry.len()
        );
        Ok(bytes)
    }
}

/// Serialize `document` with `options`.
pub fn render_document(document: &Document, options: RenderOptions) -> BriefResult<Vec<u8>> {
    PdfRenderer::new(options).render(document)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::TextRun;
    use crate::types::{palette, FontWeight, Size};

    fn document(pages: usize) -> Document {
        let mut document = Document::new("Sample — Investor Brief");
        for index in 0..pages {
            let mut page = Page::new(Size::a4());
            page.commands.push(DrawCommand::Text(TextRun {
                text: format!("Line on page {}", index + 1),
                x: 50.0,
                y: 792.0,
                font_size: 10.5,
                weight: if index == 0 { FontWeight::Bold } else { FontWeight::Regular },
                color: palette::TEXT,
            }));
            page.commands.push(DrawCommand::Rule {
                x1: 50.0,
                x2: 545.0,
                y: 780.0,
                thickness: 1.5,
                color: palette::ACCENT,
            });
            document.pages.push(page);
        }
        document
    }

    fn uncompressed() -> RenderOptions {
        RenderOptions {
            compress: false,
            ..RenderOptions::default()
        }
    }

    #[test]
    fn test_header_and_trailer() {
        let bytes = render_document(&document(1), RenderOptions::default()).unwrap();
        assert!(bytes.starts_with(b"%PDF-"));
        let tail = String::from_utf8_lossy(&bytes[bytes.len() - 16..]).into_owned();
        assert!(tail.contains("%%EOF"));
    }

    #[test]
    fn test_page_tree_counts_pages() {
        let bytes = render_document(&document(3), uncompressed()).unwrap();
        let text = String::from_utf8_lossy(&bytes);
        assert!(text.contains("/Count 3"));
        assert_eq!(text.matches("/Type /Page\n").count(), 3);
        assert!(text.contains("(Line on page 3) Tj"));
        assert!(text.contains("/MediaBox [0 0 595 842]"));
    }

    #[test]
    fn test_compressed_streams_are_flate() {
        let bytes = render_document(&document(1), RenderOptions::default()).unwrap();
        let text = String::from_utf8_lossy(&bytes);
        assert!(text.contains("/FlateDecode"));
        assert!(!text.contains("(Line on page 1) Tj"));
    }

    #[test]
    fn test_empty_document_is_an_error() {
        let err = render_document(&Document::new("empty"), RenderOptions::default()).unwrap_err();
        assert!(matches!(err, BriefError::PdfError(_)));
    }

    #[test]
    fn test_creation_date_written_when_set() {
        let date = DateTime::parse_from_rfc3339("2026-03-04T05:06:07Z")
            .unwrap()
            .with_timezone(&Utc);
        let options = RenderOptions {
            creation_date: Some(date),
            ..uncompressed()
        };
        let bytes = render_document(&document(1), options).unwrap();
        let text = String::from_utf8_lossy(&bytes);
        assert!(text.contains("D:20260304050607"));
    }

    #[test]
    fn test_rendering_without_date_is_byte_stable() {
        let first = render_document(&document(2), RenderOptions::default()).unwrap();
        let second = render_document(&document(2), RenderOptions::default()).unwrap();
        assert_eq!(first, second);
    }
}
