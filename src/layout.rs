//! Page layout engine
//!
//! Lays an assembled brief out onto fixed-size pages in a single top-down
//! pass. The write position lives in an explicit [`LayoutCursor`] that every
//! draw call takes by `&mut`; the engine itself only owns the pages built so
//! far.
//!
//! Pagination is purely space based: before anything that needs `h` points
//! of height is drawn, the engine checks `cursor.y - h` against the bottom
//! margin plus the footer reserve and starts a new page when it would cross
//! it. Paragraphs and bullet lists therefore split freely across pages.

use log::debug;

use crate::assembler::{Brief, Section, SectionBody};
use crate::document::{Document, DrawCommand, Page, TextRun};
use crate::field::resolve_page_fields;
use crate::font_metrics::measure;
use crate::text_layout::LineBreaker;
use crate::types::{palette, FontWeight, PageGeometry, TextStyle};

pub const TITLE_STYLE: TextStyle = TextStyle::new(FontWeight::Bold, 22.0, 28.0, palette::INK);
pub const META_STYLE: TextStyle = TextStyle::new(FontWeight::Regular, 10.0, 16.0, palette::MUTED);
pub const HEADING_STYLE: TextStyle = TextStyle::new(FontWeight::Bold, 14.0, 20.0, palette::INK);
pub const BODY_STYLE: TextStyle = TextStyle::new(FontWeight::Regular, 10.5, 14.5, palette::TEXT);
pub const BULLET_STYLE: TextStyle = TextStyle::new(FontWeight::Regular, 10.5, 16.0, palette::TEXT);
pub const FINE_PRINT_STYLE: TextStyle =
    TextStyle::new(FontWeight::Regular, 8.5, 11.5, palette::MUTED);
pub const FOOTER_STYLE: TextStyle = TextStyle::new(FontWeight::Regular, 9.0, 12.0, palette::MUTED);

/// Space after a paragraph or bullet list.
pub const PARAGRAPH_GAP: f64 = 8.0;
/// Extra space between sections.
pub const SECTION_GAP: f64 = 6.0;
/// Baseline of the page-number footer, measured from the bottom edge.
pub const FOOTER_Y: f64 = 25.0;

pub const BULLET: &str = "•";
const BULLET_INDENT: f64 = 8.0;

/// Current page and baseline of the next line. Obtained from
/// [`LayoutEngine::start`] only, so it always points at an existing page.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayoutCursor {
    /// Index into the document's pages.
    pub(crate) page: usize,
    pub(crate) y: f64,
}

impl LayoutCursor {
    pub fn page(&self) -> usize {
        self.page
    }

    pub fn y(&self) -> f64 {
        self.y
    }
}

/// Builds a paginated [`Document`] from draw operations
pub struct LayoutEngine {
    geometry: PageGeometry,
    breaker: LineBreaker,
    document: Document,
}

impl LayoutEngine {
    pub fn new(geometry: PageGeometry, title: impl Into<String>) -> Self {
        Self {
            breaker: LineBreaker::new(geometry.content_width()),
            geometry,
            document: Document::new(title),
        }
    }

    pub fn geometry(&self) -> &PageGeometry {
        &self.geometry
    }

    /// Allocate the first page and return a cursor at its top margin.
    pub fn start(&mut self) -> LayoutCursor {
        self.document.pages.push(Page::new(self.geometry.size));
        LayoutCursor {
            page: self.document.pages.len() - 1,
            y: self.geometry.top(),
        }
    }

    fn new_page(&mut self, cursor: &mut LayoutCursor) {
        self.document.pages.push(Page::new(self.geometry.size));
        cursor.page = self.document.pages.len() - 1;
        cursor.y = self.geometry.top();
        debug!("Layout: started page {}", cursor.page + 1);
    }

    /// Start a new page if `needed` points do not fit above the footer area.
    /// Returns whether a page break happened.
    pub fn ensure_space(&mut self, cursor: &mut LayoutCursor, needed: f64) -> bool {
        if cursor.y - needed < self.geometry.floor() {
            self.new_page(cursor);
            true
        } else {
            false
        }
    }

    /// Move the cursor down without drawing. Gaps never break pages; the
    /// next draw call does that if needed.
    pub fn gap(&mut self, cursor: &mut LayoutCursor, amount: f64) {
        cursor.y -= amount;
    }

    fn push(&mut self, cursor: &LayoutCursor, command: DrawCommand) {
        self.document.pages[cursor.page].commands.push(command);
    }

    fn emit_line(&mut self, cursor: &mut LayoutCursor, text: String, x: f64, style: &TextStyle) {
        self.ensure_space(cursor, style.line_height);
        self.push(
            cursor,
            DrawCommand::Text(TextRun {
                text,
                x,
                y: cursor.y,
                font_size: style.font_size,
                weight: style.weight,
                color: style.color,
            }),
        );
        cursor.y -= style.line_height;
    }

    /// Single line at the left margin.
    pub fn draw_heading(&mut self, cursor: &mut LayoutCursor, text: &str, style: &TextStyle) {
        let x = self.geometry.margins.left;
        self.emit_line(cursor, text.to_string(), x, style);
    }

    /// Single unwrapped line at the left margin, followed by the paragraph gap.
    pub fn draw_line(&mut self, cursor: &mut LayoutCursor, text: &str, style: &TextStyle) {
        let x = self.geometry.margins.left;
        self.emit_line(cursor, text.to_string(), x, style);
        self.gap(cursor, PARAGRAPH_GAP);
    }

    /// Wrap `text` to the content width, one overflow check per line,
    /// followed by the paragraph gap. Returns the number of lines drawn.
    pub fn draw_paragraph(
        &mut self,
        cursor: &mut LayoutCursor,
        text: &str,
        style: &TextStyle,
    ) -> usize {
        let x = self.geometry.margins.left;
        let lines = self.breaker.break_text(text, style.weight, style.font_size);
        let count = lines.len();
        for line in lines {
            self.emit_line(cursor, line.text, x, style);
        }
        self.gap(cursor, PARAGRAPH_GAP);
        count
    }

    /// One bullet per item, never wrapped, followed by the paragraph gap.
    pub fn draw_bullets(&mut self, cursor: &mut LayoutCursor, items: &[String], style: &TextStyle) {
        let x = self.geometry.margins.left + BULLET_INDENT;
        for item in items {
            self.emit_line(cursor, format!("{} {}", BULLET, item), x, style);
        }
        self.gap(cursor, PARAGRAPH_GAP);
    }

    /// Horizontal rule across the content width at the cursor.
    pub fn draw_rule(&mut self, cursor: &mut LayoutCursor, thickness: f64) {
        self.ensure_space(cursor, thickness);
        let left = self.geometry.margins.left;
        let right = self.geometry.size.width - self.geometry.margins.right;
        self.push(
            cursor,
            DrawCommand::Rule {
                x1: left,
                x2: right,
                y: cursor.y,
                thickness,
                color: palette::ACCENT,
            },
        );
        cursor.y -= thickness;
    }

    /// Stamp the centered footer on every page and hand back the document.
    pub fn finish(mut self, footer_template: &str) -> Document {
        let total = self.document.pages.len();
        let page_width = self.geometry.size.width;

        for (index, page) in self.document.pages.iter_mut().enumerate() {
            let text = resolve_page_fields(footer_template, index + 1, total);
            let width = measure(&text, FOOTER_STYLE.weight, FOOTER_STYLE.font_size);
            page.commands.push(DrawCommand::Text(TextRun {
                text,
                x: (page_width - width) / 2.0,
                y: FOOTER_Y,
                font_size: FOOTER_STYLE.font_size,
                weight: FOOTER_STYLE.weight,
                color: FOOTER_STYLE.color,
            }));
        }

        debug!("Layout finished: {} page(s)", total);
        self.document
    }
}

fn draw_section(engine: &mut LayoutEngine, cursor: &mut LayoutCursor, section: &Section) {
    engine.draw_heading(cursor, &section.title, &HEADING_STYLE);
    let body_style = if section.fine_print {
        &FINE_PRINT_STYLE
    } else {
        &BODY_STYLE
    };
    match &section.body {
        SectionBody::Paragraph { text } => {
            engine.draw_paragraph(cursor, text, body_style);
        }
        SectionBody::BulletList { items } => {
            let style = if section.fine_print {
                &FINE_PRINT_STYLE
            } else {
                &BULLET_STYLE
            };
            engine.draw_bullets(cursor, items, style);
        }
    }
    engine.gap(cursor, SECTION_GAP);
}

/// Lay out a whole brief: header block, every section in order, footers.
pub fn layout_brief(brief: &Brief, geometry: PageGeometry, footer_template: &str) -> Document {
    let mut engine = LayoutEngine::new(geometry, format!("{} — Investor Brief", brief.header.title));
    let mut cursor = engine.start();

    engine.draw_paragraph(&mut cursor, &brief.header.title, &TITLE_STYLE);
    let metadata = brief.header.metadata_line();
    if !metadata.is_empty() {
        engine.draw_line(&mut cursor, &metadata, &META_STYLE);
    }
    engine.draw_rule(&mut cursor, 1.5);
    engine.gap(&mut cursor, 14.0);

    for section in &brief.sections {
        draw_section(&mut engine, &mut cursor, section);
    }

    engine.finish(footer_template)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assembler::assemble;
    use crate::content::CompanyProfile;
    use crate::field::DEFAULT_FOOTER_TEMPLATE;
    use crate::project::Project;
    use pretty_assertions::assert_eq;

    fn engine() -> LayoutEngine {
        LayoutEngine::new(PageGeometry::default(), "test")
    }

    fn long_text(words: usize) -> String {
        (0..words)
            .map(|i| format!("word{}", i))
            .collect::<Vec<_>>()
            .join(" ")
    }

    fn texts(page: &Page) -> Vec<String> {
        page.text_runs().map(|run| run.text.clone()).collect()
    }

    #[test]
    fn test_cursor_starts_below_top_margin() {
        let mut engine = engine();
        let cursor = engine.start();
        assert_eq!(cursor, LayoutCursor { page: 0, y: 792.0 });
    }

    #[test]
    fn test_heading_decrements_by_line_height() {
        let mut engine = engine();
        let mut cursor = engine.start();
        engine.draw_heading(&mut cursor, "Summary", &HEADING_STYLE);
        assert_eq!(cursor.y, 792.0 - HEADING_STYLE.line_height);
        let doc = engine.finish("x");
        let run = doc.pages[0].text_runs().next().unwrap();
        assert_eq!((run.x, run.y), (50.0, 792.0));
        assert_eq!(run.weight, FontWeight::Bold);
    }

    #[test]
    fn test_overflow_rule_boundary() {
        let mut engine = engine();
        let mut cursor = engine.start();
        // Exactly at the floor still fits.
        cursor.y = 70.0 + 10.0;
        assert!(!engine.ensure_space(&mut cursor, 10.0));
        assert_eq!(cursor.page, 0);
        // One point less does not.
        cursor.y = 70.0 + 9.0;
        assert!(engine.ensure_space(&mut cursor, 10.0));
        assert_eq!(cursor, LayoutCursor { page: 1, y: 792.0 });
    }

    #[test]
    fn test_paragraph_continues_on_new_page() {
        let mut engine = engine();
        let mut cursor = engine.start();
        cursor.y = 120.0;
        let drawn = engine.draw_paragraph(&mut cursor, &long_text(400), &BODY_STYLE);
        let doc = engine.finish(DEFAULT_FOOTER_TEMPLATE);

        assert!(doc.page_count() >= 2);
        let body_lines: usize = doc.pages.iter().map(|p| p.text_runs().count() - 1).sum();
        assert_eq!(body_lines, drawn);
        // Nothing was drawn below the floor.
        for page in &doc.pages {
            for run in page.text_runs().filter(|r| r.y != FOOTER_Y) {
                assert!(run.y - BODY_STYLE.line_height >= 70.0 - 1e-9);
            }
        }
        // Words survive the page break in order.
        let rejoined: Vec<String> = doc
            .pages
            .iter()
            .flat_map(|p| p.text_runs().filter(|r| r.y != FOOTER_Y))
            .map(|r| r.text.clone())
            .collect();
        assert_eq!(rejoined.join(" "), long_text(400));
    }

    #[test]
    fn test_footer_reports_true_total_on_every_page() {
        let mut engine = engine();
        let mut cursor = engine.start();
        engine.draw_paragraph(&mut cursor, &long_text(1500), &BODY_STYLE);
        let doc = engine.finish(DEFAULT_FOOTER_TEMPLATE);

        let total = doc.page_count();
        assert!(total >= 3);
        for (index, page) in doc.pages.iter().enumerate() {
            let footer = page.text_runs().last().unwrap();
            assert_eq!(footer.text, format!("Page {} of {}", index + 1, total));
            assert_eq!(footer.y, FOOTER_Y);
            let width = measure(&footer.text, FontWeight::Regular, FOOTER_STYLE.font_size);
            assert!((footer.x + width / 2.0 - 297.5).abs() < 1e-9);
        }
    }

    #[test]
    fn test_bullets_cross_page_boundary_in_order() {
        let mut engine = engine();
        let mut cursor = engine.start();
        cursor.y = 150.0;
        let items: Vec<String> = (1..=12).map(|i| format!("item {}", i)).collect();
        engine.draw_bullets(&mut cursor, &items, &BULLET_STYLE);
        let doc = engine.finish("");

        assert_eq!(doc.page_count(), 2);
        let drawn: Vec<String> = doc
            .pages
            .iter()
            .flat_map(|p| p.text_runs().filter(|r| r.y != FOOTER_Y))
            .map(|r| r.text.clone())
            .collect();
        let expected: Vec<String> = items.iter().map(|i| format!("• {}", i)).collect();
        assert_eq!(drawn, expected);
        assert!(doc.pages[0].text_runs().all(|r| r.y == FOOTER_Y || r.x == 58.0));
    }

    #[test]
    fn test_empty_paragraph_only_adds_gap() {
        let mut engine = engine();
        let mut cursor = engine.start();
        assert_eq!(engine.draw_paragraph(&mut cursor, "", &BODY_STYLE), 0);
        assert_eq!(cursor.y, 792.0 - PARAGRAPH_GAP);
    }

    #[test]
    fn test_layout_brief_is_deterministic() {
        let project = Project {
            slug: "regenerative-soil-network".into(),
            title: "Regenerative Soil Network".into(),
            category: "AgroTech".into(),
            location: Some("Alentejo, Portugal".into()),
            status: "Pilot".into(),
            short_description: "Soil health services for mid-size farms.".into(),
            long_description: long_text(600),
        };
        let brief = assemble(&project, &CompanyProfile::default());
        let first = layout_brief(&brief, PageGeometry::default(), DEFAULT_FOOTER_TEMPLATE);
        let second = layout_brief(&brief, PageGeometry::default(), DEFAULT_FOOTER_TEMPLATE);
        assert_eq!(first, second);
        assert!(first.page_count() >= 2);
        assert_eq!(first.title, "Regenerative Soil Network — Investor Brief");

        let content = first.text_content();
        assert_eq!(content[0], "Regenerative Soil Network");
        assert_eq!(content[1], "AgroTech  ·  Alentejo, Portugal  ·  Pilot");
        assert!(content.contains(&"• Real demand from agricultural operations"));
        assert!(matches!(first.pages[0].commands[2], DrawCommand::Rule { .. }));
    }

    #[test]
    fn test_metadata_is_one_unwrapped_line() {
        let project = Project {
            slug: "x".into(),
            title: "X".into(),
            category: "Regenerative Agriculture and Soil Carbon Services".into(),
            location: Some("Alentejo, Baixo Alentejo and Algarve regions, Portugal".into()),
            status: "Pilot programme with three cooperatives".into(),
            short_description: "Short.".into(),
            long_description: String::new(),
        };
        let brief = assemble(&project, &CompanyProfile::default());
        let document = layout_brief(&brief, PageGeometry::default(), DEFAULT_FOOTER_TEMPLATE);

        let content = document.text_content();
        assert_eq!(content[1], brief.header.metadata_line());
        assert_eq!(content[2], crate::assembler::SUMMARY);
    }

    #[test]
    fn test_cursor_accessors() {
        let mut engine = engine();
        let cursor = engine.start();
        assert_eq!(cursor.page(), 0);
        assert_eq!(cursor.y(), 792.0);
    }

    #[test]
    fn test_section_headings_in_order() {
        let project = Project {
            slug: "x".into(),
            title: "X".into(),
            category: "Logistics".into(),
            location: None,
            status: String::new(),
            short_description: "s".into(),
            long_description: "l".into(),
        };
        let brief = assemble(&project, &CompanyProfile::default());
        let doc = layout_brief(&brief, PageGeometry::default(), DEFAULT_FOOTER_TEMPLATE);
        let headings: Vec<String> = doc
            .pages
            .iter()
            .flat_map(|p| p.text_runs())
            .filter(|r| r.weight == FontWeight::Bold && r.font_size == HEADING_STYLE.font_size)
            .map(|r| r.text.clone())
            .collect();
        let expected: Vec<String> = brief.sections.iter().map(|s| s.title.clone()).collect();
        assert_eq!(headings, expected);
        assert_eq!(texts(&doc.pages[0])[1], "Logistics");
    }
}
