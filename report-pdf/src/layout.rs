//! Page layout.
//!
//! Turns a [`ReportDocument`] into positioned draw operations on physical
//! pages, independent of the PDF writer. Each logical page starts a new
//! physical page; content that runs past the bottom margin continues on an
//! extra page. Positions are in millimetres from the bottom-left corner.
//!
//! There are no font metrics for the built-in fonts, so line widths are
//! estimated from an average glyph width and values sit at a fixed column.

use report_core::document::{Block, Highlight, ReportDocument, Section, SectionRole, Tone, Value};
use report_core::export::PageSize;

use crate::format::{format_value, pdf_safe, row_label};

const MARGIN: f32 = 18.0;
const PT_TO_MM: f32 = 0.3528;
/// Average Helvetica glyph width as a fraction of the font size.
const GLYPH_WIDTH: f32 = 0.5;
const LINE_SPACING: f32 = 1.35;
const VALUE_COLUMN: f32 = 110.0;
const SECTION_GAP: f32 = 6.0;

pub const TITLE_SIZE: f32 = 20.0;
pub const HEADING_SIZE: f32 = 14.0;
pub const BODY_SIZE: f32 = 10.0;
pub const SMALL_SIZE: f32 = 8.5;
pub const FIGURE_SIZE: f32 = 16.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rgb(pub f32, pub f32, pub f32);

pub const INK: Rgb = Rgb(0.12, 0.12, 0.14);
pub const MUTED: Rgb = Rgb(0.42, 0.45, 0.5);
pub const LINK: Rgb = Rgb(0.15, 0.35, 0.75);

fn tone_color(tone: Tone) -> Rgb {
    match tone {
        Tone::Neutral => INK,
        Tone::Primary => Rgb(0.15, 0.35, 0.75),
        Tone::Positive => Rgb(0.08, 0.5, 0.3),
        Tone::Caution => Rgb(0.75, 0.45, 0.05),
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum DrawOp {
    Text {
        text: String,
        size: f32,
        bold: bool,
        color: Rgb,
        x: f32,
        y: f32,
    },
    Rule {
        x1: f32,
        x2: f32,
        y: f32,
    },
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct LaidOutPage {
    pub ops: Vec<DrawOp>,
}

impl LaidOutPage {
    /// Every text run on the page, in drawing order.
    pub fn texts(&self) -> impl Iterator<Item = &str> {
        self.ops.iter().filter_map(|op| match op {
            DrawOp::Text { text, .. } => Some(text.as_str()),
            DrawOp::Rule { .. } => None,
        })
    }
}

fn line_height(size: f32) -> f32 {
    size * PT_TO_MM * LINE_SPACING
}

/// Characters that fit in `width` millimetres at `size` points.
fn chars_per_line(
    width: f32,
    size: f32,
) -> usize {
    ((width / (size * PT_TO_MM * GLYPH_WIDTH)) as usize).max(10)
}

struct Cursor {
    width: f32,
    height: f32,
    y: f32,
    pages: Vec<LaidOutPage>,
}

impl Cursor {
    fn new(page_size: PageSize) -> Self {
        let (width, height) = page_size.dimensions_mm();
        Self {
            width,
            height,
            y: height - MARGIN,
            pages: Vec::new(),
        }
    }

    fn usable_width(&self) -> f32 {
        self.width - 2.0 * MARGIN
    }

    fn start_page(&mut self) {
        self.pages.push(LaidOutPage::default());
        self.y = self.height - MARGIN;
    }

    /// Moves to a fresh page when `needed` millimetres no longer fit.
    fn reserve(
        &mut self,
        needed: f32,
    ) {
        if self.y - needed < MARGIN {
            self.start_page();
        }
    }

    fn push(
        &mut self,
        op: DrawOp,
    ) {
        if self.pages.is_empty() {
            self.pages.push(LaidOutPage::default());
        }
        if let Some(page) = self.pages.last_mut() {
            page.ops.push(op);
        }
    }

    fn text_at(
        &mut self,
        text: &str,
        size: f32,
        bold: bool,
        color: Rgb,
        x: f32,
    ) {
        let y = self.y;
        self.push(DrawOp::Text {
            text: pdf_safe(text),
            size,
            bold,
            color,
            x,
            y,
        });
    }

    fn line(
        &mut self,
        text: &str,
        size: f32,
        bold: bool,
        color: Rgb,
    ) {
        let height = line_height(size);
        self.reserve(height);
        self.y -= size * PT_TO_MM;
        self.text_at(text, size, bold, color, MARGIN);
        self.y -= height - size * PT_TO_MM;
    }

    fn wrapped(
        &mut self,
        text: &str,
        size: f32,
        bold: bool,
        color: Rgb,
    ) {
        let width = chars_per_line(self.usable_width(), size);
        for paragraph in text.split('\n') {
            if paragraph.trim().is_empty() {
                self.gap(line_height(size) * 0.5);
                continue;
            }
            for line in textwrap::wrap(paragraph, width) {
                self.line(&line, size, bold, color);
            }
        }
    }

    fn rule(&mut self) {
        self.reserve(2.0);
        self.y -= 1.5;
        let y = self.y;
        self.push(DrawOp::Rule {
            x1: MARGIN,
            x2: self.width - MARGIN,
            y,
        });
        self.y -= 2.0;
    }

    fn gap(
        &mut self,
        mm: f32,
    ) {
        self.y -= mm;
    }
}

/// Lays out every page of `document`.
pub fn layout(
    document: &ReportDocument,
    page_size: PageSize,
) -> Vec<LaidOutPage> {
    let mut cursor = Cursor::new(page_size);
    for page in &document.pages {
        cursor.start_page();
        for section in &page.sections {
            layout_section(&mut cursor, section);
        }
    }
    if cursor.pages.is_empty() {
        cursor.start_page();
    }
    cursor.pages
}

fn layout_section(
    cursor: &mut Cursor,
    section: &Section,
) {
    if section.role == SectionRole::Header {
        cursor.line(&section.title, TITLE_SIZE, true, INK);
        for block in &section.blocks {
            if let Block::Paragraph(text) = block {
                cursor.wrapped(text, BODY_SIZE + 1.0, false, MUTED);
            } else {
                layout_block(cursor, block);
            }
        }
        cursor.rule();
        cursor.gap(SECTION_GAP);
        return;
    }

    // keep a heading together with at least one line of content
    cursor.reserve(line_height(HEADING_SIZE) + line_height(BODY_SIZE) * 2.0);
    cursor.line(&section.title, HEADING_SIZE, true, INK);
    cursor.rule();
    for block in &section.blocks {
        layout_block(cursor, block);
    }
    cursor.gap(SECTION_GAP);
}

fn layout_block(
    cursor: &mut Cursor,
    block: &Block,
) {
    match block {
        Block::Row { label, value } => layout_row(cursor, label, value),
        Block::Highlight(highlight) => layout_highlights(cursor, std::slice::from_ref(highlight)),
        Block::Highlights(highlights) => layout_highlights(cursor, highlights),
        Block::Paragraph(text) => {
            cursor.wrapped(text, BODY_SIZE, false, INK);
            cursor.gap(1.5);
        }
        Block::Link { label, url } => {
            cursor.line(label, BODY_SIZE, true, INK);
            cursor.wrapped(url, SMALL_SIZE, false, LINK);
            cursor.gap(1.0);
        }
    }
}

fn layout_row(
    cursor: &mut Cursor,
    label: &str,
    value: &Value,
) {
    let height = line_height(BODY_SIZE);
    cursor.reserve(height);
    cursor.y -= BODY_SIZE * PT_TO_MM;
    cursor.text_at(&row_label(label, value), BODY_SIZE, false, MUTED, MARGIN);
    cursor.text_at(
        &format_value(value),
        BODY_SIZE,
        true,
        INK,
        MARGIN + VALUE_COLUMN,
    );
    cursor.y -= height - BODY_SIZE * PT_TO_MM;
}

/// Highlights share one band, one column each.
fn layout_highlights(
    cursor: &mut Cursor,
    highlights: &[Highlight],
) {
    if highlights.is_empty() {
        return;
    }
    let band = line_height(SMALL_SIZE) * 2.0 + line_height(FIGURE_SIZE);
    cursor.reserve(band);
    let column = cursor.usable_width() / highlights.len() as f32;
    let top = cursor.y;

    for (index, highlight) in highlights.iter().enumerate() {
        let x = MARGIN + column * index as f32;
        cursor.y = top - SMALL_SIZE * PT_TO_MM;
        cursor.text_at(&highlight.label, SMALL_SIZE, true, MUTED, x);
        cursor.y -= line_height(FIGURE_SIZE);
        cursor.text_at(
            &format_value(&highlight.value),
            FIGURE_SIZE,
            true,
            tone_color(highlight.tone),
            x,
        );
        if let Some(caption) = &highlight.caption {
            cursor.y -= line_height(SMALL_SIZE);
            cursor.text_at(caption, SMALL_SIZE, false, MUTED, x);
        }
    }
    cursor.y = top - band - 2.0;
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use report_core::document::{ReportKind, ReportPage};
    use rust_decimal_macros::dec;

    use super::*;

    fn document(pages: Vec<ReportPage>) -> ReportDocument {
        ReportDocument {
            kind: ReportKind::TurnoverReport,
            title: "Test".to_string(),
            pages,
        }
    }

    fn header() -> Section {
        Section::new(SectionRole::Header, "Report").block(Block::paragraph("1 Main St"))
    }

    #[test]
    fn each_logical_page_starts_a_physical_page() {
        let doc = document(vec![
            ReportPage::assemble([header()]),
            ReportPage::assemble([Section::new(SectionRole::Disclaimer, "Disclaimer")
                .block(Block::paragraph("Subject to change."))]),
        ]);

        let pages = layout(&doc, PageSize::A4);

        assert_eq!(pages.len(), 2);
        assert_eq!(pages[1].texts().next(), Some("Disclaimer"));
    }

    #[test]
    fn rows_print_formatted_values() {
        let doc = document(vec![ReportPage::assemble([
            header(),
            Section::new(SectionRole::Budget, "Budget")
                .block(Block::row("Paint", Value::Money(dec!(1300)))),
        ])]);

        let pages = layout(&doc, PageSize::Letter);
        let texts: Vec<&str> = pages[0].texts().collect();

        assert_eq!(texts, vec!["Report", "1 Main St", "Budget", "Paint", "$1,300.00"]);
    }

    #[test]
    fn long_paragraphs_overflow_onto_extra_pages() {
        let long = "Lorem ipsum dolor sit amet. ".repeat(600);
        let doc = document(vec![ReportPage::assemble([
            header(),
            Section::new(SectionRole::Narrative, "Letter").block(Block::paragraph(long)),
        ])]);

        let pages = layout(&doc, PageSize::A4);

        assert!(pages.len() > 1, "expected overflow, got {} page", pages.len());
        for page in &pages {
            for op in &page.ops {
                if let DrawOp::Text { y, .. } = op {
                    assert!(*y >= MARGIN - 0.01, "text below bottom margin at {y}");
                }
            }
        }
    }

    #[test]
    fn wrapped_lines_fit_the_estimated_width() {
        let doc = document(vec![ReportPage::assemble([Section::new(
            SectionRole::Narrative,
            "Letter",
        )
        .block(Block::paragraph("word ".repeat(200)))])]);
        let limit = chars_per_line(PageSize::A4.dimensions_mm().0 - 2.0 * MARGIN, BODY_SIZE);

        let pages = layout(&doc, PageSize::A4);

        assert!(pages[0].texts().skip(1).all(|line| line.len() <= limit));
    }

    #[test]
    fn highlights_share_a_band() {
        let doc = document(vec![ReportPage::assemble([Section::new(
            SectionRole::Financial,
            "Income",
        )
        .block(Block::Highlights(vec![
            Highlight::new(Tone::Positive, "High", Value::Money(dec!(30250))),
            Highlight::new(Tone::Primary, "Low", Value::Money(dec!(27000))),
        ]))])]);

        let pages = layout(&doc, PageSize::A4);
        let figures: Vec<(f32, f32)> = pages[0]
            .ops
            .iter()
            .filter_map(|op| match op {
                DrawOp::Text { size, x, y, .. } if *size == FIGURE_SIZE => Some((*x, *y)),
                _ => None,
            })
            .collect();

        assert_eq!(figures.len(), 2);
        assert_eq!(figures[0].1, figures[1].1);
        assert!(figures[0].0 < figures[1].0);
    }
}
