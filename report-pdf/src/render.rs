//! Writes laid-out pages with printpdf.

use printpdf::{BuiltinFont, Color, Line, Mm, PdfDocument, Point};
use report_core::ExportError;
use report_core::document::ReportDocument;
use report_core::export::PageSize;

use crate::layout::{self, DrawOp, MUTED, Rgb};

fn pdf_error(error: printpdf::Error) -> ExportError {
    ExportError::Serialization(format!("{error:?}"))
}

fn color(rgb: Rgb) -> Color {
    Color::Rgb(printpdf::Rgb::new(rgb.0, rgb.1, rgb.2, None))
}

/// Lays out and encodes `document` as PDF bytes.
pub fn render_pdf(
    document: &ReportDocument,
    page_size: PageSize,
) -> Result<Vec<u8>, ExportError> {
    let pages = layout::layout(document, page_size);
    let (width, height) = page_size.dimensions_mm();

    let (doc, first_page, first_layer) =
        PdfDocument::new(document.title.as_str(), Mm(width), Mm(height), "Content");
    let regular = doc
        .add_builtin_font(BuiltinFont::Helvetica)
        .map_err(pdf_error)?;
    let bold = doc
        .add_builtin_font(BuiltinFont::HelveticaBold)
        .map_err(pdf_error)?;

    for (index, page) in pages.iter().enumerate() {
        let layer = if index == 0 {
            doc.get_page(first_page).get_layer(first_layer)
        } else {
            let (page_index, layer_index) = doc.add_page(Mm(width), Mm(height), "Content");
            doc.get_page(page_index).get_layer(layer_index)
        };

        for op in &page.ops {
            match op {
                DrawOp::Text {
                    text,
                    size,
                    bold: is_bold,
                    color: rgb,
                    x,
                    y,
                } => {
                    layer.set_fill_color(color(*rgb));
                    let font = if *is_bold { &bold } else { &regular };
                    layer.use_text(text.as_str(), *size, Mm(*x), Mm(*y), font);
                }
                DrawOp::Rule { x1, x2, y } => {
                    layer.set_outline_color(color(MUTED));
                    layer.set_outline_thickness(0.5);
                    layer.add_line(Line {
                        points: vec![
                            (Point::new(Mm(*x1), Mm(*y)), false),
                            (Point::new(Mm(*x2), Mm(*y)), false),
                        ],
                        is_closed: false,
                    });
                }
            }
        }
    }

    doc.save_to_bytes().map_err(pdf_error)
}
