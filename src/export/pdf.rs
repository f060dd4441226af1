//! PDF rendering of the report layout
//!
//! Produces a single A4 page with the built-in Helvetica and Helvetica-Bold
//! fonts, so no font data is embedded.

use std::io::Write;

use printpdf::{BuiltinFont, IndirectFontRef, Mm, PdfDocument};

use crate::error::{BudgetError, BudgetResult};
use crate::reports::monthly::{PAGE_HEIGHT_MM, PAGE_WIDTH_MM};
use crate::reports::{FontWeight, ReportLine, REPORT_TITLE};

/// Write the report lines as a PDF document
pub fn render_pdf<W: Write>(lines: &[ReportLine], writer: &mut W) -> BudgetResult<()> {
    let (doc, page, layer) = PdfDocument::new(
        REPORT_TITLE,
        Mm(PAGE_WIDTH_MM),
        Mm(PAGE_HEIGHT_MM),
        "Report",
    );

    let regular = doc.add_builtin_font(BuiltinFont::Helvetica).map_err(pdf_error)?;
    let bold = doc
        .add_builtin_font(BuiltinFont::HelveticaBold)
        .map_err(pdf_error)?;

    let layer = doc.get_page(page).get_layer(layer);
    for line in lines {
        let font: &IndirectFontRef = match line.weight {
            FontWeight::Regular => &regular,
            FontWeight::Bold => &bold,
        };
        // Layout measures from the top edge, PDF from the bottom
        layer.use_text(
            line.text.as_str(),
            line.size_pt,
            Mm(line.x_mm),
            Mm(PAGE_HEIGHT_MM - line.y_mm),
            font,
        );
    }

    let bytes = doc.save_to_bytes().map_err(pdf_error)?;
    writer.write_all(&bytes)?;
    Ok(())
}

fn pdf_error(e: printpdf::Error) -> BudgetError {
    BudgetError::Export(format!("Failed to build PDF: {}", e))
}
