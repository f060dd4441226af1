//! Plain-text rendering of the report layout
//!
//! Vertical gaps wider than one line step become blank lines and the
//! indented bucket lines keep their indent.

use std::io::Write;

use crate::error::BudgetResult;
use crate::reports::ReportLine;

const LINE_STEP_MM: f32 = 8.0;
const MM_PER_SPACE: f32 = 2.0;

/// Write the report lines as plain text
pub fn render_text<W: Write>(lines: &[ReportLine], writer: &mut W) -> BudgetResult<()> {
    let left = lines
        .iter()
        .map(|l| l.x_mm)
        .fold(f32::INFINITY, f32::min);

    let mut previous_y: Option<f32> = None;
    for line in lines {
        if let Some(y) = previous_y {
            if line.y_mm - y > LINE_STEP_MM + f32::EPSILON {
                writeln!(writer)?;
            }
        }
        previous_y = Some(line.y_mm);

        let indent = ((line.x_mm - left) / MM_PER_SPACE).round() as usize;
        writeln!(writer, "{}{}", " ".repeat(indent), line.text)?;
    }

    Ok(())
}
