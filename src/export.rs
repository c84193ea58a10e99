//! CSV export of saved reports.

use std::io;

use crate::model::Report;

/// Column headers, in output order.
pub const CSV_HEADERS: [&str; 5] = ["Activity", "Emissions", "Unit", "Explanation", "Timestamp"];

/// Writes one header row and one row per report.
///
/// Fields containing commas or quotes are quoted by the writer rather
/// than rewritten.
///
/// # Errors
///
/// Fails if the underlying writer does.
pub fn write_csv<W: io::Write>(reports: &[Report], writer: W) -> csv::Result<()> {
    let mut wtr = csv::WriterBuilder::new()
        .terminator(csv::Terminator::Any(b'\n'))
        .from_writer(writer);
    wtr.write_record(CSV_HEADERS)?;

    for report in reports {
        let result = &report.result;
        wtr.write_record([
            result.category.label().to_string(),
            format!("{:.2}", result.emissions_kg_co2e),
            result.unit_label.clone(),
            result.explanation.clone(),
            result.computed_at.to_string(),
        ])?;
    }

    wtr.flush()?;
    Ok(())
}
