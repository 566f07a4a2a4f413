use std::io::Write;

use crate::domain::summary::SummaryLine;

#[derive(serde::Serialize)]
/// Internal CSV output row for one summary line.
///
/// Headers written (in this order): `item,name,quantity,price,line_total`.
struct OutputRow<'a> {
    item: &'a str,
    name: &'a str,
    quantity: u32,
    price: u64,
    line_total: u64,
}

/// Writes summary lines to a CSV writer, in the order given (callers pass
/// [`crate::domain::ledger::OrderLedger::summary_lines`], which is catalog
/// order).
///
/// # Errors
///
/// Returns a `csv::Error` if writing/serializing any row fails.
///
/// # Examples
///
/// ```
/// use scrip_calculator::io::writer::write_summary;
///
/// let mut out = Vec::new();
/// write_summary(&mut out, &[]).unwrap();
///
/// let s = String::from_utf8(out).unwrap();
/// assert_eq!(s, "item,name,quantity,price,line_total\n");
/// ```
pub fn write_summary<W: Write>(writer: W, lines: &[SummaryLine]) -> Result<(), csv::Error> {
    let mut wtr = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(writer);

    // Header goes out even for an empty order.
    wtr.write_record(["item", "name", "quantity", "price", "line_total"])?;

    for line in lines {
        wtr.serialize(OutputRow {
            item: &line.item_id,
            name: &line.name,
            quantity: line.quantity,
            price: line.price,
            line_total: line.line_total,
        })?;
    }

    wtr.flush()?;
    Ok(())
}
