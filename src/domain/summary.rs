use std::fmt::{self, Write};

use crate::domain::{catalog::{Catalog, Item}, ledger::OrderLedger};

pub const EMPTY_ORDER: &str = "No items added yet";

/// One ordered item as it appears in the summary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SummaryLine {
    pub item_id: String,
    pub name: String,
    pub quantity: u32,
    pub price: u64,
    pub line_total: u64,
}

impl SummaryLine {
    pub fn new(item: &Item, quantity: u32) -> Self {
        Self {
            item_id: item.id.clone(),
            name: item.name.clone(),
            quantity,
            price: item.scrip,
            line_total: item.scrip.saturating_mul(u64::from(quantity)),
        }
    }
}

/// Plain-text order summary, the form that goes to the clipboard.
///
/// Built only from the ledger's read operations.
pub fn summary_text(ledger: &OrderLedger, catalog: &Catalog) -> String {
    let lines = ledger.summary_lines(catalog);
    if lines.is_empty() {
        return EMPTY_ORDER.to_string();
    }

    let mut out = String::new();
    write_summary(&mut out, &lines, ledger, catalog).expect("writing to a String cannot fail");
    out
}

fn write_summary(
    out: &mut String,
    lines: &[SummaryLine],
    ledger: &OrderLedger,
    catalog: &Catalog,
) -> fmt::Result {
    for line in lines {
        writeln!(
            out,
            "{} {}× ({} scrip)",
            line.name, line.quantity, line.line_total
        )?;
    }

    let cost = ledger.purchase_cost(catalog);
    writeln!(out, "Total: {} scrip", ledger.grand_total(catalog))?;
    writeln!(out, "Sheets: {}", cost.sheets)?;
    write!(out, "Cost: ${}", cost.cost.to_string_2dp())
}
