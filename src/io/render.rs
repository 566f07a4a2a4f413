use std::fmt::{self, Write};

use crate::domain::{
    catalog::Catalog,
    ledger::OrderLedger,
    summary::EMPTY_ORDER,
    view::ViewState,
};

/// Renders the whole order page as plain text: each category with its
/// running total (items hidden when collapsed), the totals block, then the
/// summary when visible.
///
/// Reads everything fresh from the ledger, so it is called after every
/// dispatched intent.
pub fn render_page(catalog: &Catalog, ledger: &OrderLedger, view: &ViewState) -> String {
    let mut out = String::new();
    write_page(&mut out, catalog, ledger, view).expect("writing to a String cannot fail");
    out
}

fn write_page(
    out: &mut String,
    catalog: &Catalog,
    ledger: &OrderLedger,
    view: &ViewState,
) -> fmt::Result {
    for (id, category) in catalog.categories_with_ids() {
        let collapsed = view.is_collapsed(id);
        let marker = if collapsed { "[+]" } else { "[-]" };
        writeln!(
            out,
            "{marker} {} {}: {} scrip",
            category.icon,
            category.name,
            ledger.category_total(category)
        )?;
        if collapsed {
            continue;
        }
        for item in &category.items {
            writeln!(
                out,
                "    {:<24} {:>5} scrip  × {}",
                item.name,
                item.scrip,
                ledger.quantity(&item.id)
            )?;
        }
    }

    let cost = ledger.purchase_cost(catalog);
    writeln!(out)?;
    writeln!(out, "Total scrip: {}", ledger.grand_total(catalog))?;
    writeln!(out, "Sheets: {}", cost.sheets)?;
    writeln!(out, "Cost: ${}", cost.cost.to_string_2dp())?;
    writeln!(out)?;

    if !view.summary_visible() {
        return writeln!(out, "Order summary (hidden)");
    }

    writeln!(out, "Order summary")?;
    let lines = ledger.summary_lines(catalog);
    if lines.is_empty() {
        writeln!(out, "  {EMPTY_ORDER}")?;
    }
    for line in lines {
        writeln!(
            out,
            "  {} {}× ({} scrip)",
            line.name, line.quantity, line.line_total
        )?;
    }
    Ok(())
}
