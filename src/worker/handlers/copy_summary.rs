use tracing::info;

use crate::{
    domain::{catalog::Catalog, ledger::OrderLedger, summary::summary_text, view::ViewState},
    worker::processor::Outcome,
};

/// Puts the plain-text summary on the (session) clipboard.
pub fn handle(view: &mut ViewState, ledger: &OrderLedger, catalog: &Catalog) -> Outcome {
    let text = summary_text(ledger, catalog);
    info!(items = ledger.len(), "order summary copied");
    view.clipboard = Some(text.clone());
    Outcome::Copied(text)
}
