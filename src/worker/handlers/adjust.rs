use tracing::debug;

use crate::{
    domain::{catalog::Catalog, ledger::OrderLedger},
    worker::processor::Outcome,
};

pub fn handle(ledger: &mut OrderLedger, catalog: &Catalog, item: String, delta: i64) -> Outcome {
    if !catalog.contains_item(&item) {
        debug!(%item, delta, "ignoring adjustment for unknown item");
        return Outcome::Ignored;
    }

    let applied = ledger.adjust(catalog, &item, delta);
    Outcome::Quantity { item, applied }
}
