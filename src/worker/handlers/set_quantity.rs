use tracing::debug;

use crate::{
    common::quantity::RawQuantity,
    domain::{catalog::Catalog, ledger::OrderLedger},
    worker::processor::Outcome,
};

pub fn handle(
    ledger: &mut OrderLedger,
    catalog: &Catalog,
    item: String,
    raw: RawQuantity,
) -> Outcome {
    // nothing to price, so nothing to store
    if !catalog.contains_item(&item) {
        debug!(%item, "ignoring quantity for unknown item");
        return Outcome::Ignored;
    }

    let applied = ledger.set_quantity(catalog, &item, raw);
    Outcome::Quantity { item, applied }
}
