use crate::{domain::ledger::OrderLedger, worker::processor::Outcome};

pub fn handle(ledger: &mut OrderLedger) -> Outcome {
    ledger.clear();
    Outcome::Cleared
}
