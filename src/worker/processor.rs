use tracing::debug;

use crate::{
    common::event::Intent,
    domain::{catalog::Catalog, ledger::OrderLedger, view::ViewState},
    worker::handlers::{
        adjust, clear, copy_summary, set_quantity, toggle_category, toggle_summary,
    },
};

/// Everything one calculator session mutates. The catalog is shared and read
/// only; ledger and view belong to the session.
#[derive(Debug)]
pub struct Session<'a> {
    pub catalog: &'a Catalog,
    pub ledger: OrderLedger,
    pub view: ViewState,
}

impl<'a> Session<'a> {
    pub fn new(catalog: &'a Catalog, ledger: OrderLedger) -> Self {
        Self {
            catalog,
            ledger,
            view: ViewState::new(),
        }
    }
}

/// What a dispatched intent did, so the presentation layer can reflect it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Quantity applied to an item, to be written back into its input.
    Quantity { item: String, applied: u32 },
    Cleared,
    CategoryToggled { category: String, collapsed: bool },
    SummaryToggled { visible: bool },
    Copied(String),
    /// The intent named an item or category the catalog does not have.
    Ignored,
}

#[derive(Debug, Default)]
pub struct Processor {}
impl Processor {
    pub fn new() -> Self {
        Self {}
    }

    /// Dispatches one intent to its handler. Called exactly once per user
    /// action; callers re-read totals afterwards.
    pub fn process(&mut self, session: &mut Session<'_>, intent: Intent) -> Outcome {
        debug!(?intent, "dispatching intent");
        let catalog = session.catalog;
        let ledger = &mut session.ledger;
        let view = &mut session.view;

        match intent {
            Intent::SetQuantity { item, raw } => set_quantity::handle(ledger, catalog, item, raw),
            Intent::Adjust { item, delta } => adjust::handle(ledger, catalog, item, delta),
            Intent::Clear => clear::handle(ledger),
            Intent::ToggleCategory { category } => toggle_category::handle(view, catalog, category),
            Intent::ToggleSummary => toggle_summary::handle(view),
            Intent::CopySummary => copy_summary::handle(view, ledger, catalog),
        }
    }
}
