use tracing::debug;

use crate::{
    domain::{catalog::Catalog, view::ViewState},
    worker::processor::Outcome,
};

/// Collapses or expands a category by its derived id. The category total
/// stays visible either way; only its items are hidden.
pub fn handle(view: &mut ViewState, catalog: &Catalog, category: String) -> Outcome {
    if catalog.category(&category).is_none() {
        debug!(%category, "ignoring toggle for unknown category");
        return Outcome::Ignored;
    }

    let collapsed = view.toggle_category(&category);
    Outcome::CategoryToggled {
        category,
        collapsed,
    }
}
