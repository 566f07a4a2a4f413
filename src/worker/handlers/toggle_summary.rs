use crate::{domain::view::ViewState, worker::processor::Outcome};

pub fn handle(view: &mut ViewState) -> Outcome {
    Outcome::SummaryToggled {
        visible: view.toggle_summary(),
    }
}
