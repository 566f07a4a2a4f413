use crate::common::quantity::RawQuantity;

/// One discrete user intent, sent from the presentation layer (or an intent
/// script) to the worker for dispatch.
#[derive(Debug, Clone, PartialEq)]
pub enum Intent {
    SetQuantity { item: String, raw: RawQuantity },
    Adjust { item: String, delta: i64 },
    Clear,
    ToggleCategory { category: String },
    ToggleSummary,
    CopySummary,
}
