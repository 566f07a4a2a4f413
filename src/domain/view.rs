use std::collections::BTreeSet;

/// Presentation state that lives next to the ledger but never affects totals.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewState {
    collapsed: BTreeSet<String>,
    summary_visible: bool,
    /// Last text handed to the clipboard.
    pub clipboard: Option<String>,
}

impl Default for ViewState {
    fn default() -> Self {
        Self {
            collapsed: BTreeSet::new(),
            summary_visible: true,
            clipboard: None,
        }
    }
}

impl ViewState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Flips a category between collapsed and expanded; returns `true` when
    /// it ends up collapsed.
    pub fn toggle_category(&mut self, category_id: &str) -> bool {
        if self.collapsed.remove(category_id) {
            false
        } else {
            self.collapsed.insert(category_id.to_string());
            true
        }
    }

    pub fn is_collapsed(&self, category_id: &str) -> bool {
        self.collapsed.contains(category_id)
    }

    pub fn toggle_summary(&mut self) -> bool {
        self.summary_visible = !self.summary_visible;
        self.summary_visible
    }

    pub fn summary_visible(&self) -> bool {
        self.summary_visible
    }
}
