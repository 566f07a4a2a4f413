pub mod adjust;
pub mod clear;
pub mod copy_summary;
pub mod set_quantity;
pub mod toggle_category;
pub mod toggle_summary;
