pub mod catalog;
pub mod ledger;
pub mod purchase;
pub mod summary;
pub mod view;
