pub mod catalog_source;
pub mod reader;
pub mod render;
pub mod store;
pub mod writer;
