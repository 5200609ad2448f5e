pub mod alias_index;
pub mod config;
pub mod error;
pub mod fill;
pub mod fuzzy;
pub mod grid;
pub mod loader;
pub mod qa_index;
pub mod table;
