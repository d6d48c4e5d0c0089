// src/extractors/mod.rs
pub mod field;
pub mod script;
pub mod section;
pub mod table;

// Re-export key extraction types for convenience
pub use field::resolve;
pub use script::script_snippet;
pub use section::{bullets, section};
pub use table::{parse_tables, Record};
