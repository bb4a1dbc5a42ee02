pub mod parser;
pub mod types;

// Re-export main types
pub use parser::parse_class_name;
pub use types::ParsedClassName;
