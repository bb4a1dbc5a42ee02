pub mod default;
pub mod loader;
pub mod types;
pub mod validators;

// Re-export main types
pub use default::default_config;
pub use loader::extend_from_json;
pub use types::{lit, literals, nested, theme, validator, ClassGroupDef, MergeConfig, ValidatorFn};
