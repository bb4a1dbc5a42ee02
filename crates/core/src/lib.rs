pub mod cache;
pub mod class_map;
pub mod engine;
pub mod merge;
pub mod sort;
pub mod value;

// Re-export commonly used types
pub use engine::{default_engine, merge, merge_classes, ConfigError, TailwindMerge};
pub use value::{join, ClassValue};

// 配置类型来自 tailmerge-config，一并导出方便调用方构造自定义引擎
pub use tailmerge_config::{default_config, extend_from_json, ClassGroupDef, MergeConfig};
