use crate::cache::SwapCache;
use crate::class_map::ClassMap;
use crate::merge::{merge_class_list, MergeContext};
use crate::sort::ModifierSorter;
use crate::value::{join, ClassValue};
use indexmap::IndexMap;
use parking_lot::Mutex;
use std::sync::OnceLock;
use tailmerge_config::{default_config, MergeConfig};

/// 配置编译错误
///
/// 只在引擎构建时出现：配置是随代码一起发布的，表里的悬空引用
/// 是编码错误，应当在启动时快速失败，而不是运行时容忍。
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// 冲突表引用了不存在的 class group
    UnknownClassGroup {
        group_id: String,
        referenced_by: String,
    },
    /// class group 引用了不存在的主题刻度
    UnknownThemeScope { scope: String, group_id: String },
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::UnknownClassGroup {
                group_id,
                referenced_by,
            } => write!(
                f,
                "Conflict table entry '{referenced_by}' references unknown class group '{group_id}'"
            ),
            ConfigError::UnknownThemeScope { scope, group_id } => write!(
                f,
                "Class group '{group_id}' references unknown theme scope '{scope}'"
            ),
        }
    }
}

impl std::error::Error for ConfigError {}

/// 合并引擎
///
/// 配置编译一次之后只读；唯一的可变状态是结果缓存，
/// 用互斥锁保护，多线程宿主下并发调用安全。
#[derive(Debug)]
pub struct TailwindMerge {
    prefix: Option<String>,
    class_map: ClassMap,
    conflicting_class_groups: IndexMap<String, Vec<String>>,
    conflicting_class_group_modifiers: IndexMap<String, Vec<String>>,
    sorter: ModifierSorter,
    cache: Mutex<SwapCache>,
}

impl TailwindMerge {
    /// 从配置编译引擎
    ///
    /// 校验两张冲突表里的所有 group id 和所有主题引用，
    /// 悬空引用立即报错。
    pub fn new(config: MergeConfig) -> Result<Self, ConfigError> {
        validate_conflict_table(&config.conflicting_class_groups, &config)?;
        validate_conflict_table(&config.conflicting_class_group_modifiers, &config)?;

        let class_map = ClassMap::build(&config)?;
        let sorter = ModifierSorter::new(&config.order_sensitive_modifiers);

        Ok(Self {
            prefix: config.prefix,
            class_map,
            conflicting_class_groups: config.conflicting_class_groups,
            conflicting_class_group_modifiers: config.conflicting_class_group_modifiers,
            sorter,
            cache: Mutex::new(SwapCache::new(config.cache_size)),
        })
    }

    /// 用默认 Tailwind 配置构建引擎
    pub fn with_default_config() -> Self {
        Self::new(default_config()).expect("shipped default configuration is valid")
    }

    /// 合并任意嵌套的输入值
    pub fn merge(&self, values: &[ClassValue]) -> String {
        self.merge_class_list(&join(values))
    }

    /// 合并一条已拼接的 class 字符串
    pub fn merge_class_list(&self, class_list: &str) -> String {
        if let Some(hit) = self.cache.lock().get(class_list) {
            return hit;
        }

        let result = merge_class_list(&self.context(), class_list);
        self.cache
            .lock()
            .set(class_list.to_string(), result.clone());
        result
    }

    fn context(&self) -> MergeContext<'_> {
        MergeContext {
            prefix: self.prefix.as_deref(),
            class_map: &self.class_map,
            conflicting_class_groups: &self.conflicting_class_groups,
            conflicting_class_group_modifiers: &self.conflicting_class_group_modifiers,
            sorter: &self.sorter,
        }
    }
}

fn validate_conflict_table(
    table: &IndexMap<String, Vec<String>>,
    config: &MergeConfig,
) -> Result<(), ConfigError> {
    for (key, targets) in table {
        for group_id in std::iter::once(key).chain(targets) {
            if !config.class_groups.contains_key(group_id) {
                return Err(ConfigError::UnknownClassGroup {
                    group_id: group_id.clone(),
                    referenced_by: key.clone(),
                });
            }
        }
    }
    Ok(())
}

/// 进程级默认引擎，首次使用时惰性构建
static DEFAULT_ENGINE: OnceLock<TailwindMerge> = OnceLock::new();

pub fn default_engine() -> &'static TailwindMerge {
    DEFAULT_ENGINE.get_or_init(TailwindMerge::with_default_config)
}

/// 用默认引擎合并任意嵌套的输入值
pub fn merge(values: &[ClassValue]) -> String {
    default_engine().merge(values)
}

/// 用默认引擎合并一条已拼接的 class 字符串
pub fn merge_classes(class_list: &str) -> String {
    default_engine().merge_class_list(class_list)
}

/// 变参合并宏
///
/// # 示例
///
/// ```
/// use tailmerge_core::tw_merge;
///
/// let classes = tw_merge!("px-2 py-1", "p-4");
/// assert_eq!(classes, "p-4");
/// ```
#[macro_export]
macro_rules! tw_merge {
    ($($value:expr),* $(,)?) => {
        $crate::merge(&[$($crate::ClassValue::from($value)),*])
    };
}
