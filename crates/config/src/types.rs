use indexmap::IndexMap;

/// 值校验函数：判断一个类名后缀是否属于某个 class group
pub type ValidatorFn = fn(&str) -> bool;

/// class group 的单条定义
///
/// 一张声明式表同时驱动字面量匹配和自定义谓词匹配，
/// 用显式变体代替运行时类型检查。
#[derive(Debug, Clone)]
pub enum ClassGroupDef {
    /// 字面量后缀（空字符串表示前缀本身就是完整类名，如 `rounded`）
    Literal(String),

    /// 谓词函数，在无字面量匹配时对剩余后缀逐个尝试
    Validator(ValidatorFn),

    /// 主题刻度引用（如 "spacing"、"color"），构建时展开
    ThemeRef(String),

    /// 嵌套定义：下一段路径 -> 子定义列表
    Nested(IndexMap<String, Vec<ClassGroupDef>>),
}

/// 合并引擎的完整配置
///
/// 构建一次之后只读；引擎编译时校验冲突表和主题引用。
#[derive(Debug, Clone)]
pub struct MergeConfig {
    /// 结果缓存容量（0 表示禁用缓存）
    pub cache_size: usize,

    /// 可选的类名前缀；配置后不带 `prefix:` 的 token 原样透传
    pub prefix: Option<String>,

    /// 主题刻度：scope 名 -> 定义列表
    pub theme: IndexMap<String, Vec<ClassGroupDef>>,

    /// class group：group id -> 定义列表
    pub class_groups: IndexMap<String, Vec<ClassGroupDef>>,

    /// 冲突表：group id -> 它使其失效的 group id 列表
    pub conflicting_class_groups: IndexMap<String, Vec<String>>,

    /// 仅在携带后缀修饰符时生效的冲突表（如 `text-lg/7` 覆盖 leading）
    pub conflicting_class_group_modifiers: IndexMap<String, Vec<String>>,

    /// 顺序敏感的修饰符（伪元素等，交换顺序会改变 CSS 语义）
    pub order_sensitive_modifiers: Vec<String>,
}

impl MergeConfig {
    /// 创建一个空配置（测试和自定义配置的起点）
    pub fn empty() -> Self {
        Self {
            cache_size: 0,
            prefix: None,
            theme: IndexMap::new(),
            class_groups: IndexMap::new(),
            conflicting_class_groups: IndexMap::new(),
            conflicting_class_group_modifiers: IndexMap::new(),
            order_sensitive_modifiers: Vec::new(),
        }
    }
}

/// 字面量定义
pub fn lit(value: impl Into<String>) -> ClassGroupDef {
    ClassGroupDef::Literal(value.into())
}

/// 谓词定义
pub fn validator(f: ValidatorFn) -> ClassGroupDef {
    ClassGroupDef::Validator(f)
}

/// 主题刻度引用
pub fn theme(scope: impl Into<String>) -> ClassGroupDef {
    ClassGroupDef::ThemeRef(scope.into())
}

/// 单键嵌套定义（最常见的形态，如 `{"p": spacing_scale}`）
pub fn nested(key: impl Into<String>, defs: Vec<ClassGroupDef>) -> ClassGroupDef {
    let mut map = IndexMap::new();
    map.insert(key.into(), defs);
    ClassGroupDef::Nested(map)
}

/// 把一组字面量展开成定义列表
pub fn literals(values: &[&str]) -> Vec<ClassGroupDef> {
    values.iter().map(|v| lit(*v)).collect()
}
