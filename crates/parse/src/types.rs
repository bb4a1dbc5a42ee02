use serde::{Deserialize, Serialize};

/// 单个 class token 的结构化表示
///
/// 由 `parse_class_name` 生成，每次合并调用时创建并丢弃，
/// 没有持久身份。
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ParsedClassName {
    /// 修饰符列表，按出现顺序（如 `["hover", "sm"]`）
    pub modifiers: Vec<String>,

    /// 重要性标记（前导或尾随 `!`）
    pub has_important_modifier: bool,

    /// 去除修饰符和 `!` 之后的基础类名
    pub base_class_name: String,

    /// 零嵌套深度的 `/` 在 base_class_name 中的位置
    ///
    /// 当完整类名无法归类时，用 `/` 之前的子串重试归类
    /// （支持 `w-1/2` 与带透明度的任意值两种写法）。
    pub maybe_postfix_modifier_position: Option<usize>,

    /// 是否为外部类名（配置了 prefix 但 token 不带该前缀）
    ///
    /// 外部类名原样透传，永远不参与去重。
    pub is_external: bool,
}

impl ParsedClassName {
    /// 创建一个透传的外部类名
    pub fn external(class_name: impl Into<String>) -> Self {
        Self {
            modifiers: Vec::new(),
            has_important_modifier: false,
            base_class_name: class_name.into(),
            maybe_postfix_modifier_position: None,
            is_external: true,
        }
    }

    /// `/` 之前的子串（用于归类重试）
    pub fn base_before_postfix(&self) -> Option<&str> {
        self.maybe_postfix_modifier_position
            .map(|pos| &self.base_class_name[..pos])
    }
}
