use crate::types::{ClassGroupDef, MergeConfig};
use indexmap::IndexMap;
use serde::Deserialize;

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
struct ConfigExtension {
    cache_size: Option<usize>,
    prefix: Option<String>,
    theme: IndexMap<String, Vec<DefJson>>,
    class_groups: IndexMap<String, Vec<DefJson>>,
    conflicting_class_groups: IndexMap<String, Vec<String>>,
    conflicting_class_group_modifiers: IndexMap<String, Vec<String>>,
    order_sensitive_modifiers: Vec<String>,
}

/// JSON 里的 class group 定义
///
/// 校验函数是代码而不是数据，无法用 JSON 表达；
/// 扩展只接受字面量和嵌套表。
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum DefJson {
    Literal(String),
    Nested(IndexMap<String, Vec<DefJson>>),
}

impl DefJson {
    fn into_def(self) -> ClassGroupDef {
        match self {
            DefJson::Literal(value) => ClassGroupDef::Literal(value),
            DefJson::Nested(map) => ClassGroupDef::Nested(
                map.into_iter()
                    .map(|(key, defs)| {
                        (key, defs.into_iter().map(DefJson::into_def).collect())
                    })
                    .collect(),
            ),
        }
    }
}

/// 用 JSON 扩展一份配置
///
/// 追加语义：主题刻度、class group 和冲突列表都是追加到已有条目之后，
/// `cacheSize`/`prefix` 是整体覆盖。所有字段都可省略。
///
/// JSON 格式示例：
/// ```json
/// {
///     "theme": { "color": ["brand", "accent"] },
///     "classGroups": { "card": [{ "card": ["", "sm", "lg"] }] },
///     "conflictingClassGroups": { "card": ["shadow"] }
/// }
/// ```
pub fn extend_from_json(
    config: &mut MergeConfig,
    json_str: &str,
) -> Result<(), serde_json::Error> {
    let extension: ConfigExtension = serde_json::from_str(json_str)?;

    if let Some(cache_size) = extension.cache_size {
        config.cache_size = cache_size;
    }
    if let Some(prefix) = extension.prefix {
        config.prefix = Some(prefix);
    }

    for (scope, defs) in extension.theme {
        config
            .theme
            .entry(scope)
            .or_default()
            .extend(defs.into_iter().map(DefJson::into_def));
    }

    for (group_id, defs) in extension.class_groups {
        config
            .class_groups
            .entry(group_id)
            .or_default()
            .extend(defs.into_iter().map(DefJson::into_def));
    }

    for (group_id, targets) in extension.conflicting_class_groups {
        config
            .conflicting_class_groups
            .entry(group_id)
            .or_default()
            .extend(targets);
    }

    for (group_id, targets) in extension.conflicting_class_group_modifiers {
        config
            .conflicting_class_group_modifiers
            .entry(group_id)
            .or_default()
            .extend(targets);
    }

    config
        .order_sensitive_modifiers
        .extend(extension.order_sensitive_modifiers);

    Ok(())
}
