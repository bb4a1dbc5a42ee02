use crate::engine::ConfigError;
use indexmap::IndexMap;
use tailmerge_config::{ClassGroupDef, MergeConfig, ValidatorFn};

/// class 名前缀树
///
/// 每个节点对应连字符分隔路径中的一段。配置编译时构建一次，
/// 之后只读，所有合并调用共享。
#[derive(Debug, Default)]
pub struct ClassMap {
    /// 下一段路径 -> 子节点
    next_part: IndexMap<String, ClassMap>,

    /// 无字面量匹配时，对剩余后缀按顺序尝试的谓词
    validators: Vec<GroupValidator>,

    /// 此节点是一个完整类名时的 group id
    class_group_id: Option<String>,
}

#[derive(Debug)]
struct GroupValidator {
    class_group_id: String,
    validator: ValidatorFn,
}

impl ClassMap {
    /// 把配置编译成前缀树
    ///
    /// 悬空的主题引用在这里快速失败（配置是编码错误，不是运行时数据问题）。
    pub fn build(config: &MergeConfig) -> Result<Self, ConfigError> {
        let mut root = ClassMap::default();

        for (group_id, defs) in &config.class_groups {
            root.insert_defs(defs, group_id, &config.theme)?;
        }

        Ok(root)
    }

    fn insert_defs(
        &mut self,
        defs: &[ClassGroupDef],
        group_id: &str,
        theme: &IndexMap<String, Vec<ClassGroupDef>>,
    ) -> Result<(), ConfigError> {
        for def in defs {
            match def {
                ClassGroupDef::Literal(suffix) => {
                    // 空字面量表示当前路径本身就是完整类名
                    let node = if suffix.is_empty() {
                        &mut *self
                    } else {
                        self.descend(suffix)
                    };
                    node.class_group_id = Some(group_id.to_string());
                }
                ClassGroupDef::Validator(validator) => {
                    self.validators.push(GroupValidator {
                        class_group_id: group_id.to_string(),
                        validator: *validator,
                    });
                }
                ClassGroupDef::ThemeRef(scope) => {
                    let scale = theme.get(scope).ok_or_else(|| {
                        ConfigError::UnknownThemeScope {
                            scope: scope.clone(),
                            group_id: group_id.to_string(),
                        }
                    })?;
                    self.insert_defs(scale, group_id, theme)?;
                }
                ClassGroupDef::Nested(map) => {
                    for (key, sub_defs) in map {
                        self.descend(key).insert_defs(sub_defs, group_id, theme)?;
                    }
                }
            }
        }

        Ok(())
    }

    /// 沿连字符路径下行，按需创建节点
    fn descend(&mut self, path: &str) -> &mut ClassMap {
        let mut node = self;
        for part in path.split('-') {
            node = node.next_part.entry(part.to_string()).or_default();
        }
        node
    }

    /// 归类一个基础类名（不含修饰符）
    ///
    /// 返回 group id，无法归类时返回 None（调用方原样透传）。
    pub fn class_group_id(&self, base_class_name: &str) -> Option<String> {
        // 任意 CSS 属性声明：[mask-type:luminance] 归入合成 group，
        // 让同一属性的两条任意声明依然互相冲突
        if let Some(id) = arbitrary_property_group_id(base_class_name) {
            return Some(id);
        }

        let mut parts: Vec<&str> = base_class_name.split('-').collect();

        // 负值类（如 -inset-1）产生前导空段，丢弃
        if parts.len() > 1 && parts[0].is_empty() {
            parts.remove(0);
        }

        self.lookup(&parts).map(|id| id.to_string())
    }

    /// 递归下行，带回溯：更深的字面量匹配优先，
    /// 失败后在当前节点对剩余后缀尝试谓词
    fn lookup(&self, parts: &[&str]) -> Option<&str> {
        let Some((current, rest)) = parts.split_first() else {
            return self.class_group_id.as_deref();
        };

        if let Some(next) = self.next_part.get(*current) {
            if let Some(id) = next.lookup(rest) {
                return Some(id);
            }
        }

        if self.validators.is_empty() {
            return None;
        }

        let class_rest = parts.join("-");
        self.validators
            .iter()
            .find(|entry| (entry.validator)(&class_rest))
            .map(|entry| entry.class_group_id.as_str())
    }
}

/// `[property:value]` 形式的任意属性声明 -> "arbitrary..property"
fn arbitrary_property_group_id(class_name: &str) -> Option<String> {
    let inner = class_name.strip_prefix('[')?.strip_suffix(']')?;
    let property = &inner[..inner.find(':')?];

    if property.is_empty() {
        None
    } else {
        Some(format!("arbitrary..{property}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tailmerge_config::default_config;

    fn default_map() -> ClassMap {
        ClassMap::build(&default_config()).expect("default config compiles")
    }

    #[test]
    fn test_literal_lookup() {
        let map = default_map();
        assert_eq!(map.class_group_id("flex").as_deref(), Some("display"));
        assert_eq!(map.class_group_id("hidden").as_deref(), Some("display"));
        assert_eq!(map.class_group_id("container").as_deref(), Some("container"));
    }

    #[test]
    fn test_validator_lookup() {
        let map = default_map();
        assert_eq!(map.class_group_id("p-4").as_deref(), Some("p"));
        assert_eq!(map.class_group_id("px-2").as_deref(), Some("px"));
        assert_eq!(map.class_group_id("w-1/2").as_deref(), Some("w"));
        assert_eq!(map.class_group_id("z-10").as_deref(), Some("z"));
    }

    #[test]
    fn test_deeper_literal_wins_over_validator() {
        let map = default_map();
        // "text-left" 是字面量（text-alignment），
        // 而 "text-red-500" 走 text-color 的颜色谓词
        assert_eq!(
            map.class_group_id("text-left").as_deref(),
            Some("text-alignment")
        );
        assert_eq!(
            map.class_group_id("text-red-500").as_deref(),
            Some("text-color")
        );
        assert_eq!(map.class_group_id("text-lg").as_deref(), Some("font-size"));
        // 带透明度斜杠的完整串不落进颜色组，调用方剥掉后缀修饰符后重试
        assert_eq!(map.class_group_id("text-lg/7"), None);
        assert_eq!(map.class_group_id("text-red-500/50"), None);
    }

    #[test]
    fn test_semantic_overload_under_shared_prefix() {
        let map = default_map();
        assert_eq!(map.class_group_id("border").as_deref(), Some("border-w"));
        assert_eq!(map.class_group_id("border-2").as_deref(), Some("border-w"));
        assert_eq!(
            map.class_group_id("border-solid").as_deref(),
            Some("border-style")
        );
        assert_eq!(
            map.class_group_id("border-red-500").as_deref(),
            Some("border-color")
        );
        assert_eq!(
            map.class_group_id("border-collapse").as_deref(),
            Some("border-collapse")
        );
    }

    #[test]
    fn test_shadow_overload() {
        let map = default_map();
        assert_eq!(map.class_group_id("shadow").as_deref(), Some("shadow"));
        assert_eq!(map.class_group_id("shadow-md").as_deref(), Some("shadow"));
        assert_eq!(
            map.class_group_id("shadow-red-500").as_deref(),
            Some("shadow-color")
        );
        assert_eq!(
            map.class_group_id("shadow-[0_35px_60px_-15px_rgba(0,0,0,0.3)]")
                .as_deref(),
            Some("shadow")
        );
    }

    #[test]
    fn test_negative_value() {
        let map = default_map();
        assert_eq!(map.class_group_id("-inset-1").as_deref(), Some("inset"));
        assert_eq!(map.class_group_id("-m-4").as_deref(), Some("m"));
    }

    #[test]
    fn test_arbitrary_property() {
        let map = default_map();
        assert_eq!(
            map.class_group_id("[mask-type:luminance]").as_deref(),
            Some("arbitrary..mask-type")
        );
        // 无冒号的方括号串不是属性声明
        assert_eq!(map.class_group_id("[foo]"), None);
    }

    #[test]
    fn test_unknown_class() {
        let map = default_map();
        assert_eq!(map.class_group_id("my-custom-class"), None);
        assert_eq!(map.class_group_id(""), None);
    }

    #[test]
    fn test_nested_path() {
        let map = default_map();
        assert_eq!(
            map.class_group_id("bg-gradient-to-r").as_deref(),
            Some("bg-image")
        );
        assert_eq!(
            map.class_group_id("col-span-2").as_deref(),
            Some("col-start-end")
        );
        assert_eq!(map.class_group_id("bg-repeat-x").as_deref(), Some("bg-repeat"));
    }

    #[test]
    fn test_dangling_theme_ref_fails_fast() {
        let mut config = tailmerge_config::MergeConfig::empty();
        config.class_groups.insert(
            "p".to_string(),
            vec![tailmerge_config::nested(
                "p",
                vec![tailmerge_config::theme("missing-scope")],
            )],
        );

        let result = ClassMap::build(&config);
        assert!(result.is_err());
    }
}
