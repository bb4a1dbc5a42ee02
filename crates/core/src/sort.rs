use rustc_hash::FxHashSet;

/// 修饰符排序器
///
/// 让语义相同的修饰符组合（`hover:focus:` 与 `focus:hover:`）
/// 产生同一个去重键。
#[derive(Debug)]
pub struct ModifierSorter {
    order_sensitive: FxHashSet<String>,
}

impl ModifierSorter {
    pub fn new(order_sensitive_modifiers: &[String]) -> Self {
        Self {
            order_sensitive: order_sensitive_modifiers.iter().cloned().collect(),
        }
    }

    /// 两段式排序：顺序敏感的修饰符（伪元素、方括号任意修饰符）
    /// 保持相对位置充当屏障，屏障之间的普通修饰符按字母序排序。
    pub fn sort<'a>(&self, modifiers: &'a [String]) -> Vec<&'a str> {
        if modifiers.len() <= 1 {
            return modifiers.iter().map(String::as_str).collect();
        }

        let mut sorted: Vec<&str> = Vec::with_capacity(modifiers.len());
        let mut unsorted: Vec<&str> = Vec::new();

        for modifier in modifiers {
            let position_sensitive =
                modifier.starts_with('[') || self.order_sensitive.contains(modifier.as_str());

            if position_sensitive {
                unsorted.sort_unstable();
                sorted.append(&mut unsorted);
                sorted.push(modifier);
            } else {
                unsorted.push(modifier);
            }
        }

        unsorted.sort_unstable();
        sorted.append(&mut unsorted);

        sorted
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sorter() -> ModifierSorter {
        ModifierSorter::new(&[
            "before".to_string(),
            "after".to_string(),
            "placeholder".to_string(),
        ])
    }

    fn sort(sorter: &ModifierSorter, modifiers: &[&str]) -> Vec<String> {
        let owned: Vec<String> = modifiers.iter().map(|m| m.to_string()).collect();
        sorter.sort(&owned).iter().map(|m| m.to_string()).collect()
    }

    #[test]
    fn test_insensitive_modifiers_sorted_alphabetically() {
        let s = sorter();
        assert_eq!(sort(&s, &["hover", "focus"]), vec!["focus", "hover"]);
        assert_eq!(sort(&s, &["focus", "hover"]), vec!["focus", "hover"]);
    }

    #[test]
    fn test_single_modifier_untouched() {
        let s = sorter();
        assert_eq!(sort(&s, &["hover"]), vec!["hover"]);
        assert!(sort(&s, &[]).is_empty());
    }

    #[test]
    fn test_sensitive_modifier_keeps_position() {
        let s = sorter();
        // before 是屏障：两侧的普通修饰符各自排序，不跨越屏障
        assert_eq!(
            sort(&s, &["hover", "before", "focus"]),
            vec!["hover", "before", "focus"]
        );
        assert_eq!(
            sort(&s, &["md", "hover", "before", "focus", "dark"]),
            vec!["hover", "md", "before", "dark", "focus"]
        );
    }

    #[test]
    fn test_arbitrary_modifier_is_sensitive() {
        let s = sorter();
        assert_eq!(
            sort(&s, &["hover", "[&>*]", "focus"]),
            vec!["hover", "[&>*]", "focus"]
        );
    }

    #[test]
    fn test_equivalent_sets_produce_same_order() {
        let s = sorter();
        assert_eq!(
            sort(&s, &["dark", "hover", "focus"]),
            sort(&s, &["focus", "dark", "hover"])
        );
    }
}
