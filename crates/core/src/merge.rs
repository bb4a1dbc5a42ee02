use crate::class_map::ClassMap;
use crate::sort::ModifierSorter;
use indexmap::IndexMap;
use rustc_hash::FxHashSet;
use tailmerge_parse::parse_class_name;

/// 合并所需的只读配置视图
pub(crate) struct MergeContext<'a> {
    pub prefix: Option<&'a str>,
    pub class_map: &'a ClassMap,
    pub conflicting_class_groups: &'a IndexMap<String, Vec<String>>,
    pub conflicting_class_group_modifiers: &'a IndexMap<String, Vec<String>>,
    pub sorter: &'a ModifierSorter,
}

/// 合并一条已拼接的 class 字符串
///
/// 从右到左扫描，右侧（后出现）的类先注册去重键，
/// 相同键的左侧类被跳过 —— 后者胜出。
/// 无法归类的 token 永远保留：宁可多留也不丢掉调用方可能
/// 真实需要的 CSS 类。
pub(crate) fn merge_class_list(context: &MergeContext, class_list: &str) -> String {
    let class_names: Vec<&str> = class_list.split_whitespace().collect();

    // 幸存 token 先倒序收集，最后翻转恢复原始从左到右顺序
    let mut survivors: Vec<&str> = Vec::with_capacity(class_names.len());
    let mut groups_in_conflict: FxHashSet<String> = FxHashSet::default();

    for &original in class_names.iter().rev() {
        let parsed = parse_class_name(original, context.prefix);

        // 外部类原样透传，不参与去重
        if parsed.is_external {
            survivors.push(original);
            continue;
        }

        // 先用完整基础类名归类，失败后用 `/` 之前的子串重试；
        // 重试成功才启用修饰符冲突表（text-lg/7 这类写法）
        let mut has_postfix_modifier = false;
        let mut class_group_id = context.class_map.class_group_id(&parsed.base_class_name);

        if class_group_id.is_none() {
            if let Some(before_postfix) = parsed.base_before_postfix() {
                class_group_id = context.class_map.class_group_id(before_postfix);
                has_postfix_modifier = class_group_id.is_some();
            }
        }

        let Some(class_group_id) = class_group_id else {
            survivors.push(original);
            continue;
        };

        // 修饰符签名：排序后用 `:` 连接，重要性标记追加 `!`
        let variant_modifier = context.sorter.sort(&parsed.modifiers).join(":");
        let modifier_id = if parsed.has_important_modifier {
            format!("{variant_modifier}!")
        } else {
            variant_modifier
        };

        let class_id = format!("{modifier_id}{class_group_id}");
        if !groups_in_conflict.insert(class_id) {
            // 更靠右的同组同修饰符类已经胜出
            continue;
        }

        // 胜出的类同时压制它冲突表里的所有 group
        for conflict_group in conflicting_groups(context, &class_group_id, has_postfix_modifier) {
            groups_in_conflict.insert(format!("{modifier_id}{conflict_group}"));
        }

        survivors.push(original);
    }

    survivors.reverse();
    survivors.join(" ")
}

/// group 的冲突列表；携带后缀修饰符时追加修饰符专属冲突
fn conflicting_groups<'a>(
    context: &'a MergeContext,
    class_group_id: &str,
    has_postfix_modifier: bool,
) -> impl Iterator<Item = &'a String> {
    let base = context
        .conflicting_class_groups
        .get(class_group_id)
        .map(|groups| groups.iter())
        .unwrap_or_default();

    let modifier_specific = if has_postfix_modifier {
        context
            .conflicting_class_group_modifiers
            .get(class_group_id)
            .map(|groups| groups.iter())
            .unwrap_or_default()
    } else {
        Default::default()
    };

    base.chain(modifier_specific)
}
