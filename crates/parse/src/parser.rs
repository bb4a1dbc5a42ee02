use crate::types::ParsedClassName;

/// 解析单个 class token（不含空白）
///
/// 支持的格式：
/// - 简单类：`p-4`, `flex`, `bg-red-500`
/// - 修饰符：`hover:bg-blue-500`, `md:hover:p-4`
/// - 任意值：`w-[13px]`, `bg-[#ff0000]`, `data-[state=open]:p-2`
/// - CSS 变量：`bg-(--my-color)`
/// - 后缀修饰符：`w-1/2`, `text-lg/7`
/// - 重要性：`!p-4`, `p-4!`
///
/// 任何字符串都是合法输入，永远不会失败。
/// 配置了 `prefix` 时，不以 `prefix:` 开头的 token 整体标记为外部类名。
///
/// # 示例
///
/// ```
/// use tailmerge_parse::parse_class_name;
///
/// let parsed = parse_class_name("md:hover:!p-4", None);
/// assert_eq!(parsed.modifiers, vec!["md", "hover"]);
/// assert_eq!(parsed.base_class_name, "p-4");
/// assert!(parsed.has_important_modifier);
/// ```
pub fn parse_class_name(class_name: &str, prefix: Option<&str>) -> ParsedClassName {
    // 1. 前缀检查：不带前缀的 token 原样透传
    let inner = match prefix {
        Some(prefix) => {
            match class_name
                .strip_prefix(prefix)
                .and_then(|rest| rest.strip_prefix(':'))
            {
                Some(rest) => rest,
                None => return ParsedClassName::external(class_name),
            }
        }
        None => class_name,
    };

    // 2. 单趟扫描：零嵌套深度的 `:` 是修饰符分隔符，`/` 是候选后缀位置
    let mut modifiers = Vec::new();
    let mut bracket_depth = 0i32;
    let mut paren_depth = 0i32;
    let mut modifier_start = 0usize;
    let mut postfix_position: Option<usize> = None;

    // 分隔符都是 ASCII，按字节扫描即可，字节索引落在字符边界上
    for (index, byte) in inner.bytes().enumerate() {
        if bracket_depth == 0 && paren_depth == 0 {
            match byte {
                b':' => {
                    modifiers.push(inner[modifier_start..index].to_string());
                    modifier_start = index + 1;
                    continue;
                }
                b'/' => {
                    postfix_position = Some(index);
                    continue;
                }
                _ => {}
            }
        }

        match byte {
            b'[' => bracket_depth += 1,
            b']' => bracket_depth -= 1,
            b'(' => paren_depth += 1,
            b')' => paren_depth -= 1,
            _ => {}
        }
    }

    // 3. 剩余部分是基础类名，剥离重要性标记
    let base_with_important = &inner[modifier_start..];
    let (base_class_name, has_important_modifier, stripped_leading) =
        strip_important_modifier(base_with_important);

    // 4. 把 `/` 位置换算到基础类名内部，越界或落在修饰符里则丢弃
    let maybe_postfix_modifier_position = postfix_position.and_then(|position| {
        if position <= modifier_start {
            return None;
        }
        let mut relative = position - modifier_start;
        if stripped_leading {
            relative -= 1;
        }
        if relative > 0 && relative < base_class_name.len() {
            Some(relative)
        } else {
            None
        }
    });

    ParsedClassName {
        modifiers,
        has_important_modifier,
        base_class_name: base_class_name.to_string(),
        maybe_postfix_modifier_position,
        is_external: false,
    }
}

/// 剥离 `!` 标记
///
/// 尾随形式优先（`p-4!`），其次是前导形式（`!p-4`）。
/// 返回 (剥离后的类名, 是否存在标记, 是否剥离了前导字符)
fn strip_important_modifier(base: &str) -> (&str, bool, bool) {
    if let Some(stripped) = base.strip_suffix('!') {
        return (stripped, true, false);
    }
    if let Some(stripped) = base.strip_prefix('!') {
        return (stripped, true, true);
    }
    (base, false, false)
}
