use phf::phf_set;

/// CSS 长度单位集合
///
/// 使用 phf 在编译期生成完美哈希表，零运行时开销
static LENGTH_UNITS: phf::Set<&'static str> = phf_set! {
    "%",

    // Absolute (绝对单位)
    "px", "pt", "pc", "in", "cm", "mm",

    // Font-relative (字体相对单位)
    "em", "rem", "ch", "ex", "cap", "lh", "rlh",

    // Viewport (视口单位)
    "vh", "vw", "vmin", "vmax",
    "svh", "svw", "dvh", "dvw", "lvh", "lvw",

    // Container query (容器查询单位)
    "cqw", "cqh", "cqi", "cqb", "cqmin", "cqmax",
};

/// 图像函数前缀
static IMAGE_FUNCTIONS: phf::Set<&'static str> = phf_set! {
    "url", "image", "image-set", "cross-fade", "element",
    "linear-gradient", "radial-gradient", "conic-gradient",
    "repeating-linear-gradient", "repeating-radial-gradient",
    "repeating-conic-gradient",
};

/// 接受任何非任意值（既不是 `[...]` 也不是 `(...)`）
pub fn is_any_non_arbitrary(value: &str) -> bool {
    !is_arbitrary_value(value) && !is_arbitrary_variable(value)
}

/// 颜色 token：非任意值且不含透明度斜杠的普通串
///
/// `red-500` 可以，`red-500/50` 整体不算 —— 带斜杠的形式留给
/// 去掉后缀修饰符之后的归类重试路径。
pub fn is_color_name(value: &str) -> bool {
    !value.is_empty() && !value.contains('/') && is_any_non_arbitrary(value)
}

/// 数字（整数或小数）
pub fn is_number(value: &str) -> bool {
    !value.is_empty() && value.parse::<f64>().is_ok()
}

/// 整数
pub fn is_integer(value: &str) -> bool {
    !value.is_empty() && value.parse::<i64>().is_ok()
}

/// 百分比（如 "50%"）
pub fn is_percent(value: &str) -> bool {
    value.strip_suffix('%').is_some_and(is_number)
}

/// 分数（如 "1/2"、"11/12"）
pub fn is_fraction(value: &str) -> bool {
    match value.split_once('/') {
        Some((numerator, denominator)) => {
            is_integer(numerator) && is_integer(denominator)
        }
        None => false,
    }
}

/// T 恤尺码（如 "sm"、"xl"、"2xl"、"1.5xl"）
pub fn is_tshirt_size(value: &str) -> bool {
    let size = value
        .strip_suffix("xs")
        .or_else(|| value.strip_suffix("sm"))
        .or_else(|| value.strip_suffix("md"))
        .or_else(|| value.strip_suffix("lg"))
        .or_else(|| value.strip_suffix("xl"));

    match size {
        Some("") => true,
        Some(multiplier) => is_number(multiplier),
        None => false,
    }
}

/// 方括号任意值（如 "[13px]"、"[#ff0000]"）
pub fn is_arbitrary_value(value: &str) -> bool {
    value.len() > 2 && value.starts_with('[') && value.ends_with(']')
}

/// 圆括号 CSS 变量引用（如 "(--my-color)"、"(length:--my-w)"）
pub fn is_arbitrary_variable(value: &str) -> bool {
    value.len() > 2 && value.starts_with('(') && value.ends_with(')')
}

/// 长度标签或裸长度的任意值（如 "[length:--w]"、"[3rem]"）
pub fn is_arbitrary_length(value: &str) -> bool {
    is_arbitrary_with(value, |label| label == "length", is_length_only)
}

/// 数字标签或裸数字的任意值（如 "[number:--n]"、"[450]"）
pub fn is_arbitrary_number(value: &str) -> bool {
    is_arbitrary_with(value, |label| label == "number", is_number)
}

/// 位置标签的任意值（仅按标签判定，裸值有歧义）
pub fn is_arbitrary_position(value: &str) -> bool {
    is_arbitrary_with(value, |label| label == "position" || label == "percentage", |_| false)
}

/// 尺寸标签的任意值
pub fn is_arbitrary_size(value: &str) -> bool {
    is_arbitrary_with(
        value,
        |label| label == "length" || label == "size" || label == "percentage" || label == "bg-size",
        |_| false,
    )
}

/// 图像标签或图像函数的任意值（如 "[url('/img.png')]"）
pub fn is_arbitrary_image(value: &str) -> bool {
    is_arbitrary_with(value, |label| label == "image" || label == "url", is_image)
}

/// 阴影形态的任意值（以两个长度开头，可带 inset 前缀）
pub fn is_arbitrary_shadow(value: &str) -> bool {
    is_arbitrary_with(value, |label| label == "shadow", is_shadow)
}

/// 拆出任意值的标签和内容，分别用谓词判定
///
/// `[length:--w]` 这类带标签的形式只看标签；
/// `[3rem]` 这类裸值形式只看内容。
fn is_arbitrary_with(
    value: &str,
    label_test: impl Fn(&str) -> bool,
    value_test: impl Fn(&str) -> bool,
) -> bool {
    let Some(inner) = value
        .strip_prefix('[')
        .and_then(|rest| rest.strip_suffix(']'))
    else {
        return false;
    };

    if inner.is_empty() {
        return false;
    }

    if let Some((label, rest)) = inner.split_once(':') {
        if !rest.is_empty() && is_label(label) {
            return label_test(label);
        }
    }

    value_test(inner)
}

/// 标签形如 `\w[\w-]*`：字母数字或下划线开头，可含连字符
fn is_label(value: &str) -> bool {
    let mut chars = value.chars();
    match chars.next() {
        Some(first) if first.is_ascii_alphanumeric() || first == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
}

/// 裸长度值："0"、数字+单位、或 calc()/min()/max()/clamp() 表达式
fn is_length_only(value: &str) -> bool {
    if value == "0" {
        return true;
    }

    for function in ["calc(", "min(", "max(", "clamp("] {
        if value.starts_with(function) && value.ends_with(')') {
            return true;
        }
    }

    // 从末尾剥出单位，剩余部分必须是数字
    let Some(unit_start) = value
        .rfind(|c: char| c.is_ascii_digit() || c == '.')
        .map(|i| i + 1)
    else {
        return false;
    };
    let (number, unit) = value.split_at(unit_start);
    !unit.is_empty() && LENGTH_UNITS.contains(unit) && is_number(number)
}

/// 图像值：以已知图像函数开头
fn is_image(value: &str) -> bool {
    match value.split_once('(') {
        Some((function, _)) => IMAGE_FUNCTIONS.contains(function),
        None => false,
    }
}

/// 阴影值：`_` 分隔（任意值中 `_` 代表空格），前两段是长度，
/// 可带 `inset_` 前缀
fn is_shadow(value: &str) -> bool {
    let value = value.strip_prefix("inset_").unwrap_or(value);
    let mut parts = value.split('_');

    matches!(
        (parts.next(), parts.next()),
        (Some(first), Some(second)) if is_length_only(first) && is_length_only(second)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_number() {
        assert!(is_number("4"));
        assert!(is_number("1.5"));
        assert!(is_number("-2"));
        assert!(!is_number(""));
        assert!(!is_number("px"));
        assert!(!is_number("1/2"));
    }

    #[test]
    fn test_is_integer() {
        assert!(is_integer("12"));
        assert!(is_integer("-3"));
        assert!(!is_integer("1.5"));
        assert!(!is_integer("auto"));
    }

    #[test]
    fn test_is_percent() {
        assert!(is_percent("50%"));
        assert!(is_percent("0.5%"));
        assert!(!is_percent("50"));
        assert!(!is_percent("%"));
    }

    #[test]
    fn test_is_fraction() {
        assert!(is_fraction("1/2"));
        assert!(is_fraction("11/12"));
        assert!(!is_fraction("1/"));
        assert!(!is_fraction("/2"));
        assert!(!is_fraction("full"));
    }

    #[test]
    fn test_is_tshirt_size() {
        assert!(is_tshirt_size("xs"));
        assert!(is_tshirt_size("sm"));
        assert!(is_tshirt_size("md"));
        assert!(is_tshirt_size("lg"));
        assert!(is_tshirt_size("xl"));
        assert!(is_tshirt_size("2xl"));
        assert!(is_tshirt_size("1.5xl"));
        assert!(!is_tshirt_size("base"));
        assert!(!is_tshirt_size("xxl"));
    }

    #[test]
    fn test_is_arbitrary_value() {
        assert!(is_arbitrary_value("[13px]"));
        assert!(is_arbitrary_value("[#ff0000]"));
        assert!(!is_arbitrary_value("13px"));
        assert!(!is_arbitrary_value("[]"));
    }

    #[test]
    fn test_is_arbitrary_variable() {
        assert!(is_arbitrary_variable("(--my-color)"));
        assert!(!is_arbitrary_variable("[--my-color]"));
        assert!(!is_arbitrary_variable("()"));
    }

    #[test]
    fn test_is_arbitrary_length() {
        assert!(is_arbitrary_length("[3rem]"));
        assert!(is_arbitrary_length("[0]"));
        assert!(is_arbitrary_length("[calc(100%-1rem)]"));
        assert!(is_arbitrary_length("[length:--w]"));
        assert!(!is_arbitrary_length("[#ff0000]"));
        assert!(!is_arbitrary_length("[number:--n]"));
    }

    #[test]
    fn test_is_arbitrary_number() {
        assert!(is_arbitrary_number("[450]"));
        assert!(is_arbitrary_number("[number:--n]"));
        assert!(!is_arbitrary_number("[3rem]"));
    }

    #[test]
    fn test_is_arbitrary_image() {
        assert!(is_arbitrary_image("[url('/img.png')]"));
        assert!(is_arbitrary_image("[linear-gradient(to_right,red,blue)]"));
        assert!(is_arbitrary_image("[image:--hero]"));
        assert!(!is_arbitrary_image("[#ff0000]"));
    }

    #[test]
    fn test_is_arbitrary_shadow() {
        assert!(is_arbitrary_shadow("[0_35px_60px_-15px_rgba(0,0,0,0.3)]"));
        assert!(is_arbitrary_shadow("[inset_0_1px_0_red]"));
        assert!(!is_arbitrary_shadow("[red]"));
    }

    #[test]
    fn test_is_arbitrary_position() {
        assert!(is_arbitrary_position("[position:center_top]"));
        assert!(is_arbitrary_position("[percentage:25%_75%]"));
        // 裸值有歧义，不判定为位置
        assert!(!is_arbitrary_position("[center_top]"));
    }

    #[test]
    fn test_is_color_name() {
        assert!(is_color_name("red-500"));
        assert!(is_color_name("transparent"));
        assert!(!is_color_name("red-500/50"));
        assert!(!is_color_name("[#ff0000]"));
        assert!(!is_color_name(""));
    }

    #[test]
    fn test_is_any_non_arbitrary() {
        assert!(is_any_non_arbitrary("red-500"));
        assert!(!is_any_non_arbitrary("[#ff0000]"));
        assert!(!is_any_non_arbitrary("(--my-color)"));
    }
}
