/// 类名输入值
///
/// 动态语言里「字符串 / 数字 / 假值 / 数组 / 对象」的条件组合写法，
/// 在这里收敛为一个封闭和类型。假值（Null、空串、0、false 条目）
/// 在拼接时被静默过滤。
#[derive(Debug, Clone, PartialEq)]
pub enum ClassValue {
    /// 空值（None / null / false 的对应物）
    Null,

    /// 字面类名串，可含空白分隔的多个 token
    Str(String),

    /// 数字（0 视为假值）
    Num(f64),

    /// 嵌套列表，递归展平
    List(Vec<ClassValue>),

    /// 条件表：仅 true 条目的键参与拼接
    Map(Vec<(String, bool)>),
}

impl ClassValue {
    fn append_to(&self, out: &mut String) {
        match self {
            ClassValue::Null => {}
            ClassValue::Str(value) => {
                if !value.is_empty() {
                    push_word(out, value);
                }
            }
            ClassValue::Num(value) => {
                if *value != 0.0 && !value.is_nan() {
                    push_word(out, &value.to_string());
                }
            }
            ClassValue::List(items) => {
                for item in items {
                    item.append_to(out);
                }
            }
            ClassValue::Map(entries) => {
                for (class_name, enabled) in entries {
                    if *enabled && !class_name.is_empty() {
                        push_word(out, class_name);
                    }
                }
            }
        }
    }
}

fn push_word(out: &mut String, word: &str) {
    if !out.is_empty() {
        out.push(' ');
    }
    out.push_str(word);
}

/// 展平任意嵌套的输入，拼成一条空格分隔的 class 字符串
///
/// 全假值输入得到空串。
pub fn join(values: &[ClassValue]) -> String {
    let mut out = String::new();
    for value in values {
        value.append_to(&mut out);
    }
    out
}

impl From<&str> for ClassValue {
    fn from(value: &str) -> Self {
        ClassValue::Str(value.to_string())
    }
}

impl From<String> for ClassValue {
    fn from(value: String) -> Self {
        ClassValue::Str(value)
    }
}

impl From<f64> for ClassValue {
    fn from(value: f64) -> Self {
        ClassValue::Num(value)
    }
}

impl From<i64> for ClassValue {
    fn from(value: i64) -> Self {
        ClassValue::Num(value as f64)
    }
}

impl<T: Into<ClassValue>> From<Option<T>> for ClassValue {
    fn from(value: Option<T>) -> Self {
        match value {
            Some(inner) => inner.into(),
            None => ClassValue::Null,
        }
    }
}

impl<T: Into<ClassValue>> From<Vec<T>> for ClassValue {
    fn from(values: Vec<T>) -> Self {
        ClassValue::List(values.into_iter().map(Into::into).collect())
    }
}

impl From<&[(&str, bool)]> for ClassValue {
    fn from(entries: &[(&str, bool)]) -> Self {
        ClassValue::Map(
            entries
                .iter()
                .map(|(class_name, enabled)| (class_name.to_string(), *enabled))
                .collect(),
        )
    }
}
