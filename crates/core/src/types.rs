use std::borrow::Cow;
use std::collections::BTreeMap;
use std::fmt;

use indexmap::IndexMap;

/// 类名描述符：`build` 的单个参数
///
/// 动态输入在边界处一次性归类为以下四种之一，之后只做模式匹配。
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ClassDescriptor {
    /// 假值（无值、false、null、0、NaN、空字符串），不产生任何类名
    #[default]
    Empty,

    /// 字符串或数字的文本形式，原样作为类名
    Text(String),

    /// 有序的嵌套描述符，递归展开
    Sequence(Vec<ClassDescriptor>),

    /// 类名 → 是否启用，保持插入顺序
    Mapping(IndexMap<String, bool>),
}

impl ClassDescriptor {
    /// 创建文本描述符，空字符串归为 `Empty`
    pub fn text(text: impl Into<String>) -> Self {
        let text = text.into();
        if text.is_empty() {
            ClassDescriptor::Empty
        } else {
            ClassDescriptor::Text(text)
        }
    }

    /// 创建数字描述符
    ///
    /// 0、-0 和 NaN 为假值；其余按 JavaScript 的数字字符串形式输出（`1` 而不是 `1.0`）。
    pub fn number(value: f64) -> Self {
        if value == 0.0 || value.is_nan() {
            return ClassDescriptor::Empty;
        }
        ClassDescriptor::Text(format_number(value))
    }

    pub fn sequence<I, T>(items: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<ClassDescriptor>,
    {
        ClassDescriptor::Sequence(items.into_iter().map(Into::into).collect())
    }

    /// 创建映射描述符，重复的类名以后者为准（位置保持首次出现的位置）
    pub fn mapping<I, K>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, bool)>,
        K: Into<String>,
    {
        let mut map = IndexMap::new();
        for (name, enabled) in entries {
            map.insert(name.into(), enabled);
        }
        ClassDescriptor::Mapping(map)
    }

    /// 判断是否会被直接跳过（不产生任何内容）
    pub fn is_empty(&self) -> bool {
        match self {
            ClassDescriptor::Empty => true,
            ClassDescriptor::Text(text) => text.is_empty(),
            ClassDescriptor::Sequence(_) => false,
            ClassDescriptor::Mapping(map) => map.is_empty(),
        }
    }
}

/// JavaScript 能精确表示的最大整数（2^53 - 1）
const MAX_SAFE_INTEGER: f64 = 9_007_199_254_740_991.0;

/// 按 JavaScript `String(number)` 的习惯格式化数字
///
/// - 整数值不输出小数部分（`1.0` → `"1"`）
/// - |n| ≥ 1e21 或 |n| < 1e-6 时使用指数形式（`"1e+21"`、`"1.5e-7"`）
/// - 无穷大输出 `"Infinity"` / `"-Infinity"`
pub(crate) fn format_number(value: f64) -> String {
    if value.is_infinite() {
        return if value > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }

    let abs = value.abs();
    if abs >= 1e21 || abs < 1e-6 {
        // Rust 的 `{:e}` 已是最短表示，只差正指数前的 `+`
        let formatted = format!("{:e}", value);
        return match formatted.split_once('e') {
            Some((mantissa, exponent)) if !exponent.starts_with('-') => {
                format!("{}e+{}", mantissa, exponent)
            }
            _ => formatted,
        };
    }

    format!("{}", value)
}

impl fmt::Display for ClassDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&crate::build::build(std::slice::from_ref(self)))
    }
}

// ── 基本类型转换 ──────────────────────────────────────────────

impl From<&str> for ClassDescriptor {
    fn from(text: &str) -> Self {
        ClassDescriptor::text(text)
    }
}

impl From<String> for ClassDescriptor {
    fn from(text: String) -> Self {
        ClassDescriptor::text(text)
    }
}

impl From<&String> for ClassDescriptor {
    fn from(text: &String) -> Self {
        ClassDescriptor::text(text.as_str())
    }
}

impl From<Cow<'_, str>> for ClassDescriptor {
    fn from(text: Cow<'_, str>) -> Self {
        ClassDescriptor::text(text.into_owned())
    }
}

/// `true` 虽然为真值，但既不是字符串也不是数字，同样不产生类名
impl From<bool> for ClassDescriptor {
    fn from(_: bool) -> Self {
        ClassDescriptor::Empty
    }
}

impl From<()> for ClassDescriptor {
    fn from(_: ()) -> Self {
        ClassDescriptor::Empty
    }
}

macro_rules! impl_from_integer {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for ClassDescriptor {
                fn from(value: $ty) -> Self {
                    if value == 0 {
                        return ClassDescriptor::Empty;
                    }
                    // 超出安全整数范围时与 JavaScript 一样按 f64 舍入
                    let approx = value as f64;
                    if approx.abs() > MAX_SAFE_INTEGER {
                        ClassDescriptor::number(approx)
                    } else {
                        ClassDescriptor::Text(value.to_string())
                    }
                }
            }
        )*
    };
}

impl_from_integer!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

impl From<f64> for ClassDescriptor {
    fn from(value: f64) -> Self {
        ClassDescriptor::number(value)
    }
}

impl From<f32> for ClassDescriptor {
    fn from(value: f32) -> Self {
        ClassDescriptor::number(f64::from(value))
    }
}

impl<T: Into<ClassDescriptor>> From<Option<T>> for ClassDescriptor {
    fn from(value: Option<T>) -> Self {
        value.map_or(ClassDescriptor::Empty, Into::into)
    }
}

// ── 序列与映射 ────────────────────────────────────────────────

impl<T: Into<ClassDescriptor>> From<Vec<T>> for ClassDescriptor {
    fn from(items: Vec<T>) -> Self {
        ClassDescriptor::sequence(items)
    }
}

impl<T: Into<ClassDescriptor>, const N: usize> From<[T; N]> for ClassDescriptor {
    fn from(items: [T; N]) -> Self {
        ClassDescriptor::sequence(items)
    }
}

impl<T> From<&[T]> for ClassDescriptor
where
    T: Clone + Into<ClassDescriptor>,
{
    fn from(items: &[T]) -> Self {
        ClassDescriptor::sequence(items.iter().cloned())
    }
}

impl<K: Into<String>> From<IndexMap<K, bool>> for ClassDescriptor {
    fn from(map: IndexMap<K, bool>) -> Self {
        ClassDescriptor::mapping(map)
    }
}

impl<K: Into<String>> From<BTreeMap<K, bool>> for ClassDescriptor {
    fn from(map: BTreeMap<K, bool>) -> Self {
        ClassDescriptor::mapping(map)
    }
}

/// 条件类名：`("active", is_active)`
impl<K: Into<String>> From<(K, bool)> for ClassDescriptor {
    fn from(entry: (K, bool)) -> Self {
        ClassDescriptor::mapping([entry])
    }
}
