//! SQL 模板参数值类型。

use std::borrow::Cow;
use std::fmt;

/// 跳过标记：参数等于它时，所在的 `{...}` 条件块会被整体删除。
pub const SKIP_MARKER: &str = ":SKIP:";

/// 返回跳过标记值，放入参数列表表示“省略所在条件块”。
pub fn skip() -> SqlValue {
    SqlValue::String(Cow::Borrowed(SKIP_MARKER))
}

/// SQL 模板参数值。
#[derive(Debug, Clone, PartialEq)]
pub enum SqlValue {
    Null,
    Bool(bool),
    I64(i64),
    U64(u64),
    F64(f64),
    String(Cow<'static, str>),
    /// 顺序数组或关联数组，由 key 是否为 `0..N-1` 决定。
    Array(SqlArray),
}

impl SqlValue {
    /// 将 `Option<T>` 映射为 `SqlValue`：`None => Null`，`Some(v) => v.into()`。
    pub fn from_option<T: Into<SqlValue>>(v: Option<T>) -> Self {
        match v {
            Some(v) => v.into(),
            None => Self::Null,
        }
    }

    /// 由 `(key, value)` 构造关联数组。
    pub fn assoc<K, V>(pairs: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<ArrayKey>,
        V: Into<SqlValue>,
    {
        Self::Array(pairs.into_iter().collect())
    }

    /// 是否为跳过标记。
    pub fn is_skip(&self) -> bool {
        matches!(self, Self::String(s) if s.as_ref() == SKIP_MARKER)
    }
}

/// 数组 key：整数下标或字符串名。
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ArrayKey {
    Index(i64),
    Name(String),
}

impl ArrayKey {
    /// 规范十进制整数形式的字符串（如 `"12"`、`"-3"`，不含 `"012"`）会被归一为下标。
    fn from_name(name: String) -> Self {
        match canonical_index(&name) {
            Some(i) => Self::Index(i),
            None => Self::Name(name),
        }
    }
}

fn canonical_index(s: &str) -> Option<i64> {
    let digits = s.strip_prefix('-').unwrap_or(s);
    let canonical = match digits.as_bytes() {
        [] => false,
        [b'0'] => digits.len() == s.len(),
        [first, rest @ ..] => {
            (b'1'..=b'9').contains(first) && rest.iter().all(|b| b.is_ascii_digit())
        }
    };
    if canonical { s.parse().ok() } else { None }
}

impl fmt::Display for ArrayKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Index(i) => write!(f, "{i}"),
            Self::Name(name) => f.write_str(name),
        }
    }
}

impl From<i64> for ArrayKey {
    fn from(v: i64) -> Self {
        Self::Index(v)
    }
}

impl From<i32> for ArrayKey {
    fn from(v: i32) -> Self {
        Self::Index(v as i64)
    }
}

impl From<usize> for ArrayKey {
    fn from(v: usize) -> Self {
        Self::Index(v as i64)
    }
}

impl From<String> for ArrayKey {
    fn from(v: String) -> Self {
        Self::from_name(v)
    }
}

impl From<&str> for ArrayKey {
    fn from(v: &str) -> Self {
        Self::from_name(v.to_string())
    }
}

/// 有序的 key/value 数组，保持插入顺序。
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SqlArray {
    entries: Vec<(ArrayKey, SqlValue)>,
}

impl SqlArray {
    pub fn new() -> Self {
        Self::default()
    }

    /// 顺序数组：key 依次为 `0..N-1`。
    pub fn list<T: Into<SqlValue>>(items: impl IntoIterator<Item = T>) -> Self {
        Self {
            entries: items
                .into_iter()
                .enumerate()
                .map(|(i, v)| (ArrayKey::Index(i as i64), v.into()))
                .collect(),
        }
    }

    /// 写入一个元素；key 已存在时原位替换其值。
    pub fn insert(&mut self, key: impl Into<ArrayKey>, value: impl Into<SqlValue>) {
        let key = key.into();
        let value = value.into();
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some((_, slot)) => *slot = value,
            None => self.entries.push((key, value)),
        }
    }

    /// 追加一个元素，key 为当前最大整数下标 + 1（没有整数下标时为 0）。
    pub fn push(&mut self, value: impl Into<SqlValue>) {
        let next = self
            .entries
            .iter()
            .filter_map(|(k, _)| match k {
                ArrayKey::Index(i) => Some(*i + 1),
                ArrayKey::Name(_) => None,
            })
            .max()
            .unwrap_or(0)
            .max(0);
        self.entries.push((ArrayKey::Index(next), value.into()));
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// key 恰好为 `0..N-1` 且按顺序排列。
    pub fn is_sequential(&self) -> bool {
        self.entries
            .iter()
            .enumerate()
            .all(|(i, (k, _))| *k == ArrayKey::Index(i as i64))
    }

    pub fn iter(&self) -> impl Iterator<Item = (&ArrayKey, &SqlValue)> {
        self.entries.iter().map(|(k, v)| (k, v))
    }

    pub fn values(&self) -> impl Iterator<Item = &SqlValue> {
        self.entries.iter().map(|(_, v)| v)
    }
}

impl<K, V> FromIterator<(K, V)> for SqlArray
where
    K: Into<ArrayKey>,
    V: Into<SqlValue>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut arr = Self::new();
        for (k, v) in iter {
            arr.insert(k, v);
        }
        arr
    }
}

impl From<()> for SqlValue {
    fn from(_: ()) -> Self {
        Self::Null
    }
}

impl<T: Into<SqlValue>> From<Option<T>> for SqlValue {
    fn from(v: Option<T>) -> Self {
        Self::from_option(v)
    }
}

impl From<bool> for SqlValue {
    fn from(v: bool) -> Self {
        Self::Bool(v)
    }
}

impl From<i8> for SqlValue {
    fn from(v: i8) -> Self {
        Self::I64(v as i64)
    }
}

impl From<i16> for SqlValue {
    fn from(v: i16) -> Self {
        Self::I64(v as i64)
    }
}

impl From<i32> for SqlValue {
    fn from(v: i32) -> Self {
        Self::I64(v as i64)
    }
}

impl From<i64> for SqlValue {
    fn from(v: i64) -> Self {
        Self::I64(v)
    }
}

impl From<u8> for SqlValue {
    fn from(v: u8) -> Self {
        Self::U64(v as u64)
    }
}

impl From<u16> for SqlValue {
    fn from(v: u16) -> Self {
        Self::U64(v as u64)
    }
}

impl From<u32> for SqlValue {
    fn from(v: u32) -> Self {
        Self::U64(v as u64)
    }
}

impl From<u64> for SqlValue {
    fn from(v: u64) -> Self {
        Self::U64(v)
    }
}

impl From<f32> for SqlValue {
    fn from(v: f32) -> Self {
        Self::F64(v as f64)
    }
}

impl From<f64> for SqlValue {
    fn from(v: f64) -> Self {
        Self::F64(v)
    }
}

impl From<String> for SqlValue {
    fn from(v: String) -> Self {
        Self::String(Cow::Owned(v))
    }
}

impl From<&'static str> for SqlValue {
    fn from(v: &'static str) -> Self {
        Self::String(Cow::Borrowed(v))
    }
}

impl From<SqlArray> for SqlValue {
    fn from(v: SqlArray) -> Self {
        Self::Array(v)
    }
}

impl<T: Into<SqlValue>> From<Vec<T>> for SqlValue {
    fn from(v: Vec<T>) -> Self {
        Self::Array(SqlArray::list(v))
    }
}

impl<T: Into<SqlValue>, const N: usize> From<[T; N]> for SqlValue {
    fn from(v: [T; N]) -> Self {
        Self::Array(SqlArray::list(v))
    }
}
