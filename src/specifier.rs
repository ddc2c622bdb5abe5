//! 占位符格式说明符：`?` 之后的可选单字符。

use std::fmt;

/// 占位符的格式说明符。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Specifier {
    /// `?`：按值类型默认转换。
    #[default]
    Default,
    /// `?d`：整数。
    Int,
    /// `?f`：浮点数。
    Float,
    /// `?a`：数组展开。
    Array,
    /// `?#`：标识符或标识符列表。
    Ident,
    /// 其他单词字符，转换时报 `InvalidSpecifier`。
    Other(char),
}

impl Specifier {
    /// 识别紧跟在 `?` 之后的字符；返回 `None` 表示该字符不属于占位符。
    pub fn parse(c: char) -> Option<Self> {
        match c {
            'd' => Some(Self::Int),
            'f' => Some(Self::Float),
            'a' => Some(Self::Array),
            '#' => Some(Self::Ident),
            c if c.is_ascii_alphanumeric() || c == '_' => Some(Self::Other(c)),
            _ => None,
        }
    }

    /// 允许 NULL 的说明符：空、`d`、`f`。
    pub fn allows_null(self) -> bool {
        matches!(self, Self::Default | Self::Int | Self::Float)
    }
}

impl fmt::Display for Specifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Default => Ok(()),
            Self::Int => f.write_str("d"),
            Self::Float => f.write_str("f"),
            Self::Array => f.write_str("a"),
            Self::Ident => f.write_str("#"),
            Self::Other(c) => write!(f, "{c}"),
        }
    }
}
