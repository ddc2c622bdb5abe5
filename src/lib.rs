//! halo-sql-template：带类型占位符与条件块的 SQL 模板替换库。
//!
//! 模板中的占位符：
//!
//! - `?`：默认转换，字符串加单引号，数字原样输出，NULL 输出 `NULL`；
//! - `?d` / `?f`：整数 / 浮点数；
//! - `?a`：数组，顺序数组输出 `v1, v2`，关联数组输出 `` `k` = v ``；
//! - `?#`：标识符或标识符列表。
//!
//! `{...}` 是条件块：参数为 [`skip()`] 时，所在块会被整体删除。

mod convert;
#[cfg(test)]
mod convert_tests;
pub mod macros;
pub mod skip;
pub mod specifier;
pub mod template;
pub mod value;

pub use crate::skip::remove_skipped_blocks;
pub use crate::specifier::Specifier;
pub use crate::template::{TemplateError, build_query};
pub use crate::value::{ArrayKey, SKIP_MARKER, SqlArray, SqlValue, skip};

/// 推荐的便捷命名空间：允许 `use halo_space::sqltemplate::{...}` 形式导入。
pub mod sqltemplate {
    pub use crate::*;
}
