//! 模板替换：扫描 `?`/`?d`/`?f`/`?a`/`?#` 占位符，依次消费参数并转换为字面量，
//! 最后删除被跳过的 `{...}` 条件块。
//!
//! 安全警告：字符串值不做任何转义，调用方需自行保证输入可信。

use crate::convert::convert_param;
use crate::skip::remove_counted;
use crate::specifier::Specifier;
use crate::value::SqlValue;

#[derive(Debug, Clone, thiserror::Error, PartialEq, Eq)]
pub enum TemplateError {
    #[error("Not enough params!")]
    NotEnoughParams,
    #[error("NULL value isn't allowed for the format specifier \"{0}\".")]
    NullNotAllowed(Specifier),
    #[error("Invalid parameter type for empty specifier!")]
    InvalidEmptySpecifierType,
    #[error("Invalid format specifier \"{0}\".")]
    InvalidSpecifier(Specifier),
    #[error("Invalid parameter type for format specifier \"{0}\"")]
    InvalidSpecifierType(Specifier),
    #[error("Array param shouldn't be empty!")]
    EmptyArray,
}

/// 构建最终 SQL。
///
/// 参数按占位符出现顺序逐个消费；遇到占位符而参数已用完时报 `NotEnoughParams`，
/// 多余的参数直接忽略。
pub fn build_query(template: &str, args: &[SqlValue]) -> Result<String, TemplateError> {
    let mut out = String::with_capacity(template.len() + args.len() * 8);
    let mut cursor = 0usize;
    let mut chars = template.chars().peekable();

    while let Some(c) = chars.next() {
        if c != '?' {
            out.push(c);
            continue;
        }

        let spec = match chars.peek().copied().and_then(Specifier::parse) {
            Some(spec) => {
                chars.next();
                spec
            }
            None => Specifier::Default,
        };

        let Some(arg) = args.get(cursor) else {
            return Err(TemplateError::NotEnoughParams);
        };
        cursor += 1;

        tracing::trace!(index = cursor - 1, specifier = %spec, "substituting placeholder");
        convert_param(&mut out, arg, spec, false)?;
    }

    let (sql, skipped) = remove_counted(&out);
    tracing::debug!(consumed = cursor, skipped, "built query");
    Ok(sql)
}
