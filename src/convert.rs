//! 参数值到 SQL 字面量的转换：默认转换、按说明符转换与数组展开。

use crate::specifier::Specifier;
use crate::template::TemplateError;
use crate::value::{SqlArray, SqlValue};

/// 把单个参数转换为字面量文本。
///
/// - NULL 只允许出现在空说明符、`d`、`f` 上，输出 `NULL`；
/// - 跳过标记原样返回，留给条件块删除阶段识别；
/// - 布尔值先归一为 `0/1`。
pub(crate) fn convert_param(
    out: &mut String,
    value: &SqlValue,
    spec: Specifier,
    is_ident: bool,
) -> Result<(), TemplateError> {
    if let SqlValue::Null = value {
        if spec.allows_null() {
            out.push_str("NULL");
            return Ok(());
        }
        return Err(TemplateError::NullNotAllowed(spec));
    }

    if value.is_skip() {
        out.push_str(crate::value::SKIP_MARKER);
        return Ok(());
    }

    let normalized;
    let value = match value {
        SqlValue::Bool(b) => {
            normalized = SqlValue::I64(*b as i64);
            &normalized
        }
        v => v,
    };

    match spec {
        Specifier::Default => convert_default(out, value, is_ident),
        _ => convert_by_specifier(out, value, spec),
    }
}

fn convert_default(out: &mut String, value: &SqlValue, is_ident: bool) -> Result<(), TemplateError> {
    match value {
        SqlValue::String(s) => {
            let q = if is_ident { '`' } else { '\'' };
            out.push(q);
            out.push_str(s);
            out.push(q);
        }
        SqlValue::I64(n) => out.push_str(&n.to_string()),
        SqlValue::U64(n) => out.push_str(&n.to_string()),
        SqlValue::F64(n) => out.push_str(&n.to_string()),
        _ => return Err(TemplateError::InvalidEmptySpecifierType),
    }
    Ok(())
}

fn convert_by_specifier(
    out: &mut String,
    value: &SqlValue,
    spec: Specifier,
) -> Result<(), TemplateError> {
    let mismatch = || TemplateError::InvalidSpecifierType(spec);

    match spec {
        Specifier::Int => {
            let n = strict_int(value).ok_or_else(mismatch)?;
            out.push_str(&n.to_string());
        }
        Specifier::Float => {
            let n = strict_float(value).ok_or_else(mismatch)?;
            out.push_str(&n.to_string());
        }
        Specifier::Array => match value {
            SqlValue::Array(arr) => convert_array(out, arr, false)?,
            _ => return Err(mismatch()),
        },
        Specifier::Ident => {
            let wrapped;
            let arr = match value {
                SqlValue::Array(arr) => arr,
                v => {
                    wrapped = SqlArray::list([v.clone()]);
                    &wrapped
                }
            };
            if !arr.values().all(|v| matches!(v, SqlValue::String(_))) {
                return Err(mismatch());
            }
            convert_array(out, arr, true)?;
        }
        Specifier::Default | Specifier::Other(_) => {
            return Err(TemplateError::InvalidSpecifier(spec));
        }
    }
    Ok(())
}

/// 展开数组：顺序数组输出 `v1, v2`，关联数组输出 `` `k1` = v1, `k2` = v2 ``。
///
/// 元素一律按空说明符转换，因此嵌套数组会报 `InvalidEmptySpecifierType`。
/// 只有顺序数组且 `is_ident` 时，字符串元素才按标识符加引号。
pub(crate) fn convert_array(
    out: &mut String,
    arr: &SqlArray,
    is_ident: bool,
) -> Result<(), TemplateError> {
    if arr.is_empty() {
        return Err(TemplateError::EmptyArray);
    }

    let sequential = arr.is_sequential();
    for (i, (key, value)) in arr.iter().enumerate() {
        if i > 0 {
            out.push_str(", ");
        }
        if !sequential {
            out.push('`');
            out.push_str(&key.to_string());
            out.push_str("` = ");
        }
        convert_param(out, value, Specifier::Default, is_ident && sequential)?;
    }
    Ok(())
}

/// 严格整数校验：整数、无小数部分的浮点，或规范形式的整数字符串。
pub(crate) fn strict_int(value: &SqlValue) -> Option<i64> {
    match value {
        SqlValue::I64(n) => Some(*n),
        SqlValue::U64(n) => i64::try_from(*n).ok(),
        SqlValue::Bool(b) => Some(*b as i64),
        // 1e15 及以上的浮点在文本上是指数形式，不算整数
        SqlValue::F64(f) if f.is_finite() && f.fract() == 0.0 && f.abs() < 1e15 => {
            Some(*f as i64)
        }
        SqlValue::String(s) => parse_int_str(s),
        _ => None,
    }
}

fn parse_int_str(s: &str) -> Option<i64> {
    let s = trim_ascii_ws(s);
    let digits = s.strip_prefix(['+', '-']).unwrap_or(s);
    let valid = match digits.as_bytes() {
        [] => false,
        [b'0'] => true,
        [b'0', ..] => false,
        bytes => bytes.iter().all(u8::is_ascii_digit),
    };
    if !valid {
        return None;
    }
    s.parse().ok()
}

/// 严格浮点校验：任意整数、有限浮点，或只含数字/符号/小数点/指数的字符串。
pub(crate) fn strict_float(value: &SqlValue) -> Option<f64> {
    match value {
        SqlValue::I64(n) => Some(*n as f64),
        SqlValue::U64(n) => Some(*n as f64),
        SqlValue::Bool(b) => Some(*b as i64 as f64),
        SqlValue::F64(f) if f.is_finite() => Some(*f),
        SqlValue::String(s) => parse_float_str(s),
        _ => None,
    }
}

fn parse_float_str(s: &str) -> Option<f64> {
    let s = trim_ascii_ws(s);
    let charset_ok = s
        .bytes()
        .all(|b| b.is_ascii_digit() || matches!(b, b'+' | b'-' | b'.' | b'e' | b'E'));
    if !charset_ok || !s.bytes().any(|b| b.is_ascii_digit()) {
        return None;
    }
    s.parse::<f64>().ok().filter(|f| f.is_finite())
}

fn trim_ascii_ws(s: &str) -> &str {
    s.trim_matches([' ', '\t', '\n', '\r', '\x0b'])
}
