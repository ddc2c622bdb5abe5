//! 宏集合：以不定长参数的方式构造模板参数，无需手写 `SqlValue::from`。

/// 构造参数列表 `Vec<SqlValue>`，每个元素经 `Into<SqlValue>` 转换。
///
/// ```
/// use halo_space::{build_query, skip, sql_args};
///
/// let sql = build_query(
///     "SELECT name FROM users WHERE ?# IN (?a){ AND block = ?d}",
///     &sql_args!["user_id", [1, 2, 3], skip()],
/// )
/// .unwrap();
/// assert_eq!(sql, "SELECT name FROM users WHERE `user_id` IN (1, 2, 3)");
/// ```
#[macro_export]
macro_rules! sql_args {
    () => {
        Vec::<$crate::SqlValue>::new()
    };
    ($($value:expr),+ $(,)?) => {
        vec![$($crate::SqlValue::from($value)),+]
    };
}

/// 构造关联数组 `SqlValue::Array`，用于 `?a` 的 `` `key` = value `` 展开。
///
/// ```
/// use halo_space::{assoc, build_query};
///
/// let sql = build_query(
///     "UPDATE users SET ?a WHERE user_id = -1",
///     &[assoc! { "name" => "Jack", "email" => () }],
/// )
/// .unwrap();
/// assert_eq!(sql, "UPDATE users SET `name` = 'Jack', `email` = NULL WHERE user_id = -1");
/// ```
#[macro_export]
macro_rules! assoc {
    () => {
        $crate::SqlValue::Array($crate::SqlArray::new())
    };
    ($($key:expr => $value:expr),+ $(,)?) => {{
        let mut arr = $crate::SqlArray::new();
        $(
            arr.insert($key, $crate::SqlValue::from($value));
        )+
        $crate::SqlValue::Array(arr)
    }};
}
