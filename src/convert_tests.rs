#[cfg(test)]
mod tests {
    use crate::assoc;
    use crate::convert::{convert_array, convert_param, strict_float, strict_int};
    use crate::specifier::Specifier;
    use crate::template::TemplateError;
    use crate::value::{SqlArray, SqlValue, skip};
    use pretty_assertions::assert_eq;

    fn convert(value: impl Into<SqlValue>, spec: Specifier) -> Result<String, TemplateError> {
        let mut out = String::new();
        convert_param(&mut out, &value.into(), spec, false)?;
        Ok(out)
    }

    fn expand(arr: SqlArray, is_ident: bool) -> Result<String, TemplateError> {
        let mut out = String::new();
        convert_array(&mut out, &arr, is_ident)?;
        Ok(out)
    }

    #[test]
    fn null_allowed_specifiers() {
        for spec in [Specifier::Default, Specifier::Int, Specifier::Float] {
            assert_eq!(convert((), spec).unwrap(), "NULL");
        }
        for spec in [Specifier::Array, Specifier::Ident, Specifier::Other('k')] {
            assert_eq!(
                convert((), spec).unwrap_err(),
                TemplateError::NullNotAllowed(spec)
            );
        }
    }

    #[test]
    fn null_with_ident_message_names_specifier() {
        let err = convert((), Specifier::Ident).unwrap_err();
        assert_eq!(
            err.to_string(),
            "NULL value isn't allowed for the format specifier \"#\"."
        );
    }

    #[test]
    fn default_conversion() {
        assert_eq!(convert("Jack", Specifier::Default).unwrap(), "'Jack'");
        assert_eq!(convert("", Specifier::Default).unwrap(), "''");
        assert_eq!(convert(-7, Specifier::Default).unwrap(), "-7");
        assert_eq!(convert(7_u64, Specifier::Default).unwrap(), "7");
        assert_eq!(convert(2.5, Specifier::Default).unwrap(), "2.5");
        assert_eq!(convert(2.0, Specifier::Default).unwrap(), "2");
        assert_eq!(convert(true, Specifier::Default).unwrap(), "1");
        assert_eq!(convert(false, Specifier::Default).unwrap(), "0");
        assert_eq!(
            convert(vec![1], Specifier::Default).unwrap_err(),
            TemplateError::InvalidEmptySpecifierType
        );
    }

    #[test]
    fn skip_marker_passes_through() {
        assert_eq!(convert(skip(), Specifier::Default).unwrap(), ":SKIP:");
        assert_eq!(convert(skip(), Specifier::Int).unwrap(), ":SKIP:");
        assert_eq!(convert(skip(), Specifier::Other('z')).unwrap(), ":SKIP:");
    }

    #[test]
    fn int_specifier() {
        assert_eq!(convert(42, Specifier::Int).unwrap(), "42");
        assert_eq!(convert("42", Specifier::Int).unwrap(), "42");
        assert_eq!(convert(" -5 ", Specifier::Int).unwrap(), "-5");
        assert_eq!(convert(3.0, Specifier::Int).unwrap(), "3");
        assert_eq!(convert(true, Specifier::Int).unwrap(), "1");

        let err = convert("Peter", Specifier::Int).unwrap_err();
        assert_eq!(err, TemplateError::InvalidSpecifierType(Specifier::Int));
        assert_eq!(
            err.to_string(),
            "Invalid parameter type for format specifier \"d\""
        );
        for bad in [
            SqlValue::F64(2.1),
            SqlValue::from("2.0"),
            SqlValue::from("007"),
            SqlValue::from(""),
            SqlValue::from(vec![1]),
            SqlValue::U64(u64::MAX),
        ] {
            assert_eq!(
                convert(bad.clone(), Specifier::Int).unwrap_err(),
                TemplateError::InvalidSpecifierType(Specifier::Int),
                "value {bad:?}"
            );
        }
    }

    #[test]
    fn float_specifier() {
        assert_eq!(convert(1.5, Specifier::Float).unwrap(), "1.5");
        assert_eq!(convert(2, Specifier::Float).unwrap(), "2");
        assert_eq!(convert("3.25", Specifier::Float).unwrap(), "3.25");
        assert_eq!(convert("1e3", Specifier::Float).unwrap(), "1000");

        for bad in [
            SqlValue::from("Peter"),
            SqlValue::from("inf"),
            SqlValue::from("NaN"),
            SqlValue::F64(f64::INFINITY),
            SqlValue::from(vec![1.0]),
        ] {
            assert_eq!(
                convert(bad.clone(), Specifier::Float).unwrap_err(),
                TemplateError::InvalidSpecifierType(Specifier::Float),
                "value {bad:?}"
            );
        }
    }

    #[test]
    fn array_specifier() {
        assert_eq!(convert([1, 2, 3], Specifier::Array).unwrap(), "1, 2, 3");
        assert_eq!(
            convert(vec!["a", "b"], Specifier::Array).unwrap(),
            "'a', 'b'"
        );
        assert_eq!(
            convert(assoc! { "name" => "Jack", "age" => 30 }, Specifier::Array).unwrap(),
            "`name` = 'Jack', `age` = 30"
        );
        assert_eq!(
            convert("x", Specifier::Array).unwrap_err(),
            TemplateError::InvalidSpecifierType(Specifier::Array)
        );
        assert_eq!(
            convert(Vec::<i64>::new(), Specifier::Array).unwrap_err(),
            TemplateError::EmptyArray
        );
    }

    #[test]
    fn ident_specifier() {
        assert_eq!(convert("user_id", Specifier::Ident).unwrap(), "`user_id`");
        assert_eq!(
            convert(["name", "email"], Specifier::Ident).unwrap(),
            "`name`, `email`"
        );
        // 关联数组只给 key 加标识符引号
        assert_eq!(
            convert(assoc! { "alias" => "name" }, Specifier::Ident).unwrap(),
            "`alias` = 'name'"
        );
        assert_eq!(
            convert(1, Specifier::Ident).unwrap_err(),
            TemplateError::InvalidSpecifierType(Specifier::Ident)
        );
        assert_eq!(
            convert(vec![SqlValue::from("a"), SqlValue::Null], Specifier::Ident).unwrap_err(),
            TemplateError::InvalidSpecifierType(Specifier::Ident)
        );
        assert_eq!(
            convert(Vec::<&'static str>::new(), Specifier::Ident).unwrap_err(),
            TemplateError::EmptyArray
        );
    }

    #[test]
    fn unknown_specifier() {
        let err = convert("Jack", Specifier::Other('k')).unwrap_err();
        assert_eq!(err.to_string(), "Invalid format specifier \"k\".");
    }

    #[test]
    fn array_elements_follow_default_rules() {
        let arr = SqlArray::list([
            SqlValue::Null,
            SqlValue::Bool(true),
            skip(),
            SqlValue::F64(0.5),
        ]);
        assert_eq!(expand(arr, false).unwrap(), "NULL, 1, :SKIP:, 0.5");
    }

    #[test]
    fn nested_arrays_are_rejected() {
        let arr = SqlArray::list([SqlValue::from(vec![1, 2])]);
        assert_eq!(
            expand(arr, false).unwrap_err(),
            TemplateError::InvalidEmptySpecifierType
        );
    }

    #[test]
    fn non_contiguous_indexes_render_as_pairs() {
        let arr: SqlArray = [(1, "a"), (2, "b")].into_iter().collect();
        assert_eq!(expand(arr, true).unwrap(), "`1` = 'a', `2` = 'b'");
    }

    #[test]
    fn identifiers_and_keys_always_use_backticks() {
        assert_eq!(
            expand(SqlArray::list(["id", "name"]), true).unwrap(),
            "`id`, `name`"
        );
        let arr: SqlArray = [("user id", 1)].into_iter().collect();
        assert_eq!(expand(arr, false).unwrap(), "`user id` = 1");
    }

    #[test]
    fn large_floats_render_as_plain_decimals() {
        assert_eq!(convert(1e20, Specifier::Default).unwrap(), "100000000000000000000");
        assert_eq!(convert(1e20, Specifier::Float).unwrap(), "100000000000000000000");
    }

    #[test]
    fn strict_validators() {
        assert_eq!(strict_int(&SqlValue::from("+12")), Some(12));
        assert_eq!(strict_int(&SqlValue::from("0")), Some(0));
        assert_eq!(strict_int(&SqlValue::from("-0")), Some(0));
        assert_eq!(strict_int(&SqlValue::from("1_000")), None);
        assert_eq!(strict_int(&SqlValue::from("+")), None);
        assert_eq!(strict_int(&SqlValue::F64(1e15)), None);
        assert_eq!(strict_int(&SqlValue::from("9223372036854775808")), None);

        assert_eq!(strict_float(&SqlValue::from(".5")), Some(0.5));
        assert_eq!(strict_float(&SqlValue::from("-1.25e-1")), Some(-0.125));
        assert_eq!(strict_float(&SqlValue::from("e")), None);
        assert_eq!(strict_float(&SqlValue::from(".")), None);
        assert_eq!(strict_float(&SqlValue::Null), None);
    }
}
