/*
 * quoting.rs
 * Copyright (c) 2025 Posit, PBC
 */

//! Quoting and concatenation over variadic argument lists.
//!
//! All three functions share the same null policy: a null argument is skipped
//! entirely before formatting, so it contributes neither text nor a
//! separator. The skip is a filter step, not a per-function special case.

use stencil_value::Value;

fn surviving(values: &[Value]) -> impl Iterator<Item = &Value> {
    values.iter().filter(|v| !v.is_null())
}

/// Double-quote each non-null argument and join with single spaces.
///
/// Embedded `"` and `\` characters are backslash-escaped.
pub fn quote(values: &[Value]) -> String {
    surviving(values)
        .map(|v| format!("\"{}\"", escape_double_quoted(&v.to_text())))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Single-quote each non-null argument and join with single spaces.
///
/// No escaping is applied inside single quotes.
pub fn squote(values: &[Value]) -> String {
    surviving(values)
        .map(|v| format!("'{}'", v.to_text()))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Join the non-null arguments with single spaces, unquoted.
pub fn cat(values: &[Value]) -> String {
    surviving(values)
        .map(|v| v.to_text())
        .collect::<Vec<_>>()
        .join(" ")
}

fn escape_double_quoted(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        if c == '\\' || c == '"' {
            out.push('\\');
        }
        out.push(c);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_quote() {
        let args = [Value::from("a"), Value::from("b"), Value::from("c")];
        assert_eq!(quote(&args), r#""a" "b" "c""#);
    }

    #[test]
    fn test_quote_escapes_quotes_and_backslashes() {
        assert_eq!(quote(&[Value::from(r#""a""#)]), r#""\"a\"""#);
        assert_eq!(quote(&[Value::from(r"a\b")]), r#""a\\b""#);
    }

    #[test]
    fn test_quote_coerces_numbers() {
        let args = [Value::Int(1), Value::Int(2), Value::Int(3)];
        assert_eq!(quote(&args), r#""1" "2" "3""#);
    }

    #[test]
    fn test_quote_skips_null() {
        // A lone null argument is dropped, not rendered as "".
        assert_eq!(quote(&[Value::Null]), "");
        let args = [Value::from("a"), Value::Null, Value::from("b")];
        assert_eq!(quote(&args), r#""a" "b""#);
    }

    #[test]
    fn test_squote() {
        let args = [Value::from("a"), Value::from("b"), Value::from("c")];
        assert_eq!(squote(&args), "'a' 'b' 'c'");
        let nums = [Value::Int(1), Value::Int(2), Value::Int(3)];
        assert_eq!(squote(&nums), "'1' '2' '3'");
    }

    #[test]
    fn test_squote_skips_null() {
        assert_eq!(squote(&[Value::Null]), "");
    }

    #[test]
    fn test_cat() {
        let args = [Value::from("a"), Value::from("b"), Value::from("c")];
        assert_eq!(cat(&args), "a b c");
    }

    #[test]
    fn test_cat_skips_null_without_doubling_spaces() {
        let args = [Value::from("a"), Value::from("b"), Value::Null];
        assert_eq!(cat(&args), "a b");
    }
}
