/*
 * json.rs
 * Copyright (c) 2025 Posit, PBC
 */

//! Conversion from host-provided JSON metadata to template values.
//!
//! The engine resolves document metadata as JSON before binding variables;
//! this conversion decides which [`Value`] kind each JSON node becomes.
//! Null elements survive conversion — dropping them is a coercion-time
//! decision, not a conversion-time one.

use crate::value::Value;

impl From<serde_json::Value> for Value {
    fn from(v: serde_json::Value) -> Self {
        match v {
            serde_json::Value::Null => Value::Null,
            serde_json::Value::Bool(b) => Value::Bool(b),
            serde_json::Value::Number(n) => {
                if let Some(i) = n.as_i64() {
                    Value::Int(i)
                } else if let Some(x) = n.as_f64() {
                    Value::Float(x)
                } else {
                    Value::Text(n.to_string())
                }
            }
            serde_json::Value::String(s) => Value::Text(s),
            serde_json::Value::Array(items) => {
                Value::List(items.into_iter().map(Value::from).collect())
            }
            // Objects have no counterpart in the function set; coerce to
            // their compact JSON text.
            obj @ serde_json::Value::Object(_) => Value::Text(obj.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn test_scalars() {
        assert_eq!(Value::from(json!(null)), Value::Null);
        assert_eq!(Value::from(json!(true)), Value::Bool(true));
        assert_eq!(Value::from(json!(3)), Value::Int(3));
        assert_eq!(Value::from(json!(2.5)), Value::Float(2.5));
        assert_eq!(Value::from(json!("text")), Value::from("text"));
    }

    #[test]
    fn test_array_keeps_null_elements() {
        let value = Value::from(json!([1, null, 2]));
        assert_eq!(
            value,
            Value::List(vec![Value::Int(1), Value::Null, Value::Int(2)])
        );
        // The drop happens at coercion time.
        assert_eq!(value.to_text(), "[1 2]");
    }

    #[test]
    fn test_object_coerces_to_json_text() {
        let value = Value::from(json!({"a": 1}));
        assert_eq!(value, Value::from(r#"{"a":1}"#));
    }
}
