/*
 * value.rs
 * Copyright (c) 2025 Posit, PBC
 */

//! The template value type and its coercion to text.
//!
//! Pipeline functions accept arguments of any kind a template expression can
//! produce: missing metadata fields, strings, numbers, raw bytes, upstream
//! errors, values that carry their own rendering, and lists of any of these.
//! [`Value`] models that set as a closed enum, and [`Value::to_text`] is the
//! single coercion point every function goes through.

use std::fmt;
use std::sync::Arc;

/// A value passed to a template pipeline function.
///
/// The variant set is closed: functions pattern-match over exactly these
/// kinds and are total over all of them. The only trait object is
/// [`Value::Display`], which models values that carry their own textual
/// rendering (the engine wraps host objects in it).
#[derive(Clone)]
pub enum Value {
    /// A missing or null value.
    Null,

    /// A boolean value.
    Bool(bool),

    /// A string value.
    Text(String),

    /// An integer value.
    Int(i64),

    /// A floating-point value.
    Float(f64),

    /// A raw byte string.
    Bytes(Vec<u8>),

    /// An error carried as a value, rendered by its message.
    Error(String),

    /// A value that provides its own textual rendering.
    Display(Arc<dyn fmt::Display + Send + Sync>),

    /// A list of values.
    List(Vec<Value>),
}

impl Value {
    /// Wrap any displayable host object as a value.
    pub fn display(value: impl fmt::Display + Send + Sync + 'static) -> Self {
        Value::Display(Arc::new(value))
    }

    /// Check whether this value is null/missing.
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Coerce this value to canonical text.
    ///
    /// Coercion policy:
    /// - `Null`: empty text
    /// - `Bool`: `true` / `false`
    /// - `Text`: returned as-is
    /// - `Int` / `Float`: canonical decimal text (no padding, no locale)
    /// - `Bytes`: decoded as text, invalid sequences replaced
    /// - `Error`: its message
    /// - `Display`: its own rendering
    /// - `List`: bracketed, space-separated coerced elements, nulls dropped
    pub fn to_text(&self) -> String {
        match self {
            Value::Null => String::new(),
            Value::Bool(b) => b.to_string(),
            Value::Text(s) => s.clone(),
            Value::Int(n) => n.to_string(),
            Value::Float(x) => x.to_string(),
            Value::Bytes(bytes) => String::from_utf8_lossy(bytes).into_owned(),
            Value::Error(message) => message.clone(),
            Value::Display(d) => d.to_string(),
            Value::List(items) => format!("[{}]", to_texts(items).join(" ")),
        }
    }

    /// Coerce this value to an integer.
    ///
    /// Numeric kinds convert directly (floats truncate), booleans map to
    /// 0/1, text is parsed as decimal. Everything else, including
    /// unparseable text, is 0 — numeric arguments never fail.
    pub fn as_int(&self) -> i64 {
        match self {
            Value::Int(n) => *n,
            Value::Float(x) => *x as i64,
            Value::Bool(b) => i64::from(*b),
            Value::Text(s) => s.trim().parse().unwrap_or(0),
            _ => 0,
        }
    }
}

/// Coerce a slice of values to text element-wise, dropping nulls.
///
/// The drop is deliberate and observable: joining `[1, null, 2]` yields two
/// elements, not three. Null elements are never rendered as empty strings.
pub fn to_texts(values: &[Value]) -> Vec<String> {
    values
        .iter()
        .filter(|v| !v.is_null())
        .map(Value::to_text)
        .collect()
}

impl Default for Value {
    fn default() -> Self {
        Value::Null
    }
}

impl fmt::Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => write!(f, "Null"),
            Value::Bool(b) => f.debug_tuple("Bool").field(b).finish(),
            Value::Text(s) => f.debug_tuple("Text").field(s).finish(),
            Value::Int(n) => f.debug_tuple("Int").field(n).finish(),
            Value::Float(x) => f.debug_tuple("Float").field(x).finish(),
            Value::Bytes(bytes) => f.debug_tuple("Bytes").field(bytes).finish(),
            Value::Error(message) => f.debug_tuple("Error").field(message).finish(),
            Value::Display(d) => f.debug_tuple("Display").field(&d.to_string()).finish(),
            Value::List(items) => f.debug_tuple("List").field(items).finish(),
        }
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::Null, Value::Null) => true,
            (Value::Bool(a), Value::Bool(b)) => a == b,
            (Value::Text(a), Value::Text(b)) => a == b,
            (Value::Int(a), Value::Int(b)) => a == b,
            (Value::Float(a), Value::Float(b)) => a == b,
            (Value::Bytes(a), Value::Bytes(b)) => a == b,
            (Value::Error(a), Value::Error(b)) => a == b,
            // Display values have no identity beyond their rendering.
            (Value::Display(a), Value::Display(b)) => a.to_string() == b.to_string(),
            (Value::List(a), Value::List(b)) => a == b,
            _ => false,
        }
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Text(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Text(s)
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Int(n)
    }
}

impl From<f64> for Value {
    fn from(x: f64) -> Self {
        Value::Float(x)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<Vec<Value>> for Value {
    fn from(items: Vec<Value>) -> Self {
        Value::List(items)
    }
}
