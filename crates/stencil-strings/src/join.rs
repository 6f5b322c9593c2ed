/*
 * join.rs
 * Copyright (c) 2025 Posit, PBC
 */

//! Joining and textual sorting over coerced sequences.

use stencil_value::{Value, to_texts};

/// Coerce a value into a list of texts.
///
/// Lists coerce element-wise with nulls dropped; null itself becomes the
/// empty list; any other scalar becomes a one-element list.
pub fn text_list(value: &Value) -> Vec<String> {
    match value {
        Value::List(items) => to_texts(items),
        Value::Null => Vec::new(),
        other => vec![other.to_text()],
    }
}

/// Join a value's coerced texts with `separator`.
///
/// A non-list scalar passes through as its own text, with no separator
/// injected. Null elements of a list are dropped, not rendered as empty
/// segments.
pub fn join(separator: &str, value: &Value) -> String {
    match value {
        Value::List(items) => to_texts(items).join(separator),
        Value::Null => String::new(),
        other => other.to_text(),
    }
}

/// Sort a value's coerced texts ascending.
///
/// The order is textual: elements are compared as their decimal text form
/// even when they were numbers, so `[10, 9]` sorts as `["10", "9"]`. This is
/// a documented contract, not an accident of the inputs.
pub fn sort_alpha(value: &Value) -> Vec<String> {
    let mut texts = text_list(value);
    texts.sort();
    texts
}
