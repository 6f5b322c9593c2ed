/*
 * registry.rs
 * Copyright (c) 2025 Posit, PBC
 */

//! The flat name → callable registry merged into the engine's function
//! namespace.
//!
//! Each entry adapts one transformation to the engine's calling convention:
//! already-evaluated [`Value`] arguments in declared order, piped value last.
//! Missing arguments read as null and numeric arguments coerce, so every
//! function except the decoders stays total no matter what a template
//! passes. The predicates (`contains`, `hasPrefix`, `hasSuffix`) take the
//! literal first so they read naturally when piped.

use std::collections::HashMap;

use stencil_value::Value;

use crate::encode;
use crate::error::{FunctionError, FunctionResult};
use crate::join;
use crate::layout;
use crate::quoting;
use crate::random;
use crate::split;
use crate::substring;

/// A template function callable by the host engine.
pub type TemplateFunction = Box<dyn Fn(&[Value]) -> FunctionResult<Value> + Send + Sync>;

/// Registry of template functions, looked up by name.
pub struct FunctionRegistry {
    functions: HashMap<&'static str, TemplateFunction>,
}

impl FunctionRegistry {
    /// Create a new empty registry.
    pub fn new() -> Self {
        Self {
            functions: HashMap::new(),
        }
    }

    /// Create a registry carrying the standard string function set.
    pub fn standard() -> Self {
        let mut registry = Self::new();
        registry.register_strings();
        registry
    }

    /// Add a function under `name`, replacing any previous entry.
    pub fn add(
        &mut self,
        name: &'static str,
        function: impl Fn(&[Value]) -> FunctionResult<Value> + Send + Sync + 'static,
    ) -> &mut Self {
        self.functions.insert(name, Box::new(function));
        self
    }

    /// Look up a function by name.
    pub fn get(&self, name: &str) -> Option<&TemplateFunction> {
        self.functions.get(name)
    }

    /// Check whether `name` is registered.
    pub fn contains(&self, name: &str) -> bool {
        self.functions.contains_key(name)
    }

    /// Registered names, sorted for stable iteration.
    pub fn names(&self) -> Vec<&'static str> {
        let mut names: Vec<_> = self.functions.keys().copied().collect();
        names.sort_unstable();
        names
    }

    /// Call the function registered under `name` with `args`.
    ///
    /// # Arguments
    /// * `name` - The function name as written in the template
    /// * `args` - Already-evaluated arguments, piped value last
    ///
    /// # Returns
    /// The function's result value, or an error for unknown names and
    /// malformed encoded input.
    pub fn call(&self, name: &str, args: &[Value]) -> FunctionResult<Value> {
        let function = self
            .functions
            .get(name)
            .ok_or_else(|| FunctionError::UnknownFunction {
                name: name.to_string(),
            })?;
        tracing::trace!(function = name, "Calling template function");
        function(args)
    }

    fn register_strings(&mut self) {
        self.add("substr", |args| {
            Ok(text(substring::substr(
                int_arg(args, 0),
                int_arg(args, 1),
                &text_arg(args, 2),
            )))
        });
        self.add("trunc", |args| {
            Ok(text(substring::trunc(int_arg(args, 0), &text_arg(args, 1))))
        });

        self.add("quote", |args| Ok(text(quoting::quote(args))));
        self.add("squote", |args| Ok(text(quoting::squote(args))));
        self.add("cat", |args| Ok(text(quoting::cat(args))));

        // Predicates take the literal first so the piped value lands last.
        self.add("contains", |args| {
            Ok(Value::Bool(text_arg(args, 1).contains(&text_arg(args, 0))))
        });
        self.add("hasPrefix", |args| {
            Ok(Value::Bool(text_arg(args, 1).starts_with(&text_arg(args, 0))))
        });
        self.add("hasSuffix", |args| {
            Ok(Value::Bool(text_arg(args, 1).ends_with(&text_arg(args, 0))))
        });

        self.add("trim", |args| Ok(text(layout::trim(&text_arg(args, 0)))));
        self.add("trimAll", |args| {
            Ok(text(layout::trim_all(&text_arg(args, 0), &text_arg(args, 1))))
        });
        self.add("trimPrefix", |args| {
            Ok(text(layout::trim_prefix(&text_arg(args, 0), &text_arg(args, 1))))
        });
        self.add("trimSuffix", |args| {
            Ok(text(layout::trim_suffix(&text_arg(args, 0), &text_arg(args, 1))))
        });

        self.add("split", |args| {
            Ok(fragments(split::split(&text_arg(args, 0), &text_arg(args, 1))))
        });
        self.add("splitn", |args| {
            Ok(fragments(split::splitn(
                &text_arg(args, 0),
                int_arg(args, 1),
                &text_arg(args, 2),
            )))
        });

        self.add("join", |args| {
            Ok(text(join::join(&text_arg(args, 0), &arg(args, 1))))
        });
        self.add("sortAlpha", |args| {
            Ok(Value::List(
                join::sort_alpha(&arg(args, 0)).into_iter().map(text).collect(),
            ))
        });

        self.add("replace", |args| {
            Ok(text(layout::replace(
                &text_arg(args, 0),
                &text_arg(args, 1),
                &text_arg(args, 2),
            )))
        });
        self.add("indent", |args| {
            Ok(text(layout::indent(int_arg(args, 0), &text_arg(args, 1))))
        });
        self.add("nindent", |args| {
            Ok(text(layout::nindent(int_arg(args, 0), &text_arg(args, 1))))
        });

        self.add("abbrev", |args| {
            Ok(text(layout::abbrev(int_arg(args, 0), &text_arg(args, 1))))
        });
        self.add("abbrevboth", |args| {
            Ok(text(layout::abbrevboth(
                int_arg(args, 0),
                int_arg(args, 1),
                &text_arg(args, 2),
            )))
        });
        self.add("nospace", |args| Ok(text(layout::nospace(&text_arg(args, 0)))));
        self.add("untitle", |args| Ok(text(layout::untitle(&text_arg(args, 0)))));
        self.add("initials", |args| Ok(text(layout::initials(&text_arg(args, 0)))));
        self.add("wrap", |args| {
            Ok(text(layout::wrap(int_arg(args, 0), &text_arg(args, 1))))
        });
        self.add("wrapWith", |args| {
            Ok(text(layout::wrap_with(
                int_arg(args, 0),
                &text_arg(args, 1),
                &text_arg(args, 2),
            )))
        });
        self.add("plural", |args| {
            Ok(text(layout::plural(
                &text_arg(args, 0),
                &text_arg(args, 1),
                int_arg(args, 2),
            )))
        });

        self.add("randAlphaNum", |args| Ok(text(random::rand_alpha_num(int_arg(args, 0)))));
        self.add("randAlpha", |args| Ok(text(random::rand_alpha(int_arg(args, 0)))));
        self.add("randAscii", |args| Ok(text(random::rand_ascii(int_arg(args, 0)))));
        self.add("randNumeric", |args| Ok(text(random::rand_numeric(int_arg(args, 0)))));

        self.add("b64enc", |args| Ok(text(encode::base64_encode(&text_arg(args, 0)))));
        self.add("b64dec", |args| encode::base64_decode(&text_arg(args, 0)).map(text));
        self.add("b32enc", |args| Ok(text(encode::base32_encode(&text_arg(args, 0)))));
        self.add("b32dec", |args| encode::base32_decode(&text_arg(args, 0)).map(text));

        self.add("toString", |args| Ok(text(arg(args, 0).to_text())));
        self.add("toStrings", |args| {
            Ok(Value::List(
                join::text_list(&arg(args, 0)).into_iter().map(text).collect(),
            ))
        });
    }
}

impl Default for FunctionRegistry {
    fn default() -> Self {
        Self::standard()
    }
}

fn text(s: String) -> Value {
    Value::Text(s)
}

fn fragments(result: split::SplitResult) -> Value {
    Value::List(result.into_fragments().into_iter().map(text).collect())
}

/// Read argument `index`, with missing arguments reading as null.
fn arg(args: &[Value], index: usize) -> Value {
    args.get(index).cloned().unwrap_or(Value::Null)
}

fn text_arg(args: &[Value], index: usize) -> String {
    arg(args, index).to_text()
}

fn int_arg(args: &[Value], index: usize) -> i64 {
    arg(args, index).as_int()
}
