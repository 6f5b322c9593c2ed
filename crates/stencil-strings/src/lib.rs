/*
 * lib.rs
 * Copyright (c) 2025 Posit, PBC
 */

//! String transformation functions for Stencil template expressions.
//!
//! This crate implements the string function set a template pipes values
//! through: `$name/trunc 8$`, `$path/split "/"$`, and so on. It covers:
//!
//! - Bounds-safe, char-indexed substring and truncation: [`substr`], [`trunc`]
//! - Quoting and concatenation with null-skipping: [`quote`], [`squote`], [`cat`]
//! - Literal delimiter splitting into indexable fragments: [`split`], [`splitn`]
//! - Joining and textual sorting of sequences: [`join`], [`sort_alpha`]
//! - Whitespace, indentation, and literal-replace transforms: [`trim`],
//!   [`replace`], [`indent`], [`wrap`], [`abbrev`], …
//! - Secure random strings over named character classes: [`rand_alpha_num`], …
//! - Base64/base32 codecs: [`base64_encode`], [`base32_decode`], …
//!
//! Every function is a pure, reentrant transformation over already-evaluated
//! [`stencil_value::Value`] arguments; random generation is the one effectful
//! exception, drawing from the OS entropy source. Out-of-range indices and
//! null arguments coerce or clamp instead of erroring — only decoding
//! malformed base64/base32 input can fail.
//!
//! The host engine consumes [`FunctionRegistry`], a flat name → callable
//! table merged into its function namespace:
//!
//! ```
//! use stencil_strings::FunctionRegistry;
//! use stencil_value::Value;
//!
//! let registry = FunctionRegistry::standard();
//! let out = registry.call("trunc", &[Value::Int(3), Value::from("foooooo")]);
//! assert_eq!(out.unwrap(), Value::from("foo"));
//! ```

pub mod encode;
pub mod error;
pub mod join;
pub mod layout;
pub mod quoting;
pub mod random;
pub mod registry;
pub mod split;
pub mod substring;

// Re-export main types and functions at crate root
pub use encode::{base32_decode, base32_encode, base64_decode, base64_encode};
pub use error::{FunctionError, FunctionResult};
pub use join::{join, sort_alpha, text_list};
pub use layout::{
    abbrev, abbrevboth, indent, initials, nindent, nospace, plural, replace, trim, trim_all,
    trim_prefix, trim_suffix, untitle, wrap, wrap_with,
};
pub use quoting::{cat, quote, squote};
pub use random::{CharClass, rand_alpha, rand_alpha_num, rand_ascii, rand_numeric, random_string};
pub use registry::{FunctionRegistry, TemplateFunction};
pub use split::{SplitResult, split, splitn};
pub use substring::{substr, trunc};
