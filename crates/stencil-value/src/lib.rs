/*
 * lib.rs
 * Copyright (c) 2025 Posit, PBC
 */

//! Template value type and text coercion for the Stencil template engine.
//!
//! This crate defines [`Value`], the closed set of argument kinds a template
//! expression can pass to a pipeline function, and the coercion rules that
//! turn any of them into canonical text. Conversion from host-provided JSON
//! metadata lives in [`json`].
//!
//! **Important**: These types are independent of the template parser and
//! evaluator. The engine evaluates expressions to `Value`s and hands them to
//! pipeline functions; everything here is a pure transformation over those
//! values.

pub mod json;
pub mod value;

// Re-export main types at crate root
pub use value::{Value, to_texts};
