/*
 * error.rs
 * Copyright (c) 2025 Posit, PBC
 */

//! Error types for template function evaluation.

use thiserror::Error;

/// Errors that can occur when calling a template function.
///
/// Decoding malformed encoded input is the only failure a transformation
/// function itself can produce; every other function is total over its input
/// domain via coercion and clamping. Adding a failure case to an existing
/// function is a breaking change.
#[derive(Debug, Error)]
pub enum FunctionError {
    /// Base64 decoding of malformed input.
    #[error("Invalid base64 input {input:?}")]
    Base64Decode {
        input: String,
        #[source]
        source: base64::DecodeError,
    },

    /// Base32 decoding of malformed input.
    #[error("Invalid base32 input {input:?}")]
    Base32Decode { input: String },

    /// Lookup of a name the registry does not carry.
    #[error("Unknown function: {name}")]
    UnknownFunction { name: String },
}

/// Result type for template function calls.
pub type FunctionResult<T> = Result<T, FunctionError>;
