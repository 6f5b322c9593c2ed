/*
 * encode.rs
 * Copyright (c) 2025 Posit, PBC
 */

//! Base64 and base32 codecs.
//!
//! Decoding malformed input is the only operation in this crate that can
//! fail; the error carries the offending input for the host's diagnostics.
//! Decoded bytes are rendered as text without charset validation, matching
//! the coercion layer's byte policy.

use base64::Engine;
use base64::engine::general_purpose::STANDARD;

use crate::error::{FunctionError, FunctionResult};

const BASE32: base32::Alphabet = base32::Alphabet::Rfc4648 { padding: true };

/// Base64-encode `text` (standard alphabet, padded).
pub fn base64_encode(text: &str) -> String {
    STANDARD.encode(text.as_bytes())
}

/// Decode base64 `text` back to text.
pub fn base64_decode(text: &str) -> FunctionResult<String> {
    let bytes = STANDARD.decode(text).map_err(|source| {
        tracing::debug!(input = text, "base64 decode failed");
        FunctionError::Base64Decode {
            input: text.to_string(),
            source,
        }
    })?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

/// Base32-encode `text` (RFC 4648 alphabet, padded).
pub fn base32_encode(text: &str) -> String {
    base32::encode(BASE32, text.as_bytes())
}

/// Decode base32 `text` back to text.
pub fn base32_decode(text: &str) -> FunctionResult<String> {
    match base32::decode(BASE32, text) {
        Some(bytes) => Ok(String::from_utf8_lossy(&bytes).into_owned()),
        None => {
            tracing::debug!(input = text, "base32 decode failed");
            Err(FunctionError::Base32Decode {
                input: text.to_string(),
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_base64_known_value() {
        assert_eq!(base64_encode("coffee"), "Y29mZmVl");
        assert_eq!(base64_decode("Y29mZmVl").unwrap(), "coffee");
    }

    #[test]
    fn test_base64_round_trip() {
        for text in ["", "a", "ab", "abc", "hello world", "héllo 日本語"] {
            let encoded = base64_encode(text);
            assert_eq!(base64_decode(&encoded).unwrap(), text);
        }
    }

    #[test]
    fn test_base64_decode_error_carries_input() {
        let err = base64_decode("not//valid!").unwrap_err();
        match err {
            FunctionError::Base64Decode { input, .. } => assert_eq!(input, "not//valid!"),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_base32_known_value() {
        assert_eq!(base32_encode("coffee"), "MNXWMZTFMU======");
        assert_eq!(base32_decode("MNXWMZTFMU======").unwrap(), "coffee");
    }

    #[test]
    fn test_base32_round_trip() {
        for text in ["", "a", "ab", "abcde", "hello world"] {
            let encoded = base32_encode(text);
            assert_eq!(base32_decode(&encoded).unwrap(), text);
        }
    }

    #[test]
    fn test_base32_decode_error_carries_input() {
        let err = base32_decode("!!!!").unwrap_err();
        match err {
            FunctionError::Base32Decode { input } => assert_eq!(input, "!!!!"),
            other => panic!("unexpected error: {other}"),
        }
    }
}
