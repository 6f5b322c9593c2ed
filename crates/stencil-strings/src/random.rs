/*
 * random.rs
 * Copyright (c) 2025 Posit, PBC
 */

//! Secure random string generation.
//!
//! Characters are drawn independently and uniformly from a named class using
//! the operating system's entropy source. There is no seeding hook: two
//! calls with the same length must never be assumed equal.

use rand::rngs::OsRng;
use rand::{Rng, TryRngCore};

/// A named set of permissible characters for random generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CharClass {
    /// Letters and digits.
    AlphaNumeric,
    /// Letters only.
    Alphabetic,
    /// Digits only.
    Numeric,
    /// Printable ASCII, space through `~`.
    Ascii,
}

const ALPHABETIC: &[u8] = b"abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ";
const ALPHA_NUMERIC: &[u8] = b"abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";
const NUMERIC: &[u8] = b"0123456789";

const ASCII_PRINTABLE: [u8; 95] = {
    let mut table = [0u8; 95];
    let mut i = 0;
    while i < table.len() {
        table[i] = b' ' + i as u8;
        i += 1;
    }
    table
};

impl CharClass {
    /// Check whether `c` belongs to this class.
    pub fn contains(self, c: char) -> bool {
        c.is_ascii() && self.alphabet().contains(&(c as u8))
    }

    fn alphabet(self) -> &'static [u8] {
        match self {
            CharClass::AlphaNumeric => ALPHA_NUMERIC,
            CharClass::Alphabetic => ALPHABETIC,
            CharClass::Numeric => NUMERIC,
            CharClass::Ascii => &ASCII_PRINTABLE,
        }
    }
}

/// Generate `length` chars drawn uniformly from `class`.
///
/// The result has exactly `length` chars; non-positive lengths yield empty
/// text.
pub fn random_string(length: i64, class: CharClass) -> String {
    if length <= 0 {
        return String::new();
    }
    let alphabet = class.alphabet();
    let mut rng = OsRng.unwrap_err();
    (0..length)
        .map(|_| char::from(alphabet[rng.random_range(0..alphabet.len())]))
        .collect()
}

/// Random letters and digits.
pub fn rand_alpha_num(length: i64) -> String {
    random_string(length, CharClass::AlphaNumeric)
}

/// Random letters.
pub fn rand_alpha(length: i64) -> String {
    random_string(length, CharClass::Alphabetic)
}

/// Random printable ASCII.
pub fn rand_ascii(length: i64) -> String {
    random_string(length, CharClass::Ascii)
}

/// Random digits.
pub fn rand_numeric(length: i64) -> String {
    random_string(length, CharClass::Numeric)
}
