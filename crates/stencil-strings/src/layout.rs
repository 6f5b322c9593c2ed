/*
 * layout.rs
 * Copyright (c) 2025 Posit, PBC
 */

//! Whitespace, indentation, and literal-replace transforms.
//!
//! Everything here matches literally — no pattern or regex semantics — and
//! every function is total: out-of-range widths and counts clamp rather than
//! error.

/// Trim leading and trailing whitespace.
pub fn trim(text: &str) -> String {
    text.trim().to_string()
}

/// Trim any chars in `cutset` from both ends of `text`.
pub fn trim_all(cutset: &str, text: &str) -> String {
    text.trim_matches(|c| cutset.contains(c)).to_string()
}

/// Remove `prefix` from the front of `text` if present.
pub fn trim_prefix(prefix: &str, text: &str) -> String {
    text.strip_prefix(prefix).unwrap_or(text).to_string()
}

/// Remove `suffix` from the end of `text` if present.
pub fn trim_suffix(suffix: &str, text: &str) -> String {
    text.strip_suffix(suffix).unwrap_or(text).to_string()
}

/// Replace all non-overlapping occurrences of `old` with `new`, left to
/// right.
pub fn replace(old: &str, new: &str, text: &str) -> String {
    text.replace(old, new)
}

/// Prefix every line of `text` with `spaces` space characters.
///
/// Lines are split on newline; no leading newline is added before the first
/// line. Negative counts clamp to 0.
pub fn indent(spaces: i64, text: &str) -> String {
    let pad = " ".repeat(spaces.max(0) as usize);
    format!("{pad}{}", text.replace('\n', &format!("\n{pad}")))
}

/// Like [`indent`], with one newline prepended before the first line.
pub fn nindent(spaces: i64, text: &str) -> String {
    format!("\n{}", indent(spaces, text))
}

/// Ellipsis-truncate `text` to at most `max_width` chars.
///
/// Text already within the bound is returned unchanged, as is any text when
/// `max_width` is below the minimum abbreviation width of 4.
pub fn abbrev(max_width: i64, text: &str) -> String {
    let chars: Vec<char> = text.chars().collect();
    if max_width < 4 || chars.len() as i64 <= max_width {
        return text.to_string();
    }
    let mut out: String = chars[..(max_width - 3) as usize].iter().collect();
    out.push_str("...");
    out
}

/// Ellipsis-truncate `text` on both sides.
///
/// `left` is the char offset where the visible window starts; `right` is the
/// maximum result width. Text within the bound, or bounds below the minimum
/// widths (4, or 7 with a left offset), leave the text unchanged.
pub fn abbrevboth(left: i64, right: i64, text: &str) -> String {
    if right < 4 || (left > 0 && right < 7) {
        return text.to_string();
    }
    let chars: Vec<char> = text.chars().collect();
    let len = chars.len();
    let max_width = right as usize;
    if len <= max_width {
        return text.to_string();
    }

    let mut offset = (left.max(0) as usize).min(len);
    if len - offset < max_width - 3 {
        offset = len - (max_width - 3);
    }
    if offset <= 4 {
        let mut out: String = chars[..max_width - 3].iter().collect();
        out.push_str("...");
        return out;
    }
    let start = if offset + (max_width - 3) < len {
        offset
    } else {
        len - (max_width - 3)
    };
    let tail: String = chars[start..].iter().collect();
    format!("...{}", abbrev(right - 3, &tail))
}

/// Soft-wrap `text` at word boundaries near `width` chars, joining wrapped
/// lines with newline. Words longer than `width` are left unbroken.
pub fn wrap(width: i64, text: &str) -> String {
    wrap_custom(text, width, "\n", false)
}

/// Soft-wrap `text` near `width` chars, joining wrapped lines with `token`.
/// Words longer than `width` are broken at the width.
pub fn wrap_with(width: i64, token: &str, text: &str) -> String {
    wrap_custom(text, width, token, true)
}

fn wrap_custom(text: &str, width: i64, line_break: &str, break_long_words: bool) -> String {
    if text.is_empty() {
        return String::new();
    }
    let line_break = if line_break.is_empty() { "\n" } else { line_break };
    let width = width.max(1) as usize;
    let chars: Vec<char> = text.chars().collect();
    let len = chars.len();

    let mut out = String::with_capacity(text.len());
    let mut offset = 0;
    while len - offset > width {
        if chars[offset] == ' ' {
            offset += 1;
            continue;
        }
        // Window of width+1 chars: a space at the last position still lets a
        // full-width word fit on this line.
        let window = &chars[offset..offset + width + 1];
        if let Some(rel) = window.iter().rposition(|&c| c == ' ') {
            out.extend(&chars[offset..offset + rel]);
            out.push_str(line_break);
            offset += rel + 1;
        } else if break_long_words {
            out.extend(&chars[offset..offset + width]);
            out.push_str(line_break);
            offset += width;
        } else if let Some(rel) = chars[offset..].iter().position(|&c| c == ' ') {
            // Over-long word: emit it whole up to the next space.
            out.extend(&chars[offset..offset + rel]);
            out.push_str(line_break);
            offset += rel + 1;
        } else {
            out.extend(&chars[offset..]);
            offset = len;
        }
    }
    out.extend(&chars[offset..]);
    out
}

/// First letter of each whitespace-separated word, uppercased and
/// concatenated.
pub fn initials(text: &str) -> String {
    text.split_whitespace()
        .filter_map(|word| word.chars().next())
        .flat_map(char::to_uppercase)
        .collect()
}

/// Lowercase the first letter of each space-separated word.
pub fn untitle(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut at_word_start = true;
    for c in text.chars() {
        if c == ' ' {
            at_word_start = true;
            out.push(c);
        } else if at_word_start {
            out.extend(c.to_lowercase());
            at_word_start = false;
        } else {
            out.push(c);
        }
    }
    out
}

/// Remove all whitespace characters.
pub fn nospace(text: &str) -> String {
    text.chars().filter(|c| !c.is_whitespace()).collect()
}

/// Pick the singular or plural form for `count`.
pub fn plural(one: &str, many: &str, count: i64) -> String {
    if count == 1 {
        one.to_string()
    } else {
        many.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_trim_family() {
        assert_eq!(trim("   5.00   "), "5.00");
        assert_eq!(trim_all("$", "$5.00$"), "5.00");
        assert_eq!(trim_prefix("$", "$5.00"), "5.00");
        assert_eq!(trim_suffix("$", "5.00$"), "5.00");
    }

    #[test]
    fn test_trim_all_is_a_char_set() {
        assert_eq!(trim_all("$ ", " $5.00 $ "), "5.00");
    }

    #[test]
    fn test_trim_prefix_absent() {
        assert_eq!(trim_prefix("$", "5.00"), "5.00");
        assert_eq!(trim_suffix("$", "5.00"), "5.00");
    }

    #[test]
    fn test_replace() {
        assert_eq!(replace(" ", "-", "I Am Henry VIII"), "I-Am-Henry-VIII");
        assert_eq!(replace("x", "y", "no match"), "no match");
    }

    #[test]
    fn test_indent() {
        assert_eq!(indent(4, "a\nb\nc"), "    a\n    b\n    c");
        assert_eq!(indent(4, "a\nb"), "    a\n    b");
    }

    #[test]
    fn test_indent_negative_clamps() {
        assert_eq!(indent(-3, "a\nb"), "a\nb");
    }

    #[test]
    fn test_nindent() {
        assert_eq!(nindent(4, "a\nb\nc"), "\n    a\n    b\n    c");
    }

    #[test]
    fn test_abbrev() {
        assert_eq!(abbrev(5, "hello world"), "he...");
        assert_eq!(abbrev(11, "hello world"), "hello world");
        // Below the minimum width, text is left unchanged.
        assert_eq!(abbrev(3, "hello world"), "hello world");
    }

    #[test]
    fn test_abbrevboth() {
        assert_eq!(abbrevboth(5, 10, "1234 5678 9123"), "...5678...");
        assert_eq!(abbrevboth(0, 5, "hello world"), "he...");
        assert_eq!(abbrevboth(5, 10, "short"), "short");
        // left offset with right below 7 leaves text unchanged
        assert_eq!(abbrevboth(2, 6, "hello world"), "hello world");
    }

    #[test]
    fn test_abbrevboth_offset_near_end() {
        // Offset deep into the text pins the window to the tail.
        assert_eq!(abbrevboth(99, 10, "1234 5678 9123"), "...78 9123");
    }

    #[test]
    fn test_wrap() {
        assert_eq!(wrap(5, "Hello World"), "Hello\nWorld");
        assert_eq!(wrap(20, "Hello World"), "Hello World");
    }

    #[test]
    fn test_wrap_keeps_long_words_whole() {
        assert_eq!(wrap(4, "extraordinary word"), "extraordinary\nword");
    }

    #[test]
    fn test_wrap_with() {
        assert_eq!(wrap_with(5, "\t", "Hello World"), "Hello\tWorld");
    }

    #[test]
    fn test_wrap_with_breaks_long_words() {
        assert_eq!(wrap_with(4, "-", "abcdefgh"), "abcd-efgh");
    }

    #[test]
    fn test_wrap_empty() {
        assert_eq!(wrap(5, ""), "");
    }

    #[test]
    fn test_initials() {
        assert_eq!(initials("First Try"), "FT");
        assert_eq!(initials("lower case words"), "LCW");
        assert_eq!(initials(""), "");
    }

    #[test]
    fn test_untitle() {
        assert_eq!(untitle("First Try"), "first try");
        assert_eq!(untitle("ALL CAPS"), "aLL cAPS");
    }

    #[test]
    fn test_nospace() {
        assert_eq!(nospace("h e l l o "), "hello");
        assert_eq!(nospace("a\tb\nc"), "abc");
    }

    #[test]
    fn test_plural() {
        assert_eq!(plural("1 char", "chars", 3), "chars");
        assert_eq!(plural("cheese", "%d chars", 1), "cheese");
        assert_eq!(plural("one", "many", 0), "many");
    }
}
