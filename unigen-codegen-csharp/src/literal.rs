//! C# literal formatting.

use std::fmt::Write;

/// Format `value` as a regular (non-verbatim) C# string literal, quotes
/// included.
///
/// Quotes and backslashes are escaped, the named control characters use
/// their short escapes, and any other control character or line/paragraph
/// separator becomes `\uXXXX`.
pub fn string_literal(value: &str) -> String {
    let mut out = String::with_capacity(value.len() + 2);
    out.push('"');
    for c in value.chars() {
        match c {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\0' => out.push_str("\\0"),
            '\u{07}' => out.push_str("\\a"),
            '\u{08}' => out.push_str("\\b"),
            '\u{0C}' => out.push_str("\\f"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            '\u{0B}' => out.push_str("\\v"),
            c if c.is_control() || c == '\u{2028}' || c == '\u{2029}' => {
                let _ = write!(out, "\\u{:04x}", c as u32);
            }
            c => out.push(c),
        }
    }
    out.push('"');
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain() {
        assert_eq!(string_literal("circle"), "\"circle\"");
        assert_eq!(string_literal(""), "\"\"");
    }

    #[test]
    fn test_quote_and_backslash() {
        assert_eq!(string_literal("say \"hi\""), r#""say \"hi\"""#);
        assert_eq!(string_literal(r"a\b"), r#""a\\b""#);
    }

    #[test]
    fn test_short_escapes() {
        assert_eq!(string_literal("a\nb\tc\r"), r#""a\nb\tc\r""#);
        assert_eq!(
            string_literal("\0\u{07}\u{08}\u{0B}\u{0C}"),
            r#""\0\a\b\v\f""#
        );
    }

    #[test]
    fn test_unicode_escapes() {
        assert_eq!(string_literal("\u{1b}"), r#""\u001b""#);
        assert_eq!(string_literal("\u{85}"), r#""\u0085""#);
        assert_eq!(string_literal("x\u{2028}y"), r#""x\u2028y""#);
    }

    #[test]
    fn test_non_ascii_passes_through() {
        assert_eq!(string_literal("kreis·ø"), "\"kreis·ø\"");
    }
}
