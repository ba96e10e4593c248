//! Browser whitespace
//!
//! Values are checked the way the page's script would check them, so
//! "whitespace" means the ECMAScript WhiteSpace and LineTerminator sets used
//! by `String.prototype.trim` and regex `\s`. That set includes U+FEFF and
//! excludes U+0085, the opposite of Rust's `char::is_whitespace`.

/// Regex character-class body for the ECMAScript whitespace set.
pub(crate) const WHITESPACE_CLASS: &str = r"\t\n\x0B\x0C\r \x{A0}\x{1680}\x{2000}-\x{200A}\x{2028}\x{2029}\x{202F}\x{205F}\x{3000}\x{FEFF}";

/// True for characters in the ECMAScript whitespace set.
pub fn is_js_whitespace(c: char) -> bool {
    c == '\u{FEFF}' || (c.is_whitespace() && c != '\u{0085}')
}

/// Trim like `String.prototype.trim`.
pub fn trim_js(raw: &str) -> &str {
    raw.trim_matches(is_js_whitespace)
}

#[cfg(test)]
mod tests {
    use super::*;
    use once_cell::sync::Lazy;
    use regex::Regex;
    use rstest::rstest;

    static CLASS: Lazy<Regex> =
        Lazy::new(|| Regex::new(&format!("^[{}]$", WHITESPACE_CLASS)).unwrap());

    #[rstest]
    #[case('\u{FEFF}', true)]
    #[case('\u{0085}', false)]
    #[case('\u{00A0}', true)]
    #[case('\u{2028}', true)]
    #[case('\u{200B}', false)]
    #[case('\u{180E}', false)]
    #[case('\u{000B}', true)]
    #[case('x', false)]
    fn test_js_whitespace(#[case] c: char, #[case] expected: bool) {
        assert_eq!(is_js_whitespace(c), expected);
    }

    #[test]
    fn test_class_agrees_with_predicate() {
        let chars = (0u32..0x3100)
            .chain(0xFEF0..0xFF00)
            .filter_map(char::from_u32);
        for c in chars {
            assert_eq!(
                CLASS.is_match(c.encode_utf8(&mut [0; 4])),
                is_js_whitespace(c),
                "U+{:04X}",
                c as u32
            );
        }
    }

    #[test]
    fn test_trim_js() {
        assert_eq!(trim_js("\u{FEFF} hi \u{00A0}"), "hi");
        assert_eq!(trim_js("\u{0085}"), "\u{0085}");
        assert_eq!(trim_js("a b"), "a b");
    }
}
