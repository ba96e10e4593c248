//! Email-shape check

use once_cell::sync::Lazy;
use regex::Regex;

use crate::whitespace::WHITESPACE_CLASS;

// local@domain.tld, each part free of whitespace and '@'
static EMAIL_SHAPE: Lazy<Regex> = Lazy::new(|| {
    let part = format!("[^@{}]+", WHITESPACE_CLASS);
    Regex::new(&format!(r"^{part}@{part}\.{part}$")).expect("email pattern compiles")
});

/// Returns true when `value` looks like an address.
///
/// This is a syntactic sanity check, not RFC 5322 validation: it rejects a
/// missing `@` or a missing `.` after it, and nothing more. Multiple dots,
/// odd domain labels and non-ASCII characters all pass as long as no part
/// contains whitespace or a second `@`.
pub fn is_email_shaped(value: &str) -> bool {
    EMAIL_SHAPE.is_match(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("a@b.com")]
    #[case("user.name+tag@example.co.uk")]
    #[case("a@b.c.d")]
    #[case("user@example..com")]
    #[case("josé@correio.br")]
    #[case("a\u{0085}b@c.com")]
    fn test_shaped(#[case] value: &str) {
        assert!(is_email_shaped(value), "{value:?} should be email-shaped");
    }

    #[rstest]
    #[case("")]
    #[case("not-an-email")]
    #[case("user@example")]
    #[case("@example.com")]
    #[case("user@")]
    #[case("user@@example.com")]
    #[case("a@b@c.com")]
    #[case("user name@example.com")]
    #[case("user@exa mple.com")]
    #[case(" a@b.com")]
    #[case("a@b.com\n")]
    #[case("a@b.")]
    #[case("user@.com")]
    #[case("a\u{FEFF}b@c.com")]
    #[case("a@b.com\u{FEFF}")]
    fn test_not_shaped(#[case] value: &str) {
        assert!(!is_email_shaped(value), "{value:?} should be rejected");
    }

    #[test]
    fn test_unicode_whitespace_rejected() {
        assert!(!is_email_shaped("a\u{00A0}b@c.com"));
        assert!(!is_email_shaped("a@b.\u{2003}com"));
    }
}
