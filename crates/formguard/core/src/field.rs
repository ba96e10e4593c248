//! Field kinds, verdicts and observed marking state

use serde::{Deserialize, Serialize};

use crate::config::FormConfig;
use crate::dom::Element;
use crate::email::is_email_shaped;
use crate::whitespace::trim_js;

/// How a field's value is checked, derived from its `type` attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FieldKind {
    /// Any non-empty value passes.
    Text,
    /// Non-empty and email-shaped.
    Email,
}

impl FieldKind {
    /// Parse from a `type` attribute value.
    ///
    /// Only the literal `email` is special. `tel`, `number`, a missing
    /// attribute and everything else fall back to free text.
    pub fn from_type_attr(type_attr: Option<&str>) -> Self {
        match type_attr {
            Some("email") => FieldKind::Email,
            _ => FieldKind::Text,
        }
    }

    /// Evaluate a raw (untrimmed) value.
    pub fn check(self, raw: &str) -> Verdict {
        let value = trim_value(raw);
        let valid = match self {
            FieldKind::Text => !value.is_empty(),
            FieldKind::Email => !value.is_empty() && is_email_shaped(value),
        };
        Verdict::from_bool(valid)
    }
}

/// Trim the way the browser's `String.prototype.trim` does.
pub fn trim_value(raw: &str) -> &str {
    trim_js(raw)
}

/// Outcome of evaluating one field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Verdict {
    Valid,
    Invalid,
}

impl Verdict {
    pub fn from_bool(valid: bool) -> Self {
        if valid {
            Verdict::Valid
        } else {
            Verdict::Invalid
        }
    }

    pub fn is_valid(self) -> bool {
        matches!(self, Verdict::Valid)
    }
}

/// Visual state of a field as read back from its classes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MarkState {
    /// Never evaluated, or cleared.
    Unmarked,
    Valid,
    Invalid,
    /// Both classes present. The validator never leaves a field like this.
    Conflicting,
}

impl MarkState {
    pub fn observe<E: Element>(element: &E, config: &FormConfig) -> Self {
        match (
            element.has_class(&config.valid_class),
            element.has_class(&config.invalid_class),
        ) {
            (false, false) => MarkState::Unmarked,
            (true, false) => MarkState::Valid,
            (false, true) => MarkState::Invalid,
            (true, true) => MarkState::Conflicting,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(Some("email"), FieldKind::Email)]
    #[case(Some("text"), FieldKind::Text)]
    #[case(Some("tel"), FieldKind::Text)]
    #[case(Some("number"), FieldKind::Text)]
    #[case(Some("EMAIL"), FieldKind::Text)]
    #[case(None, FieldKind::Text)]
    fn test_kind_from_type(#[case] attr: Option<&str>, #[case] expected: FieldKind) {
        assert_eq!(FieldKind::from_type_attr(attr), expected);
    }

    #[rstest]
    #[case(FieldKind::Text, "Maria", Verdict::Valid)]
    #[case(FieldKind::Text, "  x  ", Verdict::Valid)]
    #[case(FieldKind::Text, "", Verdict::Invalid)]
    #[case(FieldKind::Text, "  ", Verdict::Invalid)]
    #[case(FieldKind::Text, "\t\n", Verdict::Invalid)]
    #[case(FieldKind::Text, "\u{FEFF}", Verdict::Invalid)]
    #[case(FieldKind::Text, "\u{0085}", Verdict::Valid)]
    #[case(FieldKind::Email, "\u{FEFF}a@b.com\u{FEFF}", Verdict::Valid)]
    #[case(FieldKind::Email, "a@b.com", Verdict::Valid)]
    #[case(FieldKind::Email, "  a@b.com  ", Verdict::Valid)]
    #[case(FieldKind::Email, "not-an-email", Verdict::Invalid)]
    #[case(FieldKind::Email, "   ", Verdict::Invalid)]
    fn test_check(#[case] kind: FieldKind, #[case] raw: &str, #[case] expected: Verdict) {
        assert_eq!(kind.check(raw), expected);
    }

    #[test]
    fn test_trim_value() {
        assert_eq!(trim_value("\u{00A0} hi \u{FEFF}"), "hi");
        assert_eq!(trim_value("a b"), "a b");
        assert_eq!(trim_value(" \u{0085} "), "\u{0085}");
    }
}
