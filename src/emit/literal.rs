//! C literal rendering

use std::borrow::Cow;
use std::fmt;

/// One field of an array entry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field<'a> {
    /// Rendered as a quoted, escaped string literal
    Str(&'a str),
    /// Rendered as unquoted decimal
    Uint(u64),
}

/// Escape `s` for use inside a double-quoted literal.
///
/// Only `"` is special; the upstream names are printable text without
/// control characters or backslashes.
pub fn escape(s: &str) -> Cow<'_, str> {
    if s.contains('"') {
        Cow::Owned(s.replace('"', "\\\""))
    } else {
        Cow::Borrowed(s)
    }
}

impl fmt::Display for Field<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Field::Str(s) => write!(f, "\"{}\"", escape(s)),
            Field::Uint(n) => write!(f, "{}", n),
        }
    }
}

/// Render fields as a brace-delimited initializer, e.g. `{76, "Apple, Inc."}`
pub fn render_entry(fields: &[Field<'_>]) -> String {
    let mut out = String::from("{");
    for (i, field) in fields.iter().enumerate() {
        if i > 0 {
            out.push_str(", ");
        }
        out.push_str(&field.to_string());
    }
    out.push('}');
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_quotes_only() {
        assert_eq!(escape("Acme \"Corp\""), "Acme \\\"Corp\\\"");
        assert_eq!(escape("Nordic Semiconductor ASA"), "Nordic Semiconductor ASA");
        assert!(matches!(escape("plain"), Cow::Borrowed(_)));
        assert_eq!(escape("Größe & Co. 'ltd'"), "Größe & Co. 'ltd'");
    }

    #[test]
    fn test_render_entry() {
        let entry = render_entry(&[Field::Uint(2), Field::Str("B"), Field::Uint(1), Field::Str("")]);
        assert_eq!(entry, "{2, \"B\", 1, \"\"}");
    }

    #[test]
    fn test_render_entry_escapes_strings() {
        let entry = render_entry(&[Field::Uint(76), Field::Str("Acme \"Corp\"")]);
        assert_eq!(entry, r#"{76, "Acme \"Corp\""}"#);
    }
}
