//! Form validation results and input sanitizing

/// One failed validation rule
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    /// Name of the form field
    pub field: &'static str,
    pub message: String,
}

/// Replace markup-significant characters with HTML entities.
///
/// Covers `& " ' < > / \` and the backtick.
pub fn escape_html(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#x27;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '/' => out.push_str("&#x2F;"),
            '\\' => out.push_str("&#x5C;"),
            '`' => out.push_str("&#96;"),
            c => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escapes_markup() {
        assert_eq!(
            escape_html(r#"<a href="x">'it'</a>"#),
            "&lt;a href=&quot;x&quot;&gt;&#x27;it&#x27;&lt;&#x2F;a&gt;"
        );
    }

    #[test]
    fn escapes_ampersand_once() {
        assert_eq!(escape_html("&amp;"), "&amp;amp;");
    }

    #[test]
    fn escapes_backslash_and_backtick() {
        assert_eq!(escape_html("a\\b`c"), "a&#x5C;b&#96;c");
    }

    #[test]
    fn leaves_plain_text_alone() {
        assert_eq!(escape_html("Dune, 978-0441013593"), "Dune, 978-0441013593");
        assert_eq!(escape_html(""), "");
    }
}
