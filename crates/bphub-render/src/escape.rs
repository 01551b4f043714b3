//! HTML escaping for two distinct contexts.
//!
//! Element content needs `&`, `<`, `>` neutralized. Attribute values
//! additionally need both quote characters, or an attacker can break out of
//! the attribute. The two must not be conflated: always pick the function
//! matching where the text lands.

/// Escape text for HTML element content.
pub fn escape_html(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(c),
        }
    }
    out
}

/// Escape text for an HTML attribute value. Neutralizes quotes in addition
/// to the element-content set.
pub fn escape_attr(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_script_tag_is_neutralized() {
        let escaped = escape_html("<script>alert(1)</script>");
        assert!(!escaped.contains("<script>"));
        assert_eq!(escaped, "&lt;script&gt;alert(1)&lt;/script&gt;");
    }

    #[test]
    fn test_ampersand_is_escaped_first() {
        assert_eq!(escape_html("a & b"), "a &amp; b");
        // Already-escaped input is escaped again, not passed through.
        assert_eq!(escape_html("&lt;"), "&amp;lt;");
    }

    #[test]
    fn test_element_context_leaves_quotes_alone() {
        assert_eq!(escape_html(r#"say "hi""#), r#"say "hi""#);
    }

    #[test]
    fn test_attr_context_neutralizes_both_quote_kinds() {
        assert_eq!(
            escape_attr(r#"" onmouseover='x'"#),
            "&quot; onmouseover=&#39;x&#39;"
        );
    }

    #[test]
    fn test_plain_text_is_untouched() {
        assert_eq!(escape_html("Double Jump Pad"), "Double Jump Pad");
        assert_eq!(escape_attr("Double Jump Pad"), "Double Jump Pad");
    }
}
