//! Escaping of caller-supplied text embedded in HTML bodies.

use std::borrow::Cow;

/// Escape `&`, `<`, `>`, `"` and `'` so that `text` renders as literal text.
///
/// Returns the input unchanged (borrowed) when nothing needs escaping.
pub fn escape_html(text: &str) -> Cow<'_, str> {
    if !text.contains(['&', '<', '>', '"', '\'']) {
        return Cow::Borrowed(text);
    }

    let mut out = String::with_capacity(text.len() + 16);
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#x27;"),
            _ => out.push(c),
        }
    }
    Cow::Owned(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_text_borrowed() {
        assert!(matches!(escape_html("Rice, 5 kg"), Cow::Borrowed("Rice, 5 kg")));
    }

    #[test]
    fn test_script_tag_escaped() {
        assert_eq!(
            escape_html("<script>alert('x')</script>"),
            "&lt;script&gt;alert(&#x27;x&#x27;)&lt;/script&gt;"
        );
    }

    #[test]
    fn test_ampersand_and_quotes() {
        assert_eq!(escape_html(r#"Tom & "Jerry""#), "Tom &amp; &quot;Jerry&quot;");
    }

    #[test]
    fn test_empty() {
        assert_eq!(escape_html(""), "");
    }
}
