//! HTML escaping and serialization errors

use std::borrow::Cow;

/// Error writing rendered markup to a sink.
///
/// Rendering itself is infallible (styling resolution never errors); this
/// only surfaces I/O failures from [`crate::Node::write_html`].
#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    #[error("failed to write rendered markup")]
    Io(#[from] std::io::Error),
}

/// Escapes text for use in element content and attribute values.
///
/// Borrows when nothing needs escaping, which is the common case for
/// utility-class strings.
pub fn escape(input: &str) -> Cow<'_, str> {
    let needs_escape = input
        .bytes()
        .any(|b| matches!(b, b'&' | b'<' | b'>' | b'"' | b'\''));
    if !needs_escape {
        return Cow::Borrowed(input);
    }
    let mut out = String::with_capacity(input.len() + 8);
    for ch in input.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            other => out.push(other),
        }
    }
    Cow::Owned(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_borrows_clean_input() {
        assert!(matches!(escape("bg-white rounded-md"), Cow::Borrowed(_)));
    }

    #[test]
    fn test_escape_replaces_markup_characters() {
        assert_eq!(
            escape(r#"<a href="x">&'"#),
            "&lt;a href=&quot;x&quot;&gt;&amp;&#39;"
        );
    }
}
