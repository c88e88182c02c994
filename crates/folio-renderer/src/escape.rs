//! HTML escaping.

/// Escape HTML special characters in text or attribute content.
///
/// Converts `&`, `<`, `>`, and `"` to entity references. Every piece of
/// user text passes through here exactly once; already-rendered markup is
/// never fed back in.
#[must_use]
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }
    out
}
