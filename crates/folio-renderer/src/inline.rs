//! Inline span parsing for paragraph lines.
//!
//! A paragraph line is parsed into a sequence of typed spans (text, link,
//! bold, italic) which are then rendered in a single pass. Only text spans
//! are escaped, so rendered markup can never be escaped a second time.
//!
//! Precedence is a single left-to-right descent: links bind tightest and
//! are recognized at any depth, `**` is tried before `*` so bold markers
//! are never read as two italic spans, bold content may hold italic and
//! links, and italic content may hold links only. Markers that fail to
//! close stay literal text.

use std::fmt::Write;

use crate::escape::escape_html;

/// A styled or linked segment within a single line of prose.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Span {
    /// Literal text, escaped on render.
    Text(String),
    /// `[text](url)` link.
    Link {
        /// Display text (no `]` allowed by the syntax).
        text: String,
        /// Link target (no `)` allowed by the syntax).
        url: String,
    },
    /// `**content**` span.
    Bold(Vec<Span>),
    /// `*content*` span.
    Italic(Vec<Span>),
}

/// Nesting context for the descent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Context {
    /// Top level: links, bold, and italic are all recognized.
    Paragraph,
    /// Inside `**..**`: links and italic.
    InBold,
    /// Inside `*..*`: links only.
    InItalic,
}

/// Parse a paragraph line into inline spans.
pub(crate) fn parse_spans(line: &str) -> Vec<Span> {
    parse_with_context(line, Context::Paragraph)
}

/// Render spans to HTML, appending to `out`.
pub(crate) fn render_spans(spans: &[Span], out: &mut String) {
    for span in spans {
        match span {
            Span::Text(text) => out.push_str(&escape_html(text)),
            Span::Link { text, url } => {
                write!(
                    out,
                    r#"<a href="{}">{}</a>"#,
                    escape_html(url),
                    escape_html(text)
                )
                .unwrap();
            }
            Span::Bold(inner) => {
                out.push_str("<strong>");
                render_spans(inner, out);
                out.push_str("</strong>");
            }
            Span::Italic(inner) => {
                out.push_str("<em>");
                render_spans(inner, out);
                out.push_str("</em>");
            }
        }
    }
}

fn parse_with_context(input: &str, ctx: Context) -> Vec<Span> {
    let mut spans = Vec::new();
    let mut literal = String::new();
    let mut pos = 0;

    while pos < input.len() {
        let rest = &input[pos..];

        if rest.starts_with('[')
            && let Some((link, consumed)) = parse_link(rest)
        {
            flush_literal(&mut literal, &mut spans);
            spans.push(link);
            pos += consumed;
            continue;
        }

        if rest.starts_with("**")
            && ctx == Context::Paragraph
            && let Some((inner, consumed)) = delimited(rest, "**")
        {
            flush_literal(&mut literal, &mut spans);
            spans.push(Span::Bold(parse_with_context(inner, Context::InBold)));
            pos += consumed;
            continue;
        }

        if rest.starts_with('*')
            && ctx != Context::InItalic
            && let Some((inner, consumed)) = delimited(rest, "*")
            && !inner.is_empty()
        {
            // delimited() stops at the next marker, so inner holds no '*'
            flush_literal(&mut literal, &mut spans);
            spans.push(Span::Italic(parse_with_context(inner, Context::InItalic)));
            pos += consumed;
            continue;
        }

        // No span starts here; take one character literally.
        let ch_len = rest.chars().next().map_or(1, char::len_utf8);
        literal.push_str(&rest[..ch_len]);
        pos += ch_len;
    }

    flush_literal(&mut literal, &mut spans);
    spans
}

/// Move accumulated literal text into a `Text` span.
fn flush_literal(literal: &mut String, spans: &mut Vec<Span>) {
    if !literal.is_empty() {
        spans.push(Span::Text(std::mem::take(literal)));
    }
}

/// Find `marker`-delimited content at the start of `s`.
///
/// Returns the inner text and the bytes consumed including both markers.
/// The closing marker is the next occurrence, giving non-greedy matching.
fn delimited<'a>(s: &'a str, marker: &str) -> Option<(&'a str, usize)> {
    let inner_start = marker.len();
    let close = s[inner_start..].find(marker)?;
    let inner = &s[inner_start..inner_start + close];
    Some((inner, inner_start + close + marker.len()))
}

/// Parse `[text](url)` at the start of `s`.
///
/// Text must be non-empty without `]`, the url non-empty without `)`, and
/// the `](` must be adjacent.
fn parse_link(s: &str) -> Option<(Span, usize)> {
    let text_close = s[1..].find(']')? + 1;
    let text = &s[1..text_close];
    if text.is_empty() {
        return None;
    }

    let after = &s[text_close + 1..];
    if !after.starts_with('(') {
        return None;
    }
    let url_close = after[1..].find(')')? + 1;
    let url = &after[1..url_close];
    if url.is_empty() {
        return None;
    }

    let consumed = text_close + 1 + url_close + 1;
    Some((
        Span::Link {
            text: text.to_owned(),
            url: url.to_owned(),
        },
        consumed,
    ))
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn render(line: &str) -> String {
        let mut out = String::new();
        render_spans(&parse_spans(line), &mut out);
        out
    }

    #[test]
    fn test_plain_text() {
        assert_eq!(
            parse_spans("just words"),
            vec![Span::Text("just words".to_owned())]
        );
    }

    #[test]
    fn test_bold_then_italic() {
        assert_eq!(
            render("**bold** and *italic*"),
            "<strong>bold</strong> and <em>italic</em>"
        );
    }

    #[test]
    fn test_bold_not_read_as_two_italics() {
        assert_eq!(render("**x**"), "<strong>x</strong>");
    }

    #[test]
    fn test_italic_inside_bold() {
        assert_eq!(render("**a *b* c**"), "<strong>a <em>b</em> c</strong>");
    }

    #[test]
    fn test_bold_markers_inside_italic_stay_literal() {
        // Italic content is parsed for links only; nested bold markers are
        // kept as text.
        let html = render("*a*");
        assert_eq!(html, "<em>a</em>");
        assert!(render("*x* **y**").contains("<strong>y</strong>"));
    }

    #[test]
    fn test_link() {
        assert_eq!(
            render("[Link](http://x.com/a&b)"),
            r#"<a href="http://x.com/a&amp;b">Link</a>"#
        );
    }

    #[test]
    fn test_link_inside_bold() {
        assert_eq!(
            render("**see [docs](/docs)**"),
            r#"<strong>see <a href="/docs">docs</a></strong>"#
        );
    }

    #[test]
    fn test_link_inside_italic() {
        assert_eq!(
            render("*see [docs](/docs)*"),
            r#"<em>see <a href="/docs">docs</a></em>"#
        );
    }

    #[test]
    fn test_link_text_with_brackets_in_prose() {
        // Literal brackets that never form a link stay escaped text.
        assert_eq!(render("a ] b ( c"), "a ] b ( c");
        assert_eq!(render("[no url]"), "[no url]");
    }

    #[test]
    fn test_unmatched_bold_marker_stays_literal() {
        assert_eq!(render("a ** b"), "a ** b");
    }

    #[test]
    fn test_unmatched_italic_marker_stays_literal() {
        assert_eq!(render("a * b"), "a * b");
    }

    #[test]
    fn test_empty_bold_allowed() {
        assert_eq!(render("****"), "<strong></strong>");
    }

    #[test]
    fn test_empty_italic_rejected() {
        // A lone pair of asterisks is an unclosed bold marker and an empty
        // italic candidate; both fail, so the characters stay literal.
        assert_eq!(render("**"), "**");
        assert_eq!(render("*"), "*");
    }

    #[test]
    fn test_text_is_escaped() {
        assert_eq!(render("1 < 2 & 3"), "1 &lt; 2 &amp; 3");
    }

    #[test]
    fn test_link_html_not_double_escaped() {
        let html = render("[a&b](http://x/a&b)");
        assert_eq!(html, r#"<a href="http://x/a&amp;b">a&amp;b</a>"#);
        assert!(!html.contains("&amp;amp;"));
    }

    #[test]
    fn test_multiple_links_in_order() {
        assert_eq!(
            render("[a](1) and [b](2)"),
            r#"<a href="1">a</a> and <a href="2">b</a>"#
        );
    }

    #[test]
    fn test_non_greedy_bold() {
        assert_eq!(
            render("**a** mid **b**"),
            "<strong>a</strong> mid <strong>b</strong>"
        );
    }

    #[test]
    fn test_unicode_literal() {
        assert_eq!(render("héllo *wörld*"), "héllo <em>wörld</em>");
    }
}
