//! Line-oriented block rendering.
//!
//! A single forward scan over the document's lines. The scanner state is an
//! explicit two-variant enum so the flush of an unclosed code fence at end
//! of input is a visible transition rather than a side effect of a flag.

use std::fmt::Write;
use std::sync::LazyLock;

use regex::Regex;

use crate::escape::escape_html;
use crate::inline;

/// Fallback paragraph emitted when the input renders to nothing.
const EMPTY_FALLBACK: &str = "<p>No content available.</p>";

/// Image syntax `![alt](url)`, matched anywhere in the line; alt may be
/// empty. Greedy captures, matching the article format's convention.
static IMAGE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"!\[(.*)\]\((.*)\)").expect("image pattern is valid"));

/// Scanner state carried across lines.
#[derive(Debug, PartialEq, Eq)]
enum ScanState {
    /// Outside any code fence.
    Normal,
    /// Inside a fence, accumulating verbatim content.
    InCodeBlock {
        /// Language tag from the opening fence, if any.
        language: Option<String>,
        /// Verbatim fence content, one trailing newline per line.
        content: String,
        /// 1-indexed line where the fence opened.
        opened_at: usize,
    },
}

/// Non-fatal warning produced while rendering.
///
/// Warnings never change the HTML contract; the output is complete either
/// way.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenderWarning {
    /// A code fence was opened but never closed; its accumulated content
    /// was flushed as a closed block.
    UnclosedCodeFence {
        /// 1-indexed line number of the opening fence.
        line: usize,
    },
}

impl std::fmt::Display for RenderWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RenderWarning::UnclosedCodeFence { line } => {
                write!(f, "Unclosed code fence opened at line {line}")
            }
        }
    }
}

/// Rendered HTML plus any warnings gathered along the way.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderResult {
    /// Rendered HTML.
    pub html: String,
    /// Non-fatal warnings.
    pub warnings: Vec<RenderWarning>,
}

/// Render a document to HTML.
///
/// Total over all inputs: malformed markup degrades to literal escaped
/// text, an unclosed fence is flushed with a warning, and whitespace-only
/// input yields the fallback paragraph.
#[must_use]
pub fn render(document: &str) -> RenderResult {
    let mut warnings = Vec::new();

    if document.trim().is_empty() {
        return RenderResult {
            html: EMPTY_FALLBACK.to_owned(),
            warnings,
        };
    }

    let mut html = String::new();
    let mut state = ScanState::Normal;

    for (idx, line) in document.split('\n').enumerate() {
        let trimmed = line.trim();

        // A fence delimiter line toggles the scanner state.
        if trimmed.starts_with("```") {
            state = match state {
                ScanState::Normal => {
                    let tag = trimmed[3..].trim();
                    ScanState::InCodeBlock {
                        language: (!tag.is_empty()).then(|| tag.to_owned()),
                        content: String::new(),
                        opened_at: idx + 1,
                    }
                }
                ScanState::InCodeBlock {
                    language, content, ..
                } => {
                    emit_code_block(language.as_deref(), &content, &mut html);
                    ScanState::Normal
                }
            };
            continue;
        }

        // Inside a fence every line is verbatim, blank ones included.
        if let ScanState::InCodeBlock { content, .. } = &mut state {
            content.push_str(line);
            content.push('\n');
            continue;
        }

        render_line(line, trimmed, &mut html);
    }

    // Input exhausted inside a fence: flush rather than drop.
    if let ScanState::InCodeBlock {
        language,
        content,
        opened_at,
    } = state
    {
        emit_code_block(language.as_deref(), &content, &mut html);
        warnings.push(RenderWarning::UnclosedCodeFence { line: opened_at });
    }

    if html.is_empty() {
        html.push_str(EMPTY_FALLBACK);
    }

    RenderResult { html, warnings }
}

/// Render a single line outside any code fence.
fn render_line(line: &str, trimmed: &str, out: &mut String) {
    // Headers, longest prefix first.
    for (prefix, tag) in [("#### ", "h4"), ("### ", "h3"), ("## ", "h2"), ("# ", "h1")] {
        if let Some(rest) = trimmed.strip_prefix(prefix) {
            write!(out, "<{tag}>{}</{tag}>", escape_html(rest)).unwrap();
            return;
        }
    }

    // Image lines collapse to the image tag alone.
    if let Some(captures) = IMAGE_RE.captures(line) {
        write!(
            out,
            r#"<img src="{}" alt="{}">"#,
            escape_html(&captures[2]),
            escape_html(&captures[1])
        )
        .unwrap();
        return;
    }

    if trimmed.is_empty() {
        out.push_str("<br>");
        return;
    }

    out.push_str("<p>");
    inline::render_spans(&inline::parse_spans(trimmed), out);
    out.push_str("</p>");
}

/// Emit a `<pre><code>` block, tagging the language class when present.
fn emit_code_block(language: Option<&str>, content: &str, out: &mut String) {
    if let Some(lang) = language {
        write!(
            out,
            r#"<pre><code class="language-{}">{}</code></pre>"#,
            escape_html(lang),
            escape_html(content)
        )
        .unwrap();
    } else {
        write!(out, "<pre><code>{}</code></pre>", escape_html(content)).unwrap();
    }
}
