//! Content renderer for the portfolio's markdown-like article format.
//!
//! Converts a constrained plain-text format into safe HTML:
//! headers (`# ` through `#### `), fenced code blocks with an optional
//! language tag, images (`![alt](url)`), links (`[text](url)`), bold and
//! italic spans, and blank-line breaks.
//!
//! Rendering is total: every input string produces HTML. Malformed markup
//! degrades to literal escaped text, an unclosed code fence is flushed
//! rather than dropped, and whitespace-only input yields a fallback
//! paragraph. The renderer is a pure function of its input with no I/O and
//! no shared state, so it can be called concurrently without coordination.
//!
//! # Example
//!
//! ```
//! use folio_renderer::render_html;
//!
//! let html = render_html("# Hello\n\n**Bold** text");
//! assert_eq!(html, "<h1>Hello</h1><br><p><strong>Bold</strong> text</p>");
//! ```

mod escape;
mod inline;
mod renderer;

pub use escape::escape_html;
pub use renderer::{RenderResult, RenderWarning, render};

/// Render a document to HTML, discarding warnings.
///
/// Convenience wrapper around [`render`] for callers that only need the
/// markup.
#[must_use]
pub fn render_html(document: &str) -> String {
    render(document).html
}
