//! Markdown rendering pipeline.

use super::blocks::{rewrite_lines, wrap_paragraphs};
use super::rules::TEXT_RULES;

/// Renders a Markdown document to an HTML fragment.
///
/// Applies, in order: headings, bold, italic, fenced code, inline code,
/// images, links, paragraph wrapping, bullet items (first run wrapped in
/// `<ul>`), ordered items and blockquote lines. Each stage sees the output
/// of the previous one, so the order is part of the contract.
///
/// Never fails. Unmatched delimiters stay literal, and raw HTML in the
/// input is passed through unescaped, which makes the output unsafe for
/// untrusted documents. CRLF line endings are treated as LF.
///
/// # Arguments
///
/// * `markdown`: Markdown source text
///
/// # Returns
///
/// HTML fragment without document wrapper, empty for empty input
///
/// # Examples
///
/// ```
/// let html = tpw::markdown::render("# Title\n\nSome **bold** text.");
/// assert_eq!(html, "<h1>Title</h1>\n<p>Some <strong>bold</strong> text.</p>");
/// ```
pub fn render(markdown: &str) -> String {
    let text = markdown.replace("\r\n", "\n");
    let text = TEXT_RULES.iter().fold(text, |text, rule| rule.apply(text));
    let text = wrap_paragraphs(&text);
    rewrite_lines(text)
}
