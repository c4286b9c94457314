//! Paragraph wrapping and line level list and quote rewriting.

use regex::Regex;
use std::sync::LazyLock;

use super::rules::Rule;

/// Blank line boundary: two or more newlines, whitespace-only lines included.
static BLANK_LINES: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\n(?:[ \t]*\n)+").expect("blank line pattern must compile"));

/// Opening or closing tag of an element a paragraph must not wrap.
static BLOCK_TAG: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"</?(?:h[1-6]|pre|ul|ol|li|blockquote)[\s>]").expect("block tag pattern must compile")
});

/// List or quote syntax at the start of a block, rewritten after wrapping.
static BLOCK_MARKER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(?:- |\d+\. |> )").expect("block marker pattern must compile"));

static BULLET_ITEM: LazyLock<Rule> = LazyLock::new(|| Rule::new(r"(?m)^- (.*)$", "<li>${1}</li>"));

/// First run of consecutive list item lines.
static ITEM_RUN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?m)^<li>.*</li>(?:\n<li>.*</li>)*$").expect("item run pattern must compile")
});

static ORDERED_ITEM: LazyLock<Rule> =
    LazyLock::new(|| Rule::new(r"(?m)^\d+\. (.*)$", "<li>${1}</li>"));

static QUOTE_LINE: LazyLock<Rule> =
    LazyLock::new(|| Rule::new(r"(?m)^> (.*)$", "<blockquote>${1}</blockquote>"));

/// Splits text into blank-line separated blocks and wraps plain ones in `<p>`.
///
/// Blocks are trimmed and empty blocks dropped. A block that already holds
/// block-level markup, or starts with list or quote syntax, is kept as is.
/// Single newlines inside a wrapped block become `<br>`.
pub(super) fn wrap_paragraphs(text: &str) -> String {
    BLANK_LINES
        .split(text)
        .map(str::trim)
        .filter(|block| !block.is_empty())
        .map(|block| {
            if is_block_level(block) {
                block.to_string()
            } else {
                format!("<p>{}</p>", block.replace('\n', "<br>"))
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn is_block_level(block: &str) -> bool {
    BLOCK_TAG.is_match(block) || BLOCK_MARKER.is_match(block)
}

/// Rewrites bullet items, ordered items and quote lines.
///
/// Only the first contiguous run of bullet items is wrapped in `<ul>`.
/// Ordered items never get an `<ol>` and run after the wrap, so they are
/// not merged into it. Each quote line becomes its own `<blockquote>`.
pub(super) fn rewrite_lines(text: String) -> String {
    let text = BULLET_ITEM.apply(text);
    let text = wrap_first_item_run(text);
    let text = ORDERED_ITEM.apply(text);
    QUOTE_LINE.apply(text)
}

fn wrap_first_item_run(text: String) -> String {
    match ITEM_RUN.find(&text) {
        Some(run) => format!(
            "{}<ul>{}</ul>{}",
            &text[..run.start()],
            run.as_str(),
            &text[run.end()..]
        ),
        None => text,
    }
}
