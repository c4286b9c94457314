//! Substitution rules applied before paragraph wrapping.

use regex::Regex;
use std::sync::LazyLock;

/// Single regex substitution applied across the whole document.
pub(super) struct Rule {
    pattern: Regex,
    replacement: &'static str,
}

impl Rule {
    /// Compiles a rule from a constant pattern.
    ///
    /// # Panics
    ///
    /// Panics if `pattern` is not a valid regex. Patterns are string
    /// literals in this module, so a failure is a programming error caught
    /// by the unit tests.
    pub(super) fn new(pattern: &str, replacement: &'static str) -> Self {
        Self {
            pattern: Regex::new(pattern).expect("markdown rule pattern must compile"),
            replacement,
        }
    }

    /// Replaces every match in `text`.
    pub(super) fn apply(&self, text: String) -> String {
        if !self.pattern.is_match(&text) {
            return text;
        }
        self.pattern
            .replace_all(&text, self.replacement)
            .into_owned()
    }
}

/// Heading, emphasis, code, image and link rules in application order.
///
/// Order matters:
/// - `###` before `##` before `#`
/// - bold before italic, so `**` pairs are gone when `*` is matched
/// - fenced code before inline code
/// - images before links, since `![a](b)` contains `[a](b)`
pub(super) static TEXT_RULES: LazyLock<Vec<Rule>> = LazyLock::new(|| {
    vec![
        Rule::new(r"(?m)^### (.*)$", "<h3>${1}</h3>"),
        Rule::new(r"(?m)^## (.*)$", "<h2>${1}</h2>"),
        Rule::new(r"(?m)^# (.*)$", "<h1>${1}</h1>"),
        Rule::new(r"\*\*(.+?)\*\*", "<strong>${1}</strong>"),
        Rule::new(r"__(.+?)__", "<strong>${1}</strong>"),
        Rule::new(r"\*(.+?)\*", "<em>${1}</em>"),
        Rule::new(r"_(.+?)_", "<em>${1}</em>"),
        Rule::new(r"(?s)```(.*?)```", "<pre><code>${1}</code></pre>"),
        Rule::new(r"`(.+?)`", "<code>${1}</code>"),
        Rule::new(
            r"!\[([^\]]*)\]\(([^)]*)\)",
            r#"<img src="${2}" alt="${1}" style="max-width: 100%; height: auto;">"#,
        ),
        Rule::new(
            r"\[([^\]]*)\]\(([^)]*)\)",
            r#"<a href="${2}" class="markdown-link" target="_blank" rel="noopener noreferrer">${1}</a>"#,
        ),
    ]
});
