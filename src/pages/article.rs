//! Blog, note and TYLI article page generation

use maud::{Markup, PreEscaped, html};

use crate::assets::ARTICLE_CSS;
use crate::components::layout::page_wrapper;
use crate::content::Entry;
use crate::markdown;
use crate::util::format_date;

/// Generates an article page
///
/// # Arguments
///
/// * `entry`: Article metadata
/// * `source`: Markdown body, `None` when the document is missing
///
/// # Returns
///
/// Complete HTML page as Markup
pub fn generate(entry: &Entry, source: Option<&str>) -> Markup {
    page_wrapper(
        &entry.info.title,
        &entry.page_path(),
        &[ARTICLE_CSS],
        html! {
            article.article {
                header.article-header {
                    h1.page-title { (entry.info.title) }
                    @if !entry.info.publish_date.is_empty() {
                        time.card-date datetime=(entry.info.publish_date) {
                            (format_date(&entry.info.publish_date))
                        }
                    }
                }
                @if let Some(source) = source {
                    div.markdown-body { (PreEscaped(markdown::render(source))) }
                } @else {
                    p.empty-state { "Error loading " (entry.kind.noun()) " content." }
                }
            }
        },
    )
}
