//! Page layout wrapper component

use maud::{DOCTYPE, Markup, html};

use super::footer::footer;
use super::nav::site_nav;
use crate::util::root_prefix;

/// Title suffix appended to every page title.
pub const SITE_NAME: &str = "The Philosopher's Window";

/// Wraps page content with standard HTML structure
///
/// Provides DOCTYPE, head, site navigation and footer around the page body.
/// The `<base href>` points back to the site root from `page_path`, so every
/// link in the page, Markdown output included, is resolved from the root.
///
/// # Arguments
///
/// * `title`: Page title text (without suffix)
/// * `page_path`: Site-relative path the page is written to
/// * `stylesheets`: Site-relative CSS file paths to include
/// * `body`: Page-specific body markup
///
/// # Returns
///
/// Complete HTML document with wrapped content
pub fn page_wrapper(title: &str, page_path: &str, stylesheets: &[&str], body: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                base href=(root_prefix(page_path));
                title { (title) " - " (SITE_NAME) }
                @for stylesheet in stylesheets {
                    link rel="stylesheet" href=(stylesheet);
                }
            }
            body {
                (site_nav())
                main class="container" {
                    (body)
                }
                (footer())
            }
        }
    }
}
