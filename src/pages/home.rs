//! Home page generation

use maud::{Markup, html};

use crate::assets::HOME_CSS;
use crate::components::layout::page_wrapper;
use crate::content::{ArticleKind, Catalog};
use crate::listing::Section;

/// Generates the home page
///
/// Links every section with its entry count.
pub fn generate(catalog: &Catalog) -> Markup {
    let count = |section: Section| match section {
        Section::Albums => catalog.albums.len(),
        Section::Blogs => catalog.entries(ArticleKind::Blog).len(),
        Section::Notes => catalog.entries(ArticleKind::Note).len(),
        Section::Tyli => catalog.entries(ArticleKind::Tyli).len(),
    };

    page_wrapper(
        "Home",
        "index.html",
        &[HOME_CSS],
        html! {
            h1.page-title { "The Philosopher's Window" }
            div.home-sections {
                @for section in Section::ALL {
                    a.card.home-section href=(section.index_path()) {
                        h2.card-title { (section.title()) }
                        span.home-section-count { (count(section)) " entries" }
                    }
                }
            }
        },
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::{Entry, EntryInfo};

    #[test]
    fn test_home_counts_sections() {
        // Arrange
        let mut catalog = Catalog::default();
        catalog.blogs.push(Entry {
            kind: ArticleKind::Blog,
            dir: "blogs/one".to_string(),
            sequence: 1,
            info: EntryInfo {
                title: "One".to_string(),
                publish_date: String::new(),
                excerpt: None,
                summary: None,
            },
        });

        // Act
        let html = generate(&catalog).into_string();

        // Assert
        assert!(html.contains("href=\"blogs/index.html\""));
        assert!(html.contains("1 entries"), "Blog count should be shown");
        assert!(html.contains("0 entries"), "Empty sections show zero");
        assert!(html.contains("<base href=\"./\">"));
    }
}
