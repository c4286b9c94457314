//! Blog, TYLI and notes listing page generation

use maud::{Markup, html};

use super::ListingView;
use crate::assets::LISTING_CSS;
use crate::components::cards::entry_card;
use crate::components::layout::page_wrapper;
use crate::components::nav::{pager, sort_link};
use crate::content::Entry;
use crate::listing::Section;

/// Generates one page of a blog or TYLI listing
///
/// # Arguments
///
/// * `section`: Section being listed
/// * `entries`: Entries on this page, already ordered
/// * `view`: Direction, page position and output path
///
/// # Returns
///
/// Complete HTML page as Markup
pub fn generate(section: Section, entries: &[&Entry], view: ListingView<'_>) -> Markup {
    page_wrapper(
        section.title(),
        view.path,
        &[LISTING_CSS],
        html! {
            div.listing-controls {
                h1.page-title { (section.title()) }
                (sort_link(section, view.direction))
            }
            @if entries.is_empty() {
                div.empty-state { p { "No entries found." } }
            } @else {
                div.entry-list {
                    @for entry in entries {
                        (entry_card(entry))
                    }
                }
            }
            (pager(section, view.direction, view.pagination))
        },
    )
}

/// Generates the notes listing
///
/// Notes are listed on a single page with their summaries.
///
/// # Arguments
///
/// * `notes`: All notes, already ordered
/// * `view`: Direction and output path; the pager is never shown
///
/// # Returns
///
/// Complete HTML page as Markup
pub fn generate_notes(notes: &[&Entry], view: ListingView<'_>) -> Markup {
    let section = Section::Notes;

    page_wrapper(
        section.title(),
        view.path,
        &[LISTING_CSS],
        html! {
            div.listing-controls {
                h1.page-title { (section.title()) }
                (sort_link(section, view.direction))
            }
            @if notes.is_empty() {
                div.empty-state { p { "No notes found." } }
            } @else {
                div.entry-list {
                    @for note in notes {
                        (entry_card(note))
                    }
                }
            }
        },
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::{ArticleKind, EntryInfo};
    use crate::listing::{Pagination, SortDirection};

    fn entry(kind: ArticleKind, dir: &str, title: &str) -> Entry {
        Entry {
            kind,
            dir: dir.to_string(),
            sequence: 1,
            info: EntryInfo {
                title: title.to_string(),
                publish_date: "2024-02-29".to_string(),
                excerpt: Some("Excerpt text".to_string()),
                summary: Some("Summary text".to_string()),
            },
        }
    }

    fn view(path: &str, number: usize, total: usize) -> ListingView<'_> {
        ListingView {
            direction: SortDirection::Desc,
            pagination: Pagination { number, total },
            path,
        }
    }

    #[test]
    fn test_tyli_listing_page() {
        // Arrange
        let entries = [entry(ArticleKind::Tyli, "tyli/first", "First Thing")];
        let refs: Vec<&Entry> = entries.iter().collect();

        // Act
        let html = generate(Section::Tyli, &refs, view("tyli/desc-2.html", 2, 2)).into_string();

        // Assert
        assert!(html.contains("<title>TYLI - The Philosopher's Window</title>"));
        assert!(html.contains("href=\"tyli/first/index.html\""));
        assert!(html.contains("February 29, 2024"));
        assert!(html.contains("Excerpt text"), "TYLI cards show excerpts");
        assert!(html.contains("sort: newest first ↓"));
        assert!(html.contains("href=\"tyli/desc-1.html\""), "Pager links previous page");
    }

    #[test]
    fn test_notes_listing_uses_summary() {
        // Arrange
        let notes = [entry(ArticleKind::Note, "notes/memo", "Memo")];
        let refs: Vec<&Entry> = notes.iter().collect();

        // Act
        let html = generate_notes(&refs, view("notes/index.html", 1, 1)).into_string();

        // Assert
        assert!(html.contains("Summary text"));
        assert!(!html.contains("Excerpt text"));
        assert!(!html.contains("class=\"pager\""));
    }

    #[test]
    fn test_notes_listing_empty() {
        // Act
        let html = generate_notes(&[], view("notes/index.html", 1, 1)).into_string();

        // Assert
        assert!(html.contains("No notes found."));
    }
}
