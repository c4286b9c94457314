//! Album and article card components

use maud::{Markup, html};

use crate::content::{Album, Entry};
use crate::util::{format_date, pad_sequence};

/// Renders an album cover, or a placeholder showing the album name
///
/// # Arguments
///
/// * `album`: Album whose cover is shown
/// * `class`: Extra class for size variants
pub fn album_cover(album: &Album, class: &str) -> Markup {
    html! {
        @if let Some(cover) = album.cover_path() {
            div class={ "album-cover " (class) }
                style=(format!("background-image: url('{}')", cover))
                role="img"
                aria-label=(album.info.album_name) {}
        } @else {
            div class={ "album-cover album-cover-placeholder " (class) } {
                (album.info.album_name)
            }
        }
    }
}

/// Renders an album listing card linking to the album review page
pub fn album_card(album: &Album) -> Markup {
    let info = &album.info;
    html! {
        a.card.album-card href=(album.page_path()) data-sequence=(info.global_sequence) {
            (album_cover(album, ""))
            div.album-summary {
                span.sequence-badge { (pad_sequence(info.global_sequence)) }
                div.album-name { (info.album_name) }
                div.album-artist { (info.album_artist) }
                div.album-published { "Published: " (info.review_publish_date) }
            }
        }
    }
}

/// Renders a blog, note or TYLI listing card
///
/// Shows the title link, display date and teaser text. The teaser is
/// omitted when empty.
pub fn entry_card(entry: &Entry) -> Markup {
    let teaser = entry.teaser();
    html! {
        article.card.entry-card {
            h2.card-title {
                a href=(entry.page_path()) { (entry.info.title) }
            }
            time.card-date datetime=(entry.info.publish_date) {
                (format_date(&entry.info.publish_date))
            }
            @if !teaser.is_empty() {
                p.card-excerpt { (teaser) }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::{AlbumInfo, ArticleKind, EntryInfo};

    fn album(has_cover: bool) -> Album {
        Album::new(
            "albums/album-007",
            AlbumInfo {
                album_name: "Night Drive".to_string(),
                album_artist: "Coastline".to_string(),
                release_year: "1999".to_string(),
                review_publish_date: "2024-06-10".to_string(),
                global_sequence: 7,
                tracklist: vec![],
            },
            has_cover,
        )
    }

    #[test]
    fn test_album_card_with_cover() {
        // Act
        let html = album_card(&album(true)).into_string();

        // Assert
        assert!(html.contains("href=\"albums/album-007/index.html\""));
        assert!(html.contains("url('albums/album-007/cover.jpg')"));
        assert!(html.contains(">07<"), "Sequence should be zero-padded");
        assert!(html.contains("Published: 2024-06-10"));
    }

    #[test]
    fn test_album_card_placeholder() {
        // Act
        let html = album_card(&album(false)).into_string();

        // Assert
        assert!(html.contains("album-cover-placeholder"));
        assert!(!html.contains("cover.jpg"), "No cover should be referenced");
        assert!(html.contains("Night Drive"));
    }

    #[test]
    fn test_entry_card() {
        // Arrange
        let entry = Entry {
            kind: ArticleKind::Blog,
            dir: "blogs/on-time".to_string(),
            sequence: 1,
            info: EntryInfo {
                title: "On Time".to_string(),
                publish_date: "2024-05-01".to_string(),
                excerpt: Some("Clocks & calendars.".to_string()),
                summary: None,
            },
        };

        // Act
        let html = entry_card(&entry).into_string();

        // Assert
        assert!(html.contains("<a href=\"blogs/on-time/index.html\">On Time</a>"));
        assert!(html.contains("datetime=\"2024-05-01\""));
        assert!(html.contains(">May 1, 2024</time>"));
        assert!(html.contains("Clocks &amp; calendars."), "Teaser should be escaped");
    }

    #[test]
    fn test_entry_card_without_teaser() {
        // Arrange
        let entry = Entry {
            kind: ArticleKind::Note,
            dir: "notes/memo".to_string(),
            sequence: 0,
            info: EntryInfo {
                title: "Memo".to_string(),
                publish_date: "someday".to_string(),
                excerpt: Some("Ignored for notes".to_string()),
                summary: None,
            },
        };

        // Act
        let html = entry_card(&entry).into_string();

        // Assert
        assert!(!html.contains("card-excerpt"));
        assert!(html.contains(">someday</time>"), "Raw date should be kept");
    }
}
