//! Album and note search rules.

use std::fmt::Write;

use crate::content::{Album, Catalog, Entry};
use crate::listing::{self, SortDirection};

/// Characters required before a note search is applied.
pub const NOTE_SEARCH_MIN_CHARS: usize = 4;

/// Filters albums whose global sequence number contains the term.
///
/// The term is trimmed; an empty term matches every album.
pub fn filter_albums<'a>(albums: &'a [Album], term: &str) -> Vec<&'a Album> {
    let term = term.trim();
    albums
        .iter()
        .filter(|album| term.is_empty() || album.info.global_sequence.to_string().contains(term))
        .collect()
}

/// Interpreted note search input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NoteQuery {
    /// Empty input, every note is shown
    All,
    /// Input shorter than [`NOTE_SEARCH_MIN_CHARS`], every note is shown
    Pending { remaining: usize },
    /// Lowercased search term
    Term(String),
}

impl NoteQuery {
    /// Parses raw search box input.
    pub fn parse(input: &str) -> Self {
        let input = input.trim();
        let length = input.chars().count();
        if length == 0 {
            Self::All
        } else if length < NOTE_SEARCH_MIN_CHARS {
            Self::Pending {
                remaining: NOTE_SEARCH_MIN_CHARS - length,
            }
        } else {
            Self::Term(input.to_lowercase())
        }
    }

    /// Checks a note against the query.
    ///
    /// A term matches the title, summary or excerpt, case-insensitively.
    pub fn matches(&self, note: &Entry) -> bool {
        let Self::Term(term) = self else {
            return true;
        };
        let contains = |text: &str| text.to_lowercase().contains(term.as_str());
        contains(&note.info.title)
            || note.info.summary.as_deref().is_some_and(contains)
            || note.info.excerpt.as_deref().is_some_and(contains)
    }

    /// Hint shown while the input is too short to search.
    pub fn hint(&self) -> Option<String> {
        match self {
            Self::Pending { remaining } => Some(format!(
                "Type {} more character{} to search...",
                remaining,
                if *remaining == 1 { "" } else { "s" }
            )),
            Self::All | Self::Term(_) => None,
        }
    }

    /// Message shown when no notes match.
    pub fn empty_message(&self) -> String {
        match self {
            Self::Term(term) => format!("No notes found matching \"{}\".", term),
            Self::All | Self::Pending { .. } => "No notes found.".to_string(),
        }
    }
}

/// Filters notes by a parsed query.
pub fn filter_notes<'a>(notes: &'a [Entry], query: &NoteQuery) -> Vec<&'a Entry> {
    notes.iter().filter(|note| query.matches(note)).collect()
}

/// Formats search results for the terminal.
///
/// Albums are matched by global sequence and notes by text, each result
/// followed by the page it is written to. Notes are listed newest first.
pub fn report(catalog: &Catalog, term: &str) -> String {
    let mut out = String::new();

    let albums = filter_albums(&catalog.albums, term);
    let _ = writeln!(out, "Albums ({}):", albums.len());
    if albums.is_empty() {
        let _ = writeln!(out, "  No albums found matching \"{}\".", term.trim());
    }
    for album in albums {
        let _ = writeln!(
            out,
            "  #{:02} {}  {}",
            album.info.global_sequence,
            album.display_title(),
            album.page_path()
        );
    }

    let query = NoteQuery::parse(term);
    let ordered = listing::order_by_date(&catalog.notes, SortDirection::Desc);
    let notes: Vec<&Entry> = ordered.into_iter().filter(|note| query.matches(note)).collect();
    let _ = writeln!(out, "Notes ({}):", notes.len());
    if let Some(hint) = query.hint() {
        let _ = writeln!(out, "  {}", hint);
    }
    if notes.is_empty() {
        let _ = writeln!(out, "  {}", query.empty_message());
    }
    for note in notes {
        let _ = writeln!(out, "  {}  {}", note.info.title, note.page_path());
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::{AlbumInfo, ArticleKind, EntryInfo};

    fn album(sequence: u32) -> Album {
        Album::new(
            format!("albums/album-{:03}", sequence),
            AlbumInfo {
                album_name: "A".to_string(),
                album_artist: "B".to_string(),
                release_year: String::new(),
                review_publish_date: String::new(),
                global_sequence: sequence,
                tracklist: vec![],
            },
            false,
        )
    }

    fn note(title: &str, summary: Option<&str>, excerpt: Option<&str>) -> Entry {
        Entry {
            kind: ArticleKind::Note,
            dir: format!("notes/{}", title.to_lowercase().replace(' ', "-")),
            sequence: 0,
            info: EntryInfo {
                title: title.to_string(),
                publish_date: "2024-01-01".to_string(),
                excerpt: excerpt.map(String::from),
                summary: summary.map(String::from),
            },
        }
    }

    #[test]
    fn test_filter_albums_by_sequence_text() {
        // Arrange
        let albums = vec![album(1), album(12), album(21), album(3)];

        // Act
        let matches = filter_albums(&albums, " 1 ");

        // Assert
        let found: Vec<u32> = matches.iter().map(|a| a.info.global_sequence).collect();
        assert_eq!(found, [1, 12, 21]);
    }

    #[test]
    fn test_filter_albums_empty_term_matches_all() {
        // Arrange
        let albums = vec![album(1), album(2)];

        // Act
        let matches = filter_albums(&albums, "");

        // Assert
        assert_eq!(matches.len(), 2);
    }

    #[test]
    fn test_note_query_parse() {
        assert_eq!(NoteQuery::parse("   "), NoteQuery::All);
        assert_eq!(NoteQuery::parse("abc"), NoteQuery::Pending { remaining: 1 });
        assert_eq!(NoteQuery::parse("a"), NoteQuery::Pending { remaining: 3 });
        assert_eq!(
            NoteQuery::parse(" Time "),
            NoteQuery::Term("time".to_string())
        );
    }

    #[test]
    fn test_note_query_hint() {
        // Act
        let one = NoteQuery::parse("abc").hint();
        let many = NoteQuery::parse("ab").hint();

        // Assert
        assert_eq!(one.as_deref(), Some("Type 1 more character to search..."));
        assert_eq!(many.as_deref(), Some("Type 2 more characters to search..."));
        assert!(NoteQuery::parse("abcd").hint().is_none());
    }

    #[test]
    fn test_note_query_matches_fields() {
        // Arrange
        let notes = vec![
            note("Morning Pages", None, None),
            note("Other", Some("about MORNING light"), None),
            note("Third", None, Some("mornings again")),
            note("Unrelated", Some("evening"), None),
        ];
        let query = NoteQuery::parse("morn");

        // Act
        let matches = filter_notes(&notes, &query);

        // Assert
        let titles: Vec<&str> = matches.iter().map(|n| n.info.title.as_str()).collect();
        assert_eq!(titles, ["Morning Pages", "Other", "Third"]);
    }

    #[test]
    fn test_pending_query_matches_everything() {
        // Arrange
        let notes = vec![note("One", None, None), note("Two", None, None)];

        // Act
        let matches = filter_notes(&notes, &NoteQuery::parse("zz"));

        // Assert
        assert_eq!(matches.len(), 2, "Short input should not filter");
    }

    #[test]
    fn test_report_lists_matches_with_paths() {
        // Arrange
        let catalog = Catalog {
            albums: vec![album(1), album(2)],
            notes: vec![note("Morning Pages", None, None), note("Dusk", None, None)],
            ..Catalog::default()
        };

        // Act
        let report = report(&catalog, "morning");

        // Assert
        assert!(report.contains("Albums (0):"));
        assert!(report.contains("No albums found matching \"morning\"."));
        assert!(report.contains("Notes (1):"));
        assert!(report.contains("Morning Pages  notes/morning-pages/index.html"));
        assert!(!report.contains("Dusk"));
    }

    #[test]
    fn test_report_short_note_term_shows_hint() {
        // Arrange
        let catalog = Catalog {
            albums: vec![album(1), album(12)],
            notes: vec![note("Dusk", None, None)],
            ..Catalog::default()
        };

        // Act
        let report = report(&catalog, "2");

        // Assert
        assert!(report.contains("#12 A - B  albums/album-012/index.html"));
        assert!(!report.contains("album-001"));
        assert!(report.contains("Type 3 more characters to search..."));
        assert!(report.contains("Dusk"), "Pending query lists every note");
    }

    #[test]
    fn test_empty_message() {
        assert_eq!(
            NoteQuery::parse("nothing").empty_message(),
            "No notes found matching \"nothing\"."
        );
        assert_eq!(NoteQuery::All.empty_message(), "No notes found.");
    }
}
