//! Album and track metadata.

use serde::Deserialize;

use super::text::{leading_number, string_or_number};

/// Contents of `albums/global_sequence.json`.
#[derive(Debug, Clone, Deserialize)]
pub struct AlbumSequence {
    pub albums: Vec<AlbumRef>,
}

/// Album reference from the global sequence.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AlbumRef {
    /// Content-relative album directory, e.g. `albums/album-001`
    pub path: String,
    pub global_sequence: u32,
}

/// Contents of `<album>/info.json`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AlbumInfo {
    pub album_name: String,
    pub album_artist: String,
    #[serde(default, deserialize_with = "string_or_number")]
    pub release_year: String,
    #[serde(default)]
    pub review_publish_date: String,
    pub global_sequence: u32,
    #[serde(default)]
    pub tracklist: Vec<Track>,
}

/// Tracklist entry.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Track {
    /// Track number as written in the tracklist; also names the review file
    #[serde(deserialize_with = "string_or_number")]
    pub sequence: String,
    pub song_name: String,
}

impl Track {
    /// Returns the numeric track position, 0 if the sequence is not numeric.
    pub fn number(&self) -> u32 {
        leading_number(&self.sequence)
    }
}

/// Album loaded from the content tree.
#[derive(Debug, Clone)]
pub struct Album {
    /// Content-relative album directory
    pub path: String,
    pub info: AlbumInfo,
    /// Whether `cover.jpg` exists in the album directory
    pub has_cover: bool,
}

impl Album {
    /// Creates an album, ordering its tracklist by track number.
    pub fn new(path: impl Into<String>, mut info: AlbumInfo, has_cover: bool) -> Self {
        info.tracklist.sort_by_key(Track::number);
        Self {
            path: path.into(),
            info,
            has_cover,
        }
    }

    /// Site-relative cover image path, if the album has one.
    pub fn cover_path(&self) -> Option<String> {
        self.has_cover.then(|| format!("{}/cover.jpg", self.path))
    }

    /// Site-relative album review page.
    pub fn page_path(&self) -> String {
        format!("{}/index.html", self.path)
    }

    /// Site-relative track review page.
    pub fn track_page_path(&self, sequence: &str) -> String {
        format!("{}/tracks/{}.html", self.path, sequence)
    }

    /// Content-relative review document path.
    pub fn review_path(&self, file_name: &str) -> String {
        format!("{}/reviews/{}", self.path, file_name)
    }

    /// Looks up a track by its 1-based position.
    pub fn track_by_number(&self, number: u32) -> Option<&Track> {
        self.info.tracklist.iter().find(|t| t.number() == number)
    }

    /// Page title shared by the album and track pages.
    pub fn display_title(&self) -> String {
        format!("{} - {}", self.info.album_name, self.info.album_artist)
    }
}
