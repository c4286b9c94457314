//! Loads every content section for a build.

use anyhow::{Context, Result};
use serde::Deserialize;
use tracing::{debug, warn};

use super::albums::{Album, AlbumInfo, AlbumRef, AlbumSequence};
use super::entries::{ArticleKind, Entry, EntryInfo, NoteSequence, SequencedFolder};
use super::root::{ContentRoot, validate_relative_path};

const ALBUM_SEQUENCE: &str = "albums/global_sequence.json";
const BLOG_SEQUENCE: &str = "blogs/blogs_sequence.json";
const NOTE_SEQUENCE: &str = "notes/notes_sequence.json";
const TYLI_SEQUENCE: &str = "tyli/tyli_sequence.json";

#[derive(Deserialize)]
struct BlogSequence {
    blogs: Vec<SequencedFolder>,
}

#[derive(Deserialize)]
struct TyliSequence {
    tyli: Vec<SequencedFolder>,
}

/// All content sections loaded from a content root.
///
/// Sections keep their sequence-file order: albums by global sequence,
/// blogs and TYLI entries by sequence, notes in file order. Listing pages
/// apply their own sort on top of this.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    pub albums: Vec<Album>,
    pub blogs: Vec<Entry>,
    pub notes: Vec<Entry>,
    pub tyli: Vec<Entry>,
}

impl Catalog {
    /// Loads all sections.
    ///
    /// A section whose sequence file is missing or malformed is logged and
    /// left empty, and an entry whose metadata cannot be read is logged and
    /// skipped.
    ///
    /// # Errors
    ///
    /// Returns error if a sequence file names an entry path that is empty,
    /// absolute, or traverses upward.
    pub fn load(root: &ContentRoot) -> Result<Self> {
        let blogs = load_section::<BlogSequence>(root, BLOG_SEQUENCE).map(|s| s.blogs);
        let tyli = load_section::<TyliSequence>(root, TYLI_SEQUENCE).map(|s| s.tyli);

        let catalog = Self {
            albums: load_albums(root)?,
            blogs: load_sequenced(root, ArticleKind::Blog, BLOG_SEQUENCE, blogs)?,
            notes: load_notes(root)?,
            tyli: load_sequenced(root, ArticleKind::Tyli, TYLI_SEQUENCE, tyli)?,
        };
        debug!(
            albums = catalog.albums.len(),
            blogs = catalog.blogs.len(),
            notes = catalog.notes.len(),
            tyli = catalog.tyli.len(),
            "Loaded content catalog"
        );
        Ok(catalog)
    }

    /// Returns the entries of one article kind.
    pub fn entries(&self, kind: ArticleKind) -> &[Entry] {
        match kind {
            ArticleKind::Blog => &self.blogs,
            ArticleKind::Note => &self.notes,
            ArticleKind::Tyli => &self.tyli,
        }
    }

    /// Content-relative directories of every loaded album and entry.
    pub fn content_dirs(&self) -> impl Iterator<Item = &str> {
        self.albums
            .iter()
            .map(|a| a.path.as_str())
            .chain(
                ArticleKind::ALL
                    .into_iter()
                    .flat_map(|kind| self.entries(kind).iter().map(|e| e.dir.as_str())),
            )
    }
}

fn load_section<T: serde::de::DeserializeOwned>(root: &ContentRoot, path: &str) -> Option<T> {
    match root.read_json(path) {
        Ok(sequence) => Some(sequence),
        Err(e) => {
            warn!(path, "Skipping section: {e:#}");
            None
        }
    }
}

fn validate_entry_path(sequence_file: &str, path: &str) -> Result<()> {
    validate_relative_path(path)
        .with_context(|| format!("Invalid entry path in {}", sequence_file))
}

fn load_albums(root: &ContentRoot) -> Result<Vec<Album>> {
    let Some(sequence) = load_section::<AlbumSequence>(root, ALBUM_SEQUENCE) else {
        return Ok(Vec::new());
    };

    let mut refs = sequence.albums;
    for album_ref in &refs {
        validate_entry_path(ALBUM_SEQUENCE, &album_ref.path)?;
    }
    refs.sort_by_key(|r| r.global_sequence);

    Ok(refs
        .iter()
        .filter_map(|album_ref| match load_album(root, album_ref) {
            Ok(album) => Some(album),
            Err(e) => {
                warn!(path = %album_ref.path, "Skipping album: {e:#}");
                None
            }
        })
        .collect())
}

fn load_album(root: &ContentRoot, album_ref: &AlbumRef) -> Result<Album> {
    let info: AlbumInfo = root
        .read_json(&format!("{}/info.json", album_ref.path))
        .context("Failed to load album info")?;
    let has_cover = root.exists(&format!("{}/cover.jpg", album_ref.path))?;
    Ok(Album::new(album_ref.path.clone(), info, has_cover))
}

/// Loads blog or TYLI entries from their folder list, lowest sequence first.
///
/// Folders live in the directory holding `sequence_file`.
fn load_sequenced(
    root: &ContentRoot,
    kind: ArticleKind,
    sequence_file: &str,
    folders: Option<Vec<SequencedFolder>>,
) -> Result<Vec<Entry>> {
    let section = sequence_file.split('/').next().unwrap_or_default();
    let mut folders = folders.unwrap_or_default();
    folders.sort_by_key(|f| f.sequence);

    let mut entries = Vec::with_capacity(folders.len());
    for folder in folders {
        validate_entry_path(sequence_file, &folder.folder)?;
        let dir = format!("{}/{}", section, folder.folder);
        entries.extend(load_entry(root, kind, dir, folder.sequence));
    }
    Ok(entries)
}

fn load_notes(root: &ContentRoot) -> Result<Vec<Entry>> {
    let Some(sequence) = load_section::<NoteSequence>(root, NOTE_SEQUENCE) else {
        return Ok(Vec::new());
    };

    let mut notes = Vec::with_capacity(sequence.notes.len());
    for note in sequence.notes {
        validate_entry_path(NOTE_SEQUENCE, &note.path)?;
        notes.extend(load_entry(root, ArticleKind::Note, note.path, 0));
    }
    Ok(notes)
}

fn load_entry(root: &ContentRoot, kind: ArticleKind, dir: String, sequence: i64) -> Option<Entry> {
    match root.read_json::<EntryInfo>(&format!("{}/info.json", dir)) {
        Ok(info) => Some(Entry {
            kind,
            dir,
            sequence,
            info,
        }),
        Err(e) => {
            warn!(path = %dir, "Skipping {}: {e:#}", kind.noun());
            None
        }
    }
}
