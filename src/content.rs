//! Content directory models and loading.
//!
//! The site is driven by static JSON metadata and Markdown documents laid
//! out per section (albums, blogs, notes, TYLI). This module defines the
//! typed shape of those files, reads them through [`ContentRoot`], and
//! collects everything a build needs into a [`Catalog`].

mod albums;
mod catalog;
mod entries;
mod root;
mod text;

pub use albums::{Album, AlbumInfo, AlbumRef, AlbumSequence, Track};
pub use catalog::Catalog;
pub use entries::{ArticleKind, Entry, EntryInfo, NoteRef, NoteSequence, SequencedFolder};
pub use root::{ContentRoot, validate_relative_path};
