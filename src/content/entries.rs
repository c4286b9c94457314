//! Blog, note and TYLI entries.

use serde::Deserialize;

/// Kind of long-form article.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ArticleKind {
    Blog,
    Note,
    Tyli,
}

impl ArticleKind {
    pub const ALL: [Self; 3] = [Self::Blog, Self::Note, Self::Tyli];

    /// Markdown document name inside an entry directory.
    pub fn markdown_file(self) -> &'static str {
        match self {
            Self::Blog => "blog.md",
            Self::Note => "note.md",
            Self::Tyli => "tyli.md",
        }
    }

    /// Noun used in page messages.
    pub fn noun(self) -> &'static str {
        match self {
            Self::Blog => "blog",
            Self::Note => "note",
            Self::Tyli => "TYLI",
        }
    }
}

/// Folder reference from `blogs_sequence.json` or `tyli_sequence.json`.
#[derive(Debug, Clone, Deserialize)]
pub struct SequencedFolder {
    pub folder: String,
    /// Lower sequence is newer
    pub sequence: i64,
}

/// Contents of `notes/notes_sequence.json`.
#[derive(Debug, Clone, Deserialize)]
pub struct NoteSequence {
    pub notes: Vec<NoteRef>,
}

/// Note reference holding its content-relative directory.
#[derive(Debug, Clone, Deserialize)]
pub struct NoteRef {
    pub path: String,
}

/// Contents of an entry `info.json`.
///
/// Blogs and TYLI entries carry `publishDate` and `excerpt`; notes carry
/// `date` and `summary`, sometimes with an `excerpt` as well.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EntryInfo {
    pub title: String,
    #[serde(default, alias = "date")]
    pub publish_date: String,
    #[serde(default)]
    pub excerpt: Option<String>,
    #[serde(default)]
    pub summary: Option<String>,
}

/// Article loaded from the content tree.
#[derive(Debug, Clone)]
pub struct Entry {
    pub kind: ArticleKind,
    /// Content-relative entry directory
    pub dir: String,
    /// Position from the sequence file; 0 for notes
    pub sequence: i64,
    pub info: EntryInfo,
}

impl Entry {
    /// Site-relative article page.
    pub fn page_path(&self) -> String {
        format!("{}/index.html", self.dir)
    }

    /// Content-relative Markdown document path.
    pub fn markdown_path(&self) -> String {
        format!("{}/{}", self.dir, self.kind.markdown_file())
    }

    /// Short text shown on listing cards.
    ///
    /// Notes show their summary; blogs and TYLI entries show their excerpt.
    pub fn teaser(&self) -> &str {
        let text = match self.kind {
            ArticleKind::Note => self.info.summary.as_deref(),
            ArticleKind::Blog | ArticleKind::Tyli => self.info.excerpt.as_deref(),
        };
        text.unwrap_or("")
    }
}
