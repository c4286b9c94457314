//! Review unlock state.
//!
//! Album reviews can be rendered behind a lock overlay. Which reviews are
//! unlocked is owned by the caller and passed into page rendering; the
//! storage keys match the flags the browser keeps in `localStorage`, so a
//! build can pre-unlock exactly what a reader would have unlocked.

use std::collections::HashSet;

/// Lockable review section of an album page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReviewKind {
    PreReview,
    MainReview,
}

impl ReviewKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::PreReview => "pre-review",
            Self::MainReview => "main-review",
        }
    }
}

/// Storage key for an album review unlock flag.
pub fn storage_key(album_path: &str, kind: ReviewKind) -> String {
    format!("unlocked_{}_{}", album_path, kind.as_str())
}

/// Set of unlocked album reviews.
#[derive(Debug, Clone, Default)]
pub struct UnlockState {
    all: bool,
    keys: HashSet<String>,
}

impl UnlockState {
    /// Creates a state with every review locked.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a state with every review unlocked.
    pub fn all_unlocked() -> Self {
        Self {
            all: true,
            keys: HashSet::new(),
        }
    }

    /// Marks one album review as unlocked.
    pub fn unlock(&mut self, album_path: &str, kind: ReviewKind) {
        self.keys.insert(storage_key(album_path, kind));
    }

    /// Checks whether an album review is unlocked.
    pub fn is_unlocked(&self, album_path: &str, kind: ReviewKind) -> bool {
        self.all || self.keys.contains(&storage_key(album_path, kind))
    }
}
