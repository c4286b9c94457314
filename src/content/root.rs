//! Filesystem access to the content directory.

use anyhow::{Context, Result, bail};
use serde::de::DeserializeOwned;
use std::fs;
use std::io::ErrorKind;
use std::path::{Component, Path, PathBuf};

/// Read-only view of a content directory.
///
/// All lookups take paths relative to the root, as they appear in the
/// sequence files, and reject anything that could escape the root.
#[derive(Debug, Clone)]
pub struct ContentRoot {
    root: PathBuf,
}

impl ContentRoot {
    /// Creates a content root at the given directory.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Returns the content root directory.
    pub fn path(&self) -> &Path {
        &self.root
    }

    /// Resolves a content-relative path to a filesystem path.
    ///
    /// # Errors
    ///
    /// Returns error if the path is empty, absolute, or traverses upward.
    pub fn resolve(&self, relative: &str) -> Result<PathBuf> {
        validate_relative_path(relative)?;
        Ok(self.root.join(relative))
    }

    /// Checks whether a content-relative file exists.
    ///
    /// # Errors
    ///
    /// Returns error if the path is not a valid relative path.
    pub fn exists(&self, relative: &str) -> Result<bool> {
        Ok(self.resolve(relative)?.is_file())
    }

    /// Reads and deserializes a JSON file.
    ///
    /// # Arguments
    ///
    /// * `relative`: Path of the JSON file relative to the content root
    ///
    /// # Errors
    ///
    /// Returns error if the file cannot be read or does not match `T`.
    pub fn read_json<T: DeserializeOwned>(&self, relative: &str) -> Result<T> {
        let path = self.resolve(relative)?;
        let bytes =
            fs::read(&path).with_context(|| format!("Failed to read {}", path.display()))?;
        serde_json::from_slice(&bytes).with_context(|| format!("Invalid JSON in {}", path.display()))
    }

    /// Reads a Markdown document.
    ///
    /// A missing file is not an error: optional reviews and articles are
    /// simply absent from the content tree.
    ///
    /// # Returns
    ///
    /// Document text, or None if the file does not exist
    ///
    /// # Errors
    ///
    /// Returns error if the path is invalid or the file exists but cannot
    /// be read as UTF8 text.
    pub fn read_markdown(&self, relative: &str) -> Result<Option<String>> {
        let path = self.resolve(relative)?;
        match fs::read_to_string(&path) {
            Ok(text) => Ok(Some(text)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e).with_context(|| format!("Failed to read {}", path.display())),
        }
    }
}

/// Validates a content-relative path.
///
/// Paths come from content JSON and are reused for output locations, so
/// they must stay inside both the content root and the output directory.
///
/// # Errors
///
/// Returns error if the path is empty, absolute, or contains `..`.
pub fn validate_relative_path(path: &str) -> Result<()> {
    if path.trim().is_empty() {
        bail!("Path is empty");
    }
    if path.starts_with('/') || path.starts_with('\\') {
        bail!("Path is absolute, must be relative: {}", path);
    }
    for component in Path::new(path).components() {
        match component {
            Component::ParentDir => bail!("Path contains directory traversal: {}", path),
            Component::RootDir | Component::Prefix(_) => {
                bail!("Path is absolute, must be relative: {}", path)
            }
            Component::CurDir | Component::Normal(_) => {}
        }
    }
    Ok(())
}
