//! Shared test utilities for integration tests.
//!
//! Builds temporary content trees with albums, blogs, notes and TYLI
//! entries laid out the way the site expects them.

#![allow(dead_code)]

use anyhow::Result;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

/// Writes a file below `root`, creating parent directories.
///
/// # Arguments
///
/// * `root`: Base directory
/// * `relative`: Path of the file relative to `root`
/// * `contents`: File contents
///
/// # Errors
///
/// Returns error if a directory or the file cannot be written
pub fn write_file(root: &Path, relative: &str, contents: impl AsRef<[u8]>) -> Result<()> {
    let path = root.join(relative);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, contents)?;
    Ok(())
}

/// Creates a temporary content tree.
///
/// Contents:
/// - two albums; `album-001` has a cover, both reviews, two tracks and a
///   review for track 1 only; `album-002` has nothing but its info
/// - four blogs with sequences 1 to 4; `blog-four` has no `blog.md` and
///   `blog-one` carries an image
/// - two notes, one with a summary
/// - one TYLI entry
///
/// # Returns
///
/// Temporary directory holding the content root
///
/// # Errors
///
/// Returns error if any file cannot be written
pub fn create_content_tree() -> Result<TempDir> {
    let dir = TempDir::new()?;
    let root = dir.path();

    write_file(
        root,
        "albums/global_sequence.json",
        r#"{"albums": [
            {"path": "albums/album-002", "globalSequence": 2},
            {"path": "albums/album-001", "globalSequence": 1}
        ]}"#,
    )?;
    write_file(
        root,
        "albums/album-001/info.json",
        r#"{
            "albumName": "Blue Hours",
            "albumArtist": "The Quiet",
            "releaseYear": 2001,
            "reviewPublishDate": "2024-03-05",
            "globalSequence": 1,
            "tracklist": [
                {"sequence": "2", "songName": "Noon"},
                {"sequence": "1", "songName": "Dawn"}
            ]
        }"#,
    )?;
    write_file(root, "albums/album-001/cover.jpg", [0xFF, 0xD8, 0xFF, 0xE0])?;
    write_file(
        root,
        "albums/album-001/reviews/album-pre-review.md",
        "First *impressions*.",
    )?;
    write_file(
        root,
        "albums/album-001/reviews/album-review.md",
        "## Verdict\n\nA **quiet** triumph.",
    )?;
    write_file(root, "albums/album-001/reviews/1.md", "Opens softly.")?;
    write_file(
        root,
        "albums/album-002/info.json",
        r#"{
            "albumName": "Static",
            "albumArtist": "Noise Choir",
            "releaseYear": "1994",
            "reviewPublishDate": "2024-04-01",
            "globalSequence": 2
        }"#,
    )?;

    write_file(
        root,
        "blogs/blogs_sequence.json",
        r#"{"blogs": [
            {"folder": "blog-three", "sequence": 3},
            {"folder": "blog-one", "sequence": 1},
            {"folder": "blog-four", "sequence": 4},
            {"folder": "blog-two", "sequence": 2}
        ]}"#,
    )?;
    for (folder, title, date) in [
        ("blog-one", "Blog One", "2024-05-04"),
        ("blog-two", "Blog Two", "2024-05-03"),
        ("blog-three", "Blog Three", "2024-05-02"),
        ("blog-four", "Blog Four", "2024-05-01"),
    ] {
        write_file(
            root,
            &format!("blogs/{}/info.json", folder),
            format!(
                r#"{{"title": "{}", "publishDate": "{}", "excerpt": "About {}."}}"#,
                title, date, title
            ),
        )?;
        if folder != "blog-four" {
            write_file(
                root,
                &format!("blogs/{}/blog.md", folder),
                format!("# {}\n\nWritten text.", title),
            )?;
        }
    }
    write_file(root, "blogs/blog-one/diagram.png", [0x89, 0x50, 0x4E, 0x47])?;

    write_file(
        root,
        "notes/notes_sequence.json",
        r#"{"notes": [{"path": "notes/memo"}, {"path": "notes/later"}]}"#,
    )?;
    write_file(
        root,
        "notes/memo/info.json",
        r#"{"title": "Memo", "date": "2023-12-24", "summary": "Winter thoughts."}"#,
    )?;
    write_file(root, "notes/memo/note.md", "Short and cold.")?;
    write_file(
        root,
        "notes/later/info.json",
        r#"{"title": "Later", "date": "2024-02-10"}"#,
    )?;
    write_file(root, "notes/later/note.md", "- one\n- two")?;

    write_file(
        root,
        "tyli/tyli_sequence.json",
        r#"{"tyli": [{"folder": "first-thing", "sequence": 1}]}"#,
    )?;
    write_file(
        root,
        "tyli/first-thing/info.json",
        r#"{"title": "First Thing", "publishDate": "2024-01-15", "excerpt": "Start here."}"#,
    )?;
    write_file(root, "tyli/first-thing/tyli.md", "> Quoted wisdom")?;

    Ok(dir)
}
