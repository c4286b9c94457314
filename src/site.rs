//! Whole-site generation.
//!
//! Walks a loaded [`Catalog`] and writes every listing, review and article
//! page, the bundled assets, and the media files next to the content.

use anyhow::{Context, Result};
use maud::Markup;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};
use walkdir::WalkDir;

use crate::assets::{ASSETS_DIR, write_assets};
use crate::content::{Album, ArticleKind, Catalog, ContentRoot, Entry, validate_relative_path};
use crate::listing::{self, Pagination, Section, SortDirection};
use crate::pages::album::{AlbumReviews, MAIN_REVIEW_FILE, PRE_REVIEW_FILE};
use crate::pages::{self, ListingView};
use crate::unlock::UnlockState;

/// Options for one site build.
#[derive(Debug, Clone, Copy)]
pub struct SiteOptions<'a> {
    pub output: &'a Path,
    pub per_page: usize,
    pub unlock: &'a UnlockState,
}

/// Counts of what a build wrote.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BuildSummary {
    /// Home page and section listings, landing copies included
    pub listing_pages: usize,
    pub album_pages: usize,
    pub track_pages: usize,
    pub article_pages: usize,
    pub media_files: usize,
}

impl BuildSummary {
    pub fn total_pages(&self) -> usize {
        self.listing_pages + self.album_pages + self.track_pages + self.article_pages
    }
}

/// Generates the complete site into the output directory.
///
/// # Arguments
///
/// * `root`: Content root the catalog was loaded from
/// * `catalog`: Loaded content
/// * `options`: Output location, page size and unlock state
///
/// # Returns
///
/// Counts of written pages and copied media files
///
/// # Errors
///
/// Returns error if the output cannot be written, a content path is
/// invalid, or an existing document cannot be read.
pub fn generate_site(
    root: &ContentRoot,
    catalog: &Catalog,
    options: SiteOptions<'_>,
) -> Result<BuildSummary> {
    let site = Site {
        root,
        catalog,
        output: options.output.to_path_buf(),
        per_page: options.per_page,
        unlock: options.unlock,
    };

    fs::create_dir_all(&site.output).context("Failed to create output directory")?;
    write_assets(&site.output.join(ASSETS_DIR))?;

    let mut summary = BuildSummary::default();

    site.write_page("index.html", pages::home::generate(catalog))?;
    summary.listing_pages += 1;

    for section in Section::ALL {
        summary.listing_pages += site.write_listing(section)?;
    }

    for album in &catalog.albums {
        summary.track_pages += site.write_album(album)?;
        summary.album_pages += 1;
    }

    for kind in ArticleKind::ALL {
        for entry in catalog.entries(kind) {
            site.write_article(entry)?;
            summary.article_pages += 1;
        }
    }

    summary.media_files = site.copy_media()?;

    info!(
        pages = summary.total_pages(),
        media = summary.media_files,
        output = %site.output.display(),
        "Site generated"
    );
    Ok(summary)
}

struct Site<'a> {
    root: &'a ContentRoot,
    catalog: &'a Catalog,
    output: PathBuf,
    per_page: usize,
    unlock: &'a UnlockState,
}

impl Site<'_> {
    fn write_page(&self, page_path: &str, markup: Markup) -> Result<()> {
        validate_relative_path(page_path)?;
        let path = self.output.join(page_path);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory {}", parent.display()))?;
        }
        fs::write(&path, markup.into_string())
            .with_context(|| format!("Failed to write {}", path.display()))?;
        debug!(path = page_path, "Wrote page");
        Ok(())
    }

    /// Writes every listing page of a section in both directions, plus the
    /// landing page holding the first page of the default direction.
    fn write_listing(&self, section: Section) -> Result<usize> {
        let mut written = 0;
        for direction in SortDirection::ALL {
            let batches = self.listing_batches(section, direction);
            let total = batches.len();
            for (i, batch) in batches.iter().enumerate() {
                let pagination = Pagination { number: i + 1, total };
                let path = section.page_path(direction, pagination.number);
                let markup = self.render_listing(section, batch, direction, pagination, &path);
                self.write_page(&path, markup)?;
                written += 1;

                if direction == section.default_direction() && pagination.number == 1 {
                    let index = section.index_path();
                    let markup = self.render_listing(section, batch, direction, pagination, &index);
                    self.write_page(&index, markup)?;
                    written += 1;
                }
            }
        }
        Ok(written)
    }

    fn listing_batches(&self, section: Section, direction: SortDirection) -> Vec<Batch<'_>> {
        let catalog = self.catalog;
        match section {
            Section::Albums => {
                let ordered = listing::order_albums(&catalog.albums, direction);
                listing::paginate(&ordered, self.per_page)
                    .into_iter()
                    .map(|page| Batch::Albums(page.to_vec()))
                    .collect()
            }
            Section::Notes => vec![Batch::Entries(listing::order_by_date(
                &catalog.notes,
                direction,
            ))],
            Section::Blogs | Section::Tyli => {
                let entries = if section == Section::Blogs {
                    &catalog.blogs
                } else {
                    &catalog.tyli
                };
                let ordered = listing::order_by_sequence(entries, direction);
                listing::paginate(&ordered, self.per_page)
                    .into_iter()
                    .map(|page| Batch::Entries(page.to_vec()))
                    .collect()
            }
        }
    }

    fn render_listing(
        &self,
        section: Section,
        batch: &Batch<'_>,
        direction: SortDirection,
        pagination: Pagination,
        path: &str,
    ) -> Markup {
        let view = ListingView {
            direction,
            pagination,
            path,
        };
        match batch {
            Batch::Albums(albums) => pages::albums::generate(albums, view),
            Batch::Entries(notes) if section == Section::Notes => {
                pages::entries::generate_notes(notes, view)
            }
            Batch::Entries(entries) => pages::entries::generate(section, entries, view),
        }
    }

    /// Writes an album review page and its track pages.
    fn write_album(&self, album: &Album) -> Result<usize> {
        let pre_review = self.root.read_markdown(&album.review_path(PRE_REVIEW_FILE))?;
        let main_review = self.root.read_markdown(&album.review_path(MAIN_REVIEW_FILE))?;
        let reviews = AlbumReviews {
            pre_review: pre_review.as_deref(),
            main_review: main_review.as_deref(),
        };
        self.write_page(
            &album.page_path(),
            pages::album::generate(album, reviews, self.unlock),
        )?;

        for track in &album.info.tracklist {
            let review = self
                .root
                .read_markdown(&album.review_path(&format!("{}.md", track.sequence)))?;
            if review.is_none() {
                debug!(album = %album.path, track = %track.sequence, "No track review");
            }
            self.write_page(
                &album.track_page_path(&track.sequence),
                pages::track::generate(album, track, review.as_deref()),
            )?;
        }
        Ok(album.info.tracklist.len())
    }

    fn write_article(&self, entry: &Entry) -> Result<()> {
        let source = self.root.read_markdown(&entry.markdown_path())?;
        if source.is_none() {
            warn!(path = %entry.markdown_path(), "Missing {} document", entry.kind.noun());
        }
        self.write_page(
            &entry.page_path(),
            pages::article::generate(entry, source.as_deref()),
        )
    }

    /// Copies media files from every album and entry directory.
    ///
    /// JSON metadata and Markdown documents are skipped; everything else
    /// keeps its content-relative path in the output.
    fn copy_media(&self) -> Result<usize> {
        let mut copied = 0;
        for dir in self.catalog.content_dirs() {
            let source_dir = self.root.resolve(dir)?;
            if !source_dir.is_dir() {
                continue;
            }

            for entry in WalkDir::new(&source_dir) {
                let entry = entry
                    .with_context(|| format!("Failed to walk {}", source_dir.display()))?;
                if !entry.file_type().is_file() || !is_media(entry.path()) {
                    continue;
                }

                let relative = entry
                    .path()
                    .strip_prefix(self.root.path())
                    .context("Media file outside content root")?;
                let target = self.output.join(relative);
                if let Some(parent) = target.parent() {
                    fs::create_dir_all(parent).with_context(|| {
                        format!("Failed to create directory {}", parent.display())
                    })?;
                }
                fs::copy(entry.path(), &target)
                    .with_context(|| format!("Failed to copy {}", entry.path().display()))?;
                copied += 1;
            }
        }
        Ok(copied)
    }
}

/// Items of one listing page.
enum Batch<'a> {
    Albums(Vec<&'a Album>),
    Entries(Vec<&'a Entry>),
}

fn is_media(path: &Path) -> bool {
    !matches!(
        path.extension().and_then(|e| e.to_str()),
        Some("json") | Some("md")
    )
}
