//! Page generation modules for the site's views
//!
//! Each page module renders one kind of page from loaded content and the
//! shared components module. Pages never touch the filesystem: Markdown
//! documents are read by the caller and passed in as text.

pub mod album;
pub mod albums;
pub mod article;
pub mod entries;
pub mod home;
pub mod track;

use crate::listing::{Pagination, SortDirection};

/// Position of a listing page within its section.
#[derive(Debug, Clone, Copy)]
pub struct ListingView<'a> {
    pub direction: SortDirection,
    pub pagination: Pagination,
    /// Site-relative path the page is written to
    pub path: &'a str,
}
