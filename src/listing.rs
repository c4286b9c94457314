//! Section ordering and pagination for listing pages.

use std::cmp::Ordering;

use crate::content::{Album, Entry};
use crate::util::parse_date;

/// Listing sort direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SortDirection {
    Asc,
    Desc,
}

impl SortDirection {
    pub const ALL: [Self; 2] = [Self::Asc, Self::Desc];

    /// Returns the opposite direction.
    pub fn toggled(self) -> Self {
        match self {
            Self::Asc => Self::Desc,
            Self::Desc => Self::Asc,
        }
    }

    /// File name component for listing pages.
    pub fn slug(self) -> &'static str {
        match self {
            Self::Asc => "asc",
            Self::Desc => "desc",
        }
    }
}

/// Site section with a listing page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Section {
    Albums,
    Blogs,
    Notes,
    Tyli,
}

impl Section {
    pub const ALL: [Self; 4] = [Self::Albums, Self::Blogs, Self::Notes, Self::Tyli];

    /// Output directory of the section.
    pub fn dir(self) -> &'static str {
        match self {
            Self::Albums => "albums",
            Self::Blogs => "blogs",
            Self::Notes => "notes",
            Self::Tyli => "tyli",
        }
    }

    /// Display title.
    pub fn title(self) -> &'static str {
        match self {
            Self::Albums => "Albums",
            Self::Blogs => "Blogs",
            Self::Notes => "Notes",
            Self::Tyli => "TYLI",
        }
    }

    /// Direction used by the section landing page.
    ///
    /// Albums read oldest review first; writing sections read newest first.
    pub fn default_direction(self) -> SortDirection {
        match self {
            Self::Albums => SortDirection::Asc,
            Self::Blogs | Self::Notes | Self::Tyli => SortDirection::Desc,
        }
    }

    /// Sort control text for the current direction.
    pub fn sort_label(self, direction: SortDirection) -> &'static str {
        match (self, direction) {
            (Self::Albums, SortDirection::Asc) => "Sort: Ascending",
            (Self::Albums, SortDirection::Desc) => "Sort: Descending",
            (_, SortDirection::Desc) => "sort: newest first ↓",
            (_, SortDirection::Asc) => "sort: oldest first ↑",
        }
    }

    /// Whether listing pages are split into batches.
    ///
    /// Notes are always shown on a single page.
    pub fn is_paginated(self) -> bool {
        !matches!(self, Self::Notes)
    }

    /// Site-relative landing page.
    pub fn index_path(self) -> String {
        format!("{}/index.html", self.dir())
    }

    /// Site-relative listing page for a direction and 1-based page number.
    pub fn page_path(self, direction: SortDirection, page: usize) -> String {
        format!("{}/{}-{}.html", self.dir(), direction.slug(), page)
    }
}

/// Position of a listing page among its siblings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    /// 1-based page number
    pub number: usize,
    pub total: usize,
}

impl Pagination {
    pub fn previous(&self) -> Option<usize> {
        (self.number > 1).then(|| self.number - 1)
    }

    pub fn next(&self) -> Option<usize> {
        (self.number < self.total).then(|| self.number + 1)
    }
}

/// Orders albums by global sequence.
pub fn order_albums(albums: &[Album], direction: SortDirection) -> Vec<&Album> {
    let mut ordered: Vec<&Album> = albums.iter().collect();
    ordered.sort_by(|a, b| {
        let ord = a.info.global_sequence.cmp(&b.info.global_sequence);
        match direction {
            SortDirection::Asc => ord,
            SortDirection::Desc => ord.reverse(),
        }
    });
    ordered
}

/// Orders blog or TYLI entries by sequence.
///
/// Lower sequence numbers are newer, so newest-first (`Desc`) is ascending
/// sequence.
pub fn order_by_sequence(entries: &[Entry], direction: SortDirection) -> Vec<&Entry> {
    let mut ordered: Vec<&Entry> = entries.iter().collect();
    ordered.sort_by(|a, b| {
        let ord = a.sequence.cmp(&b.sequence);
        match direction {
            SortDirection::Desc => ord,
            SortDirection::Asc => ord.reverse(),
        }
    });
    ordered
}

/// Orders note entries by date, newest first for `Desc`.
///
/// Unparsable dates fall back to text comparison. The sort is stable, so
/// entries with equal dates keep their catalog order.
pub fn order_by_date(entries: &[Entry], direction: SortDirection) -> Vec<&Entry> {
    let mut ordered: Vec<&Entry> = entries.iter().collect();
    ordered.sort_by(|a, b| {
        let ord = compare_dates(&a.info.publish_date, &b.info.publish_date);
        match direction {
            SortDirection::Asc => ord,
            SortDirection::Desc => ord.reverse(),
        }
    });
    ordered
}

fn compare_dates(a: &str, b: &str) -> Ordering {
    match (parse_date(a), parse_date(b)) {
        (Some(a), Some(b)) => a.cmp(&b),
        _ => a.cmp(b),
    }
}

/// Splits items into consecutive batches of `per_page`.
///
/// Always yields at least one page, empty when there are no items, so every
/// section has a landing page.
pub fn paginate<T>(items: &[T], per_page: usize) -> Vec<&[T]> {
    if items.is_empty() {
        return vec![items];
    }
    items.chunks(per_page.max(1)).collect()
}
