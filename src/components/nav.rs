//! Site navigation, sort toggle and pager components

use maud::{Markup, html};

use crate::listing::{Pagination, Section, SortDirection};

/// Renders the site header navigation
pub fn site_nav() -> Markup {
    html! {
        header.site-header {
            nav.site-nav {
                a.site-title href="index.html" { "The Philosopher's Window" }
                a.nav-link href="index.html" { "Home" }
                @for section in Section::ALL {
                    a.nav-link href=(section.index_path()) { (section.title()) }
                }
            }
        }
    }
}

/// Renders the sort toggle link
///
/// Shows the label for the current direction and links to the first page
/// of the opposite ordering.
///
/// # Arguments
///
/// * `section`: Section being listed
/// * `direction`: Direction of the current page
///
/// # Returns
///
/// Anchor styled as the sort button
pub fn sort_link(section: Section, direction: SortDirection) -> Markup {
    let target = section.page_path(direction.toggled(), 1);
    html! {
        a.sort-button href=(target) data-direction=(direction.slug()) {
            (section.sort_label(direction))
        }
    }
}

/// Renders previous/next links between listing pages
///
/// Nothing is rendered for a single page.
pub fn pager(section: Section, direction: SortDirection, pagination: Pagination) -> Markup {
    if pagination.total <= 1 {
        return html! {};
    }

    html! {
        nav.pager {
            @if let Some(previous) = pagination.previous() {
                a.pager-link href=(section.page_path(direction, previous)) { "← Previous" }
            } @else {
                span.pager-disabled { "← Previous" }
            }
            span.pager-position { "Page " (pagination.number) " of " (pagination.total) }
            @if let Some(next) = pagination.next() {
                a.pager-link href=(section.page_path(direction, next)) { "Next →" }
            } @else {
                span.pager-disabled { "Next →" }
            }
        }
    }
}
