//! Album listing page generation

use maud::{Markup, html};

use super::ListingView;
use crate::assets::LISTING_CSS;
use crate::components::cards::album_card;
use crate::components::layout::page_wrapper;
use crate::components::nav::{pager, sort_link};
use crate::content::Album;
use crate::listing::Section;

/// Generates one page of the album listing
///
/// Consecutive cards are joined by a connecting line.
///
/// # Arguments
///
/// * `albums`: Albums on this page, already ordered
/// * `view`: Direction, page position and output path
///
/// # Returns
///
/// Complete HTML page as Markup
pub fn generate(albums: &[&Album], view: ListingView<'_>) -> Markup {
    let section = Section::Albums;

    page_wrapper(
        section.title(),
        view.path,
        &[LISTING_CSS],
        html! {
            div.listing-controls {
                h1.page-title { (section.title()) }
                (sort_link(section, view.direction))
            }
            @if albums.is_empty() {
                div.empty-state { p { "No albums found." } }
            } @else {
                div.album-list {
                    @for (i, album) in albums.iter().enumerate() {
                        @if i > 0 {
                            div.album-connector {}
                        }
                        (album_card(album))
                    }
                }
            }
            (pager(section, view.direction, view.pagination))
        },
    )
}
