//! Track review page generation

use maud::{Markup, PreEscaped, html};

use crate::assets::REVIEW_CSS;
use crate::components::layout::page_wrapper;
use crate::content::{Album, Track};
use crate::markdown;

/// Generates a track review page
///
/// Previous and next arrows step through the tracklist by track number and
/// are disabled at the first and last track. Without a review document the
/// header drops the track number and a placeholder message is shown.
///
/// # Arguments
///
/// * `album`: Album holding the track
/// * `track`: Track being reviewed
/// * `review`: Track review Markdown, if present
///
/// # Returns
///
/// Complete HTML page as Markup
pub fn generate(album: &Album, track: &Track, review: Option<&str>) -> Markup {
    let number = track.number();
    let total = album.info.tracklist.len() as u32;
    let previous = (number > 1)
        .then(|| album.track_by_number(number - 1))
        .flatten();
    let next = (number < total)
        .then(|| album.track_by_number(number + 1))
        .flatten();

    page_wrapper(
        &format!("{} - {}", track.song_name, album.info.album_name),
        &album.track_page_path(&track.sequence),
        &[REVIEW_CSS],
        html! {
            a.back-link href=(album.page_path()) { "← Back to album" }
            section.track-review {
                div.track-header {
                    h1.track-title {
                        @if review.is_some() {
                            "#" (track.sequence) " "
                        }
                        (track.song_name)
                    }
                    div.track-navigation {
                        (arrow(album, previous, "←", "Previous track", "First track"))
                        (arrow(album, next, "→", "Next track", "Last track"))
                    }
                }
                @if let Some(source) = review {
                    div.markdown-body { (PreEscaped(markdown::render(source))) }
                } @else {
                    p.empty-state { "Review for this track is not yet available." }
                }
            }
        },
    )
}

fn arrow(
    album: &Album,
    target: Option<&Track>,
    symbol: &str,
    title: &str,
    disabled_title: &str,
) -> Markup {
    html! {
        @if let Some(target) = target {
            a.track-arrow href=(album.track_page_path(&target.sequence)) title=(title) { (symbol) }
        } @else {
            span.track-arrow.disabled title=(disabled_title) aria-disabled="true" { (symbol) }
        }
    }
}
