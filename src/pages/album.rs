//! Album review page generation

use maud::{Markup, PreEscaped, html};

use crate::assets::{REVIEW_CSS, UNLOCK_JS};
use crate::components::cards::album_cover;
use crate::components::layout::page_wrapper;
use crate::content::Album;
use crate::markdown;
use crate::unlock::{ReviewKind, UnlockState, storage_key};
use crate::util::pad_sequence;

/// Pre-review document name under `reviews/`.
pub const PRE_REVIEW_FILE: &str = "album-pre-review.md";

/// Main review document name under `reviews/`.
pub const MAIN_REVIEW_FILE: &str = "album-review.md";

/// Markdown sources of an album's reviews, `None` when absent.
#[derive(Debug, Clone, Copy, Default)]
pub struct AlbumReviews<'a> {
    pub pre_review: Option<&'a str>,
    pub main_review: Option<&'a str>,
}

/// Generates an album review page
///
/// # Arguments
///
/// * `album`: Album being reviewed
/// * `reviews`: Pre-review and main review Markdown
/// * `unlock`: Which main reviews render without the lock overlay
///
/// # Returns
///
/// Complete HTML page as Markup
pub fn generate(album: &Album, reviews: AlbumReviews<'_>, unlock: &UnlockState) -> Markup {
    let locked = reviews.main_review.is_some()
        && !unlock.is_unlocked(&album.path, ReviewKind::MainReview);

    page_wrapper(
        &album.display_title(),
        &album.page_path(),
        &[REVIEW_CSS],
        html! {
            (details(album))
            (pre_review(reviews.pre_review))
            (tracklist(album))
            (main_review(album, reviews.main_review, locked))
            @if locked {
                script src=(UNLOCK_JS) {}
            }
        },
    )
}

fn details(album: &Album) -> Markup {
    let info = &album.info;
    html! {
        section.album-details {
            (album_cover(album, "album-cover-large"))
            div.album-meta {
                h1.album-title { (info.album_name) }
                h2.album-artist { (info.album_artist) }
                p { span.info-label { "Release Year: " } (info.release_year) }
                p { span.info-label { "Review Published: " } (info.review_publish_date) }
                p { span.info-label { "Global Sequence: " } "#" (pad_sequence(info.global_sequence)) }
            }
        }
    }
}

fn pre_review(source: Option<&str>) -> Markup {
    html! {
        section.review-section data-review-type=(ReviewKind::PreReview.as_str()) {
            h2 { "Album Pre-Review" }
            @if let Some(source) = source {
                div.review-text.markdown-body { (PreEscaped(markdown::render(source))) }
            } @else {
                p.empty-state { "No album pre-review available." }
            }
        }
    }
}

fn tracklist(album: &Album) -> Markup {
    html! {
        section.review-section {
            h2 { "Tracklist" }
            @if album.info.tracklist.is_empty() {
                p.empty-state { "No tracklist available." }
            } @else {
                ol.tracklist {
                    @for track in &album.info.tracklist {
                        li {
                            a.track-row href=(album.track_page_path(&track.sequence)) data-track=(track.sequence) {
                                span.track-number { (format!("{:0>2}", track.sequence)) }
                                span.track-name { (track.song_name) }
                                span.track-arrow { "→" }
                            }
                        }
                    }
                }
            }
        }
    }
}

fn main_review(album: &Album, source: Option<&str>, locked: bool) -> Markup {
    let Some(source) = source else {
        return html! {
            section.review-section {
                h2 { "Album Review" }
                p.empty-state { "No album review available." }
            }
        };
    };

    let key = locked.then(|| storage_key(&album.path, ReviewKind::MainReview));
    html! {
        section.review-section.locked[locked]
            data-review-type=(ReviewKind::MainReview.as_str())
            data-unlock-key=[key] {
            h2 { "Album Review" }
            @if locked {
                div.lock-overlay {
                    div.lock-icon { "🔒" }
                    div.lock-text { "Click to unlock and read the full album review" }
                    button.unlock-button type="button" { "Unlock Review" }
                }
            }
            div.review-text.markdown-body { (PreEscaped(markdown::render(source))) }
        }
    }
}
