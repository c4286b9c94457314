//! Reusable HTML components for page generation
//!
//! Maud component functions shared across the listing and review pages.
//! Every page is rendered with a `<base href>` at the site root, so links
//! produced here are site-relative paths.

pub mod cards;
pub mod footer;
pub mod layout;
pub mod nav;
