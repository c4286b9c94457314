//! Static site generator for The Philosopher's Window.

mod assets;
pub mod components;
mod config;
pub mod content;
pub mod listing;
pub mod markdown;
pub mod pages;
pub mod search;
mod site;
pub mod unlock;
mod util;

pub use assets::write_assets;
pub use config::Config;
pub use content::{Catalog, ContentRoot};
pub use site::{BuildSummary, SiteOptions, generate_site};
pub use unlock::UnlockState;
pub use util::{format_date, parse_date};
