//! Command line configuration.

use anyhow::{Result, bail};
use clap::{ArgAction, Parser};
use std::path::PathBuf;

use crate::content::validate_relative_path;
use crate::unlock::{ReviewKind, UnlockState};

/// Default number of cards per listing page.
pub const DEFAULT_PER_PAGE: usize = 3;

/// Command line configuration for tpw.
#[derive(Debug, Clone, Parser)]
#[command(name = "tpw", version, about, long_about = None)]
pub struct Config {
    /// Content root holding albums/, blogs/, notes/ and tyli/
    #[arg(default_value = ".")]
    pub content: PathBuf,

    /// Output directory
    #[arg(short, long, default_value = "dist")]
    pub output: PathBuf,

    /// Cards per listing page
    #[arg(long, default_value_t = DEFAULT_PER_PAGE)]
    pub per_page: usize,

    /// Album path whose main review is rendered unlocked (repeatable)
    #[arg(long = "unlock", value_name = "ALBUM")]
    pub unlock: Vec<String>,

    /// Render every album review unlocked
    #[arg(long)]
    pub unlock_all: bool,

    /// Print albums and notes matching a term instead of building
    #[arg(long, value_name = "TERM")]
    pub search: Option<String>,

    /// Do not open the generated site in a browser
    #[arg(long)]
    pub no_open: bool,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

impl Config {
    /// Parses configuration from command line arguments.
    pub fn parse() -> Self {
        <Self as Parser>::parse()
    }

    /// Validates configuration.
    ///
    /// # Errors
    ///
    /// Returns error if the content root does not exist, the page size is
    /// zero, or an unlocked album path is not a valid relative path.
    pub fn validate(&self) -> Result<()> {
        if !self.content.exists() {
            bail!("Content path does not exist: {}", self.content.display());
        }

        if self.per_page == 0 {
            bail!("--per-page must be at least 1");
        }

        for album in &self.unlock {
            validate_relative_path(album)?;
        }

        Ok(())
    }

    /// Builds the review unlock state from the unlock flags.
    pub fn unlock_state(&self) -> UnlockState {
        if self.unlock_all {
            return UnlockState::all_unlocked();
        }

        let mut state = UnlockState::new();
        for album in &self.unlock {
            state.unlock(album.trim_end_matches('/'), ReviewKind::MainReview);
        }
        state
    }
}
