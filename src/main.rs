use anyhow::{Context, Result};
use tpw::{Catalog, Config, ContentRoot, SiteOptions, search};
use tracing::{info, warn};
use tracing_subscriber::{filter::EnvFilter, fmt, prelude::*};

fn main() -> Result<()> {
    let config = Config::parse();
    init_logging(config.verbose);
    config.validate().context("Invalid configuration")?;

    let root = ContentRoot::new(&config.content);
    let catalog = Catalog::load(&root).context("Failed to load content")?;

    if let Some(term) = &config.search {
        print!("{}", search::report(&catalog, term));
        return Ok(());
    }

    let unlock = config.unlock_state();
    let summary = tpw::generate_site(
        &root,
        &catalog,
        SiteOptions {
            output: &config.output,
            per_page: config.per_page,
            unlock: &unlock,
        },
    )
    .context("Failed to generate site")?;

    info!(
        listings = summary.listing_pages,
        albums = summary.album_pages,
        tracks = summary.track_pages,
        articles = summary.article_pages,
        media = summary.media_files,
        "Build complete"
    );
    println!(
        "Generated {} pages in {}",
        summary.total_pages(),
        config.output.display()
    );

    if !config.no_open {
        let index = config.output.join("index.html");
        if let Err(e) = open::that(&index) {
            warn!(path = %index.display(), "Failed to open browser: {e}");
        }
    }

    Ok(())
}

fn init_logging(verbosity: u8) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(log_level(verbosity)));

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .with(filter)
        .init();
}

fn log_level(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "info",
        1 => "debug",
        _ => "trace",
    }
}
