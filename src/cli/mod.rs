use anyhow::Context;
use clap::Parser;
use log::{info, warn};
use std::{
    path::{Path, PathBuf},
    sync::Arc,
};

use crate::browser;
use crate::config::Config;
use crate::http::server::HttpServer;
use crate::library::{
    ingest::{IngestReport, ingest},
    scanner::scan_dir,
    tags::LoftyTagReader,
};
use crate::storage::StoreConnector;

#[derive(Parser)]
#[command(name = "songlist")]
#[command(version = "0.1")]
#[command(about = "Imports the tags of a directory of MP3s and lists them on a web page")]
pub struct Cli {
    /// Directory holding the audio files to import
    pub dir: PathBuf,

    /// Path to an optional config TOML file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Do not open the song listing in a browser
    #[arg(long)]
    pub no_browser: bool,

    /// More logging: -v for debug, -vv for trace
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

fn init_logging(verbose: u8) {
    let log_level = match verbose {
        0 => "info",
        1 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level))
        .format_timestamp(None)
        .init();
}

/// Scans `dir` and stores a song for every matching file.
///
/// Nothing is written unless every file's tags could be read.
pub fn import_directory(dir: &Path, cfg: &Config) -> anyhow::Result<IngestReport> {
    let paths = scan_dir(dir, &cfg.library_source)?;
    ingest(&cfg.database, &LoftyTagReader, &paths)
        .with_context(|| format!("Failed to import songs from {}", dir.display()))
}

fn serve(cfg: Config, open_browser: bool) -> anyhow::Result<()> {
    let store: Arc<dyn StoreConnector> = Arc::new(cfg.database.clone());
    let server = HttpServer::new(store, cfg.http).bind()?;

    let url = browser::listing_url(server.server_addr());
    info!("HTTP server running at {url}");

    if open_browser && cfg.browser.open {
        if let Err(e) = browser::open(&url) {
            warn!("Could not open a browser at {url}: {e}");
        }
    }

    server.run();
    Ok(())
}

/// Entrypoint for CLI
pub fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let cfg = match &cli.config {
        Some(path) => Config::load(path)?,
        None => Config::default(),
    };
    info!("Database: {}", cfg.database.path.display());

    let report = import_directory(&cli.dir, &cfg)?;
    info!(
        "Imported {} of {} scanned files",
        report.inserted, report.scanned
    );

    serve(cfg, !cli.no_browser)
}
