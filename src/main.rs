//! Catalog parser: fetch or read a catalog page and write channels.json

use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;
use tracing::info;

use catalog_parser::{
    parse_channels, write_channels, FetchOptions, Source, CATALOG_URL, DEFAULT_OUTPUT,
};

#[derive(Parser)]
#[command(
    name = "catalog-parser",
    about = "Extract channel records from a catalog page into JSON",
    version
)]
struct Cli {
    /// Local HTML file to parse instead of fetching the catalog.
    input: Option<PathBuf>,

    /// Catalog URL to fetch when no input file is given.
    #[arg(long, default_value = CATALOG_URL)]
    url: String,

    /// Output JSON file.
    #[arg(short, long, default_value = DEFAULT_OUTPUT)]
    output: PathBuf,

    /// User-Agent header for the HTTP request.
    #[arg(long)]
    user_agent: Option<String>,

    /// Request timeout in seconds (no timeout by default).
    #[arg(long)]
    timeout_secs: Option<u64>,

    /// Log level (trace, debug, info, warn, error).
    #[arg(long, default_value = "info")]
    log_level: String,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&cli.log_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let mut options = FetchOptions::default();
    if let Some(user_agent) = cli.user_agent {
        options.user_agent = user_agent;
    }
    options.timeout = cli.timeout_secs.map(Duration::from_secs);

    let source = match cli.input {
        Some(path) => Source::File(path),
        None => Source::Url(cli.url),
    };

    let html = source.load(&options)?;
    let channels = parse_channels(&html);
    write_channels(&cli.output, &channels)?;

    info!(channels = channels.len(), "catalog parsed");
    Ok(())
}
