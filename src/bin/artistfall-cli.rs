use std::sync::Arc;
use std::time::Duration;

use artistfall::animator::{BLOCK_WIDTH, MAX_BLOCKS};
use artistfall::api::feed::DEFAULT_BASE_URL;
use artistfall::{AnimatorConfig, ArtistRain, ConsoleSurface, FeedConfig};
use clap::Parser;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "artistfall-cli")]
#[command(about = "Falling artist thumbnails in the terminal", long_about = None)]
struct Cli {
    /// Backend serving /api/artists
    #[arg(long, env = "ARTISTFALL_BASE_URL", default_value = DEFAULT_BASE_URL)]
    base_url: String,

    /// Blocks falling at the same time
    #[arg(short, long, default_value_t = MAX_BLOCKS)]
    max_blocks: usize,

    /// Viewport width in pixels
    #[arg(short, long, default_value_t = 1280.0)]
    width: f64,

    /// Block width in pixels
    #[arg(long, default_value_t = BLOCK_WIDTH)]
    block_width: f64,

    /// Request timeout in seconds
    #[arg(long, default_value_t = 10)]
    timeout: u64,

    /// Fixed RNG seed for reproducible runs
    #[arg(long, env = "ARTISTFALL_SEED")]
    seed: Option<u64>,

    /// Initial search query
    #[arg(short, long)]
    query: Option<String>,

    /// Stop after this many seconds instead of at end of input
    #[arg(short, long)]
    duration: Option<u64>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let feed = FeedConfig {
        base_url: cli.base_url,
        timeout: Duration::from_secs(cli.timeout),
        ..Default::default()
    };
    let config = AnimatorConfig {
        max_blocks: cli.max_blocks,
        block_width: cli.block_width,
        seed: cli.seed,
        ..Default::default()
    };

    let surface = Arc::new(ConsoleSurface::new(cli.width));
    let rain = ArtistRain::load(feed, surface, config).await?;

    if let Some(query) = &cli.query {
        rain.search(query);
    }

    match cli.duration {
        Some(secs) => {
            tokio::select! {
                _ = tokio::time::sleep(Duration::from_secs(secs)) => {}
                _ = tokio::signal::ctrl_c() => {}
            }
        }
        None => {
            println!("Type a query and press enter to filter; Ctrl-D to quit.");
            let mut lines = BufReader::new(tokio::io::stdin()).lines();
            loop {
                tokio::select! {
                    line = lines.next_line() => match line? {
                        Some(query) => {
                            let selection = rain.search(query.trim());
                            if selection.is_fallback() {
                                println!("No match for '{}', showing everyone", query.trim());
                            }
                        }
                        None => break,
                    },
                    _ = tokio::signal::ctrl_c() => break,
                }
            }
        }
    }

    rain.shutdown();
    Ok(())
}
