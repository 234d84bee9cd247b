// src/main.rs
// =============================================================================
// This is the entry point of our CLI application.
//
// What happens here:
// 1. Parse command-line arguments using clap
// 2. Crawl from the seed URL, logging progress to stderr
// 3. Print the collected images as JSON on stdout
// 4. Save the same JSON to a file
// 5. Exit with proper code (0 = crawl finished, 2 = configuration error)
//
// A failed file write is logged but still exits with 0: the crawl itself
// succeeded and its result is already on stdout.
// =============================================================================

// Module declarations - tells Rust about our other source files
mod cli;      // src/cli.rs - command-line parsing
mod crawl;    // src/crawl/ - the recursive crawler
mod error;    // src/error.rs - error types
mod output;   // src/output.rs - JSON output
mod scrape;   // src/scrape/ - fetching and parsing single pages

use anyhow::Result;
use clap::Parser;
use tokio::sync::mpsc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use cli::Cli;
use crawl::{log_events, Crawler};

#[tokio::main]
async fn main() {
    init_tracing();

    let exit_code = match run().await {
        Ok(()) => 0,
        Err(e) => {
            tracing::error!("{:#}", e);
            2
        }
    };

    std::process::exit(exit_code);
}

// Logs go to stderr so stdout only ever carries the JSON document
fn init_tracing() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "img_crawler=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

async fn run() -> Result<()> {
    // Parse command-line arguments into our Cli struct
    // This will automatically handle --help, --version, etc.
    let cli = Cli::parse();
    let seed = cli.seed()?;

    let (events_tx, events_rx) = mpsc::unbounded_channel();
    let crawler = Crawler::new(cli.crawl_options())?.with_events(events_tx);
    let event_logger = tokio::spawn(log_events(events_rx));

    tracing::info!(%seed, max_depth = cli.max_depth, "starting crawl");

    crawler.crawl(&seed).await;
    let images = crawler.images().await;
    let pages_visited = crawler.pages_visited();

    // Dropping the crawler closes the event channel, which lets the logger
    // task finish and hand back its totals
    drop(crawler);
    let stats = event_logger.await?;

    tracing::info!(pages_visited, summary = %stats, "crawl finished");
    if stats.pages_failed > 0 {
        tracing::warn!(
            "{} page(s) could not be processed, their images are missing from the output",
            stats.pages_failed
        );
    }

    let json = output::to_json(&images)?;
    println!("{}", json);

    match output::write_json(&cli.output, &json).await {
        Ok(()) => tracing::info!(path = %cli.output.display(), "JSON file has been saved."),
        Err(e) => tracing::error!("{}", e),
    }

    Ok(())
}
