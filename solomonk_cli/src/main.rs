mod output;

use anyhow::Result;
use clap::Parser;
use solomonk_lib::solomonk_api::Client;
use solomonk_lib::{audit_ranges, MonsterExtractor, Pager};

/// Everything is compiled in; the parser only provides --help and --version.
#[derive(Parser)]
#[command(name = "solomonk-scrape", version)]
#[command(about = "Scrape the Solomonk bestiary and print every monster as a JSON array")]
struct Cli {}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("solomonk=info".parse()?),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let _cli = Cli::parse();

    tracing::info!("scraping Solomonk bestiary");

    let client = Client::new()?;
    let extractor = MonsterExtractor::new()?;
    let summary = Pager::new(client, extractor).run().await;

    for issue in audit_ranges(&summary.monsters) {
        tracing::warn!("inverted range: {}", issue);
    }

    tracing::info!(
        "done: {} unique monsters from {} pages ({} requests)",
        summary.monsters.len(),
        summary.pages,
        summary.requests
    );

    output::write_monsters(std::io::stdout().lock(), &summary.monsters)?;
    Ok(())
}
