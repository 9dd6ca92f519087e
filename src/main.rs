use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use tracing::error;

use cave_scraper::parser::markers::MarkerRule;
use cave_scraper::{archive, fetch, fetch_cave_info};

#[derive(Parser)]
#[command(
    name = "cave_scraper",
    about = "Fetch a cave page and extract its named sections"
)]
struct Cli {
    /// URL of the cave page to scrape
    url: String,

    /// Which section-marker convention the page uses
    #[arg(long, value_enum, default_value_t = MarkerRule::ClassExact)]
    marker_rule: MarkerRule,

    /// Root directory for snapshots and parsed dumps
    #[arg(long, default_value = "data")]
    data_dir: PathBuf,

    /// Also print the record as JSON on stdout
    #[arg(long)]
    json: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let cli = Cli::parse();

    let client = fetch::build_client().context("Failed to build HTTP client")?;
    let record = fetch_cave_info(&client, &cli.url, cli.marker_rule, &cli.data_dir).await;

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&record)?);
    }

    match archive::write_parsed_dump(&cli.data_dir, &record) {
        Ok(path) => println!("Cave information saved to '{}'", path.display()),
        Err(e) => error!("Failed to write parsed dump: {e}"),
    }

    Ok(())
}
