// CLI entry point for award winner discovery.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use laureate::pipeline::analyze_description;
use laureate::{
    DiscoveryConfig, GeminiOracle, HttpFetcher, TavilyWebSearcher, WinnerDiscovery,
};

#[derive(Parser)]
#[command(name = "laureate", about = "Discover and verify past award recipients")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Search the web for confirmed past recipients of an award
    Winners {
        /// Name of the award, e.g. "Rhodes Scholarship"
        award: String,

        /// Directory for the winners JSON file
        #[arg(long, default_value = "data")]
        output_dir: PathBuf,

        /// Search results requested per query
        #[arg(long, default_value_t = 5)]
        results_per_query: usize,

        /// Number of search queries to plan
        #[arg(long, default_value_t = 5)]
        queries: usize,
    },

    /// Analyze an award description file into a weighted profile
    Profile {
        /// Path to a file containing the award description text
        file: PathBuf,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,laureate=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::Winners {
            award,
            output_dir,
            results_per_query,
            queries,
        } => {
            let oracle = GeminiOracle::from_env().context("Failed to configure Gemini oracle")?;
            let searcher =
                TavilyWebSearcher::from_env().context("Failed to configure Tavily search")?;
            let fetcher = HttpFetcher::new();

            let config = DiscoveryConfig::default()
                .with_query_count(queries)
                .with_results_per_query(results_per_query);

            let discovery = WinnerDiscovery::new(oracle, searcher, fetcher).with_config(config);
            let winners = discovery.discover(&award).await;

            if winners.is_empty() {
                println!("No confirmed winners found for \"{}\".", award);
            } else {
                let path = laureate::output::write_winners(&output_dir, &award, &winners)
                    .context("Failed to write winners file")?;
                println!(
                    "Saved {} winner profiles to {}",
                    winners.len(),
                    path.display()
                );
            }
        }

        Command::Profile { file } => {
            let description = std::fs::read_to_string(&file)
                .with_context(|| format!("Failed to read {}", file.display()))?;

            let oracle = GeminiOracle::from_env().context("Failed to configure Gemini oracle")?;
            let profile = analyze_description(&oracle, &description)
                .await
                .context("Profile analysis failed")?;

            println!("{}", serde_json::to_string_pretty(&profile)?);
        }
    }

    Ok(())
}
