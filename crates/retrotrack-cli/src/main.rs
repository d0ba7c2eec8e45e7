mod report;
mod scrape;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "retrotrack")]
#[command(about = "Completed-listing market stats for retro consoles")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Search every configured console and print market stats
    Scrape {
        /// YAML file with a `consoles:` list (overrides `RETROTRACK_CONSOLES_PATH`)
        #[arg(long)]
        consoles: Option<PathBuf>,
        /// Print results as JSON instead of a summary
        #[arg(long)]
        json: bool,
    },
    /// Search a single console
    Search {
        /// Console name used as the search keyword (e.g., "Nintendo 64")
        console: String,
        /// Condition filter passed to eBay (e.g., "Used")
        #[arg(long)]
        condition: Option<String>,
        /// Print the result as JSON instead of a summary
        #[arg(long)]
        json: bool,
    },
    /// List the consoles a scrape would search
    Consoles {
        /// YAML file with a `consoles:` list (overrides `RETROTRACK_CONSOLES_PATH`)
        #[arg(long)]
        consoles: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Parse first so `--help` and usage errors never depend on the environment.
    let cli = Cli::parse();
    let config = retrotrack_core::load_app_config()?;
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Some(Commands::Scrape { consoles, json }) => {
            scrape::run_scrape(&config, consoles.as_deref(), json).await?;
        }
        Some(Commands::Search {
            console,
            condition,
            json,
        }) => {
            scrape::run_search(&config, &console, condition.as_deref(), json).await?;
        }
        Some(Commands::Consoles { consoles }) => {
            scrape::run_consoles(&config, consoles.as_deref())?;
        }
        None => println!("no command given; run `retrotrack --help`"),
    }

    Ok(())
}

#[cfg(test)]
mod tests;
