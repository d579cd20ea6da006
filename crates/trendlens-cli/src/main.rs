mod commands;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;
use trendlens_core::CATEGORY_BEST100;

#[derive(Debug, Parser)]
#[command(name = "trendlens-cli")]
#[command(about = "Trendlens shopping trend command line interface")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Database maintenance
    Db {
        #[command(subcommand)]
        command: DbCommands,
    },
    /// Scrape the best-100 page and store the result
    Crawl {
        /// Print the scraped products without storing them
        #[arg(long)]
        dry_run: bool,
    },
    /// Run a product scan over the keyword lists
    Scan {
        #[command(subcommand)]
        command: ScanCommands,
    },
    /// Keyword-tool analysis of one keyword
    Analyze {
        #[arg(value_parser = parse_keyword)]
        keyword: String,
    },
    /// Trend summary, related keywords, and search volume for one keyword
    Trend {
        #[arg(value_parser = parse_keyword)]
        keyword: String,
    },
    /// List stored products of a category
    Items {
        #[arg(long, default_value = CATEGORY_BEST100)]
        category: String,
    },
}

#[derive(Debug, Subcommand)]
enum DbCommands {
    Ping,
    Migrate,
    Stats,
}

#[derive(Debug, Subcommand)]
enum ScanCommands {
    /// Popular keyword list, stored under `인기상품` when live
    Popular {
        #[arg(long)]
        dry_run: bool,
    },
    /// Every category group
    Groups,
    /// One category group
    Category { name: String },
}

/// Trims a keyword argument, rejecting blank input.
fn parse_keyword(raw: &str) -> Result<String, String> {
    let keyword = raw.trim();
    if keyword.is_empty() {
        return Err("keyword must not be blank".to_string());
    }
    Ok(keyword.to_string())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let config = trendlens_core::load_app_config()?;
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.command {
        Some(Commands::Db { command }) => match command {
            DbCommands::Ping => commands::run_db_ping(&config).await,
            DbCommands::Migrate => commands::run_db_migrate(&config).await,
            DbCommands::Stats => commands::run_db_stats(&config).await,
        },
        Some(Commands::Crawl { dry_run }) => commands::run_crawl(&config, dry_run).await,
        Some(Commands::Scan { command }) => match command {
            ScanCommands::Popular { dry_run } => {
                commands::run_scan_popular(&config, dry_run).await
            }
            ScanCommands::Groups => commands::run_scan_groups(&config).await,
            ScanCommands::Category { name } => commands::run_scan_category(&config, &name).await,
        },
        Some(Commands::Analyze { keyword }) => commands::run_analyze(&config, &keyword).await,
        Some(Commands::Trend { keyword }) => commands::run_trend(&config, &keyword).await,
        Some(Commands::Items { category }) => commands::run_items(&config, &category).await,
        None => {
            println!("trendlens-cli: run with --help for available commands");
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests;
