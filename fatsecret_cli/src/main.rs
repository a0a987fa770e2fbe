mod commands;
mod config;
mod output;
mod xml_output;

use anyhow::Result;
use clap::{Parser, Subcommand};
use fatsecret_api::Client;

use crate::output::OutputFormat;

#[derive(Parser)]
#[command(name = "fatsecret")]
#[command(about = "Browse FatSecret food categories")]
struct Cli {
    /// Output format: table, json, csv, markdown, xml
    #[arg(long, default_value = "table", global = true)]
    output: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List all food categories
    Categories(commands::categories::CategoriesArgs),
    /// List the sub-categories of a food category
    SubCategories(commands::sub_categories::SubCategoriesArgs),
}

#[tokio::main]
async fn main() -> Result<()> {
    // Before the subscriber so RUST_LOG from .env applies
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("fatsecret=info".parse()?),
        )
        .with_target(false)
        .init();

    let cli = Cli::parse();

    let format = OutputFormat::parse(&cli.output);

    let config = config::from_env()?;
    tracing::debug!("Using API endpoint {}", config.api_url());
    let client = Client::new(config)?;

    match &cli.command {
        Commands::Categories(args) => commands::categories::run(args, &client, &format).await?,
        Commands::SubCategories(args) => {
            commands::sub_categories::run(args, &client, &format).await?
        }
    }

    Ok(())
}
