//! The feuilleton binary.

use clap::Parser;
use feuilleton::cli::{Cli, run_novel};
use feuilleton::{FeuilletonConfig, FeuilletonResult};
use tracing_subscriber::EnvFilter;

async fn run(cli: &Cli) -> FeuilletonResult<()> {
    println!("Loading config: {}", cli.config.display());
    let config = FeuilletonConfig::load(&cli.config)?;

    let summary = run_novel(&config).await?;

    println!("\nGenerated {} chapters", summary.chapters.len());
    println!("Total time: {:.2} seconds", summary.elapsed_secs);

    if let Some(preview) = summary.last_chapter_preview() {
        println!("\nPreview last chapter content:");
        println!("{}", "-".repeat(50));
        println!("{}", preview);
        println!("{}", "-".repeat(50));
    }

    Ok(())
}

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    println!("Feuilleton novel generator start...");

    let cli = Cli::parse();

    if let Err(e) = run(&cli).await {
        println!("\nError: An error occurred while generating the novel");
        println!("Error message: {}", e);
        println!("\nPlease check the configuration file and network connection and try again");
    }
}
