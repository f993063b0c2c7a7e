use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use storefront_api::{
    config::AppConfig,
    db::create_orm_conn,
    importer::{import_products, parse_catalogue},
    telemetry::init_tracing,
};

/// Replace the products table with the contents of a catalogue file.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// JSON array of products.
    #[arg(default_value = "products.json")]
    file: PathBuf,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    init_tracing("info");
    let args = Args::parse();

    // The import is fire-and-forget: failures are logged, never re-raised.
    if let Err(err) = run(args).await {
        tracing::error!(error = ?err, "product import failed");
    }
    Ok(())
}

async fn run(args: Args) -> anyhow::Result<()> {
    let config = AppConfig::from_env()?;
    let json = tokio::fs::read_to_string(&args.file)
        .await
        .with_context(|| format!("reading {}", args.file.display()))?;
    let products = parse_catalogue(&json).context("parsing product catalogue")?;

    let orm = create_orm_conn(&config.database_url).await?;
    let imported = import_products(&orm, &products).await?;
    tracing::info!(imported, "all products imported");
    Ok(())
}
