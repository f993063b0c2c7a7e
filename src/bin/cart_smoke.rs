use storefront_api::{
    config::AppConfig, db::create_orm_conn, diagnostics::run_cart_smoke, telemetry::init_tracing,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    init_tracing("info");

    if let Err(err) = run().await {
        tracing::error!(error = ?err, "cart smoke test failed");
    }
    Ok(())
}

async fn run() -> anyhow::Result<()> {
    let config = AppConfig::from_env()?;
    let orm = create_orm_conn(&config.database_url).await?;
    let report = run_cart_smoke(&orm).await?;
    for row in &report.rows {
        tracing::info!(?row, "cart row");
    }
    Ok(())
}
