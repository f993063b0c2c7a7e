use std::{net::SocketAddr, sync::Arc};

use storefront_api::{
    config::AppConfig,
    db::{create_orm_conn, run_migrations},
    password::Argon2Scheme,
    routes::create_app,
    state::AppState,
    telemetry::init_tracing,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    init_tracing("info,storefront_api=debug");

    let config = AppConfig::from_env()?;
    let orm = create_orm_conn(&config.database_url).await?;
    run_migrations(&orm).await?;

    if config.debug_routes {
        tracing::warn!("debug routes enabled: /api/debug/cart exposes all carts and users");
    }

    let state = AppState::new(orm, Arc::new(Argon2Scheme));
    let app = create_app(state, &config);

    let addr = SocketAddr::from((config.host.parse::<std::net::IpAddr>()?, config.port));
    tracing::info!("listening on {}", addr);

    axum::serve(tokio::net::TcpListener::bind(addr).await?, app).await?;

    Ok(())
}
