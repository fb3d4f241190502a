use anyhow::Context;
use garden_plan_server::{build_router, AppState, ServerConfig};
use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = ServerConfig::from_env();
    let state = AppState::open(&config)
        .with_context(|| format!("opening database {}", config.db_path.display()))?;

    let listener = TcpListener::bind(config.bind_addr())
        .await
        .with_context(|| format!("binding {}", config.bind_addr()))?;
    info!(
        addr = %config.bind_addr(),
        static_dir = %config.static_dir.display(),
        "serving garden plan"
    );
    axum::serve(listener, build_router(state)).await?;
    Ok(())
}
