mod config;
mod error;
mod routes;

use config::HostConfig;
use error::HostError;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), HostError> {
    let _ = dotenvy::dotenv();
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    run().await.inspect_err(|e| tracing::error!(error = %e, "furglo host stopped"))
}

async fn run() -> Result<(), HostError> {
    let config = HostConfig::from_env()?;
    let app = routes::app()?;

    let addr = config.addr();
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .map_err(|source| HostError::Bind { addr, source })?;

    tracing::info!(%addr, "furglo listening");
    axum::serve(listener, app).await.map_err(HostError::Serve)
}
