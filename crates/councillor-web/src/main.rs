mod config;
mod error;
mod server;
mod views;

use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::EnvFilter;

use config::Config;
use server::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into()),
        )
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .init();

    info!("starting councillor-web");

    let config = Config::from_env()?;
    let data_source = config
        .data_path
        .as_ref()
        .map(|p| p.display().to_string())
        .unwrap_or_else(|| "bundled".to_string());
    info!(
        data_source = %data_source,
        listen_addr = %config.listen_addr,
        "configuration loaded"
    );

    let store = config.load_store()?;
    let app = server::build_router(AppState::new(store));

    let listener = TcpListener::bind(config.listen_addr).await?;
    info!(listen_addr = %config.listen_addr, "directory ready, serving on HTTP");
    axum::serve(listener, app).await.inspect_err(|e| {
        tracing::error!(error = %e, "http server error");
    })?;
    info!("councillor-web shut down");
    Ok(())
}
