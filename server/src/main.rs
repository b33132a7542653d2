mod config;
mod routes;
mod state;

use tracing_subscriber::EnvFilter;

use crate::config::{ConfigError, ServerConfig};

#[derive(Debug, thiserror::Error)]
enum StartupError {
    #[error("configuration: {0}")]
    Config(#[from] ConfigError),

    #[error("http client: {0}")]
    HttpClient(#[from] reqwest::Error),

    #[error("{0}")]
    Leptos(String),

    #[error("io: {0}")]
    Io(#[from] std::io::Error),
}

#[tokio::main]
async fn main() {
    // A missing .env is normal in deployment.
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info,tower_http=info")))
        .init();

    if let Err(e) = run().await {
        tracing::error!(error = %e, "server stopped");
        std::process::exit(1);
    }
}

async fn run() -> Result<(), StartupError> {
    let config = ServerConfig::from_env()?;
    let state = state::AppState::from_config(&config)?;
    let app = routes::leptos_app(state).map_err(StartupError::Leptos)?;

    let listener = tokio::net::TcpListener::bind(("0.0.0.0", config.port)).await?;
    tracing::info!(port = config.port, upstream = %config.upstream_base_url, "lithosurfer listening");
    axum::serve(listener, app).await?;
    Ok(())
}
