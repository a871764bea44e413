mod config;
mod content;
mod routes;
mod state;

use tracing_subscriber::EnvFilter;

use config::ServerConfig;
use content::Content;

#[tokio::main]
async fn main() {
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(config::DEFAULT_LOG_FILTER)))
        .init();

    if let Err(e) = run().await {
        tracing::error!(error = %e, "folio failed to start");
        std::process::exit(1);
    }
}

async fn run() -> Result<(), Box<dyn std::error::Error>> {
    let config = ServerConfig::from_env()?;
    let content = Content::load(&config.content_path)?;
    tracing::info!(
        path = %config.content_path.display(),
        projects = content.projects.len(),
        "content loaded"
    );

    let app = routes::app(state::AppState::new(content))?;
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{}", config.port)).await?;

    tracing::info!(port = config.port, "folio listening");
    axum::serve(listener, app).await?;
    Ok(())
}
