use field_ops::shell::config::AppConfig;
use field_ops::shell::http;
use field_ops::shell::state::{AppState, Dependencies};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = AppConfig::from_env();
    let state = AppState::new(&config, Dependencies::in_memory());
    let router = http::router(state);

    let addr = format!("{}:{}", config.host, config.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!(%addr, "field_ops listening");
    axum::serve(listener, router).await?;
    Ok(())
}
