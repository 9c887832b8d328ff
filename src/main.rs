use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::EnvFilter;
use link_summarizer::{
    config::Config,
    api::routes::create_router,
    AppState,
};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load()?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let server_addr = config.server_addr;
    info!(
        api_key_loaded = config.api_key_loaded(),
        llm = %config.groq_api_url,
        "configuration loaded"
    );

    let app = create_router(AppState::from_config(config)?);

    let listener = TcpListener::bind(server_addr).await?;
    info!("Listening on http://{}", server_addr);
    axum::serve(listener, app).await?;

    Ok(())
}
