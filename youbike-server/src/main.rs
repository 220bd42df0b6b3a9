use tracing_subscriber::EnvFilter;

use youbike_server::config::AppConfig;
use youbike_server::slack::SlackNotifier;
use youbike_server::web::{AppState, create_router};
use youbike_server::youbike::{MockYouBikeClient, StationBackend, YouBikeClient};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = AppConfig::from_env()?;

    if config.base_url.is_none() {
        tracing::warn!("BASE_URL not set. Slack messages will not include station images.");
    }

    // Mock pages for development, live API otherwise
    let source = match &config.mock_dir {
        Some(dir) => {
            let client = MockYouBikeClient::load(dir)?;
            tracing::info!(?dir, pages = ?client.available_pages(), "using mock station data");
            StationBackend::Mock(client)
        }
        None => {
            let client = YouBikeClient::new(config.youbike.clone())?;
            tracing::info!(url = client.base_url(), "using live YouBike API");
            StationBackend::Live(client)
        }
    };

    let notifier = SlackNotifier::new(config.youbike.timeout_secs)?;

    let state = AppState::new(
        source,
        config.catalog.clone(),
        notifier,
        config.image_url(),
    );

    let app = create_router(state, &config.static_dir);

    let addr = config.bind_addr;
    tracing::info!("YouBike station server listening on http://{addr}");
    tracing::info!("  GET  /health          - Health check");
    tracing::info!("  GET  /stations        - Station availability as JSON");
    tracing::info!("  POST /slack/stations  - Slack slash command");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
