use anyhow::Context;
use tracing_subscriber::{EnvFilter, fmt};

use map_store::modules::map::adapters::outbound::directory_in_memory::InMemoryDirectory;
use map_store::shell::config::MapStoreConfig;
use map_store::shell::http::router;
use map_store::shell::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    fmt().with_env_filter(EnvFilter::from_default_env()).init();

    let config = MapStoreConfig::from_env()?;

    let directory = match &config.seed_path {
        Some(path) => InMemoryDirectory::from_seed_file(path)
            .with_context(|| format!("loading seed {}", path.display()))?,
        None => InMemoryDirectory::new(),
    };

    let app = router(AppState::new(directory));

    tracing::info!("map store listening on http://{}/map/state", config.addr);
    let listener = tokio::net::TcpListener::bind(config.addr)
        .await
        .with_context(|| format!("binding {}", config.addr))?;
    axum::serve(listener, app).await?;
    Ok(())
}
