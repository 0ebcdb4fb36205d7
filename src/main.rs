mod catalog;
mod config;
mod dashboard;
mod intake;
mod materials;
mod network;
mod page;
mod protocol;
mod selector;

use tracing::info;
use tracing_subscriber::EnvFilter;

use config::ServerConfig;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = ServerConfig::from_env();
    info!("Material advisor server starting: {:?}", config);

    network::http_api::start(config).await;
}
