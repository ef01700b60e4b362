use policy::{create_force_seed_actor, PolicyConfig};
use qbittorrent::QBittorrentClient;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = PolicyConfig::from_env()?;

    tracing::info!("Starting qBit force-seed worker");
    tracing::info!(
        "url={} force_days={} poll_seconds={} categories={:?}",
        config.base_url,
        config.force_days,
        config.poll_interval.as_secs(),
        config.categories
    );
    if let Some(pattern) = &config.tracker_match {
        tracing::info!("tracker_match={}", pattern);
    }

    let client = QBittorrentClient::new(&config.base_url);
    let handle = create_force_seed_actor(client, config);

    tokio::signal::ctrl_c().await?;
    tracing::info!("Interrupted, shutting down");
    handle.shutdown().await;

    Ok(())
}
