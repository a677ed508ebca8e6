use anyhow::Result;
use shopfront::config::AppConfig;
use shopfront::logging;
use shopfront::server::ServerBuilder;

/// Config path: first argument, then `SHOPFRONT_CONFIG`, else built-in defaults
fn load_config() -> Result<AppConfig> {
    let path = std::env::args()
        .nth(1)
        .or_else(|| std::env::var("SHOPFRONT_CONFIG").ok());

    match path {
        Some(path) => AppConfig::from_yaml_file(path),
        None => Ok(AppConfig::default()),
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let config = load_config()?;
    logging::init(&config.logging)?;

    tracing::info!(
        bind = %config.server.bind,
        cache = config.cache.enabled,
        status_filter = ?config.status_filter,
        "starting shopfront"
    );

    ServerBuilder::new(config).register_catalog().serve().await
}
