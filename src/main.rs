use url_alias::{config, logging, server};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let config = config::load_from_env()?;
    logging::init(&config)?;

    tracing::info!("Starting url-alias v{}", env!("CARGO_PKG_VERSION"));
    config.print_summary();

    server::run(config).await
}
