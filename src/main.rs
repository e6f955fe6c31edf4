use std::path::Path;

use anyhow::Context;
use tracing::info;

use quotetally::aggregate;
use quotetally::config::{AppConfig, CHANNEL_ID, IMAGES_DIR, NOT_QUOTES_FILE, QUOTES_FILE};
use quotetally::deliver;
use quotetally::discord::DiscordClient;
use quotetally::scrape;
use quotetally::store::RecordSink;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    quotetally::setup_logging();

    let config = AppConfig::from_env()
        .map_err(quotetally::errors::ScrapeError::ConfigError)
        .context("failed to load configuration")?;

    let client = DiscordClient::new(&config.discord_token);

    let user_name = client.current_user_name().await?;
    info!("{} has connected to Discord!", user_name);

    let channel_name = client.channel_name(CHANNEL_ID).await?;
    info!("Channel name: {}", channel_name);
    info!("Begin scraping channel with ID: {}", CHANNEL_ID);

    let mut sink = RecordSink::create(Path::new(QUOTES_FILE), Path::new(NOT_QUOTES_FILE))?;
    let mut history = client.channel_history(CHANNEL_ID);
    scrape::scrape_channel(&mut history, &mut sink).await?;
    sink.finish()?;

    let report = aggregate::aggregate(
        Path::new(QUOTES_FILE),
        Path::new(NOT_QUOTES_FILE),
        Path::new(IMAGES_DIR),
    )?;
    aggregate::print_summary(&report);

    deliver::send_charts(&client, CHANNEL_ID, &report).await?;

    Ok(())
}
