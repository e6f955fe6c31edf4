use std::env;

/// Channel whose full history is scraped and which receives the charts.
pub const CHANNEL_ID: u64 = 1_317_005_831_870_611_528;

pub const OUTPUT_DIR: &str = "results";
pub const QUOTES_FILE: &str = "results/quotes.csv";
pub const NOT_QUOTES_FILE: &str = "results/not_quotes.csv";
pub const IMAGES_DIR: &str = "results/images";

pub const TIMES_QUOTED_IMAGE: &str = "times_person_was_quoted.png";
pub const TIMES_QUOTING_IMAGE: &str = "times_people_quoted_others.png";
pub const YAPS_IMAGE: &str = "yaps_per_person.png";

pub const TIMES_QUOTED_TITLE: &str = "Times people were quoted";
pub const TIMES_QUOTING_TITLE: &str = "Times people quoted others";
pub const YAPS_TITLE: &str = "Times people YAPPED";

/// Discord's maximum page size for channel history requests.
pub const HISTORY_PAGE_SIZE: u8 = 100;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub discord_token: String,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, String> {
        Ok(Self {
            discord_token: env::var("DISCORD_TOKEN")
                .map_err(|e| format!("DISCORD_TOKEN: {}", e))?,
        })
    }
}
