//! Discord API client.
//!
//! HTTP-only: the pipeline is a single sequential run, so there is no
//! gateway connection and no event loop; history pages and attachment
//! posts are plain REST calls with retry.

use std::path::Path;

use async_trait::async_trait;
use serenity::builder::{CreateAttachment, CreateMessage, GetMessages};
use serenity::http::Http;
use serenity::model::channel::Channel;
use serenity::model::id::{ChannelId, MessageId};
use tokio_retry::strategy::jitter;
use tokio_retry::{Retry, strategy::ExponentialBackoff};

use crate::config::HISTORY_PAGE_SIZE;
use crate::errors::ScrapeError;
use crate::records::ChannelMessage;
use crate::scrape::MessageSource;

pub struct DiscordClient {
    http: Http,
}

impl DiscordClient {
    #[must_use]
    pub fn new(token: &str) -> Self {
        Self {
            http: Http::new(token),
        }
    }

    // Helper function to wrap API calls with retry logic for rate limits
    // and transient server errors.
    async fn with_retry<F, Fut, T>(&self, operation: F) -> Result<T, ScrapeError>
    where
        F: FnMut() -> Fut + Send,
        Fut: std::future::Future<Output = Result<T, ScrapeError>> + Send,
        T: Send,
    {
        let strategy = ExponentialBackoff::from_millis(100).map(jitter).take(5);

        Retry::spawn(strategy, operation).await
    }

    /// Name of the bot account the token belongs to.
    ///
    /// # Errors
    ///
    /// Returns an error if the Discord API call fails.
    pub async fn current_user_name(&self) -> Result<String, ScrapeError> {
        self.with_retry(|| async move {
            let user = self.http.get_current_user().await?;
            Ok(user.name.clone())
        })
        .await
    }

    /// Display name of a channel, falling back to its ID for non-guild
    /// channels.
    ///
    /// # Errors
    ///
    /// Returns an error if the Discord API call fails.
    pub async fn channel_name(&self, channel_id: u64) -> Result<String, ScrapeError> {
        self.with_retry(|| async move {
            let channel = self.http.get_channel(ChannelId::new(channel_id)).await?;
            let name = match channel {
                Channel::Guild(guild_channel) => guild_channel.name.clone(),
                _ => channel_id.to_string(),
            };
            Ok(name)
        })
        .await
    }

    /// An oldest-first view over the channel's entire message history.
    #[must_use]
    pub fn channel_history(&self, channel_id: u64) -> ChannelHistory<'_> {
        ChannelHistory {
            client: self,
            channel: ChannelId::new(channel_id),
            // Snowflake IDs start in 2015, so 1 predates every real message.
            cursor: MessageId::new(1),
            exhausted: false,
        }
    }

    async fn fetch_after(
        &self,
        channel: ChannelId,
        cursor: MessageId,
    ) -> Result<Vec<serenity::model::channel::Message>, ScrapeError> {
        self.with_retry(|| async move {
            let builder = GetMessages::new().after(cursor).limit(HISTORY_PAGE_SIZE);
            let batch = channel.messages(&self.http, builder).await?;
            Ok(batch)
        })
        .await
    }

    /// Post a single file as a standalone attachment message.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or the send fails.
    pub async fn send_file(&self, channel_id: u64, path: &Path) -> Result<(), ScrapeError> {
        self.with_retry(|| async move {
            let attachment = CreateAttachment::path(path).await?;
            ChannelId::new(channel_id)
                .send_message(&self.http, CreateMessage::new().add_file(attachment))
                .await?;
            Ok(())
        })
        .await
    }
}

/// Cursor-paged history source. Discord returns each page newest-first, so
/// every page is reversed into chronological order before it is handed to
/// the scrape driver.
pub struct ChannelHistory<'a> {
    client: &'a DiscordClient,
    channel: ChannelId,
    cursor: MessageId,
    exhausted: bool,
}

#[async_trait]
impl MessageSource for ChannelHistory<'_> {
    async fn next_page(&mut self) -> Result<Vec<ChannelMessage>, ScrapeError> {
        if self.exhausted {
            return Ok(Vec::new());
        }

        let mut batch = self.client.fetch_after(self.channel, self.cursor).await?;
        if batch.is_empty() {
            self.exhausted = true;
            return Ok(Vec::new());
        }

        batch.reverse();
        if let Some(newest) = batch.last() {
            self.cursor = newest.id;
        }

        Ok(batch
            .into_iter()
            .map(|message| ChannelMessage {
                text: message.content,
                author: message.author.name,
            })
            .collect())
    }
}
