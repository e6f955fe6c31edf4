//! The scrape pass: drain the channel history and route every message.

use async_trait::async_trait;
use tracing::{debug, info, warn};

use crate::classifier::{self, Unclassifiable};
use crate::errors::ScrapeError;
use crate::records::{ChannelMessage, PlainRecord, QuoteRecord};
use crate::store::RecordSink;

/// A paged, oldest-first message source. An empty page means the source is
/// exhausted.
#[async_trait]
pub trait MessageSource {
    async fn next_page(&mut self) -> Result<Vec<ChannelMessage>, ScrapeError>;
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScrapeSummary {
    pub quotes: u64,
    pub plain: u64,
}

/// Consume the source to exhaustion, classifying every message and
/// appending it to exactly one store. No message is skipped; a message that
/// fails to classify is recorded verbatim in the plain store.
pub async fn scrape_channel<S: MessageSource + Send>(
    source: &mut S,
    sink: &mut RecordSink,
) -> Result<ScrapeSummary, ScrapeError> {
    let mut summary = ScrapeSummary::default();

    loop {
        let page = source.next_page().await?;
        if page.is_empty() {
            break;
        }

        for message in page {
            match classifier::classify(&message.text) {
                Ok(parsed) => {
                    sink.append_quote(&QuoteRecord {
                        quote: parsed.quote,
                        speaker: parsed.speaker,
                        quoted_by: message.author,
                    })?;
                    summary.quotes += 1;
                }
                Err(reason) => {
                    if reason == Unclassifiable::InvalidQuoteSpan {
                        warn!("Quote was invalid: {}", reason);
                    } else {
                        debug!("Message not classified: {}", reason);
                    }
                    sink.append_plain(&PlainRecord {
                        message: message.text,
                        sent_by: message.author,
                    })?;
                    summary.plain += 1;
                }
            }
        }
    }

    info!(
        "Finished scraping channel: {} quotes, {} other messages",
        summary.quotes, summary.plain
    );

    Ok(summary)
}
