use serde::{Deserialize, Serialize};

/// One raw channel message as seen by the scraper. Produced by the message
/// source; read-only from this point on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChannelMessage {
    pub text: String,
    pub author: String,
}

/// A message that parsed as `"quote" - speaker`. Serde renames match the
/// fixed column headers of the quotes store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuoteRecord {
    #[serde(rename = "Quote")]
    pub quote: String,
    #[serde(rename = "Speaker")]
    pub speaker: String,
    #[serde(rename = "Quoted By")]
    pub quoted_by: String,
}

/// Any message the classifier could not parse, stored verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlainRecord {
    #[serde(rename = "Message")]
    pub message: String,
    #[serde(rename = "Sent By")]
    pub sent_by: String,
}
