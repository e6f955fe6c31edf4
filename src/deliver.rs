//! Delivery: post the rendered charts back to the source channel.

use tracing::info;

use crate::aggregate::AggregateReport;
use crate::discord::DiscordClient;
use crate::errors::ScrapeError;

/// Send the three chart images as standalone messages, in fixed order:
/// quoted-person chart, quoter chart, yap-count chart. The first failed
/// send aborts delivery; there is no retry beyond the client's own
/// per-call backoff and no partial-failure recovery.
///
/// # Errors
///
/// Returns an error if any image cannot be read or posted.
pub async fn send_charts(
    client: &DiscordClient,
    channel_id: u64,
    report: &AggregateReport,
) -> Result<(), ScrapeError> {
    for path in [
        &report.times_quoted_chart,
        &report.times_quoting_chart,
        &report.yaps_chart,
    ] {
        client.send_file(channel_id, path).await?;
    }

    info!("Done sending chart messages.");
    Ok(())
}
