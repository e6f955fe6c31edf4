//! quotetally - scrape a Discord channel's quote history and chart who says what.
//!
//! The bot assumes channel messages in the form `"something that was said" - name`.
//! Each message in the channel's history is classified as either a
//! well-formed quotation or an unstructured message, both classes are
//! persisted to CSV, per-person counts are rendered as bar charts, and the
//! charts are posted back to the channel.
//!
//! # Pipeline
//!
//! The run is strictly sequential, with a hard ordering between passes:
//!
//! 1. **Scrape**: drain the channel history oldest-first, classify every
//!    message, and append it to the quotes or not-quotes CSV store.
//! 2. **Aggregate**: read both stores back, compute per-person frequency
//!    counts, render them as horizontal bar charts, print a text summary.
//! 3. **Deliver**: post the three chart images to the channel.
//!
//! A failed run restarts from scratch: store initialization always rewrites
//! the headers and discards prior content.

pub mod aggregate;
pub mod charts;
pub mod classifier;
pub mod config;
pub mod deliver;
pub mod discord;
pub mod errors;
pub mod records;
pub mod scrape;
pub mod store;

/// Configure structured logging to stderr with an environment filter.
///
/// Defaults to `info` when `RUST_LOG` is unset. Call once at startup.
pub fn setup_logging() {
    use tracing_subscriber::prelude::*;

    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    let fmt_layer = tracing_subscriber::fmt::layer().with_target(true);

    tracing_subscriber::registry().with(filter).with(fmt_layer).init();
}
