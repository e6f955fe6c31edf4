//! The aggregation pass.
//!
//! Runs only after the scrape pass has flushed both stores: reads the CSV
//! files back in full, computes per-person frequency counts for the three
//! dimensions (Speaker, Quoted By, Sent By), renders each as a horizontal
//! bar chart, and returns everything in an [`AggregateReport`] for the
//! delivery step. Nothing numeric is persisted outside the chart images;
//! the counts are recomputed fresh on every run.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use crate::charts::render_barh;
use crate::config::{
    TIMES_QUOTED_IMAGE, TIMES_QUOTED_TITLE, TIMES_QUOTING_IMAGE, TIMES_QUOTING_TITLE, YAPS_IMAGE,
    YAPS_TITLE,
};
use crate::errors::ScrapeError;
use crate::records::{PlainRecord, QuoteRecord};

/// Aggregate results handed from the aggregation pass to delivery.
#[derive(Debug, Clone)]
pub struct AggregateReport {
    pub quote_count: usize,
    pub plain_count: usize,
    /// Times each person was quoted (Speaker column), ascending by count.
    pub times_quoted: Vec<(String, u64)>,
    /// Times each person quoted others (Quoted By column), ascending.
    pub times_quoting: Vec<(String, u64)>,
    /// Times each person sent an unclassifiable message (Sent By column),
    /// ascending.
    pub yap_counts: Vec<(String, u64)>,
    pub times_quoted_chart: PathBuf,
    pub times_quoting_chart: PathBuf,
    pub yaps_chart: PathBuf,
}

impl AggregateReport {
    #[must_use]
    pub fn total(&self) -> usize {
        self.quote_count + self.plain_count
    }
}

/// Count occurrences per name, sorted ascending by count so the largest bar
/// renders at the top of the chart. Ties sort by name to keep output
/// deterministic.
pub fn frequency<'a>(values: impl IntoIterator<Item = &'a str>) -> Vec<(String, u64)> {
    let mut counts: HashMap<&str, u64> = HashMap::new();
    for value in values {
        *counts.entry(value).or_insert(0) += 1;
    }

    let mut table: Vec<(String, u64)> = counts
        .into_iter()
        .map(|(name, count)| (name.to_string(), count))
        .collect();
    table.sort_by(|a, b| a.1.cmp(&b.1).then_with(|| a.0.cmp(&b.0)));
    table
}

/// Read both stores back, compute the three frequency tables, and render
/// the three charts under `images_dir` (created if absent, images
/// overwritten).
///
/// # Errors
///
/// Returns an error if either store cannot be read or a chart cannot be
/// rendered.
pub fn aggregate(
    quotes_path: &Path,
    plain_path: &Path,
    images_dir: &Path,
) -> Result<AggregateReport, ScrapeError> {
    fs::create_dir_all(images_dir)?;

    let mut quotes: Vec<QuoteRecord> = Vec::new();
    let mut reader = csv::Reader::from_path(quotes_path)?;
    for record in reader.deserialize() {
        quotes.push(record?);
    }

    let mut plain: Vec<PlainRecord> = Vec::new();
    let mut reader = csv::Reader::from_path(plain_path)?;
    for record in reader.deserialize() {
        plain.push(record?);
    }

    let times_quoted = frequency(quotes.iter().map(|r| r.speaker.as_str()));
    let times_quoting = frequency(quotes.iter().map(|r| r.quoted_by.as_str()));
    let yap_counts = frequency(plain.iter().map(|r| r.sent_by.as_str()));

    let times_quoted_chart = images_dir.join(TIMES_QUOTED_IMAGE);
    let times_quoting_chart = images_dir.join(TIMES_QUOTING_IMAGE);
    let yaps_chart = images_dir.join(YAPS_IMAGE);

    render_barh(&times_quoted_chart, TIMES_QUOTED_TITLE, &times_quoted)?;
    render_barh(&times_quoting_chart, TIMES_QUOTING_TITLE, &times_quoting)?;
    render_barh(&yaps_chart, YAPS_TITLE, &yap_counts)?;

    Ok(AggregateReport {
        quote_count: quotes.len(),
        plain_count: plain.len(),
        times_quoted,
        times_quoting,
        yap_counts,
        times_quoted_chart,
        times_quoting_chart,
        yaps_chart,
    })
}

/// Print the human-readable report to stdout.
pub fn print_summary(report: &AggregateReport) {
    println!();
    println!("*** Analysis of The Quotes ***");
    println!("Total number of messages scraped: {}", report.total());
    println!("Total number of good quotes: {}", report.quote_count);
    println!("Total number of invalid quotes: {}", report.plain_count);
    println!();

    print_table("Number of times each person was quoted:", &report.times_quoted);
    print_table(
        "Number of times each person quoted others:",
        &report.times_quoting,
    );
    print_table("Number of times each person yapped:", &report.yap_counts);

    println!("Check output for visual diagrams.");
}

fn print_table(heading: &str, table: &[(String, u64)]) {
    println!("{}", heading);
    // Largest count first, matching value_counts-style output.
    for (name, count) in table.iter().rev() {
        println!("{:<24} {}", name, count);
    }
    println!();
}
