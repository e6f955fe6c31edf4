use std::collections::VecDeque;
use std::fs;
use std::path::Path;

use async_trait::async_trait;

use quotetally::aggregate::aggregate;
use quotetally::errors::ScrapeError;
use quotetally::records::ChannelMessage;
use quotetally::scrape::{MessageSource, ScrapeSummary, scrape_channel};
use quotetally::store::RecordSink;

/// In-memory message source standing in for a channel history.
struct FakeHistory {
    pages: VecDeque<Vec<ChannelMessage>>,
}

impl FakeHistory {
    fn new(pages: Vec<Vec<(&str, &str)>>) -> Self {
        Self {
            pages: pages
                .into_iter()
                .map(|page| {
                    page.into_iter()
                        .map(|(text, author)| ChannelMessage {
                            text: text.to_string(),
                            author: author.to_string(),
                        })
                        .collect()
                })
                .collect(),
        }
    }
}

#[async_trait]
impl MessageSource for FakeHistory {
    async fn next_page(&mut self) -> Result<Vec<ChannelMessage>, ScrapeError> {
        Ok(self.pages.pop_front().unwrap_or_default())
    }
}

fn scenario_pages() -> Vec<Vec<(&'static str, &'static str)>> {
    vec![
        vec![
            ("\"Hello there\" - Alice", "author1"),
            ("just chatting", "author2"),
        ],
        vec![("\"Bye\" -bob", "author3")],
    ]
}

async fn run_scrape(dir: &Path) -> ScrapeSummary {
    let mut sink = RecordSink::create(&dir.join("quotes.csv"), &dir.join("not_quotes.csv"))
        .unwrap();
    let mut history = FakeHistory::new(scenario_pages());
    let summary = scrape_channel(&mut history, &mut sink).await.unwrap();
    sink.finish().unwrap();
    summary
}

#[tokio::test]
async fn test_end_to_end_scenario() {
    let dir = tempfile::tempdir().unwrap();
    let summary = run_scrape(dir.path()).await;

    assert_eq!(summary, ScrapeSummary { quotes: 2, plain: 1 });

    // Rows land in source order within each store.
    assert_eq!(
        fs::read_to_string(dir.path().join("quotes.csv")).unwrap(),
        "Quote,Speaker,Quoted By\n\
         Hello there,Alice,author1\n\
         Bye,Bob,author3\n"
    );
    assert_eq!(
        fs::read_to_string(dir.path().join("not_quotes.csv")).unwrap(),
        "Message,Sent By\njust chatting,author2\n"
    );

    let report = aggregate(
        &dir.path().join("quotes.csv"),
        &dir.path().join("not_quotes.csv"),
        &dir.path().join("images"),
    )
    .unwrap();
    assert_eq!(report.total(), 3);
    assert_eq!(report.quote_count, 2);
    assert_eq!(report.plain_count, 1);
}

#[tokio::test]
async fn test_rerun_is_idempotent() {
    let dir = tempfile::tempdir().unwrap();

    run_scrape(dir.path()).await;
    let quotes_first = fs::read(dir.path().join("quotes.csv")).unwrap();
    let plain_first = fs::read(dir.path().join("not_quotes.csv")).unwrap();

    run_scrape(dir.path()).await;
    let quotes_second = fs::read(dir.path().join("quotes.csv")).unwrap();
    let plain_second = fs::read(dir.path().join("not_quotes.csv")).unwrap();

    // Store contents are byte-identical across runs on the same history.
    assert_eq!(quotes_first, quotes_second);
    assert_eq!(plain_first, plain_second);
}

#[tokio::test]
async fn test_unparseable_messages_route_to_plain_store() {
    let dir = tempfile::tempdir().unwrap();
    let mut sink = RecordSink::create(&dir.path().join("quotes.csv"), &dir.path().join("not_quotes.csv"))
        .unwrap();

    // One of each failure class: no quote, degenerate span, no separator,
    // empty speaker. All four must land in the plain store.
    let mut history = FakeHistory::new(vec![vec![
        ("no quotes here", "a1"),
        ("a single \" mark - bob", "a2"),
        ("\"valid quote\"", "a3"),
        ("\"valid quote\" -", "a4"),
    ]]);
    let summary = scrape_channel(&mut history, &mut sink).await.unwrap();
    sink.finish().unwrap();

    assert_eq!(summary, ScrapeSummary { quotes: 0, plain: 4 });
    let plain = fs::read_to_string(dir.path().join("not_quotes.csv")).unwrap();
    assert_eq!(plain.lines().count(), 5); // header + 4 rows
}

#[tokio::test]
async fn test_exhausted_source_stops_cleanly() {
    let dir = tempfile::tempdir().unwrap();
    let mut sink = RecordSink::create(&dir.path().join("quotes.csv"), &dir.path().join("not_quotes.csv"))
        .unwrap();

    let mut history = FakeHistory::new(Vec::new());
    let summary = scrape_channel(&mut history, &mut sink).await.unwrap();
    sink.finish().unwrap();

    assert_eq!(summary, ScrapeSummary::default());
}
