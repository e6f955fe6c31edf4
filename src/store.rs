//! The two append-only tabular stores.
//!
//! Each run starts both CSV files from scratch: the files are truncated and
//! a fixed header row is written before any record lands. Every classified
//! message appends exactly one row to exactly one store. Rows are buffered
//! by the CSV writers and flushed in [`RecordSink::finish`]; the resulting
//! bytes are identical to writing row by row.

use std::fs::{self, File};
use std::path::Path;

use csv::{Writer, WriterBuilder};

use crate::errors::ScrapeError;
use crate::records::{PlainRecord, QuoteRecord};

pub const QUOTES_HEADER: [&str; 3] = ["Quote", "Speaker", "Quoted By"];
pub const NOT_QUOTES_HEADER: [&str; 2] = ["Message", "Sent By"];

pub struct RecordSink {
    quotes: Writer<File>,
    plain: Writer<File>,
}

impl RecordSink {
    /// Truncate both store files and write their header rows.
    ///
    /// Parent directories are created if absent. Any content from a prior
    /// run is discarded.
    pub fn create(quotes_path: &Path, plain_path: &Path) -> Result<Self, ScrapeError> {
        for path in [quotes_path, plain_path] {
            if let Some(dir) = path.parent() {
                fs::create_dir_all(dir)?;
            }
        }

        // Headers are written explicitly so they exist even for a run that
        // appends zero records; serialize() must not emit its own.
        let mut quotes = WriterBuilder::new()
            .has_headers(false)
            .from_path(quotes_path)?;
        quotes.write_record(QUOTES_HEADER)?;

        let mut plain = WriterBuilder::new()
            .has_headers(false)
            .from_path(plain_path)?;
        plain.write_record(NOT_QUOTES_HEADER)?;

        Ok(Self { quotes, plain })
    }

    pub fn append_quote(&mut self, record: &QuoteRecord) -> Result<(), ScrapeError> {
        self.quotes.serialize(record)?;
        Ok(())
    }

    pub fn append_plain(&mut self, record: &PlainRecord) -> Result<(), ScrapeError> {
        self.plain.serialize(record)?;
        Ok(())
    }

    /// Flush both stores to durable storage. Must run before the
    /// aggregation pass reads the files back.
    pub fn finish(mut self) -> Result<(), ScrapeError> {
        self.quotes.flush()?;
        self.plain.flush()?;
        Ok(())
    }
}
