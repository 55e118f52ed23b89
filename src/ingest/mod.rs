//! # Ingestion Layer
//!
//! Parsers for the two human-authored effort log formats. Both reduce their
//! input to [`EffortStore::add_effort`](crate::domain::EffortStore::add_effort)
//! calls; the store never sees the text formats themselves.
//!
//! | Format | Shape | Parser |
//! |--------|-------|--------|
//! | Task directory | One file per day, `NAME: [xx] [x.]` entries | [`ingest_directory`] |
//! | Task list | `DATE ...` header blocks with tabular entries | [`ingest_file`] |

mod taskdir;
mod tasklist;

pub use taskdir::ingest_directory;
pub use tasklist::ingest_file;

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};

/// Options shared by both parsers
#[derive(Debug, Clone)]
pub struct IngestOptions {
    /// Entries dated before this are skipped
    pub start_date: Option<NaiveDateTime>,

    /// Entries dated after this are skipped
    pub end_date: Option<NaiveDateTime>,

    /// chrono format string for dates in file names and task list entries
    pub datefmt: String,
}

impl Default for IngestOptions {
    fn default() -> Self {
        Self {
            start_date: None,
            end_date: None,
            datefmt: "%Y-%m-%d".to_string(),
        }
    }
}

impl IngestOptions {
    /// Returns true if the date falls outside the configured range
    fn out_of_range(&self, date: NaiveDateTime) -> bool {
        self.start_date.is_some_and(|start| date < start)
            || self.end_date.is_some_and(|end| date > end)
    }
}

/// Parses a date string with the given format, defaulting to midnight when
/// the format carries no time fields
fn parse_stamp(text: &str, datefmt: &str) -> chrono::ParseResult<NaiveDateTime> {
    NaiveDateTime::parse_from_str(text, datefmt)
        .or_else(|_| NaiveDate::parse_from_str(text, datefmt).map(|d| d.and_time(NaiveTime::MIN)))
}
