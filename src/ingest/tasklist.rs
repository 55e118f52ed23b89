//! Task list parser
//!
//! A task list is a sequence of blocks. Each block starts with a header
//! whose first word is `DATE` (case-insensitive) followed by task names;
//! every following non-blank line is a date and one effort value per header
//! column:
//!
//! ```text
//! DATE        GYM   WORK  MUSIC
//! 2014-02-01  2     0     2.5
//! 2014-02-03  1     5.5   1
//!
//! DATE        WORK  GOLF
//! 2014-02-06  5     2
//! ```
//!
//! Token spacing is free-form, so blocks may be aligned into columns.

use std::fs;
use std::path::Path;

use anyhow::{bail, Context, Result};

use super::IngestOptions;
use crate::domain::EffortStore;

/// Reads effort data from a task list file
pub fn ingest_file(store: &mut EffortStore, path: &Path, opts: &IngestOptions) -> Result<()> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read task list: {}", path.display()))?;

    let mut task_names: Option<Vec<&str>> = None;

    for (index, line) in content.lines().enumerate() {
        let line_num = index + 1;
        let mut tokens = line.split_whitespace();

        let Some(first) = tokens.next() else {
            continue; // blank line
        };

        if first.eq_ignore_ascii_case("date") {
            task_names = Some(tokens.collect());
            continue;
        }

        let Some(names) = &task_names else {
            bail!(
                "{}:{}: task entry before any DATE header",
                path.display(),
                line_num
            );
        };

        let date = super::parse_stamp(first, &opts.datefmt).with_context(|| {
            format!(
                "{}:{}: invalid date {:?} for format {:?}",
                path.display(),
                line_num,
                first,
                opts.datefmt
            )
        })?;
        if opts.out_of_range(date) {
            continue;
        }

        for (name, value) in names.iter().zip(tokens) {
            let effort: f64 = value.parse().with_context(|| {
                format!(
                    "{}:{}: invalid effort value {:?} for task {}",
                    path.display(),
                    line_num,
                    value,
                    name
                )
            })?;
            store.add_effort(*name, date, effort);
        }
    }

    Ok(())
}
