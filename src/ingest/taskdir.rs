//! Task directory parser
//!
//! A task directory holds one file per day, named `yyyy-mm-dd.*` (the date
//! format is configurable). Inside each file, lines like
//!
//! ```text
//! WORK: [xxxx] [xx]
//! MUSIC: [x.] [..]
//! ```
//!
//! are task entries: each `x` counts as half an hour of effort, dots and
//! brackets are visual filler. Any other line is treated as a comment.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use once_cell::sync::Lazy;
use regex::Regex;

use super::IngestOptions;
use crate::domain::EffortStore;

static TASK_ENTRY_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\s*(\w+):((?:\s+\[(?:x|\.)+\])+)\s*$").expect("valid task entry regex"));

/// Reads effort data from every conforming task file under `path`
///
/// Files whose extension-less name does not parse as a date with the
/// configured format are ignored, as are files dated outside the option
/// range. Subdirectories are walked recursively.
pub fn ingest_directory(store: &mut EffortStore, path: &Path, opts: &IngestOptions) -> Result<()> {
    let mut pending: Vec<PathBuf> = vec![path.to_path_buf()];

    while let Some(dir) = pending.pop() {
        let entries = fs::read_dir(&dir)
            .with_context(|| format!("Failed to read directory: {}", dir.display()))?;

        for entry in entries {
            let entry = entry.context("Failed to read directory entry")?;
            let path = entry.path();

            if path.is_dir() {
                pending.push(path);
                continue;
            }

            let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
                continue;
            };
            // The date is everything before the first dot
            let stem = name.split('.').next().unwrap_or(name);
            let Ok(date) = super::parse_stamp(stem, &opts.datefmt) else {
                continue;
            };
            if opts.out_of_range(date) {
                continue;
            }

            let content = fs::read_to_string(&path)
                .with_context(|| format!("Failed to read task file: {}", path.display()))?;

            for line in content.lines() {
                let Some(caps) = TASK_ENTRY_RE.captures(line) else {
                    continue;
                };
                let task_name = &caps[1];
                let effort = caps[2].matches('x').count() as f64 / 2.0;
                store.add_effort(task_name, date, effort);
            }
        }
    }

    Ok(())
}
