//! Textual effort summaries
//!
//! Renders the day-by-day series as an aligned table: one column per task,
//! one row per day, each row ending in its total. The full report prints the
//! daily table, the cumulative table and a trailing totals block.

use std::fmt::Write as _;

use chrono::{NaiveDateTime, NaiveTime};

use crate::domain::{EffortError, EffortStore};

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Width of a formatted effort cell; matches `{:7.1}`
const EFFORT_WIDTH: usize = 7;

/// Renders one summary table for the given tasks and range
///
/// The value column width is the larger of the formatted-effort width and
/// the longest task name, so headers and values stay aligned.
pub fn render_table(
    store: &EffortStore,
    task_names: &[String],
    start: NaiveDateTime,
    end: NaiveDateTime,
    cumulative: bool,
) -> Result<String, EffortError> {
    let date_len = start.date().format(DATE_FORMAT).to_string().len();
    let name_len = task_names.iter().map(|n| n.len()).max().unwrap_or(0);
    let (effort_pad, column) = if EFFORT_WIDTH < name_len {
        (" ".repeat(name_len - EFFORT_WIDTH), name_len)
    } else {
        (String::new(), EFFORT_WIDTH)
    };

    let mut out = String::new();

    let header = task_names
        .iter()
        .map(|name| format!("{:>column$}", name))
        .collect::<Vec<_>>()
        .join("   ");
    let _ = writeln!(out, "{}  {}", " ".repeat(date_len), header);

    for (date, efforts) in store.efforts(task_names, start, end, cumulative)? {
        let cells = task_names
            .iter()
            .map(|name| {
                let value = efforts.get(name).copied().unwrap_or(0.0);
                format!("{}{:>width$.1}", effort_pad, value, width = EFFORT_WIDTH)
            })
            .collect::<Vec<_>>()
            .join(" + ");
        let total: f64 = efforts.values().sum();
        let _ = writeln!(
            out,
            "{}: {} = {:>width$.1}",
            date.format(DATE_FORMAT),
            cells,
            total,
            width = EFFORT_WIDTH
        );
    }

    Ok(out)
}

/// Renders the full summary report: daily table, cumulative table, totals
///
/// The table range starts no earlier than the first recorded day. The
/// trailing block reports total effort and per-day average over the
/// requested subset (when one was given) and over all tasks, with the day
/// count spanning the first recorded day through `end`.
pub fn render_report(
    store: &EffortStore,
    requested: Option<&[String]>,
    start: NaiveDateTime,
    end: NaiveDateTime,
) -> Result<String, EffortError> {
    let min_date = store.min_date().ok_or(EffortError::NoData)?;
    let names: Vec<String> = match requested {
        Some(names) => names.to_vec(),
        None => store.task_names().iter().map(|s| s.to_string()).collect(),
    };
    let start = start.max(min_date.and_time(NaiveTime::MIN));

    let mut out = String::new();
    out.push_str("[DAILY]\n");
    out.push_str(&render_table(store, &names, start, end, false)?);
    out.push_str("\n[CUMULATIVE]\n");
    out.push_str(&render_table(store, &names, start, end, true)?);
    out.push('\n');

    let totals = store.summary_totals(requested, end)?;
    if let Some(subset) = totals.subset {
        let _ = writeln!(
            out,
            "TASKS: {:.1} hours in {} days ({:.1} h/d)",
            subset.effort, totals.day_count, subset.per_day
        );
    }
    let _ = writeln!(
        out,
        "TOTAL: {:.1} hours in {} days ({:.1} h/d)",
        totals.overall.effort, totals.day_count, totals.overall.per_day
    );

    Ok(out)
}
