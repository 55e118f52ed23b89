//! Summary command

use anyhow::Result;
use chrono::Local;

use super::output::Output;
use super::range;
use crate::domain::EffortStore;
use crate::render;

/// Prints the daily and cumulative summary for the requested range
pub fn run(
    output: &Output,
    store: &EffortStore,
    tasks: &[String],
    range_bounds: &[String],
) -> Result<()> {
    let today = Local::now().date_naive();
    let (start, end) = range::summary_range(range_bounds, today)?;
    output.verbose_ctx(
        "summary",
        &format!("Range {} to {}", start.date(), end.date()),
    );

    let subset = (!tasks.is_empty()).then(|| tasks.to_vec());
    let names: Vec<String> = match &subset {
        Some(names) => names.clone(),
        None => store.task_names().iter().map(|s| s.to_string()).collect(),
    };

    if output.is_json() {
        let daily: Vec<_> = store
            .efforts(&names, start, end, false)?
            .map(|(date, efforts)| {
                let total: f64 = efforts.values().sum();
                serde_json::json!({
                    "date": date.to_string(),
                    "efforts": efforts,
                    "total": total,
                })
            })
            .collect();
        let cumulative: Vec<_> = store
            .efforts(&names, start, end, true)?
            .map(|(date, efforts)| {
                let total: f64 = efforts.values().sum();
                serde_json::json!({
                    "date": date.to_string(),
                    "efforts": efforts,
                    "total": total,
                })
            })
            .collect();
        let totals = store.summary_totals(subset.as_deref(), end)?;

        output.data(&serde_json::json!({
            "daily": daily,
            "cumulative": cumulative,
            "totals": totals,
        }));
    } else {
        let report = render::render_report(store, subset.as_deref(), start, end)?;
        output.text(&report);
    }

    Ok(())
}
