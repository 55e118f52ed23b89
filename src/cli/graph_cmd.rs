//! Graph command

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use chrono::Local;

use super::output::Output;
use super::range;
use crate::domain::EffortStore;
use crate::render::{render_chart, ChartOptions};
use crate::storage::Config;

/// Renders the cumulative effort chart for the requested window
pub fn run(
    output: &Output,
    store: &EffortStore,
    tasks: &[String],
    range_bounds: &[String],
    chart_file: Option<&Path>,
) -> Result<()> {
    let today = Local::now().date_naive();
    let (start, end) = range::graph_range(range_bounds, today)?;
    output.verbose_ctx(
        "graph",
        &format!("Window {} to {}", start.date(), end.date()),
    );

    let names: Vec<String> = if tasks.is_empty() {
        store.task_names().iter().map(|s| s.to_string()).collect()
    } else {
        tasks.to_vec()
    };

    let graph = store.graph_series(&names, start, end, true)?;

    let mut config = Config::load()?;
    config.assign_colors(&names);

    if output.is_json() {
        let series: Vec<_> = graph
            .series
            .iter()
            .map(|(task, values)| {
                serde_json::json!({
                    "task": task,
                    "values": values,
                    "color": config.colors.get(task),
                })
            })
            .collect();
        output.data(&serde_json::json!({
            "window_start": graph.window_start.to_string(),
            "window_end": graph.window_end.to_string(),
            "dates": graph.dates.iter().map(|d| d.to_string()).collect::<Vec<_>>(),
            "series": series,
        }));
        return Ok(());
    }

    let opts = ChartOptions {
        colors: config.colors,
        color: chart_file.is_none(),
        ..Default::default()
    };
    let chart = render_chart(&graph, &opts);

    match chart_file {
        Some(path) => {
            fs::write(path, &chart)
                .with_context(|| format!("Failed to write chart: {}", path.display()))?;
            output.success(&format!("Wrote chart to {}", path.display()));
        }
        None => output.text(&chart),
    }

    Ok(())
}
