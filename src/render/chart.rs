//! Terminal effort chart
//!
//! Plots a [`GraphSeries`] as a text grid: one column per day across the
//! display window, one marker per task. The y axis is scaled to the next
//! multiple of 5 above the largest plotted value, the x axis carries
//! day-of-month ticks and month names, and the legend maps markers to task
//! names. Markers can be colorized with ANSI escapes from a task color map.

use std::collections::BTreeMap;
use std::fmt::Write as _;

use chrono::{Datelike, Days, NaiveDate};

use crate::domain::GraphSeries;

/// Marker characters assigned to tasks in order
const MARKERS: [char; 10] = ['o', 'x', '+', '*', '#', '%', '@', '&', '=', '~'];

/// Options controlling chart rendering
#[derive(Debug, Clone)]
pub struct ChartOptions {
    /// Number of grid rows between the axis and the top value
    pub height: usize,

    /// Task name to color name map; tasks without an entry stay uncolored
    pub colors: BTreeMap<String, String>,

    /// Emit ANSI color escapes
    pub color: bool,
}

impl Default for ChartOptions {
    fn default() -> Self {
        Self {
            height: 12,
            colors: BTreeMap::new(),
            color: false,
        }
    }
}

/// Renders the chart as a multi-line string
pub fn render_chart(graph: &GraphSeries, opts: &ChartOptions) -> String {
    if graph.dates.is_empty() {
        return "(no effort data in the graph window)\n".to_string();
    }

    let width = (graph.window_end - graph.window_start).num_days() as usize + 1;
    let height = opts.height.max(2);
    let top = axis_top(graph.max_value());

    // cell = (marker, plotting task index); later tasks overdraw earlier ones
    let mut grid: Vec<Vec<Option<(char, usize)>>> = vec![vec![None; width]; height];

    for (index, (_, values)) in graph.series.iter().enumerate() {
        let marker = MARKERS[index % MARKERS.len()];
        for (date, value) in graph.dates.iter().zip(values) {
            let col = (*date - graph.window_start).num_days() as usize;
            let row = ((value / top) * (height - 1) as f64).round() as usize;
            let row = height - 1 - row.min(height - 1);
            grid[row][col] = Some((marker, index));
        }
    }

    let labels = row_labels(top, height);
    let margin = labels.iter().map(String::len).max().unwrap_or(0);

    let mut out = String::new();
    let _ = writeln!(out, "{:>margin$}", "Effort");

    for (row, cells) in grid.iter().enumerate() {
        let _ = write!(out, "{:>margin$} |", labels[row]);
        for cell in cells {
            match cell {
                Some((marker, index)) => {
                    let task = &graph.series[*index].0;
                    out.push_str(&paint(*marker, opts.colors.get(task), opts.color));
                }
                None => out.push(' '),
            }
        }
        out.push('\n');
    }

    let _ = writeln!(out, "{:>margin$} +{}", "0.0", "-".repeat(width));
    out.push_str(&day_axis(graph.window_start, width, margin));
    out.push_str(&month_axis(graph.window_start, width, margin));

    out.push('\n');
    for (index, (task, _)) in graph.series.iter().enumerate() {
        let marker = MARKERS[index % MARKERS.len()];
        let _ = writeln!(
            out,
            "{:>margin$} {} {}",
            "",
            paint(marker, opts.colors.get(task), opts.color),
            task
        );
    }

    out
}

/// Smallest multiple of 5 strictly above the given value
fn axis_top(max_value: f64) -> f64 {
    max_value + 5.0 - max_value.rem_euclid(5.0)
}

/// Left-margin value labels: top, midpoint, blanks elsewhere
fn row_labels(top: f64, height: usize) -> Vec<String> {
    let mut labels = vec![String::new(); height];
    labels[0] = format!("{:.1}", top);
    let mid = height / 2;
    if mid > 0 {
        labels[mid] = format!("{:.1}", top * (height - 1 - mid) as f64 / (height - 1) as f64);
    }
    labels
}

/// Day-of-month tick row, one tick per week
fn day_axis(start: NaiveDate, width: usize, margin: usize) -> String {
    let mut line = format!("{:>margin$}  ", "");
    let mut col = 0;
    while col < width {
        let date = start
            .checked_add_days(Days::new(col as u64))
            .unwrap_or(start);
        let tick = format!("{:02}", date.day());
        line.push_str(&tick);
        // 7 columns between ticks, minus the 2 the tick itself used
        line.push_str(&" ".repeat(5));
        col += 7;
    }
    line.truncate(line.trim_end().len());
    line.push('\n');
    line
}

/// Month name row: a label under the window start and each first-of-month
fn month_axis(start: NaiveDate, width: usize, margin: usize) -> String {
    let mut line = format!("{:>margin$}  ", "");
    let mut pending = String::new();
    for col in 0..width {
        let date = start
            .checked_add_days(Days::new(col as u64))
            .unwrap_or(start);
        if col == 0 || date.day() == 1 {
            pending = format!("{}", date.format("%b"));
        }
        if pending.is_empty() {
            line.push(' ');
        } else {
            line.push(pending.remove(0));
        }
    }
    line.truncate(line.trim_end().len());
    line.push('\n');
    line
}

/// Wraps a marker in ANSI color escapes when enabled and the color is known
fn paint(marker: char, color: Option<&String>, enabled: bool) -> String {
    let code = color.and_then(|name| ansi_code(name));
    match (enabled, code) {
        (true, Some(code)) => format!("\x1b[{}m{}\x1b[0m", code, marker),
        _ => marker.to_string(),
    }
}

/// Maps a color name to an ANSI foreground code
fn ansi_code(name: &str) -> Option<u8> {
    let code = match name.to_ascii_lowercase().as_str() {
        "black" => 30,
        "red" | "maroon" => 31,
        "crimson" => 91,
        "green" => 32,
        "orange" | "brown" | "yellow" => 33,
        "blue" => 34,
        "magenta" | "purple" => 35,
        "deeppink" => 95,
        "cyan" => 36,
        "white" => 37,
        "gray" | "grey" => 90,
        _ => return None,
    };
    Some(code)
}
