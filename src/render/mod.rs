//! # Render Layer
//!
//! Turns series produced by the domain core into user-facing text: aligned
//! daily/cumulative summary tables and a terminal line chart. All render
//! functions return `String` so commands decide where the text goes.

mod chart;
mod summary;

pub use chart::{render_chart, ChartOptions};
pub use summary::{render_report, render_table};
