//! Tally - effort tracking summaries and charts for task logs
//!
//! Tally reads human-authored effort logs (a directory of daily task files
//! or a tabular task list), aggregates effort per task and per calendar day,
//! and renders daily/cumulative summaries and a time-series chart.

pub mod cli;
pub mod domain;
pub mod ingest;
pub mod render;
pub mod storage;

pub use domain::{EffortError, EffortSeries, EffortStore, GraphSeries, SummaryTotals, Task};
