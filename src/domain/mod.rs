//! Domain models for Tally
//!
//! Contains the effort aggregation core without any I/O concerns.

mod effort;
mod series;

pub use effort::{EffortError, EffortStore, Task};
pub use series::{EffortSeries, GraphSeries, SummaryTotals, Totals};
