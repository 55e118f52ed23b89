//! # Command-Line Interface
//!
//! User-facing commands and output formatting.
//!
//! | Command | Purpose |
//! |---------|---------|
//! | `summary` | Daily and cumulative effort tables with totals |
//! | `graph` | Cumulative effort chart for a date window |
//! | `report` | Summary followed by the chart, one run |
//!
//! All commands read effort data from a positional PATH: a directory of
//! daily task files or a single task list file.
//!
//! ## Output Formats
//!
//! All commands support `--format`:
//! - `text` (default) - Human-readable output
//! - `json` - Machine-parseable JSON
//!
//! ## Entry Point
//!
//! Call [`run()`] to parse arguments and execute the appropriate command.

mod app;
mod graph_cmd;
mod output;
mod range;
mod summary_cmd;

pub use app::{run, Cli, Commands};
pub use output::{Output, OutputFormat};
