//! # Storage Layer
//!
//! User configuration for Tally. The effort data itself is never persisted
//! by this crate; it is re-read from the task logs on every run.
//!
//! | Data | Format | Location |
//! |------|--------|----------|
//! | Config | TOML | `~/.config/tally/config.toml` |

mod config;

pub use config::{Config, COLOR_BANK};
