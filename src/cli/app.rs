//! Main CLI application structure

use std::path::PathBuf;

use anyhow::{bail, Result};
use clap::{Args, Parser, Subcommand};

use super::output::{Output, OutputFormat};
use super::{graph_cmd, summary_cmd};
use crate::domain::EffortStore;
use crate::ingest::{self, IngestOptions};

#[derive(Parser)]
#[command(name = "tally")]
#[command(author, version, about = "Aggregate task effort logs into summaries and charts")]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output format
    #[arg(long, short = 'f', global = true, default_value = "text")]
    pub format: OutputFormat,

    /// Enable verbose output for debugging
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Effort data source shared by all commands
#[derive(Args)]
pub struct SourceArgs {
    /// Path to a directory of task files or a task list file
    #[arg(default_value = ".")]
    pub path: PathBuf,

    /// Date format in task file names and task list entries
    #[arg(long, default_value = "%Y-%m-%d", value_name = "FORMAT")]
    pub datefmt: String,

    /// Tasks to include (default: all tasks)
    #[arg(long, short = 't', value_name = "TASK", num_args = 0..)]
    pub tasks: Vec<String>,

    /// Date range of data to read; '-' leaves a bound open
    #[arg(long, short = 'd', num_args = 2, value_names = ["START", "END"],
          default_values = ["-", "-"])]
    pub data: Vec<String>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Print daily and cumulative effort summaries
    Summary {
        #[command(flatten)]
        source: SourceArgs,

        /// Date range to summarize; '-' defaults to the last five days
        #[arg(long, short = 'r', num_args = 2, value_names = ["START", "END"],
              default_values = ["-", "-"])]
        range: Vec<String>,
    },

    /// Render a cumulative effort chart
    Graph {
        #[command(flatten)]
        source: SourceArgs,

        /// Date range to plot; '-' defaults to the current month
        #[arg(long, short = 'r', num_args = 2, value_names = ["START", "END"],
              default_values = ["-", "-"])]
        range: Vec<String>,

        /// Write the chart to a file instead of stdout
        #[arg(long, short = 'o', value_name = "FILE")]
        output: Option<PathBuf>,
    },

    /// Print the summary and render the chart in one run
    Report {
        #[command(flatten)]
        source: SourceArgs,

        /// Summary date range; '-' defaults to the last five days
        #[arg(long, num_args = 2, value_names = ["START", "END"],
              default_values = ["-", "-"])]
        summary: Vec<String>,

        /// Graph date range; '-' defaults to the current month
        #[arg(long, num_args = 2, value_names = ["START", "END"],
              default_values = ["-", "-"])]
        graph: Vec<String>,

        /// Write the chart to a file instead of stdout
        #[arg(long, short = 'o', value_name = "FILE")]
        output: Option<PathBuf>,
    },
}

/// Main entry point for the CLI
pub fn run() -> Result<()> {
    let cli = Cli::parse();
    let output = Output::new(cli.format, cli.verbose);

    output.verbose("Tally starting");

    match cli.command {
        Commands::Summary { source, range } => {
            let store = load_store(&source, &output)?;
            summary_cmd::run(&output, &store, &source.tasks, &range)?
        }

        Commands::Graph {
            source,
            range,
            output: chart_file,
        } => {
            let store = load_store(&source, &output)?;
            graph_cmd::run(&output, &store, &source.tasks, &range, chart_file.as_deref())?
        }

        Commands::Report {
            source,
            summary,
            graph,
            output: chart_file,
        } => {
            let store = load_store(&source, &output)?;
            summary_cmd::run(&output, &store, &source.tasks, &summary)?;
            graph_cmd::run(&output, &store, &source.tasks, &graph, chart_file.as_deref())?
        }
    }

    output.verbose("Command completed successfully");
    Ok(())
}

/// Reads effort data from the source path into a fresh store
fn load_store(source: &SourceArgs, output: &Output) -> Result<EffortStore> {
    let (start_date, end_date) = super::range::parse_bounds(&source.data)?;
    let opts = IngestOptions {
        start_date,
        end_date,
        datefmt: source.datefmt.clone(),
    };

    let mut store = EffortStore::new();
    if source.path.is_dir() {
        output.verbose_ctx(
            "ingest",
            &format!("Reading task directory: {}", source.path.display()),
        );
        ingest::ingest_directory(&mut store, &source.path, &opts)?;
    } else if source.path.is_file() {
        output.verbose_ctx(
            "ingest",
            &format!("Reading task list: {}", source.path.display()),
        );
        ingest::ingest_file(&mut store, &source.path, &opts)?;
    } else {
        bail!("No such file or directory: '{}'", source.path.display());
    }

    output.verbose_ctx(
        "ingest",
        &format!("Loaded {} task(s)", store.task_names().len()),
    );
    Ok(store)
}
