//!
//! The benchmark comparator arguments.
//!

use std::path::PathBuf;

use clap::Parser;
use clap::Subcommand;

///
/// The benchmark comparator arguments.
///
#[derive(Debug, Parser)]
#[command(about, long_about = None)]
pub struct Arguments {
    /// The action to perform.
    #[command(subcommand)]
    pub command: Command,
}

///
/// The benchmark comparator action.
///
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Prints a saved run, or compares it against a base run.
    Show {
        /// The saved run in JSON format.
        file: PathBuf,

        /// The base run to compare against.
        #[arg(long)]
        compare: Option<PathBuf>,

        /// Do not report base results that are absent in the new run.
        #[arg(long)]
        ignore_missing: bool,
    },

    /// Builds a run from the harness console output.
    Ingest {
        /// The harness output. If unset, it is read from `stdin`.
        #[arg(long)]
        input: Option<PathBuf>,

        /// The toolchain version text, e.g. the output of `swift --version`.
        #[arg(long)]
        toolchain_version: String,

        /// The size of the benchmarked binary in bytes.
        #[arg(long)]
        binary_size: String,

        /// The run description.
        #[arg(long)]
        desc: Option<String>,

        /// The harness output flavor: `linux` or `darwin`.
        #[arg(long, default_value_t = benchmark_comparator::Platform::host())]
        platform: benchmark_comparator::Platform,

        /// The only `<GROUP>/<TEST>` the harness has been asked to run.
        /// Output of any other test aborts the ingestion.
        #[arg(long)]
        test: Option<benchmark_comparator::RequestedTest>,

        /// The base run to compare against.
        #[arg(long)]
        compare: Option<PathBuf>,

        /// The path to save the run to.
        #[arg(long)]
        save: Option<PathBuf>,
    },

    /// Groups the benchmark tests of a harness test listing.
    Groups {
        /// The harness test listing. If unset, it is read from `stdin`.
        #[arg(long)]
        input: Option<PathBuf>,
    },
}

impl Arguments {
    ///
    /// Validates the command line arguments.
    ///
    pub fn validate(self) -> anyhow::Result<Self> {
        if let Command::Ingest { binary_size, .. } = &self.command {
            if binary_size.is_empty() || !binary_size.chars().all(|c| c.is_ascii_digit()) {
                anyhow::bail!(
                    "The binary size must be a decimal number of bytes, found `{binary_size}`"
                );
            }
        }
        Ok(self)
    }
}
