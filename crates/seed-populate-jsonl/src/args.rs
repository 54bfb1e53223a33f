//! CLI argument definitions for JSONL output.

use clap::Args;
use std::path::PathBuf;

/// Default directory the JSONL files are written to.
pub const DEFAULT_OUTPUT_DIR: &str = "seed-data";

/// JSONL-specific output arguments.
#[derive(Args, Clone, Debug)]
pub struct JsonlOutputArgs {
    /// Output directory for JSONL files (one file per model)
    #[arg(
        long,
        short = 'o',
        env = "DATA_SEEDER_OUTPUT_DIR",
        default_value = DEFAULT_OUTPUT_DIR
    )]
    pub output_dir: PathBuf,
}
