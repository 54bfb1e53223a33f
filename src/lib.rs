//! data-seeder library
//!
//! Seeds random records into the models of a schema, for development and
//! test databases.
//!
//! # Crates
//!
//! - `seed_core` - field types, values, records, model schema and stores
//! - `seed_generator` - value generators, type dispatch and the `DataSeeder`
//! - `seed_populate_jsonl` - JSONL file store
//!
//! This crate adds the two triggers that drive a seeding run: the
//! administrative "generate" action ([`admin`]) and the command line.
//!
//! # CLI Usage
//!
//! ```bash
//! # Three records of one model, written to ./seed-data/tests.SimpleCharModel.jsonl
//! data-seeder seed tests.SimpleCharModel --schema models.yaml --seeds 3
//!
//! # Follow foreign keys and pin a field
//! data-seeder seed shop.Order --schema models.yaml --seeds 10 \
//!   --generate-related --value status=paid
//!
//! # Print instead of writing files
//! data-seeder seed shop.Order --schema models.yaml --dry-run
//!
//! # List models
//! data-seeder models --schema models.yaml
//! ```

use clap::Args;
use std::path::PathBuf;

pub mod admin;
pub mod config;
pub mod models;
pub mod seed;

pub use seed::{dry_run_lines, seed_models, SeedReport};

/// Schema location, shared by all commands.
#[derive(Args, Clone, Debug)]
pub struct SchemaOpts {
    /// Path to the model schema YAML file
    #[arg(long, short = 's', env = "DATA_SEEDER_SCHEMA")]
    pub schema: PathBuf,
}

/// Seeding options for the `seed` command.
#[derive(Args, Clone, Debug)]
pub struct SeedOpts {
    /// Number of records to create per model
    #[arg(long, default_value = "1")]
    pub seeds: u64,

    /// Create related records for foreign keys instead of leaving them empty
    #[arg(long)]
    pub generate_related: bool,

    /// Fixed value for a field, applied to every record (repeatable)
    #[arg(long = "value", value_name = "FIELD=VALUE")]
    pub values: Vec<String>,

    /// Random seed for reproducible output
    #[arg(long, env = "DATA_SEEDER_RNG_SEED")]
    pub rng_seed: Option<u64>,
}
