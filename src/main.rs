//! Command-line interface for data-seeder
//!
//! # Usage Examples
//!
//! ## Seeding
//! ```bash
//! # One record of a model
//! data-seeder seed tests.SimpleCharModel --schema models.yaml
//!
//! # Several models, five records each, following foreign keys
//! data-seeder seed tests.RelationModel tests.ComplexModel \
//!   --schema models.yaml \
//!   --seeds 5 \
//!   --generate-related
//!
//! # Pin fields and make the run reproducible
//! data-seeder seed tests.ComplexModel \
//!   --schema models.yaml \
//!   --value value=10 --value is_true=true \
//!   --rng-seed 42
//! ```
//!
//! ## Output
//! - Default: `<output-dir>/<model>.jsonl`, one JSON object per record
//! - `--dry-run`: records are printed to stdout as JSON lines instead
//!
//! ## Environment
//! - `DATA_SEEDER_SCHEMA`: schema path
//! - `DATA_SEEDER_OUTPUT_DIR`: output directory (default `seed-data`)
//! - `DATA_SEEDER_RNG_SEED`: RNG seed
//! - `RUST_LOG`: log filter, e.g. `RUST_LOG=info`

use anyhow::Context;
use clap::{Parser, Subcommand};
use data_seeder::models::{describe_models, resolve_models};
use data_seeder::{dry_run_lines, seed_models, SchemaOpts, SeedOpts};
use seed_core::{MemoryStore, ModelSchema};
use seed_populate_jsonl::{JsonlOutputArgs, JsonlStore};

#[derive(Parser)]
#[command(name = "data-seeder")]
#[command(about = "Seeds random data into the models of a schema")]
#[command(long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Seed random records into one or more models
    Seed {
        /// Model names as declared in the schema, e.g. `shop.Order`
        #[arg(required = true)]
        models: Vec<String>,

        #[command(flatten)]
        schema: SchemaOpts,

        #[command(flatten)]
        opts: SeedOpts,

        #[command(flatten)]
        output: JsonlOutputArgs,

        /// Print records to stdout instead of writing files
        #[arg(long)]
        dry_run: bool,
    },

    /// List the models in a schema
    Models {
        #[command(flatten)]
        schema: SchemaOpts,
    },
}

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
}

fn run() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Seed {
            models,
            schema,
            opts,
            output,
            dry_run,
        } => run_seed(&models, &schema, &opts, &output, dry_run),
        Commands::Models { schema } => {
            let schema = load_schema(&schema)?;
            for line in describe_models(&schema) {
                println!("{line}");
            }
            Ok(())
        }
    }
}

fn load_schema(opts: &SchemaOpts) -> anyhow::Result<ModelSchema> {
    ModelSchema::from_file(&opts.schema)
        .with_context(|| format!("Failed to load schema from {:?}", opts.schema))
}

fn run_seed(
    model_names: &[String],
    schema_opts: &SchemaOpts,
    opts: &SeedOpts,
    output: &JsonlOutputArgs,
    dry_run: bool,
) -> anyhow::Result<()> {
    let schema = load_schema(schema_opts)?;
    let models = resolve_models(&schema, model_names)?;

    tracing::info!(
        "Seeding {} model(s) with {} record(s) each (generate_related={})",
        models.len(),
        opts.seeds,
        opts.generate_related
    );

    if dry_run {
        let mut store = MemoryStore::new();
        seed_models(&schema, &models, opts, &mut store)?;
        for line in dry_run_lines(&schema, &store) {
            println!("{line}");
        }
        return Ok(());
    }

    let mut store = JsonlStore::new(&output.output_dir).with_context(|| {
        format!(
            "Failed to open output directory {:?}",
            output.output_dir
        )
    })?;

    let reports = seed_models(&schema, &models, opts, &mut store)?;
    let metrics = store
        .finish()
        .context("Failed to flush JSONL output")?;

    for report in &reports {
        println!(
            "Seed(s) for \"{}\" complete: {} record(s)",
            report.model,
            report.records.len()
        );
    }
    println!(
        "Wrote {} record(s) to {} file(s) in {:?}",
        metrics.records_written,
        metrics.files_written,
        output.output_dir
    );

    Ok(())
}
