//! JSONL (JSON Lines) storage backend for data-seeder.
//!
//! This crate provides `JsonlStore`, a `RecordStore` that appends every
//! persisted record to `<output_dir>/<model>.jsonl`, one JSON object per
//! line, assigning auto-incrementing primary keys per model.
//!
//! # Example
//!
//! ```ignore
//! use seed_core::ModelSchema;
//! use seed_generator::DataSeeder;
//! use seed_populate_jsonl::JsonlStore;
//!
//! let schema = ModelSchema::from_file("schema.yaml")?;
//! let mut store = JsonlStore::new("seed-data")?;
//!
//! DataSeeder::new(&schema, "shop.Order")?
//!     .with_seeds(100)
//!     .with_generate_related(true)
//!     .seed(&mut store)?;
//!
//! let metrics = store.finish()?;
//! println!("Wrote {} records", metrics.records_written);
//! ```

pub mod args;
pub mod error;
pub mod store;

pub use args::{JsonlOutputArgs, DEFAULT_OUTPUT_DIR};
pub use error::JsonlStoreError;
pub use store::{record_to_json, value_to_json, JsonlStore, WriteMetrics};
