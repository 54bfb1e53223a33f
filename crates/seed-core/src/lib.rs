//! Core types for data-seeder.
//!
//! This crate provides the foundational types shared by the generator, the
//! storage backends and the command-line tool:
//!
//! - [`FieldType`] - Type tag of a model field
//! - [`Value`] - A single field value
//! - [`Record`] - One model instance
//! - [`ModelSchema`] - Model definitions, usually loaded from YAML
//! - [`RecordStore`] - Persistence seam, with [`MemoryStore`] built in
//!
//! # Architecture
//!
//! ```text
//! seed-core (this crate)
//!    │
//!    ├─── seed-generator       (generators, dispatch table, seeder engine)
//!    │
//!    └─── seed-populate-jsonl  (RecordStore writing JSON lines)
//! ```
//!
//! # Example
//!
//! ```rust
//! use seed_core::{FieldType, MemoryStore, ModelSchema, RecordStore, Value};
//!
//! let schema = ModelSchema::from_yaml(r#"
//! models:
//!   - name: tests.SimpleCharModel
//!     fields:
//!       - name: id
//!         type: auto
//!       - name: name
//!         type: char
//! "#).unwrap();
//!
//! let model = schema.resolve("tests.SimpleCharModel").unwrap();
//! assert_eq!(model.fields[1].field_type, FieldType::Char);
//!
//! let mut store = MemoryStore::new();
//! let record = model.new_record().with_field("name", Value::from("John"));
//! let saved = store.create(model, record).unwrap();
//! assert_eq!(saved.pk, Some(1));
//! ```

pub mod schema;
pub mod store;
pub mod types;
pub mod values;

// Re-exports for convenience
pub use schema::{FieldDescriptor, ModelDescriptor, ModelSchema, SchemaError};
pub use store::{assign_primary_key, validate_record, MemoryStore, RecordStore, StoreError};
pub use types::FieldType;
pub use values::{Record, RecordRef, Value};
