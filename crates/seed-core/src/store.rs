//! Record persistence.
//!
//! The seeder hands every finished record to a [`RecordStore`]. The store
//! checks the record against its model, assigns a primary key, and returns
//! the persisted record. [`MemoryStore`] keeps everything in memory and is
//! what tests and dry runs use.

use crate::schema::ModelDescriptor;
use crate::types::FieldType;
use crate::values::{Record, Value};
use std::collections::HashMap;
use tracing::debug;

/// Error type for store operations.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// A non-nullable field has no value
    #[error("NOT NULL constraint failed: {model}.{field}")]
    ConstraintViolation { model: String, field: String },

    /// A field holds a value its column cannot store
    #[error("Type mismatch for {model}.{field}: {field_type} column cannot store a {found} value")]
    TypeMismatch {
        model: String,
        field: String,
        field_type: FieldType,
        found: &'static str,
    },

    /// The record was built for a different model
    #[error("Record of model '{found}' cannot be stored as '{expected}'")]
    WrongModel { expected: String, found: String },

    /// IO error in a file-backed store
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Backend-specific failure
    #[error("Storage backend error: {0}")]
    Backend(String),
}

/// Storage layer the seeder persists records through.
pub trait RecordStore {
    /// Validate and persist a record, returning it with its primary key set.
    fn create(&mut self, model: &ModelDescriptor, record: Record) -> Result<Record, StoreError>;
}

/// Check a record against its model the way a relational store would.
///
/// Auto fields are skipped since the store fills them in. Every other
/// non-nullable field must hold a non-null value, and every value must fit
/// its column type. Relation fields must point at the declared model.
pub fn validate_record(model: &ModelDescriptor, record: &Record) -> Result<(), StoreError> {
    if record.model != model.name {
        return Err(StoreError::WrongModel {
            expected: model.name.clone(),
            found: record.model.clone(),
        });
    }

    for field in &model.fields {
        if field.field_type.is_auto() {
            continue;
        }

        let value = record.get_field(&field.name).unwrap_or(&Value::Null);
        if value.is_null() {
            if field.nullable {
                continue;
            }
            return Err(StoreError::ConstraintViolation {
                model: model.name.clone(),
                field: field.name.clone(),
            });
        }

        let relation_matches = match (value, field.related_model()) {
            (Value::Relation(reference), Some(target)) => reference.model == target,
            _ => true,
        };

        if !field.field_type.accepts(value) || !relation_matches {
            return Err(StoreError::TypeMismatch {
                model: model.name.clone(),
                field: field.name.clone(),
                field_type: field.field_type,
                found: value.kind(),
            });
        }
    }

    Ok(())
}

/// Assign `pk` to the record and copy it into every auto field.
pub fn assign_primary_key(model: &ModelDescriptor, record: &mut Record, pk: u64) {
    record.pk = Some(pk);
    for field in model.fields.iter().filter(|f| f.field_type.is_auto()) {
        record.set_field(field.name.clone(), Value::Int(pk as i64));
    }
}

/// In-memory store with per-model auto-incrementing primary keys.
#[derive(Debug, Default)]
pub struct MemoryStore {
    tables: HashMap<String, Vec<Record>>,
    next_pk: HashMap<String, u64>,
}

impl MemoryStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of records stored for a model.
    pub fn count(&self, model: &str) -> usize {
        self.tables.get(model).map_or(0, Vec::len)
    }

    /// Records stored for a model, in insertion order.
    pub fn records(&self, model: &str) -> &[Record] {
        self.tables.get(model).map(Vec::as_slice).unwrap_or(&[])
    }

    /// First record stored for a model.
    pub fn first(&self, model: &str) -> Option<&Record> {
        self.records(model).first()
    }

    /// Look up a record by model and primary key.
    pub fn get(&self, model: &str, pk: u64) -> Option<&Record> {
        self.records(model).iter().find(|r| r.pk == Some(pk))
    }

    /// Total number of records across all models.
    pub fn total(&self) -> usize {
        self.tables.values().map(Vec::len).sum()
    }
}

impl RecordStore for MemoryStore {
    fn create(&mut self, model: &ModelDescriptor, mut record: Record) -> Result<Record, StoreError> {
        validate_record(model, &record)?;

        let next = self.next_pk.entry(model.name.clone()).or_insert(1);
        let pk = *next;
        *next += 1;

        assign_primary_key(model, &mut record, pk);
        debug!("Stored {} record with pk {}", model.name, pk);

        self.tables
            .entry(model.name.clone())
            .or_default()
            .push(record.clone());

        Ok(record)
    }
}
