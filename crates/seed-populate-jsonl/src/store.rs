//! JSONL record store.

use crate::error::JsonlStoreError;
use seed_core::{
    assign_primary_key, validate_record, ModelDescriptor, Record, RecordStore, StoreError, Value,
};
use serde_json::json;
use std::collections::hash_map::Entry;
use std::collections::HashMap;
use std::fs::{File, OpenOptions};
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};
use tracing::{debug, info};

/// Default buffer size for JSONL writing.
pub const DEFAULT_BUFFER_SIZE: usize = 8192;

/// Metrics from a store's lifetime.
#[derive(Debug, Clone, Default)]
pub struct WriteMetrics {
    /// Number of records written.
    pub records_written: u64,
    /// Number of model files written to.
    pub files_written: usize,
    /// Combined size of those files in bytes.
    pub file_size_bytes: u64,
    /// Time from opening the store to finishing it.
    pub total_duration: Duration,
}

impl WriteMetrics {
    /// Calculate records per second.
    pub fn records_per_second(&self) -> f64 {
        if self.total_duration.as_secs_f64() > 0.0 {
            self.records_written as f64 / self.total_duration.as_secs_f64()
        } else {
            0.0
        }
    }
}

struct ModelFile {
    path: PathBuf,
    writer: BufWriter<File>,
    next_pk: u64,
}

/// Store that appends each record to `<output_dir>/<model>.jsonl`.
///
/// Primary keys continue from the number of records already in a model's
/// file, so repeated runs against the same directory keep keys unique.
pub struct JsonlStore {
    output_dir: PathBuf,
    files: HashMap<String, ModelFile>,
    records_written: u64,
    started: Instant,
}

impl JsonlStore {
    /// Open a store, creating the output directory if needed.
    pub fn new<P: AsRef<Path>>(output_dir: P) -> Result<Self, JsonlStoreError> {
        let output_dir = output_dir.as_ref().to_path_buf();
        if output_dir.exists() && !output_dir.is_dir() {
            return Err(JsonlStoreError::NotADirectory(
                output_dir.display().to_string(),
            ));
        }
        std::fs::create_dir_all(&output_dir)?;

        info!("Writing JSONL files to '{}'", output_dir.display());

        Ok(Self {
            output_dir,
            files: HashMap::new(),
            records_written: 0,
            started: Instant::now(),
        })
    }

    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    /// Path of the file holding a model's records.
    pub fn path_for(&self, model: &str) -> PathBuf {
        self.output_dir.join(format!("{model}.jsonl"))
    }

    /// Number of records written through this store.
    pub fn records_written(&self) -> u64 {
        self.records_written
    }

    /// Flush every file and report what was written.
    pub fn finish(mut self) -> Result<WriteMetrics, JsonlStoreError> {
        let mut metrics = WriteMetrics {
            records_written: self.records_written,
            files_written: self.files.len(),
            ..WriteMetrics::default()
        };

        for file in self.files.values_mut() {
            file.writer.flush()?;
            metrics.file_size_bytes += std::fs::metadata(&file.path)?.len();
        }
        metrics.total_duration = self.started.elapsed();

        info!(
            "JSONL output complete: {} records in {} files, {} bytes in {:?} ({:.2} records/sec)",
            metrics.records_written,
            metrics.files_written,
            metrics.file_size_bytes,
            metrics.total_duration,
            metrics.records_per_second()
        );

        Ok(metrics)
    }

    fn model_file(&mut self, model: &str) -> Result<&mut ModelFile, JsonlStoreError> {
        let path = self.path_for(model);
        match self.files.entry(model.to_string()) {
            Entry::Occupied(entry) => Ok(entry.into_mut()),
            Entry::Vacant(entry) => {
                let existing = count_records(&path)?;
                let file = OpenOptions::new().create(true).append(true).open(&path)?;
                debug!(
                    "Opened '{}' ({} existing records)",
                    path.display(),
                    existing
                );

                Ok(entry.insert(ModelFile {
                    path,
                    writer: BufWriter::with_capacity(DEFAULT_BUFFER_SIZE, file),
                    next_pk: existing + 1,
                }))
            }
        }
    }
}

impl RecordStore for JsonlStore {
    fn create(&mut self, model: &ModelDescriptor, mut record: Record) -> Result<Record, StoreError> {
        validate_record(model, &record)?;

        let file = self.model_file(&model.name)?;
        let pk = file.next_pk;
        assign_primary_key(model, &mut record, pk);

        let json = record_to_json(model, &record);
        serde_json::to_writer(&mut file.writer, &json).map_err(JsonlStoreError::from)?;
        writeln!(file.writer)?;
        file.next_pk += 1;

        self.records_written += 1;
        debug!("Wrote {} record with pk {}", model.name, pk);

        Ok(record)
    }
}

/// Count the non-blank lines of an existing file, or 0 if it is missing.
fn count_records(path: &Path) -> Result<u64, JsonlStoreError> {
    if !path.exists() {
        return Ok(0);
    }

    let mut count = 0;
    for line in BufReader::new(File::open(path)?).lines() {
        if !line?.trim().is_empty() {
            count += 1;
        }
    }
    Ok(count)
}

/// Convert a record to a JSON object.
///
/// `pk` comes first, followed by every field of the model in declaration
/// order. Fields the record never received are written as `null`.
pub fn record_to_json(model: &ModelDescriptor, record: &Record) -> serde_json::Value {
    let mut obj = serde_json::Map::new();
    obj.insert("pk".to_string(), json!(record.pk));

    for field in &model.fields {
        let value = record
            .get_field(&field.name)
            .map_or(serde_json::Value::Null, value_to_json);
        obj.insert(field.name.clone(), value);
    }

    serde_json::Value::Object(obj)
}

/// Convert a single value to JSON.
///
/// Decimals are written as strings to preserve precision, temporal values
/// in ISO 8601, and relations as the related record's primary key.
pub fn value_to_json(value: &Value) -> serde_json::Value {
    match value {
        Value::Null => serde_json::Value::Null,
        Value::Bool(b) => json!(*b),
        Value::Int(i) => json!(*i),
        // NaN and infinities have no JSON form
        Value::Float(f) => serde_json::Number::from_f64(*f)
            .map_or(serde_json::Value::Null, serde_json::Value::Number),
        Value::Decimal(d) => json!(d.to_string()),
        Value::String(s) => json!(s),
        Value::DateTime(dt) => json!(dt.to_rfc3339()),
        Value::Date(d) => json!(d.format("%Y-%m-%d").to_string()),
        Value::Time(t) => json!(t.format("%H:%M:%S").to_string()),
        Value::Uuid(u) => json!(u.to_string()),
        Value::Json(v) => v.clone(),
        Value::Relation(reference) => json!(reference.pk),
    }
}
