//! The seeding engine.
//!
//! A [`DataSeeder`] builds records for one model and hands each to a
//! [`RecordStore`]. Every field gets exactly one value source, checked in
//! order: a caller override, relation resolution (when enabled), then the
//! generator registered for the field's type. Fields with no source keep
//! whatever default the schema placed on the blank record.
//!
//! Relation resolution seeds one record of the related model and reuses it
//! for every later reference to that model within the same run. Relations
//! back to the model being built, or to any model further up the current
//! recursion chain, are skipped so that cyclic schemas terminate.

use crate::dispatch::generator_for;
use crate::error::SeederError;
use crate::generators::ValueGenerator;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use seed_core::{FieldDescriptor, ModelDescriptor, ModelSchema, Record, RecordStore, Value};
use std::collections::HashMap;
use tracing::{debug, info};

/// Seeds records of a single model.
pub struct DataSeeder<'a> {
    schema: &'a ModelSchema,
    model: &'a ModelDescriptor,
    seeds: u64,
    generate_related: bool,
    values: HashMap<String, Value>,
    rng: StdRng,
}

impl<'a> DataSeeder<'a> {
    /// Create a seeder for `model_name` that produces one record, does not
    /// follow relations and has no overrides.
    pub fn new(schema: &'a ModelSchema, model_name: &str) -> Result<Self, SeederError> {
        let model = schema
            .get_model(model_name)
            .ok_or_else(|| SeederError::ModelNotFound(model_name.to_string()))?;

        Ok(Self {
            schema,
            model,
            seeds: 1,
            generate_related: false,
            values: HashMap::new(),
            rng: StdRng::from_entropy(),
        })
    }

    /// Number of records to create.
    pub fn with_seeds(mut self, seeds: u64) -> Self {
        self.seeds = seeds;
        self
    }

    /// Whether to create related records for foreign keys.
    pub fn with_generate_related(mut self, generate_related: bool) -> Self {
        self.generate_related = generate_related;
        self
    }

    /// Replace the override map.
    pub fn with_values(mut self, values: HashMap<String, Value>) -> Self {
        self.values = values;
        self
    }

    /// Add a single override.
    pub fn with_value(mut self, field: impl Into<String>, value: Value) -> Self {
        self.values.insert(field.into(), value);
        self
    }

    /// Seed the RNG for a reproducible run.
    pub fn with_rng_seed(mut self, seed: u64) -> Self {
        self.rng = StdRng::seed_from_u64(seed);
        self
    }

    pub fn model(&self) -> &ModelDescriptor {
        self.model
    }

    pub fn seeds(&self) -> u64 {
        self.seeds
    }

    pub fn generate_related(&self) -> bool {
        self.generate_related
    }

    pub fn values(&self) -> &HashMap<String, Value> {
        &self.values
    }

    /// Create and persist the configured number of records.
    ///
    /// Returns the persisted top-level records in creation order. Related
    /// records are persisted through the same store but not returned. A
    /// store failure aborts the run; records persisted before it stay.
    pub fn seed<S: RecordStore>(&mut self, store: &mut S) -> Result<Vec<Record>, SeederError> {
        if self.seeds == 0 {
            return Err(SeederError::InvalidSeedCount(self.seeds));
        }

        info!(
            "Seeding {} record(s) of {} (generate_related: {})",
            self.seeds, self.model.name, self.generate_related
        );

        let mut run = SeedRun::new(self.schema);
        let mut records = Vec::with_capacity(self.seeds as usize);

        for i in 0..self.seeds {
            let record = run.seed_one(
                self.model,
                &self.values,
                self.generate_related,
                &mut self.rng,
                store,
            )?;
            debug!(
                "Seeded {} {}/{} (pk: {:?})",
                self.model.name,
                i + 1,
                self.seeds,
                record.pk
            );
            records.push(record);
        }

        info!(
            "Seeded {} record(s) of {} and {} related model(s)",
            records.len(),
            self.model.name,
            run.cache.len()
        );

        Ok(records)
    }
}

/// State that lives for one top-level `seed()` call.
struct SeedRun<'a> {
    schema: &'a ModelSchema,
    /// One persisted record per related model, reused for every reference.
    cache: HashMap<String, Record>,
    /// Models currently being built, outermost first.
    stack: Vec<String>,
}

impl<'a> SeedRun<'a> {
    fn new(schema: &'a ModelSchema) -> Self {
        Self {
            schema,
            cache: HashMap::new(),
            stack: Vec::new(),
        }
    }

    /// Build and persist one record of `model`.
    fn seed_one<R: Rng, S: RecordStore>(
        &mut self,
        model: &ModelDescriptor,
        values: &HashMap<String, Value>,
        generate_related: bool,
        rng: &mut R,
        store: &mut S,
    ) -> Result<Record, SeederError> {
        self.stack.push(model.name.clone());
        let built = self.build_record(model, values, generate_related, rng, store);
        self.stack.pop();

        store
            .create(model, built?)
            .map_err(|source| SeederError::Persistence {
                model: model.name.clone(),
                source,
            })
    }

    fn build_record<R: Rng, S: RecordStore>(
        &mut self,
        model: &ModelDescriptor,
        values: &HashMap<String, Value>,
        generate_related: bool,
        rng: &mut R,
        store: &mut S,
    ) -> Result<Record, SeederError> {
        let mut record = model.new_record();

        for field in &model.fields {
            if let Some(value) = values.get(&field.name) {
                record.set_field(field.name.clone(), value.clone());
                continue;
            }

            if field.is_relation() && generate_related {
                if let Some(value) = self.resolve_relation(model, field, rng, store)? {
                    record.set_field(field.name.clone(), value);
                }
                continue;
            }

            if let Some(kind) = generator_for(field.field_type) {
                record.set_field(field.name.clone(), kind.build().generate(rng));
            }
        }

        Ok(record)
    }

    /// Find or create the record a relation field should point at.
    ///
    /// `None` means the relation is left unresolved.
    fn resolve_relation<R: Rng, S: RecordStore>(
        &mut self,
        model: &ModelDescriptor,
        field: &FieldDescriptor,
        rng: &mut R,
        store: &mut S,
    ) -> Result<Option<Value>, SeederError> {
        let Some(target) = field.related_model() else {
            return Ok(None);
        };

        if target == model.name {
            debug!(
                "Skipping self-referential relation {}.{}",
                model.name, field.name
            );
            return Ok(None);
        }

        if self.stack.iter().any(|name| name == target) {
            debug!(
                "Skipping relation {}.{}: {} is already being seeded",
                model.name, field.name, target
            );
            return Ok(None);
        }

        if let Some(cached) = self.cache.get(target) {
            return Ok(Some(Value::Relation(cached.to_ref())));
        }

        let schema = self.schema;
        let related = schema.resolve(target)?;
        debug!(
            "Seeding related {} for {}.{}",
            related.name, model.name, field.name
        );

        let record = self.seed_one(related, &HashMap::new(), true, rng, store)?;
        let reference = record.to_ref();
        self.cache.insert(target.to_string(), record);

        Ok(Some(Value::Relation(reference)))
    }
}
