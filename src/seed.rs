//! Multi-model seeding for the command line.

use crate::config::{overrides_for_model, parse_override};
use crate::SeedOpts;
use anyhow::Context;
use seed_core::{MemoryStore, ModelDescriptor, ModelSchema, Record, RecordStore};
use seed_generator::DataSeeder;
use seed_populate_jsonl::record_to_json;
use tracing::info;

/// Records created for one model named on the command line.
#[derive(Debug, Clone)]
pub struct SeedReport {
    pub model: String,
    pub records: Vec<Record>,
}

/// Seed every model in order with the same options.
///
/// Overrides are parsed once and converted per model. When an RNG seed is
/// given, each model gets its own seed derived from it so that models in
/// the same invocation do not repeat each other's values.
pub fn seed_models<S: RecordStore>(
    schema: &ModelSchema,
    models: &[&ModelDescriptor],
    opts: &SeedOpts,
    store: &mut S,
) -> anyhow::Result<Vec<SeedReport>> {
    let raw_values = opts
        .values
        .iter()
        .map(|s| parse_override(s))
        .collect::<anyhow::Result<Vec<_>>>()?;

    let mut reports = Vec::with_capacity(models.len());
    for (i, model) in models.iter().enumerate() {
        let values = overrides_for_model(model, &raw_values)?;

        info!("Seeding data for \"{}\"...", model.name);

        let mut seeder = DataSeeder::new(schema, &model.name)?
            .with_seeds(opts.seeds)
            .with_generate_related(opts.generate_related)
            .with_values(values);
        if let Some(seed) = opts.rng_seed {
            seeder = seeder.with_rng_seed(seed.wrapping_add(i as u64));
        }

        let records = seeder
            .seed(store)
            .with_context(|| format!("Failed to seed \"{}\"", model.name))?;

        info!("Seed(s) for \"{}\" complete", model.name);
        reports.push(SeedReport {
            model: model.name.clone(),
            records,
        });
    }

    Ok(reports)
}

/// Render everything in a memory store as JSON lines, in schema order.
///
/// Each line is `{"model": <name>, "record": <record>}`.
pub fn dry_run_lines(schema: &ModelSchema, store: &MemoryStore) -> Vec<String> {
    schema
        .models
        .iter()
        .flat_map(|model| {
            store.records(&model.name).iter().map(move |record| {
                serde_json::json!({
                    "model": model.name,
                    "record": record_to_json(model, record),
                })
                .to_string()
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::resolve_models;
    use seed_core::Value;

    fn schema() -> ModelSchema {
        ModelSchema::from_yaml(
            r#"
models:
  - name: tests.SimpleCharModel
    fields:
      - name: id
        type: auto
      - name: name
        type: char
  - name: tests.ComplexModel
    fields:
      - name: id
        type: auto
      - name: name
        type: char
      - name: value
        type: integer
      - name: is_true
        type: boolean
      - name: created
        type: date_time
"#,
        )
        .unwrap()
    }

    fn opts(seeds: u64, values: &[&str]) -> SeedOpts {
        SeedOpts {
            seeds,
            generate_related: false,
            values: values.iter().map(|s| s.to_string()).collect(),
            rng_seed: Some(42),
        }
    }

    #[test]
    fn test_seed_models_applies_overrides_per_model() {
        let schema = schema();
        let models =
            resolve_models(&schema, &["tests.SimpleCharModel", "tests.ComplexModel"]).unwrap();
        let mut store = MemoryStore::new();

        let reports = seed_models(
            &schema,
            &models,
            &opts(2, &["value=10", "is_true=true"]),
            &mut store,
        )
        .unwrap();

        assert_eq!(reports.len(), 2);
        assert_eq!(reports[0].model, "tests.SimpleCharModel");
        assert_eq!(reports[0].records.len(), 2);
        assert_eq!(store.count("tests.SimpleCharModel"), 2);
        assert_eq!(store.count("tests.ComplexModel"), 2);

        for record in &reports[1].records {
            assert_eq!(record.get_field("value"), Some(&Value::Int(10)));
            assert_eq!(record.get_field("is_true"), Some(&Value::Bool(true)));
        }
    }

    #[test]
    fn test_seed_models_bad_override() {
        let schema = schema();
        let models = resolve_models(&schema, &["tests.ComplexModel"]).unwrap();
        let mut store = MemoryStore::new();

        assert!(seed_models(&schema, &models, &opts(1, &["value"]), &mut store).is_err());
        assert!(seed_models(&schema, &models, &opts(1, &["value=ten"]), &mut store).is_err());
        assert_eq!(store.total(), 0);
    }

    #[test]
    fn test_seed_models_zero_seeds() {
        let schema = schema();
        let models = resolve_models(&schema, &["tests.SimpleCharModel"]).unwrap();
        let mut store = MemoryStore::new();

        let err = seed_models(&schema, &models, &opts(0, &[]), &mut store).unwrap_err();
        assert!(format!("{err:#}").contains("Seed count must be at least 1"));
    }

    #[test]
    fn test_dry_run_lines() {
        let schema = schema();
        let models = resolve_models(&schema, &["tests.SimpleCharModel"]).unwrap();
        let mut store = MemoryStore::new();

        seed_models(&schema, &models, &opts(3, &["name=Hello World"]), &mut store).unwrap();
        let lines = dry_run_lines(&schema, &store);

        assert_eq!(lines.len(), 3);
        for (i, line) in lines.iter().enumerate() {
            let json: serde_json::Value = serde_json::from_str(line).unwrap();
            assert_eq!(json["model"], "tests.SimpleCharModel");
            assert_eq!(json["record"]["pk"], serde_json::json!(i + 1));
            assert_eq!(json["record"]["name"], "Hello World");
        }
    }
}
