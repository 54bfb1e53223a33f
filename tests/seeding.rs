//! End-to-end seeding tests against the fixture schema.

use chrono::{Duration, Utc};
use data_seeder::admin::{self, GenerateForm};
use data_seeder::models::resolve_models;
use data_seeder::{seed_models, SeedOpts};
use rand::rngs::StdRng;
use rand::SeedableRng;
use seed_core::{MemoryStore, ModelSchema, Value};
use seed_generator::generators::{DateGenerator, IntegerGenerator};
use seed_generator::{DataSeeder, ValueGenerator};
use seed_populate_jsonl::JsonlStore;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

fn fixture_schema() -> ModelSchema {
    tracing_subscriber::fmt()
        .with_env_filter("data_seeder=debug,seed_generator=debug")
        .try_init()
        .ok();

    let path = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/models.yaml");
    ModelSchema::from_file(path).unwrap()
}

fn read_json_lines(path: &Path) -> Vec<serde_json::Value> {
    std::fs::read_to_string(path)
        .unwrap()
        .lines()
        .map(|line| serde_json::from_str(line).unwrap())
        .collect()
}

fn seed_opts(seeds: u64, generate_related: bool) -> SeedOpts {
    SeedOpts {
        seeds,
        generate_related,
        values: Vec::new(),
        rng_seed: Some(42),
    }
}

#[test]
fn test_simple_char_model_scenario() {
    let schema = fixture_schema();
    let mut store = MemoryStore::new();

    let records = DataSeeder::new(&schema, "tests.SimpleCharModel")
        .unwrap()
        .with_seeds(3)
        .seed(&mut store)
        .unwrap();

    assert_eq!(records.len(), 3);
    for record in &records {
        let name = record.get_field("name").and_then(Value::as_str).unwrap();
        assert!((1..=20).contains(&name.len()));
        assert!(name.chars().all(|c| c.is_ascii_alphabetic() || c == ' '));
    }
}

#[test]
fn test_complex_model_scenario() {
    let schema = fixture_schema();
    let mut store = MemoryStore::new();

    let records = DataSeeder::new(&schema, "tests.ComplexModel")
        .unwrap()
        .with_value("value", Value::Int(10))
        .with_value("is_true", Value::Bool(true))
        .seed(&mut store)
        .unwrap();

    assert_eq!(records.len(), 1);
    let record = &records[0];
    assert_eq!(record.get_field("value"), Some(&Value::Int(10)));
    assert_eq!(record.get_field("is_true"), Some(&Value::Bool(true)));
    assert!(!record
        .get_field("name")
        .and_then(Value::as_str)
        .unwrap()
        .is_empty());
    assert!(record
        .get_field("created")
        .and_then(Value::as_datetime)
        .is_some());
}

#[test]
fn test_integer_generator_scenario() {
    let generator = IntegerGenerator::new(10, 20).unwrap();
    let mut rng = StdRng::seed_from_u64(42);

    for _ in 0..1000 {
        let value = generator.generate(&mut rng).as_i64().unwrap();
        assert!((10..=20).contains(&value));
    }
}

#[test]
fn test_date_generator_scenario() {
    let generator = DateGenerator::default();
    let mut rng = StdRng::seed_from_u64(42);
    let today = Utc::now().date_naive();

    for _ in 0..1000 {
        let date = generator.generate(&mut rng).as_date().unwrap();
        // One day of slack either side for a run that straddles midnight.
        assert!(date >= today - Duration::days(31));
        assert!(date <= today + Duration::days(31));
    }
}

#[test]
fn test_every_field_type_round_trips_through_store() {
    let schema = fixture_schema();
    let mut store = MemoryStore::new();

    let records = DataSeeder::new(&schema, "tests.EveryTypeModel")
        .unwrap()
        .with_seeds(20)
        .with_rng_seed(42)
        .seed(&mut store)
        .unwrap();

    for record in &records {
        assert!(record.get_field("positive").and_then(Value::as_i64).unwrap() >= 0);
        assert!(record.get_field("token").and_then(Value::as_uuid).is_some());
        assert!(record.get_field("blob").is_none());
        assert_eq!(
            record.get_field("meta"),
            Some(&Value::Json(serde_json::json!({"tags": []})))
        );

        let address = record.get_field("address").and_then(Value::as_str).unwrap();
        assert!(address.parse::<std::net::Ipv4Addr>().is_ok());

        let contact = record.get_field("contact").and_then(Value::as_str).unwrap();
        assert!(contact.contains('@') && contact.ends_with(".com"));
    }
}

#[test]
fn test_relation_dedup_written_to_jsonl() {
    let schema = fixture_schema();
    let temp_dir = TempDir::new().unwrap();
    let mut store = JsonlStore::new(temp_dir.path()).unwrap();

    let models = resolve_models(&schema, &["tests.RelationModel"]).unwrap();
    let reports = seed_models(&schema, &models, &seed_opts(5, true), &mut store).unwrap();
    assert_eq!(reports[0].records.len(), 5);
    store.finish().unwrap();

    let related = read_json_lines(&temp_dir.path().join("tests.SimpleCharModel.jsonl"));
    assert_eq!(related.len(), 1);

    let main = read_json_lines(&temp_dir.path().join("tests.RelationModel.jsonl"));
    assert_eq!(main.len(), 5);
    for line in &main {
        assert_eq!(line["other"], related[0]["pk"]);
    }
}

#[test]
fn test_self_reference_left_empty() {
    let schema = fixture_schema();
    let mut store = MemoryStore::new();

    let records = DataSeeder::new(&schema, "tests.Category")
        .unwrap()
        .with_seeds(3)
        .with_generate_related(true)
        .seed(&mut store)
        .unwrap();

    assert_eq!(store.total(), 3);
    for record in &records {
        assert!(record.get_field("parent").map_or(true, Value::is_null));
    }
}

#[test]
fn test_unknown_model_fails_before_seeding() {
    let schema = fixture_schema();

    let err = resolve_models(&schema, &["tests.SimpleCharModel", "tests.Missing"]).unwrap_err();
    assert_eq!(err.to_string(), "Model \"tests.Missing\" does not exist in schema");
}

#[test]
fn test_admin_generate() {
    let schema = fixture_schema();
    let mut store = MemoryStore::new();

    let form = GenerateForm {
        generate_num: Some("5".to_string()),
        generate_related: true,
    };
    let outcome = admin::generate(&schema, "tests.RelationModel", &form, &mut store).unwrap();

    assert_eq!(outcome.redirect_to, "../");
    assert_eq!(outcome.records.len(), 5);
    assert_eq!(store.count("tests.SimpleCharModel"), 1);

    let form = GenerateForm {
        generate_num: Some("five".to_string()),
        generate_related: false,
    };
    let err = admin::generate(&schema, "tests.RelationModel", &form, &mut store).unwrap_err();
    assert!(err.to_string().contains("five"));
    assert_eq!(store.count("tests.RelationModel"), 5);
}

#[test]
fn test_reproducible_with_rng_seed() {
    let schema = fixture_schema();
    let models = resolve_models(&schema, &["tests.SimpleIntModel"]).unwrap();

    let mut first = MemoryStore::new();
    let mut second = MemoryStore::new();
    let a = seed_models(&schema, &models, &seed_opts(10, false), &mut first).unwrap();
    let b = seed_models(&schema, &models, &seed_opts(10, false), &mut second).unwrap();

    assert_eq!(a[0].records, b[0].records);
}
