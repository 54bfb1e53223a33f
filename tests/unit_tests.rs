use clap::Parser;
use data_seeder::{SchemaOpts, SeedOpts};
use seed_populate_jsonl::JsonlOutputArgs;
use std::path::PathBuf;

#[derive(Parser)]
struct TestCli {
    models: Vec<String>,

    #[command(flatten)]
    schema: SchemaOpts,

    #[command(flatten)]
    opts: SeedOpts,

    #[command(flatten)]
    output: JsonlOutputArgs,
}

#[test]
fn test_seed_opts_creation() {
    let opts = SeedOpts {
        seeds: 5,
        generate_related: true,
        values: vec!["value=10".to_string()],
        rng_seed: Some(42),
    };

    assert_eq!(opts.seeds, 5);
    assert!(opts.generate_related);
    assert_eq!(opts.values, vec!["value=10".to_string()]);
    assert_eq!(opts.rng_seed, Some(42));
}

#[test]
fn test_cli_defaults() {
    let cli = TestCli::try_parse_from(["data-seeder", "tests.SimpleCharModel", "--schema", "m.yaml"])
        .unwrap();

    assert_eq!(cli.models, vec!["tests.SimpleCharModel".to_string()]);
    assert_eq!(cli.schema.schema, PathBuf::from("m.yaml"));
    assert_eq!(cli.opts.seeds, 1);
    assert!(!cli.opts.generate_related);
    assert!(cli.opts.values.is_empty());
}

#[test]
fn test_cli_all_flags() {
    let cli = TestCli::try_parse_from([
        "data-seeder",
        "tests.RelationModel",
        "tests.ComplexModel",
        "-s",
        "m.yaml",
        "--seeds",
        "5",
        "--generate-related",
        "--value",
        "value=10",
        "--value",
        "is_true=true",
        "--rng-seed",
        "7",
        "--output-dir",
        "out",
    ])
    .unwrap();

    assert_eq!(cli.models.len(), 2);
    assert_eq!(cli.opts.seeds, 5);
    assert!(cli.opts.generate_related);
    assert_eq!(cli.opts.values, vec!["value=10", "is_true=true"]);
    assert_eq!(cli.opts.rng_seed, Some(7));
    assert_eq!(cli.output.output_dir, PathBuf::from("out"));
}

#[test]
fn test_cli_rejects_non_numeric_seeds() {
    let result = TestCli::try_parse_from([
        "data-seeder",
        "tests.SimpleCharModel",
        "--schema",
        "m.yaml",
        "--seeds",
        "many",
    ]);

    assert!(result.is_err());
}
