//! Value generators and the seeding engine for data-seeder.
//!
//! This crate provides the `DataSeeder`, which fills a model's fields with
//! random values and persists the resulting records through a
//! `RecordStore`. The value for each field comes from a caller override,
//! from a related record when relation following is enabled, or from the
//! generator the dispatch table assigns to the field's type.
//!
//! # Architecture
//!
//! ```text
//! ModelSchema (YAML)
//!        │
//!        ▼
//! ┌──────────────────────┐     generator_for(FieldType)
//! │      DataSeeder      │ ──────────────────────────────▶ Generator
//! │                      │
//! │  - seeds             │     relation cache (per run)
//! │  - generate_related  │ ◀────────────────────────────── related Record
//! │  - values            │
//! │  - rng (StdRng)      │
//! └──────────┬───────────┘
//!            │
//!            ▼
//!     RecordStore::create(model, Record)
//! ```
//!
//! # Example
//!
//! ```rust
//! use seed_core::{MemoryStore, ModelSchema, Value};
//! use seed_generator::DataSeeder;
//!
//! let schema = ModelSchema::from_yaml(r#"
//! models:
//!   - name: blog.Author
//!     fields:
//!       - name: id
//!         type: auto
//!       - name: name
//!         type: char
//!   - name: blog.Post
//!     fields:
//!       - name: id
//!         type: auto
//!       - name: title
//!         type: char
//!       - name: author
//!         type: foreign_key
//!         to: blog.Author
//! "#).unwrap();
//!
//! let mut store = MemoryStore::new();
//! let posts = DataSeeder::new(&schema, "blog.Post")
//!     .unwrap()
//!     .with_seeds(3)
//!     .with_generate_related(true)
//!     .with_value("title", Value::from("Hello"))
//!     .with_rng_seed(42)
//!     .seed(&mut store)
//!     .unwrap();
//!
//! assert_eq!(posts.len(), 3);
//! assert_eq!(store.count("blog.Author"), 1);
//! ```
//!
//! # Generators
//!
//! | Field types | Generator |
//! |---|---|
//! | `big_integer`, `integer`, `small_integer` | `IntegerGenerator` |
//! | `positive_integer`, `positive_small_integer` | `PositiveIntegerGenerator` |
//! | `boolean`, `null_boolean` | `BooleanGenerator` |
//! | `char`, `text` | `StringGenerator` |
//! | `date` | `DateGenerator` |
//! | `date_time` | `DateTimeGenerator` |
//! | `time` | `TimeGenerator` |
//! | `decimal` | `DecimalGenerator` |
//! | `float` | `FloatGenerator` |
//! | `email` | `EmailGenerator` |
//! | `url` | `UrlGenerator` |
//! | `ip_address` | `IpAddressGenerator` |
//! | `uuid` | `UuidGenerator` |
//!
//! `auto`, `big_auto`, `binary`, `json` and `foreign_key` have no generator.

pub mod dispatch;
pub mod error;
pub mod generators;
pub mod seeder;

pub use dispatch::{generator_for, GeneratorKind};
pub use error::{GeneratorError, SeederError};
pub use generators::{Generator, ValueGenerator};
pub use seeder::DataSeeder;
