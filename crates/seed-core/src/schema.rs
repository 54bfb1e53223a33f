//! Model schema definitions.
//!
//! A schema is the host's description of its models: each model has a name
//! and an ordered list of fields, and each field has a type tag plus
//! relation metadata. Schemas are usually loaded from YAML:
//!
//! ```yaml
//! version: 1
//! models:
//!   - name: shop.Customer
//!     fields:
//!       - name: id
//!         type: auto
//!       - name: email
//!         type: email
//!   - name: shop.Order
//!     fields:
//!       - name: id
//!         type: auto
//!       - name: customer
//!         type: foreign_key
//!         to: shop.Customer
//!       - name: note
//!         type: text
//!         nullable: true
//! ```

use crate::types::FieldType;
use crate::values::{Record, Value};
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};
use std::fs;
use std::path::Path;

// ============================================================================
// Error Types
// ============================================================================

/// Error type for schema operations.
#[derive(Debug, thiserror::Error)]
pub enum SchemaError {
    /// Error reading schema file
    #[error("Failed to read schema file: {0}")]
    IoError(#[from] std::io::Error),

    /// Error parsing YAML
    #[error("Failed to parse YAML: {0}")]
    YamlError(#[from] serde_yaml::Error),

    /// Model not found in schema
    #[error("Model not found: {0}")]
    ModelNotFound(String),

    /// Two models share a name
    #[error("Duplicate model: {0}")]
    DuplicateModel(String),

    /// Two fields of one model share a name
    #[error("Duplicate field '{field}' in model '{model}'")]
    DuplicateField { model: String, field: String },

    /// A foreign key does not say which model it points at
    #[error("Relation field '{field}' in model '{model}' has no target model")]
    MissingRelationTarget { model: String, field: String },

    /// A foreign key points at a model the schema does not define
    #[error("Relation field '{field}' in model '{model}' targets unknown model '{target}'")]
    UnknownRelationTarget {
        model: String,
        field: String,
        target: String,
    },
}

// ============================================================================
// Descriptors
// ============================================================================

/// A single field of a model.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FieldDescriptor {
    /// Field name
    pub name: String,

    /// Field type tag
    #[serde(rename = "type")]
    pub field_type: FieldType,

    /// Target model for relation fields
    #[serde(default, rename = "to", skip_serializing_if = "Option::is_none")]
    pub related_model: Option<String>,

    /// Whether this field may hold null
    #[serde(default)]
    pub nullable: bool,

    /// Value a blank record starts with
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default: Option<serde_yaml::Value>,
}

impl FieldDescriptor {
    /// Create a new non-nullable field.
    pub fn new(name: impl Into<String>, field_type: FieldType) -> Self {
        Self {
            name: name.into(),
            field_type,
            related_model: None,
            nullable: false,
            default: None,
        }
    }

    /// Create a foreign key field pointing at `target`.
    pub fn relation(name: impl Into<String>, target: impl Into<String>) -> Self {
        Self {
            related_model: Some(target.into()),
            ..Self::new(name, FieldType::ForeignKey)
        }
    }

    /// Mark this field as nullable.
    pub fn nullable(mut self) -> Self {
        self.nullable = true;
        self
    }

    /// Give this field a default value.
    pub fn with_default(mut self, default: serde_yaml::Value) -> Self {
        self.default = Some(default);
        self
    }

    /// Check if this field references another record.
    pub fn is_relation(&self) -> bool {
        self.field_type.is_relation()
    }

    /// Name of the referenced model, for relation fields.
    pub fn related_model(&self) -> Option<&str> {
        self.related_model.as_deref()
    }
}

/// A model: a named, ordered list of fields.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ModelDescriptor {
    /// Model name, e.g. `shop.Order`
    pub name: String,

    /// Field definitions in declaration order
    pub fields: Vec<FieldDescriptor>,
}

impl ModelDescriptor {
    /// Create a new model descriptor.
    pub fn new(name: impl Into<String>, fields: Vec<FieldDescriptor>) -> Self {
        Self {
            name: name.into(),
            fields,
        }
    }

    /// Get a field by name.
    pub fn get_field(&self, name: &str) -> Option<&FieldDescriptor> {
        self.fields.iter().find(|f| f.name == name)
    }

    /// Get all field names.
    pub fn field_names(&self) -> Vec<&str> {
        self.fields.iter().map(|f| f.name.as_str()).collect()
    }

    /// Relation fields only.
    pub fn relations(&self) -> impl Iterator<Item = &FieldDescriptor> {
        self.fields.iter().filter(|f| f.is_relation())
    }

    /// Construct a blank record carrying the declared defaults.
    pub fn new_record(&self) -> Record {
        let mut record = Record::new(self.name.clone());
        for field in &self.fields {
            if let Some(default) = &field.default {
                record.set_field(field.name.clone(), Value::from_yaml(default));
            }
        }
        record
    }
}

fn default_version() -> u32 {
    1
}

/// The full set of models known to the host.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelSchema {
    /// Schema version
    #[serde(default = "default_version")]
    pub version: u32,

    /// Model definitions
    pub models: Vec<ModelDescriptor>,

    /// Cached model lookup (not serialized)
    #[serde(skip)]
    model_map: HashMap<String, usize>,
}

impl ModelSchema {
    /// Build a schema from model descriptors, validating it.
    pub fn new(models: Vec<ModelDescriptor>) -> Result<Self, SchemaError> {
        let mut schema = Self {
            version: default_version(),
            models,
            model_map: HashMap::new(),
        };
        schema.build_model_map()?;
        schema.validate()?;
        Ok(schema)
    }

    /// Load schema from a YAML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, SchemaError> {
        let content = fs::read_to_string(path)?;
        Self::from_yaml(&content)
    }

    /// Parse schema from YAML string.
    pub fn from_yaml(yaml: &str) -> Result<Self, SchemaError> {
        let mut schema: ModelSchema = serde_yaml::from_str(yaml)?;
        schema.build_model_map()?;
        schema.validate()?;
        Ok(schema)
    }

    /// Build the internal model lookup map.
    fn build_model_map(&mut self) -> Result<(), SchemaError> {
        self.model_map.clear();
        for (idx, model) in self.models.iter().enumerate() {
            if self.model_map.insert(model.name.clone(), idx).is_some() {
                return Err(SchemaError::DuplicateModel(model.name.clone()));
            }
        }
        Ok(())
    }

    fn validate(&self) -> Result<(), SchemaError> {
        for model in &self.models {
            let mut seen = HashSet::new();
            for field in &model.fields {
                if !seen.insert(field.name.as_str()) {
                    return Err(SchemaError::DuplicateField {
                        model: model.name.clone(),
                        field: field.name.clone(),
                    });
                }

                if !field.is_relation() {
                    continue;
                }

                let target =
                    field
                        .related_model()
                        .ok_or_else(|| SchemaError::MissingRelationTarget {
                            model: model.name.clone(),
                            field: field.name.clone(),
                        })?;

                if !self.model_map.contains_key(target) {
                    return Err(SchemaError::UnknownRelationTarget {
                        model: model.name.clone(),
                        field: field.name.clone(),
                        target: target.to_string(),
                    });
                }
            }
        }
        Ok(())
    }

    /// Get a model by name.
    pub fn get_model(&self, name: &str) -> Option<&ModelDescriptor> {
        self.model_map
            .get(name)
            .and_then(|&idx| self.models.get(idx))
    }

    /// Get a model by name, failing if it is unknown.
    pub fn resolve(&self, name: &str) -> Result<&ModelDescriptor, SchemaError> {
        self.get_model(name)
            .ok_or_else(|| SchemaError::ModelNotFound(name.to_string()))
    }

    /// Get all model names in declaration order.
    pub fn model_names(&self) -> Vec<&str> {
        self.models.iter().map(|m| m.name.as_str()).collect()
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE_SCHEMA: &str = r#"
version: 1

models:
  - name: tests.SimpleCharModel
    fields:
      - name: id
        type: auto
      - name: name
        type: char

  - name: tests.RelationModel
    fields:
      - name: id
        type: auto
      - name: other
        type: foreign_key
        to: tests.SimpleCharModel
      - name: parent
        type: foreign_key
        to: tests.RelationModel
        nullable: true
      - name: status
        type: char
        default: draft
"#;

    #[test]
    fn test_parse_schema() {
        let schema = ModelSchema::from_yaml(SAMPLE_SCHEMA).unwrap();

        assert_eq!(schema.version, 1);
        assert_eq!(
            schema.model_names(),
            vec!["tests.SimpleCharModel", "tests.RelationModel"]
        );

        let relation = schema.get_model("tests.RelationModel").unwrap();
        assert_eq!(relation.field_names(), vec!["id", "other", "parent", "status"]);

        let other = relation.get_field("other").unwrap();
        assert!(other.is_relation());
        assert_eq!(other.related_model(), Some("tests.SimpleCharModel"));
        assert!(!other.nullable);

        let parent = relation.get_field("parent").unwrap();
        assert!(parent.nullable);
        assert_eq!(relation.relations().count(), 2);
    }

    #[test]
    fn test_new_record_carries_defaults() {
        let schema = ModelSchema::from_yaml(SAMPLE_SCHEMA).unwrap();
        let model = schema.get_model("tests.RelationModel").unwrap();

        let record = model.new_record();
        assert_eq!(record.model, "tests.RelationModel");
        assert_eq!(record.field_count(), 1);
        assert_eq!(
            record.get_field("status"),
            Some(&Value::String("draft".to_string()))
        );
        assert!(record.pk.is_none());
    }

    #[test]
    fn test_resolve_unknown_model() {
        let schema = ModelSchema::from_yaml(SAMPLE_SCHEMA).unwrap();

        assert!(schema.resolve("tests.SimpleCharModel").is_ok());
        let result = schema.resolve("tests.Missing");
        assert!(matches!(result, Err(SchemaError::ModelNotFound(name)) if name == "tests.Missing"));
    }

    #[test]
    fn test_duplicate_model() {
        let result = ModelSchema::new(vec![
            ModelDescriptor::new("a.A", vec![]),
            ModelDescriptor::new("a.A", vec![]),
        ]);
        assert!(matches!(result, Err(SchemaError::DuplicateModel(_))));
    }

    #[test]
    fn test_duplicate_field() {
        let result = ModelSchema::new(vec![ModelDescriptor::new(
            "a.A",
            vec![
                FieldDescriptor::new("x", FieldType::Integer),
                FieldDescriptor::new("x", FieldType::Text),
            ],
        )]);
        assert!(matches!(result, Err(SchemaError::DuplicateField { .. })));
    }

    #[test]
    fn test_relation_without_target() {
        let yaml = r#"
models:
  - name: a.A
    fields:
      - name: other
        type: foreign_key
"#;
        let result = ModelSchema::from_yaml(yaml);
        assert!(matches!(
            result,
            Err(SchemaError::MissingRelationTarget { .. })
        ));
    }

    #[test]
    fn test_relation_to_unknown_model() {
        let result = ModelSchema::new(vec![ModelDescriptor::new(
            "a.A",
            vec![FieldDescriptor::relation("other", "a.Missing")],
        )]);
        match result {
            Err(SchemaError::UnknownRelationTarget { target, .. }) => {
                assert_eq!(target, "a.Missing")
            }
            other => panic!("Expected UnknownRelationTarget, got {other:?}"),
        }
    }

    #[test]
    fn test_version_defaults_to_one() {
        let schema = ModelSchema::from_yaml("models: []").unwrap();
        assert_eq!(schema.version, 1);
        assert!(schema.model_names().is_empty());
    }
}
