//! Value and record representations.
//!
//! `Value` is what a generator produces and what a record field holds.
//! `Record` is one instance of a model under construction or after it has
//! been persisted by a store.

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use rust_decimal::Decimal;
use serde_yaml::Value as YamlValue;
use std::collections::HashMap;
use uuid::Uuid;

/// A single field value.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// Absent value
    Null,

    /// Boolean value
    Bool(bool),

    /// Signed integer
    Int(i64),

    /// Floating point
    Float(f64),

    /// Exact decimal
    Decimal(Decimal),

    /// Text
    String(String),

    /// Timestamp
    DateTime(DateTime<Utc>),

    /// Calendar date
    Date(NaiveDate),

    /// Time of day
    Time(NaiveTime),

    /// UUID value
    Uuid(Uuid),

    /// Free-form JSON document
    Json(serde_json::Value),

    /// Reference to a persisted record
    Relation(RecordRef),
}

impl Value {
    /// Convert a YAML value to a `Value`.
    ///
    /// Scalars map onto the matching variant; sequences and mappings become
    /// `Value::Json`.
    pub fn from_yaml(yaml: &YamlValue) -> Value {
        match yaml {
            YamlValue::Null => Value::Null,
            YamlValue::Bool(b) => Value::Bool(*b),
            YamlValue::Number(n) => {
                if let Some(i) = n.as_i64() {
                    Value::Int(i)
                } else if let Some(f) = n.as_f64() {
                    Value::Float(f)
                } else {
                    Value::String(n.to_string())
                }
            }
            YamlValue::String(s) => Value::String(s.clone()),
            YamlValue::Sequence(_) | YamlValue::Mapping(_) => serde_json::to_value(yaml)
                .map(Value::Json)
                .unwrap_or(Value::Null),
            YamlValue::Tagged(tagged) => Value::from_yaml(&tagged.value),
        }
    }

    /// Short name of the variant, used in error messages.
    pub fn kind(&self) -> &'static str {
        match self {
            Value::Null => "null",
            Value::Bool(_) => "bool",
            Value::Int(_) => "int",
            Value::Float(_) => "float",
            Value::Decimal(_) => "decimal",
            Value::String(_) => "string",
            Value::DateTime(_) => "datetime",
            Value::Date(_) => "date",
            Value::Time(_) => "time",
            Value::Uuid(_) => "uuid",
            Value::Json(_) => "json",
            Value::Relation(_) => "relation",
        }
    }

    /// Check if this value is null.
    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Try to get this value as a boolean.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Try to get this value as an i64.
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Self::Int(i) => Some(*i),
            _ => None,
        }
    }

    /// Try to get this value as an f64.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Float(f) => Some(*f),
            _ => None,
        }
    }

    /// Try to get this value as a decimal.
    pub fn as_decimal(&self) -> Option<&Decimal> {
        match self {
            Self::Decimal(d) => Some(d),
            _ => None,
        }
    }

    /// Try to get this value as a string reference.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(s),
            _ => None,
        }
    }

    /// Try to get this value as a timestamp.
    pub fn as_datetime(&self) -> Option<&DateTime<Utc>> {
        match self {
            Self::DateTime(dt) => Some(dt),
            _ => None,
        }
    }

    /// Try to get this value as a date.
    pub fn as_date(&self) -> Option<NaiveDate> {
        match self {
            Self::Date(d) => Some(*d),
            _ => None,
        }
    }

    /// Try to get this value as a time of day.
    pub fn as_time(&self) -> Option<NaiveTime> {
        match self {
            Self::Time(t) => Some(*t),
            _ => None,
        }
    }

    /// Try to get this value as a UUID.
    pub fn as_uuid(&self) -> Option<&Uuid> {
        match self {
            Self::Uuid(u) => Some(u),
            _ => None,
        }
    }

    /// Try to get this value as a record reference.
    pub fn as_relation(&self) -> Option<&RecordRef> {
        match self {
            Self::Relation(r) => Some(r),
            _ => None,
        }
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::Bool(value)
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Value::Int(value)
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Value::Float(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::String(value.to_string())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::String(value)
    }
}

impl From<DateTime<Utc>> for Value {
    fn from(value: DateTime<Utc>) -> Self {
        Value::DateTime(value)
    }
}

impl From<Decimal> for Value {
    fn from(value: Decimal) -> Self {
        Value::Decimal(value)
    }
}

/// Pointer from a relation field to the record it references.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RecordRef {
    /// Name of the referenced model
    pub model: String,
    /// Primary key assigned by the store, if any
    pub pk: Option<u64>,
}

/// One instance of a model.
#[derive(Debug, Clone, PartialEq)]
pub struct Record {
    /// Name of the model this record belongs to
    pub model: String,

    /// Primary key, set by the store on insert
    pub pk: Option<u64>,

    /// Field values by name; fields never assigned are absent
    fields: HashMap<String, Value>,
}

impl Record {
    /// Create an empty, unsaved record.
    pub fn new(model: impl Into<String>) -> Self {
        Self {
            model: model.into(),
            pk: None,
            fields: HashMap::new(),
        }
    }

    /// Get a field value by name.
    pub fn get_field(&self, name: &str) -> Option<&Value> {
        self.fields.get(name)
    }

    /// Set a field value, replacing any previous one.
    pub fn set_field(&mut self, name: impl Into<String>, value: Value) {
        self.fields.insert(name.into(), value);
    }

    /// Builder-style variant of [`Record::set_field`].
    pub fn with_field(mut self, name: impl Into<String>, value: Value) -> Self {
        self.set_field(name, value);
        self
    }

    /// All assigned fields.
    pub fn fields(&self) -> &HashMap<String, Value> {
        &self.fields
    }

    /// Number of assigned fields.
    pub fn field_count(&self) -> usize {
        self.fields.len()
    }

    /// Check if a store has assigned this record a primary key.
    pub fn is_persisted(&self) -> bool {
        self.pk.is_some()
    }

    /// Reference to this record, suitable for a relation field.
    pub fn to_ref(&self) -> RecordRef {
        RecordRef {
            model: self.model.clone(),
            pk: self.pk,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_yaml_scalars() {
        assert_eq!(Value::from_yaml(&YamlValue::Null), Value::Null);
        assert_eq!(Value::from_yaml(&YamlValue::Bool(true)), Value::Bool(true));

        let int: YamlValue = serde_yaml::from_str("42").unwrap();
        assert_eq!(Value::from_yaml(&int), Value::Int(42));

        let float: YamlValue = serde_yaml::from_str("1.25").unwrap();
        assert_eq!(Value::from_yaml(&float), Value::Float(1.25));

        let string = YamlValue::String("hello".to_string());
        assert_eq!(Value::from_yaml(&string), Value::String("hello".to_string()));
    }

    #[test]
    fn test_yaml_collections_become_json() {
        let yaml: YamlValue = serde_yaml::from_str("{ version: 1, tags: [a, b] }").unwrap();
        if let Value::Json(json) = Value::from_yaml(&yaml) {
            assert_eq!(json["version"], serde_json::json!(1));
            assert_eq!(json["tags"], serde_json::json!(["a", "b"]));
        } else {
            panic!("Expected Json");
        }
    }

    #[test]
    fn test_record_fields() {
        let mut record = Record::new("app.Thing").with_field("name", Value::from("a"));
        record.set_field("name", Value::from("b"));
        record.set_field("count", Value::Int(3));

        assert_eq!(record.field_count(), 2);
        assert_eq!(record.get_field("name").and_then(Value::as_str), Some("b"));
        assert!(record.get_field("missing").is_none());
        assert!(!record.is_persisted());
    }

    #[test]
    fn test_to_ref() {
        let mut record = Record::new("app.Thing");
        record.pk = Some(7);

        let reference = record.to_ref();
        assert_eq!(reference.model, "app.Thing");
        assert_eq!(reference.pk, Some(7));
    }
}
