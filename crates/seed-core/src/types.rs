//! Field type tags for data-seeder models.
//!
//! `FieldType` is the closed set of column kinds a model field can declare.
//! The generator crate dispatches on it to pick a value strategy, and the
//! storage layer uses it to check that a value fits the column.
//!
//! # YAML Format
//!
//! Tags are written in snake_case:
//! ```yaml
//! type: char
//! type: positive_small_integer
//! type: foreign_key
//! ```

use crate::values::Value;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Kind of a model field, as declared by the host schema.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldType {
    /// Auto-incrementing 32-bit primary key, filled in by the store
    Auto,
    /// Auto-incrementing 64-bit primary key, filled in by the store
    BigAuto,
    /// 64-bit signed integer
    BigInteger,
    /// Boolean
    Boolean,
    /// Bounded text
    Char,
    /// Calendar date
    Date,
    /// Timestamp
    DateTime,
    /// Exact decimal
    Decimal,
    /// Email address
    Email,
    /// Floating point
    Float,
    /// 32-bit signed integer
    Integer,
    /// IPv4 address in dotted-quad form
    IpAddress,
    /// Boolean that also admits null
    NullBoolean,
    /// Non-negative integer
    PositiveInteger,
    /// Non-negative small integer
    PositiveSmallInteger,
    /// 16-bit signed integer
    SmallInteger,
    /// Unbounded text
    Text,
    /// Time of day
    Time,
    /// URL
    Url,
    /// UUID
    Uuid,
    /// Raw bytes
    Binary,
    /// JSON document
    Json,
    /// Reference to a record of another (or the same) model
    ForeignKey,
}

impl FieldType {
    /// Every field type tag, in declaration order.
    pub const ALL: [FieldType; 23] = [
        FieldType::Auto,
        FieldType::BigAuto,
        FieldType::BigInteger,
        FieldType::Boolean,
        FieldType::Char,
        FieldType::Date,
        FieldType::DateTime,
        FieldType::Decimal,
        FieldType::Email,
        FieldType::Float,
        FieldType::Integer,
        FieldType::IpAddress,
        FieldType::NullBoolean,
        FieldType::PositiveInteger,
        FieldType::PositiveSmallInteger,
        FieldType::SmallInteger,
        FieldType::Text,
        FieldType::Time,
        FieldType::Url,
        FieldType::Uuid,
        FieldType::Binary,
        FieldType::Json,
        FieldType::ForeignKey,
    ];

    /// The snake_case tag used in schema files.
    pub fn as_str(&self) -> &'static str {
        match self {
            FieldType::Auto => "auto",
            FieldType::BigAuto => "big_auto",
            FieldType::BigInteger => "big_integer",
            FieldType::Boolean => "boolean",
            FieldType::Char => "char",
            FieldType::Date => "date",
            FieldType::DateTime => "date_time",
            FieldType::Decimal => "decimal",
            FieldType::Email => "email",
            FieldType::Float => "float",
            FieldType::Integer => "integer",
            FieldType::IpAddress => "ip_address",
            FieldType::NullBoolean => "null_boolean",
            FieldType::PositiveInteger => "positive_integer",
            FieldType::PositiveSmallInteger => "positive_small_integer",
            FieldType::SmallInteger => "small_integer",
            FieldType::Text => "text",
            FieldType::Time => "time",
            FieldType::Url => "url",
            FieldType::Uuid => "uuid",
            FieldType::Binary => "binary",
            FieldType::Json => "json",
            FieldType::ForeignKey => "foreign_key",
        }
    }

    /// Check if this field references another record.
    pub fn is_relation(&self) -> bool {
        matches!(self, FieldType::ForeignKey)
    }

    /// Check if the store assigns this field's value on insert.
    pub fn is_auto(&self) -> bool {
        matches!(self, FieldType::Auto | FieldType::BigAuto)
    }

    /// Check if a value can be stored in a column of this type.
    ///
    /// `Null` is always accepted here; nullability is a property of the
    /// field, not of its type, and is checked by the store.
    pub fn accepts(&self, value: &Value) -> bool {
        match (self, value) {
            (_, Value::Null) => true,
            (FieldType::Binary | FieldType::Json, _) => true,
            (
                FieldType::Auto
                | FieldType::BigAuto
                | FieldType::BigInteger
                | FieldType::Integer
                | FieldType::SmallInteger,
                Value::Int(_),
            ) => true,
            (FieldType::PositiveInteger | FieldType::PositiveSmallInteger, Value::Int(v)) => {
                *v >= 0
            }
            (FieldType::Boolean | FieldType::NullBoolean, Value::Bool(_)) => true,
            (
                FieldType::Char
                | FieldType::Text
                | FieldType::Email
                | FieldType::Url
                | FieldType::IpAddress,
                Value::String(_),
            ) => true,
            (FieldType::Float, Value::Float(_) | Value::Int(_)) => true,
            (FieldType::Decimal, Value::Decimal(_) | Value::Float(_) | Value::Int(_)) => true,
            (FieldType::Date, Value::Date(_)) => true,
            (FieldType::DateTime, Value::DateTime(_)) => true,
            (FieldType::Time, Value::Time(_)) => true,
            (FieldType::Uuid, Value::Uuid(_)) => true,
            (FieldType::ForeignKey, Value::Relation(_) | Value::Int(_)) => true,
            _ => false,
        }
    }
}

impl fmt::Display for FieldType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::values::RecordRef;

    #[test]
    fn test_yaml_tags_round_trip_through_as_str() {
        for field_type in FieldType::ALL {
            let parsed: FieldType = serde_yaml::from_str(field_type.as_str()).unwrap();
            assert_eq!(parsed, field_type);
        }
    }

    #[test]
    fn test_unknown_tag_is_rejected() {
        let result: Result<FieldType, _> = serde_yaml::from_str("many_to_many");
        assert!(result.is_err());
    }

    #[test]
    fn test_only_foreign_key_is_relation() {
        let relations: Vec<_> = FieldType::ALL
            .iter()
            .filter(|t| t.is_relation())
            .collect();
        assert_eq!(relations, vec![&FieldType::ForeignKey]);
    }

    #[test]
    fn test_accepts() {
        assert!(FieldType::Integer.accepts(&Value::Int(-5)));
        assert!(!FieldType::PositiveInteger.accepts(&Value::Int(-5)));
        assert!(FieldType::PositiveInteger.accepts(&Value::Int(0)));
        assert!(!FieldType::Integer.accepts(&Value::String("10".to_string())));
        assert!(FieldType::Char.accepts(&Value::String("abc".to_string())));
        assert!(FieldType::Decimal.accepts(&Value::Float(1.5)));
        assert!(!FieldType::Boolean.accepts(&Value::Int(1)));
        assert!(FieldType::Json.accepts(&Value::Bool(true)));
        assert!(FieldType::Text.accepts(&Value::Null));
        assert!(FieldType::ForeignKey.accepts(&Value::Relation(RecordRef {
            model: "app.Other".to_string(),
            pk: Some(1),
        })));
    }
}
