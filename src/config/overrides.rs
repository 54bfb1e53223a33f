//! `FIELD=VALUE` override parsing.
//!
//! Override values arrive as strings on the command line and are converted
//! according to the type of the field they target, separately for each
//! model being seeded.

use anyhow::Context;
use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, Utc};
use rust_decimal::Decimal;
use seed_core::{FieldType, ModelDescriptor, RecordRef, Value};
use std::collections::HashMap;
use std::str::FromStr;
use tracing::warn;

/// Literal that sets a field to null regardless of its type.
pub const NULL_LITERAL: &str = "null";

/// Split `FIELD=VALUE` at the first `=`.
pub fn parse_override(s: &str) -> anyhow::Result<(String, String)> {
    let (field, value) = s
        .split_once('=')
        .with_context(|| format!("Invalid override '{s}': expected FIELD=VALUE"))?;

    let field = field.trim();
    if field.is_empty() {
        anyhow::bail!("Invalid override '{s}': field name is empty");
    }
    Ok((field.to_string(), value.to_string()))
}

/// Convert a raw override string into a value for `field_type`.
///
/// `related_model` is the target of a foreign key, whose override is the
/// primary key of an existing record.
pub fn parse_value(
    field_type: FieldType,
    related_model: Option<&str>,
    raw: &str,
) -> anyhow::Result<Value> {
    if raw == NULL_LITERAL {
        return Ok(Value::Null);
    }

    let value = match field_type {
        FieldType::Auto
        | FieldType::BigAuto
        | FieldType::BigInteger
        | FieldType::Integer
        | FieldType::SmallInteger
        | FieldType::PositiveInteger
        | FieldType::PositiveSmallInteger => Value::Int(
            raw.trim()
                .parse()
                .with_context(|| format!("Invalid integer value: {raw}"))?,
        ),
        FieldType::Boolean | FieldType::NullBoolean => Value::Bool(parse_bool(raw)?),
        FieldType::Char
        | FieldType::Text
        | FieldType::Email
        | FieldType::Url
        | FieldType::IpAddress
        | FieldType::Binary => Value::String(raw.to_string()),
        FieldType::Float => Value::Float(
            raw.trim()
                .parse()
                .with_context(|| format!("Invalid float value: {raw}"))?,
        ),
        FieldType::Decimal => Value::Decimal(
            Decimal::from_str(raw.trim())
                .with_context(|| format!("Invalid decimal value: {raw}"))?,
        ),
        FieldType::Date => Value::Date(
            NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
                .with_context(|| format!("Invalid date value (expected YYYY-MM-DD): {raw}"))?,
        ),
        FieldType::DateTime => Value::DateTime(
            parse_datetime(raw.trim())
                .with_context(|| format!("Invalid datetime value: {raw}"))?,
        ),
        FieldType::Time => Value::Time(
            NaiveTime::parse_from_str(raw.trim(), "%H:%M:%S")
                .with_context(|| format!("Invalid time value (expected HH:MM:SS): {raw}"))?,
        ),
        FieldType::Uuid => Value::Uuid(
            uuid::Uuid::parse_str(raw.trim())
                .with_context(|| format!("Invalid UUID value: {raw}"))?,
        ),
        FieldType::Json => Value::Json(
            serde_json::from_str(raw).with_context(|| format!("Invalid JSON value: {raw}"))?,
        ),
        FieldType::ForeignKey => {
            let model = related_model
                .with_context(|| format!("Relation override '{raw}' has no target model"))?;
            let pk: u64 = raw
                .trim()
                .parse()
                .with_context(|| format!("Invalid primary key for {model}: {raw}"))?;
            Value::Relation(RecordRef {
                model: model.to_string(),
                pk: Some(pk),
            })
        }
    };

    Ok(value)
}

fn parse_bool(raw: &str) -> anyhow::Result<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" => Ok(true),
        "false" | "0" | "no" => Ok(false),
        _ => anyhow::bail!("Invalid boolean value: {raw}"),
    }
}

fn parse_datetime(s: &str) -> Option<DateTime<Utc>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.with_timezone(&Utc));
    }

    for format in ["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S"] {
        if let Ok(naive) = NaiveDateTime::parse_from_str(s, format) {
            return Some(naive.and_utc());
        }
    }

    None
}

/// Build the override map for one model.
///
/// Fields the model does not declare are skipped with a warning, since the
/// same overrides are applied to every model named on the command line.
pub fn overrides_for_model(
    model: &ModelDescriptor,
    raw: &[(String, String)],
) -> anyhow::Result<HashMap<String, Value>> {
    let mut values = HashMap::new();

    for (name, raw_value) in raw {
        let Some(field) = model.get_field(name) else {
            warn!(
                "Ignoring override for '{}': {} has no such field",
                name, model.name
            );
            continue;
        };

        let value = parse_value(field.field_type, field.related_model(), raw_value)
            .with_context(|| format!("Invalid override for {}.{}", model.name, name))?;
        values.insert(name.clone(), value);
    }

    Ok(values)
}
